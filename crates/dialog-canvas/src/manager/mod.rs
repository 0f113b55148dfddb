//! Manager coordinating dialogs, hit maps and pointer routing
//!
//! This module is split into focused submodules:
//! - `widgets`: Dialog and widget lifecycle, hit map maintenance
//! - `input`: Pointer and key routing
//! - `rendering`: Back-to-front render list for the external renderer

mod widgets;
mod input;
mod rendering;

use std::collections::VecDeque;
use tracing::warn;
use crate::config::ManagerConfig;
use crate::error::UiError;
use crate::hit::HitMap;
use crate::input::{PointerRouter, UiEvent};
use crate::layout::Resolved;
use crate::style::{Style, StyleRegistry};
use crate::widget::{Widget, WidgetId, WidgetTree};

pub use rendering::{RenderItem, TextView};

/// Owner of every dialog and the single entry point for input.
///
/// Holds:
/// - the widget tree (arena of dialogs and their widgets)
/// - the style registry widgets resolve their style from
/// - the dialog-level hit map
/// - the pointer router (hover/focus of dialogs, drag, key target)
/// - the ordered event queue and the redraw signal
pub struct Manager {
    config: ManagerConfig,
    tree: WidgetTree,
    /// Dialogs in opening order
    roots: Vec<WidgetId>,
    styles: StyleRegistry,
    /// Dialog footprints on the canvas
    hit_map: HitMap,
    router: PointerRouter,
    events: VecDeque<UiEvent>,
    warnings: Vec<UiError>,
    redraw_handler: Option<Box<dyn FnMut()>>,
    redraw_requests: u64,
    next_id: u64,
    /// Monotonic clock for dialog z-order
    next_z: u64,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl Manager {
    /// Create a manager with no dialogs
    pub fn new(config: ManagerConfig) -> Self {
        let (width, height) = config.surface().to_pixels();
        Self {
            tree: WidgetTree::new(config.surface(), config.accumulation),
            config,
            roots: Vec::new(),
            styles: StyleRegistry::new(),
            hit_map: HitMap::new(width, height),
            router: PointerRouter::new(),
            events: VecDeque::new(),
            warnings: Vec::new(),
            redraw_handler: None,
            redraw_requests: 0,
            next_id: 1,
            next_z: 1,
        }
    }

    #[inline]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    #[inline]
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Register a named style. Affects widgets created afterwards.
    pub fn register_style(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name, style);
    }

    #[inline]
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.tree.get(id)
    }

    /// Current geometry of a widget
    pub fn resolved(&self, id: WidgetId) -> Result<Resolved, UiError> {
        self.tree.resolve(id)
    }

    /// Open dialogs in opening order
    #[inline]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    #[inline]
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    #[inline]
    pub fn router(&self) -> &PointerRouter {
        &self.router
    }

    /// Dialog a widget belongs to
    pub fn dialog_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.tree.get(id).map(|w| w.root())
    }

    /// Dialog holding manager-level focus
    pub fn focused_dialog(&self) -> Option<WidgetId> {
        self.router.cursor().focused()
    }

    /// Widget that receives key input
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.router.focus_leaf()
    }

    /// Take all events emitted since the last drain, in order
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        self.events.drain(..).collect()
    }

    /// Pending events without draining them
    pub fn events(&self) -> impl Iterator<Item = &UiEvent> {
        self.events.iter()
    }

    /// Recoverable problems recorded since the last `take_warnings`
    #[inline]
    pub fn warnings(&self) -> &[UiError] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<UiError> {
        std::mem::take(&mut self.warnings)
    }

    /// Install a callback invoked on every redraw request
    pub fn set_redraw_handler(&mut self, handler: impl FnMut() + 'static) {
        self.redraw_handler = Some(Box::new(handler));
    }

    pub fn clear_redraw_handler(&mut self) {
        self.redraw_handler = None;
    }

    /// Number of redraw requests since the last `take_redraw`
    #[inline]
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Check and reset the pending redraw counter
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requests) > 0
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        if let Some(handler) = self.redraw_handler.as_mut() {
            handler();
        }
    }

    pub(crate) fn emit(&mut self, event: UiEvent) {
        self.events.push_back(event);
    }

    pub(crate) fn warn(&mut self, err: UiError) {
        warn!(error = %err, "degraded widget configuration");
        self.warnings.push(err);
    }

    /// Advance the z clock
    pub(crate) fn tick(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }
}
