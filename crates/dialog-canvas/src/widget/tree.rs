//! Arena of widgets keyed by id

use std::collections::HashMap;
use tracing::trace;
use crate::error::UiError;
use crate::layout::{Accumulation, Resolved};
use crate::math::{Size, Vec2};
use super::{Widget, WidgetId};

/// Deepest nesting accepted before a parent chain is treated as corrupt
pub const MAX_DEPTH: usize = 64;

/// Owns every widget and resolves geometry through parent chains
#[derive(Debug)]
pub struct WidgetTree {
    widgets: HashMap<WidgetId, Widget>,
    /// Extent dialogs resolve against
    surface: Size,
    accumulation: Accumulation,
}

impl WidgetTree {
    pub fn new(surface: Size, accumulation: Accumulation) -> Self {
        Self {
            widgets: HashMap::new(),
            surface,
            accumulation,
        }
    }

    #[inline]
    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn set_surface(&mut self, surface: Size) {
        self.surface = surface;
    }

    #[inline]
    pub fn accumulation(&self) -> Accumulation {
        self.accumulation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }

    /// Look up a widget, failing with `InvalidOperation` when absent
    pub fn require(&self, id: WidgetId) -> Result<&Widget, UiError> {
        self.get(id)
            .ok_or_else(|| UiError::invalid(format!("unknown widget {}", id)))
    }

    pub fn require_mut(&mut self, id: WidgetId) -> Result<&mut Widget, UiError> {
        self.get_mut(id)
            .ok_or_else(|| UiError::invalid(format!("unknown widget {}", id)))
    }

    /// Add a widget and link it under its parent
    pub(crate) fn insert(&mut self, widget: Widget) -> Result<(), UiError> {
        let id = widget.id;
        if self.widgets.contains_key(&id) {
            return Err(UiError::invalid(format!("duplicate widget {}", id)));
        }
        if let Some(parent) = widget.parent {
            self.require_mut(parent)?.children.push(id);
        }
        self.widgets.insert(id, widget);
        Ok(())
    }

    /// Chain from the dialog down to `id`, both included.
    ///
    /// Fails on unknown ids, cycles and chains deeper than [`MAX_DEPTH`].
    pub fn ancestors(&self, id: WidgetId) -> Result<Vec<WidgetId>, UiError> {
        let mut chain = vec![id];
        let mut current = self.require(id)?;

        while let Some(parent) = current.parent {
            if chain.contains(&parent) {
                return Err(UiError::invalid(format!(
                    "cyclic parent chain at widget {}",
                    parent
                )));
            }
            if chain.len() >= MAX_DEPTH {
                return Err(UiError::invalid(format!(
                    "widget {} nested deeper than {}",
                    id, MAX_DEPTH
                )));
            }
            chain.push(parent);
            current = self.require(parent)?;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Resolve the geometry of `id`, walking down from its dialog
    pub fn resolve(&self, id: WidgetId) -> Result<Resolved, UiError> {
        let mut parent: Option<Resolved> = None;
        for member in self.ancestors(id)? {
            parent = Some(self.resolve_step(member, parent.as_ref())?);
        }
        parent.ok_or_else(|| UiError::invalid(format!("unknown widget {}", id)))
    }

    fn resolve_step(&self, id: WidgetId, parent: Option<&Resolved>) -> Result<Resolved, UiError> {
        let widget = self.require(id)?;
        let extent = parent.map_or(self.surface, |p| p.size);
        let relative = widget.dimensions.relative(extent)?;
        let size = widget.dimensions.size(extent)?;
        Ok(Resolved {
            relative,
            absolute: self.accumulation.absolute(relative, parent),
            size,
        })
    }

    /// Z-order of the dialog `id` belongs to
    pub fn z_order(&self, id: WidgetId) -> Option<u64> {
        let root = self.get(id)?.root;
        self.get(root).map(|w| w.dimensions.z_order())
    }

    /// Set the z-order of the dialog `id` belongs to
    pub fn set_z_order(&mut self, id: WidgetId, z: u64) -> Result<(), UiError> {
        let root = self.require(id)?.root;
        self.require_mut(root)?.dimensions.set_z_order(z);
        Ok(())
    }

    /// `id` followed by all its descendants, pre-order with children in
    /// creation order
    pub fn subtree(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(widget) = self.get(current) else {
                continue;
            };
            order.push(current);
            stack.extend(widget.children.iter().rev());
        }
        order
    }

    /// Detach `id` from its parent and drop it with all descendants.
    /// Returns the removed ids.
    pub(crate) fn remove_subtree(&mut self, id: WidgetId) -> Result<Vec<WidgetId>, UiError> {
        let parent = self.require(id)?.parent;
        if let Some(parent) = parent.and_then(|p| self.widgets.get_mut(&p)) {
            parent.children.retain(|&c| c != id);
        }

        let removed = self.subtree(id);
        for member in &removed {
            self.widgets.remove(member);
        }
        Ok(removed)
    }

    /// Forget every pattern-derived position
    pub fn invalidate_all(&mut self) {
        for widget in self.widgets.values_mut() {
            widget.dimensions.invalidate();
        }
    }

    /// Rebuild the hit map of `id` from its clickable children.
    ///
    /// Children that fail to resolve are left out. Returns the number of
    /// registered footprints.
    pub fn rebuild_child_map(&mut self, id: WidgetId) -> Result<usize, UiError> {
        let owner = self.resolve(id)?;
        let (width, height) = owner.size.to_pixels();

        let mut entries = Vec::new();
        for &child in &self.require(id)?.children {
            let Some(widget) = self.get(child) else {
                continue;
            };
            if !widget.dimensions.clickable() {
                continue;
            }
            match self.resolve(child) {
                Ok(resolved) => entries.push((child, resolved.local_rect().to_pixels())),
                Err(err) => trace!(widget = child, error = %err, "child left out of hit map"),
            }
        }

        let map = &mut self.require_mut(id)?.hit_map;
        map.reset(width, height);
        for (child, bounds) in entries {
            map.insert(child, bounds);
        }
        Ok(map.len())
    }

    /// Follow child hit maps from `id` down to the deepest widget under
    /// `local`, a point in `id`'s own space. The returned chain starts
    /// with `id`.
    pub fn descend(&self, id: WidgetId, local: Vec2) -> Vec<WidgetId> {
        let mut path = vec![id];
        let mut current = id;
        let mut point = local;

        while path.len() < MAX_DEPTH {
            let Some(widget) = self.get(current) else {
                break;
            };
            let (px, py) = point.to_pixel();
            let Some(child) = widget.hit_map.hit(px, py) else {
                break;
            };
            if child == current || path.contains(&child) {
                break;
            }
            let Ok(extent) = self.resolve(current).map(|r| r.size) else {
                break;
            };
            let Some(relative) = self
                .get(child)
                .and_then(|c| c.dimensions.relative(extent).ok())
            else {
                break;
            };
            path.push(child);
            point = point - relative;
            current = child;
        }
        path
    }
}
