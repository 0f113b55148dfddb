//! Events emitted while routing input

use serde::Serialize;
use crate::widget::WidgetId;
use super::Key;

/// State change a host may react to, in emission order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiEvent {
    HoverGained { id: WidgetId },
    HoverLost { id: WidgetId },
    FocusGained { id: WidgetId },
    FocusLost { id: WidgetId },
    /// A press was claimed; `x`/`y` are canvas coordinates
    Pressed { id: WidgetId, x: f32, y: f32 },
    /// The button went up over `id` (or over nothing)
    Released { id: Option<WidgetId>, x: f32, y: f32 },
    /// A drag committed a new relative position
    Moved { id: WidgetId, x: f32, y: f32 },
    Key { id: WidgetId, key: Key },
}

impl UiEvent {
    /// Widget the event concerns
    pub fn id(&self) -> Option<WidgetId> {
        match self {
            UiEvent::HoverGained { id }
            | UiEvent::HoverLost { id }
            | UiEvent::FocusGained { id }
            | UiEvent::FocusLost { id }
            | UiEvent::Pressed { id, .. }
            | UiEvent::Moved { id, .. }
            | UiEvent::Key { id, .. } => Some(*id),
            UiEvent::Released { id, .. } => *id,
        }
    }

    #[inline]
    pub fn is_focus(&self) -> bool {
        matches!(self, UiEvent::FocusGained { .. } | UiEvent::FocusLost { .. })
    }

    #[inline]
    pub fn is_hover(&self) -> bool {
        matches!(self, UiEvent::HoverGained { .. } | UiEvent::HoverLost { .. })
    }
}
