//! Input routing module
//!
//! Pointer and key state machine: per-scope hover/focus tracking, the
//! active drag and the events emitted while routing.

mod cursor;
mod drag;
mod event;
mod key;
mod result;
mod router;

pub use cursor::{Cursor, Transition};
pub use drag::DragState;
pub use event::UiEvent;
pub use key::Key;
pub use result::InputResult;
pub use router::PointerRouter;

use crate::widget::WidgetId;

/// Length of the shared prefix of two root-to-leaf chains
pub(crate) fn common_prefix(a: &[WidgetId], b: &[WidgetId]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix(&[1, 2, 3], &[1, 2, 4]), 2);
        assert_eq!(common_prefix(&[1, 2], &[1, 2, 3]), 2);
        assert_eq!(common_prefix(&[], &[1]), 0);
        assert_eq!(common_prefix(&[5], &[6]), 0);
    }
}
