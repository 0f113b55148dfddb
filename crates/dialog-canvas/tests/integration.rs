//! Integration tests for Manager
//!
//! These tests drive the full workflow through the public API:
//! - Layout resolution with percentages and drags
//! - Press routing, click-to-raise and drag commits
//! - Hover and focus ordering across nesting scopes
//! - Key routing into input widgets
//! - Degraded configuration and style lookups

use dialog_canvas::{
    Accumulation, InputResult, Key, Manager, ManagerConfig, Style, UiError, UiEvent,
    WidgetConfig, WidgetKind,
};

fn manager() -> Manager {
    Manager::new(ManagerConfig::new(800.0, 600.0))
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_percent_position_of_child() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 480, 300)).unwrap();
    let child = manager
        .add_widget(dialog, WidgetConfig::new("50%", 0, 200, 20))
        .unwrap();

    let resolved = manager.resolved(child).unwrap();
    assert!((resolved.relative.x - 240.0).abs() < 0.001);
    assert!((resolved.size.width - 200.0).abs() < 0.001);
}

#[test]
fn test_grandchild_absolute_position_chains() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 400, 400)).unwrap();
    let panel = manager.add_widget(dialog, WidgetConfig::new(50, 50, 200, 200)).unwrap();
    let leaf = manager.add_widget(panel, WidgetConfig::new(10, 10, 20, 20)).unwrap();

    let resolved = manager.resolved(leaf).unwrap();
    assert!((resolved.absolute.x - 160.0).abs() < 0.001);
    assert!((resolved.absolute.y - 160.0).abs() < 0.001);
    assert_eq!(manager.widget_at(165.0, 165.0), Some(leaf));
}

#[test]
fn test_parent_relative_accumulation_is_configurable() {
    let config = ManagerConfig::new(800.0, 600.0).with_accumulation(Accumulation::ParentRelative);
    let mut manager = Manager::new(config);
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 400, 400)).unwrap();
    let panel = manager.add_widget(dialog, WidgetConfig::new(50, 50, 200, 200)).unwrap();
    let leaf = manager.add_widget(panel, WidgetConfig::new(10, 10, 20, 20)).unwrap();

    assert!((manager.resolved(panel).unwrap().absolute.x - 150.0).abs() < 0.001);
    assert!((manager.resolved(leaf).unwrap().absolute.x - 60.0).abs() < 0.001);
}

// =============================================================================
// Press and drag
// =============================================================================

#[test]
fn test_drag_preserves_click_offset() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 200, 200)).unwrap();

    manager.pointer_down(150.0, 150.0);
    manager.pointer_move(160.0, 170.0);

    let resolved = manager.resolved(dialog).unwrap();
    assert!((resolved.relative.x - 110.0).abs() < 0.001);
    assert!((resolved.relative.y - 120.0).abs() < 0.001);
    assert!(manager
        .drain_events()
        .contains(&UiEvent::Moved { id: dialog, x: 110.0, y: 120.0 }));
}

#[test]
fn test_drag_is_pinned_against_resize() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new("10%", "10%", 200, 200)).unwrap();

    manager.pointer_down(100.0, 80.0);
    manager.pointer_move(120.0, 90.0);
    manager.pointer_up(120.0, 90.0);
    manager.resize(400.0, 300.0);

    let resolved = manager.resolved(dialog).unwrap();
    assert!((resolved.relative.x - 100.0).abs() < 0.001);
    assert!((resolved.relative.y - 70.0).abs() < 0.001);
}

#[test]
fn test_map_stays_stale_until_release() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 200, 200)).unwrap();

    manager.pointer_down(150.0, 150.0);
    manager.pointer_move(450.0, 150.0);
    assert!(manager.hit_map().is_dirty());
    assert_eq!(manager.hit(150.0, 150.0), Some(dialog));
    assert!(manager.hit(450.0, 150.0).is_none());

    manager.pointer_up(450.0, 150.0);
    assert!(!manager.hit_map().is_dirty());
    assert!(manager.hit(150.0, 150.0).is_none());
    assert_eq!(manager.hit(450.0, 150.0), Some(dialog));
}

#[test]
fn test_press_routes_to_overlapping_child() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 300, 300)).unwrap();
    let child = manager.add_widget(dialog, WidgetConfig::new(50, 50, 100, 100)).unwrap();

    manager.pointer_down(75.0, 75.0);
    let pressed: Vec<_> = manager
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, UiEvent::Pressed { .. }))
        .collect();
    assert_eq!(pressed, vec![UiEvent::Pressed { id: child, x: 75.0, y: 75.0 }]);

    // The child moves inside its dialog; the dialog stays put
    manager.pointer_move(85.0, 95.0);
    let resolved = manager.resolved(child).unwrap();
    assert!((resolved.relative.x - 60.0).abs() < 0.001);
    assert!((resolved.relative.y - 70.0).abs() < 0.001);
    assert!((manager.resolved(dialog).unwrap().relative.x - 0.0).abs() < 0.001);
}

#[test]
fn test_globally_moveable_child_drags_dialog() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 300, 300)).unwrap();
    manager
        .add_widget(
            dialog,
            WidgetConfig::new(0, 0, 300, 24).with_globally_moveable(true),
        )
        .unwrap();

    manager.pointer_down(200.0, 110.0);
    manager.pointer_move(250.0, 160.0);
    let resolved = manager.resolved(dialog).unwrap();
    assert!((resolved.relative.x - 150.0).abs() < 0.001);
    assert!((resolved.relative.y - 150.0).abs() < 0.001);
}

#[test]
fn test_offset_drag_frame_keeps_press_point_under_pointer() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 300, 300)).unwrap();
    let frame = manager
        .add_widget(
            dialog,
            WidgetConfig::new(20, 20, 100, 24).with_kind(WidgetKind::DragFrame),
        )
        .unwrap();

    manager.pointer_down(130.0, 130.0);
    assert!(manager.widget(dialog).unwrap().cursor().click_offset(frame).is_none());

    manager.pointer_move(140.0, 150.0);
    let resolved = manager.resolved(dialog).unwrap();
    assert!((resolved.relative.x - 110.0).abs() < 0.001);
    assert!((resolved.relative.y - 120.0).abs() < 0.001);
}

#[test]
fn test_click_raises_dialog() {
    let mut manager = manager();
    let a = manager.open_root(WidgetConfig::new(0, 0, 200, 200)).unwrap();
    let b = manager.open_root(WidgetConfig::new(100, 100, 200, 200)).unwrap();
    assert_eq!(manager.hit(150.0, 150.0), Some(b));

    manager.pointer_down(50.0, 50.0);
    manager.pointer_up(50.0, 50.0);
    manager.pointer_down(250.0, 250.0);
    manager.pointer_up(250.0, 250.0);
    manager.pointer_down(50.0, 50.0);
    manager.pointer_up(50.0, 50.0);

    let za = manager.tree().z_order(a).unwrap();
    let zb = manager.tree().z_order(b).unwrap();
    assert!(za > zb);
    assert_eq!(manager.hit(150.0, 150.0), Some(a));
}

#[test]
fn test_not_clickable_dialog_is_transparent() {
    let mut manager = manager();
    let below = manager.open_root(WidgetConfig::new(0, 0, 200, 200)).unwrap();
    manager
        .open_root(WidgetConfig::new(0, 0, 200, 200).with_clickable(false))
        .unwrap();

    assert_eq!(manager.hit(50.0, 50.0), Some(below));
}

#[test]
fn test_release_outside_keeps_focus() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 100, 100)).unwrap();
    manager.pointer_down(50.0, 50.0);
    manager.pointer_up(50.0, 50.0);
    manager.drain_events();

    assert_eq!(manager.pointer_down(500.0, 500.0), InputResult::Unhandled);
    manager.pointer_up(500.0, 500.0);
    assert_eq!(manager.focused_dialog(), Some(dialog));
    assert!(!manager.drain_events().iter().any(UiEvent::is_focus));
}

#[test]
fn test_fractional_pointer_uses_containing_pixel() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(100, 100, 200, 200)).unwrap();
    let child = manager.add_widget(dialog, WidgetConfig::new(0, 0, 50, 50)).unwrap();

    assert_eq!(manager.widget_at(299.6, 150.0), Some(dialog));
    assert_eq!(manager.widget_at(100.2, 299.9), Some(dialog));
    assert!(manager.widget_at(99.6, 150.0).is_none());
    assert!(manager.widget_at(150.0, 300.1).is_none());

    assert_eq!(manager.widget_at(149.7, 120.0), Some(child));
    assert_eq!(manager.widget_at(150.2, 120.0), Some(dialog));
}

// =============================================================================
// Focus and hover
// =============================================================================

#[test]
fn test_focus_moves_between_dialogs_lose_before_gain() {
    let mut manager = manager();
    let a = manager.open_root(WidgetConfig::new(0, 0, 100, 100)).unwrap();
    let a_child = manager.add_widget(a, WidgetConfig::new(10, 10, 20, 20)).unwrap();
    let b = manager.open_root(WidgetConfig::new(300, 0, 100, 100)).unwrap();

    manager.pointer_down(15.0, 15.0);
    manager.pointer_up(15.0, 15.0);
    manager.drain_events();

    manager.pointer_down(350.0, 50.0);
    manager.pointer_up(350.0, 50.0);
    let focus: Vec<_> = manager
        .drain_events()
        .into_iter()
        .filter(UiEvent::is_focus)
        .collect();
    assert_eq!(
        focus,
        vec![
            UiEvent::FocusLost { id: a_child },
            UiEvent::FocusLost { id: a },
            UiEvent::FocusGained { id: b },
        ]
    );

    let focused: Vec<_> = [a, a_child, b]
        .iter()
        .filter(|&&id| manager.widget(id).unwrap().dimensions().focused())
        .copied()
        .collect();
    assert_eq!(focused, vec![b]);
    assert_eq!(manager.widget(a).unwrap().cursor().focused(), None);
}

#[test]
fn test_focused_widget_suppresses_hover_events() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 100, 100)).unwrap();
    manager.pointer_down(50.0, 50.0);
    manager.pointer_up(50.0, 50.0);
    manager.drain_events();

    manager.pointer_move(500.0, 500.0);
    manager.pointer_move(50.0, 50.0);
    let hover: Vec<_> = manager
        .drain_events()
        .into_iter()
        .filter(UiEvent::is_hover)
        .collect();
    assert!(hover.is_empty());
    assert!(manager.widget(dialog).unwrap().dimensions().hovered());
}

#[test]
fn test_hover_switch_between_siblings() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 300, 100)).unwrap();
    let left = manager.add_widget(dialog, WidgetConfig::new(0, 0, 100, 100)).unwrap();
    let right = manager.add_widget(dialog, WidgetConfig::new(200, 0, 100, 100)).unwrap();

    manager.pointer_move(50.0, 50.0);
    manager.drain_events();
    manager.pointer_move(250.0, 50.0);
    assert_eq!(
        manager.drain_events(),
        vec![
            UiEvent::HoverLost { id: left },
            UiEvent::HoverGained { id: right },
        ]
    );
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn test_keys_reach_focused_input_only() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 400, 200)).unwrap();
    let name = manager
        .add_widget(
            dialog,
            WidgetConfig::new(10, 10, 200, 30)
                .with_kind(WidgetKind::Input)
                .with_moveable(false),
        )
        .unwrap();
    let other = manager
        .add_widget(
            dialog,
            WidgetConfig::new(10, 100, 200, 30)
                .with_kind(WidgetKind::Input)
                .with_moveable(false),
        )
        .unwrap();

    manager.pointer_down(20.0, 20.0);
    manager.pointer_up(20.0, 20.0);
    for c in "duk".chars() {
        manager.key(Key::Char(c));
    }
    manager.key(Key::Home);
    manager.key(Key::Delete);

    assert_eq!(manager.widget(name).unwrap().text().unwrap().value(), "uk");
    assert!(manager.widget(other).unwrap().text().unwrap().is_empty());

    let items = manager.render_list();
    let view = items.iter().find(|i| i.id == name).and_then(|i| i.text.as_ref()).unwrap();
    assert_eq!(view.text, "uk");
    assert!((view.cursor_pixel - 0.0).abs() < 0.001);
}

#[test]
fn test_closing_focused_widget_falls_back_to_dialog() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 400, 200)).unwrap();
    let input = manager
        .add_widget(dialog, WidgetConfig::new(10, 10, 200, 30).with_kind(WidgetKind::Input))
        .unwrap();

    manager.pointer_down(20.0, 20.0);
    manager.pointer_up(20.0, 20.0);
    assert_eq!(manager.focused_widget(), Some(input));

    manager.close(input).unwrap();
    assert_eq!(manager.focused_widget(), Some(dialog));
    assert!(manager.widget(dialog).unwrap().cursor().focused().is_none());
    assert_eq!(manager.widget_at(20.0, 20.0), Some(dialog));
}

// =============================================================================
// Degraded configuration
// =============================================================================

#[test]
fn test_malformed_widget_occupies_no_space() {
    let mut manager = manager();
    let dialog = manager.open_root(WidgetConfig::new(0, 0, 300, 300)).unwrap();
    let broken = manager
        .add_widget(dialog, WidgetConfig::new(10, 10, "wide", 50))
        .unwrap();

    assert_eq!(
        manager.take_warnings(),
        vec![UiError::configuration("width", "wide")]
    );
    assert!(manager.resolved(broken).is_err());
    assert_eq!(manager.widget_at(20.0, 20.0), Some(dialog));
    assert!(manager.render_list().iter().all(|i| i.id != broken));
}

#[test]
fn test_style_lookup_from_json_blueprint() {
    let mut manager = manager();
    let style: Style = serde_json::from_str(
        r#"{ "tileset": "bordersmall", "fillstyle": "rgba(20, 20, 20, 0.4)", "blur": true }"#,
    )
    .unwrap();
    manager.register_style("dialog", style);

    let config: WidgetConfig = serde_json::from_str(
        r#"{ "x": "25%", "y": 40, "width": 200, "height": 100, "style": ["dialog", "ghost"] }"#,
    )
    .unwrap();
    let dialog = manager.open_root(config).unwrap();

    assert_eq!(manager.take_warnings(), vec![UiError::lookup("ghost")]);
    let item = &manager.render_list()[0];
    assert_eq!(item.id, dialog);
    assert_eq!(item.fill.as_deref(), Some("rgba(20, 20, 20, 0.4)"));
    assert_eq!(item.blur, Some(4));
    assert!((item.rect.x - 200.0).abs() < 0.001);
}
