// tests/sync.rs
//
// Focus machine, twin lookup, magnifier mapping, grid distribution —
// the synchronizer logic minus any actual painting.
//
use eframe::egui::{Pos2, Rect, Vec2};

use lookbook::sync::{
    column_count, distribute, zoom_uv, Focus, Instance, InstanceRegistry, ViewKind,
};

fn inst(view: ViewKind, x: f32) -> Instance {
    Instance {
        view,
        rect: Rect::from_min_size(Pos2::new(x, 0.0), Vec2::new(100.0, 100.0)),
        image_rect: None,
    }
}

#[test]
fn registry_rebuilds_each_pass() {
    let mut reg = InstanceRegistry::default();
    reg.register("07", inst(ViewKind::Grid, 0.0));
    reg.register("07", inst(ViewKind::List, 200.0));
    assert_eq!(reg.instances("07").len(), 2);

    reg.begin_pass();
    assert!(reg.instances("07").is_empty());
}

#[test]
fn twins_exclude_the_hovered_view() {
    let mut reg = InstanceRegistry::default();
    reg.register("07", inst(ViewKind::Grid, 0.0));
    reg.register("07", inst(ViewKind::Grid, 120.0));
    reg.register("07", inst(ViewKind::List, 300.0));

    let targets = reg.twins_outside("07", ViewKind::Grid);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].view, ViewKind::List);

    // Unknown identity: no targets, no panic.
    assert!(reg.twins_outside("nope", ViewKind::List).is_empty());
}

#[test]
fn focus_locks_on_identified_click_only() {
    let mut focus = Focus::Unlocked;
    focus.click(None); // background click while unlocked
    assert_eq!(focus, Focus::Unlocked);
    assert!(focus.hover_allowed());

    focus.click(Some("07"));
    assert_eq!(focus, Focus::Locked("07".to_string()));
    assert!(!focus.hover_allowed());
}

#[test]
fn unlocking_click_is_consumed() {
    let mut focus = Focus::Unlocked;
    focus.click(Some("07"));

    // A click on a *different* identified instance exits the lock but
    // must not re-enter; that takes a second click.
    focus.click(Some("08"));
    assert_eq!(focus, Focus::Unlocked);

    focus.click(Some("08"));
    assert_eq!(focus, Focus::Locked("08".to_string()));
}

#[test]
fn magnifier_needs_lock_and_pointer_in_image() {
    let image = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));
    let inside = Some(Pos2::new(50.0, 50.0));
    let outside = Some(Pos2::new(150.0, 50.0));

    let focus = Focus::Locked("07".to_string());
    assert!(focus.magnifier_active("07", Some(image), inside));
    assert!(!focus.magnifier_active("07", Some(image), outside));
    assert!(!focus.magnifier_active("08", Some(image), inside));
    assert!(!focus.magnifier_active("07", None, inside));
    assert!(!Focus::Unlocked.magnifier_active("07", Some(image), inside));
}

#[test]
fn zoom_uv_tracks_pointer_and_clamps() {
    let image = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 100.0));

    // Center of the image: window centered in UV space.
    let uv = zoom_uv(Pos2::new(50.0, 50.0), image, 2.0);
    assert!((uv.center().x - 0.5).abs() < 1e-5);
    assert!((uv.center().y - 0.5).abs() < 1e-5);
    assert!((uv.width() - 0.5).abs() < 1e-5);

    // Corner: clamped inside the unit square.
    let uv = zoom_uv(Pos2::new(0.0, 0.0), image, 2.0);
    assert_eq!(uv.min, Pos2::new(0.0, 0.0));

    let uv = zoom_uv(Pos2::new(100.0, 100.0), image, 4.0);
    assert!(uv.max.x <= 1.0 + 1e-5 && uv.max.y <= 1.0 + 1e-5);
    assert!((uv.width() - 0.25).abs() < 1e-5);
}

#[test]
fn distribution_is_ceil_with_last_column_remainder() {
    assert_eq!(distribute(10, 3), vec![4, 4, 2]);
    assert_eq!(distribute(9, 3), vec![3, 3, 3]);
    assert_eq!(distribute(1, 5), vec![1]);
    assert_eq!(distribute(0, 3), Vec::<usize>::new());
    // No empty columns even when cols > needed.
    assert_eq!(distribute(4, 3), vec![2, 2]);
}

#[test]
fn column_count_is_bounded() {
    assert_eq!(column_count(800.0, 160.0, 5), 5);
    assert_eq!(column_count(1600.0, 160.0, 5), 5); // capped at max
    assert_eq!(column_count(100.0, 160.0, 5), 1); // never below one
    assert_eq!(column_count(480.0, 160.0, 5), 3);
}
