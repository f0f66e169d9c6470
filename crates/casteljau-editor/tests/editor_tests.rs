use approx::assert_abs_diff_eq;
use casteljau_editor::{CubicSlot, Editor, EditorOptions, Gesture};
use casteljau_geometry::evaluate;
use casteljau_math::dvec2;
use casteljau_render::{Color, CommandRecorder, DisplayMode};

#[test]
fn test_add_then_remove_by_hit_restores_sequence() {
    let mut ed = Editor::generalized(&EditorOptions::default());
    ed.add_control_point(dvec2(150.0, 60.0));
    let before = ed.control_sequence();

    ed.handle_gesture(Gesture::Tap(dvec2(400.0, 90.0)));
    assert_eq!(ed.control_sequence().len(), before.len() + 1);

    ed.handle_gesture(Gesture::DoubleTap(dvec2(400.0, 90.0)));
    assert_eq!(ed.control_sequence(), before);
}

#[test]
fn test_add_then_remove_on_coincident_point_restores_sequence() {
    let mut ed = Editor::generalized(&EditorOptions::default());
    ed.add_control_point(dvec2(100.0, 100.0));
    ed.add_control_point(dvec2(300.0, 300.0));
    let before = ed.control_sequence();

    ed.add_control_point(dvec2(100.0, 100.0));
    assert_eq!(ed.remove_nearest(dvec2(100.0, 100.0)), Some(dvec2(100.0, 100.0)));
    assert_eq!(ed.control_sequence(), before);
}

#[test]
fn test_non_finite_points_are_rejected() {
    let mut ed = Editor::generalized(&EditorOptions::default());
    let id = ed.add_control_point(dvec2(200.0, 100.0)).unwrap();
    let before = ed.control_sequence();

    assert_eq!(ed.add_control_point(dvec2(f64::NAN, 5.0)), None);
    assert!(ed.move_control_point(id, dvec2(f64::INFINITY, 0.0)).is_err());
    ed.set_start_point(dvec2(0.0, f64::NAN));
    ed.set_end_point(dvec2(f64::NEG_INFINITY, 0.0));
    assert_eq!(ed.control_sequence(), before);

    let mut rec = CommandRecorder::new();
    ed.draw(&mut rec).unwrap();
    assert!(!ed.needs_redraw());
}

#[test]
fn test_out_of_range_t_draws_like_one() {
    let opts = EditorOptions::default();
    let mut clamped = Editor::generalized(&opts);
    let mut exact = Editor::generalized(&opts);
    for ed in [&mut clamped, &mut exact] {
        ed.add_control_point(dvec2(200.0, 40.0));
        ed.add_control_point(dvec2(420.0, 440.0));
    }
    clamped.set_parameter_t(1.5);
    exact.set_parameter_t(1.0);

    let mut a = CommandRecorder::new();
    let mut b = CommandRecorder::new();
    clamped.draw(&mut a).unwrap();
    exact.draw(&mut b).unwrap();
    assert_eq!(a.commands(), b.commands());
}

#[test]
fn test_drawn_curve_point_matches_evaluation() {
    let mut ed = Editor::generalized(&EditorOptions::default());
    ed.add_control_point(dvec2(120.0, 30.0));
    ed.add_control_point(dvec2(320.0, 450.0));
    ed.add_control_point(dvec2(500.0, 60.0));
    ed.set_parameter_t(0.4);

    let mut rec = CommandRecorder::new();
    ed.draw(&mut rec).unwrap();

    let expected = evaluate(&ed.control_sequence(), 0.4);
    let curve_point = rec
        .circles()
        .filter(|c| c.1 == ed.renderer().style().curve_point_radius)
        .last()
        .unwrap();
    assert_abs_diff_eq!(curve_point.0.x, expected.x, epsilon = 1e-9);
    assert_abs_diff_eq!(curve_point.0.y, expected.y, epsilon = 1e-9);
    assert_eq!(curve_point.2, Color::ORANGE);

    // The trace ends on the same point
    let trace = &rec.paths()[0];
    assert_abs_diff_eq!(trace.points.last().unwrap().x, expected.x, epsilon = 1e-9);
}

#[test]
fn test_cubic_taps_fill_slots_then_stop() {
    let mut ed = Editor::cubic(&EditorOptions::default());
    ed.handle_gesture(Gesture::Tap(dvec2(150.0, 80.0)));
    ed.handle_gesture(Gesture::Tap(dvec2(450.0, 80.0)));
    ed.handle_gesture(Gesture::Tap(dvec2(300.0, 400.0)));

    let model = ed.model();
    assert_eq!(model.control1, Some(dvec2(150.0, 80.0)));
    assert_eq!(model.control2, Some(dvec2(450.0, 80.0)));

    ed.handle_gesture(Gesture::PanBegan(dvec2(450.0, 80.0)));
    assert_eq!(ed.drag_target(), Some(CubicSlot::Control2));
    ed.handle_gesture(Gesture::PanChanged(dvec2(460.0, 120.0)));
    ed.handle_gesture(Gesture::PanEnded);
    assert_eq!(ed.model().control2, Some(dvec2(460.0, 120.0)));
}

#[test]
fn test_native_overlay_follows_display_mode() {
    let mut ed = Editor::cubic(&EditorOptions::default());
    ed.add_control_point(dvec2(150.0, 80.0));
    ed.add_control_point(dvec2(450.0, 80.0));
    ed.set_parameter_t(0.6);
    ed.set_display_mode(DisplayMode {
        show_native_curve: true,
        ..DisplayMode::default()
    });

    let mut rec = CommandRecorder::new();
    ed.draw(&mut rec).unwrap();
    let reveals: Vec<_> = rec.curve_reveals().collect();
    assert_eq!(reveals.len(), 1);
    assert_eq!(reveals[0].0.len(), 4);
    assert_eq!(reveals[0].1, 0.6);
}

#[test]
fn test_options_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casteljau.toml");

    let mut opts = EditorOptions::default();
    opts.pick_radius = 30.0;
    opts.display_mode.show_trace = false;
    opts.save_to_file(&path).unwrap();

    let loaded = EditorOptions::load_from_file(&path);
    assert_eq!(loaded, opts);

    let ed = Editor::generalized(&loaded);
    assert_eq!(ed.pick_radius(), 30.0);
    assert!(!ed.display_mode().show_trace);
}

#[test]
fn test_missing_or_bad_options_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert_eq!(EditorOptions::load_from_file(&missing), EditorOptions::default());

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "pick_radius = -3.0\n").unwrap();
    assert_eq!(EditorOptions::load_from_file(&bad), EditorOptions::default());
}
