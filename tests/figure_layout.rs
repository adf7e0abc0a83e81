use apobec_scatter::plot::figure::{FigureStyle, make_room};

fn frac_after(range: (f64, f64), anchor: f64) -> f64 {
    (range.1 - anchor) / (range.1 - range.0)
}

#[test]
fn make_room_keeps_range_when_space_suffices() {
    let r = make_room((0.0, 10.0), 5.0, 10.0, 10.0, 100.0).unwrap();
    assert_eq!(r, (0.0, 10.0));
}

#[test]
fn make_room_extends_top_for_label() {
    // Anchor at the top edge needs 25 of 100 px above it.
    let r = make_room((0.0, 3.0), 3.0, 0.0, 25.0, 100.0).unwrap();
    assert_eq!(r.0, 0.0);
    assert!((frac_after(r, 3.0) - 0.25).abs() < 1e-9);
    assert!((r.1 - 4.0).abs() < 1e-9);
}

#[test]
fn make_room_extends_both_sides() {
    let r = make_room((0.0, 1.0), 0.9, 20.0, 20.0, 100.0).unwrap();
    assert!(frac_after(r, 0.9) >= 0.2 - 1e-9);
    assert!((0.9 - r.0) / (r.1 - r.0) >= 0.2 - 1e-9);
}

#[test]
fn make_room_rejects_impossible_layout() {
    assert!(make_room((0.0, 1.0), 0.5, 60.0, 60.0, 100.0).is_err());
    assert!(make_room((0.0, 1.0), 0.5, 1.0, 1.0, 0.0).is_err());
}

#[test]
fn plot_area_fits_inside_canvas() {
    let style = FigureStyle::default();
    let (w, h) = style.canvas_size();
    let (pw, ph) = style.plot_area_px();
    assert!(pw > 0.0 && pw < w as f64);
    assert!(ph > 0.0 && ph < h as f64);
}
