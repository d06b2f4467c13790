use chart_shapes::core::{LineStyle, LineWidth, Point};
use chart_shapes::render::{RecordingSurface, ShapeRenderSnapshot, ShapeRenderer};

#[test]
fn minimal_json_uses_defaults_for_optional_fields() {
    let snapshot = ShapeRenderSnapshot::from_json(
        r##"{
            "fill_color": "#ff0000",
            "fill_opacity": 0.3,
            "border_color": "#00ff00",
            "border_visible": false,
            "x_low": 10.0,
            "x_high": 20.0,
            "y_low": 5.0,
            "y_high": 15.0,
            "width": 200.0,
            "height": 100.0
        }"##,
    )
    .expect("valid snapshot");

    assert!(snapshot.corners.is_empty());
    assert_eq!(snapshot.visible, None);
    assert!(snapshot.is_visible());
    assert_eq!(snapshot.text, None);
    assert_eq!(snapshot.border_style, LineStyle::Solid);
    assert_eq!(snapshot.border_width, LineWidth::THIN);
}

#[test]
fn polygon_json_draws_its_corners() {
    let snapshot = ShapeRenderSnapshot::from_json(
        r##"{
            "fill_color": "#123",
            "fill_opacity": 1,
            "border_color": "#456",
            "border_style": "large_dashed",
            "border_width": 2,
            "border_visible": true,
            "corners": [{"x": 1, "y": 1}, {"x": 9, "y": 1}, {"x": 5, "y": 8}],
            "visible": true,
            "width": 10,
            "height": 10,
            "text": "wedge"
        }"##,
    )
    .expect("valid snapshot");

    let mut renderer = ShapeRenderer::new();
    renderer.set_data(snapshot);
    let mut surface = RecordingSurface::new();
    renderer.draw(&mut surface, 1.0, false, None);

    assert_eq!(surface.fills()[0].style, "rgba(17, 34, 51, 1)");
    assert_eq!(surface.fills()[0].sub_paths[0][0], Point::new(5.0, 8.0));
    assert_eq!(surface.strokes()[0].dash, vec![12.0, 12.0]);
    assert_eq!(surface.texts()[0].text, "wedge");
}

#[test]
fn zero_border_width_is_rejected() {
    let result = ShapeRenderSnapshot::from_json(
        r##"{
            "fill_color": "#fff",
            "fill_opacity": 1,
            "border_color": "#fff",
            "border_width": 0,
            "border_visible": true,
            "width": 10,
            "height": 10
        }"##,
    );
    assert!(result.is_err());
}

#[test]
fn pretty_json_reloads_to_the_same_snapshot() {
    let snapshot = ShapeRenderSnapshot::polygon(
        vec![Point::new(1.5, 2.5), Point::new(3.0, 4.0)],
        320.0,
        240.0,
    )
    .with_border("#abcdef", LineStyle::SparseDotted, LineWidth::new(3).expect("width"))
    .with_text("note");

    let json = snapshot.to_json_pretty().expect("serialize");
    assert!(!json.contains("\"visible\""));
    let reloaded = ShapeRenderSnapshot::from_json(&json).expect("reload");
    assert_eq!(reloaded, snapshot);
}
