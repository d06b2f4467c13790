#![cfg(feature = "cairo-backend")]

use chart_shapes::core::{LineStyle, LineWidth};
use chart_shapes::render::{CairoShapeRasterizer, Color, ShapeRenderSnapshot, ShapeRenderer};

#[test]
fn rasterizer_paints_fill_stroke_and_label() {
    let mut renderer = ShapeRenderer::new();
    renderer.set_data(
        ShapeRenderSnapshot::rectangle(20.0, 80.0, 10.0, 50.0, 100.0, 60.0)
            .with_border("#ff0000", LineStyle::Dashed, LineWidth::new(2).expect("width"))
            .with_text("zone"),
    );

    let mut rasterizer = CairoShapeRasterizer::new(200, 120).expect("rasterizer");
    rasterizer.rasterize(&renderer, 2.0).expect("rasterize");

    let stats = rasterizer.last_stats();
    assert_eq!(stats.fills, 1);
    assert_eq!(stats.strokes, 1);
    assert_eq!(stats.texts, 1);

    let mut png = Vec::new();
    rasterizer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn culled_shape_paints_nothing() {
    let mut renderer = ShapeRenderer::new();
    renderer.set_data(ShapeRenderSnapshot::rectangle(
        20.0, 80.0, 500.0, 600.0, 100.0, 60.0,
    ));

    let mut rasterizer = CairoShapeRasterizer::new(100, 60).expect("rasterizer");
    rasterizer.rasterize(&renderer, 1.0).expect("rasterize");
    assert_eq!(rasterizer.last_stats(), Default::default());
}

#[test]
fn malformed_colors_fall_back_without_failing() {
    let mut renderer = ShapeRenderer::new();
    renderer.set_data(
        ShapeRenderSnapshot::rectangle(10.0, 40.0, 10.0, 40.0, 50.0, 50.0)
            .with_fill("#nothex", 0.5),
    );

    let mut rasterizer = CairoShapeRasterizer::new(50, 50).expect("rasterizer");
    rasterizer.rasterize(&renderer, 1.0).expect("rasterize");
    assert_eq!(rasterizer.last_stats().fills, 1);
}

#[test]
fn rasterizer_rejects_empty_surface_and_invalid_clear_color() {
    assert!(CairoShapeRasterizer::new(0, 10).is_err());

    let mut rasterizer = CairoShapeRasterizer::new(10, 10).expect("rasterizer");
    assert!(rasterizer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
    assert!(rasterizer.set_clear_color(Color::rgb(0.0, 0.0, 0.0)).is_ok());
}
