mod color;
mod pane_renderer;
mod recording_surface;
mod shape_renderer;
mod surface;

pub use color::{Color, hex_to_rgba};
pub use pane_renderer::PaneRenderer;
pub use recording_surface::{
    FillRecord, RecordingSurface, Segment, StrokeRecord, SurfaceCommand, TextRecord,
};
pub use shape_renderer::{
    DEFAULT_FILL_OPACITY, DEFAULT_SHAPE_COLOR, ShapeRenderSnapshot, ShapeRenderer,
};
pub use surface::{DrawingSurface, TextHAlign};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoRenderStats, CairoShapeRasterizer, CairoSurface, DEFAULT_LABEL_FONT_SIZE_PX,
};
