//! chart-shapes: shape annotation renderer for chart panes.
//!
//! A [`render::ShapeRenderer`] fills an axis-aligned rectangle or an explicit
//! polygon, optionally labels it and strokes its border, painting onto any
//! [`render::DrawingSurface`]. Geometry arrives already resolved to logical
//! pixels; the renderer only applies the device pixel ratio.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use error::{ChartError, ChartResult};
pub use render::{DrawingSurface, PaneRenderer, ShapeRenderSnapshot, ShapeRenderer};
