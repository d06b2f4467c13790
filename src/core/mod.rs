pub mod line_style;
pub mod point;

pub use line_style::{DashPattern, LineStyle, LineWidth, apply_line_style};
pub use point::{Point, scale_coordinate, scale_extent};
