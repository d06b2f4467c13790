use serde::{Deserialize, Serialize};

/// Horizontal text alignment relative to the anchor passed to
/// [`DrawingSurface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Device-pixel addressed 2D drawing surface consumed by pane renderers.
///
/// The surface keeps paint state (fill style, stroke style, line width, dash,
/// text alignment, current path) between calls. Renderers mutate that state
/// and never restore it, so after any draw the state is whatever the last
/// renderer left behind. Hosts that need isolation between renderers must
/// save and restore around each call themselves.
///
/// Path semantics follow an immediate-mode canvas: `begin_path` discards the
/// current path, `fill` implicitly closes every sub-path, `stroke` draws only
/// the segments that were added, and neither consumes the path.
///
/// Methods are infallible. Backends deal with their own failures.
pub trait DrawingSurface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Sets the fill style from a CSS color string such as `rgba(1, 2, 3, 0.5)`.
    fn set_fill_style(&mut self, style: &str);
    /// Sets the stroke style from a CSS color string such as `#ff0000`.
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    /// Empty pattern means solid.
    fn set_line_dash(&mut self, pattern: &[f64]);

    fn set_text_align(&mut self, align: TextHAlign);
    /// Draws `text` with the current fill style, aligned on `x` per the
    /// current text alignment with its baseline at `y`. The current path is
    /// left untouched.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
