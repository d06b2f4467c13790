use std::any::Any;

use crate::render::DrawingSurface;

/// Capability shared by every pane-level renderer.
///
/// The host pane hands each renderer a fresh data snapshot whenever the
/// annotation changes and calls [`PaneRenderer::draw`] once per frame.
pub trait PaneRenderer {
    type Data;

    /// Replaces the stored snapshot.
    fn set_data(&mut self, data: Self::Data);

    /// Paints the stored snapshot onto `surface`.
    ///
    /// `pixel_ratio` is the device-to-logical pixel scale. `is_hovered` and
    /// `hit_test_data` are forwarded by the host for renderers that style
    /// hovered items; renderers are free to ignore them.
    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        pixel_ratio: f64,
        is_hovered: bool,
        hit_test_data: Option<&dyn Any>,
    );
}
