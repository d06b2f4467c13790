use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, PaneRenderer, TextHAlign};

pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills: usize,
    pub strokes: usize,
    pub texts: usize,
}

/// [`DrawingSurface`] over a Cairo context, with Pango for text.
///
/// Style strings that fail to parse fall back to opaque black. Cairo errors
/// are logged and otherwise ignored, leaving the frame partially drawn.
#[derive(Debug)]
pub struct CairoSurface<'a> {
    context: &'a Context,
    fill_color: Color,
    stroke_color: Color,
    text_align: TextHAlign,
    font_size_px: f64,
    stats: CairoRenderStats,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            text_align: TextHAlign::Left,
            font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn fill(&mut self) {
        self.apply_color(self.fill_color);
        match self.context.fill_preserve() {
            Ok(()) => self.stats.fills += 1,
            Err(err) => warn!(error = %err, "failed to fill path"),
        }
    }

    fn stroke(&mut self) {
        self.apply_color(self.stroke_color);
        match self.context.stroke_preserve() {
            Ok(()) => self.stats.strokes += 1,
            Err(err) => warn!(error = %err, "failed to stroke path"),
        }
    }

    fn set_fill_style(&mut self, style: &str) {
        self.fill_color = parse_style(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.stroke_color = parse_style(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.context.set_dash(pattern, 0.0);
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.text_align = align;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        // Pango positions through the current point; keep the shape path intact.
        let saved_path = match self.context.copy_path() {
            Ok(path) => path,
            Err(err) => {
                warn!(error = %err, "failed to save path before drawing text");
                return;
            }
        };

        let layout = pangocairo::functions::create_layout(self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}px", self.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (text_width, _text_height) = layout.pixel_size();
        let left = match self.text_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };
        let top = y - f64::from(layout.baseline()) / f64::from(pango::SCALE);

        self.apply_color(self.fill_color);
        self.context.new_path();
        self.context.move_to(left, top);
        pangocairo::functions::show_layout(self.context, &layout);
        self.stats.texts += 1;

        self.context.new_path();
        self.context.append_path(&saved_path);
    }
}

fn parse_style(style: &str) -> Color {
    Color::parse_css(style).unwrap_or_else(|err| {
        debug!(%style, error = %err, "unparsable style, using black");
        Color::BLACK
    })
}

/// Offscreen image target for pane renderers.
#[derive(Debug)]
pub struct CairoShapeRasterizer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoShapeRasterizer {
    /// Creates a device-pixel sized ARGB32 image.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Clears the image and paints one renderer onto it.
    pub fn rasterize<R: PaneRenderer + ?Sized>(
        &mut self,
        renderer: &R,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        let clear = self.clear_color;
        context.set_source_rgba(clear.red, clear.green, clear.blue, clear.alpha);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut surface = CairoSurface::new(&context);
        renderer.draw(&mut surface, pixel_ratio, false, None);
        self.last_stats = surface.stats();
        Ok(())
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
