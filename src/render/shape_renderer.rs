use std::any::Any;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{
    LineStyle, LineWidth, Point, apply_line_style, scale_coordinate, scale_extent,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, PaneRenderer, TextHAlign, hex_to_rgba};

pub const DEFAULT_SHAPE_COLOR: &str = "#2196f3";
pub const DEFAULT_FILL_OPACITY: f64 = 0.2;

/// Per-frame input of [`ShapeRenderer`].
///
/// Geometry comes either from `corners` (when non-empty, drawn in order) or
/// from the four bounds describing an axis-aligned rectangle. The two are
/// never combined. All coordinates are logical pixels; `width` and `height`
/// are the logical size of the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRenderSnapshot {
    pub fill_color: String,
    pub fill_opacity: f64,
    pub border_color: String,
    #[serde(default)]
    pub border_style: LineStyle,
    #[serde(default)]
    pub border_width: LineWidth,
    pub border_visible: bool,
    #[serde(default)]
    pub corners: Vec<Point>,
    #[serde(default)]
    pub x_low: f64,
    #[serde(default)]
    pub x_high: f64,
    #[serde(default)]
    pub y_low: f64,
    #[serde(default)]
    pub y_high: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ShapeRenderSnapshot {
    /// Axis-aligned rectangle. Bounds are taken as given, callers keep
    /// `low <= high` on each axis.
    #[must_use]
    pub fn rectangle(
        x_low: f64,
        x_high: f64,
        y_low: f64,
        y_high: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            fill_color: DEFAULT_SHAPE_COLOR.to_owned(),
            fill_opacity: DEFAULT_FILL_OPACITY,
            border_color: DEFAULT_SHAPE_COLOR.to_owned(),
            border_style: LineStyle::Solid,
            border_width: LineWidth::THIN,
            border_visible: true,
            corners: Vec::new(),
            x_low,
            x_high,
            y_low,
            y_high,
            visible: None,
            width,
            height,
            text: None,
        }
    }

    /// Explicit polygon drawn in the given corner order.
    #[must_use]
    pub fn polygon(corners: Vec<Point>, width: f64, height: f64) -> Self {
        Self {
            corners,
            ..Self::rectangle(0.0, 0.0, 0.0, 0.0, width, height)
        }
    }

    #[must_use]
    pub fn with_fill(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.fill_color = color.into();
        self.fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_border(
        mut self,
        color: impl Into<String>,
        style: LineStyle,
        width: LineWidth,
    ) -> Self {
        self.border_color = color.into();
        self.border_style = style;
        self.border_width = width;
        self.border_visible = true;
        self
    }

    #[must_use]
    pub fn with_border_visible(mut self, visible: bool) -> Self {
        self.border_visible = visible;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// `false` only when visibility was explicitly switched off.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid shape snapshot json: {err}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize shape snapshot: {err}"))
        })
    }
}

type DeviceCorners = SmallVec<[Point; 4]>;

/// Fills a rectangle or polygon, optionally labels it and strokes its border.
///
/// Holds only the latest snapshot. Every draw recomputes device geometry from
/// it, so the same snapshot can be drawn at several pixel ratios.
#[derive(Debug, Clone, Default)]
pub struct ShapeRenderer {
    data: Option<ShapeRenderSnapshot>,
}

impl ShapeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: ShapeRenderSnapshot) {
        self.data = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&ShapeRenderSnapshot> {
        self.data.as_ref()
    }

    /// Paints the stored snapshot.
    ///
    /// Surface paint state is left as this call set it. The final stroke is
    /// issued even when the border is hidden, in which case it uses whatever
    /// stroke state the surface already carried.
    pub fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        pixel_ratio: f64,
        _is_hovered: bool,
        _hit_test_data: Option<&dyn Any>,
    ) {
        let Some(data) = self.data.as_ref() else {
            return;
        };
        if !data.is_visible() {
            trace!("shape hidden, skipping draw");
            return;
        }

        let device_width = scale_extent(data.width, pixel_ratio);
        let device_height = scale_extent(data.height, pixel_ratio);

        let Some(corners) = resolve_corners(data, pixel_ratio, device_width, device_height) else {
            trace!(pixel_ratio, "shape outside surface, skipping draw");
            return;
        };

        surface.begin_path();
        if let Some(last) = corners.last() {
            surface.move_to(last.x, last.y);
        }
        for corner in &corners {
            surface.line_to(corner.x, corner.y);
        }

        surface.set_fill_style(&hex_to_rgba(&data.fill_color, data.fill_opacity));
        surface.fill();

        if let Some(text) = data.text.as_deref() {
            if let Some(anchor) = label_anchor(&corners, device_width, device_height) {
                surface.set_fill_style(&hex_to_rgba(&data.border_color, data.fill_opacity));
                surface.set_text_align(TextHAlign::Center);
                surface.fill_text(text, anchor.x, anchor.y);
            }
        }

        if data.border_visible {
            surface.set_stroke_style(&data.border_color);
            surface.set_line_width(data.border_width.as_f64());
            apply_line_style(surface, data.border_style, data.border_width);
        }

        surface.stroke();
    }
}

impl PaneRenderer for ShapeRenderer {
    type Data = ShapeRenderSnapshot;

    fn set_data(&mut self, data: Self::Data) {
        ShapeRenderer::set_data(self, data);
    }

    fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        pixel_ratio: f64,
        is_hovered: bool,
        hit_test_data: Option<&dyn Any>,
    ) {
        ShapeRenderer::draw(self, surface, pixel_ratio, is_hovered, hit_test_data);
    }
}

/// Device-space polygon of the snapshot, or `None` when a rectangle lies
/// entirely off the surface. Explicit corners are never culled.
fn resolve_corners(
    data: &ShapeRenderSnapshot,
    pixel_ratio: f64,
    device_width: f64,
    device_height: f64,
) -> Option<DeviceCorners> {
    if !data.corners.is_empty() {
        return Some(
            data.corners
                .iter()
                .map(|corner| corner.to_device(pixel_ratio))
                .collect(),
        );
    }

    let y_low = scale_coordinate(data.y_low, pixel_ratio);
    if y_low > device_height {
        return None;
    }
    let y_high = scale_coordinate(data.y_high, pixel_ratio);
    if y_high < 0.0 {
        return None;
    }
    let x_low = scale_coordinate(data.x_low, pixel_ratio);
    if x_low > device_width {
        return None;
    }
    let x_high = scale_coordinate(data.x_high, pixel_ratio);
    if x_high < 0.0 {
        return None;
    }

    Some(SmallVec::from_buf([
        Point::new(x_low, y_low),
        Point::new(x_low, y_high),
        Point::new(x_high, y_high),
        Point::new(x_high, y_low),
    ]))
}

/// Quadrilaterals anchor the label at half of the corner0→corner2 diagonal
/// vector, taken as an absolute position. Other polygons anchor at corner0
/// offset by half the device surface size.
fn label_anchor(corners: &[Point], device_width: f64, device_height: f64) -> Option<Point> {
    match corners {
        [first, _, third, _] => Some(Point::new(
            (third.x - first.x) / 2.0,
            (third.y - first.y) / 2.0,
        )),
        [first, ..] => Some(Point::new(
            first.x + device_width / 2.0,
            first.y + device_height / 2.0,
        )),
        [] => None,
    }
}
