use crate::core::Point;
use crate::render::{DrawingSurface, TextHAlign};

/// One call issued against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Fill,
    Stroke,
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    SetTextAlign(TextHAlign),
    FillText { text: String, x: f64, y: f64 },
}

/// Straight segment of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Paint produced by one `fill` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRecord {
    pub style: String,
    pub sub_paths: Vec<Vec<Point>>,
}

/// Paint produced by one `stroke` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRecord {
    pub style: String,
    pub line_width: f64,
    pub dash: Vec<f64>,
    pub segments: Vec<Segment>,
}

/// Paint produced by one `fill_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: String,
    pub align: TextHAlign,
}

/// Headless surface that records every call and tracks paint state.
///
/// Used by tests, benchmarks and hosts that want to inspect what a renderer
/// would paint without a raster backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    fills: Vec<FillRecord>,
    strokes: Vec<StrokeRecord>,
    texts: Vec<TextRecord>,
    sub_paths: Vec<Vec<Point>>,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    line_dash: Vec<f64>,
    text_align: TextHAlign,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            fills: Vec::new(),
            strokes: Vec::new(),
            texts: Vec::new(),
            sub_paths: Vec::new(),
            fill_style: "#000000".to_owned(),
            stroke_style: "#000000".to_owned(),
            line_width: 1.0,
            line_dash: Vec::new(),
            text_align: TextHAlign::Left,
        }
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    #[must_use]
    pub fn fills(&self) -> &[FillRecord] {
        &self.fills
    }

    #[must_use]
    pub fn strokes(&self) -> &[StrokeRecord] {
        &self.strokes
    }

    #[must_use]
    pub fn texts(&self) -> &[TextRecord] {
        &self.texts
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    /// `true` when nothing was painted. State setters alone do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.strokes.is_empty() && self.texts.is_empty()
    }

    /// Segments covered by the most recent stroke, if any.
    #[must_use]
    pub fn stroked_segments(&self) -> Option<&[Segment]> {
        self.strokes.last().map(|stroke| stroke.segments.as_slice())
    }

    #[must_use]
    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    #[must_use]
    pub fn stroke_style(&self) -> &str {
        &self.stroke_style
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    #[must_use]
    pub fn line_dash(&self) -> &[f64] {
        &self.line_dash
    }

    #[must_use]
    pub fn text_align(&self) -> TextHAlign {
        self.text_align
    }

    /// Forgets recorded calls and paint. Paint state is kept, as it would be
    /// on a real surface carried from one frame to the next.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.fills.clear();
        self.strokes.clear();
        self.texts.clear();
    }

    fn current_segments(&self) -> Vec<Segment> {
        self.sub_paths
            .iter()
            .flat_map(|points| points.windows(2).map(|pair| Segment::new(pair[0], pair[1])))
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
        self.sub_paths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.commands.push(SurfaceCommand::MoveTo(point));
        self.sub_paths.push(vec![point]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.commands.push(SurfaceCommand::LineTo(point));
        // Without a current point, a line-to only starts a sub-path.
        match self.sub_paths.last_mut() {
            Some(points) => points.push(point),
            None => self.sub_paths.push(vec![point]),
        }
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill);
        self.fills.push(FillRecord {
            style: self.fill_style.clone(),
            sub_paths: self.sub_paths.clone(),
        });
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke);
        self.strokes.push(StrokeRecord {
            style: self.stroke_style.clone(),
            line_width: self.line_width,
            dash: self.line_dash.clone(),
            segments: self.current_segments(),
        });
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(SurfaceCommand::SetFillStyle(style.to_owned()));
        self.fill_style = style.to_owned();
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.commands.push(SurfaceCommand::SetStrokeStyle(style.to_owned()));
        self.stroke_style = style.to_owned();
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
        self.line_width = width;
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(SurfaceCommand::SetLineDash(pattern.to_vec()));
        self.line_dash = pattern.to_vec();
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.commands.push(SurfaceCommand::SetTextAlign(align));
        self.text_align = align;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        });
        self.texts.push(TextRecord {
            text: text.to_owned(),
            x,
            y,
            style: self.fill_style.clone(),
            align: self.text_align,
        });
    }
}
