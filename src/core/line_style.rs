use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

pub type DashPattern = SmallVec<[f64; 2]>;

impl LineStyle {
    /// Returns the on/off segment lengths for a line of the given width.
    ///
    /// An empty pattern means a continuous stroke.
    #[must_use]
    pub fn dash_pattern(self, width: LineWidth) -> DashPattern {
        let w = width.as_f64();
        match self {
            Self::Solid => SmallVec::new(),
            Self::Dotted => smallvec![w, w],
            Self::Dashed => smallvec![2.0 * w, 2.0 * w],
            Self::LargeDashed => smallvec![6.0 * w, 6.0 * w],
            Self::SparseDotted => smallvec![w, 4.0 * w],
        }
    }
}

/// Stroke width in whole pixels. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LineWidth(u32);

impl LineWidth {
    pub const THIN: Self = Self(1);

    pub fn new(width: u32) -> ChartResult<Self> {
        if width == 0 {
            return Err(ChartError::InvalidData(
                "line width must be > 0".to_owned(),
            ));
        }
        Ok(Self(width))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self::THIN
    }
}

impl TryFrom<u32> for LineWidth {
    type Error = ChartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineWidth> for u32 {
    fn from(value: LineWidth) -> Self {
        value.0
    }
}

/// Applies the dash pattern of `style` to the surface stroke state.
pub fn apply_line_style(surface: &mut dyn DrawingSurface, style: LineStyle, width: LineWidth) {
    surface.set_line_dash(&style.dash_pattern(width));
}

#[cfg(test)]
mod tests {
    use super::{LineStyle, LineWidth};

    #[test]
    fn dash_patterns_scale_with_width() {
        let width = LineWidth::new(2).expect("valid width");
        assert!(LineStyle::Solid.dash_pattern(width).is_empty());
        assert_eq!(LineStyle::Dotted.dash_pattern(width).as_slice(), &[2.0, 2.0]);
        assert_eq!(LineStyle::Dashed.dash_pattern(width).as_slice(), &[4.0, 4.0]);
        assert_eq!(
            LineStyle::LargeDashed.dash_pattern(width).as_slice(),
            &[12.0, 12.0]
        );
        assert_eq!(
            LineStyle::SparseDotted.dash_pattern(width).as_slice(),
            &[2.0, 8.0]
        );
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(LineWidth::new(0).is_err());
        assert_eq!(LineWidth::new(3).expect("valid width").get(), 3);
    }

    #[test]
    fn line_width_deserialization_validates() {
        let width: LineWidth = serde_json::from_str("4").expect("valid width");
        assert_eq!(width.get(), 4);
        assert!(serde_json::from_str::<LineWidth>("0").is_err());
    }

    #[test]
    fn line_style_uses_snake_case_names() {
        let json = serde_json::to_string(&LineStyle::SparseDotted).expect("serialize");
        assert_eq!(json, "\"sparse_dotted\"");
    }
}
