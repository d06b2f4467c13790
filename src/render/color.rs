use crate::error::{ChartError, ChartResult};

/// Formats a `#rgb` / `#rrggbb` color with the given opacity as a CSS
/// `rgba(r, g, b, a)` string.
///
/// The input is not validated. The leading character is dropped whatever it
/// is, and a channel without leading hex digits is written as `NaN` so the
/// consuming surface decides how to treat the malformed color.
#[must_use]
pub fn hex_to_rgba(hex: &str, opacity: f64) -> String {
    let mut digits: Vec<char> = hex.chars().skip(1).collect();
    if digits.len() == 3 {
        digits = digits.iter().flat_map(|digit| [*digit, *digit]).collect();
    }

    let [red, green, blue] = [0, 2, 4].map(|start| {
        let end = (start + 2).min(digits.len());
        let start = start.min(end);
        format_channel(parse_hex_prefix(&digits[start..end]))
    });

    format!("rgba({red}, {green}, {blue}, {})", format_number(opacity))
}

/// Parses the longest run of leading hex digits, allowing surrounding
/// whitespace, a sign and a `0x` prefix.
fn parse_hex_prefix(chars: &[char]) -> Option<i64> {
    let mut rest = chars;
    while let [first, tail @ ..] = rest {
        if !first.is_whitespace() {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        ['-', tail @ ..] => {
            rest = tail;
            true
        }
        ['+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };
    if let ['0', 'x' | 'X', tail @ ..] = rest {
        rest = tail;
    }

    let mut value: Option<i64> = None;
    for ch in rest {
        let Some(digit) = ch.to_digit(16) else {
            break;
        };
        value = Some(value.unwrap_or(0) * 16 + i64::from(digit));
    }
    value.map(|value| if negative { -value } else { value })
}

fn format_channel(channel: Option<i64>) -> String {
    channel.map_or_else(|| "NaN".to_owned(), |value| value.to_string())
}

/// Formats a number the way CSS color strings expect: integral values carry
/// no fractional part and non-finite values use their textual names.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_owned()
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    ///
    /// Byte channels are clamped to 0..=255 and alpha to 0..=1; anything that
    /// does not parse to finite numbers is rejected.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex_color(hex).ok_or_else(|| invalid_color(input));
        }

        let lower = trimmed.to_ascii_lowercase();
        let (args, expects_alpha) = if let Some(args) = function_args(&lower, "rgba") {
            (args, true)
        } else if let Some(args) = function_args(&lower, "rgb") {
            (args, false)
        } else {
            return Err(invalid_color(input));
        };

        let values = args
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| invalid_color(input))?;

        let (rgb, alpha) = match (expects_alpha, values.as_slice()) {
            (true, [r, g, b, a]) => ([*r, *g, *b], *a),
            (false, [r, g, b]) => ([*r, *g, *b], 1.0),
            _ => return Err(invalid_color(input)),
        };

        let [red, green, blue] = rgb.map(|channel| channel.clamp(0.0, 255.0) / 255.0);
        Ok(Self::rgba(red, green, blue, alpha.clamp(0.0, 1.0)))
    }
}

fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => hex.to_owned(),
        _ => return None,
    };

    let channel = |start: usize| -> Option<f64> {
        u8::from_str_radix(&expanded[start..start + 2], 16)
            .ok()
            .map(|value| f64::from(value) / 255.0)
    };
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidColor(format!("cannot parse `{input}`"))
}

#[cfg(test)]
mod tests {
    use super::{Color, hex_to_rgba};
    use approx::assert_relative_eq;

    #[test]
    fn hex_to_rgba_expands_shorthand() {
        assert_eq!(hex_to_rgba("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
        assert_eq!(hex_to_rgba("#a1c", 0.25), "rgba(170, 17, 204, 0.25)");
    }

    #[test]
    fn hex_to_rgba_formats_integral_opacity_without_fraction() {
        assert_eq!(hex_to_rgba("#112233", 1.0), "rgba(17, 34, 51, 1)");
        assert_eq!(hex_to_rgba("#112233", 0.0), "rgba(17, 34, 51, 0)");
    }

    #[test]
    fn hex_to_rgba_degrades_on_malformed_input() {
        assert_eq!(hex_to_rgba("#zz2233", 1.0), "rgba(NaN, 34, 51, 1)");
        assert_eq!(hex_to_rgba("#1g2233", 1.0), "rgba(1, 34, 51, 1)");
        assert_eq!(hex_to_rgba("#1122", 1.0), "rgba(17, 34, NaN, 1)");
        assert_eq!(hex_to_rgba("", 0.5), "rgba(NaN, NaN, NaN, 0.5)");
        assert_eq!(hex_to_rgba("#ff", f64::NAN), "rgba(255, NaN, NaN, NaN)");
    }

    #[test]
    fn hex_to_rgba_ignores_the_leading_character() {
        assert_eq!(hex_to_rgba("x0a0b0c", 1.0), "rgba(10, 11, 12, 1)");
    }

    #[test]
    fn parse_css_accepts_hex_and_functional_forms() {
        let white = Color::parse_css("#fff").expect("short hex");
        assert_eq!(white, Color::rgb(1.0, 1.0, 1.0));

        let color = Color::parse_css("rgba(17, 34, 51, 0.5)").expect("rgba");
        assert_relative_eq!(color.red, 17.0 / 255.0);
        assert_relative_eq!(color.green, 34.0 / 255.0);
        assert_relative_eq!(color.blue, 51.0 / 255.0);
        assert_relative_eq!(color.alpha, 0.5);

        let opaque = Color::parse_css("RGB(255, 0, 0)").expect("rgb");
        assert_eq!(opaque, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn parse_css_round_trips_hex_to_rgba_output() {
        let color = Color::parse_css(&hex_to_rgba("#2196f3", 0.2)).expect("formatted color");
        assert_relative_eq!(color.red, 33.0 / 255.0);
        assert_relative_eq!(color.alpha, 0.2);
        assert!(color.validate().is_ok());
    }

    #[test]
    fn parse_css_rejects_malformed_input() {
        assert!(Color::parse_css("rgba(NaN, 34, 51, 1)").is_err());
        assert!(Color::parse_css("#12345").is_err());
        assert!(Color::parse_css("#gggggg").is_err());
        assert!(Color::parse_css("hsl(0, 0%, 0%)").is_err());
        assert!(Color::parse_css("rgb(1, 2)").is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_channels() {
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Color::BLACK.validate().is_ok());
    }
}
