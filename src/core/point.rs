use serde::{Deserialize, Serialize};

/// Position in logical or device pixel space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps a logical-pixel point onto the device pixel grid.
    #[must_use]
    pub fn to_device(self, pixel_ratio: f64) -> Self {
        Self {
            x: scale_coordinate(self.x, pixel_ratio),
            y: scale_coordinate(self.y, pixel_ratio),
        }
    }
}

/// Scales a logical coordinate by `pixel_ratio` and snaps it to the nearest
/// device pixel. Ties round toward positive infinity (`-2.5` snaps to `-2`).
#[must_use]
pub fn scale_coordinate(value: f64, pixel_ratio: f64) -> f64 {
    (value * pixel_ratio + 0.5).floor()
}

/// Scales a logical extent by `pixel_ratio`, covering any partial device pixel.
#[must_use]
pub fn scale_extent(value: f64, pixel_ratio: f64) -> f64 {
    (value * pixel_ratio).ceil()
}

#[cfg(test)]
mod tests {
    use super::{Point, scale_coordinate, scale_extent};

    #[test]
    fn coordinates_round_to_nearest_with_ties_up() {
        assert_eq!(scale_coordinate(10.4, 1.0), 10.0);
        assert_eq!(scale_coordinate(10.5, 1.0), 11.0);
        assert_eq!(scale_coordinate(-2.5, 1.0), -2.0);
        assert_eq!(scale_coordinate(-2.6, 1.0), -3.0);
        assert_eq!(scale_coordinate(10.0, 2.0), 20.0);
    }

    #[test]
    fn extents_use_ceiling() {
        assert_eq!(scale_extent(10.4, 1.0), 11.0);
        assert_eq!(scale_extent(10.0, 1.5), 15.0);
        assert_eq!(scale_extent(100.2, 2.0), 201.0);
    }

    #[test]
    fn point_to_device_scales_each_axis() {
        let point = Point::new(3.3, 7.75).to_device(2.0);
        assert_eq!(point, Point::new(7.0, 16.0));
    }
}
