//! Pointer position ↔ value mapping.
//!
//! NOTE: the two mappings are deliberately *not* exact inverses.
//! [`Geometry::value_from_position`] adds the knob inset (radius + margin)
//! to the distance from the center, while [`Geometry::position_from_value`]
//! does not subtract it. A value assigned programmatically therefore reads
//! back larger in magnitude by `bound × inset / mid`. Existing consumers
//! depend on this, so it is kept as-is.

use crate::config::SeekBarConfig;

/// Mapping parameters for one measured surface width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub inset: f32,
    pub min_value: f32,
    pub max_value: f32,
}

/// Raw track edges. `left` may be greater than `right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackEdges {
    pub left: f32,
    pub right: f32,
}

impl Geometry {
    pub fn new(config: &SeekBarConfig, width: f32) -> Self {
        Self {
            width,
            inset: config.inset(),
            min_value: config.min_value,
            max_value: config.max_value,
        }
    }

    /// Horizontal center of the surface; the zero position.
    pub fn mid(&self) -> f32 {
        self.width / 2.0
    }

    /// Vertical center of the knob.
    pub fn knob_center_y(&self) -> f32 {
        self.inset
    }

    /// Value under surface x-coordinate `x`.
    pub fn value_from_position(&self, x: f32) -> f32 {
        let mid = self.mid();
        if x > mid {
            self.max_value * (x - mid + self.inset) / mid
        } else if x < mid {
            self.min_value * (mid - x + self.inset) / mid
        } else {
            0.0
        }
    }

    /// Knob x-coordinate for `value`.
    pub fn position_from_value(&self, value: f32) -> f32 {
        let mid = self.mid();
        if value > 0.0 {
            (value / self.max_value + 1.0) * mid
        } else if value < 0.0 {
            (-value / self.min_value + 1.0) * mid
        } else {
            mid
        }
    }

    /// Track span for a knob at `knob_x`: from the knob's outer side to just
    /// past the center. Right of center the edges come out reversed.
    pub fn track_edges(&self, knob_x: f32) -> TrackEdges {
        let mid = self.mid();
        if knob_x <= mid {
            TrackEdges {
                left: knob_x - self.inset,
                right: mid + self.inset,
            }
        } else {
            TrackEdges {
                left: knob_x + self.inset,
                right: mid - self.inset,
            }
        }
    }

    /// Whether `x` lies in the interactive band `[inset, width - inset]`.
    pub fn in_band(&self, x: f32) -> bool {
        !(x > self.width - self.inset || x < self.inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        let cfg = SeekBarConfig {
            knob_radius: 20.0,
            knob_margin: 5.0,
            ..Default::default()
        };
        Geometry::new(&cfg, 1000.0)
    }

    #[test]
    fn center_maps_to_zero() {
        let g = geometry();
        assert_eq!(g.value_from_position(500.0), 0.0);
        assert_eq!(g.position_from_value(0.0), 500.0);
    }

    #[test]
    fn right_of_center() {
        let g = geometry();
        assert_eq!(g.value_from_position(750.0), 55.0);
        assert_eq!(g.position_from_value(50.0), 750.0);
        assert_eq!(g.position_from_value(100.0), 1000.0);
    }

    #[test]
    fn left_of_center() {
        let g = geometry();
        // -100 × (500 - 250 + 25) / 500
        assert_eq!(g.value_from_position(250.0), -55.0);
        assert_eq!(g.position_from_value(-50.0), 250.0);
        assert_eq!(g.position_from_value(-100.0), 0.0);
    }

    #[test]
    fn just_off_center_jumps_by_inset() {
        let g = geometry();
        // One pixel right of center already reads 100 × 26 / 500.
        assert_eq!(g.value_from_position(501.0), 5.2);
    }

    #[test]
    fn track_edges_left_half() {
        let g = geometry();
        let edges = g.track_edges(250.0);
        assert_eq!(edges, TrackEdges { left: 225.0, right: 525.0 });
    }

    #[test]
    fn track_edges_right_half_are_reversed() {
        let g = geometry();
        let edges = g.track_edges(750.0);
        assert_eq!(edges, TrackEdges { left: 775.0, right: 475.0 });
        assert!(edges.left > edges.right);
    }

    #[test]
    fn track_edges_at_center_use_left_branch() {
        let g = geometry();
        assert_eq!(g.track_edges(500.0), TrackEdges { left: 475.0, right: 525.0 });
    }

    #[test]
    fn band_edges_are_inclusive() {
        let g = geometry();
        assert!(g.in_band(25.0));
        assert!(g.in_band(975.0));
        assert!(!g.in_band(24.9));
        assert!(!g.in_band(975.1));
        assert!(!g.in_band(10.0));
    }

    #[test]
    fn zero_max_is_degenerate_not_a_panic() {
        let cfg = SeekBarConfig {
            max_value: 0.0,
            ..Default::default()
        };
        let g = Geometry::new(&cfg, 100.0);
        assert!(!g.position_from_value(10.0).is_finite());
        assert_eq!(g.value_from_position(75.0), 0.0);
    }
}
