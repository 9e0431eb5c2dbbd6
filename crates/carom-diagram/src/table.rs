use glam::Vec2;
use thiserror::Error;

/// Regulation match-table playing surface, long axis (cm).
pub const REGULATION_HEIGHT: f32 = 302.8;
/// Regulation match-table playing surface, short axis (cm).
pub const REGULATION_WIDTH: f32 = 152.4;
/// Default cushion band thickness (cm).
pub const DEFAULT_BAND: f32 = 5.0;

/// Invalid table dimensions, reported at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TableError {
    #[error("table dimensions must be positive: height={height}, width={width}")]
    InvalidDimension { height: f32, width: f32 },
    #[error("band thickness must be non-negative: {0}")]
    NegativeBand(f32),
}

/// Playing-surface dimensions plus the surrounding cushion band.
///
/// Coordinates are in cm, origin at the bottom-left corner of the playing
/// surface, x along the long axis. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSpec {
    /// Long axis of the playing surface (cm).
    pub height: f32,
    /// Short axis of the playing surface (cm).
    pub width: f32,
    /// Cushion band thickness around the surface (cm).
    pub band: f32,
}

impl TableSpec {
    /// Validate and build a table. Height and width must be positive,
    /// the band non-negative.
    pub fn new(height: f32, width: f32, band: f32) -> Result<Self, TableError> {
        if !(height > 0.0) || !(width > 0.0) {
            return Err(TableError::InvalidDimension { height, width });
        }
        if !(band >= 0.0) {
            return Err(TableError::NegativeBand(band));
        }
        Ok(Self { height, width, band })
    }

    /// Canvas bounds including the band: `[-band, height+band] x [-band, width+band]`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(-self.band, -self.band),
            Vec2::new(self.height + self.band, self.width + self.band),
        )
    }

    /// Full canvas extent along the long axis.
    pub fn world_width(&self) -> f32 {
        self.height + 2.0 * self.band
    }

    /// Full canvas extent along the short axis.
    pub fn world_height(&self) -> f32 {
        self.width + 2.0 * self.band
    }

    /// Whether a point lies on the playing surface (band excluded).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.height && p.y >= 0.0 && p.y <= self.width
    }

    /// Clamp a ball center so the full circle stays on the surface.
    ///
    /// Per-axis and idempotent. On tables too small for the ball the
    /// min/max chain resolves toward the near cushion instead of panicking.
    pub fn clamp_ball(&self, p: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            p.x.min(self.height - radius).max(radius),
            p.y.min(self.width - radius).max(radius),
        )
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            height: REGULATION_HEIGHT,
            width: REGULATION_WIDTH,
            band: DEFAULT_BAND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_defaults() {
        let t = TableSpec::default();
        assert_eq!(t.height, 302.8);
        assert_eq!(t.width, 152.4);
        assert_eq!(t.band, 5.0);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(TableSpec::new(0.0, 152.4, 5.0).is_err());
        assert!(TableSpec::new(302.8, -1.0, 5.0).is_err());
        assert!(TableSpec::new(302.8, 152.4, -0.1).is_err());
        assert!(TableSpec::new(f32::NAN, 152.4, 5.0).is_err());
        assert!(TableSpec::new(302.8, 152.4, 0.0).is_ok());
    }

    #[test]
    fn bounds_include_band() {
        let t = TableSpec::default();
        let (min, max) = t.bounds();
        assert_eq!(min, Vec2::new(-5.0, -5.0));
        assert_eq!(max, Vec2::new(307.8, 157.4));
        assert_eq!(t.world_width(), 312.8);
        assert_eq!(t.world_height(), 162.4);
    }

    #[test]
    fn surface_strictly_inside_band_rect() {
        for band in [0.5, 5.0, 40.0] {
            let t = TableSpec::new(302.8, 152.4, band).unwrap();
            let (min, max) = t.bounds();
            assert!(min.x < 0.0 && min.y < 0.0);
            assert!(max.x > t.height && max.y > t.width);
        }
    }

    #[test]
    fn clamp_ball_boundaries() {
        let t = TableSpec::default();
        assert_eq!(t.clamp_ball(Vec2::new(0.0, 0.0), 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(
            t.clamp_ball(Vec2::new(400.0, 200.0), 5.0),
            Vec2::new(297.8, 147.4)
        );
        // Interior points pass through untouched
        let p = Vec2::new(100.0, 80.0);
        assert_eq!(t.clamp_ball(p, 5.0), p);
    }

    #[test]
    fn clamp_ball_is_idempotent() {
        let t = TableSpec::default();
        for p in [
            Vec2::new(-50.0, -50.0),
            Vec2::new(1000.0, 1000.0),
            Vec2::new(151.4, 76.2),
            Vec2::new(5.0, 147.4),
        ] {
            let once = t.clamp_ball(p, 5.0);
            assert_eq!(t.clamp_ball(once, 5.0), once);
        }
    }

    #[test]
    fn clamp_ball_degenerate_table_does_not_panic() {
        let t = TableSpec::new(8.0, 6.0, 1.0).unwrap();
        let p = t.clamp_ball(Vec2::new(100.0, 100.0), 5.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
