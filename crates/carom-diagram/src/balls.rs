//! Ball identities, colors, and placement.

use glam::Vec2;

use crate::table::TableSpec;
use crate::vector::Color;

/// Display radius of every ball (cm).
pub const BALL_RADIUS: f32 = 5.0;

/// The three carom balls, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallId {
    White,
    Red,
    Yellow,
}

impl BallId {
    /// Draw order: white, then red, then yellow.
    pub const ALL: [BallId; 3] = [BallId::White, BallId::Red, BallId::Yellow];

    /// Fixed identity color.
    pub fn color(self) -> Color {
        match self {
            BallId::White => Color::rgb(1.0, 1.0, 1.0),
            BallId::Red => Color::rgb(0.86, 0.0, 0.0),
            BallId::Yellow => Color::rgb(1.0, 0.84, 0.0),
        }
    }
}

/// Coordinates of the three balls in table space (cm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPlacement {
    pub white: Vec2,
    pub red: Vec2,
    pub yellow: Vec2,
}

impl BallPlacement {
    pub fn new(white: Vec2, red: Vec2, yellow: Vec2) -> Self {
        Self { white, red, yellow }
    }

    /// Coordinate of one ball.
    pub fn get(&self, id: BallId) -> Vec2 {
        match id {
            BallId::White => self.white,
            BallId::Red => self.red,
            BallId::Yellow => self.yellow,
        }
    }

    /// A copy with every ball clamped so its full circle stays on the
    /// playing surface. Per-axis, idempotent.
    pub fn clamped(&self, table: &TableSpec) -> Self {
        Self {
            white: table.clamp_ball(self.white, BALL_RADIUS),
            red: table.clamp_ball(self.red, BALL_RADIUS),
            yellow: table.clamp_ball(self.yellow, BALL_RADIUS),
        }
    }
}

impl Default for BallPlacement {
    /// The example shot position used across this repo's demos.
    fn default() -> Self {
        Self {
            white: Vec2::new(30.0, 70.0),
            red: Vec2::new(220.0, 100.0),
            yellow: Vec2::new(220.0, 40.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_order_is_white_red_yellow() {
        assert_eq!(BallId::ALL, [BallId::White, BallId::Red, BallId::Yellow]);
    }

    #[test]
    fn identity_colors_are_opaque() {
        for id in BallId::ALL {
            assert_eq!(id.color().a, 1.0);
        }
        assert_eq!(BallId::White.color(), Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn clamped_pulls_corners_inside() {
        let table = TableSpec::default();
        let placement = BallPlacement::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 200.0),
            Vec2::new(100.0, 100.0),
        );
        let clamped = placement.clamped(&table);
        assert_eq!(clamped.white, Vec2::new(5.0, 5.0));
        assert_eq!(clamped.red, Vec2::new(297.8, 147.4));
        assert_eq!(clamped.yellow, Vec2::new(100.0, 100.0));

        // Idempotent
        assert_eq!(clamped.clamped(&table), clamped);
    }

    #[test]
    fn default_placement_is_on_the_surface() {
        let table = TableSpec::default();
        let placement = BallPlacement::default();
        for id in BallId::ALL {
            assert!(table.contains(placement.get(id)));
        }
        // Already legal, so clamping changes nothing
        assert_eq!(placement.clamped(&table), placement);
    }
}
