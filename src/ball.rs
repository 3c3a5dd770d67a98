//! Ball identity and position values used by the solver.

use glam::DVec2;

/// Role of a ball within a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallRole {
    /// The white ball the player strikes.
    Cue,
    /// The ball to be sunk.
    Target,
    /// Any other ball on the table, numbered by input order.
    Obstacle(usize),
}

/// A ball snapshot: identity plus table-plane position in meters. All
/// balls share the radius [`crate::config::BALL_R`]; a solve takes a
/// fresh set of these and never mutates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub role: BallRole,
    pub pos: DVec2,
}

impl Ball {
    pub fn new(role: BallRole, pos: DVec2) -> Self {
        Self { role, pos }
    }
}
