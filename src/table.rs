//! Table geometry: the playable rectangle and its six fixed pockets.

use glam::DVec2;

use crate::config::BALL_R;

/// Number of pockets on the table.
pub const NUM_POCKETS: usize = 6;

/// Tolerance for matching a point against a pocket coordinate. Pockets
/// are derived deterministically from the table size, so anything looser
/// than floating noise would be a bug.
const POCKET_MATCH_TOL: f64 = 1e-8;

/// Errors returned by table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// The rectangle cannot hold a cue and target ball with separation.
    TooSmall { width: f64, height: f64 },
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TableError::TooSmall { width, height } => write!(
                f,
                "table {}x{} m is too small (both sides must exceed {} m)",
                width,
                height,
                4.0 * BALL_R
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Immutable table geometry, shared read-only across solves.
///
/// Pockets keep a fixed index order the external contract depends on:
/// bottom-left, bottom-mid, bottom-right, top-left, top-mid, top-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    width: f64,
    height: f64,
    pockets: [DVec2; NUM_POCKETS],
}

impl Table {
    /// Build a table of `width` x `height` meters. Both sides must exceed
    /// `4 * BALL_R` so that cue and target fit with separation.
    pub fn new(width: f64, height: f64) -> Result<Self, TableError> {
        if !(width > 4.0 * BALL_R && height > 4.0 * BALL_R) {
            return Err(TableError::TooSmall { width, height });
        }
        let pockets = [
            DVec2::new(0.0, 0.0),
            DVec2::new(width / 2.0, 0.0),
            DVec2::new(width, 0.0),
            DVec2::new(0.0, height),
            DVec2::new(width / 2.0, height),
            DVec2::new(width, height),
        ];
        Ok(Self {
            width,
            height,
            pockets,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The six pockets in their fixed index order.
    pub fn pockets(&self) -> &[DVec2; NUM_POCKETS] {
        &self.pockets
    }

    /// True when a ball centered at `p` fits on the cloth, i.e. at least
    /// one radius away from every cushion.
    pub fn contains(&self, p: DVec2) -> bool {
        BALL_R <= p.x && p.x <= self.width - BALL_R && BALL_R <= p.y && p.y <= self.height - BALL_R
    }

    /// Mirror images of `p` across the four rail lines, in the fixed
    /// order left, right, bottom, top.
    pub fn mirrors(&self, p: DVec2) -> [DVec2; 4] {
        [
            DVec2::new(-p.x, p.y),
            DVec2::new(2.0 * self.width - p.x, p.y),
            DVec2::new(p.x, -p.y),
            DVec2::new(p.x, 2.0 * self.height - p.y),
        ]
    }

    /// Index of the pocket matching `p` within floating tolerance.
    pub fn pocket_index(&self, p: DVec2) -> Option<usize> {
        self.pockets
            .iter()
            .position(|pk| (*pk - p).abs().max_element() < POCKET_MATCH_TOL)
    }
}
