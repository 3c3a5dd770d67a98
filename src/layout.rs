//! Random table layouts for demos and solver tests.

use glam::DVec2;
use rand::Rng;

use crate::config::{BALL_R, MIN_SEPARATION};
use crate::table::Table;

/// Placement attempts per ball before giving up on a crowded table.
const MAX_ATTEMPTS: usize = 1000;

/// Errors returned by layout generation.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Could not place a ball with the required separation.
    UnableToPlace,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::UnableToPlace => {
                write!(f, "unable to place a ball with the required separation")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A generated set of ball positions, all inside the inset rectangle and
/// pairwise separated by more than [`MIN_SEPARATION`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub cue: DVec2,
    pub target: DVec2,
    pub obstacles: Vec<DVec2>,
}

/// Generate a cue, a target and `n_obstacles` obstacle positions on
/// `table` by bounded rejection sampling. Generic over the RNG so tests
/// can pass a seeded `SmallRng` for reproducible layouts.
pub fn generate_layout<R: Rng>(
    rng: &mut R,
    table: &Table,
    n_obstacles: usize,
) -> Result<Layout, LayoutError> {
    let cue = random_pos(rng, table);
    let mut placed = vec![cue];
    for _ in 0..n_obstacles + 1 {
        let p = place_apart(rng, table, &placed)?;
        placed.push(p);
    }
    let obstacles = placed.split_off(2);
    Ok(Layout {
        cue: placed[0],
        target: placed[1],
        obstacles,
    })
}

fn random_pos<R: Rng>(rng: &mut R, table: &Table) -> DVec2 {
    DVec2::new(
        rng.random_range(BALL_R..table.width() - BALL_R),
        rng.random_range(BALL_R..table.height() - BALL_R),
    )
}

fn place_apart<R: Rng>(rng: &mut R, table: &Table, taken: &[DVec2]) -> Result<DVec2, LayoutError> {
    for _ in 0..MAX_ATTEMPTS {
        let p = random_pos(rng, table);
        if taken.iter().all(|q| p.distance(*q) > MIN_SEPARATION) {
            return Ok(p);
        }
    }
    Err(LayoutError::UnableToPlace)
}
