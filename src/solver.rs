//! Greedy direct-then-bank shot search over the six pockets.

use glam::DVec2;

use crate::ball::{Ball, BallRole};
use crate::config::BALL_R;
use crate::geometry::{angle, path_clear};
use crate::table::{Table, NUM_POCKETS};

/// A feasible shot. `pocket` is the stable index (0-5) into the solver
/// table's pocket list; the ghost point is the cue-ball center at contact
/// needed to send the target toward that pocket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shot {
    /// Straight cue travel to the ghost point.
    Direct { pocket: usize, ghost: DVec2 },
    /// One-cushion bank: the cue ball is aimed at the mirror image of the
    /// ghost point across a rail, striking that cushion on the way.
    Bank {
        pocket: usize,
        ghost: DVec2,
        rail: DVec2,
    },
}

impl Shot {
    pub fn pocket(&self) -> usize {
        match self {
            Shot::Direct { pocket, .. } | Shot::Bank { pocket, .. } => *pocket,
        }
    }

    pub fn ghost(&self) -> DVec2 {
        match self {
            Shot::Direct { ghost, .. } | Shot::Bank { ghost, .. } => *ghost,
        }
    }

    pub fn rail(&self) -> Option<DVec2> {
        match self {
            Shot::Direct { .. } => None,
            Shot::Bank { rail, .. } => Some(*rail),
        }
    }
}

const IGNORE_CUE_TARGET: [BallRole; 2] = [BallRole::Cue, BallRole::Target];
const IGNORE_TARGET: [BallRole; 1] = [BallRole::Target];

/// Geometric solver bound to one table.
///
/// The search is greedy and first-feasible: pockets are tried in priority
/// order, a direct shot is preferred, and a blocked pocket falls back to
/// single-rail banks before the next pocket is considered. This trades
/// completeness for determinism and speed; work is bounded at six pockets
/// with a handful of clearance checks each.
#[derive(Debug, Clone)]
pub struct ShotSolver {
    table: Table,
}

impl ShotSolver {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Candidate pocket indices, ascending by the angle between the
    /// cue->target direction and the target->pocket direction, tie-broken
    /// by target->pocket distance. Smaller angle means the pocket is more
    /// in line with the incoming shot; the order is a pure function of
    /// the positions and therefore reproducible.
    pub fn pocket_order(&self, cue: DVec2, target: DVec2) -> [usize; NUM_POCKETS] {
        let v_ct = target - cue;
        let mut order: [usize; NUM_POCKETS] = core::array::from_fn(|i| i);
        order.sort_by(|&a, &b| {
            let pa = self.table.pockets()[a];
            let pb = self.table.pockets()[b];
            angle(v_ct, pa - target)
                .total_cmp(&angle(v_ct, pb - target))
                .then(target.distance(pa).total_cmp(&target.distance(pb)))
        });
        order
    }

    /// Find the first feasible shot, or `None` when every pocket/mirror
    /// combination is blocked. A blocked table is an expected outcome,
    /// not an error.
    pub fn solve(&self, cue: DVec2, target: DVec2, obstacles: &[DVec2]) -> Option<Shot> {
        let mut balls = Vec::with_capacity(obstacles.len() + 2);
        balls.push(Ball::new(BallRole::Cue, cue));
        balls.push(Ball::new(BallRole::Target, target));
        balls.extend(
            obstacles
                .iter()
                .enumerate()
                .map(|(i, &p)| Ball::new(BallRole::Obstacle(i), p)),
        );

        for pocket in self.pocket_order(cue, target) {
            let pk = self.table.pockets()[pocket];
            let ghost = match self.ghost_point(target, pk) {
                Some(g) if self.table.contains(g) => g,
                _ => {
                    log::debug!("pocket {pocket}: ghost point unreachable, skipped");
                    continue;
                }
            };

            // The target leg only cares about ball obstruction; the
            // target is already in play and its run to the pocket is
            // short, so rail bounds are not re-checked here.
            if !path_clear(target, pk, &balls, &IGNORE_TARGET, None) {
                continue;
            }

            if path_clear(cue, ghost, &balls, &IGNORE_CUE_TARGET, Some(&self.table)) {
                return Some(Shot::Direct { pocket, ghost });
            }

            // Single-rail fallback: aim at the mirror image of the ghost
            // point across each rail, in fixed order. The mirror legs
            // skip the rail-bound check since the fold happens at the
            // cushion the mirror was built from.
            for rail in self.table.mirrors(ghost) {
                if path_clear(cue, rail, &balls, &IGNORE_CUE_TARGET, None)
                    && path_clear(rail, ghost, &balls, &IGNORE_CUE_TARGET, None)
                {
                    return Some(Shot::Bank { pocket, ghost, rail });
                }
            }
        }
        None
    }

    /// Cue-ball center at contact: `2 * BALL_R` beyond the target along
    /// the pocket->target line, so the target sits between the ghost
    /// point and the pocket. `None` when the target coincides with the
    /// pocket.
    fn ghost_point(&self, target: DVec2, pocket: DVec2) -> Option<DVec2> {
        let v = (target - pocket).try_normalize()?;
        Some(target + v * (2.0 * BALL_R))
    }
}
