//! External shot-plan contract: normalized, rounded, serializable.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::solver::{Shot, ShotSolver};

/// Kind of planned shot, serialized as `"direct"` / `"bank-1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotKind {
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "bank-1")]
    Bank1,
}

/// The stable field set consumed by the controller and the renderer.
///
/// No-solution is represented as `Option::<ShotPlan>::None` end to end,
/// never as an error: a blocked table is a normal result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    #[serde(rename = "type")]
    pub kind: ShotKind,
    /// Index into the table's fixed pocket list (0-5).
    pub pocket_id: usize,
    /// Ghost-ball aim point, rounded to 4 decimals.
    pub ghost: [f64; 2],
    /// Heading from the cue ball to its first aim point, in degrees in
    /// `(-180, 180]`, rounded to 2 decimals.
    pub angle_deg: f64,
    /// Mirror aim point for bank shots, rounded to 4 decimals. Absent
    /// for direct shots.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rail_pt: Option<[f64; 2]>,
}

impl ShotPlan {
    /// Normalize a raw solver result. Direct shots aim at the ghost
    /// point; bank shots aim at the rail mirror point first.
    pub fn from_shot(cue: DVec2, shot: &Shot) -> Self {
        let (kind, aim) = match shot {
            Shot::Direct { ghost, .. } => (ShotKind::Direct, *ghost - cue),
            Shot::Bank { rail, .. } => (ShotKind::Bank1, *rail - cue),
        };
        ShotPlan {
            kind,
            pocket_id: shot.pocket(),
            ghost: round_point(shot.ghost(), 4),
            angle_deg: round_to(aim.y.atan2(aim.x).to_degrees(), 2),
            rail_pt: shot.rail().map(|r| round_point(r, 4)),
        }
    }
}

/// Solve and adapt in one step; `None` means no feasible shot.
pub fn compute_shot(
    solver: &ShotSolver,
    cue: DVec2,
    target: DVec2,
    obstacles: &[DVec2],
) -> Option<ShotPlan> {
    solver
        .solve(cue, target, obstacles)
        .map(|shot| ShotPlan::from_shot(cue, &shot))
}

fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (v * scale).round() / scale
}

fn round_point(p: DVec2, digits: i32) -> [f64; 2] {
    [round_to(p.x, digits), round_to(p.y, digits)]
}
