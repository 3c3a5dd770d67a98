//! Pure vector math and the straight-path obstruction test.

use glam::DVec2;

use crate::ball::{Ball, BallRole};
use crate::config::{BALL_R, CLEARANCE_TOL, EPS};
use crate::table::Table;

/// Unconstrained angle in `[0, PI]` between two vectors, via the clamped
/// arccosine of the normalized dot product. A near-zero input reports
/// `PI` (maximally misaligned) so callers never divide by zero.
pub fn angle(u: DVec2, v: DVec2) -> f64 {
    let nu = u.length();
    let nv = v.length();
    if nu < EPS || nv < EPS {
        return std::f64::consts::PI;
    }
    (u.dot(v) / (nu * nv)).clamp(-1.0, 1.0).acos()
}

/// True when a ball of radius `BALL_R` can travel the segment `p1..p2`
/// without touching any ball whose role is outside `ignore` and, when a
/// table is given, without its silhouette crossing a cushion.
///
/// Each candidate center is projected onto the segment with the
/// projection parameter clamped to the endpoints, so a ball beyond either
/// end is tested against the nearest endpoint rather than the infinite
/// line. Two radii is the minimum center-to-center clearance.
///
/// The rail test checks the segment's bounding box against the inset
/// rectangle `[BALL_R, W-BALL_R] x [BALL_R, H-BALL_R]`. That is
/// conservative, but the segments it gates run between already-validated
/// interior points.
///
/// A zero-length segment is never clear.
pub fn path_clear(
    p1: DVec2,
    p2: DVec2,
    balls: &[Ball],
    ignore: &[BallRole],
    rail: Option<&Table>,
) -> bool {
    let v = p2 - p1;
    let len = v.length();
    if len < EPS {
        return false;
    }
    let dir = v / len;

    for ball in balls {
        if ignore.contains(&ball.role) {
            continue;
        }
        let proj = (ball.pos - p1).dot(dir).clamp(0.0, len);
        let closest = p1 + proj * dir;
        if closest.distance(ball.pos) < 2.0 * BALL_R - CLEARANCE_TOL {
            return false;
        }
    }

    if let Some(table) = rail {
        let min = p1.min(p2);
        let max = p1.max(p2);
        if min.x < BALL_R - CLEARANCE_TOL
            || max.x > table.width() - BALL_R + CLEARANCE_TOL
            || min.y < BALL_R - CLEARANCE_TOL
            || max.y > table.height() - BALL_R + CLEARANCE_TOL
        {
            return false;
        }
    }
    true
}
