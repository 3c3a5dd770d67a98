use serde::{Deserialize, Serialize};

use crate::plan::ShotPlan;

/// Messages exchanged between the planner and the stroke controller.
///
/// The controller drives the session: it asks for a plan once the arm is
/// parked and the planner answers with `Plan` or `NoPath`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "msg", rename_all = "snake_case")]
pub enum Message {
    /// Controller requests a shot plan for the current table state.
    Shoot,
    /// Planner reply carrying a feasible plan.
    Plan(ShotPlan),
    /// Planner reply when every pocket/mirror combination is blocked.
    NoPath,
    /// Generic acknowledgement.
    Ack,
    /// Controller ends the session.
    Exit,
}
