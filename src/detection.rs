//! Detector input: confidence filtering, unit conversion and target
//! selection.
//!
//! The vision collaborator reports ball centers in centimeters in the
//! table plane, with the ball number as a string label (`"0"` is the cue
//! ball). This module turns one such frame into solver input in meters.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::MIN_CONFIDENCE;

/// One detected ball as reported by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedBall {
    /// Ball number as a string; `"0"` is the cue ball.
    #[serde(rename = "type")]
    pub label: String,
    /// Detector confidence in `[0, 1]`.
    pub conf: f64,
    pub cx_cm: f64,
    pub cy_cm: f64,
}

impl DetectedBall {
    pub fn position(&self) -> DVec2 {
        cm_to_m(self.cx_cm, self.cy_cm)
    }

    pub fn is_cue(&self) -> bool {
        self.label == "0"
    }

    fn number(&self) -> Result<u32, DetectionError> {
        self.label
            .parse()
            .map_err(|_| DetectionError::BadLabel(self.label.clone()))
    }
}

/// Top-level detector payload: `{"balls": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    pub balls: Vec<DetectedBall>,
}

/// How to choose the target ball among non-cue detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRule {
    /// The highest-confidence non-cue detection.
    HighestConfidence,
    /// The lowest-numbered ball still on the table.
    LowestNumber,
    /// A specific ball number.
    Number(u32),
}

/// Errors raised while extracting solver input from a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// No detection met the confidence threshold.
    NoConfidentBalls,
    /// The cue ball was not detected.
    CueNotFound,
    /// No non-cue ball available to target.
    NoTargetCandidate,
    /// The requested ball number was not detected.
    TargetNotFound(u32),
    /// A ball label was not numeric where a number was required.
    BadLabel(String),
}

impl core::fmt::Display for DetectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DetectionError::NoConfidentBalls => {
                write!(f, "no detection with confidence >= {MIN_CONFIDENCE}")
            }
            DetectionError::CueNotFound => write!(f, "cue ball not detected"),
            DetectionError::NoTargetCandidate => write!(f, "no non-cue ball to target"),
            DetectionError::TargetNotFound(n) => write!(f, "ball {n} not detected"),
            DetectionError::BadLabel(l) => write!(f, "ball label {l:?} is not a number"),
        }
    }
}

impl std::error::Error for DetectionError {}

/// Solver input extracted from one detection frame, in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverInput {
    pub cue: DVec2,
    pub target: DVec2,
    pub obstacles: Vec<DVec2>,
}

/// Convert detector centimeters to table meters.
pub fn cm_to_m(cx_cm: f64, cy_cm: f64) -> DVec2 {
    DVec2::new(cx_cm / 100.0, cy_cm / 100.0)
}

/// Drop low-confidence detections and split the remainder into cue,
/// target and obstacles according to `rule`.
pub fn select_balls(frame: &DetectionFrame, rule: TargetRule) -> Result<SolverInput, DetectionError> {
    let confident: Vec<&DetectedBall> = frame
        .balls
        .iter()
        .filter(|b| b.conf >= MIN_CONFIDENCE)
        .collect();
    if confident.is_empty() {
        return Err(DetectionError::NoConfidentBalls);
    }

    let cue_idx = confident
        .iter()
        .position(|b| b.is_cue())
        .ok_or(DetectionError::CueNotFound)?;

    let target_idx = match rule {
        TargetRule::HighestConfidence => confident
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_cue())
            .max_by(|(_, a), (_, b)| a.conf.total_cmp(&b.conf))
            .map(|(i, _)| i)
            .ok_or(DetectionError::NoTargetCandidate)?,
        TargetRule::LowestNumber => {
            let mut best: Option<(u32, usize)> = None;
            for (i, b) in confident.iter().enumerate() {
                if b.is_cue() {
                    continue;
                }
                let n = b.number()?;
                if best.is_none_or(|(bn, _)| n < bn) {
                    best = Some((n, i));
                }
            }
            best.ok_or(DetectionError::NoTargetCandidate)?.1
        }
        TargetRule::Number(n) => confident
            .iter()
            .position(|b| b.label == n.to_string())
            .ok_or(DetectionError::TargetNotFound(n))?,
    };

    let obstacles = confident
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != cue_idx && *i != target_idx)
        .map(|(_, b)| b.position())
        .collect();

    Ok(SolverInput {
        cue: confident[cue_idx].position(),
        target: confident[target_idx].position(),
        obstacles,
    })
}
