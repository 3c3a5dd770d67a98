use billiards::{select_balls, DetectedBall, DetectionError, DetectionFrame, TargetRule};
use glam::DVec2;

fn ball(label: &str, conf: f64, cx_cm: f64, cy_cm: f64) -> DetectedBall {
    DetectedBall {
        label: label.to_string(),
        conf,
        cx_cm,
        cy_cm,
    }
}

fn frame() -> DetectionFrame {
    DetectionFrame {
        balls: vec![
            ball("0", 0.95, 10.0, 10.0),
            ball("3", 0.80, 30.0, 10.0),
            ball("1", 0.60, 50.0, 20.0),
            ball("7", 0.20, 60.0, 30.0), // below the confidence cutoff
        ],
    }
}

#[test]
fn parses_the_detector_payload() {
    let raw = r#"{"balls":[{"type":"0","conf":0.9,"cx_cm":12.5,"cy_cm":20.0}]}"#;
    let f: DetectionFrame = serde_json::from_str(raw).unwrap();
    assert_eq!(f.balls.len(), 1);
    assert!(f.balls[0].is_cue());
    assert_eq!(f.balls[0].position(), DVec2::new(0.125, 0.20));
}

#[test]
fn highest_confidence_rule_picks_the_strongest_non_cue_ball() {
    let input = select_balls(&frame(), TargetRule::HighestConfidence).unwrap();
    assert_eq!(input.cue, DVec2::new(0.10, 0.10));
    assert_eq!(input.target, DVec2::new(0.30, 0.10));
    // The remaining confident ball becomes an obstacle; the 0.20
    // detection was dropped.
    assert_eq!(input.obstacles, vec![DVec2::new(0.50, 0.20)]);
}

#[test]
fn lowest_number_rule_picks_the_smallest_ball_number() {
    let input = select_balls(&frame(), TargetRule::LowestNumber).unwrap();
    assert_eq!(input.target, DVec2::new(0.50, 0.20));
    assert_eq!(input.obstacles, vec![DVec2::new(0.30, 0.10)]);
}

#[test]
fn explicit_number_rule_finds_that_ball_or_fails() {
    let input = select_balls(&frame(), TargetRule::Number(3)).unwrap();
    assert_eq!(input.target, DVec2::new(0.30, 0.10));

    let err = select_balls(&frame(), TargetRule::Number(9)).unwrap_err();
    assert_eq!(err, DetectionError::TargetNotFound(9));
}

#[test]
fn low_confidence_detections_are_invisible() {
    // The only ball labelled "7" is under the cutoff.
    let err = select_balls(&frame(), TargetRule::Number(7)).unwrap_err();
    assert_eq!(err, DetectionError::TargetNotFound(7));
}

#[test]
fn missing_cue_ball_is_an_error() {
    let f = DetectionFrame {
        balls: vec![ball("1", 0.9, 10.0, 10.0)],
    };
    assert_eq!(
        select_balls(&f, TargetRule::HighestConfidence).unwrap_err(),
        DetectionError::CueNotFound
    );
}

#[test]
fn empty_frame_after_filtering_is_an_error() {
    let f = DetectionFrame {
        balls: vec![ball("0", 0.1, 10.0, 10.0)],
    };
    assert_eq!(
        select_balls(&f, TargetRule::HighestConfidence).unwrap_err(),
        DetectionError::NoConfidentBalls
    );
}

#[test]
fn cue_alone_has_no_target_candidate() {
    let f = DetectionFrame {
        balls: vec![ball("0", 0.9, 10.0, 10.0)],
    };
    assert_eq!(
        select_balls(&f, TargetRule::HighestConfidence).unwrap_err(),
        DetectionError::NoTargetCandidate
    );
}

#[test]
fn non_numeric_label_fails_the_lowest_number_rule() {
    let f = DetectionFrame {
        balls: vec![ball("0", 0.9, 10.0, 10.0), ball("cue?", 0.9, 30.0, 10.0)],
    };
    assert_eq!(
        select_balls(&f, TargetRule::LowestNumber).unwrap_err(),
        DetectionError::BadLabel("cue?".to_string())
    );
}
