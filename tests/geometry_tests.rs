use billiards::{angle, path_clear, Ball, BallRole, Table, BALL_R};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

fn table() -> Table {
    Table::new(0.73, 0.375).unwrap()
}

#[test]
fn angle_between_perpendicular_vectors() {
    assert!((angle(DVec2::X, DVec2::Y) - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn angle_between_parallel_vectors_is_zero() {
    assert!(angle(DVec2::new(2.0, 1.0), DVec2::new(4.0, 2.0)).abs() < 1e-12);
}

#[test]
fn angle_between_opposite_vectors_is_pi() {
    assert!((angle(DVec2::X, -DVec2::X) - PI).abs() < 1e-12);
}

#[test]
fn angle_of_degenerate_vector_is_pi() {
    assert_eq!(angle(DVec2::ZERO, DVec2::X), PI);
    assert_eq!(angle(DVec2::X, DVec2::new(1e-12, 0.0)), PI);
}

#[test]
fn empty_table_path_is_clear() {
    let t = table();
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.6, 0.3);
    assert!(path_clear(p1, p2, &[], &[], Some(&t)));
}

#[test]
fn zero_length_segment_is_never_clear() {
    let p = DVec2::new(0.1, 0.1);
    assert!(!path_clear(p, p, &[], &[], None));
}

#[test]
fn midpoint_obstacle_blocks_the_path() {
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.5, 0.1);
    let mid = (p1 + p2) / 2.0;
    let balls = [Ball::new(BallRole::Obstacle(0), mid)];
    assert!(!path_clear(p1, p2, &balls, &[], None));
}

#[test]
fn obstacle_beyond_the_endpoint_is_tested_against_the_endpoint() {
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.3, 0.1);
    // On the infinite line but past p2: the clamped projection measures
    // from p2 itself.
    let near = [Ball::new(BallRole::Obstacle(0), DVec2::new(0.32, 0.1))];
    let far = [Ball::new(BallRole::Obstacle(0), DVec2::new(0.33, 0.1))];
    assert!(!path_clear(p1, p2, &near, &[], None));
    assert!(path_clear(p1, p2, &far, &[], None));
}

#[test]
fn ignored_roles_do_not_block() {
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.5, 0.1);
    let balls = [
        Ball::new(BallRole::Cue, DVec2::new(0.2, 0.1)),
        Ball::new(BallRole::Target, DVec2::new(0.4, 0.1)),
    ];
    assert!(path_clear(
        p1,
        p2,
        &balls,
        &[BallRole::Cue, BallRole::Target],
        None
    ));
    assert!(!path_clear(p1, p2, &balls, &[BallRole::Cue], None));
}

#[test]
fn ball_at_exactly_two_radii_passes() {
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.5, 0.1);
    let balls = [Ball::new(
        BallRole::Obstacle(0),
        DVec2::new(0.3, 0.1 + 2.0 * BALL_R),
    )];
    assert!(path_clear(p1, p2, &balls, &[], None));
}

#[test]
fn rail_check_rejects_segments_leaving_the_inset_rectangle() {
    let t = table();
    let p1 = DVec2::new(0.1, 0.1);
    let p2 = DVec2::new(0.005, 0.1);
    assert!(!path_clear(p1, p2, &[], &[], Some(&t)));
    // Without the rail check only ball obstruction matters.
    assert!(path_clear(p1, p2, &[], &[], None));
}
