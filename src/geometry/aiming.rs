//! Ghost ball, contact point and angle-table lookup

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Point, angle_radians, calculate_aiming_angle, distance};
use crate::config::AimingAngleEntry;
use crate::error::ConfigError;

/// Angle-table row matched to a measured cut angle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimingData {
    /// Descriptive fields copied from the nearest row
    #[serde(flatten)]
    pub entry: AimingAngleEntry,
    /// The angle that was looked up (degrees)
    pub actual_angle: f64,
    /// cos(actual_angle), exact rather than tabulated
    pub actual_cut_point: f64,
    /// True when the matched row's angle differs from the looked-up angle
    pub interpolated: bool,
}

/// Nearest row of `table` to `angle` (degrees)
///
/// Rows are scanned in table order and the first of several equidistant rows
/// wins, so the table does not need to be sorted.
pub fn get_aiming_data_by_angle(
    angle: f64,
    table: &[AimingAngleEntry],
) -> Result<AimingData, ConfigError> {
    let mut rows = table.iter();
    let mut closest = rows.next().ok_or(ConfigError::EmptyAngleTable)?;
    let mut min_diff = (angle - closest.angle).abs();

    for row in rows {
        let diff = (angle - row.angle).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = row;
        }
    }

    Ok(AimingData {
        entry: closest.clone(),
        actual_angle: angle,
        actual_cut_point: angle.to_radians().cos(),
        interpolated: min_diff != 0.0,
    })
}

/// Ghost-ball centre plus the cut point of the shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimingPoint {
    #[serde(flatten)]
    pub pos: Point,
    pub cut_point: f64,
}

/// Where the cue ball's centre must be at contact to send the object ball at the pocket
///
/// Two radii back from the object ball along the pocket-to-object line.
pub fn calculate_aiming_point(
    cue_ball: Point,
    object_ball: Point,
    pocket: Point,
    ball_radius: f64,
) -> AimingPoint {
    let pocket_angle = angle_radians(object_ball, pocket);
    let cut = calculate_aiming_angle(cue_ball, object_ball, pocket).to_radians();

    AimingPoint {
        pos: object_ball.offset(pocket_angle + PI, ball_radius * 2.0),
        cut_point: cut.cos(),
    }
}

/// Contact point on the object ball's circumference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(flatten)]
    pub pos: Point,
    /// Offset from the point facing away from the pocket (degrees, 0-90)
    pub offset_angle: f64,
}

/// Contact point for a cut of `angle` degrees
///
/// `asin(sin(angle))` folds cuts past 90° back onto the near hemisphere.
pub fn calculate_contact_point(
    object_ball: Point,
    pocket: Point,
    angle: f64,
    ball_radius: f64,
) -> ContactPoint {
    let pocket_angle = angle_radians(object_ball, pocket);
    let offset = angle.to_radians().sin().asin();

    ContactPoint {
        pos: object_ball.offset(pocket_angle + PI + offset, ball_radius),
        offset_angle: offset.to_degrees(),
    }
}

/// Point on the cue-ball-to-aim-point ray one radius short of the object ball distance
///
/// Approximates where the aiming line crosses the object ball's edge.
pub fn calculate_aim_line_intersection(
    cue_ball: Point,
    object_ball: Point,
    aim_point: Point,
    ball_radius: f64,
) -> Point {
    let theta = angle_radians(cue_ball, aim_point);
    let dist = distance(cue_ball, object_ball) - ball_radius;
    cue_ball.offset(theta, dist)
}

/// Which side of the strike line the pocket lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutSide {
    /// Positive cross product of strike line and potting line
    Left,
    Right,
    Straight,
}

/// Side of the cut from the sign of (cue→object) × (object→pocket)
pub fn cut_side(cue_ball: Point, object_ball: Point, pocket: Point, epsilon: f64) -> CutSide {
    let strike = object_ball.to_vec() - cue_ball.to_vec();
    let pot = pocket.to_vec() - object_ball.to_vec();
    let scale = strike.length() * pot.length();
    if scale <= epsilon {
        return CutSide::Straight;
    }
    // sine of the signed angle, independent of line lengths
    let sin = strike.perp_dot(pot) / scale;
    if sin.abs() <= epsilon {
        CutSide::Straight
    } else if sin > 0.0 {
        CutSide::Left
    } else {
        CutSide::Right
    }
}

/// Signed aim offset for the aim-guide panel
///
/// Magnitude `2 · radius · sin(cut)`; the aim line moves opposite to the side
/// the pocket is on, so a pocket on the left gives a negative offset. Zero
/// whenever `cut_side` reports `Straight`, coincident balls included.
pub fn aim_offset(
    cue_ball: Point,
    object_ball: Point,
    pocket: Point,
    radius: f64,
    epsilon: f64,
) -> f64 {
    let cut = calculate_aiming_angle(cue_ball, object_ball, pocket).to_radians();
    let magnitude = 2.0 * radius * cut.sin();

    match cut_side(cue_ball, object_ball, pocket, epsilon) {
        CutSide::Straight => 0.0,
        CutSide::Left => -magnitude,
        CutSide::Right => magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Difficulty};
    use proptest::prelude::*;

    const R: f64 = 26.25;
    const EPS: f64 = 1e-6;

    fn entry(angle: f64, label: &str) -> AimingAngleEntry {
        AimingAngleEntry {
            angle,
            aim_position: label.to_string(),
            thickness: label.to_string(),
            contact_ratio: label.to_string(),
            difficulty: Difficulty::Medium,
            cut_point: None,
        }
    }

    #[test]
    fn test_lookup_nearest() {
        let table = Config::default().aiming_method.angle_data;
        let data = get_aiming_data_by_angle(29.0, &table).unwrap();
        assert_eq!(data.entry.thickness, "half ball");
        assert_eq!(data.actual_angle, 29.0);
        assert!(data.interpolated);

        let exact = get_aiming_data_by_angle(30.0, &table).unwrap();
        assert!(!exact.interpolated);
    }

    #[test]
    fn test_lookup_unsorted_table() {
        let table = vec![entry(60.0, "a"), entry(0.0, "b"), entry(30.0, "c")];
        let data = get_aiming_data_by_angle(27.0, &table).unwrap();
        assert_eq!(data.entry.aim_position, "c");
    }

    #[test]
    fn test_lookup_tie_takes_first_in_table_order() {
        let table = vec![entry(20.0, "second-by-angle"), entry(10.0, "first-by-angle")];
        let data = get_aiming_data_by_angle(15.0, &table).unwrap();
        assert_eq!(data.entry.aim_position, "second-by-angle");

        let reversed = vec![entry(10.0, "first-by-angle"), entry(20.0, "second-by-angle")];
        let data = get_aiming_data_by_angle(15.0, &reversed).unwrap();
        assert_eq!(data.entry.aim_position, "first-by-angle");
    }

    #[test]
    fn test_lookup_empty_table_fails() {
        assert!(matches!(
            get_aiming_data_by_angle(10.0, &[]),
            Err(ConfigError::EmptyAngleTable)
        ));
    }

    #[test]
    fn test_ghost_ball_straight_shot() {
        let cue = Point::new(0.0, 0.0);
        let object = Point::new(500.0, 0.0);
        let pocket = Point::new(1000.0, 0.0);
        let aim = calculate_aiming_point(cue, object, pocket, R);
        assert!((aim.pos.x - (500.0 - 2.0 * R)).abs() < 1e-9);
        assert!(aim.pos.y.abs() < 1e-9);
        assert!((aim.cut_point - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ghost_ball_follows_pocket_direction() {
        // Pocket straight "down" the table from the object ball
        let cue = Point::new(0.0, 0.0);
        let object = Point::new(100.0, 0.0);
        let pocket = Point::new(100.0, 100.0);
        let aim = calculate_aiming_point(cue, object, pocket, R);
        assert!((aim.pos.x - 100.0).abs() < 1e-9);
        assert!((aim.pos.y + 2.0 * R).abs() < 1e-9);
        assert!(aim.cut_point.abs() < 1e-12);
        // Always two radii from the object ball
        assert!((distance(aim.pos, object) - 2.0 * R).abs() < 1e-9);
    }

    #[test]
    fn test_contact_point() {
        let object = Point::new(100.0, 100.0);
        let pocket = Point::new(200.0, 100.0);

        let straight = calculate_contact_point(object, pocket, 0.0, R);
        assert!((straight.pos.x - (100.0 - R)).abs() < 1e-9);
        assert!((straight.pos.y - 100.0).abs() < 1e-9);
        assert_eq!(straight.offset_angle, 0.0);

        let cut = calculate_contact_point(object, pocket, 30.0, R);
        assert!((cut.offset_angle - 30.0).abs() < 1e-9);
        assert!((distance(cut.pos, object) - R).abs() < 1e-9);

        // Beyond 90° folds back
        let over = calculate_contact_point(object, pocket, 120.0, R);
        assert!((over.offset_angle - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_aim_line_intersection() {
        let cue = Point::new(0.0, 0.0);
        let object = Point::new(300.0, 0.0);
        let p = calculate_aim_line_intersection(cue, object, Point::new(300.0 - 2.0 * R, 0.0), R);
        assert!((p.x - (300.0 - R)).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_cut_side_and_offset_sign() {
        let cue = Point::new(0.0, 0.0);
        let object = Point::new(100.0, 0.0);
        let up = Point::new(200.0, 100.0);
        let down = Point::new(200.0, -100.0);

        assert_eq!(cut_side(cue, object, up, 1e-9), CutSide::Left);
        assert_eq!(cut_side(cue, object, down, 1e-9), CutSide::Right);
        assert_eq!(
            cut_side(cue, object, Point::new(300.0, 0.0), 1e-9),
            CutSide::Straight
        );
        assert_eq!(cut_side(cue, cue, up, 1e-9), CutSide::Straight);

        let left = aim_offset(cue, object, up, R, EPS);
        let right = aim_offset(cue, object, down, R, EPS);
        assert!(left < 0.0);
        assert!(right > 0.0);
        // 45° cut
        assert!((right - 2.0 * R * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_aim_offset_straight_is_zero() {
        let offset = aim_offset(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(500.0, 0.0),
            R,
            EPS,
        );
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_coincident_cue_and_object() {
        let p = Point::new(500.0, 500.0);
        let pocket = Point::new(500.0, 900.0);
        assert_eq!(cut_side(p, p, pocket, EPS), CutSide::Straight);
        assert_eq!(aim_offset(p, p, pocket, R, EPS), 0.0);
    }

    proptest! {
        #[test]
        fn degenerate_positions_stay_finite_and_agree(
            x in 0.0..3569.0f64,
            y in 0.0..1778.0f64,
            px in 0.0..3569.0f64,
            py in 0.0..1778.0f64,
        ) {
            let p = Point::new(x, y);
            let other = Point::new(px, py);
            // cue on the object ball, then pocket on the object ball
            for (cue, object, pocket) in [(p, p, other), (other, p, p)] {
                let angle = calculate_aiming_angle(cue, object, pocket);
                let ghost = calculate_aiming_point(cue, object, pocket, R);
                let contact = calculate_contact_point(object, pocket, angle, R);
                let end = calculate_aim_line_intersection(cue, object, ghost.pos, R);
                prop_assert!(angle.is_finite());
                prop_assert!(ghost.pos.x.is_finite() && ghost.pos.y.is_finite());
                prop_assert!(ghost.cut_point.is_finite());
                prop_assert!(contact.pos.x.is_finite() && contact.pos.y.is_finite());
                prop_assert!(end.x.is_finite() && end.y.is_finite());
                prop_assert_eq!(cut_side(cue, object, pocket, EPS), CutSide::Straight);
                prop_assert_eq!(aim_offset(cue, object, pocket, R, EPS), 0.0);
            }
        }

        #[test]
        fn cut_point_is_exact_cosine(angle in 0.0..=180.0f64) {
            let table = Config::default().aiming_method.angle_data;
            let data = get_aiming_data_by_angle(angle, &table).unwrap();
            prop_assert!((data.actual_cut_point - angle.to_radians().cos()).abs() < 1e-12);
        }

        #[test]
        fn mirrored_pocket_flips_offset(dist in 100.0..2000.0f64, theta in 0.05..3.0f64) {
            let cue = Point::new(-500.0, 0.0);
            let object = Point::ORIGIN;
            let pocket = object.offset(theta, dist);
            let mirrored = Point::new(pocket.x, -pocket.y);
            let a = aim_offset(cue, object, pocket, R, EPS);
            let b = aim_offset(cue, object, mirrored, R, EPS);
            prop_assert!((a + b).abs() < 1e-9);
            prop_assert!(a < 0.0);
        }
    }
}
