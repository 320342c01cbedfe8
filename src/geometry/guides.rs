//! Guide overlays: cushion intersections, arcs and reference rays
//!
//! All outputs are in table coordinates; renderers scale them.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{Point, angle_radians, calculate_aiming_angle, is_point_in_circle};
use crate::config::TableConfig;

/// Table cushion. Top is y = 0, left is x = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cushion {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where an extended guide line meets a cushion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeHit {
    #[serde(flatten)]
    pub point: Point,
    pub cushion: Cushion,
    /// The line meets the cushion square on, within tolerance
    pub square: bool,
}

/// An arc about a ball centre, angles in radians, start <= end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactArc {
    pub start: f64,
    pub end: f64,
}

impl ContactArc {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Nearest cushion crossed by the ray from `origin` along unit `dir`
fn cast_to_cushion(origin: DVec2, dir: DVec2, table: &TableConfig) -> Option<(Point, Cushion)> {
    let (length, width) = (table.length(), table.width());
    let mut best: Option<(f64, Point, Cushion)> = None;
    let mut consider = |t: f64, p: DVec2, cushion: Cushion| {
        if t > 0.0 && best.is_none_or(|(bt, _, _)| t < bt) {
            best = Some((t, p.into(), cushion));
        }
    };

    if dir.y < 0.0 {
        let t = -origin.y / dir.y;
        let x = origin.x + t * dir.x;
        if (0.0..=length).contains(&x) {
            consider(t, DVec2::new(x, 0.0), Cushion::Top);
        }
    }
    if dir.y > 0.0 {
        let t = (width - origin.y) / dir.y;
        let x = origin.x + t * dir.x;
        if (0.0..=length).contains(&x) {
            consider(t, DVec2::new(x, width), Cushion::Bottom);
        }
    }
    if dir.x < 0.0 {
        let t = -origin.x / dir.x;
        let y = origin.y + t * dir.y;
        if (0.0..=width).contains(&y) {
            consider(t, DVec2::new(0.0, y), Cushion::Left);
        }
    }
    if dir.x > 0.0 {
        let t = (length - origin.x) / dir.x;
        let y = origin.y + t * dir.y;
        if (0.0..=width).contains(&y) {
            consider(t, DVec2::new(length, y), Cushion::Right);
        }
    }

    best.map(|(_, p, cushion)| (p, cushion))
}

/// Extend the strike line through the object ball to the cushion
///
/// `None` when the balls coincide or the object ball is off the table.
pub fn guide_line_end(
    cue_ball: Point,
    object_ball: Point,
    table: &TableConfig,
    right_angle_tolerance_deg: f64,
    epsilon: f64,
) -> Option<EdgeHit> {
    let delta = object_ball.to_vec() - cue_ball.to_vec();
    if delta.length() <= epsilon || !table.contains(object_ball) {
        return None;
    }
    let dir = delta.normalize();
    let (point, cushion) = cast_to_cushion(object_ball.to_vec(), dir, table)?;

    let heading = dir.y.atan2(dir.x).to_degrees().abs();
    let square = match cushion {
        Cushion::Top | Cushion::Bottom => (heading - 90.0).abs() < right_angle_tolerance_deg,
        Cushion::Left | Cushion::Right => {
            heading < right_angle_tolerance_deg || (heading - 180.0).abs() < right_angle_tolerance_deg
        }
    };

    Some(EdgeHit {
        point,
        cushion,
        square,
    })
}

/// Extend the pocket-to-object line beyond the object ball to the cushion
///
/// `None` when the object ball sits on the pocket or off the table.
pub fn pocket_line_end(
    object_ball: Point,
    pocket: Point,
    table: &TableConfig,
    epsilon: f64,
) -> Option<Point> {
    let delta = object_ball.to_vec() - pocket.to_vec();
    if delta.length() <= epsilon || !table.contains(object_ball) {
        return None;
    }
    cast_to_cushion(object_ball.to_vec(), delta.normalize(), table).map(|(p, _)| p)
}

/// Sector of the object ball the cue ball covers at contact
pub fn thickness_arc(object_ball: Point, pocket: Point, angle: f64) -> ContactArc {
    let back = angle_radians(object_ball, pocket) + PI;
    let contact = angle.to_radians().sin().asin();
    ContactArc {
        start: back - contact,
        end: back + contact,
    }
}

/// Arc between the potting line and the strike line, drawn at the object ball
///
/// Takes the short way round, so the span always equals the cut angle.
pub fn angle_marker(cue_ball: Point, object_ball: Point, pocket: Point) -> ContactArc {
    let strike_line = angle_radians(cue_ball, object_ball);
    let pot_line = angle_radians(object_ball, pocket);
    // signed difference wrapped into [-π, π)
    let diff = (pot_line - strike_line + PI).rem_euclid(TAU) - PI;
    let end = strike_line + diff;
    ContactArc {
        start: strike_line.min(end),
        end: strike_line.max(end),
    }
}

/// Directions (radians) either side of the potting line for each reference angle
pub fn reference_rays(object_ball: Point, pocket: Point, angles_deg: &[f64]) -> Vec<(f64, f64)> {
    let pot_line = angle_radians(object_ball, pocket);
    angles_deg
        .iter()
        .map(|a| {
            let a = a.to_radians();
            (pot_line + a, pot_line - a)
        })
        .collect()
}

/// Quarter circle of touching balls around the object ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCircle {
    /// Radius of the dashed arc from the object ball centre
    pub arc_radius: f64,
    pub arc: ContactArc,
    /// Ball centres along the arc
    pub balls: Vec<Point>,
}

/// Reference arc `circle_radius` beyond the object ball edge
///
/// Starts on the extension of the pocket-to-object line and sweeps a quarter
/// turn. Balls are packed edge to edge along it.
pub fn position_circle(
    object_ball: Point,
    pocket: Point,
    ball_radius: f64,
    circle_radius: f64,
) -> PositionCircle {
    let start = angle_radians(pocket, object_ball);
    let inner = circle_radius + ball_radius;
    let arc_radius = inner + ball_radius;

    let diameter = ball_radius * 2.0;
    let count = if diameter > 0.0 {
        (FRAC_PI_2 * inner / diameter).floor() as usize
    } else {
        0
    };

    let balls = if count == 0 {
        Vec::new()
    } else {
        let step = FRAC_PI_2 / count as f64;
        (0..count)
            .map(|i| object_ball.offset(start + i as f64 * step, arc_radius))
            .collect()
    };

    PositionCircle {
        arc_radius,
        arc: ContactArc {
            start,
            end: start + FRAC_PI_2,
        },
        balls,
    }
}

/// Whether `point` grabs the ball centred at `ball`
#[inline]
pub fn is_point_on_ball(point: Point, ball: Point, ball_radius: f64, slop: f64) -> bool {
    is_point_in_circle(point, ball, ball_radius + slop)
}

/// Keep a dragged ball fully on the cloth
pub fn clamp_to_table(point: Point, ball_radius: f64, table: &TableConfig) -> Point {
    let max_x = (table.length() - ball_radius).max(ball_radius);
    let max_y = (table.width() - ball_radius).max(ball_radius);
    Point::new(
        point.x.clamp(ball_radius, max_x),
        point.y.clamp(ball_radius, max_y),
    )
}

/// Whether the cut can be made at all (the pocket is not behind the object ball)
#[inline]
pub fn is_pottable(cue_ball: Point, object_ball: Point, pocket: Point) -> bool {
    calculate_aiming_angle(cue_ball, object_ball, pocket) < 90.0
}
