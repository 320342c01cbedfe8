//! Everything a renderer needs to draw the current shot

use std::fmt;

use serde::Serialize;

use crate::balls::ObjectBall;
use crate::config::Pocket;
use crate::consts::REFERENCE_ANGLES_DEG;
use crate::error::ConfigError;
use crate::geometry::{
    AimingData, AimingPoint, ContactArc, ContactPoint, CutSide, EdgeHit, Point, PositionCircle,
    aim_offset, angle_marker, calculate_aim_line_intersection, calculate_aiming_angle,
    calculate_aiming_point, calculate_contact_point, cut_side, get_aiming_data_by_angle,
    guide_line_end, is_pottable, pocket_line_end, position_circle, reference_rays, thickness_arc,
};
use crate::session::Session;

/// Geometry of the shot set up in a session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotReport {
    pub cue_ball: Point,
    pub object_ball: ObjectBall,
    pub pocket: Pocket,
    /// Cut angle in degrees, 0 (full ball) to 180
    pub angle: f64,
    pub aiming: AimingData,
    pub ghost_ball: AimingPoint,
    pub contact: ContactPoint,
    pub aim_line_end: Point,
    pub aim_offset: f64,
    pub cut_side: CutSide,
    pub pottable: bool,
    pub thickness: ContactArc,
    pub angle_marker: ContactArc,
    pub guide_line: Option<EdgeHit>,
    pub pocket_line: Option<Point>,
    pub reference_rays: Vec<(f64, f64)>,
    /// Only when the position circle overlay is on
    pub position_circle: Option<PositionCircle>,
}

impl ShotReport {
    /// Compute the report for the session's current balls and pocket
    pub fn compute(session: &Session) -> Result<Self, ConfigError> {
        let config = session.config();
        let tol = &config.tolerances;
        let radius = config.ball_radius();

        let cue = session.cue_ball();
        let object_ball = session.object_ball();
        let obj = object_ball.pos;
        let pocket = session.selected_pocket().clone();
        let target = pocket.pos;

        let angle = calculate_aiming_angle(cue, obj, target);
        let aiming = get_aiming_data_by_angle(angle, config.angle_table())?;
        let ghost_ball = calculate_aiming_point(cue, obj, target, radius);
        let contact = calculate_contact_point(obj, target, angle, radius);
        let aim_line_end = calculate_aim_line_intersection(cue, obj, ghost_ball.pos, radius);

        let position_circle = session
            .display()
            .show_position_circle
            .then(|| position_circle(obj, target, radius, tol.position_circle_radius));

        Ok(Self {
            cue_ball: cue,
            object_ball,
            angle,
            aiming,
            ghost_ball,
            contact,
            aim_line_end,
            aim_offset: aim_offset(cue, obj, target, radius, tol.distance_epsilon),
            cut_side: cut_side(cue, obj, target, tol.distance_epsilon),
            pottable: is_pottable(cue, obj, target),
            thickness: thickness_arc(obj, target, angle),
            angle_marker: angle_marker(cue, obj, target),
            guide_line: guide_line_end(
                cue,
                obj,
                &config.table,
                tol.right_angle_degrees,
                tol.distance_epsilon,
            ),
            pocket_line: pocket_line_end(obj, target, &config.table, tol.distance_epsilon),
            reference_rays: reference_rays(obj, target, &REFERENCE_ANGLES_DEG),
            position_circle,
            pocket,
        })
    }
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = &self.aiming.entry;
        writeln!(f, "Cue ball:     {}", self.cue_ball)?;
        writeln!(
            f,
            "Object ball:  {} {}{}",
            self.object_ball.color,
            self.object_ball.pos,
            if self.object_ball.locked { " (locked)" } else { "" }
        )?;
        writeln!(f, "Pocket:       {} ({}) {}", self.pocket.name, self.pocket.id, self.pocket.pos)?;
        writeln!(f, "Cut angle:    {:.1}°", self.angle)?;
        writeln!(f, "Aim:          {}", entry.aim_position)?;
        writeln!(f, "Thickness:    {} ({})", entry.thickness, entry.contact_ratio)?;
        writeln!(
            f,
            "Difficulty:   {} {}",
            entry.difficulty.as_str(),
            entry.difficulty.stars()
        )?;
        writeln!(f, "Ghost ball:   {}", self.ghost_ball.pos)?;
        writeln!(
            f,
            "Contact:      {} ({:.1}° off centre)",
            self.contact.pos, self.contact.offset_angle
        )?;
        writeln!(f, "Aim offset:   {:.1} mm {:?}", self.aim_offset, self.cut_side)?;
        if let Some(hit) = &self.guide_line {
            writeln!(
                f,
                "Guide line:   {} on {:?} cushion{}",
                hit.point,
                hit.cushion,
                if hit.square { " (square)" } else { "" }
            )?;
        }
        if !self.pottable {
            writeln!(f, "Pocket is behind the object ball")?;
        }
        Ok(())
    }
}
