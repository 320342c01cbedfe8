//! Snooker Aim - cut-angle aiming aid
//!
//! Core modules:
//! - `geometry`: Pure aiming math (cut angle, ghost ball, contact point, guides)
//! - `session`: Mutable session state with change notification
//! - `balls`: Ball colours and the object ball
//! - `config`: Table, ball, scenario and angle-table configuration
//! - `favorites`: Saved shot snapshots
//! - `references`: Numbered free-text shot notes
//! - `report`: Everything a renderer needs for the current shot

pub mod balls;
pub mod config;
pub mod error;
pub mod favorites;
pub mod geometry;
pub mod references;
pub mod report;
pub mod session;

pub use balls::{BallColor, ObjectBall};
pub use config::{AimingAngleEntry, Config, Difficulty, Pocket, Tolerances};
pub use error::{ConfigError, FavoriteError, ReferenceError};
pub use favorites::{AngleInfo, Favorite, Favorites};
pub use geometry::Point;
pub use references::{Reference, References};
pub use report::ShotReport;
pub use session::{BallSelection, DisplayToggle, DragTarget, Session, SessionSnapshot};

use glam::DVec2;

/// Table and tool constants (millimetres unless noted)
pub mod consts {
    /// Standard snooker playing area
    pub const TABLE_LENGTH: f64 = 3569.0;
    pub const TABLE_WIDTH: f64 = 1778.0;
    pub const CUSHION_HEIGHT: f64 = 36.0;

    /// Baulk line distance from the bottom (left) cushion
    pub const BAULK_LINE_DISTANCE: f64 = 737.0;
    /// Radius of the D
    pub const D_RADIUS: f64 = 292.0;

    /// Pocket mouth widths
    pub const CORNER_POCKET_WIDTH: f64 = 86.0;
    pub const MIDDLE_POCKET_WIDTH: f64 = 100.0;

    /// Ball radius (52.5 mm diameter)
    pub const BALL_RADIUS: f64 = 26.25;

    /// Angle within which a guide line counts as meeting a cushion square on (degrees)
    pub const RIGHT_ANGLE_TOLERANCE_DEG: f64 = 2.0;
    /// Lengths at or below this are treated as zero
    pub const DISTANCE_EPSILON: f64 = 1e-6;
    /// Extra grab radius around a ball for hit testing
    pub const HIT_SLOP: f64 = 0.0;
    /// Minimum distance of a random red from every cushion and the baulk line
    pub const RED_PLACEMENT_MARGIN: f64 = 200.0;
    /// Half a metre, measured from the object ball edge
    pub const POSITION_CIRCLE_RADIUS: f64 = 496.0;

    /// Reference rays drawn either side of the potting line (degrees)
    pub const REFERENCE_ANGLES_DEG: [f64; 3] = [30.0, 45.0, 60.0];

    /// Shared password gating favorite deletion
    pub const DELETE_PASSWORD: &str = "delete";
    /// Favorites file format version
    pub const FAVORITES_VERSION: &str = "1.0";
}

/// Fold an angle difference (radians) into [0, π]
#[inline]
pub fn fold_angle(diff: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let mut diff = diff.abs() % TAU;
    if diff > PI {
        diff = TAU - diff;
    }
    diff
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
