//! Aiming geometry
//!
//! Stateless functions over table positions. This module must stay pure:
//! - No session state
//! - No rendering
//! - Degenerate input (coincident points) yields a defined value, never NaN

pub mod aiming;
pub mod angles;
pub mod guides;
pub mod point;

pub use aiming::{
    AimingData, AimingPoint, ContactPoint, CutSide, aim_offset, calculate_aim_line_intersection,
    calculate_aiming_point, calculate_contact_point, cut_side, get_aiming_data_by_angle,
};
pub use angles::{
    angle_between_vectors, angle_degrees, angle_radians, calculate_aiming_angle, distance,
    is_point_in_circle, normalize_angle,
};
pub use guides::{
    ContactArc, Cushion, EdgeHit, PositionCircle, angle_marker, clamp_to_table, guide_line_end,
    is_point_on_ball, is_pottable, pocket_line_end, position_circle, reference_rays,
    thickness_arc,
};
pub use point::Point;
