//! Owned copy of the session for persistence and rendering

use serde::{Deserialize, Serialize};

use super::state::{BallSelection, DragTarget};
use crate::balls::ObjectBall;
use crate::config::{DisplayOptions, Pocket};
use crate::geometry::Point;

/// Deep copy of every session field. Never aliases the live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub cue_ball: Point,
    pub object_ball: ObjectBall,
    pub selected_pocket: Pocket,
    #[serde(flatten)]
    pub display: DisplayOptions,
    pub selected_colored_balls: BallSelection,
    #[serde(default)]
    pub current_scenario: Option<String>,
    #[serde(default)]
    pub dragging: Option<DragTarget>,
}
