//! Ball identities and the two balls the tool works with

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Object ball colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

impl BallColor {
    pub const ALL: [BallColor; 7] = [
        BallColor::Red,
        BallColor::Yellow,
        BallColor::Green,
        BallColor::Brown,
        BallColor::Blue,
        BallColor::Pink,
        BallColor::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::Red => "red",
            BallColor::Yellow => "yellow",
            BallColor::Green => "green",
            BallColor::Brown => "brown",
            BallColor::Blue => "blue",
            BallColor::Pink => "pink",
            BallColor::Black => "black",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(BallColor::Red),
            "yellow" => Some(BallColor::Yellow),
            "green" => Some(BallColor::Green),
            "brown" => Some(BallColor::Brown),
            "blue" => Some(BallColor::Blue),
            "pink" => Some(BallColor::Pink),
            "black" => Some(BallColor::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for BallColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The object ball. Serializes as `{x, y, type, locked}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectBall {
    #[serde(flatten)]
    pub pos: Point,
    #[serde(rename = "type")]
    pub color: BallColor,
    /// Locked balls sit on their spot and cannot be dragged
    pub locked: bool,
}

impl ObjectBall {
    pub fn new(pos: Point, color: BallColor, locked: bool) -> Self {
        Self { pos, color, locked }
    }
}
