//! Planar point in table millimetres

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A position on the table. Serializes as `{x, y}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Point reached by moving `dist` from `self` in direction `theta` (radians)
    #[inline]
    pub fn offset(self, theta: f64, dist: f64) -> Self {
        (self.to_vec() + crate::polar_to_cartesian(dist, theta)).into()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

impl std::str::FromStr for Point {
    type Err = String;

    /// Parse `"x,y"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
        let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{x}': {e}"))?;
        let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{y}': {e}"))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(format!("coordinates must be finite: '{s}'"));
        }
        Ok(Self { x, y })
    }
}
