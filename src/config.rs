//! Static configuration: table geometry, balls, presets and the angle table
//!
//! Loaded once at startup from JSON (camelCase keys) or built from the
//! standard snooker defaults. Nothing here changes during a session.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::balls::{BallColor, ObjectBall};
use crate::consts::*;
use crate::error::ConfigError;
use crate::geometry::Point;

/// Shot difficulty bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// Star rating out of five
    pub fn stars(&self) -> &'static str {
        match self {
            Difficulty::Easy => "★★☆☆☆",
            Difficulty::Medium => "★★★☆☆",
            Difficulty::Hard => "★★★★☆",
            Difficulty::Extreme => "★★★★★",
        }
    }
}

/// One row of the angle table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimingAngleEntry {
    /// Cut angle (degrees)
    pub angle: f64,
    /// Where to aim on the object ball
    pub aim_position: String,
    /// Ball-fraction description ("half ball", ...)
    pub thickness: String,
    pub contact_ratio: String,
    pub difficulty: Difficulty,
    /// Tabulated cos(angle), if the table carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_point: Option<f64>,
}

/// A pocket. Serializes as `{id, name, x, y}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub id: String,
    /// Display label (A-F)
    pub name: String,
    #[serde(flatten)]
    pub pos: Point,
}

impl Pocket {
    pub fn new(id: &str, name: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            pos: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayingArea {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaulkLine {
    pub distance_from_bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DArea {
    pub radius: f64,
    pub center: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketSize {
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketSizes {
    pub corner: PocketSize,
    pub middle: PocketSize,
}

/// Table geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub playing_area: PlayingArea,
    pub cushion_height: f64,
    pub baulk_line: BaulkLine,
    pub d_area: DArea,
    pub pockets: PocketSizes,
    pub pocket_positions: Vec<Pocket>,
}

impl TableConfig {
    #[inline]
    pub fn length(&self) -> f64 {
        self.playing_area.length
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.playing_area.width
    }

    pub fn pocket(&self, id: &str) -> Option<&Pocket> {
        self.pocket_positions.iter().find(|p| p.id == id)
    }

    /// Whether a point lies on the playing surface (cushion noses inclusive)
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.length()).contains(&p.x) && (0.0..=self.width()).contains(&p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub radius: f64,
}

/// Hex display colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallColors {
    pub cue: String,
    pub red: String,
    pub yellow: String,
    pub green: String,
    pub brown: String,
    pub blue: String,
    pub pink: String,
    pub black: String,
}

/// Spot of every colour that has one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPositions {
    pub yellow: Point,
    pub green: Point,
    pub brown: Point,
    pub blue: Point,
    pub pink: Point,
    pub black: Point,
}

impl SpotPositions {
    pub fn get(&self, color: BallColor) -> Option<Point> {
        match color {
            BallColor::Red => None,
            BallColor::Yellow => Some(self.yellow),
            BallColor::Green => Some(self.green),
            BallColor::Brown => Some(self.brown),
            BallColor::Blue => Some(self.blue),
            BallColor::Pink => Some(self.pink),
            BallColor::Black => Some(self.black),
        }
    }
}

/// Guide overlay switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub show_aiming_line: bool,
    pub show_pocket_line: bool,
    pub show_angle_lines: bool,
    pub show_thickness_guide: bool,
    pub show_aim_guide: bool,
    #[serde(default = "default_true")]
    pub show_guide_line: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub show_position_circle: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_aiming_line: true,
            show_pocket_line: true,
            show_angle_lines: true,
            show_thickness_guide: true,
            show_aim_guide: true,
            show_guide_line: true,
            show_grid: true,
            show_position_circle: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub default_settings: DisplayOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBalls {
    pub cue_ball: Point,
    pub object_ball: ObjectBall,
}

/// Named preset shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub balls: ScenarioBalls,
    pub target_pocket: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimingMethod {
    pub angle_data: Vec<AimingAngleEntry>,
}

/// Numeric tolerances used by guides and hit testing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tolerances {
    /// Degrees either side of 90° that still count as square to a cushion
    pub right_angle_degrees: f64,
    /// Millimetres; shorter vectors are treated as zero length
    pub distance_epsilon: f64,
    /// Millimetres added to the ball radius when picking a ball
    pub hit_slop: f64,
    /// Millimetres kept clear of cushions and the baulk line by a random red
    pub red_placement_margin: f64,
    /// Millimetres from the object ball edge to the position circle
    pub position_circle_radius: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            right_angle_degrees: RIGHT_ANGLE_TOLERANCE_DEG,
            distance_epsilon: DISTANCE_EPSILON,
            hit_slop: HIT_SLOP,
            red_placement_margin: RED_PLACEMENT_MARGIN,
            position_circle_radius: POSITION_CIRCLE_RADIUS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub table: TableConfig,
    pub ball: BallConfig,
    pub balls: BallColors,
    pub spot_positions: SpotPositions,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub preset_scenarios: Vec<Scenario>,
    pub aiming_method: AimingMethod,
    #[serde(default)]
    pub tolerances: Tolerances,
}

impl Config {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {} ({} pockets, {} angle entries)",
            path.display(),
            config.table.pocket_positions.len(),
            config.angle_table().len()
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the references and dimensions the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("table.playingArea.length", self.table.length()),
            ("table.playingArea.width", self.table.width()),
            ("ball.radius", self.ball.radius),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        if self.aiming_method.angle_data.is_empty() {
            return Err(ConfigError::EmptyAngleTable);
        }
        if let Some(entry) = self.angle_table().iter().find(|e| !e.angle.is_finite()) {
            return Err(ConfigError::InvalidDimension {
                field: "aimingMethod.angleData.angle",
                value: entry.angle,
            });
        }

        if self.table.pocket_positions.is_empty() {
            return Err(ConfigError::NoPockets);
        }
        let mut seen = HashSet::new();
        for pocket in &self.table.pocket_positions {
            if !seen.insert(pocket.id.as_str()) {
                return Err(ConfigError::DuplicatePocket {
                    id: pocket.id.clone(),
                });
            }
        }

        for scenario in &self.preset_scenarios {
            if self.table.pocket(&scenario.target_pocket).is_none() {
                return Err(ConfigError::UnknownScenarioPocket {
                    scenario: scenario.id.clone(),
                    pocket: scenario.target_pocket.clone(),
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn angle_table(&self) -> &[AimingAngleEntry] {
        &self.aiming_method.angle_data
    }

    #[inline]
    pub fn ball_radius(&self) -> f64 {
        self.ball.radius
    }

    pub fn pocket(&self, id: &str) -> Option<&Pocket> {
        self.table.pocket(id)
    }

    /// Pocket lookup that reports a missing id as a configuration error
    pub fn require_pocket(&self, id: &str) -> Result<&Pocket, ConfigError> {
        self.pocket(id).ok_or_else(|| ConfigError::MissingPocket { id: id.to_string() })
    }

    pub fn spot(&self, color: BallColor) -> Option<Point> {
        self.spot_positions.get(color)
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.preset_scenarios.iter().find(|s| s.id == id)
    }
}

impl Default for Config {
    /// Full-size snooker table. x runs along the length from the baulk end,
    /// y across the width from the top cushion.
    fn default() -> Self {
        let length = TABLE_LENGTH;
        let width = TABLE_WIDTH;
        let mid_x = length / 2.0;
        let mid_y = width / 2.0;

        let spots = SpotPositions {
            yellow: Point::new(BAULK_LINE_DISTANCE, mid_y + D_RADIUS),
            green: Point::new(BAULK_LINE_DISTANCE, mid_y - D_RADIUS),
            brown: Point::new(BAULK_LINE_DISTANCE, mid_y),
            blue: Point::new(mid_x, mid_y),
            pink: Point::new((mid_x + length) / 2.0, mid_y),
            black: Point::new(length - 324.0, mid_y),
        };

        let pockets = vec![
            Pocket::new("top-left", "A", 0.0, 0.0),
            Pocket::new("middle-top", "B", mid_x, 0.0),
            Pocket::new("top-right", "C", length, 0.0),
            Pocket::new("bottom-right", "D", length, width),
            Pocket::new("middle-bottom", "E", mid_x, width),
            Pocket::new("bottom-left", "F", 0.0, width),
        ];

        let preset_scenarios = vec![
            Scenario {
                id: "straight-black".to_string(),
                name: "Straight black into the top-right corner".to_string(),
                balls: ScenarioBalls {
                    cue_ball: Point::new(3039.6, 1452.7),
                    object_ball: ObjectBall::new(spots.black, BallColor::Black, true),
                },
                target_pocket: "top-right".to_string(),
            },
            Scenario {
                id: "half-ball-blue".to_string(),
                name: "Half-ball blue into the top middle".to_string(),
                balls: ScenarioBalls {
                    cue_ball: Point::new(1384.5, 1581.8),
                    object_ball: ObjectBall::new(spots.blue, BallColor::Blue, true),
                },
                target_pocket: "middle-top".to_string(),
            },
            Scenario {
                id: "loose-red".to_string(),
                name: "Red to the bottom-right corner".to_string(),
                balls: ScenarioBalls {
                    cue_ball: Point::new(2300.0, 600.0),
                    object_ball: ObjectBall::new(
                        Point::new(2900.0, 1200.0),
                        BallColor::Red,
                        false,
                    ),
                },
                target_pocket: "bottom-right".to_string(),
            },
        ];

        Self {
            table: TableConfig {
                playing_area: PlayingArea { length, width },
                cushion_height: CUSHION_HEIGHT,
                baulk_line: BaulkLine {
                    distance_from_bottom: BAULK_LINE_DISTANCE,
                },
                d_area: DArea {
                    radius: D_RADIUS,
                    center: Point::new(BAULK_LINE_DISTANCE, mid_y),
                },
                pockets: PocketSizes {
                    corner: PocketSize {
                        width: CORNER_POCKET_WIDTH,
                    },
                    middle: PocketSize {
                        width: MIDDLE_POCKET_WIDTH,
                    },
                },
                pocket_positions: pockets,
            },
            ball: BallConfig {
                radius: BALL_RADIUS,
            },
            balls: BallColors {
                cue: "#FFFFFF".to_string(),
                red: "#DC143C".to_string(),
                yellow: "#FFD700".to_string(),
                green: "#228B22".to_string(),
                brown: "#8B4513".to_string(),
                blue: "#4169E1".to_string(),
                pink: "#FF69B4".to_string(),
                black: "#000000".to_string(),
            },
            spot_positions: spots,
            ui: UiConfig::default(),
            preset_scenarios,
            aiming_method: AimingMethod {
                angle_data: default_angle_table(),
            },
            tolerances: Tolerances::default(),
        }
    }
}

/// Ball-fraction table: a `f` ball contact needs a cut of `asin(1 - f)`
fn default_angle_table() -> Vec<AimingAngleEntry> {
    let rows: [(f64, &str, &str, &str, Difficulty, f64); 9] = [
        (0.0, "centre", "full ball", "1", Difficulty::Easy, 1.0),
        (7.2, "1/4 radius from centre", "7/8 ball", "7/8", Difficulty::Easy, 0.992),
        (14.5, "1/2 radius from centre", "3/4 ball", "3/4", Difficulty::Medium, 0.968),
        (22.0, "3/4 radius from centre", "5/8 ball", "5/8", Difficulty::Medium, 0.927),
        (30.0, "edge of object ball", "half ball", "1/2", Difficulty::Medium, 0.866),
        (38.7, "1/4 radius outside edge", "3/8 ball", "3/8", Difficulty::Hard, 0.780),
        (48.6, "1/2 radius outside edge", "1/4 ball", "1/4", Difficulty::Hard, 0.661),
        (61.0, "3/4 radius outside edge", "1/8 ball", "1/8", Difficulty::Extreme, 0.485),
        (90.0, "one radius outside edge", "thinnest cut", "0", Difficulty::Extreme, 0.0),
    ];

    rows.into_iter()
        .map(
            |(angle, aim_position, thickness, contact_ratio, difficulty, cut_point)| {
                AimingAngleEntry {
                    angle,
                    aim_position: aim_position.to_string(),
                    thickness: thickness.to_string(),
                    contact_ratio: contact_ratio.to_string(),
                    difficulty,
                    cut_point: Some(cut_point),
                }
            },
        )
        .collect()
}
