//! Saved shot positions
//!
//! Held in memory and exchanged as JSON, tracks every favorite in save order.

use serde::{Deserialize, Deserializer, Serialize};

use crate::balls::{BallColor, ObjectBall};
use crate::config::{Difficulty, Pocket};
use crate::consts::{DELETE_PASSWORD, FAVORITES_VERSION};
use crate::error::FavoriteError;
use crate::geometry::Point;
use crate::report::ShotReport;
use crate::session::Session;

/// Cut angle summary stored with a favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleInfo {
    /// Degrees, one decimal place
    #[serde(deserialize_with = "number_or_string")]
    pub angle: f64,
    pub aim_position: String,
    pub thickness: String,
    pub difficulty: Difficulty,
}

impl AngleInfo {
    pub fn from_report(report: &ShotReport) -> Self {
        Self {
            angle: (report.angle * 10.0).round() / 10.0,
            aim_position: report.aiming.entry.aim_position.clone(),
            thickness: report.aiming.entry.thickness.clone(),
            difficulty: report.aiming.entry.difficulty,
        }
    }
}

/// Older exports store the angle as a formatted string ("32.5")
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Angle {
        Number(f64),
        Text(String),
    }

    match Angle::deserialize(deserializer)? {
        Angle::Number(n) => Ok(n),
        Angle::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A single saved position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub name: String,
    /// Unix timestamp (ms) when saved
    pub timestamp: i64,
    pub cue_ball: Point,
    pub object_ball: ObjectBall,
    pub selected_pocket: Pocket,
    pub angle_info: AngleInfo,
    /// Rendered preview, opaque to this crate
    #[serde(default)]
    pub thumbnail: String,
}

/// Favorites collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorites {
    pub version: String,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

impl Default for Favorites {
    fn default() -> Self {
        Self::new()
    }
}

impl Favorites {
    pub fn new() -> Self {
        Self {
            version: FAVORITES_VERSION.to_string(),
            favorites: Vec::new(),
        }
    }

    /// Suggested name for a new favorite
    pub fn default_name(color: BallColor) -> String {
        format!("{} practice", color)
    }

    /// Save the session's current position
    ///
    /// The name is trimmed and must not be empty. Ids are `fav_<timestamp>`,
    /// suffixed `_2`, `_3`, ... when that id is already taken. Returns the new favorite.
    pub fn add(
        &mut self,
        name: &str,
        session: &Session,
        thumbnail: String,
        timestamp_ms: i64,
    ) -> Result<&Favorite, FavoriteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FavoriteError::EmptyName);
        }

        let report = ShotReport::compute(session)?;
        let id = self.unique_id(timestamp_ms);
        let favorite = Favorite {
            id: id.clone(),
            name: name.to_string(),
            timestamp: timestamp_ms,
            cue_ball: report.cue_ball,
            object_ball: report.object_ball,
            angle_info: AngleInfo::from_report(&report),
            selected_pocket: report.pocket,
            thumbnail,
        };

        log::debug!("Saved favorite '{}' ({})", favorite.name, favorite.id);
        self.favorites.push(favorite);
        self.favorites
            .last()
            .ok_or(FavoriteError::NotFound { id })
    }

    fn unique_id(&self, timestamp_ms: i64) -> String {
        let base = format!("fav_{}", timestamp_ms);
        let mut id = base.clone();
        let mut n = 1;
        while self.get(&id).is_some() {
            n += 1;
            id = format!("{}_{}", base, n);
        }
        id
    }

    /// Delete a favorite, gated by the shared password
    pub fn remove(&mut self, id: &str, password: &str) -> Result<Favorite, FavoriteError> {
        if password != DELETE_PASSWORD {
            log::warn!("Wrong password deleting favorite {}", id);
            return Err(FavoriteError::WrongPassword);
        }
        let index = self
            .favorites
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| FavoriteError::NotFound { id: id.to_string() })?;

        let removed = self.favorites.remove(index);
        log::debug!("Deleted favorite '{}'", removed.name);
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    /// Put a favorite's balls and pocket back into the session
    pub fn restore_into(&self, id: &str, session: &mut Session) -> Result<(), FavoriteError> {
        let favorite = self
            .get(id)
            .ok_or_else(|| FavoriteError::NotFound { id: id.to_string() })?;
        session.restore(
            favorite.cue_ball,
            favorite.object_ball,
            &favorite.selected_pocket.id,
        );
        log::debug!("Restored favorite '{}'", favorite.name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.favorites.iter()
    }

    /// Export document, pretty printed
    pub fn to_json(&self) -> Result<String, FavoriteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FavoriteError> {
        let favorites: Favorites = serde_json::from_str(json)?;
        log::info!("Loaded {} favorites", favorites.favorites.len());
        Ok(favorites)
    }
}
