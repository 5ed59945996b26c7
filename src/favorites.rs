//! Followed-team persistence
//!
//! A small TOML file next to the config file records the team ids the user
//! follows. The matches listing can be narrowed to these teams.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::paths::get_favorites_path;
use crate::error::AppError;

/// The set of followed team ids, kept in insertion order so listings are
/// stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(default)]
    pub team_ids: Vec<i64>,
}

impl Favorites {
    /// Loads favorites from the default location. A missing file is an empty
    /// set, not an error.
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_favorites_path()).await
    }

    /// Loads favorites from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).await?;
        let favorites: Favorites = toml::from_str(&content)?;
        Ok(favorites)
    }

    /// Saves favorites to the default location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_favorites_path()).await
    }

    /// Saves favorites to a custom file path, creating parent directories
    /// as needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;
        if !dir.exists() {
            fs::create_dir_all(dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Starts following a team. Returns false if it was already followed.
    pub fn follow(&mut self, team_id: i64) -> bool {
        if self.contains(team_id) {
            return false;
        }
        self.team_ids.push(team_id);
        true
    }

    /// Stops following a team. Returns false if it was not followed.
    pub fn unfollow(&mut self, team_id: i64) -> bool {
        let before = self.team_ids.len();
        self.team_ids.retain(|&id| id != team_id);
        self.team_ids.len() != before
    }

    /// Whether a team is followed
    pub fn contains(&self, team_id: i64) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// Whether no team is followed
    pub fn is_empty(&self) -> bool {
        self.team_ids.is_empty()
    }
}
