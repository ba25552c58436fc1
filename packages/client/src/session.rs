//! Persisted session credentials.
//!
//! The bearer token and user identity live in one TOML file under the user
//! config directory. Surfaces never read credentials ad hoc; they load a
//! [`Session`] once and hand it to the dispatcher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::error::{ClientError, ClientResult};

/// Credentials attached to every backend call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
            user_name: None,
            saved_at: Utc::now(),
        }
    }

    /// Authorization header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Loads and saves the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location (`<config dir>/mechlink/session.toml`).
    pub fn new() -> ClientResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClientError::config("Could not determine config directory"))?;
        Ok(Self {
            path: config_dir.join("mechlink").join("session.toml"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted session, if any.
    pub async fn load(&self) -> ClientResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).await?;
        let session: Session = toml::from_str(&content)
            .map_err(|e| ClientError::Storage(format!("Invalid session file: {e}")))?;
        Ok(Some(session))
    }

    /// Load the session, treating its absence as an authentication error.
    pub async fn require(&self) -> ClientResult<Session> {
        self.load().await?.ok_or_else(|| {
            ClientError::auth("no session token found, run 'mechlink session set-token' first")
        })
    }

    pub async fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(session)
            .map_err(|e| ClientError::Storage(format!("Failed to serialize session: {e}")))?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    pub async fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}
