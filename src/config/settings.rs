use crate::error::{Result, SlackLoggerError};
use std::collections::HashMap;

/// Slack API credentials: the destination channel and the bearer token.
///
/// Both fields are required before any message can be sent. Missing values
/// are a caller configuration error, reported before any network activity.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub channel_id: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(channel_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Load credentials from `SLACK_CHANNEL_ID` and `SLACK_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            channel_id: std::env::var("SLACK_CHANNEL_ID")
                .map_err(|_| SlackLoggerError::Config("SLACK_CHANNEL_ID not set".to_string()))?,
            access_token: std::env::var("SLACK_ACCESS_TOKEN")
                .map_err(|_| SlackLoggerError::Config("SLACK_ACCESS_TOKEN not set".to_string()))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_id.is_empty() {
            return Err(SlackLoggerError::Config(
                "You need to include a Slack channel ID in your credentials".to_string(),
            ));
        }
        if self.access_token.is_empty() {
            return Err(SlackLoggerError::Config(
                "You need to include a Slack access token in your credentials".to_string(),
            ));
        }
        Ok(())
    }
}

/// Display settings: timestamp format and the level-to-color table.
#[derive(Debug, Clone)]
pub struct Settings {
    /// strftime-style pattern for the header timestamp.
    pub date_format: String,
    /// Level name (lowercase) to hex color code, with a `"default"` entry
    /// used for unrecognized levels.
    pub level_colors: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let level_colors = [
            ("default", "#007300"),
            ("debug", "#007300"),
            ("info", "#0000e5"),
            ("warn", "#e5e500"),
            ("error", "#e59400"),
            ("fatal", "#ff0000"),
        ]
        .into_iter()
        .map(|(level, color)| (level.to_string(), color.to_string()))
        .collect();

        Self {
            date_format: "%b %d, %Y | %H:%M:%S %Z".to_string(),
            level_colors,
        }
    }
}

impl Settings {
    /// Resolve the display color for a level, case-insensitively, falling
    /// back to the `"default"` entry for unknown levels.
    pub fn level_color(&self, level: &str) -> &str {
        self.level_colors
            .get(&level.to_lowercase())
            .or_else(|| self.level_colors.get("default"))
            .map(String::as_str)
            .unwrap_or("#007300")
    }
}
