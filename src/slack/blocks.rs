//! Block Kit payload construction
//!
//! Pure transforms only: a log record goes in, an ordered list of Slack
//! blocks comes out. Network concerns live in [`crate::slack::client`].

use crate::error::{Result, SlackLoggerError};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// A Slack message block: header, section, or context.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Header { text: Text },
    Section { text: Text, accessory: Image },
    Context { elements: Vec<Text> },
}

/// A Slack text object, either plain or mrkdwn.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// An image accessory rendering a level color as a swatch.
#[derive(Debug, Clone, Serialize)]
pub struct Image {
    #[serde(rename = "type")]
    image_type: &'static str,
    pub image_url: String,
    pub alt_text: String,
}

impl Image {
    /// Swatch for a hex color code. The URL carries the code with its
    /// leading `#` stripped and lowercased; the alt text keeps the raw code.
    pub fn swatch(color: &str) -> Self {
        Self {
            image_type: "image",
            image_url: format!(
                "https://htmlcolors.com/color-image/{}.png",
                color.trim_start_matches('#').to_lowercase()
            ),
            alt_text: color.to_string(),
        }
    }
}

/// Render the capture timestamp for display.
///
/// The instant is always captured in UTC; a non-empty `timezone` converts it
/// to that IANA zone for display. Unknown zone names fail here, before any
/// payload is built or sent.
pub fn render_timestamp(now: DateTime<Utc>, timezone: &str, date_format: &str) -> Result<String> {
    if timezone.is_empty() {
        return Ok(now.format(date_format).to_string());
    }

    let tz: Tz = timezone
        .parse()
        .map_err(|_| SlackLoggerError::UnknownTimezone(timezone.to_string()))?;

    Ok(now.with_timezone(&tz).format(date_format).to_string())
}

/// Build the ordered block list for one log entry.
///
/// Always a header (timestamp) and a section (level + message + color
/// swatch); a context block with the tags is appended when `tags` is
/// non-empty. `script_path` is shown only when `function_name` is also set,
/// matching the long-documented behavior of this payload.
pub fn build_blocks(
    message: &str,
    level: &str,
    level_color: &str,
    timestamp: &str,
    function_name: &str,
    script_path: &str,
    tags: &[String],
) -> Vec<Block> {
    let mut section_text = format!("*{}* \n {}", level.to_uppercase(), message);

    if !function_name.is_empty() {
        section_text.push_str(&format!("\n\n _Function *{}*_", function_name));
        if !script_path.is_empty() {
            section_text.push_str(&format!(" _in *{}*_", script_path));
        }
    }

    let mut blocks = vec![
        Block::Header {
            text: Text::plain(timestamp),
        },
        Block::Section {
            text: Text::mrkdwn(section_text),
            accessory: Image::swatch(level_color),
        },
    ];

    if !tags.is_empty() {
        blocks.push(Block::Context {
            elements: vec![Text::mrkdwn(format!("*Tags:* {}", tags.join(" ")))],
        });
    }

    blocks
}
