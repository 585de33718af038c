use crate::config::Credentials;
use crate::error::Result;
use crate::logging::Timer;
use crate::slack::Block;
use std::time::Duration;

const SLACK_API_BASE: &str = "https://slack.com/api";

// Bounded so a hung endpoint cannot block a wrapped operation forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Slack's raw reply: the standard JSON envelope as text, plus the HTTP
/// status. This crate does not parse it further.
#[derive(Debug, Clone)]
pub struct SlackResponse {
    pub body: String,
    pub status: u16,
}

pub struct SlackClient {
    http: reqwest::blocking::Client,
    base_url: String,
    credentials: Credentials,
}

impl SlackClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, SLACK_API_BASE)
    }

    /// Point the client at a different API root. Used by tests to talk to a
    /// local stub server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue exactly one POST to `chat.postMessage` carrying the serialized
    /// block list, and pass Slack's reply back verbatim.
    ///
    /// A non-2xx status is not an error here; judging Slack-side failures is
    /// the caller's responsibility. Transport failures propagate as
    /// [`crate::SlackLoggerError::Http`].
    pub fn post_message(&self, blocks: &[Block]) -> Result<SlackResponse> {
        let _timer = Timer::new("chat_post_message");

        let blocks_json = serde_json::to_string(blocks)?;

        let response = self
            .http
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.credentials.access_token)
            .query(&[
                ("channel", self.credentials.channel_id.as_str()),
                ("blocks", blocks_json.as_str()),
            ])
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(status = status, "chat.postMessage reply");

        Ok(SlackResponse { body, status })
    }
}
