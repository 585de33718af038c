//! The logger: direct sends and operation wrapping
//!
//! A [`SlackLogger`] owns its credentials and settings; nothing here reads
//! ambient global state. Every send is synchronous and performs exactly one
//! network round trip on the caller's thread.

use crate::config::{Credentials, Settings};
use crate::error::Result;
use crate::slack::{SlackClient, SlackResponse, build_blocks, render_timestamp};
use chrono::Utc;

/// One log entry to post.
///
/// `level` is free-form and matched case-insensitively against the settings
/// color table. `function_name` and `script_path` identify the logged
/// operation; callers supply them explicitly (`file!()` works well for the
/// path). An empty `timezone` displays the timestamp in UTC.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub message: String,
    pub level: String,
    pub tags: Vec<String>,
    pub timezone: String,
    pub function_name: String,
    pub script_path: String,
}

impl LogRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: "info".to_string(),
            tags: Vec::new(),
            timezone: String::new(),
            function_name: String::new(),
            script_path: String::new(),
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = function_name.into();
        self
    }

    pub fn script_path(mut self, script_path: impl Into<String>) -> Self {
        self.script_path = script_path.into();
        self
    }
}

/// Posts log records to one Slack channel.
pub struct SlackLogger {
    client: SlackClient,
    settings: Settings,
}

impl SlackLogger {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_settings(credentials, Settings::default())
    }

    pub fn with_settings(credentials: Credentials, settings: Settings) -> Result<Self> {
        Ok(Self {
            client: SlackClient::new(credentials)?,
            settings,
        })
    }

    /// Build a logger from `SLACK_CHANNEL_ID` / `SLACK_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Build a logger around an existing client, e.g. one pointed at a stub
    /// server.
    pub fn with_client(client: SlackClient, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Format and post one log record; returns Slack's raw reply.
    ///
    /// Fails before any network activity when credentials are incomplete or
    /// the record names an unknown timezone. A non-2xx Slack reply is
    /// returned as data, not an error.
    pub fn send_log(&self, record: &LogRecord) -> Result<SlackResponse> {
        self.client.credentials().validate()?;

        let now = Utc::now();
        let timestamp = render_timestamp(now, &record.timezone, &self.settings.date_format)?;
        let level_color = self.settings.level_color(&record.level);

        let blocks = build_blocks(
            &record.message,
            &record.level,
            level_color,
            &timestamp,
            &record.function_name,
            &record.script_path,
            &record.tags,
        );

        self.client.post_message(&blocks)
    }

    /// Wrap an operation: the returned closure posts `record` once per
    /// invocation, then calls `f` and returns its value unchanged.
    ///
    /// Configuration and timezone errors abort the invocation before `f`
    /// runs; the Slack reply itself is traced and discarded, so a Slack-side
    /// rejection never stops the wrapped operation.
    pub fn wrap<T, F>(&self, record: LogRecord, mut f: F) -> impl FnMut() -> Result<T>
    where
        F: FnMut() -> T,
    {
        move || {
            let response = self.send_log(&record)?;
            tracing::debug!(
                status = response.status,
                body = %response.body,
                function = %record.function_name,
                "wrapped operation logged"
            );

            Ok(f())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlackLoggerError;
    use mockito::Matcher;

    fn stub_logger(server: &mockito::Server, channel: &str, token: &str) -> SlackLogger {
        let client =
            SlackClient::with_base_url(Credentials::new(channel, token), server.url()).unwrap();
        SlackLogger::with_client(client, Settings::default())
    }

    #[test]
    fn test_send_log_end_to_end() {
        let mut server = mockito::Server::new();
        // Timestamp varies, so match the stable parts of the encoded blocks
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer tok")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".into(), "C123".into()),
                Matcher::Regex("header".into()),
                Matcher::Regex("section".into()),
                Matcher::Regex("Deploy".into()),
                Matcher::Regex("context".into()),
                Matcher::Regex("release".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create();

        let logger = stub_logger(&server, "C123", "tok");
        let record = LogRecord::new("Deploy finished").tags(["release", "v2"]);
        let response = logger.send_log(&record).unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);
    }

    #[test]
    fn test_send_log_missing_channel_sends_nothing() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let logger = stub_logger(&server, "", "tok");
        let err = logger.send_log(&LogRecord::new("msg")).unwrap_err();

        mock.assert();
        assert!(matches!(err, SlackLoggerError::Config(_)));
    }

    #[test]
    fn test_send_log_unknown_timezone_sends_nothing() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let logger = stub_logger(&server, "C123", "tok");
        let record = LogRecord::new("msg").timezone("Mars/OlympusMons");
        let err = logger.send_log(&record).unwrap_err();

        mock.assert();
        assert!(matches!(err, SlackLoggerError::UnknownTimezone(_)));
    }

    #[test]
    fn test_wrap_logs_then_returns_inner_value() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_query(Matcher::AllOf(vec![
                Matcher::Regex("run_job".into()),
                Matcher::Regex("jobs".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create();

        let logger = stub_logger(&server, "C123", "tok");
        let record = LogRecord::new("starting")
            .level("warn")
            .function_name("run_job")
            .script_path("/app/jobs.rs");

        let mut job = logger.wrap(record, || 42);
        assert_eq!(job().unwrap(), 42);

        mock.assert();
    }

    #[test]
    fn test_wrap_sends_once_per_invocation() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_query(Matcher::Any)
            .expect(2)
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create();

        let logger = stub_logger(&server, "C123", "tok");
        let mut calls = 0;
        let mut job = logger.wrap(LogRecord::new("tick"), || {
            calls += 1;
        });

        job().unwrap();
        job().unwrap();
        drop(job);

        mock.assert();
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_wrap_config_error_prevents_inner_call() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let logger = stub_logger(&server, "C123", "");
        let mut ran = false;
        let mut job = logger.wrap(LogRecord::new("msg"), || {
            ran = true;
        });

        let err = job().unwrap_err();
        drop(job);

        mock.assert();
        assert!(matches!(err, SlackLoggerError::Config(_)));
        assert!(!ran);
    }
}
