//! Post formatted log messages to a Slack channel via `chat.postMessage`.
//!
//! The crate is fully synchronous: every log call performs one blocking HTTP
//! round trip on the caller's thread. Configuration is explicit — build
//! [`Credentials`] and [`Settings`], hand them to a [`SlackLogger`], and the
//! logger is immutable from then on.
//!
//! ```no_run
//! use slack_logger::{Credentials, LogRecord, SlackLogger};
//!
//! # fn main() -> slack_logger::Result<()> {
//! let logger = SlackLogger::new(Credentials::new("C123", "xoxb-token"))?;
//!
//! // Direct send
//! let response = logger.send_log(
//!     &LogRecord::new("Deploy finished")
//!         .level("info")
//!         .tags(["release", "v2"]),
//! )?;
//! println!("{} {}", response.status, response.body);
//!
//! // Wrap an operation: logs once, then calls through
//! let record = LogRecord::new("starting").level("warn").function_name("run_job");
//! let mut job = logger.wrap(record, || 42);
//! assert_eq!(job()?, 42);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod logging;
pub mod slack;

pub use config::{Credentials, Settings};
pub use error::{Result, SlackLoggerError};
pub use logger::{LogRecord, SlackLogger};
pub use slack::{SlackClient, SlackResponse};
