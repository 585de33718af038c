//! Tracing helpers for the send path

use std::time::Instant;

/// Times one network send and emits a debug event on drop, so every
/// `chat.postMessage` round trip shows up in the trace with its duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        tracing::debug!(
            operation = self.operation,
            duration_ms = self.start.elapsed().as_millis() as u64,
            "send finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_timer_logs_on_drop() {
        let _timer = Timer::new("test_send");
        thread::sleep(Duration::from_millis(5));
        // event is emitted when the guard drops
    }
}
