use chrono::{DateTime, Local};

/// One line of the in-memory session log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(operation: &str, target: &str, message: &str) -> Self {
        Self {
            at: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        }
    }

    /// "operation (target)", or just the operation when there is no target.
    pub fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}
