#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Fill in every field, then press Ctrl+S to save.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn value_updated(&mut self) {
        self.message = "Value updated".to_string();
    }

    pub fn saved(&mut self, count: usize) {
        self.message = format!("Movie saved ({count} total)");
    }

    pub fn rejected(&mut self, label: &str) {
        self.message = format!("Not saved: check {label}");
    }

    pub fn cleared(&mut self) {
        self.message = "Form cleared".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved input. Press Ctrl+Q again to quit anyway.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
