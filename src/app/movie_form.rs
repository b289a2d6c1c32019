use anyhow::{Result, bail};

use crate::domain::{MovieCollection, field_definitions};

use super::{options::UiOptions, runtime::App};

pub const DEFAULT_TITLE: &str = "Movie Form";

/// Entry point: builds the form from the field registry and runs it until the
/// user quits, returning every movie saved during the session.
#[derive(Debug)]
pub struct MovieFormUI {
    title: Option<String>,
    options: UiOptions,
}

impl Default for MovieFormUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieFormUI {
    pub fn new() -> Self {
        Self {
            title: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<MovieCollection> {
        let MovieFormUI { title, options } = self;
        let definitions = field_definitions();
        if definitions.is_empty() {
            bail!("no form fields are configured");
        }
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut app = App::new(title, definitions, options);
        app.run()
    }
}
