use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    domain::{FieldDefinition, MovieCollection},
    form::{ComponentKind, FormCommand, FormState, apply_command},
    presentation::{self, UiContext},
};

use super::{
    input::{AppCommand, CommandDispatch, InputRouter},
    keymap::KeymapContext,
    options::UiOptions,
    popup::{AlertState, PopupState},
    status::StatusLine,
    terminal::TerminalGuard,
    validation::{SubmissionOutcome, validate_submission},
};

pub(crate) struct App {
    title: String,
    definitions: Vec<FieldDefinition>,
    form_state: FormState,
    collection: MovieCollection,
    options: UiOptions,
    status: StatusLine,
    popup: Option<PopupState>,
    alert: Option<AlertState>,
    records_offset: usize,
    exit_armed: bool,
    should_quit: bool,
    input_router: InputRouter,
}

impl App {
    pub fn new(title: String, definitions: Vec<FieldDefinition>, options: UiOptions) -> Self {
        let form_state = FormState::from_definitions(&definitions);
        let input_router = InputRouter::new(options.keymap_store.clone());
        Self {
            title,
            definitions,
            form_state,
            collection: MovieCollection::new(),
            options,
            status: StatusLine::new(),
            popup: None,
            alert: None,
            records_offset: 0,
            exit_armed: false,
            should_quit: false,
            input_router,
        }
    }

    pub fn run(&mut self) -> Result<MovieCollection> {
        let mut terminal = TerminalGuard::new()?;
        tracing::info!(fields = self.definitions.len(), "movie form started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        tracing::info!(saved = self.collection.len(), "movie form closed");
        Ok(self.collection.clone())
    }

    fn context(&self) -> KeymapContext {
        if self.alert.is_some() {
            KeymapContext::Alert
        } else if self.popup.is_some() {
            KeymapContext::Popup
        } else {
            KeymapContext::Form
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.input_router.help_text(self.context())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                form_state: &self.form_state,
                definitions: &self.definitions,
                collection: &self.collection,
                records_offset: self.records_offset,
                status_message: self.status.message(),
                dirty: self.form_state.is_dirty(),
                error_count: self.form_state.error_count(),
                help: help.as_deref(),
                popup: self.popup.as_ref().map(PopupState::as_render),
                alert: self.alert.as_ref().map(AlertState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let context = self.context();
        match self.input_router.classify(context, &key) {
            CommandDispatch::Form(command) => {
                if context == KeymapContext::Form {
                    apply_command(&mut self.form_state, command);
                    self.exit_armed = false;
                }
            }
            CommandDispatch::App(command) => self.handle_app_command(context, command),
            CommandDispatch::Input(event) => {
                if context == KeymapContext::Form {
                    self.handle_field_input(&event);
                }
            }
        }
    }

    fn handle_app_command(&mut self, context: KeymapContext, command: AppCommand) {
        match (context, command) {
            (KeymapContext::Alert, AppCommand::Dismiss) => {
                self.alert = None;
                tracing::debug!("alert dismissed");
            }
            (KeymapContext::Popup, AppCommand::Dismiss) => {
                self.popup = None;
                self.status.ready();
            }
            (KeymapContext::Popup, AppCommand::SelectStep(delta)) => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.step(delta);
                }
            }
            (KeymapContext::Popup, AppCommand::Activate) => self.apply_popup_selection(),
            (KeymapContext::Form, command) => self.handle_form_app_command(command),
            _ => {}
        }
    }

    fn handle_form_app_command(&mut self, command: AppCommand) {
        if command != AppCommand::Quit {
            self.exit_armed = false;
        }
        match command {
            AppCommand::Save => self.on_submit(),
            AppCommand::Quit => self.on_exit(),
            AppCommand::Activate => self.on_activate(),
            AppCommand::ResetStatus => self.status.ready(),
            AppCommand::ClearForm => {
                apply_command(&mut self.form_state, FormCommand::ClearForm);
                self.status.cleared();
            }
            AppCommand::RecordsScroll(delta) => self.scroll_records(delta),
            AppCommand::Dismiss | AppCommand::SelectStep(_) => {}
        }
    }

    fn handle_field_input(&mut self, event: &KeyEvent) {
        if let Some(field) = self.form_state.focused_field_mut()
            && field.handle_key(event)
        {
            let label = field.display_label();
            self.exit_armed = false;
            self.status.editing(&label);
            return;
        }
        match event.code {
            KeyCode::Up => apply_command(&mut self.form_state, FormCommand::FocusPrevField),
            KeyCode::Down => apply_command(&mut self.form_state, FormCommand::FocusNextField),
            _ => {}
        }
    }

    fn on_activate(&mut self) {
        if self.form_state.submit_focused() {
            self.on_submit();
            return;
        }
        let Some(field) = self.form_state.focused_field() else {
            return;
        };
        if field.component_kind() == ComponentKind::Select {
            if let Some(popup) = PopupState::from_field(field) {
                self.status.set_raw("Use ↑/↓ and Enter to choose");
                self.popup = Some(popup);
            }
            return;
        }
        apply_command(&mut self.form_state, FormCommand::FocusNextField);
    }

    fn apply_popup_selection(&mut self) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        if let Some(field) = self.form_state.field_mut(popup.field_key()) {
            field.set_select_index(popup.selection());
        }
        self.status.value_updated();
    }

    fn on_submit(&mut self) {
        match validate_submission(&mut self.form_state, &self.collection, &self.definitions) {
            SubmissionOutcome::Accepted(collection) => {
                self.collection = collection;
                if self.options.reset_after_submit {
                    self.form_state.reset();
                }
                self.status.saved(self.collection.len());
                tracing::info!(total = self.collection.len(), "movie saved");
            }
            SubmissionOutcome::Rejected(error) => {
                let label = self
                    .form_state
                    .field(error.key())
                    .map(|field| field.display_label())
                    .unwrap_or_else(|| error.key().to_string());
                self.status.rejected(&label);
                tracing::info!(field = %error.key(), reason = %error, "submission rejected");
                self.alert = Some(AlertState::from_error(&error));
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form_state.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn scroll_records(&mut self, delta: i32) {
        let max_offset = self.collection.len().saturating_sub(1) as i64;
        let next = (self.records_offset as i64 + delta as i64).clamp(0, max_offset.max(0));
        self.records_offset = next as usize;
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    pub(crate) fn collection_for_test(&self) -> &MovieCollection {
        &self.collection
    }

    pub(crate) fn form_state_for_test(&self) -> &FormState {
        &self.form_state
    }

    pub(crate) fn alert_message_for_test(&self) -> Option<&str> {
        self.alert.as_ref().map(AlertState::message)
    }
}
