use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::GroupDraft;

use super::{
    controller::FormController,
    options::UiOptions,
    runtime::App,
    submit::{LogSubmitHandler, SubmitHandler},
};

pub const DEFAULT_TITLE: &str = "Create a Facebook Group";

/// Entry point for the interactive form.
pub struct GroupForm {
    title: String,
    options: UiOptions,
    defaults: Option<Value>,
    handler: Box<dyn SubmitHandler>,
}

impl Default for GroupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupForm {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            options: UiOptions::default(),
            defaults: None,
            handler: Box::new(LogSubmitHandler),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Prefill fields from a JSON object keyed like the payload.
    pub fn with_defaults(mut self, defaults: Value) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn with_handler(mut self, handler: impl SubmitHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// Build the controller without opening a terminal.
    pub fn controller(self) -> Result<(FormController, String, UiOptions)> {
        let GroupForm {
            title,
            options,
            defaults,
            handler,
        } = self;
        let mut controller = FormController::with_boxed_handler(handler, &options)?;
        if let Some(defaults) = defaults {
            controller
                .form_mut()
                .seed_from_value(&defaults)
                .context("invalid default values")?;
            controller.form_mut().mark_clean();
            controller.toasts_mut().info("Default values loaded");
        }
        Ok((controller, title, options))
    }

    /// Open the form and block until the user quits.
    pub fn run(self) -> Result<Vec<GroupDraft>> {
        let (controller, title, options) = self.controller()?;
        tracing::debug!(%title, "opening group form");
        App::new(controller, title, options).run()
    }
}
