//! User input and interaction handling.
//!
//! Questions are asked through the [`Prompter`] trait so the question flow in
//! [`crate::parser`] can be driven by a terminal or by a scripted answerer.

use std::io;
use std::sync::OnceLock;

use dialoguer::{Input, MultiSelect, Select};
use regex::Regex;

use crate::constants::CURRENT_DIR_NAME;
use crate::error::{Error, Result};

/// Validator applied to free-text answers. A rejected answer is shown to the
/// user and the same question is asked again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<()>;

/// Trait for asking the user questions.
///
/// Implementations return [`Error::UserCancelled`] when the user aborts a prompt.
pub trait Prompter {
    /// Asks for free text, re-asking until `validate` accepts the answer.
    fn text(&self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String>;

    /// Asks for one of `items` and returns its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks for any subset of `items` and returns the chosen indices in item order.
    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Ctrl-C inside a dialoguer prompt surfaces as an interrupted read.
fn map_dialoguer_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::UserCancelled,
        e => Error::PromptError(e.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate(input.as_str()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(map_dialoguer_error)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact_opt()
            .map_err(map_dialoguer_error)?
            .ok_or(Error::UserCancelled)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()
            .map_err(map_dialoguer_error)?
            .ok_or(Error::UserCancelled)
    }
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("name pattern compiles"))
}

/// Accepts `.` or a non-empty name made of letters, digits, dashes and underscores.
pub fn validate_project_name(value: &str) -> Result<()> {
    if value == CURRENT_DIR_NAME || name_pattern().is_match(value) {
        Ok(())
    } else {
        Err(Error::ValidationError(
            "Project name can only contain letters, numbers, dashes, underscores, \
             or be '.' for the current directory"
                .to_string(),
        ))
    }
}
