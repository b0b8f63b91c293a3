//! Question flow for the three scaffold questions.
//!
//! Answers bound before prompting (command line, stdin) are collected in an
//! [`Answers`] map. Each question consults the map first and is only asked
//! when no valid answer is bound.

use std::io::Read;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use crate::catalog::{self, Entry, TEMPLATES};
use crate::cli::Args;
use crate::error::{Error, Result};
use crate::prompt::{validate_project_name, Prompter};

pub const NAME_KEY: &str = "name";
pub const TEMPLATE_KEY: &str = "template";
pub const EXTRAS_KEY: &str = "extras";

/// Pre-bound answers keyed by question id.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Answers(IndexMap<String, serde_json::Value>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `key`, replacing any previous answer.
    pub fn bind<V: Into<serde_json::Value>>(&mut self, key: &str, value: V) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Copies answers from `other` that are not already bound here.
    pub fn merge_missing(&mut self, other: Answers) {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
    }

    /// Parses a JSON object of answers. `null` and empty input bind nothing.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str::<Option<Self>>(content)?.unwrap_or_default())
    }

    /// Answers bound by `--name` and `--template`. Positionals only seed
    /// prompt defaults, see [`QuestionDefaults`].
    pub fn from_args(args: &Args) -> Self {
        let mut answers = Self::new();
        if let Some(name) = &args.name {
            answers.bind(NAME_KEY, name.as_str());
        }
        if let Some(template) = &args.template {
            answers.bind(TEMPLATE_KEY, template.as_str());
        }
        answers
    }
}

/// Reads a JSON answers object from stdin.
pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Answers::from_json(&buffer)
}

/// Collects every pre-bound answer: the command line first, then stdin when requested.
pub fn get_preloaded_answers(args: &Args) -> Result<Answers> {
    let mut answers = Answers::from_args(args);
    if args.stdin {
        answers.merge_missing(load_from_stdin()?);
    }
    Ok(answers)
}

/// The user's choices once every question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub template: &'static Entry,
    /// Extra ids in catalog order.
    pub extras: Vec<&'static str>,
}

/// Settings that shape the question defaults.
#[derive(Debug, Clone, Default)]
pub struct QuestionDefaults {
    /// Positional NAME from the command line.
    pub initial_name: Option<String>,
    /// Positional TEMPLATE from the command line, an id or a list index.
    pub initial_template: Option<String>,
    /// Basename of the working directory when the current-directory suggestion is offered.
    pub current_dir_name: Option<String>,
    /// Name used when nothing else supplies one.
    pub fallback_name: String,
}

impl QuestionDefaults {
    /// Default for the name prompt: a valid positional name, then the
    /// working directory name, then the fallback.
    pub fn name(&self) -> &str {
        self.initial_name
            .as_deref()
            .filter(|name| validate_project_name(name).is_ok())
            .or(self.current_dir_name.as_deref())
            .unwrap_or(&self.fallback_name)
    }

    /// Default index for the template prompt: the positional template when it
    /// names a catalog entry, else the first entry.
    pub fn template_index(&self) -> usize {
        self.initial_template
            .as_deref()
            .and_then(catalog::lookup_template)
            .and_then(|entry| catalog::template_index(entry.id))
            .unwrap_or(0)
    }
}

fn bound_name(answers: &Answers) -> Option<String> {
    let value = answers.get(NAME_KEY)?;
    let Some(name) = value.as_str() else {
        warn!("Ignoring non-string project name '{value}'.");
        return None;
    };
    match validate_project_name(name) {
        Ok(()) => Some(name.to_string()),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

fn bound_template(answers: &Answers) -> Option<&'static Entry> {
    let value = answers.get(TEMPLATE_KEY)?;
    let reference = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    let entry = catalog::lookup_template(&reference);
    if entry.is_none() {
        warn!("Unknown template '{reference}'.");
    }
    entry
}

fn bound_extras(answers: &Answers, template_id: &str) -> Option<Vec<&'static str>> {
    let value = answers.get(EXTRAS_KEY)?;
    let Some(items) = value.as_array() else {
        warn!("Ignoring extras '{value}': expected a list of extra ids.");
        return None;
    };
    let ids: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
    match catalog::normalize_extras(template_id, &ids) {
        Ok(extras) => Some(extras),
        Err(unknown) => {
            warn!("Unknown extra '{unknown}' for template '{template_id}'.");
            None
        }
    }
}

/// Answers the name, template and extras questions in order.
///
/// A question is skipped when `preloaded` binds a valid answer for it. The
/// extras question is only asked for templates that have an extras catalog.
pub fn get_answers(
    prompt: &dyn Prompter,
    preloaded: &Answers,
    defaults: &QuestionDefaults,
) -> Result<Selection> {
    let name = match bound_name(preloaded) {
        Some(name) => {
            debug!("Using bound project name '{name}'.");
            name
        }
        None => {
            prompt.text(
                "What is the name of your project?",
                defaults.name(),
                &validate_project_name,
            )?
        }
    };

    let template = match bound_template(preloaded) {
        Some(entry) => {
            debug!("Using bound template '{}'.", entry.id);
            entry
        }
        None => {
            let titles: Vec<&str> = TEMPLATES.iter().map(|entry| entry.title).collect();
            let index = prompt.select(
                "Which template would you like to use?",
                &titles,
                defaults.template_index(),
            )?;
            TEMPLATES
                .get(index)
                .ok_or_else(|| Error::ValidationError(format!("no template at index {index}")))?
        }
    };

    let extras = match catalog::extras_for(template.id) {
        None => Vec::new(),
        Some(catalog_extras) => match bound_extras(preloaded, template.id) {
            Some(extras) => extras,
            None => {
                let titles: Vec<&str> = catalog_extras.iter().map(|entry| entry.title).collect();
                let defaults = vec![false; titles.len()];
                let mut picked = prompt.multi_select(
                    "Which extras would you like to add?",
                    &titles,
                    &defaults,
                )?;
                picked.sort_unstable();
                picked.dedup();
                picked
                    .into_iter()
                    .filter_map(|index| catalog_extras.get(index).map(|entry| entry.id))
                    .collect()
            }
        },
    };

    Ok(Selection { name, template, extras })
}
