#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use scaffold::app::Settings;
use scaffold::error::{Error, Result};
use scaffold::hooks::{CommandRunner, ShellCommand, StepOptions};
use scaffold::prompt::{Prompter, Validator};

/// A scripted reply to the next question.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(&'static str),
    Select(usize),
    Multi(Vec<usize>),
    Cancel,
}

/// Answers questions from a script and records what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    pub asked: RefCell<Vec<String>>,
    pub rejected: RefCell<Vec<String>>,
    pub text_defaults: RefCell<Vec<String>>,
    pub select_defaults: RefCell<Vec<usize>>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: RefCell::new(replies.into()), ..Default::default() }
    }

    fn next(&self, prompt: &str) -> Reply {
        self.asked.borrow_mut().push(prompt.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected question: {prompt}"))
    }

    pub fn asked_count(&self) -> usize {
        self.asked.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        self.text_defaults.borrow_mut().push(default.to_string());
        loop {
            let value = match self.next(prompt) {
                Reply::Text("") => default.to_string(),
                Reply::Text(value) => value.to_string(),
                Reply::Cancel => return Err(Error::UserCancelled),
                other => panic!("expected text reply, got {other:?}"),
            };
            match validate(value.as_str()) {
                Ok(()) => return Ok(value),
                Err(_) => self.rejected.borrow_mut().push(value),
            }
        }
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        self.select_defaults.borrow_mut().push(default);
        match self.next(prompt) {
            Reply::Select(index) => {
                assert!(index < items.len());
                Ok(index)
            }
            Reply::Cancel => Err(Error::UserCancelled),
            other => panic!("expected select reply, got {other:?}"),
        }
    }

    fn multi_select(&self, prompt: &str, _items: &[&str], _defaults: &[bool]) -> Result<Vec<usize>> {
        match self.next(prompt) {
            Reply::Multi(indices) => Ok(indices),
            Reply::Cancel => Err(Error::UserCancelled),
            other => panic!("expected multi select reply, got {other:?}"),
        }
    }
}

/// Records commands instead of spawning them. Commands whose display starts
/// with one of `failing` fail.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<ShellCommand>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(prefixes: &[&str]) -> Self {
        Self { failing: prefixes.iter().map(|p| p.to_string()).collect(), ..Default::default() }
    }

    pub fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &ShellCommand) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());
        let line = command.to_string();
        if self.failing.iter().any(|prefix| line.starts_with(prefix.as_str())) {
            return Err(Error::SubprocessError { command: line, reason: "exited with 1".into() });
        }
        Ok(())
    }
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Writes `files` (relative path, content) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        write(&root.join(relative), content);
    }
}

/// Every file under `root`, relative and sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    files.sort();
    files
}

pub fn settings(templates_root: &Path, cwd: &Path) -> Settings {
    Settings {
        cwd: cwd.to_path_buf(),
        templates_root: templates_root.to_path_buf(),
        initial_name: None,
        initial_template: None,
        offer_current_dir: false,
        steps: StepOptions::default(),
    }
}

pub fn templates_root(base: &Path) -> PathBuf {
    base.join("templates")
}
