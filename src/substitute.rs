//! Placeholder substitution over every file of the materialized tree.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Token-to-replacement pairs applied to file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings(Vec<(String, String)>);

impl Bindings {
    /// Bindings from `(token, replacement)` pairs. Empty tokens never match.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs.into_iter().filter(|(token, _)| !token.is_empty()).collect())
    }

    /// The canonical binding: `{{name}}` to the project name.
    pub fn for_project(name: &str) -> Self {
        Self::new(vec![(crate::constants::NAME_PLACEHOLDER.to_string(), name.to_string())])
    }

    /// Replaces every token occurrence in a single left-to-right pass.
    ///
    /// Replacement text is never rescanned, so a value containing another
    /// token is written as is. When two tokens start at the same offset the
    /// one bound first wins.
    pub fn apply(&self, content: &str) -> String {
        let mut output = String::with_capacity(content.len());
        let mut rest = content;
        while let Some((at, token, value)) = self.next_match(rest) {
            output.push_str(&rest[..at]);
            output.push_str(value);
            rest = &rest[at + token.len()..];
        }
        output.push_str(rest);
        output
    }

    fn next_match(&self, content: &str) -> Option<(usize, &str, &str)> {
        self.0
            .iter()
            .filter_map(|(token, value)| {
                content.find(token.as_str()).map(|at| (at, token.as_str(), value.as_str()))
            })
            .min_by_key(|(at, _, _)| *at)
    }

    fn matches(&self, content: &str) -> bool {
        self.0.iter().any(|(token, _)| content.contains(token.as_str()))
    }
}

/// Per-run substitution counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub scanned: usize,
    pub rewritten: usize,
    /// Files left untouched because they are not UTF-8.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be read or written.
    pub failed: Vec<PathBuf>,
}

enum Outcome {
    Rewritten,
    Unchanged,
    NotText,
}

fn substitute_file(path: &Path, bindings: &Bindings) -> Result<Outcome> {
    let bytes = fs::read(path).map_err(Error::at(path))?;
    let Ok(content) = String::from_utf8(bytes) else {
        return Ok(Outcome::NotText);
    };
    if !bindings.matches(&content) {
        return Ok(Outcome::Unchanged);
    }
    fs::write(path, bindings.apply(&content)).map_err(Error::at(path))?;
    Ok(Outcome::Rewritten)
}

/// Substitutes `bindings` in each of `files`.
///
/// Non-UTF-8 files are skipped and a file that cannot be read or written is
/// logged and recorded in [`SubstitutionReport::failed`]; neither stops the run.
pub fn substitute_files<I>(files: I, bindings: &Bindings) -> SubstitutionReport
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut report = SubstitutionReport::default();

    for path in files {
        report.scanned += 1;
        match substitute_file(&path, bindings) {
            Ok(Outcome::Rewritten) => {
                debug!("Substituted placeholders in '{}'.", path.display());
                report.rewritten += 1;
            }
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::NotText) => {
                debug!("Skipping non UTF-8 file '{}'.", path.display());
                report.skipped.push(path);
            }
            Err(e) => {
                warn!("{e}");
                report.failed.push(path);
            }
        }
    }

    report
}

/// Substitutes `bindings` in every regular file under `root`, hidden files included.
///
/// Entries the walk cannot visit are logged and skipped. Only a failure to
/// walk `root` itself is returned as an error.
pub fn substitute_tree(root: &Path, bindings: &Bindings) -> Result<SubstitutionReport> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("{}", Error::from(e));
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(substitute_files(files, bindings))
}
