//! Filename rules applied to the materialized tree before substitution.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::constants::{ENV_FILE, ENV_SEED_FILE, STRIP_PREFIX};
use crate::error::{Error, Result};

/// The name `file_name` should be renamed to, if it carries the `%%` prefix.
///
/// Every leading `%%` is removed, so the result never starts with the prefix.
pub fn strip_prefixed_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(STRIP_PREFIX)
        .map(|rest| rest.trim_start_matches(STRIP_PREFIX))
}

/// Renames every `%%`-prefixed file under `root` to its name without the prefix.
///
/// Returns the `(from, to)` pairs in the order they were renamed.
pub fn strip_prefixes(root: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if let Some(stripped) = entry.file_name().to_str().and_then(strip_prefixed_name) {
            if stripped.is_empty() {
                warn!("Leaving '{}' as is: nothing remains after the prefix.", entry.path().display());
                continue;
            }
            candidates.push((entry.path().to_path_buf(), entry.path().with_file_name(stripped)));
        }
    }

    for (from, to) in &candidates {
        debug!("Renaming '{}' to '{}'.", from.display(), to.display());
        fs::rename(from, to).map_err(Error::at(from))?;
    }
    Ok(candidates)
}

/// Renames `root/.env.test` to `root/.env`. A missing seed file is not an error.
pub fn promote_env_file(root: &Path) -> Result<Option<PathBuf>> {
    let seed = root.join(ENV_SEED_FILE);
    if !seed.is_file() {
        debug!("No '{}' to rename.", seed.display());
        return Ok(None);
    }
    let env = root.join(ENV_FILE);
    debug!("Renaming '{}' to '{}'.", seed.display(), env.display());
    fs::rename(&seed, &env).map_err(Error::at(&seed))?;
    Ok(Some(env))
}

/// Applies the prefix rule, then the env file rule.
pub fn rename_files(root: &Path) -> Result<usize> {
    let mut renamed = strip_prefixes(root)?.len();
    if promote_env_file(root)?.is_some() {
        renamed += 1;
    }
    Ok(renamed)
}
