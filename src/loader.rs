//! Template resolution for scaffold.
//! Maps a template id to its directory under the bundled templates root and
//! checks the layout every template must follow.

use crate::constants::{ADDITIONALS_LAYER, EXTRAS_LAYER, PROJECT_LAYER, TEMPLATES_DIR};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Returns the bundled templates directory: `<dir-of-executable>/templates`.
pub fn default_templates_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().ok_or_else(|| Error::TemplateMissing {
        template_dir: exe.clone(),
    })?;
    Ok(exe_dir.join(TEMPLATES_DIR))
}

/// A template directory whose `project/` layer is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    root: PathBuf,
}

impl TemplateRoot {
    /// Resolves `templates_root/<template_id>` and checks that it holds a `project/` layer.
    ///
    /// # Errors
    /// * `Error::TemplateMissing` if the template directory or its `project/` child is absent
    pub fn load<P: AsRef<Path>>(templates_root: P, template_id: &str) -> Result<Self> {
        let root = templates_root.as_ref().join(template_id);
        debug!("Resolving template '{}' at '{}'.", template_id, root.display());

        if !root.is_dir() {
            return Err(Error::TemplateMissing { template_dir: root });
        }
        let project = root.join(PROJECT_LAYER);
        if !project.is_dir() {
            return Err(Error::TemplateMissing { template_dir: project });
        }

        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The base layer, copied first.
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(PROJECT_LAYER)
    }

    pub fn extra_dir(&self, extra_id: &str) -> PathBuf {
        self.root.join(EXTRAS_LAYER).join(extra_id)
    }

    /// The cross-template overlay, applied last when present.
    pub fn additionals_dir(&self) -> PathBuf {
        self.root.join(ADDITIONALS_LAYER)
    }

    /// Checks that every selected extra has a directory under `extras/`.
    pub fn check_extras(&self, extras: &[&str]) -> Result<()> {
        for extra in extras {
            let dir = self.extra_dir(extra);
            if !dir.is_dir() {
                return Err(Error::TemplateMissing { template_dir: dir });
            }
        }
        Ok(())
    }
}
