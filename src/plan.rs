//! Destination planning and the frozen result of the resolution phase.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::CURRENT_DIR_NAME;
use crate::error::{Error, Result};
use crate::loader::TemplateRoot;
use crate::parser::Selection;

/// Where a project is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub path: PathBuf,
    /// True iff the destination is the current working directory.
    pub in_place: bool,
}

/// Basename of `cwd`, when it has a UTF-8 one.
pub fn current_dir_name(cwd: &Path) -> Option<String> {
    cwd.file_name().and_then(|n| n.to_str()).map(str::to_string)
}

/// Computes the destination for project `name` relative to `cwd`.
///
/// `.` always means `cwd`. When `offer_current_dir` is set, a name equal to the
/// basename of `cwd` also generates in place.
pub fn plan_destination(name: &str, cwd: &Path, offer_current_dir: bool) -> Destination {
    let in_place = name == CURRENT_DIR_NAME
        || (offer_current_dir && current_dir_name(cwd).as_deref() == Some(name));

    let path = if in_place { cwd.to_path_buf() } else { cwd.join(name) };
    debug!("Destination for '{}' is '{}' (in place: {}).", name, path.display(), in_place);

    Destination { path, in_place }
}

/// Everything the materialization and post-generation phases need, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub name: String,
    pub template_id: &'static str,
    pub template: TemplateRoot,
    pub destination: PathBuf,
    /// Extra ids in catalog order.
    pub extras: Vec<&'static str>,
    pub in_place: bool,
}

impl ResolvedPlan {
    /// Builds the plan for `selection`, checking the template layout and the destination.
    ///
    /// # Errors
    /// * `Error::TemplateMissing` if the template, its `project/` layer or a selected extra is absent
    /// * `Error::ValidationError` if the destination exists and is not a directory
    pub fn resolve(
        selection: Selection,
        templates_root: &Path,
        cwd: &Path,
        offer_current_dir: bool,
    ) -> Result<Self> {
        let template = TemplateRoot::load(templates_root, selection.template.id)?;
        template.check_extras(&selection.extras)?;

        let Destination { path, in_place } =
            plan_destination(&selection.name, cwd, offer_current_dir);
        if path.exists() && !path.is_dir() {
            return Err(Error::ValidationError(format!(
                "destination '{}' exists and is not a directory",
                path.display()
            )));
        }

        Ok(Self {
            name: selection.name,
            template_id: selection.template.id,
            template,
            destination: path,
            extras: selection.extras,
            in_place,
        })
    }
}
