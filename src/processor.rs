//! Layered copying of template trees into the destination.
//!
//! Layers are plain directory trees copied on top of each other. A file that
//! exists in several layers ends up with the content of the last one applied;
//! nothing is merged.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::plan::ResolvedPlan;

/// One source tree in apply order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    Project(PathBuf),
    Extra { id: String, dir: PathBuf },
    Additionals(PathBuf),
}

impl Layer {
    pub fn dir(&self) -> &Path {
        match self {
            Layer::Project(dir) | Layer::Additionals(dir) => dir,
            Layer::Extra { dir, .. } => dir,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Layer::Project(_) => "project".to_string(),
            Layer::Extra { id, .. } => format!("extra '{id}'"),
            Layer::Additionals(_) => "additionals".to_string(),
        }
    }
}

/// The layers to apply for `plan`: base, selected extras in catalog order,
/// then additionals when the template ships them.
pub fn layers_for(plan: &ResolvedPlan) -> Vec<Layer> {
    let mut layers = vec![Layer::Project(plan.template.project_dir())];
    layers.extend(plan.extras.iter().map(|id| Layer::Extra {
        id: id.to_string(),
        dir: plan.template.extra_dir(id),
    }));

    let additionals = plan.template.additionals_dir();
    if additionals.is_dir() {
        layers.push(Layer::Additionals(additionals));
    } else {
        debug!("No additionals at '{}'.", additionals.display());
    }
    layers
}

/// Recursively copies `source` into `target`, overwriting existing files.
///
/// Hidden files are copied like any other. Directory permissions below the
/// root are taken from the source once the directory's content is in place.
/// Returns the number of files copied.
pub fn copy_tree<S: AsRef<Path>, T: AsRef<Path>>(source: S, target: T) -> Result<usize> {
    let source = source.as_ref();
    let target = target.as_ref();
    let mut copied = 0;
    let mut directories = Vec::new();

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::ValidationError(e.to_string()))?;
        let target_path = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).map_err(Error::at(&target_path))?;
            // The target root keeps its own mode; it may be the working directory.
            if entry.depth() > 0 {
                let permissions = entry.metadata()?.permissions();
                directories.push((target_path, permissions));
            }
        } else {
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent).map_err(Error::at(parent))?;
            }
            debug!("Copying file: {}", target_path.display());
            fs::copy(entry.path(), &target_path).map_err(Error::at(&target_path))?;
            copied += 1;
        }
    }

    // Deepest directories first so a read-only parent does not block its children.
    for (path, permissions) in directories.into_iter().rev() {
        fs::set_permissions(&path, permissions).map_err(Error::at(&path))?;
    }

    Ok(copied)
}

/// Applies `layers` to `destination` in order and returns how many files each layer copied.
pub fn apply_layers(layers: &[Layer], destination: &Path) -> Result<Vec<(Layer, usize)>> {
    let mut applied = Vec::with_capacity(layers.len());
    for layer in layers {
        debug!("Applying {} layer from '{}'.", layer.label(), layer.dir().display());
        let copied = copy_tree(layer.dir(), destination)?;
        applied.push((layer.clone(), copied));
    }
    Ok(applied)
}
