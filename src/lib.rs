//! scaffold creates a new project from a bundled template.
//! It copies the template's layers into the destination, renames and fills in
//! the generated files, then hands the project to git and the package manager.

/// Top-level flow tying the stages together
pub mod app;

/// Template and extras catalogs embedded in the binary
pub mod catalog;

/// Command-line interface module for scaffold
pub mod cli;

/// Fixed names, tokens and command settings
pub mod constants;

/// Error types and handling for scaffold
pub mod error;

/// Post-generation steps: editor, git, install and dev server
pub mod hooks;

/// Template directory resolution
pub mod loader;

/// Logger initialization
pub mod logger;

/// Question flow and pre-bound answers
pub mod parser;

/// Destination planning and the resolved plan
pub mod plan;

/// Layered copying of template trees
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Filename rules applied after copying
pub mod rename;

/// Placeholder substitution in generated files
pub mod substitute;
