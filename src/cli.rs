//! Command-line interface implementation for scaffold.
//! Provides argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Editor opened in the destination once the project is generated.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Editor {
    #[default]
    Code,
    Cursor,
    None,
}

impl Editor {
    /// Executable launched for this editor, `None` when no editor should be opened.
    pub fn program(self) -> Option<&'static str> {
        match self {
            Editor::Code => Some("code"),
            Editor::Cursor => Some("cursor"),
            Editor::None => None,
        }
    }
}

/// Command-line arguments structure for scaffold.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "scaffold: create a new project from a bundled template", long_about = None)]
pub struct Args {
    /// Default project name offered by the name prompt ('.' for the current directory)
    #[arg(value_name = "NAME")]
    pub positional_name: Option<String>,

    /// Template preselected in the template prompt, by id or list index
    #[arg(value_name = "TEMPLATE")]
    pub positional_template: Option<String>,

    /// Project name; skips the name prompt
    #[arg(short, long)]
    pub name: Option<String>,

    /// Template id; skips the template prompt
    #[arg(short, long)]
    pub template: Option<String>,

    /// Read answers as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Directory containing the bundled templates [default: <exe-dir>/templates]
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Suggest the current directory name and generate in place when it is chosen
    #[arg(long)]
    pub current_dir: bool,

    /// Editor to open after generation
    #[arg(long, value_enum, default_value_t = Editor::Code)]
    pub editor: Editor,

    /// Skip git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Skip starting the development server
    #[arg(long)]
    pub skip_dev: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on malformed arguments
pub fn get_args() -> Args {
    Args::parse()
}
