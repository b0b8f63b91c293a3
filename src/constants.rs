//! Common constants used throughout scaffold.

/// Placeholder replaced by the project name in every generated file.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Name offered when neither the command line nor the current directory supplies one.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Project name meaning "generate into the current working directory".
pub const CURRENT_DIR_NAME: &str = ".";

/// Directory next to the executable that holds the bundled templates.
pub const TEMPLATES_DIR: &str = "templates";

/// Layer directories inside a template root.
pub const PROJECT_LAYER: &str = "project";
pub const EXTRAS_LAYER: &str = "extras";
pub const ADDITIONALS_LAYER: &str = "additionals";

/// Filename prefix stripped from generated files.
pub const STRIP_PREFIX: &str = "%%";

/// Seed env file renamed to [`ENV_FILE`] at the destination root.
pub const ENV_SEED_FILE: &str = ".env.test";
pub const ENV_FILE: &str = ".env";

pub const PACKAGE_MANAGER: &str = "pnpm";

/// Environment overrides applied to the install step only.
/// `NODE_ENV=development` keeps the package manager from skipping dev dependencies.
pub const INSTALL_ENV: [(&str, &str); 3] =
    [("ADBLOCK", "1"), ("DISABLE_OPENCOLLECTIVE", "1"), ("NODE_ENV", "development")];

pub const DEV_BRANCH: &str = "dev";
pub const FIRST_COMMIT_MESSAGE: &str = "First commit";

pub const FAREWELL: &str = "Bye 👋";
