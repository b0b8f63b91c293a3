//! scaffold's main application entry point.
//! Parses arguments, sets up logging and colour, and runs the pipeline.

use std::io::IsTerminal;

use scaffold::{
    app::{self, Settings},
    cli::get_args,
    constants::FAREWELL,
    error::{default_error_handler, Error},
    hooks::SystemRunner,
    logger::init_logger,
    parser::get_preloaded_answers,
    prompt::DialoguerPrompter,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let result = std::env::current_dir()
        .map_err(Error::from)
        .and_then(|cwd| Settings::from_args(&args, cwd))
        .and_then(|settings| {
            let preloaded = get_preloaded_answers(&args)?;
            app::run(&DialoguerPrompter::new(), &SystemRunner, &preloaded, &settings)
        });

    match result {
        Ok(_) => {}
        Err(Error::UserCancelled) => {
            println!("\n{FAREWELL}\n");
        }
        Err(err) => default_error_handler(err),
    }
}
