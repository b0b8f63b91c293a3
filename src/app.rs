//! Top-level scaffold flow: resolve the plan, materialize it, then run the
//! post-generation steps.

use std::path::PathBuf;

use colored::Colorize;
use log::debug;

use crate::cli::Args;
use crate::constants::{ADDITIONALS_LAYER, DEFAULT_PROJECT_NAME};
use crate::error::Result;
use crate::hooks::{CommandRunner, PostGeneration, Step, StepOptions, StepStatus};
use crate::loader::default_templates_root;
use crate::parser::{get_answers, Answers, QuestionDefaults};
use crate::plan::{current_dir_name, ResolvedPlan};
use crate::processor::{apply_layers, layers_for, Layer};
use crate::prompt::Prompter;
use crate::rename::rename_files;
use crate::substitute::{substitute_tree, Bindings, SubstitutionReport};

/// Inputs of one run that do not come from the questions.
#[derive(Debug, Clone)]
pub struct Settings {
    pub cwd: PathBuf,
    pub templates_root: PathBuf,
    /// Positional NAME, offered as the name prompt's default.
    pub initial_name: Option<String>,
    /// Positional TEMPLATE, preselected in the template prompt.
    pub initial_template: Option<String>,
    /// Offer the working directory name as the default project name.
    pub offer_current_dir: bool,
    pub steps: StepOptions,
}

impl Settings {
    /// Settings for `args` run from `cwd`.
    pub fn from_args(args: &Args, cwd: PathBuf) -> Result<Self> {
        let templates_root = match &args.templates_dir {
            Some(dir) => dir.clone(),
            None => default_templates_root()?,
        };
        Ok(Self {
            cwd,
            templates_root,
            initial_name: args.positional_name.clone(),
            initial_template: args.positional_template.clone(),
            offer_current_dir: args.current_dir,
            steps: StepOptions {
                editor: args.editor.program(),
                git: !args.skip_git,
                install: !args.skip_install,
                dev_server: !args.skip_dev,
            },
        })
    }
}

/// Asks the remaining questions and freezes the answers into a plan.
///
/// Nothing is written to disk here, so cancelling leaves the filesystem untouched.
pub fn resolve(
    prompt: &dyn Prompter,
    preloaded: &Answers,
    settings: &Settings,
) -> Result<ResolvedPlan> {
    let defaults = QuestionDefaults {
        initial_name: settings.initial_name.clone(),
        initial_template: settings.initial_template.clone(),
        current_dir_name: if settings.offer_current_dir {
            current_dir_name(&settings.cwd)
        } else {
            None
        },
        fallback_name: DEFAULT_PROJECT_NAME.to_string(),
    };
    let selection = get_answers(prompt, preloaded, &defaults)?;
    ResolvedPlan::resolve(
        selection,
        &settings.templates_root,
        &settings.cwd,
        settings.offer_current_dir,
    )
}

/// Copies every layer, applies the rename rules and substitutes placeholders.
pub fn materialize(plan: &ResolvedPlan) -> Result<SubstitutionReport> {
    let layers = layers_for(plan);
    if !layers.iter().any(|layer| matches!(layer, Layer::Additionals(_))) {
        println!(
            "{}",
            format!("No {ADDITIONALS_LAYER} for template '{}', skipping.", plan.template_id).dimmed()
        );
    }

    for (layer, copied) in apply_layers(&layers, &plan.destination)? {
        println!("{} {} layer ({} files)", "Copied".green(), layer.label(), copied);
    }

    let renamed = rename_files(&plan.destination)?;
    debug!("Renamed {renamed} files.");

    let report = substitute_tree(&plan.destination, &Bindings::for_project(&plan.name))?;
    debug!(
        "Substitution scanned {} files, rewrote {}, skipped {}, failed {}.",
        report.scanned,
        report.rewritten,
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Prints the success banner and the hints that follow it.
pub fn print_summary(plan: &ResolvedPlan) {
    println!("\n✨ Project created ✨");

    if !plan.extras.is_empty() {
        let docs: Vec<String> =
            plan.extras.iter().map(|extra| format!("{}.md", extra.to_uppercase())).collect();
        println!("\nCheck out {} for more info on how to use it.", docs.join(", ").italic());
    }

    if !plan.in_place {
        println!("\n{} {}", "cd".green(), plan.name);
    }
}

/// Runs the post-generation steps in `destination`.
pub fn post_generate(
    runner: &dyn CommandRunner,
    plan: &ResolvedPlan,
    steps: StepOptions,
) -> Vec<(Step, StepStatus)> {
    PostGeneration::new(runner, &plan.destination, plan.in_place, steps).run()
}

/// The whole pipeline. Errors up to and including substitution are returned;
/// post-generation failures are only logged.
pub fn run(
    prompt: &dyn Prompter,
    runner: &dyn CommandRunner,
    preloaded: &Answers,
    settings: &Settings,
) -> Result<ResolvedPlan> {
    let plan = resolve(prompt, preloaded, settings)?;
    debug!("Resolved plan: {plan:?}");

    materialize(&plan)?;
    print_summary(&plan);
    post_generate(runner, &plan, settings.steps);

    Ok(plan)
}
