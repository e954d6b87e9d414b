//! Application entry point and dispatch.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Result;

use chanpick_cli::output::{total_estimated, write_selection};
use chanpick_cli::{confirm_large_selection, ui, LinePicker, SelectionPresenter, WarningChoice};
use chanpick_core::{catalog, exit_codes, Channel, ChannelSelector, PickError, SelectionOutcome};
use chanpick_tui::TuiPicker;

use crate::config::AppConfig;
use crate::prefs;

/// Run the application, returning the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        chanpick_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let channels = catalog::load_channels(Path::new(&config.channels))?;
    if channels.is_empty() {
        return Err(PickError::Config(format!(
            "catalog {} has no channels; run the fetch step first",
            config.channels
        ))
        .into());
    }

    let presenter = SelectionPresenter::new(config.quiet);
    presenter.statistics(&channels);

    // One reader shared by the line selector and the warning prompt, so
    // buffered lines are not lost between them.
    let mut input = io::BufReader::new(io::stdin());

    let outcome = resolve_selection(config, &channels, &mut input)?;
    let SelectionOutcome::Confirmed(selected) = outcome else {
        if !config.quiet {
            println!("Selection cancelled.");
        }
        return Ok(exit_codes::ERROR_CANCELED);
    };

    if !confirm_selection_size(config, &selected, &mut input) {
        if !config.quiet {
            println!("Selection cancelled.");
        }
        return Ok(exit_codes::ERROR_CANCELED);
    }

    presenter.summary(&selected);

    if let Some(ref path) = config.output {
        write_selection(path, &selected)
            .map_err(|err| PickError::Config(format!("{path}: {err}")))?;
        if !config.quiet {
            ui::print_success(&format!("selection written to {path}"));
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Run one selection session in the configured mode. A terminal failure
/// in the full-screen picker falls back to the line-oriented selector
/// over the same catalog.
fn resolve_selection<R: BufRead>(
    config: &AppConfig,
    channels: &[Channel],
    input: &mut R,
) -> Result<SelectionOutcome> {
    if config.line {
        return Ok(LinePicker::with_reader(&mut *input).select(channels)?);
    }

    match TuiPicker.select(channels) {
        Ok(outcome) => Ok(outcome),
        Err(PickError::Terminal(err)) => {
            tracing::warn!(error = %err, "interactive picker unavailable, falling back");
            ui::print_warning(&format!(
                "interactive UI unavailable ({err}); falling back to line mode"
            ));
            Ok(LinePicker::with_reader(&mut *input).select(channels)?)
        }
        Err(err) => Err(err.into()),
    }
}

/// Gate a large selection behind a confirmation prompt. Returns false if
/// the user aborts. The "don't warn again" choice is persisted through
/// the preference file.
fn confirm_selection_size<R: BufRead>(
    config: &AppConfig,
    selected: &[Channel],
    input: &mut R,
) -> bool {
    let total = total_estimated(selected);
    if total <= config.warn_threshold {
        return true;
    }

    let prefs_path = Path::new(&config.config);
    let mut prefs = prefs::load(prefs_path);
    if !prefs.show_large_selection_warning {
        return true;
    }

    match confirm_large_selection(input, total) {
        WarningChoice::Proceed => true,
        WarningChoice::ProceedAndSuppress => {
            prefs.show_large_selection_warning = false;
            if let Err(err) = prefs::save(prefs_path, &prefs) {
                tracing::warn!(error = %err, "could not persist warning preference");
            }
            true
        }
        WarningChoice::Abort => false,
    }
}
