//! Line-oriented fallback selector and the large-selection prompt.

use std::io::{self, BufRead, Write};

use chanpick_core::{parse_selection, Channel, ChannelSelector, PickError, SelectionOutcome};

use crate::output::format_count;
use crate::ui;

/// Line-oriented channel selector.
///
/// Prints the flat numbered catalog, then reads selection expressions
/// until one parses to a non-empty set. Parse errors re-prompt; EOF or a
/// read failure on the input is treated as cancellation.
pub struct LinePicker<R> {
    reader: R,
}

impl LinePicker<io::BufReader<io::Stdin>> {
    /// Selector reading from stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: io::BufReader::new(io::stdin()),
        }
    }
}

impl Default for LinePicker<io::BufReader<io::Stdin>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> LinePicker<R> {
    /// Selector reading from an arbitrary input, for tests and scripting.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ChannelSelector for LinePicker<R> {
    fn select(&mut self, channels: &[Channel]) -> Result<SelectionOutcome, PickError> {
        ui::print_header("Available channels");
        for (i, channel) in channels.iter().enumerate() {
            println!(
                "{:3}. [{}] #{} (estimated: {} messages)",
                i + 1,
                channel.guild_name,
                channel.channel_name,
                format_count(channel.estimated_messages)
            );
        }
        println!();
        println!("Enter channel numbers separated by commas (e.g. 1,3,5-7),");
        println!("or 'all' to select every channel.");

        loop {
            print!("Select: ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    tracing::debug!("input closed, treating as cancellation");
                    return Ok(SelectionOutcome::Cancelled);
                }
                Ok(_) => {}
            }

            match parse_selection(line.trim(), channels.len()) {
                Ok(indices) => {
                    let selected = indices.into_iter().map(|i| channels[i].clone()).collect();
                    return Ok(SelectionOutcome::Confirmed(selected));
                }
                Err(err) => ui::print_error(&err.to_string()),
            }
        }
    }
}

/// Outcome of the large-selection warning prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningChoice {
    /// Continue with the selection.
    Proceed,
    /// Continue and never warn again.
    ProceedAndSuppress,
    /// Abort the selection.
    Abort,
}

/// Warn that the selection totals `total` estimated messages and ask for
/// confirmation: `y` proceeds, `s` proceeds and suppresses future
/// warnings, anything else (including EOF) aborts.
pub fn confirm_large_selection<R: BufRead>(reader: &mut R, total: u64) -> WarningChoice {
    ui::print_warning(&format!(
        "the selection totals {} estimated messages",
        format_count(total)
    ));
    println!("   - the export may take a long time");
    println!("   - consider date-range or message-count limits");
    print!("Continue? (y/N/s = yes and don't warn again): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if reader.read_line(&mut line).is_err() {
        return WarningChoice::Abort;
    }
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => WarningChoice::Proceed,
        "s" => WarningChoice::ProceedAndSuppress,
        _ => WarningChoice::Abort,
    }
}
