//! Selection presentation.

use chanpick_core::Channel;

use crate::output::{format_count, total_estimated};
use crate::ui;

/// Prints the catalog statistics banner and the confirmation summary.
pub struct SelectionPresenter {
    quiet: bool,
}

impl SelectionPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print catalog statistics before a selection session starts.
    pub fn statistics(&self, channels: &[Channel]) {
        if self.quiet {
            return;
        }
        ui::print_header("Channel statistics");
        println!("   channels: {}", channels.len());
        println!(
            "   estimated messages: {}",
            format_count(total_estimated(channels))
        );
    }

    /// Print the confirmed selection. In quiet mode, only the channel
    /// names are printed, one per line.
    pub fn summary(&self, selected: &[Channel]) {
        if self.quiet {
            for channel in selected {
                println!("{}", channel.channel_name);
            }
            return;
        }

        ui::print_success(&format!("selected {} channels:", selected.len()));
        for channel in selected {
            println!(
                "   - [{}] #{} (estimated: {} messages)",
                channel.guild_name,
                channel.channel_name,
                format_count(channel.estimated_messages)
            );
        }
        println!(
            "Total estimated messages: {}",
            format_count(total_estimated(selected))
        );
    }
}
