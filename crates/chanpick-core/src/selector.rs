//! The selection-resolution seam shared by both front ends.

use crate::channel::Channel;
use crate::error::PickError;

/// Result of one selection session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The user confirmed a non-empty selection, in original catalog
    /// order.
    Confirmed(Vec<Channel>),
    /// The user cancelled; no channels are returned.
    Cancelled,
}

impl SelectionOutcome {
    /// Whether the session ended in cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The confirmed channels; empty when cancelled.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        match self {
            Self::Confirmed(channels) => channels,
            Self::Cancelled => &[],
        }
    }

    /// Consume the outcome, yielding the confirmed channels (empty when
    /// cancelled).
    #[must_use]
    pub fn into_channels(self) -> Vec<Channel> {
        match self {
            Self::Confirmed(channels) => channels,
            Self::Cancelled => Vec::new(),
        }
    }
}

/// A front end capable of resolving a subset of the catalog.
///
/// The full-screen picker and the line-oriented fallback both implement
/// this. They may differ in interaction mechanics but must not diverge in
/// the set of reachable selections.
pub trait ChannelSelector {
    /// Run one selection session over an immutable catalog snapshot.
    fn select(&mut self, channels: &[Channel]) -> Result<SelectionOutcome, PickError>;
}
