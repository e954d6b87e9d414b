//! Category grouping and the flattened display list.

use std::collections::BTreeMap;

use crate::channel::Channel;
use crate::constants::UNCATEGORIZED;

/// A derived category view: label plus member indices in catalog order.
///
/// Categories are never stored on channels; they are recomputed group-by
/// views so selection state has a single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category label (with the `Uncategorized` sentinel substituted).
    pub label: String,
    /// Catalog indices of the member channels, in original order.
    pub members: Vec<usize>,
}

/// One entry in the flattened, render-ready sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEntry {
    /// A category header line; carries no checked state of its own.
    CategoryHeader {
        /// Label of the category this header introduces.
        label: String,
    },
    /// A selectable channel line.
    Channel {
        /// Index of the channel in the original catalog order.
        channel_index: usize,
    },
}

/// The immutable flattened display sequence for one selection session.
///
/// Every channel appears in exactly one `Channel` entry, and every
/// non-empty category appears in exactly one header immediately preceding
/// its members.
#[derive(Debug, Clone)]
pub struct DisplayList {
    entries: Vec<DisplayEntry>,
}

impl DisplayList {
    /// Flatten the catalog: categories in lexical label order with
    /// Uncategorized forced last, each header followed by its member
    /// channels in original catalog order.
    #[must_use]
    pub fn build(channels: &[Channel]) -> Self {
        let mut entries = Vec::with_capacity(channels.len());
        for category in group_by_category(channels) {
            entries.push(DisplayEntry::CategoryHeader {
                label: category.label,
            });
            for channel_index in category.members {
                entries.push(DisplayEntry::Channel { channel_index });
            }
        }
        Self { entries }
    }

    /// All entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    /// Number of display entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the display list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog index of the entry at `pos`, if it is a channel entry.
    #[must_use]
    pub fn channel_index(&self, pos: usize) -> Option<usize> {
        match self.entries.get(pos) {
            Some(DisplayEntry::Channel { channel_index }) => Some(*channel_index),
            _ => None,
        }
    }
}

/// Group channel indices by category label: lexical label order with
/// Uncategorized forced last, original channel order within each group.
#[must_use]
pub fn group_by_category(channels: &[Channel]) -> Vec<Category> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, channel) in channels.iter().enumerate() {
        groups.entry(channel.category_label()).or_default().push(idx);
    }

    let uncategorized = groups.remove(UNCATEGORIZED);
    let mut ordered: Vec<Category> = groups
        .into_iter()
        .map(|(label, members)| Category {
            label: label.to_owned(),
            members,
        })
        .collect();
    if let Some(members) = uncategorized {
        ordered.push(Category {
            label: UNCATEGORIZED.to_owned(),
            members,
        });
    }
    ordered
}
