//! Selection-expression parsing for the line-oriented selector.

use std::collections::BTreeSet;

use crate::error::PickError;

/// Parse a selection expression over a catalog of `len` channels.
///
/// The expression is a comma-separated list of tokens: a 1-based index
/// `k`, an inclusive 1-based range `a-b`, or the literal `all`
/// (case-insensitive). Out-of-range indices are dropped and an inverted
/// range contributes nothing; an expression that resolves to no indices at
/// all is an error. Returned indices are 0-based, de-duplicated, ascending
/// regardless of token order.
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>, PickError> {
    let mut picked: BTreeSet<usize> = BTreeSet::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.eq_ignore_ascii_case("all") {
            picked.extend(0..len);
            continue;
        }
        if let Some((a, b)) = token.split_once('-') {
            let start = parse_index(a, token)?;
            let end = parse_index(b, token)?;
            // Clamp to the catalog before iterating; out-of-range ends
            // would otherwise make the loop unbounded.
            for k in start.max(1)..=end.min(len) {
                picked.insert(k - 1);
            }
        } else {
            let k = parse_index(token, token)?;
            if (1..=len).contains(&k) {
                picked.insert(k - 1);
            }
        }
    }

    if picked.is_empty() {
        return Err(PickError::Parse(
            "no valid channel numbers in expression".into(),
        ));
    }
    Ok(picked.into_iter().collect())
}

fn parse_index(text: &str, token: &str) -> Result<usize, PickError> {
    text.trim()
        .parse()
        .map_err(|_| PickError::Parse(format!("token {token:?} is not a number or range")))
}
