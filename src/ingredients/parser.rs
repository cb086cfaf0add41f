use log::debug;

use super::quantity::take_quantity;
use super::units::{is_known_unit, looks_like_abbreviation, normalize_unit};
use crate::model::IngredientEntry;

const FILLER_WORDS: &[&str] = &["of"];

/// Parse one free-text ingredient line into quantity, unit and name.
///
/// Never fails: anything that cannot be recognised ends up in `ingredient`.
/// Blank input yields an empty entry, which callers should filter out.
pub fn parse(raw_line: &str) -> IngredientEntry {
    let cleaned = strip_parentheticals(&raw_line.to_lowercase());
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() {
        return IngredientEntry::default();
    }

    // A quantity with nothing after it is treated as part of the name
    let (count, rest) = match take_quantity(&tokens) {
        Some((value, used)) if used < tokens.len() => (Some(value), &tokens[used..]),
        _ => (None, &tokens[..]),
    };

    let (unit, rest) = match split_unit(rest, count.is_some()) {
        Some((unit, after)) => (unit, after),
        None => (String::new(), rest),
    };

    let rest = match rest.split_first() {
        Some((first, after)) if FILLER_WORDS.contains(first) && !after.is_empty() => after,
        _ => rest,
    };

    let entry = IngredientEntry {
        count,
        unit,
        ingredient: rest.join(" "),
    };
    debug!("parsed {:?} -> {:?}", raw_line, entry);
    entry
}

/// Parse every line, dropping blank ones
pub fn parse_all<I, S>(lines: I) -> Vec<IngredientEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| parse(line.as_ref()))
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn split_unit<'a, 'b>(tokens: &'a [&'b str], has_count: bool) -> Option<(String, &'a [&'b str])> {
    let (first, after) = tokens.split_first()?;
    // One-letter units ("g", "l", "c") only count after a quantity
    let is_unit = if has_count {
        is_known_unit(first) || looks_like_abbreviation(first)
    } else {
        is_known_unit(first) && first.trim_end_matches('.').chars().count() > 1
    };

    // Keep the unit as the name when nothing else would remain
    let has_name = after.iter().any(|t| !FILLER_WORDS.contains(t));
    if !is_unit || !has_name {
        return None;
    }

    Some((normalize_unit(first).trim_end_matches('.').to_string(), after))
}

/// Replace `( … )` asides with a space. An unclosed `(` swallows the rest of the line.
fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                if depth == 0 {
                    out.push(' ');
                }
                depth += 1;
            }
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
