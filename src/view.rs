//! Plain-text presentation of search results, recipes and the shopping list.
//!
//! Rounding happens only here; the model keeps full precision.

use std::fmt::Write;

use crate::model::{RecipeDetail, ShoppingListItem};
use crate::sessions::SearchSession;

const TITLE_LIMIT: usize = 17;
const MAX_DENOMINATOR: u32 = 16;

/// Render a quantity as a whole number or mixed fraction ("1 1/2").
///
/// Values that have no close fraction fall back to two decimals. A missing
/// count renders as "?".
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count else {
        return "?".to_string();
    };
    if !count.is_finite() || count < 0.0 {
        return format!("{:.2}", count);
    }

    let count = (count * 10_000.0).round() / 10_000.0;
    let mut whole = count.trunc() as u64;
    let fraction = count - count.trunc();
    if fraction < 1e-9 {
        return whole.to_string();
    }

    let (numerator, denominator, error) = (2..=MAX_DENOMINATOR)
        .map(|d| {
            let n = (fraction * f64::from(d)).round() as u32;
            (n, d, (fraction - f64::from(n) / f64::from(d)).abs())
        })
        .fold((0, 1, f64::MAX), |best, candidate| {
            if candidate.2 < best.2 - 1e-12 {
                candidate
            } else {
                best
            }
        });

    if error > 0.01 {
        let text = format!("{:.2}", count);
        return text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    if numerator == 0 {
        return whole.to_string();
    }
    if numerator == denominator {
        whole += 1;
        return whole.to_string();
    }
    if whole == 0 {
        format!("{}/{}", numerator, denominator)
    } else {
        format!("{} {}/{}", whole, numerator, denominator)
    }
}

/// Shorten a title to whole words fitting in 17 characters, marking the cut with " ..."
pub fn limit_title(title: &str) -> String {
    if title.chars().count() <= TITLE_LIMIT {
        return title.to_string();
    }

    let mut used = 0;
    let words: Vec<&str> = title
        .split(' ')
        .take_while(|word| {
            used += word.chars().count();
            used <= TITLE_LIMIT
        })
        .collect();
    format!("{} ...", words.join(" "))
}

/// Labels for the previous/next page buttons of the active search
pub fn pagination_labels(session: &SearchSession) -> (Option<String>, Option<String>) {
    let page = session.page();
    let previous = session
        .has_previous()
        .then(|| format!("<- Page {}", page - 1));
    let next = session.has_next().then(|| format!("Page {} ->", page + 1));
    (previous, next)
}

/// Render the current page of results. The row of the recipe open in
/// `selected` is marked with `*`.
pub fn render_results(session: &SearchSession, selected: Option<&str>) -> String {
    let mut out = String::new();
    if session.result().recipes.is_empty() {
        let _ = writeln!(out, "No recipes found for \"{}\".", session.query());
        return out;
    }

    let _ = writeln!(
        out,
        "Results for \"{}\" (page {} of {}):",
        session.query(),
        session.page(),
        session.page_count()
    );
    for recipe in session.current_page() {
        let marker = if selected == Some(recipe.id.as_str()) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            " {}[{}] {} ({})",
            marker,
            recipe.id,
            limit_title(&recipe.title),
            recipe.publisher
        );
    }

    let (previous, next) = pagination_labels(session);
    let buttons: Vec<String> = previous.into_iter().chain(next).collect();
    if !buttons.is_empty() {
        let _ = writeln!(out, "  {}", buttons.join("   "));
    }
    out
}

pub fn render_recipe(recipe: &RecipeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} by {}", recipe.title, recipe.author);
    let _ = writeln!(
        out,
        "{} minutes (estimated), {} servings",
        recipe.cook_time_minutes, recipe.servings
    );
    for entry in &recipe.ingredients {
        let mut line = format!("  - {}", format_count(entry.count));
        if !entry.unit.is_empty() {
            let _ = write!(line, " {}", entry.unit);
        }
        let _ = writeln!(out, "{} {}", line, entry.ingredient);
    }
    if !recipe.source_url.is_empty() {
        let _ = writeln!(out, "Directions: {}", recipe.source_url);
    }
    out
}

pub fn render_list(items: &[ShoppingListItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty.\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        let mut line = format!("  {} {}", item.id, format_count(item.count));
        if !item.unit.is_empty() {
            let _ = write!(line, " {}", item.unit);
        }
        let _ = writeln!(out, "{} {}", line, item.ingredient);
    }
    out
}
