//! Leading-quantity recognition for ingredient lines.
//!
//! Understands integers and decimals (`2`, `0.5`), simple fractions (`1/2`),
//! unicode fraction glyphs (`¾`, `1½`), mixed fractions written over two
//! tokens (`4 1/2`, `2 ½`) or hyphenated (`1-1/2`), and ranges (`2-3`,
//! `1/2–1`, `1 1/2-2`, `3 to 4`), which resolve to their lower bound.

const RANGE_SEPARATORS: &[char] = &['-', '–'];
const RANGE_WORDS: &[&str] = &["to", "-", "–"];

fn glyph_value(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

fn decimal_value(token: &str) -> Option<f64> {
    let starts_numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    if !starts_numeric || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse::<f64>().ok()
}

fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// `1/2` or a single glyph like `½`
fn fraction_value(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return glyph_value(c);
    }

    let (numerator, denominator) = token.split_once('/')?;
    let numerator = decimal_value(numerator)?;
    let denominator = decimal_value(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// A fraction below one, the only kind that can follow a whole number
fn proper_fraction(token: &str) -> Option<f64> {
    fraction_value(token).filter(|fraction| *fraction < 1.0)
}

/// Value of a number without any range separator in it
fn single_value(token: &str) -> Option<f64> {
    if let Some(value) = fraction_value(token) {
        return Some(value);
    }
    if let Some(value) = decimal_value(token) {
        return Some(value);
    }

    // `1½`
    let last = token.chars().last()?;
    let glyph = glyph_value(last)?;
    let whole = &token[..token.len() - last.len_utf8()];
    if is_integer(whole) {
        return decimal_value(whole).map(|w| w + glyph);
    }
    None
}

/// Value of a single quantity token, or `None` if the token is not numeric
fn token_value(token: &str) -> Option<f64> {
    if let Some(value) = single_value(token) {
        return Some(value);
    }

    // `1-1/2` is a mixed number, `2-3` and `1/2–1` are ranges
    let (left, right) = token.split_once(RANGE_SEPARATORS)?;
    let left_value = single_value(left)?;
    if is_integer(left) {
        if let Some(fraction) = proper_fraction(right) {
            return Some(left_value + fraction);
        }
    }
    token_value(right)?;
    Some(left_value)
}

/// Read the quantity at the start of `tokens`.
///
/// Returns the value and the number of tokens it spans, or `None` when the
/// first token is not a quantity.
pub fn take_quantity(tokens: &[&str]) -> Option<(f64, usize)> {
    let first = tokens.first()?;
    let mut value = token_value(first)?;
    let mut used = 1;

    if is_integer(first) {
        if let Some(fraction) = tokens.get(1).and_then(|next| mixed_fraction(next)) {
            value += fraction;
            used = 2;
        }
    }

    // `3 to 4`: keep the lower bound, swallow the upper one
    if let (Some(word), Some(upper)) = (tokens.get(used), tokens.get(used + 1)) {
        if RANGE_WORDS.contains(word) && token_value(upper).is_some() {
            used += 2;
            let upper_fraction = tokens.get(used).and_then(|next| mixed_fraction(next));
            if is_integer(upper) && upper_fraction.is_some() {
                used += 1;
            }
        }
    }

    Some((value, used))
}

/// Fractional part following a whole number: `1/2`, `½`, or the lower end of
/// a range such as `1/2-2`
fn mixed_fraction(token: &str) -> Option<f64> {
    if let Some(fraction) = proper_fraction(token) {
        return Some(fraction);
    }
    let (left, right) = token.split_once(RANGE_SEPARATORS)?;
    let fraction = proper_fraction(left)?;
    token_value(right)?;
    Some(fraction)
}
