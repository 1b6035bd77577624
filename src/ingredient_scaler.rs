//! Rescales ingredient quantities inside free recipe text.
//!
//! The text is split into plain runs and `<number><optional whitespace><unit>`
//! quantities, where the unit comes from a small fixed vocabulary. Only those
//! quantities are rescaled; bare numbers such as counts or percentages are
//! left as written.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Grams,
    Millilitres,
    Pieces,
}

/// Recognized unit spellings. Longer spellings sharing a prefix come first.
const UNIT_VOCABULARY: &[(&str, Unit)] = &[
    ("гр", Unit::Grams),
    ("г", Unit::Grams),
    ("мл", Unit::Millilitres),
    ("шт", Unit::Pieces),
    ("pcs", Unit::Pieces),
    ("ml", Unit::Millilitres),
    ("g", Unit::Grams),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<'a> {
    pub value: f64,
    /// The number exactly as written.
    pub number: &'a str,
    /// Whitespace between the number and the unit.
    pub spacing: &'a str,
    pub unit: Unit,
    pub unit_text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Text(&'a str),
    Quantity(Quantity<'a>),
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Finds a vocabulary unit at the start of `rest` that is not glued to a
/// following letter or digit ("5 grapes" is not "5 g").
fn match_unit(rest: &str) -> Option<(&str, Unit)> {
    UNIT_VOCABULARY.iter().find_map(|&(spelling, unit)| {
        let after = rest.strip_prefix(spelling)?;
        match after.chars().next() {
            Some(c) if c.is_alphanumeric() => None,
            _ => Some((&rest[..spelling.len()], unit)),
        }
    })
}

/// Splits `text` into plain runs and unit quantities.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_digit() {
            pos += 1;
            continue;
        }

        let number_start = pos;
        let mut number_end = digit_run_end(bytes, pos);
        if number_end + 1 < bytes.len()
            && bytes[number_end] == b'.'
            && bytes[number_end + 1].is_ascii_digit()
        {
            number_end = digit_run_end(bytes, number_end + 1);
        }

        let after_number = &text[number_end..];
        let spacing_len = after_number
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| i)
            .unwrap_or(after_number.len());
        let unit_start = number_end + spacing_len;

        let number = &text[number_start..number_end];
        match (match_unit(&text[unit_start..]), number.parse::<f64>()) {
            (Some((unit_text, unit)), Ok(value)) => {
                if text_start < number_start {
                    tokens.push(Token::Text(&text[text_start..number_start]));
                }
                tokens.push(Token::Quantity(Quantity {
                    value,
                    number,
                    spacing: &text[number_end..unit_start],
                    unit,
                    unit_text,
                }));
                pos = unit_start + unit_text.len();
                text_start = pos;
            }
            _ => pos = number_end,
        }
    }

    if text_start < text.len() {
        tokens.push(Token::Text(&text[text_start..]));
    }
    tokens
}

/// Multiplies every unit quantity in `description` by `multiplier`, rounded
/// to a whole number.
///
/// A multiplier of exactly 1.0 keeps each number as written, so fractional
/// quantities like "0.5pcs" survive unchanged. Any other multiplier writes
/// whole numbers.
pub fn scale_ingredients(description: &str, multiplier: f64) -> String {
    let mut scaled = String::with_capacity(description.len());
    for token in tokenize(description) {
        match token {
            Token::Text(text) => scaled.push_str(text),
            Token::Quantity(q) => {
                if multiplier == 1.0 {
                    scaled.push_str(q.number);
                } else {
                    scaled.push_str(&format!("{}", (q.value * multiplier).round() as i64));
                }
                scaled.push_str(q.spacing);
                scaled.push_str(q.unit_text);
            }
        }
    }
    scaled
}
