//! Helpers for shaping raw user input into queries.
//!
//! Text fields deliver whatever the user typed so far, which rarely is a valid
//! query. The functions in this module turn such raw text into candidates for
//! [`parse_color`](crate::parse_color) and
//! [`find_by_symbol`](crate::find_by_symbol). They belong to the input
//! boundary; the matching functions themselves never see raw text.

use crate::{Dataset, SymbolRecord};

/// Shape raw text from a color field into a candidate color.
///
/// Text starting with `#` is accepted as is, even if it still is incomplete
/// or malformed, so that the user can keep typing. Up to six hexadecimal
/// digits without the `#` are accepted with a `#` prepended. Anything else is
/// rejected, in which case the field should keep its previous text.
///
/// ```
/// # use prettymoji::input::shape_color_input;
/// assert_eq!(shape_color_input("#7C4"), Some("#7C4".to_string()));
/// assert_eq!(shape_color_input("7C4DFF"), Some("#7C4DFF".to_string()));
/// assert_eq!(shape_color_input("purple"), None);
/// ```
pub fn shape_color_input(raw: &str) -> Option<String> {
    if raw.starts_with('#') {
        Some(raw.to_owned())
    } else if raw.len() <= 6 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(format!("#{}", raw))
    } else {
        None
    }
}

/// The result of shaping raw text from a symbol field.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolInput<'d> {
    /// The text the symbol field should display.
    pub text: String,
    /// The record for that text, if any.
    pub record: Option<&'d SymbolRecord>,
}

/// Get the suffix with the last `n` characters, if there are that many.
fn last_chars(s: &str, n: usize) -> Option<&str> {
    let index = s.char_indices().rev().nth(n.checked_sub(1)?)?.0;
    s.get(index..)
}

/// Shape raw text from a symbol field into a symbol.
///
/// Users tend to type or paste symbols into a field that already holds one.
/// Hence this function looks at the end of the text only. It first tries the
/// last two characters, which covers symbols with a variation selector or
/// other modifier, and then the last character as symbol. On a hit, the field
/// displays just that symbol. On a miss, it displays just the last character.
///
/// ```
/// # use prettymoji::{Dataset, Rgb, SymbolRecord};
/// # use prettymoji::input::shape_symbol_input;
/// let dataset = Dataset::new(vec![
///     SymbolRecord::new("🍋", "lemon", Rgb::new(0xff, 0xcc, 0x4d)),
/// ]);
///
/// let input = shape_symbol_input(&dataset, "🍇🍋");
/// assert_eq!(input.text, "🍋");
/// assert_eq!(input.record.map(|r| r.name()), Some("lemon"));
///
/// let input = shape_symbol_input(&dataset, "🍋x");
/// assert_eq!(input.text, "x");
/// assert!(input.record.is_none());
/// ```
pub fn shape_symbol_input<'d>(dataset: &'d Dataset, raw: &str) -> SymbolInput<'d> {
    for n in [2, 1] {
        if let Some(suffix) = last_chars(raw, n) {
            if let Some(record) = dataset.find_by_symbol(suffix) {
                return SymbolInput {
                    text: suffix.to_owned(),
                    record: Some(record),
                };
            }
        }
    }

    SymbolInput {
        text: last_chars(raw, 1).unwrap_or_default().to_owned(),
        record: None,
    }
}
