//! Turning user-supplied text into keys, plus the built-in example data.
//!
//! The tree itself never validates anything. Whatever reaches [`Tree::insert`][crate::Tree::insert]
//! has already been through here.

use thiserror::Error;

/// Errors raised while reading keys or catalogue entries from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input held no keys at all.
    #[error("no keys given")]
    Empty,
    /// A token that isn't an integer.
    #[error("key #{position} (`{token}`) is not an integer")]
    InvalidKey {
        /// The offending token, trimmed.
        token: String,
        /// 1-based position among the non-empty tokens.
        position: usize,
    },
    /// A catalogue entry needs a title.
    #[error("a book needs a non-blank title")]
    BlankTitle,
}

/// Parses a comma-separated list of integer keys, keeping their order.
///
/// Whitespace around a key is ignored, as are empty entries, so `"8, 3,,10,"` is fine.
///
/// # Examples
///
/// ```
/// use bst::input::{parse_keys, InputError};
///
/// assert_eq!(parse_keys("8, 3,,10,"), Ok(vec![8, 3, 10]));
/// assert_eq!(
///     parse_keys("1, two"),
///     Err(InputError::InvalidKey { token: "two".to_string(), position: 2 })
/// );
/// ```
pub fn parse_keys(text: &str) -> Result<Vec<i64>, InputError> {
    let keys = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidKey {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if keys.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(keys)
}

/// The books a fresh catalogue starts with, as `(id, title)` in insertion order.
pub const SAMPLE_CATALOG: [(i64, &str); 7] = [
    (100, "El Principito"),
    (50, "Cien Años de Soledad"),
    (150, "Don Quijote de la Mancha"),
    (25, "Crónica de una Muerte Anunciada"),
    (75, "La Sombra del Viento"),
    (125, "Ficciones"),
    (175, "Rayuela"),
];

/// Two key sets whose shapes show off the differences between the traversal orders.
pub const EXAMPLE_SETS: [&[i64]; 2] = [
    &[8, 3, 10, 1, 6, 14, 4, 7, 13],
    &[5, 2, 9, 1, 3, 7, 12, 6, 8],
];
