//! Canonical-form text normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters kept verbatim besides letters, digits, and whitespace.
///
/// `/` survives so command aliases like `/start` stay intact, `.` and
/// `-` so enumerations like `1.- saldo` keep their shape.
const KEPT_PUNCTUATION: [char; 3] = ['/', '.', '-'];

/// Normalize raw text to its canonical matching form.
///
/// Lower-cases, decomposes accented characters (NFD) and strips the
/// combining marks so `"é"` becomes `"e"`, replaces every character that
/// is not a Unicode letter, digit, whitespace, `/`, `.`, or `-` with a
/// space, then collapses whitespace runs and trims.
///
/// Never fails: empty input yields an empty string. Idempotent, so
/// already-normalized text passes through unchanged.
///
/// # Examples
///
/// ```
/// use tino::analysis::normalize;
///
/// assert_eq!(normalize("  ¡Hola, buen día!  "), "hola buen dia");
/// assert_eq!(normalize("/start"), "/start");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        let ch = if ch.is_alphanumeric() || KEPT_PUNCTUATION.contains(&ch) {
            ch
        } else {
            // Anything else (punctuation, symbols, whitespace) separates words.
            ' '
        };
        if ch == ' ' {
            if !out.is_empty() {
                pending_space = true;
            }
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}
