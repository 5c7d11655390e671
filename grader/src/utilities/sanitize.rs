//! The shared sanitize-and-truncate rule for result text.
//!
//! Raw program output can contain arbitrary bytes: terminal escape sequences,
//! NUL bytes, backspaces, or megabytes of looped printing. Every piece of text
//! stored in a [`TestResult`](crate::types::TestResult) is first passed through
//! [`sanitize`], which replaces control characters with a visible hex escape and
//! caps the length at [`MAX_STRING_LENGTH`], so results are always safe to
//! render and bounded in size. Each grading strategy is required to honour this
//! rule; routing result construction through `TestResult::new` enforces it.

/// Maximum length, in bytes, of the `expected` and `got` fields of a result.
pub const MAX_STRING_LENGTH: usize = 8000;

/// Replace control characters with `\xNN` escapes and truncate to
/// [`MAX_STRING_LENGTH`] bytes.
///
/// Newlines and tabs are kept as-is so multi-line output stays readable; every
/// other character in the C0/C1 control ranges (carriage returns, ANSI escape
/// introducers, NULs, ...) is rewritten as a lowercase hex escape such as
/// `\x1b`. Truncation never splits a character or an escape sequence.
///
/// # Arguments
///
/// * `text` - The raw text to sanitize.
///
/// # Returns
///
/// The sanitized text, at most [`MAX_STRING_LENGTH`] bytes long.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_STRING_LENGTH));
    for ch in text.chars() {
        let remaining = MAX_STRING_LENGTH - out.len();
        if ch == '\n' || ch == '\t' || !ch.is_control() {
            if ch.len_utf8() > remaining {
                break;
            }
            out.push(ch);
        } else {
            // Control characters are confined to U+0000..=U+009F, so two hex
            // digits always suffice.
            let escape = format!("\\x{:02x}", ch as u32);
            if escape.len() > remaining {
                break;
            }
            out.push_str(&escape);
        }
    }
    out
}
