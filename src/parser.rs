// File: src/parser.rs
//! Inline tag extraction: `@label`, `^list`, `#board`.

use crate::model::TaskAttr;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `input` into cleaned text plus the tag attributes it carried.
///
/// A tag is a sigil directly followed by one or more word characters, and
/// only counts when it opens the input or follows whitespace; the `@` of
/// mail@example.com stays plain text, as does a lone sigil. The matched
/// span is dropped from the cleaned text together with the single
/// whitespace character that introduced it. Labels collect every
/// occurrence in textual order; for list and board the last tag wins.
///
/// Never fails: input without tags comes back trimmed with empty
/// attributes. No default list is substituted here, that is the caller's
/// policy.
pub fn extract_attr(input: &str) -> (String, TaskAttr) {
    let mut attr = TaskAttr::default();
    let mut cleaned = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut at_boundary = true;

    while let Some(c) = chars.next() {
        if at_boundary
            && matches!(c, '@' | '^' | '#')
            && chars.peek().copied().is_some_and(is_word_char)
        {
            let mut word = String::new();
            while let Some(&w) = chars.peek() {
                if !is_word_char(w) {
                    break;
                }
                word.push(w);
                chars.next();
            }
            if cleaned.ends_with(|w: char| w.is_whitespace()) {
                cleaned.pop();
            }
            match c {
                '@' => attr.labels.push(word),
                '^' => attr.list = Some(word),
                _ => attr.board = Some(word),
            }
            // The scan continues right after the consumed span; a sigil
            // glued to it ("@a@b") is mid-token and must not match.
            at_boundary = false;
            continue;
        }
        at_boundary = c.is_whitespace();
        cleaned.push(c);
    }

    (cleaned.trim().to_string(), attr)
}
