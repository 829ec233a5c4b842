//! Identifier splitting: underscores and camel-case boundaries.

use accord_core::TokenBag;

/// Split an identifier into its lowercase word multiset.
///
/// Splits on non-alphanumeric characters and camel-case boundaries,
/// including acronym runs (`HTTPServer` → `http`, `server`). Digits stay
/// attached to the word they follow (`decode2` → `decode2`). Duplicate
/// words count multiply: `get_user_get` contributes `get` twice.
pub fn split_identifier(name: &str) -> TokenBag {
    let mut bag = TokenBag::new();
    for word in split_words(name) {
        bag.add(&word);
    }
    bag
}

/// The leading word of an identifier, if it has one.
/// `delete_user` → `delete`; `_` → nothing.
pub fn leading_token(name: &str) -> Option<String> {
    split_words(name).into_iter().next()
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for i in 0..chars.len() {
        let c = chars[i];
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }
        if c.is_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1);
            let starts_word = match prev {
                // getUser → get | User; response2Json → response2 | Json
                Some(p) if p.is_lowercase() || p.is_numeric() => true,
                // HTTPServer → HTTP | Server
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if starts_word {
                flush(&mut current, &mut words);
            }
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
