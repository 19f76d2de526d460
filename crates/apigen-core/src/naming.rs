//! Case conversion shared by the DTO emitter and client synthesizer.
//!
//! Conversion is first-letter-only and case-preserving: `usersBy` becomes
//! `UsersBy`, never `Usersby`. Derived operation identifiers must survive
//! the round trip untouched apart from their leading letter.

/// Uppercase the first letter of every alphanumeric run, preserve everything
/// else, drop separators.
pub fn pascal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_boundary = true;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_boundary = false;
        } else {
            at_boundary = true;
        }
    }
    out
}

/// `pascal` with the first character lowercased.
pub fn camel(input: &str) -> String {
    let pascal = pascal(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}
