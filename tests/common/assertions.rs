//! Common assertion helpers for prompt output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// A space-padded display part, as the renderer draws it
pub fn has_part(text: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(" {text} "))
}

/// A bash-wrapped background escape for a palette index
pub fn has_bash_bg(color: u8) -> impl Predicate<str> {
    predicates::str::contains(format!("\\[\\e[48;5;{color}m\\]"))
}

/// Output finishes with the bash reset and a single trailing space
pub fn ends_with_bash_reset() -> impl Predicate<str> {
    predicates::str::ends_with("\\[\\e[0m\\] ")
}

/// Output finishes with the zsh reset and a single trailing space
pub fn ends_with_zsh_reset() -> impl Predicate<str> {
    predicates::str::ends_with("%{$reset_color%} ")
}
