//! # Regular Expression Values
//!
//! [`RegExp`] pairs the declared `/source/flags` text with a compiled
//! `regex::Regex`. The text form is what literal equality compares and what
//! messages render; the compiled form is what the pattern matcher runs.
//!
//! Flags are stored in the canonical order `dgimsuvy`, so `/x/ig` and
//! `/x/gi` have the same text. A repeated or unknown flag is rejected.
//!
//! - `i`, `m` and `s` map onto the corresponding `regex` options.
//! - `y` anchors every test at the start of the haystack.
//! - `\d`, `\w` and `\b` are ASCII-only in every mode, as on the host;
//!   `\s` stays Unicode-aware.
//! - `v` allows nested bracket classes; otherwise `[` inside a class is a
//!   literal.
//! - `g` and `d` only affect iteration state and are recorded as-is.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::error::CoreError;

/// Every accepted flag, in canonical order.
const FLAG_ORDER: &str = "dgimsuvy";

/// A compiled regular expression with its declared source and flags.
#[derive(Clone)]
pub struct RegExp(Arc<RegExpInner>);

struct RegExpInner {
    source: String,
    flags: String,
    compiled: Regex,
}

impl RegExp {
    /// Compile `source` with no flags.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPattern` if the source does not compile.
    pub fn new(source: &str) -> Result<Self, CoreError> {
        Self::with_flags(source, "")
    }

    /// Compile `source` with the given flag letters, in any order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedFlag` for an unknown flag,
    /// `CoreError::DuplicateFlag` for a flag given twice and
    /// `CoreError::InvalidPattern` if the source does not compile.
    pub fn with_flags(source: &str, flags: &str) -> Result<Self, CoreError> {
        let flags = canonical_flags(flags)?;
        let has = |flag: char| flags.contains(flag);

        let mut pattern = ascii_classes(source, has('v'));
        if has('y') {
            pattern = format!(r"\A(?:{pattern})");
        }

        let compiled = RegexBuilder::new(&pattern)
            .case_insensitive(has('i'))
            .multi_line(has('m'))
            .dot_matches_new_line(has('s'))
            .build()
            .map_err(|e| CoreError::InvalidPattern {
                pattern: source.to_string(),
                flags: flags.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self(Arc::new(RegExpInner {
            source: source.to_string(),
            flags,
            compiled,
        })))
    }

    /// The pattern source text.
    pub fn source(&self) -> &str {
        &self.0.source
    }

    /// The flag letters, in canonical order.
    pub fn flags(&self) -> &str {
        &self.0.flags
    }

    /// Test whether the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.compiled.is_match(haystack)
    }

    /// True if both patterns have identical `/source/flags` text.
    pub fn same_text(&self, other: &RegExp) -> bool {
        self.source() == other.source() && self.flags() == other.flags()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &RegExp) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Validate `flags` and return them in canonical order.
fn canonical_flags(flags: &str) -> Result<String, CoreError> {
    let mut seen = [false; FLAG_ORDER.len()];
    for flag in flags.chars() {
        let slot = FLAG_ORDER
            .find(flag)
            .ok_or(CoreError::UnsupportedFlag(flag))?;
        if seen[slot] {
            return Err(CoreError::DuplicateFlag(flag));
        }
        seen[slot] = true;
    }
    Ok(FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect())
}

/// Rewrite `\d`, `\D`, `\w`, `\W`, `\b` and `\B` to their ASCII forms.
///
/// Inside a bracket class the replacements are nested POSIX classes and
/// `\b` is a backspace. A `[` inside a class opens a nested class only when
/// `nested` is set and is escaped as a literal otherwise.
fn ascii_classes(source: &str, nested: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut depth = 0usize;
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(next) = chars.next() else {
                    out.push(c);
                    break;
                };
                let replacement = match (depth > 0, next) {
                    (false, 'd') => "[[:digit:]]",
                    (false, 'D') => "[^[:digit:]]",
                    (false, 'w') => "[[:word:]]",
                    (false, 'W') => "[^[:word:]]",
                    (false, 'b') => r"(?-u:\b)",
                    (false, 'B') => r"(?-u:\B)",
                    (true, 'd') => "[:digit:]",
                    (true, 'D') => "[:^digit:]",
                    (true, 'w') => "[:word:]",
                    (true, 'W') => "[:^word:]",
                    (true, 'b') => r"\x08",
                    _ => {
                        out.push(c);
                        out.push(next);
                        continue;
                    }
                };
                out.push_str(replacement);
            }
            '[' if depth > 0 && !nested => out.push_str(r"\["),
            '[' => {
                depth += 1;
                out.push(c);
            }
            ']' if depth > 0 => {
                depth -= 1;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags())
    }
}

impl fmt::Debug for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegExp({self})")
    }
}
