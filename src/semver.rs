//! Semantic version comparison, to the precision the target spells out.
//!
//! Version strings follow the shape `core[-prerelease][+build]`: a core of
//! one to three dot-separated integers, an optional prerelease identifier,
//! and optional build metadata. Build metadata is validated and then
//! discarded; it never influences ordering.

use crate::errors::{MatchError, Result};
use std::cmp::Ordering;
use tracing::debug;

const BUILD_SEPARATOR: char = '+';
const PRE_RELEASE_SEPARATOR: char = '-';

/// Which suffix a raw version string carries, decided by whichever separator
/// occurs first in the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixKind {
    PreRelease,
    Build,
}

fn find_suffix(s: &str) -> Option<(SuffixKind, usize)> {
    match (s.find(PRE_RELEASE_SEPARATOR), s.find(BUILD_SEPARATOR)) {
        (None, None) => None,
        (Some(pre), None) => Some((SuffixKind::PreRelease, pre)),
        (None, Some(build)) => Some((SuffixKind::Build, build)),
        (Some(pre), Some(build)) => {
            if pre < build {
                Some((SuffixKind::PreRelease, pre))
            } else {
                Some((SuffixKind::Build, build))
            }
        }
    }
}

fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Prerelease and build segments may only comprise ASCII alphanumerics and
// hyphens; the empty string passes, a bare suffix is rejected elsewhere.
fn is_alnum_hyphen(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn numeric_value(token: &str) -> u64 {
    // tokens are digit-checked before they get here
    debug_assert!(is_digits_only(token));
    token.parse().unwrap_or(0)
}

/// A version string reduced to its comparable tokens: the numeric core
/// segments, then the prerelease identifier if one survived splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    tokens: Vec<String>,
    suffix: Option<SuffixKind>,
}

impl VersionParts {
    /// Tokenize a version string, rejecting anything outside the
    /// `core[-prerelease][+build]` grammar.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || {
            debug!(version = raw, "version string failed validation");
            MatchError::AttributeFormatInvalid(raw.to_string())
        };

        if raw.is_empty() || raw.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let suffix = find_suffix(raw);
        let mut core_prefix = raw;
        let mut pre_release = "";

        if let Some((kind, at)) = suffix {
            // more than one occurrence of the build separator is not allowed
            if raw.matches(BUILD_SEPARATOR).count() > 1 {
                return Err(invalid());
            }

            // split at the first occurrence only; both halves must be present
            let (prefix, rest) = (&raw[..at], &raw[at + 1..]);
            if prefix.is_empty() || rest.is_empty() {
                return Err(invalid());
            }
            core_prefix = prefix;

            pre_release = match kind {
                // build metadata is checked and dropped
                SuffixKind::Build => {
                    if !is_alnum_hyphen(rest) {
                        return Err(invalid());
                    }
                    ""
                }
                // a prerelease may carry its own build tail; check it the
                // same way and keep only the identifier
                SuffixKind::PreRelease => match rest.find(BUILD_SEPARATOR) {
                    Some(plus) => {
                        if !is_alnum_hyphen(&rest[plus + 1..]) {
                            return Err(invalid());
                        }
                        &rest[..plus]
                    }
                    None => rest,
                },
            };
        }

        if !is_alnum_hyphen(pre_release) {
            return Err(invalid());
        }

        // expect a core of the form x.y.z
        let core: Vec<&str> = core_prefix.split('.').collect();
        if core.is_empty() || core.len() > 3 {
            return Err(invalid());
        }
        if !core.iter().all(|segment| is_digits_only(segment)) {
            return Err(invalid());
        }

        let mut tokens: Vec<String> = core.iter().map(|s| s.to_string()).collect();
        if !pre_release.is_empty() {
            tokens.push(pre_release.to_string());
        }

        Ok(Self {
            tokens,
            suffix: suffix.map(|(kind, _)| kind),
        })
    }

    pub fn is_pre_release(&self) -> bool {
        self.suffix == Some(SuffixKind::PreRelease)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Compare `attribute` against `target`, to the precision the target spells
/// out. The result is the attribute's position relative to the target:
/// `Greater` means the attribute version is the newer one.
///
/// A target of `"2.0"` stops comparing after two segments, so any `"2.0.x"`
/// attribute comes out `Equal` to it. That is what lets a ge-style rule say
/// "at least 2.0" without forcing every attribute to carry a patch number.
pub fn compare(target: &str, attribute: &str) -> Result<Ordering> {
    let target_parts = VersionParts::parse(target)?;
    let attribute_parts = VersionParts::parse(attribute)?;

    for (idx, target_token) in target_parts.tokens.iter().enumerate() {
        let attribute_token = match attribute_parts.tokens.get(idx) {
            Some(token) => token,
            None => {
                // the attribute is less specific than the target; a
                // prerelease outranks its shorter spelling, anything else
                // orders below it
                return Ok(if attribute_parts.is_pre_release() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                });
            }
        };

        if !is_digits_only(attribute_token) {
            // prerelease tokens compare as plain strings
            match attribute_token.as_str().cmp(target_token.as_str()) {
                Ordering::Equal => {}
                strict => return Ok(strict),
            }
        } else if is_digits_only(target_token) {
            match numeric_value(attribute_token).cmp(&numeric_value(target_token)) {
                Ordering::Equal => {}
                strict => return Ok(strict),
            }
        } else {
            // numeric attribute token against a prerelease target token
            return Ok(Ordering::Less);
        }
    }

    // equal through the target's precision: a prerelease attribute still
    // orders below a non-prerelease target
    if attribute_parts.is_pre_release() && !target_parts.is_pre_release() {
        return Ok(Ordering::Less);
    }

    Ok(Ordering::Equal)
}
