//! Character-frequency signatures and the multiset comparison behind every verdict.

use std::collections::HashMap;

use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::types::Verdict;

/// Multiset fingerprint of a string's retained characters.
///
/// Keys are lower-cased letters and digits; values are occurrence counts.
/// A character that does not occur is absent, never stored with a count of 0.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    counts: HashMap<char, usize>,
}

/// Letters (L*) and decimal digits (Nd) count, everything else is dropped.
fn is_retained(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

impl Signature {
    /// Build the signature of `input`.
    ///
    /// Case folding runs over the whole input before any filtering, so a
    /// character whose lower-case form expands to several chars contributes
    /// each of them. Folding is per character and does not depend on the
    /// surrounding text.
    pub fn build(input: &str) -> Self {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in input.chars().flat_map(char::to_lowercase) {
            if !is_retained(c) {
                continue;
            }
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of retained characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Occurrences of `c`, 0 if absent.
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

/// Collects explicit `(char, count)` pairs. Repeated chars are summed and
/// chars whose total is 0 are left out.
impl FromIterator<(char, usize)> for Signature {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for (c, n) in iter {
            *counts.entry(c).or_insert(0) += n;
        }
        counts.retain(|_, n| *n > 0);
        Self { counts }
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        signatures_equal(self, other)
    }
}

impl Eq for Signature {}

/// Alias of [`Signature::build`].
pub fn build_signature(input: &str) -> Signature {
    Signature::build(input)
}

/// Exact multiset equality of two signatures.
pub fn signatures_equal(a: &Signature, b: &Signature) -> bool {
    // Different distinct-character counts can never match.
    if a.counts.len() != b.counts.len() {
        return false;
    }

    for (c, a_count) in &a.counts {
        match b.counts.get(c) {
            Some(b_count) if b_count == a_count => {}
            _ => return false,
        }
    }

    true
}

/// Build both signatures and compare them.
pub fn check(first: &str, second: &str) -> Verdict {
    let a = Signature::build(first);
    let b = Signature::build(second);
    let verdict = Verdict::from(signatures_equal(&a, &b));
    debug!(
        first_distinct = a.len(),
        second_distinct = b.len(),
        first_total = a.total(),
        second_total = b.total(),
        %verdict,
        "compared signatures"
    );
    verdict
}
