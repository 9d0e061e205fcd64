//! Core types — Verdict.

/// Outcome of comparing two signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Ko,
}

impl Verdict {
    /// The fixed message shown to the user, without a line break.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Ok => "Anagram is OK!",
            Verdict::Ko => "Anagram is KO!",
        }
    }
}

impl From<bool> for Verdict {
    fn from(equal: bool) -> Self {
        if equal {
            Verdict::Ok
        } else {
            Verdict::Ko
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
