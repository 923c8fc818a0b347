use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static GITHUB_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gh[pousr]_[A-Za-z0-9]{20,}|github_pat_[A-Za-z0-9_]{20,})")
        .expect("github token pattern is valid")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[A-Za-z0-9\-_\.]+").expect("bearer pattern is valid")
});

static TOKEN_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?(?:github_token|access_token|token)["']?\s*([:=])\s*["']?[A-Za-z0-9\-_\.]{8,}["']?"#)
        .expect("token field pattern is valid")
});

/// Redacts GitHub credentials from text before it is logged or embedded in
/// an error.
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = GITHUB_TOKEN_PATTERN.replace_all(message, "[TOKEN_REDACTED]");
        let scrubbed = BEARER_PATTERN.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        TOKEN_FIELD_PATTERN
            .replace_all(&scrubbed, "token$1[REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
