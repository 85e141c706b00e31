use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SESSION: AtomicU32 = AtomicU32::new(1);

/// Identifier for one shopping session.
///
/// Generated ids are process-unique counters mixed with a fixed seed so
/// they do not need a clock, which is unavailable in the browser build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID.
    pub fn generate() -> Self {
        let n = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
        let mixed = n.wrapping_mul(2_654_435_761);
        Self(format!("sess-{n:04x}-{mixed:08x}"))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("sess-"));
    }

    #[test]
    fn test_from_string() {
        assert_eq!(SessionId::from_string("abc").to_string(), "abc");
    }
}
