use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a question inside a form document.
///
/// Assigned once when the question is added and never changed afterwards.
/// All lookups, updates and deletions go through this key, never through a
/// positional index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Wrap an existing identifier (used when importing a document).
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Source of fresh question identifiers.
///
/// The mutation engine asks its `IdSource` for a new id every time a question
/// is added. Hosts that need reproducible ids (tests, fixtures) can plug in
/// [`SequentialIds`].
pub trait IdSource {
    /// Produce an identifier that has not been handed out before.
    fn next_id(&mut self) -> QuestionId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> QuestionId {
        QuestionId::generate()
    }
}

/// Deterministic identifiers of the form `q1`, `q2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last`, so the first id handed out is `q{last + 1}`.
    pub fn starting_after(last: u64) -> Self {
        Self { next: last }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> QuestionId {
        self.next += 1;
        QuestionId::new(format!("q{}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "q1");
        assert_eq!(ids.next_id().as_str(), "q2");
    }

    #[test]
    fn sequential_ids_resume() {
        let mut ids = SequentialIds::starting_after(7);
        assert_eq!(ids.next_id(), QuestionId::from("q8"));
    }

    #[test]
    fn generated_ids_differ() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = QuestionId::new("q42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q42\"");
    }
}
