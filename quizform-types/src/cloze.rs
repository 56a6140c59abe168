use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// The literal placeholder token marking a fill-in position in cloze text.
pub const BLANK_MARKER: &str = "[blank]";

/// Count blank markers in `text`, scanning left to right without overlap.
pub fn blank_count(text: &str) -> usize {
    text.matches(BLANK_MARKER).count()
}

/// Payload of a fill-in-the-blank question.
///
/// `answers[i]` is the expected answer for the i-th blank marker in `text`.
/// The two counts are allowed to drift apart while the author edits; the
/// mismatch is reported through [`ClozePayload::diagnostic`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozePayload {
    pub text: String,
    pub answers: Vec<String>,
}

impl ClozePayload {
    pub fn new(text: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }

    /// Number of blank markers currently in the text.
    pub fn blank_count(&self) -> usize {
        blank_count(&self.text)
    }

    /// Whether there is exactly one answer per blank.
    pub fn is_consistent(&self) -> bool {
        self.blank_count() == self.answers.len()
    }

    /// Advisory diagnostic for a blank/answer count mismatch.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let blanks = self.blank_count();
        let answers = self.answers.len();
        (blanks != answers).then_some(Diagnostic::BlankAnswerMismatch { blanks, answers })
    }

    /// Split the text around blank markers.
    ///
    /// The result always has `blank_count() + 1` segments; a blank sits
    /// between each pair of neighbouring segments.
    pub fn segments(&self) -> Vec<&str> {
        self.text.split(BLANK_MARKER).collect()
    }

    pub fn set_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answers: self.answers.clone(),
        }
    }

    /// Append an empty answer slot.
    pub fn add_answer(&self) -> Self {
        let mut next = self.clone();
        next.answers.push(String::new());
        next
    }

    pub fn set_answer(&self, index: usize, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(answer) = next.answers.get_mut(index) {
            *answer = value.into();
        }
        next
    }

    /// Remove an answer. The last remaining answer cannot be removed.
    pub fn remove_answer(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.answers.len() && next.answers.len() > 1 {
            next.answers.remove(index);
        }
        next
    }

    /// Pad with empty answers or drop trailing answers until there is one
    /// answer per blank.
    pub fn sync_answers(&self) -> Self {
        let mut next = self.clone();
        next.answers.resize(self.blank_count(), String::new());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_blanks() {
        assert_eq!(blank_count("a [blank] b [blank] c"), 2);
        assert_eq!(blank_count("no blanks here"), 0);
        assert_eq!(blank_count("[blank][blank]"), 2);
        assert_eq!(blank_count("[blank"), 0);
    }

    #[test]
    fn consistency() {
        assert!(ClozePayload::new("a [blank] b", vec!["x".into()]).is_consistent());
        assert!(!ClozePayload::new("a [blank] b", vec![]).is_consistent());
    }

    #[test]
    fn diagnostic_names_both_counts() {
        let cloze = ClozePayload::new("[blank] and [blank]", vec!["one".into()]);
        let diagnostic = cloze.diagnostic().unwrap();
        assert_eq!(
            diagnostic,
            Diagnostic::BlankAnswerMismatch {
                blanks: 2,
                answers: 1
            }
        );
        let message = diagnostic.to_string();
        assert!(message.contains("2 blank(s)"));
        assert!(message.contains("1 answer(s)"));
    }

    #[test]
    fn segments_surround_blanks() {
        let cloze = ClozePayload::new("The [blank] sat on the [blank].", vec![]);
        assert_eq!(cloze.segments(), vec!["The ", " sat on the ", "."]);
    }

    #[test]
    fn last_answer_is_kept() {
        let cloze = ClozePayload::new("[blank]", vec!["only".into()]);
        assert_eq!(cloze.remove_answer(0), cloze);
    }

    #[test]
    fn editing_answers() {
        let cloze = ClozePayload::new("[blank] [blank]", vec!["a".into()])
            .add_answer()
            .set_answer(1, "b")
            .set_answer(9, "ignored");
        assert_eq!(cloze.answers, vec!["a", "b"]);
        assert!(cloze.is_consistent());
        assert_eq!(cloze.remove_answer(0).answers, vec!["b"]);
    }

    #[test]
    fn sync_pads_and_truncates() {
        let short = ClozePayload::new("[blank] [blank] [blank]", vec!["a".into()]);
        assert_eq!(short.sync_answers().answers, vec!["a", "", ""]);

        let long = ClozePayload::new("[blank]", vec!["a".into(), "b".into()]);
        assert_eq!(long.sync_answers().answers, vec!["a"]);
    }

    #[test]
    fn text_edit_keeps_answers() {
        let cloze = ClozePayload::new("[blank]", vec!["a".into()]).set_text("no blanks");
        assert_eq!(cloze.answers, vec!["a"]);
        assert!(!cloze.is_consistent());
    }
}
