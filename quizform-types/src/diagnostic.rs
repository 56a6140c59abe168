use std::fmt;

/// A non-blocking finding about a payload.
///
/// Diagnostics are advisory: a document carrying them is still valid. They
/// are derived on demand from the payload and never stored in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Cloze text and answer list disagree on the number of blanks.
    BlankAnswerMismatch { blanks: usize, answers: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankAnswerMismatch { blanks, answers } => write!(
                f,
                "You have {blanks} blank(s) in your text but {answers} answer(s). \
                 Make sure they match for proper validation."
            ),
        }
    }
}
