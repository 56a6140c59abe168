use crate::{QuestionId, VariantTag};

/// A payload breaks one of its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Categorize question needs at least one category")]
    NoCategories,

    #[error("Categorize question needs at least one item")]
    NoItems,

    #[error("Sub-question {sub_question} has no options")]
    NoOptions { sub_question: usize },

    #[error(
        "Sub-question {sub_question} marks option {correct_index} as correct, but only has {options} option(s)"
    )]
    CorrectIndexOutOfRange {
        sub_question: usize,
        correct_index: usize,
        options: usize,
    },
}

/// Error type for building documents from externally supplied parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Question '{id}' has an invalid payload: {source}")]
    InvalidPayload {
        id: QuestionId,
        #[source]
        source: PayloadError,
    },

    #[error("Question id '{0}' is used more than once")]
    DuplicateQuestionId(QuestionId),

    #[error("Question '{id}' is a {expected} question, got a {actual} payload")]
    TagMismatch {
        id: QuestionId,
        expected: VariantTag,
        actual: VariantTag,
    },
}

/// Top-level error for driving a preview session through a respondent.
#[derive(Debug, thiserror::Error)]
pub enum QuizformError {
    /// Respondent-specific failure (UI crash, script mismatch, etc.)
    #[error("Respondent error: {0}")]
    Respondent(#[from] anyhow::Error),
}

impl QuizformError {
    /// Create a respondent error from any error type.
    pub fn respondent(err: impl Into<anyhow::Error>) -> Self {
        Self::Respondent(err.into())
    }
}
