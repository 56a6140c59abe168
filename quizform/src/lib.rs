//! # quizform
//!
//! Author multi-question forms and preview them as a respondent would.
//!
//! A form is a [`FormDocument`]: metadata plus an ordered list of questions.
//! Each question is one of three variants:
//! - **Categorize** - drag items into categories
//! - **Cloze** - fill in the `[blank]` markers of a text
//! - **Comprehension** - read a passage, answer multiple-choice questions
//!
//! ## Usage
//!
//! ```rust
//! use quizform::{FormDocument, MetadataField, QuestionPatch, VariantTag};
//!
//! let doc = FormDocument::create()
//!     .set_metadata(MetadataField::Title, "Week 1 quiz")
//!     .add_question(VariantTag::Cloze)
//!     .add_question(VariantTag::Categorize);
//!
//! let first = doc.questions()[0].id().clone();
//! let doc = doc
//!     .update_question(&first, QuestionPatch::new().title("Fill in the gaps"))
//!     .reorder_questions(1, 0);
//!
//! assert_eq!(doc.questions()[1].title(), "Fill in the gaps");
//! assert!(doc.diagnostics().is_empty());
//! ```
//!
//! Every mutation returns a new document. Operations that name a question or
//! position that no longer exists return the document unchanged.
//!
//! ## Preview
//!
//! A [`PreviewSession`] captures a respondent's answers for one visit to the
//! preview. Preview surfaces implement [`Respondent`]; tests can use
//! [`ScriptedRespondent`] to replay gestures.
//!
//! ```rust
//! use quizform::{FormDocument, ScriptedRespondent, SequentialIds, VariantTag, run_preview};
//!
//! let doc = FormDocument::create().add_question_with(VariantTag::Comprehension, &mut SequentialIds::new());
//! let session = run_preview(&doc, &ScriptedRespondent::new().with_selection("q1", 0, 2)).unwrap();
//! assert_eq!(session.comprehension(&"q1".into()).unwrap().selected(0), Some(2));
//! ```

// Re-export all types from quizform-types
pub use quizform_types::*;

// Scripted respondent for testing previews without user interaction
mod scripted_respondent;
pub use scripted_respondent::{ScriptError, ScriptedRespondent};

/// Open a fresh preview of `form` and let `respondent` answer it.
pub fn run_preview<R: Respondent>(
    form: &FormDocument,
    respondent: &R,
) -> Result<PreviewSession, QuizformError> {
    let mut session = PreviewSession::new(form);
    respondent
        .respond(&mut session)
        .map_err(QuizformError::respondent)?;
    tracing::debug!(form = form.id(), questions = session.len(), "preview finished");
    Ok(session)
}
