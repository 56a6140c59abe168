//! Core types for the quizform crate.
//!
//! This crate provides the foundational types for authoring and previewing forms:
//! - `FormDocument` - The top-level form with its ordered questions
//! - `Question` and `Payload` - Individual questions and their variant data
//! - `DocumentIntent` - Mutations applied to a document, each yielding a new one
//! - `PreviewSession` and `Response` - Respondent answers captured during preview
//! - `Respondent` trait - For implementing preview surfaces

mod question_id;
pub use question_id::{IdSource, QuestionId, SequentialIds, UuidIds};

mod categorize;
pub use categorize::CategorizePayload;

mod cloze;
pub use cloze::{BLANK_MARKER, ClozePayload, blank_count};

mod comprehension;
pub use comprehension::{ComprehensionPayload, SubQuestion, option_letter};

mod payload;
pub use payload::{Payload, PayloadSummary, VariantTag};

mod diagnostic;
pub use diagnostic::Diagnostic;

mod question;
pub use question::{Question, QuestionPatch};

mod form_document;
pub use form_document::FormDocument;

mod mutation;
pub use mutation::{DocumentIntent, MetadataField};

mod response;
pub use response::{
    CategorizeBoard, ClozeEntries, ComprehensionSelections, DragState, Response,
};

mod preview_session;
pub use preview_session::{PreviewSession, RespondentAction, ResponseError};

mod error;
pub use error::{ModelError, PayloadError, QuizformError};

mod respondent;
pub use respondent::Respondent;
