use std::collections::HashMap;

use tracing::debug;

use crate::{
    CategorizeBoard, ClozeEntries, ComprehensionSelections, FormDocument, QuestionId, Response,
    VariantTag,
};

/// Error type for reading responses out of a preview session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("No question with id '{0}' in this preview")]
    MissingQuestion(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: VariantTag,
        actual: VariantTag,
    },
}

/// One respondent gesture, addressed to a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespondentAction {
    /// Type into a cloze blank.
    FillBlank { blank: usize, text: String },

    /// Start dragging a categorize item.
    PickUp { item: usize },

    /// Release the dragged item over a category.
    DropOn { category: usize },

    /// Release the dragged item outside any category.
    CancelDrag,

    /// Put an item into a category directly, without a drag.
    Assign { item: usize, category: usize },

    /// Take an item out of a category, back into the pool.
    RemoveFromCategory { category: usize, item: usize },

    /// Choose an option of a comprehension sub-question.
    Select { sub_question: usize, option: usize },
}

impl RespondentAction {
    /// The question kind this action applies to.
    pub fn tag(&self) -> VariantTag {
        match self {
            Self::FillBlank { .. } => VariantTag::Cloze,
            Self::PickUp { .. }
            | Self::DropOn { .. }
            | Self::CancelDrag
            | Self::Assign { .. }
            | Self::RemoveFromCategory { .. } => VariantTag::Categorize,
            Self::Select { .. } => VariantTag::Comprehension,
        }
    }
}

/// Respondent answers collected while a form is being previewed.
///
/// A session snapshots the document when the preview is entered and is
/// dropped when the preview is left. Nothing recorded here ever flows back
/// into the authoring document.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    form: FormDocument,
    responses: HashMap<QuestionId, Response>,
}

impl PreviewSession {
    /// Start a fresh session over a snapshot of `form`.
    pub fn new(form: &FormDocument) -> Self {
        let responses = form
            .questions()
            .iter()
            .map(|q| (q.id().clone(), Response::for_payload(q.payload())))
            .collect();
        Self {
            form: form.clone(),
            responses,
        }
    }

    /// The document snapshot this session renders.
    pub fn form(&self) -> &FormDocument {
        &self.form
    }

    /// Record one gesture for the question with the given id.
    ///
    /// Returns `true` if the gesture changed the response state. Gestures
    /// aimed at an unknown question, at the wrong question kind, or at
    /// positions the question does not have are ignored.
    pub fn record(&mut self, id: &QuestionId, action: RespondentAction) -> bool {
        let Some(response) = self.responses.get_mut(id) else {
            debug!(question = %id, "gesture for unknown question ignored");
            return false;
        };

        match (response, action) {
            (Response::Cloze(entries), RespondentAction::FillBlank { blank, text }) => {
                entries.fill(blank, text)
            }
            (Response::Categorize(board), RespondentAction::PickUp { item }) => board.pick_up(item),
            (Response::Categorize(board), RespondentAction::DropOn { category }) => {
                board.drop_on(category)
            }
            (Response::Categorize(board), RespondentAction::CancelDrag) => board.cancel_drag(),
            (Response::Categorize(board), RespondentAction::Assign { item, category }) => {
                board.assign(item, category)
            }
            (Response::Categorize(board), RespondentAction::RemoveFromCategory { category, item }) => {
                board.remove_from_category(category, item)
            }
            (
                Response::Comprehension(selections),
                RespondentAction::Select {
                    sub_question,
                    option,
                },
            ) => selections.select(sub_question, option),
            (response, action) => {
                debug!(
                    question = %id,
                    expected = %response.tag(),
                    actual = %action.tag(),
                    "gesture for another question kind ignored"
                );
                false
            }
        }
    }

    /// Get the raw response state for a question.
    pub fn response(&self, id: &QuestionId) -> Result<&Response, ResponseError> {
        self.responses
            .get(id)
            .ok_or_else(|| ResponseError::MissingQuestion(id.clone()))
    }

    // === Typed accessors ===

    /// Get the cloze entries for a question.
    pub fn cloze(&self, id: &QuestionId) -> Result<&ClozeEntries, ResponseError> {
        match self.response(id)? {
            Response::Cloze(entries) => Ok(entries),
            other => Err(mismatch(id, VariantTag::Cloze, other)),
        }
    }

    /// Get the categorize board for a question.
    pub fn categorize(&self, id: &QuestionId) -> Result<&CategorizeBoard, ResponseError> {
        match self.response(id)? {
            Response::Categorize(board) => Ok(board),
            other => Err(mismatch(id, VariantTag::Categorize, other)),
        }
    }

    /// Get the comprehension selections for a question.
    pub fn comprehension(
        &self,
        id: &QuestionId,
    ) -> Result<&ComprehensionSelections, ResponseError> {
        match self.response(id)? {
            Response::Comprehension(selections) => Ok(selections),
            other => Err(mismatch(id, VariantTag::Comprehension, other)),
        }
    }

    /// Get an iterator over responses in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Response)> {
        self.form
            .questions()
            .iter()
            .filter_map(|q| self.responses.get_key_value(q.id()))
    }

    /// Get the number of questions in the session.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if the session has no questions.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

fn mismatch(id: &QuestionId, expected: VariantTag, actual: &Response) -> ResponseError {
    ResponseError::TypeMismatch {
        id: id.clone(),
        expected,
        actual: actual.tag(),
    }
}
