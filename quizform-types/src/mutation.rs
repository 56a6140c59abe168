//! Document mutation engine.
//!
//! Every operation borrows the current document and returns a new one. Stale
//! references (an id that was already deleted, an index outside the list, a
//! drag released outside any drop zone) leave the document unchanged: the
//! unchanged document is a valid result, not an error.

use tracing::{debug, warn};

use crate::{FormDocument, IdSource, Question, QuestionId, QuestionPatch, UuidIds, VariantTag};

/// Form-level metadata fields editable through [`FormDocument::set_metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Title,
    Description,
    /// Banner image. An empty value clears it.
    HeaderIllustration,
}

/// A requested change to a form document, as emitted by a builder surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIntent {
    SetMetadata {
        field: MetadataField,
        value: String,
    },
    AddQuestion(VariantTag),
    UpdateQuestion {
        id: QuestionId,
        patch: QuestionPatch,
    },
    DeleteQuestion(QuestionId),
    /// Drag-and-drop reorder. `to` is `None` when the drag ended outside
    /// the list.
    ReorderQuestions {
        from: usize,
        to: Option<usize>,
    },
}

impl FormDocument {
    /// Apply one intent, producing the next document.
    pub fn apply(&self, intent: DocumentIntent) -> Self {
        match intent {
            DocumentIntent::SetMetadata { field, value } => self.set_metadata(field, value),
            DocumentIntent::AddQuestion(tag) => self.add_question(tag),
            DocumentIntent::UpdateQuestion { id, patch } => self.update_question(&id, patch),
            DocumentIntent::DeleteQuestion(id) => self.delete_question(&id),
            DocumentIntent::ReorderQuestions { from, to: Some(to) } => {
                self.reorder_questions(from, to)
            }
            DocumentIntent::ReorderQuestions { from, to: None } => {
                debug!(from, "drag released outside the question list");
                self.clone()
            }
        }
    }

    /// Update title, description or header illustration.
    pub fn set_metadata(&self, field: MetadataField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            MetadataField::Title => next.title = value,
            MetadataField::Description => next.description = value,
            MetadataField::HeaderIllustration if value.is_empty() => {
                next.header_illustration = None;
            }
            MetadataField::HeaderIllustration => next.header_illustration = Some(value),
        }
        debug!(?field, "updated form metadata");
        next
    }

    /// Append a new question with a random id and the default payload.
    pub fn add_question(&self, tag: VariantTag) -> Self {
        self.add_question_with(tag, &mut UuidIds)
    }

    /// Append a new question, drawing its id from `ids`.
    ///
    /// Ids already present in the document are skipped.
    pub fn add_question_with(&self, tag: VariantTag, ids: &mut impl IdSource) -> Self {
        let mut id = ids.next_id();
        while self.position(&id).is_some() {
            debug!(question = %id, "skipped id already in use");
            id = ids.next_id();
        }
        let question = Question::new(id, tag);
        debug!(question = %question.id(), %tag, "added question");
        let mut next = self.clone();
        next.questions.push(question);
        next
    }

    /// Merge `patch` into the question with the given id.
    ///
    /// Unknown ids leave the document unchanged. A patch payload of the wrong
    /// variant, or one that breaks its structural invariants, is dropped
    /// while the remaining fields still apply.
    pub fn update_question(&self, id: &QuestionId, patch: QuestionPatch) -> Self {
        let Some(index) = self.position(id) else {
            debug!(question = %id, "update for unknown question ignored");
            return self.clone();
        };

        let mut next = self.clone();
        let QuestionPatch {
            title,
            illustration,
            payload,
        } = patch;
        let question = &mut next.questions[index];

        if let Some(title) = title {
            question.set_title(title);
        }
        if let Some(illustration) = illustration {
            question.set_illustration(illustration);
        }
        if let Some(payload) = payload {
            match question.clone().with_payload(payload) {
                Ok(updated) => *question = updated,
                Err(err) => warn!(question = %id, %err, "rejected payload update"),
            }
        }

        debug!(question = %id, "updated question");
        next
    }

    /// Remove the question with the given id. Unknown ids are ignored.
    pub fn delete_question(&self, id: &QuestionId) -> Self {
        let Some(index) = self.position(id) else {
            debug!(question = %id, "delete for unknown question ignored");
            return self.clone();
        };
        let mut next = self.clone();
        next.questions.remove(index);
        debug!(question = %id, "deleted question");
        next
    }

    /// Move the question at `from` to `to`, shifting the questions in between.
    ///
    /// Both indices must lie within the question list; otherwise the document
    /// is returned unchanged.
    pub fn reorder_questions(&self, from: usize, to: usize) -> Self {
        let len = self.questions.len();
        if from >= len || to >= len {
            debug!(from, to, len, "reorder outside the question list ignored");
            return self.clone();
        }
        let mut next = self.clone();
        let moved = next.questions.remove(from);
        next.questions.insert(to, moved);
        debug!(from, to, "reordered questions");
        next
    }
}
