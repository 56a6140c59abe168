use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Diagnostic, ModelError, Question, QuestionId};

/// The top-level authoring document: form metadata plus an ordered list of
/// questions.
///
/// Question order is display and answer order. Documents are values: every
/// mutation produces a new document and leaves the original untouched, so a
/// renderer holding the previous snapshot never observes a half-applied edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FormDocumentRecord")]
pub struct FormDocument {
    pub(crate) id: String,

    pub(crate) title: String,

    pub(crate) description: String,

    /// Optional banner image reference.
    #[serde(default, rename = "headerImage", skip_serializing_if = "Option::is_none")]
    pub(crate) header_illustration: Option<String>,

    pub(crate) questions: Vec<Question>,
}

impl FormDocument {
    /// Create an empty document with a fresh id.
    pub fn create() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Create an empty document with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            header_illustration: None,
            questions: Vec::new(),
        }
    }

    /// Assemble a document from imported questions.
    ///
    /// Every payload must satisfy its structural invariants and every id must
    /// be unique.
    pub fn from_questions(
        id: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(ModelError::DuplicateQuestionId(question.id().clone()));
            }
            if let Err(source) = question.payload().validate() {
                return Err(ModelError::InvalidPayload {
                    id: question.id().clone(),
                    source,
                });
            }
        }
        Ok(Self {
            questions,
            ..Self::with_id(id)
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the header illustration.
    pub fn with_header_illustration(mut self, illustration: impl Into<String>) -> Self {
        self.header_illustration = Some(illustration.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn header_illustration(&self) -> Option<&str> {
        self.header_illustration.as_deref()
    }

    /// Get the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Position of a question in display order.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Check if the document has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Advisory diagnostics for every question, in document order.
    pub fn diagnostics(&self) -> Vec<(QuestionId, Diagnostic)> {
        self.questions
            .iter()
            .filter_map(|q| q.payload().diagnostic().map(|d| (q.id().clone(), d)))
            .collect()
    }
}

/// Wire shape of a document before its question ids have been checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormDocumentRecord {
    id: String,
    title: String,
    description: String,
    #[serde(default)]
    header_image: Option<String>,
    questions: Vec<Question>,
}

impl TryFrom<FormDocumentRecord> for FormDocument {
    type Error = ModelError;

    fn try_from(record: FormDocumentRecord) -> Result<Self, Self::Error> {
        let mut document = Self::from_questions(record.id, record.questions)?
            .with_title(record.title)
            .with_description(record.description);
        document.header_illustration = record.header_image;
        Ok(document)
    }
}
