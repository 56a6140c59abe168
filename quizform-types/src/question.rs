use serde::{Deserialize, Serialize};

use crate::{ModelError, Payload, QuestionId, VariantTag};

/// A single question in a form.
///
/// The variant tag is carried by the payload itself, so the two can never
/// disagree. Once created, a question keeps its id and its tag; only the
/// title, illustration and payload contents change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    /// Stable identity used for every lookup.
    id: QuestionId,

    /// Heading shown above the question.
    title: String,

    /// Optional image reference (URL or opaque handle).
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    illustration: Option<String>,

    /// Variant-specific data.
    #[serde(flatten)]
    payload: Payload,
}

impl Question {
    /// Create a question with the default title and payload for `tag`.
    pub fn new(id: impl Into<QuestionId>, tag: VariantTag) -> Self {
        Self {
            id: id.into(),
            title: tag.default_title(),
            illustration: None,
            payload: Payload::default_for(tag),
        }
    }

    /// Assemble a question from explicit parts (cloning or importing).
    pub fn from_parts(
        id: impl Into<QuestionId>,
        title: impl Into<String>,
        illustration: Option<String>,
        payload: Payload,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        if let Err(source) = payload.validate() {
            return Err(ModelError::InvalidPayload { id, source });
        }
        Ok(Self {
            id,
            title: title.into(),
            illustration,
            payload,
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the illustration.
    pub fn with_illustration(mut self, illustration: impl Into<String>) -> Self {
        self.illustration = Some(illustration.into());
        self
    }

    /// Replace the payload, keeping the variant tag fixed.
    pub fn with_payload(mut self, payload: Payload) -> Result<Self, ModelError> {
        let expected = self.variant_tag();
        let actual = payload.tag();
        if actual != expected {
            return Err(ModelError::TagMismatch {
                id: self.id,
                expected,
                actual,
            });
        }
        if let Err(source) = payload.validate() {
            return Err(ModelError::InvalidPayload {
                id: self.id,
                source,
            });
        }
        self.payload = payload;
        Ok(self)
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn variant_tag(&self) -> VariantTag {
        self.payload.tag()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn illustration(&self) -> Option<&str> {
        self.illustration.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_illustration(&mut self, illustration: Option<String>) {
        self.illustration = illustration;
    }
}

/// Wire shape of a question before its payload has been checked.
#[derive(Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    title: String,
    #[serde(default, rename = "image")]
    illustration: Option<String>,
    #[serde(flatten)]
    payload: Payload,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = ModelError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::from_parts(record.id, record.title, record.illustration, record.payload)
    }
}

/// Fields to merge into an existing question.
///
/// `None` leaves a field untouched. For the illustration, `Some(None)`
/// removes the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub illustration: Option<Option<String>>,
    pub payload: Option<Payload>,
}

impl QuestionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn illustration(mut self, illustration: impl Into<String>) -> Self {
        self.illustration = Some(Some(illustration.into()));
        self
    }

    pub fn remove_illustration(mut self) -> Self {
        self.illustration = Some(None);
        self
    }

    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.illustration.is_none() && self.payload.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategorizePayload, ClozePayload, PayloadError};

    #[test]
    fn new_question_uses_defaults() {
        let question = Question::new("q1", VariantTag::Categorize);
        assert_eq!(question.title(), "New Categorize Question");
        assert_eq!(question.variant_tag(), VariantTag::Categorize);
        assert_eq!(question.illustration(), None);
        assert_eq!(question.payload(), &Payload::default_for(VariantTag::Categorize));
    }

    #[test]
    fn from_parts_validates_payload() {
        let result = Question::from_parts(
            "q1",
            "Sort",
            None,
            CategorizePayload::new(vec![], vec!["x".into()]).into(),
        );
        assert_eq!(
            result,
            Err(ModelError::InvalidPayload {
                id: QuestionId::new("q1"),
                source: PayloadError::NoCategories
            })
        );
    }

    #[test]
    fn payload_tag_cannot_change() {
        let question = Question::new("q1", VariantTag::Categorize);
        let result = question.with_payload(ClozePayload::new("[blank]", vec![]).into());
        assert_eq!(
            result,
            Err(ModelError::TagMismatch {
                id: QuestionId::new("q1"),
                expected: VariantTag::Categorize,
                actual: VariantTag::Cloze,
            })
        );
    }

    #[test]
    fn payload_replacement_within_tag() {
        let cloze = ClozePayload::new("[blank]!", vec!["Hi".into()]);
        let question = Question::new("q1", VariantTag::Cloze)
            .with_payload(cloze.clone().into())
            .unwrap();
        assert_eq!(question.payload().as_cloze(), Some(&cloze));
    }

    #[test]
    fn serialized_shape() {
        let question = Question::new("q7", VariantTag::Cloze).with_illustration("cat.png");
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["id"], "q7");
        assert_eq!(json["type"], "cloze");
        assert_eq!(json["image"], "cat.png");
        assert!(json["data"]["text"].is_string());

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn deserializing_rejects_invalid_payloads() {
        let no_categories = serde_json::json!({
            "id": "q1",
            "title": "Sort",
            "type": "categorize",
            "data": { "categories": [], "items": ["x"] }
        });
        let err = serde_json::from_value::<Question>(no_categories).unwrap_err();
        assert!(err.to_string().contains("at least one category"), "{err}");

        let bad_index = serde_json::json!({
            "id": "q2",
            "title": "Read",
            "type": "comprehension",
            "data": {
                "passage": "Once.",
                "subQuestions": [
                    { "prompt": "Who?", "options": ["A"], "correctIndex": 9 }
                ]
            }
        });
        assert!(serde_json::from_value::<Question>(bad_index).is_err());
    }

    #[test]
    fn deserializing_without_image_is_allowed() {
        let json = serde_json::json!({
            "id": "q3",
            "title": "Fill",
            "type": "cloze",
            "data": { "text": "[blank]", "answers": ["a"] }
        });
        let question: Question = serde_json::from_value(json).unwrap();
        assert_eq!(question.illustration(), None);
        assert_eq!(question.variant_tag(), VariantTag::Cloze);
    }

    #[test]
    fn empty_patch() {
        assert!(QuestionPatch::new().is_empty());
        assert!(!QuestionPatch::new().remove_illustration().is_empty());
    }
}
