use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CategorizePayload, ClozePayload, ComprehensionPayload, Diagnostic, PayloadError, SubQuestion,
};

/// The kind of a question. Fixed when the question is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantTag {
    /// Drag items into categories.
    Categorize,

    /// Fill in the blanks.
    Cloze,

    /// Reading passage followed by multiple-choice questions.
    Comprehension,
}

impl VariantTag {
    pub const ALL: [VariantTag; 3] = [Self::Categorize, Self::Cloze, Self::Comprehension];

    pub fn name(self) -> &'static str {
        match self {
            Self::Categorize => "Categorize",
            Self::Cloze => "Cloze",
            Self::Comprehension => "Comprehension",
        }
    }

    /// Title given to freshly added questions of this kind.
    pub fn default_title(self) -> String {
        format!("New {} Question", self.name())
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant-specific data carried by a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Categorize(CategorizePayload),
    Cloze(ClozePayload),
    Comprehension(ComprehensionPayload),
}

impl Payload {
    /// Seed payload for a new question of the given kind.
    ///
    /// Always satisfies [`Payload::validate`]; the cloze seed has as many
    /// answers as blanks.
    pub fn default_for(tag: VariantTag) -> Self {
        match tag {
            VariantTag::Categorize => Self::Categorize(CategorizePayload::new(
                vec!["Category 1".into(), "Category 2".into()],
                vec!["Item 1".into(), "Item 2".into(), "Item 3".into()],
            )),
            VariantTag::Cloze => Self::Cloze(ClozePayload::new(
                "This is a sample text with [blank] spaces that need to be [blank].",
                vec!["missing".into(), "completed".into()],
            )),
            VariantTag::Comprehension => Self::Comprehension(ComprehensionPayload::new(
                "Read the following passage and answer the questions below.",
                vec![SubQuestion::new(
                    "What is the main idea?",
                    vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    0,
                )],
            )),
        }
    }

    pub fn tag(&self) -> VariantTag {
        match self {
            Self::Categorize(_) => VariantTag::Categorize,
            Self::Cloze(_) => VariantTag::Cloze,
            Self::Comprehension(_) => VariantTag::Comprehension,
        }
    }

    /// Check the structural invariants of the payload.
    ///
    /// A cloze blank/answer mismatch is advisory and does not fail here; see
    /// [`Payload::diagnostic`].
    pub fn validate(&self) -> Result<(), PayloadError> {
        match self {
            Self::Categorize(categorize) => categorize.validate(),
            Self::Cloze(_) => Ok(()),
            Self::Comprehension(comprehension) => comprehension.validate(),
        }
    }

    /// Advisory diagnostic, if any. Recomputed on every call.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Self::Cloze(cloze) => cloze.diagnostic(),
            Self::Categorize(_) | Self::Comprehension(_) => None,
        }
    }

    /// Derived counts for list views.
    pub fn summary(&self) -> PayloadSummary {
        match self {
            Self::Categorize(categorize) => PayloadSummary::Categorize {
                categories: categorize.categories.len(),
                items: categorize.items.len(),
            },
            Self::Cloze(cloze) => PayloadSummary::Cloze {
                blanks: cloze.blank_count(),
                answers: cloze.answers.len(),
                consistent: cloze.is_consistent(),
            },
            Self::Comprehension(comprehension) => PayloadSummary::Comprehension {
                sub_questions: comprehension.sub_questions.len(),
                options: comprehension
                    .sub_questions
                    .iter()
                    .map(|sub| sub.options.len())
                    .sum(),
            },
        }
    }

    pub fn as_categorize(&self) -> Option<&CategorizePayload> {
        match self {
            Self::Categorize(categorize) => Some(categorize),
            _ => None,
        }
    }

    pub fn as_cloze(&self) -> Option<&ClozePayload> {
        match self {
            Self::Cloze(cloze) => Some(cloze),
            _ => None,
        }
    }

    pub fn as_comprehension(&self) -> Option<&ComprehensionPayload> {
        match self {
            Self::Comprehension(comprehension) => Some(comprehension),
            _ => None,
        }
    }
}

impl From<CategorizePayload> for Payload {
    fn from(payload: CategorizePayload) -> Self {
        Self::Categorize(payload)
    }
}

impl From<ClozePayload> for Payload {
    fn from(payload: ClozePayload) -> Self {
        Self::Cloze(payload)
    }
}

impl From<ComprehensionPayload> for Payload {
    fn from(payload: ComprehensionPayload) -> Self {
        Self::Comprehension(payload)
    }
}

/// Counts derived from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSummary {
    Categorize {
        categories: usize,
        items: usize,
    },
    Cloze {
        blanks: usize,
        answers: usize,
        consistent: bool,
    },
    Comprehension {
        sub_questions: usize,
        /// Total options across all sub-questions.
        options: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_tagged() {
        for tag in VariantTag::ALL {
            let payload = Payload::default_for(tag);
            assert_eq!(payload.tag(), tag);
            assert!(payload.validate().is_ok());
            assert!(payload.diagnostic().is_none());
        }
    }

    #[test]
    fn default_shapes() {
        assert_eq!(
            Payload::default_for(VariantTag::Categorize).summary(),
            PayloadSummary::Categorize {
                categories: 2,
                items: 3
            }
        );
        assert_eq!(
            Payload::default_for(VariantTag::Cloze).summary(),
            PayloadSummary::Cloze {
                blanks: 2,
                answers: 2,
                consistent: true
            }
        );
        assert_eq!(
            Payload::default_for(VariantTag::Comprehension).summary(),
            PayloadSummary::Comprehension {
                sub_questions: 1,
                options: 4
            }
        );
    }

    #[test]
    fn cloze_mismatch_is_advisory_only() {
        let payload = Payload::from(ClozePayload::new("[blank]", vec![]));
        assert!(payload.validate().is_ok());
        assert!(payload.diagnostic().is_some());
    }

    #[test]
    fn default_titles() {
        assert_eq!(VariantTag::Cloze.default_title(), "New Cloze Question");
    }

    #[test]
    fn serializes_with_type_and_data() {
        let json = serde_json::to_value(Payload::default_for(VariantTag::Cloze)).unwrap();
        assert_eq!(json["type"], "cloze");
        assert_eq!(json["data"]["answers"][1], "completed");
    }
}
