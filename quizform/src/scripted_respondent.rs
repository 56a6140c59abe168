//! Scripted respondent for testing previews without user interaction.
//!
//! `ScriptedRespondent` replays a fixed list of gestures against a
//! [`PreviewSession`]. This is useful for testing forms end to end without a
//! preview surface.
//!
//! # Example
//!
//! ```rust
//! use quizform::{FormDocument, ScriptedRespondent, SequentialIds, VariantTag, run_preview};
//!
//! let mut ids = SequentialIds::new();
//! let form = FormDocument::create()
//!     .add_question_with(VariantTag::Categorize, &mut ids)
//!     .add_question_with(VariantTag::Cloze, &mut ids);
//!
//! let session = run_preview(
//!     &form,
//!     &ScriptedRespondent::new()
//!         .with_drop("q1", 0, 1)
//!         .with_blank("q2", 0, "missing"),
//! )
//! .unwrap();
//!
//! assert_eq!(session.categorize(&"q1".into()).unwrap().items_in(1), &[0]);
//! assert_eq!(session.cloze(&"q2".into()).unwrap().entry(0), "missing");
//! ```

use crate::{PreviewSession, QuestionId, Respondent, RespondentAction, VariantTag};

/// A respondent that replays pre-recorded gestures.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    script: Vec<(QuestionId, RespondentAction)>,
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Scripted question '{0}' is not in the form")]
    MissingQuestion(QuestionId),

    #[error("Scripted {action} gesture does not fit {actual} question '{id}'")]
    WrongKind {
        id: QuestionId,
        action: VariantTag,
        actual: VariantTag,
    },

    #[error("Gesture {step} for question '{id}' was rejected: {action:?}")]
    Rejected {
        step: usize,
        id: QuestionId,
        action: RespondentAction,
    },
}

impl ScriptedRespondent {
    /// Create an empty script.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Append a raw gesture.
    pub fn with_action(mut self, id: impl Into<QuestionId>, action: RespondentAction) -> Self {
        self.script.push((id.into(), action));
        self
    }

    /// Type `text` into a cloze blank.
    pub fn with_blank(
        self,
        id: impl Into<QuestionId>,
        blank: usize,
        text: impl Into<String>,
    ) -> Self {
        self.with_action(
            id,
            RespondentAction::FillBlank {
                blank,
                text: text.into(),
            },
        )
    }

    /// Drag a categorize item and drop it on a category.
    pub fn with_drop(self, id: impl Into<QuestionId>, item: usize, category: usize) -> Self {
        let id = id.into();
        self.with_action(id.clone(), RespondentAction::PickUp { item })
            .with_action(id, RespondentAction::DropOn { category })
    }

    /// Drag a categorize item and release it outside every category.
    pub fn with_cancelled_drag(self, id: impl Into<QuestionId>, item: usize) -> Self {
        let id = id.into();
        self.with_action(id.clone(), RespondentAction::PickUp { item })
            .with_action(id, RespondentAction::CancelDrag)
    }

    /// Take a categorize item back out of a category.
    pub fn with_removal(self, id: impl Into<QuestionId>, category: usize, item: usize) -> Self {
        self.with_action(id, RespondentAction::RemoveFromCategory { category, item })
    }

    /// Choose an option of a comprehension sub-question.
    pub fn with_selection(
        self,
        id: impl Into<QuestionId>,
        sub_question: usize,
        option: usize,
    ) -> Self {
        self.with_action(
            id,
            RespondentAction::Select {
                sub_question,
                option,
            },
        )
    }

    /// Get the number of scripted gestures.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Check if the script is empty.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptError;

    fn respond(&self, session: &mut PreviewSession) -> Result<(), Self::Error> {
        for (step, (id, action)) in self.script.iter().enumerate() {
            let Some(question) = session.form().question(id) else {
                return Err(ScriptError::MissingQuestion(id.clone()));
            };

            let actual = question.variant_tag();
            if action.tag() != actual {
                return Err(ScriptError::WrongKind {
                    id: id.clone(),
                    action: action.tag(),
                    actual,
                });
            }

            if !session.record(id, action.clone()) {
                return Err(ScriptError::Rejected {
                    step,
                    id: id.clone(),
                    action: action.clone(),
                });
            }
        }

        Ok(())
    }
}
