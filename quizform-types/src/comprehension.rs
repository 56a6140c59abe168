use serde::{Deserialize, Serialize};

use crate::PayloadError;

/// Letter shown in front of an option: `A`, `B`, ... and plain numbers past `Z`.
pub fn option_letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

/// One multiple-choice question attached to a reading passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
}

impl SubQuestion {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct_index: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_index,
        }
    }

    /// A blank sub-question with four lettered options.
    pub fn blank() -> Self {
        Self::new(
            "",
            (0..4).map(|i| format!("Option {}", option_letter(i))).collect(),
            0,
        )
    }

    pub fn is_valid_correct_index(&self) -> bool {
        self.correct_index < self.options.len()
    }

    fn validate(&self, position: usize) -> Result<(), PayloadError> {
        if self.options.is_empty() {
            return Err(PayloadError::NoOptions {
                sub_question: position,
            });
        }
        if !self.is_valid_correct_index() {
            return Err(PayloadError::CorrectIndexOutOfRange {
                sub_question: position,
                correct_index: self.correct_index,
                options: self.options.len(),
            });
        }
        Ok(())
    }
}

/// Payload of a reading comprehension question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensionPayload {
    pub passage: String,
    pub sub_questions: Vec<SubQuestion>,
}

impl ComprehensionPayload {
    pub fn new(passage: impl Into<String>, sub_questions: Vec<SubQuestion>) -> Self {
        Self {
            passage: passage.into(),
            sub_questions,
        }
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        self.sub_questions
            .iter()
            .enumerate()
            .try_for_each(|(position, sub)| sub.validate(position))
    }

    pub fn set_passage(&self, passage: impl Into<String>) -> Self {
        Self {
            passage: passage.into(),
            sub_questions: self.sub_questions.clone(),
        }
    }

    pub fn add_sub_question(&self) -> Self {
        let mut next = self.clone();
        next.sub_questions.push(SubQuestion::blank());
        next
    }

    pub fn remove_sub_question(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.sub_questions.len() {
            next.sub_questions.remove(index);
        }
        next
    }

    pub fn set_prompt(&self, index: usize, prompt: impl Into<String>) -> Self {
        self.edit(index, |sub| sub.prompt = prompt.into())
    }

    /// Append an option labelled with the next letter.
    pub fn add_option(&self, index: usize) -> Self {
        self.edit(index, |sub| {
            let label = format!("Option {}", option_letter(sub.options.len()));
            sub.options.push(label);
        })
    }

    pub fn set_option(&self, index: usize, option: usize, text: impl Into<String>) -> Self {
        self.edit(index, |sub| {
            if let Some(slot) = sub.options.get_mut(option) {
                *slot = text.into();
            }
        })
    }

    /// Remove an option, keeping `correct_index` pointing at a real option.
    ///
    /// Removing the correct option resets the answer to the first option.
    /// The last remaining option cannot be removed.
    pub fn remove_option(&self, index: usize, option: usize) -> Self {
        self.edit(index, |sub| {
            if option >= sub.options.len() || sub.options.len() == 1 {
                return;
            }
            sub.options.remove(option);
            if option == sub.correct_index {
                sub.correct_index = 0;
            } else if option < sub.correct_index {
                sub.correct_index -= 1;
            }
            if !sub.is_valid_correct_index() {
                sub.correct_index = 0;
            }
        })
    }

    /// Mark an option as correct; out-of-range options are ignored.
    pub fn set_correct(&self, index: usize, option: usize) -> Self {
        self.edit(index, |sub| {
            if option < sub.options.len() {
                sub.correct_index = option;
            }
        })
    }

    fn edit(&self, index: usize, change: impl FnOnce(&mut SubQuestion)) -> Self {
        let mut next = self.clone();
        if let Some(sub) = next.sub_questions.get_mut(index) {
            change(sub);
        }
        next
    }
}
