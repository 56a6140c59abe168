//! A mixed form: a short passage with two sub-questions followed by a cloze.

use quizform::{ClozePayload, ComprehensionPayload, FormDocument, Question, SubQuestion};

const PASSAGE: &str = "The tortoise and the hare agreed to race. The hare ran ahead, \
grew bored and fell asleep under a tree. The tortoise kept walking and crossed \
the finish line first.";

pub fn reading_quiz() -> anyhow::Result<FormDocument> {
    let comprehension = Question::from_parts(
        "passage",
        "The race",
        None,
        ComprehensionPayload::new(
            PASSAGE,
            vec![
                SubQuestion::new(
                    "Who won the race?",
                    vec!["The hare".into(), "The tortoise".into(), "Nobody".into()],
                    1,
                ),
                SubQuestion::new(
                    "Why did the hare lose?",
                    vec![
                        "It fell asleep".into(),
                        "It got lost".into(),
                        "It was too slow".into(),
                        "It gave up".into(),
                    ],
                    0,
                ),
            ],
        )
        .into(),
    )?;

    let moral = Question::from_parts(
        "moral",
        "The moral",
        None,
        ClozePayload::new(
            "Slow and [blank] wins the [blank].",
            vec!["steady".into(), "race".into()],
        )
        .into(),
    )?;

    Ok(FormDocument::from_questions("reading-quiz", vec![comprehension, moral])?
        .with_title("Fables")
        .with_description("Read carefully, then answer.")
        .with_header_illustration("https://example.com/fables.png"))
}
