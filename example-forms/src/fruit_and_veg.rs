//! A single sorting question: fruits versus vegetables.

use quizform::{CategorizePayload, FormDocument, Question};

pub const FRUITS: usize = 0;
pub const VEG: usize = 1;

/// Categories `Fruits` and `Veg`, items `Apple` and `Carrot`.
pub fn fruit_and_veg() -> anyhow::Result<FormDocument> {
    let sorting = Question::from_parts(
        "sort",
        "Sort the produce",
        Some("https://example.com/produce.jpg".into()),
        CategorizePayload::new(
            vec!["Fruits".into(), "Veg".into()],
            vec!["Apple".into(), "Carrot".into()],
        )
        .into(),
    )?;

    Ok(FormDocument::from_questions("fruit-and-veg", vec![sorting])?
        .with_title("Groceries")
        .with_description("Put every item where it belongs."))
}
