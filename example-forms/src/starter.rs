//! Forms built the way an author would: through the mutation engine.

use quizform::{
    ClozePayload, FormDocument, MetadataField, QuestionPatch, SequentialIds, VariantTag,
};

/// One question of every kind with default payloads, ids `q1`, `q2`, `q3`.
pub fn starter_form() -> FormDocument {
    let mut ids = SequentialIds::new();
    FormDocument::with_id("starter")
        .set_metadata(MetadataField::Title, "Untitled Form")
        .set_metadata(
            MetadataField::Description,
            "Create engaging forms with custom question types",
        )
        .add_question_with(VariantTag::Categorize, &mut ids)
        .add_question_with(VariantTag::Cloze, &mut ids)
        .add_question_with(VariantTag::Comprehension, &mut ids)
}

/// The starter form with a cloze whose text has three blanks but only one answer.
pub fn mismatched_cloze() -> FormDocument {
    starter_form().update_question(
        &"q2".into(),
        QuestionPatch::new().payload(ClozePayload::new(
            "[blank], [blank] and [blank]",
            vec!["one".into()],
        )),
    )
}
