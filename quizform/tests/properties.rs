//! Property tests for the mutation engine and preview state.

use std::collections::BTreeSet;

use proptest::prelude::*;
use quizform::{
    CategorizeBoard, CategorizePayload, ClozePayload, FormDocument, Payload, QuestionId,
    QuestionPatch, SequentialIds, VariantTag, blank_count,
};

fn variant_tag() -> impl Strategy<Value = VariantTag> {
    prop_oneof![
        Just(VariantTag::Categorize),
        Just(VariantTag::Cloze),
        Just(VariantTag::Comprehension),
    ]
}

fn document() -> impl Strategy<Value = FormDocument> {
    prop::collection::vec(variant_tag(), 0..8).prop_map(|tags| {
        let mut ids = SequentialIds::new();
        tags.into_iter()
            .fold(FormDocument::with_id("prop"), |doc, tag| {
                doc.add_question_with(tag, &mut ids)
            })
    })
}

fn ids(doc: &FormDocument) -> Vec<QuestionId> {
    doc.questions().iter().map(|q| q.id().clone()).collect()
}

proptest! {
    #[test]
    fn add_grows_by_one_with_valid_payload(doc in document(), tag in variant_tag()) {
        let grown = doc.add_question(tag);
        prop_assert_eq!(grown.len(), doc.len() + 1);

        let added = grown.questions().last().unwrap();
        prop_assert_eq!(added.variant_tag(), tag);
        prop_assert!(added.payload().validate().is_ok());
        prop_assert!(doc.question(added.id()).is_none());
    }

    #[test]
    fn add_then_delete_restores(doc in document(), tag in variant_tag()) {
        let grown = doc.add_question(tag);
        let new_id = grown.questions().last().unwrap().id().clone();
        prop_assert_eq!(grown.delete_question(&new_id), doc);
    }

    #[test]
    fn reorder_is_a_permutation(doc in document(), from in 0usize..10, to in 0usize..10) {
        let moved = doc.reorder_questions(from, to);
        let before: BTreeSet<_> = ids(&doc).into_iter().collect();
        let after: BTreeSet<_> = ids(&moved).into_iter().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(moved.len(), doc.len());

        if from >= doc.len() || to >= doc.len() {
            prop_assert_eq!(&moved, &doc);
        }
    }

    #[test]
    fn reorder_back_restores(doc in document(), from in 0usize..8, to in 0usize..8) {
        prop_assert_eq!(doc.reorder_questions(from, to).reorder_questions(to, from), doc);
    }

    #[test]
    fn unknown_ids_are_identity(doc in document(), title in ".*") {
        let stale = QuestionId::new("not-in-the-document");
        prop_assert_eq!(&doc.update_question(&stale, QuestionPatch::new().title(title)), &doc);
        prop_assert_eq!(&doc.delete_question(&stale), &doc);
    }

    #[test]
    fn blank_count_matches_inserted_markers(
        parts in prop::collection::vec("[a-z ]{0,6}", 1..6),
    ) {
        let text = parts.join("[blank]");
        prop_assert_eq!(blank_count(&text), parts.len() - 1);

        let answers = vec![String::new(); parts.len() - 1];
        prop_assert!(ClozePayload::new(text, answers).is_consistent());
    }

    #[test]
    fn item_lives_in_at_most_one_category(
        drops in prop::collection::vec((0usize..4, 0usize..4), 0..20),
    ) {
        let payload = CategorizePayload::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec!["w".into(), "x".into(), "y".into()],
        );
        let mut board = CategorizeBoard::new(&payload);
        for (item, category) in drops {
            board.pick_up(item);
            board.drop_on(category);
        }

        let mut seen: Vec<usize> = (0..3).flat_map(|c| board.items_in(c).to_vec()).collect();
        seen.extend(board.uncategorized());
        seen.sort_unstable();
        prop_assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn default_payloads_are_valid(tag in variant_tag()) {
        let payload = Payload::default_for(tag);
        prop_assert!(payload.validate().is_ok());
        prop_assert!(payload.diagnostic().is_none());
    }
}
