use std::collections::BTreeMap;

use tracing::trace;

use crate::{CategorizePayload, ClozePayload, ComprehensionPayload, Payload, VariantTag};

/// A respondent's in-progress answer to one question.
///
/// One variant per question kind; each is created empty from the question's
/// payload when a preview session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Categorize(CategorizeBoard),
    Cloze(ClozeEntries),
    Comprehension(ComprehensionSelections),
}

impl Response {
    /// Empty response state shaped after `payload`.
    pub fn for_payload(payload: &Payload) -> Self {
        match payload {
            Payload::Categorize(categorize) => Self::Categorize(CategorizeBoard::new(categorize)),
            Payload::Cloze(cloze) => Self::Cloze(ClozeEntries::new(cloze)),
            Payload::Comprehension(comprehension) => {
                Self::Comprehension(ComprehensionSelections::new(comprehension))
            }
        }
    }

    /// The question kind this response belongs to.
    pub fn tag(&self) -> VariantTag {
        match self {
            Self::Categorize(_) => VariantTag::Categorize,
            Self::Cloze(_) => VariantTag::Cloze,
            Self::Comprehension(_) => VariantTag::Comprehension,
        }
    }
}

/// Free-text entries for the blanks of a cloze question, in blank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeEntries {
    blanks: usize,
    entries: Vec<String>,
}

impl ClozeEntries {
    pub fn new(payload: &ClozePayload) -> Self {
        Self {
            blanks: payload.blank_count(),
            entries: Vec::new(),
        }
    }

    /// Number of blanks that can be filled.
    pub fn blank_count(&self) -> usize {
        self.blanks
    }

    /// Text typed into blank `index`; empty if nothing was typed yet.
    pub fn entry(&self, index: usize) -> &str {
        self.entries.get(index).map_or("", String::as_str)
    }

    /// One entry per blank, untouched blanks as empty strings.
    pub fn entries(&self) -> Vec<&str> {
        (0..self.blanks).map(|i| self.entry(i)).collect()
    }

    /// Type into blank `index`. Returns `false` if there is no such blank.
    pub fn fill(&mut self, index: usize, text: impl Into<String>) -> bool {
        if index >= self.blanks {
            return false;
        }
        if self.entries.len() <= index {
            self.entries.resize(index + 1, String::new());
        }
        self.entries[index] = text.into();
        trace!(blank = index, "filled blank");
        true
    }
}

/// Transient state of a drag gesture on a categorize board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// An item has been picked up and not yet dropped.
    Dragging { item: usize },
}

/// Assignment of items to categories for one categorize question.
///
/// Items and categories are referenced by position in the payload, so
/// duplicate labels stay distinct. An item sits in at most one category;
/// anything not assigned is in the uncategorized pool, which is computed
/// rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizeBoard {
    items: usize,
    assignments: Vec<Vec<usize>>,
    drag: DragState,
}

impl CategorizeBoard {
    pub fn new(payload: &CategorizePayload) -> Self {
        Self {
            items: payload.items.len(),
            assignments: vec![Vec::new(); payload.categories.len()],
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Start dragging an item, categorized or not.
    ///
    /// Returns `false` and stays idle for an unknown item.
    pub fn pick_up(&mut self, item: usize) -> bool {
        if item >= self.items {
            return false;
        }
        self.drag = DragState::Dragging { item };
        trace!(item, "picked up item");
        true
    }

    /// Drop the held item into `category`.
    ///
    /// Dropping outside any valid category cancels the drag. Either way the
    /// board returns to idle. Returns `true` if an assignment was made.
    pub fn drop_on(&mut self, category: usize) -> bool {
        let DragState::Dragging { item } = std::mem::take(&mut self.drag) else {
            return false;
        };
        if category >= self.assignments.len() {
            trace!(item, category, "dropped outside any category");
            return false;
        }
        self.assign(item, category)
    }

    /// Abandon the current drag without changing any assignment.
    ///
    /// Returns `false` if no drag was in progress.
    pub fn cancel_drag(&mut self) -> bool {
        let was_dragging = matches!(self.drag, DragState::Dragging { .. });
        self.drag = DragState::Idle;
        was_dragging
    }

    /// Move `item` into `category`, taking it out of any other category.
    pub fn assign(&mut self, item: usize, category: usize) -> bool {
        if item >= self.items || category >= self.assignments.len() {
            return false;
        }
        self.unassign(item);
        self.assignments[category].push(item);
        trace!(item, category, "assigned item");
        true
    }

    /// Send `item` back to the uncategorized pool if it sits in `category`.
    pub fn remove_from_category(&mut self, category: usize, item: usize) -> bool {
        let Some(assigned) = self.assignments.get_mut(category) else {
            return false;
        };
        let before = assigned.len();
        assigned.retain(|&i| i != item);
        before != assigned.len()
    }

    /// Items dropped into `category`, in drop order.
    pub fn items_in(&self, category: usize) -> &[usize] {
        self.assignments.get(category).map_or(&[], Vec::as_slice)
    }

    /// Category currently holding `item`.
    pub fn category_of(&self, item: usize) -> Option<usize> {
        self.assignments
            .iter()
            .position(|assigned| assigned.contains(&item))
    }

    /// Items not assigned to any category, in payload order.
    pub fn uncategorized(&self) -> Vec<usize> {
        (0..self.items)
            .filter(|&item| self.category_of(item).is_none())
            .collect()
    }

    /// Labels of the items in the first category labelled `category`.
    pub fn item_labels_in<'a>(&self, payload: &'a CategorizePayload, category: &str) -> Vec<&'a str> {
        payload
            .category_index(category)
            .map(|index| labels(payload, self.items_in(index)))
            .unwrap_or_default()
    }

    /// Labels of the uncategorized items.
    pub fn uncategorized_labels<'a>(&self, payload: &'a CategorizePayload) -> Vec<&'a str> {
        labels(payload, &self.uncategorized())
    }

    fn unassign(&mut self, item: usize) {
        for assigned in &mut self.assignments {
            assigned.retain(|&i| i != item);
        }
    }
}

fn labels<'a>(payload: &'a CategorizePayload, items: &[usize]) -> Vec<&'a str> {
    items
        .iter()
        .filter_map(|&i| payload.items.get(i).map(String::as_str))
        .collect()
}

/// Selected option per sub-question of a comprehension question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensionSelections {
    option_counts: Vec<usize>,
    selected: BTreeMap<usize, usize>,
}

impl ComprehensionSelections {
    pub fn new(payload: &ComprehensionPayload) -> Self {
        Self {
            option_counts: payload
                .sub_questions
                .iter()
                .map(|sub| sub.options.len())
                .collect(),
            selected: BTreeMap::new(),
        }
    }

    /// Select `option` for `sub_question`, replacing any earlier selection.
    ///
    /// Returns `false` for an unknown sub-question or option.
    pub fn select(&mut self, sub_question: usize, option: usize) -> bool {
        match self.option_counts.get(sub_question) {
            Some(&count) if option < count => {
                self.selected.insert(sub_question, option);
                trace!(sub_question, option, "selected option");
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self, sub_question: usize) -> Option<usize> {
        self.selected.get(&sub_question).copied()
    }

    /// Number of sub-questions with a selection.
    pub fn answered(&self) -> usize {
        self.selected.len()
    }

    /// All selections as `(sub_question, option)` pairs, in sub-question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selected.iter().map(|(&sub, &option)| (sub, option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubQuestion;

    fn fruit_and_veg() -> CategorizePayload {
        CategorizePayload::new(
            vec!["Fruits".into(), "Veg".into()],
            vec!["Apple".into(), "Carrot".into()],
        )
    }

    #[test]
    fn cloze_entries_default_to_empty() {
        let mut entries = ClozeEntries::new(&ClozePayload::new("[blank] [blank] [blank]", vec![]));
        assert!(entries.fill(1, "middle"));
        assert_eq!(entries.entries(), vec!["", "middle", ""]);
        assert_eq!(entries.entry(7), "");
        assert!(!entries.fill(3, "too far"));
    }

    #[test]
    fn drop_moves_item_between_categories() {
        let payload = fruit_and_veg();
        let mut board = CategorizeBoard::new(&payload);

        assert!(board.pick_up(0));
        assert!(board.drop_on(0));
        assert!(board.pick_up(0));
        assert!(board.drop_on(1));

        assert_eq!(board.items_in(0), &[] as &[usize]);
        assert_eq!(board.items_in(1), &[0]);
        assert_eq!(board.uncategorized(), vec![1]);
        assert_eq!(board.drag_state(), DragState::Idle);
    }

    #[test]
    fn fruit_scenario() {
        let payload = fruit_and_veg();
        let mut board = CategorizeBoard::new(&payload);
        board.pick_up(payload.item_index("Apple").unwrap());
        board.drop_on(payload.category_index("Fruits").unwrap());

        assert_eq!(board.uncategorized_labels(&payload), vec!["Carrot"]);
        assert_eq!(board.item_labels_in(&payload, "Fruits"), vec!["Apple"]);
        assert!(board.item_labels_in(&payload, "Veg").is_empty());
    }

    #[test]
    fn cancelled_drag_changes_nothing() {
        let payload = fruit_and_veg();
        let mut board = CategorizeBoard::new(&payload);
        board.pick_up(1);
        assert_eq!(board.drag_state(), DragState::Dragging { item: 1 });
        assert!(board.cancel_drag());
        assert_eq!(board.drag_state(), DragState::Idle);
        assert!(!board.cancel_drag());
        assert!(!board.drop_on(0));
        assert_eq!(board.uncategorized(), vec![0, 1]);
    }

    #[test]
    fn drop_outside_categories_cancels() {
        let payload = fruit_and_veg();
        let mut board = CategorizeBoard::new(&payload);
        board.assign(0, 0);
        board.pick_up(0);
        assert!(!board.drop_on(5));
        assert_eq!(board.drag_state(), DragState::Idle);
        assert_eq!(board.category_of(0), Some(0));
    }

    #[test]
    fn unknown_item_is_not_picked_up() {
        let mut board = CategorizeBoard::new(&fruit_and_veg());
        assert!(!board.pick_up(2));
        assert_eq!(board.drag_state(), DragState::Idle);
    }

    #[test]
    fn removing_returns_item_to_pool() {
        let mut board = CategorizeBoard::new(&fruit_and_veg());
        board.assign(1, 1);
        assert!(!board.remove_from_category(0, 1));
        assert!(board.remove_from_category(1, 1));
        assert_eq!(board.uncategorized(), vec![0, 1]);
    }

    #[test]
    fn duplicate_labels_stay_distinct() {
        let payload = CategorizePayload::new(
            vec!["A".into()],
            vec!["Same".into(), "Same".into()],
        );
        let mut board = CategorizeBoard::new(&payload);
        board.assign(1, 0);
        assert_eq!(board.uncategorized(), vec![0]);
        assert_eq!(board.uncategorized_labels(&payload), vec!["Same"]);
    }

    #[test]
    fn reselecting_overwrites() {
        let payload = ComprehensionPayload::new(
            "p",
            vec![SubQuestion::new("q", vec!["a".into(), "b".into(), "c".into()], 0)],
        );
        let mut selections = ComprehensionSelections::new(&payload);
        assert!(selections.select(0, 2));
        assert!(selections.select(0, 1));
        assert_eq!(selections.selected(0), Some(1));
        assert_eq!(selections.answered(), 1);
        assert_eq!(selections.iter().collect::<Vec<_>>(), vec![(0, 1)]);

        assert!(!selections.select(0, 3));
        assert!(!selections.select(1, 0));
        assert_eq!(selections.selected(0), Some(1));
    }
}
