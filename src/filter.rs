//! Category and text filtering for the portfolio grid and the blog grid.
//!
//! The controller never touches the page. It turns the current
//! [`FilterState`] and its items into a [`RenderPlan`]; the frontend applies
//! the plan to the rendered grid.

use std::rc::Rc;

pub const ALL_CATEGORIES: &str = "all";
pub const STAGGER_STEP_MS: u32 = 100;

/// One filterable record: a portfolio entry or a blog post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub category: String,
    pub searchable_text: String,
    pub display_index: usize,
}

impl Item {
    pub fn new(category: &str, parts: &[&str], display_index: usize) -> Self {
        Self {
            category: category.to_string(),
            searchable_text: parts.join(" ").to_lowercase(),
            display_index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    fn matches_category(&self, item: &Item) -> bool {
        self.active_category == ALL_CATEGORIES || item.category == self.active_category
    }

    fn matches_search(&self, item: &Item) -> bool {
        self.search_term.is_empty() || item.searchable_text.contains(&self.search_term)
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.matches_category(item) && self.matches_search(item)
    }
}

pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// How the reveal delay of a visible item is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerPolicy {
    /// Delay grows with the item's rank among the items left visible.
    PositionAmongVisible,
    /// Delay grows with the item's position in the source order.
    AbsoluteIndex,
}

impl StaggerPolicy {
    fn delay_ms(self, visible_rank: usize, display_index: usize) -> u32 {
        let position = match self {
            Self::PositionAmongVisible => visible_rank,
            Self::AbsoluteIndex => display_index,
        };

        u32::try_from(position)
            .unwrap_or(u32::MAX)
            .saturating_mul(STAGGER_STEP_MS)
    }
}

/// A selectable filter button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterControl {
    pub category: String,
    pub label: String,
}

impl FilterControl {
    pub fn new(category: &str, label: &str) -> Self {
        Self {
            category: category.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDecision {
    pub index: usize,
    pub visible: bool,
    pub delay_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    pub decisions: Vec<ItemDecision>,
    pub visible_count: usize,
    pub show_empty: bool,
}

impl RenderPlan {
    #[cfg(test)]
    pub fn is_visible(&self, index: usize) -> bool {
        self.decisions
            .get(index)
            .map(|decision| decision.visible)
            .unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.decisions
            .iter()
            .filter(|decision| decision.visible)
            .map(|decision| decision.index)
            .collect()
    }
}

/// Filter state for one item collection plus the collection and its controls.
///
/// Items and controls are shared behind `Rc` so the controller can be cloned
/// cheaply on every state transition.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFilterController {
    items: Rc<[Item]>,
    controls: Rc<[FilterControl]>,
    state: FilterState,
    policy: StaggerPolicy,
}

impl ItemFilterController {
    pub fn new(items: Vec<Item>, controls: Vec<FilterControl>, policy: StaggerPolicy) -> Self {
        Self {
            items: items.into(),
            controls: controls.into(),
            state: FilterState::default(),
            policy,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_category(&mut self, category: &str) -> RenderPlan {
        tracing::debug!("filter category -> {category}");
        self.state.active_category = category.to_string();
        self.recompute()
    }

    pub fn set_search_term(&mut self, raw: &str) -> RenderPlan {
        self.state.search_term = normalize_search_term(raw);
        self.recompute()
    }

    pub fn clear_search(&mut self) -> RenderPlan {
        self.set_search_term("")
    }

    pub fn is_active(&self, control: &FilterControl) -> bool {
        control.category == self.state.active_category
    }

    #[cfg(test)]
    pub fn active_control(&self) -> Option<&FilterControl> {
        self.controls.iter().find(|control| self.is_active(control))
    }

    pub fn shows_clear_control(&self) -> bool {
        !self.state.search_term.is_empty()
    }

    pub fn recompute(&self) -> RenderPlan {
        let mut visible_count = 0;
        let decisions = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if !self.state.matches(item) {
                    return ItemDecision {
                        index,
                        visible: false,
                        delay_ms: None,
                    };
                }

                let delay_ms = self.policy.delay_ms(visible_count, item.display_index);
                visible_count += 1;
                ItemDecision {
                    index,
                    visible: true,
                    delay_ms: Some(delay_ms),
                }
            })
            .collect();

        RenderPlan {
            decisions,
            visible_count,
            show_empty: visible_count == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_fixture() -> ItemFilterController {
        let items = vec![
            Item::new("writing", &["Writing Tips", "", "craft"], 0),
            Item::new("travel", &["Travel Log", "", "journal"], 1),
        ];
        let controls = vec![
            FilterControl::new("all", "All"),
            FilterControl::new("writing", "Writing"),
            FilterControl::new("travel", "Travel"),
        ];
        ItemFilterController::new(items, controls, StaggerPolicy::AbsoluteIndex)
    }

    fn grid_fixture() -> Vec<Item> {
        vec![
            Item::new("fiction", &["The Lighthouse", "A short story", "sea, memory"], 0),
            Item::new("poetry", &["Salt Hymns", "Poems about the coast", "sea"], 1),
            Item::new("articles", &["On Revision", "Essay on editing drafts", "craft"], 2),
            Item::new("fiction", &["Night Train", "Novella excerpt", "travel"], 3),
            Item::new("editing", &["Manuscript Review", "Developmental edit", "craft, feedback"], 4),
        ]
    }

    fn grid_controls() -> Vec<FilterControl> {
        ["all", "fiction", "poetry", "articles", "editing", "missing"]
            .iter()
            .map(|category| FilterControl::new(category, category))
            .collect()
    }

    #[test]
    fn visibility_matches_predicate_for_every_category_and_term() {
        let items = grid_fixture();
        let terms = ["", "sea", "craft", "CRAFT  ", "nothing-matches", "night"];

        for control in grid_controls() {
            for term in terms {
                let mut controller = ItemFilterController::new(
                    items.clone(),
                    grid_controls(),
                    StaggerPolicy::PositionAmongVisible,
                );
                controller.set_category(&control.category);
                let plan = controller.set_search_term(term);
                let normalized = normalize_search_term(term);

                for (index, item) in items.iter().enumerate() {
                    let expected = (control.category == "all" || item.category == control.category)
                        && (normalized.is_empty() || item.searchable_text.contains(&normalized));
                    assert_eq!(
                        plan.is_visible(index),
                        expected,
                        "category={} term={term:?} item={index}",
                        control.category
                    );
                }

                let expected_count = plan.decisions.iter().filter(|d| d.visible).count();
                assert_eq!(plan.visible_count, expected_count);
                assert_eq!(plan.show_empty, expected_count == 0);
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::PositionAmongVisible,
        );
        controller.set_category("fiction");
        controller.set_search_term("train");

        assert_eq!(controller.recompute(), controller.recompute());
        assert_eq!(controller.recompute().visible_indices(), vec![3]);
    }

    #[test]
    fn empty_term_and_all_category_match_everything() {
        let controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::PositionAmongVisible,
        );

        let plan = controller.recompute();
        assert_eq!(plan.visible_count, 5);
        assert_eq!(plan.show_empty, false);
    }

    #[test]
    fn whitespace_only_term_disables_text_match() {
        let mut controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::PositionAmongVisible,
        );

        let plan = controller.set_search_term("   \t ");
        assert_eq!(controller.state().search_term, "");
        assert_eq!(plan.visible_count, 5);
        assert_eq!(controller.shows_clear_control(), false);
    }

    #[test]
    fn unknown_category_shows_empty_indicator() {
        let items = vec![Item::new("tech", &["a"], 0), Item::new("life", &["b"], 1)];
        let controls = vec![
            FilterControl::new("all", "All"),
            FilterControl::new("tech", "Tech"),
            FilterControl::new("life", "Life"),
            FilterControl::new("food", "Food"),
        ];
        let mut controller =
            ItemFilterController::new(items, controls, StaggerPolicy::AbsoluteIndex);

        let plan = controller.set_category("food");
        assert_eq!(plan.visible_count, 0);
        assert_eq!(plan.show_empty, true);
        assert_eq!(
            controller.active_control().map(|c| c.category.as_str()),
            Some("food")
        );
    }

    #[test]
    fn empty_collection_degrades_to_empty_indicator() {
        let controller = ItemFilterController::new(
            Vec::new(),
            vec![FilterControl::new("all", "All")],
            StaggerPolicy::AbsoluteIndex,
        );

        let plan = controller.recompute();
        assert!(plan.decisions.is_empty());
        assert_eq!(plan.show_empty, true);
    }

    #[test]
    fn category_filter_persists_across_search_changes() {
        let mut controller = blog_fixture();

        let plan = controller.set_category("writing");
        assert_eq!(plan.visible_indices(), vec![0]);

        let plan = controller.set_search_term("journal");
        assert_eq!(plan.visible_count, 0);
        assert_eq!(plan.show_empty, true);

        let plan = controller.set_category("all");
        assert_eq!(plan.visible_indices(), vec![1]);
    }

    #[test]
    fn exactly_one_control_is_active() {
        let mut controller = blog_fixture();
        controller.set_category("travel");

        let active: Vec<_> = controller
            .controls()
            .iter()
            .filter(|control| controller.is_active(control))
            .map(|control| control.category.clone())
            .collect();
        assert_eq!(active, vec!["travel".to_string()]);
        assert_eq!(controller.state().active_category, "travel");
    }

    #[test]
    fn search_term_is_trimmed_and_lowercased() {
        let mut controller = blog_fixture();

        let plan = controller.set_search_term("  TRAVEL ");
        assert_eq!(controller.state().search_term, "travel");
        assert_eq!(plan.visible_indices(), vec![1]);
        assert_eq!(controller.shows_clear_control(), true);

        let plan = controller.clear_search();
        assert_eq!(plan.visible_count, 2);
        assert_eq!(controller.shows_clear_control(), false);
    }

    #[test]
    fn position_policy_staggers_by_visible_rank() {
        let mut controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::PositionAmongVisible,
        );

        let plan = controller.set_category("fiction");
        let delays: Vec<_> = plan.decisions.iter().map(|d| d.delay_ms).collect();
        assert_eq!(delays, vec![Some(0), None, None, Some(100), None]);
    }

    #[test]
    fn absolute_policy_staggers_by_source_index() {
        let mut controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::AbsoluteIndex,
        );

        let plan = controller.set_category("fiction");
        let delays: Vec<_> = plan.decisions.iter().map(|d| d.delay_ms).collect();
        assert_eq!(delays, vec![Some(0), None, None, Some(300), None]);
    }

    #[test]
    fn visible_items_keep_document_order_with_non_decreasing_delay() {
        let mut controller = ItemFilterController::new(
            grid_fixture(),
            grid_controls(),
            StaggerPolicy::PositionAmongVisible,
        );

        let plan = controller.set_search_term("craft");
        assert_eq!(plan.visible_indices(), vec![2, 4]);

        let delays: Vec<u32> = plan.decisions.iter().filter_map(|d| d.delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
