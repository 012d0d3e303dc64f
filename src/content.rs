//! Page content embedded at build time.

use crate::filter::{FilterControl, Item, ItemFilterController, StaggerPolicy};
use serde::Deserialize;
use thiserror::Error;

const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");
const DEFAULT_TYPING_WORDS: [&str; 3] = ["Writer", "Editor", "Storyteller"];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{collection} item `{id}` uses category `{category}` with no filter button")]
    UnknownCategory {
        collection: &'static str,
        id: String,
        category: String,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FilterButton {
    pub category: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub details: String,
}

impl PortfolioEntry {
    pub fn to_item(&self, index: usize) -> Item {
        let tags = self.tags.join(" ");
        Item::new(
            &self.category,
            &[self.title.as_str(), self.description.as_str(), tags.as_str()],
            index,
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub date: String,
    pub read_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn to_item(&self, index: usize) -> Item {
        let tags = self.tags.join(" ");
        Item::new(
            &self.category,
            &[self.title.as_str(), self.excerpt.as_str(), tags.as_str()],
            index,
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SiteContent {
    #[serde(default)]
    pub typing_words: Vec<String>,
    #[serde(default)]
    pub portfolio_filters: Vec<FilterButton>,
    #[serde(default)]
    pub blog_filters: Vec<FilterButton>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioEntry>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_CONTENT_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.check_categories()?;
        Ok(content)
    }

    fn check_categories(&self) -> Result<(), ContentError> {
        let has_button = |buttons: &[FilterButton], category: &str| {
            buttons.iter().any(|button| button.category == category)
        };

        if let Some(entry) = self
            .portfolio
            .iter()
            .find(|entry| !has_button(&self.portfolio_filters, &entry.category))
        {
            return Err(ContentError::UnknownCategory {
                collection: "portfolio",
                id: entry.id.clone(),
                category: entry.category.clone(),
            });
        }

        if let Some(post) = self
            .posts
            .iter()
            .find(|post| !has_button(&self.blog_filters, &post.category))
        {
            return Err(ContentError::UnknownCategory {
                collection: "blog",
                id: post.id.clone(),
                category: post.category.clone(),
            });
        }

        Ok(())
    }

    pub fn typing_words(&self) -> Vec<String> {
        if self.typing_words.is_empty() {
            DEFAULT_TYPING_WORDS.iter().map(ToString::to_string).collect()
        } else {
            self.typing_words.clone()
        }
    }

    pub fn portfolio_controller(&self) -> ItemFilterController {
        let items = self
            .portfolio
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_item(index))
            .collect();

        ItemFilterController::new(
            items,
            to_controls(&self.portfolio_filters),
            StaggerPolicy::PositionAmongVisible,
        )
    }

    pub fn blog_controller(&self) -> ItemFilterController {
        let items = self
            .posts
            .iter()
            .enumerate()
            .map(|(index, post)| post.to_item(index))
            .collect();

        ItemFilterController::new(
            items,
            to_controls(&self.blog_filters),
            StaggerPolicy::AbsoluteIndex,
        )
    }
}

fn to_controls(buttons: &[FilterButton]) -> Vec<FilterControl> {
    buttons
        .iter()
        .map(|button| FilterControl::new(&button.category, &button.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content should parse");

        assert!(!content.portfolio.is_empty());
        assert!(!content.posts.is_empty());
        assert!(!content.faq.is_empty());
        assert_eq!(content.portfolio_filters[0].category, "all");
        assert_eq!(content.blog_filters[0].category, "all");
    }

    #[test]
    fn searchable_text_covers_title_excerpt_and_tags() {
        let post = BlogPost {
            id: "tips".to_string(),
            title: "Writing Tips".to_string(),
            category: "writing".to_string(),
            excerpt: "Small HABITS".to_string(),
            date: "2024-01-01".to_string(),
            read_minutes: 3,
            tags: vec!["Craft".to_string(), "drafting".to_string()],
        };

        let item = post.to_item(4);
        assert_eq!(item.searchable_text, "writing tips small habits craft drafting");
        assert_eq!(item.display_index, 4);
        assert_eq!(item.category, "writing");
    }

    #[test]
    fn category_without_button_is_rejected() {
        let raw = r#"{
            "blog_filters": [{ "category": "all", "label": "All" }],
            "posts": [{
                "id": "p1", "title": "T", "category": "food",
                "excerpt": "E", "date": "2024-01-01", "read_minutes": 1
            }]
        }"#;

        let error = SiteContent::from_json(raw).expect_err("food has no filter button");
        assert!(matches!(error, ContentError::UnknownCategory { collection: "blog", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = SiteContent::from_json("{ not json").expect_err("should fail");
        assert!(matches!(error, ContentError::Parse(_)));
    }

    #[test]
    fn missing_typing_words_fall_back_to_defaults() {
        let content = SiteContent::default();
        assert_eq!(content.typing_words(), vec!["Writer", "Editor", "Storyteller"]);
    }

    #[test]
    fn embedded_blog_controller_finds_journal_posts() {
        let content = SiteContent::embedded().expect("embedded content should parse");
        let mut controller = content.blog_controller();

        let plan = controller.set_search_term("journal");
        let ids: Vec<_> = plan
            .visible_indices()
            .into_iter()
            .map(|index| content.posts[index].id.as_str())
            .collect();
        assert_eq!(ids, vec!["travel-log", "morning-pages", "bookshops"]);
    }
}
