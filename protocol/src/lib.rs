//! Wire types of the trivia HTTP API.
//!
//! `GET {base}/categories?count=N&offset=O` answers with a list of [`CategorySummary`], and
//! `GET {base}/category?id=ID` with a single [`CategoryDetail`]. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

pub use text::plain_text;

mod text;

pub const CATEGORIES_PATH: &str = "categories";
pub const CATEGORY_PATH: &str = "category";

/// One entry of the category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "clues_count", alias = "clue_count", default)]
    pub clue_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

/// Upstream clue; the API occasionally sends `null` for either text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ClueRecord {
    /// Cleaned up question and answer, or `None` when either one is blank.
    pub fn texts(&self) -> Option<(String, String)> {
        let question = plain_text(self.question.as_deref()?);
        let answer = plain_text(self.answer.as_deref()?);
        (!question.is_empty() && !answer.is_empty()).then_some((question, answer))
    }
}

impl CategoryDetail {
    pub fn plain_title(&self) -> String {
        plain_text(&self.title)
    }

    /// Usable clues in upstream order, blank ones dropped.
    pub fn usable_clues(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.clues.iter().filter_map(ClueRecord::texts)
    }
}
