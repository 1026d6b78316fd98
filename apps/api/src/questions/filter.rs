//! Question Filter — search text AND role AND difficulty AND category.
//!
//! Each facet is a `Selector`: `All` passes everything, `Only(v)` requires a
//! match. The wire value `"all"` (or an absent parameter) means `All`.

use std::str::FromStr;

use crate::questions::models::{BankQuestion, Category, Difficulty};

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: FromStr> Selector<T> {
    pub fn parse(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Ok(Selector::All),
            Some(value) => value.parse().map(Selector::Only),
        }
    }
}

impl Selector<String> {
    /// Free-form labels (roles) never fail to parse; an unknown one just matches nothing.
    pub fn from_label(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Selector::All,
            Some(value) => Selector::Only(value.to_string()),
        }
    }
}

impl<T> Selector<T> {
    pub fn allows(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(value) => pred(value),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub query: String,
    pub role: Selector<String>,
    pub difficulty: Selector<Difficulty>,
    pub category: Selector<Category>,
}

impl QuestionFilter {
    pub fn matches(&self, question: &BankQuestion) -> bool {
        question
            .question
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            && self.role.allows(|role| question.has_role(role))
            && self.difficulty.allows(|d| *d == question.difficulty)
            && self.category.allows(|c| *c == question.category)
    }
}

/// Returns the questions passing `filter`, in their original order.
/// An empty result is a normal outcome.
pub fn filter_questions(questions: &[BankQuestion], filter: &QuestionFilter) -> Vec<BankQuestion> {
    questions
        .iter()
        .filter(|q| filter.matches(q))
        .cloned()
        .collect()
}
