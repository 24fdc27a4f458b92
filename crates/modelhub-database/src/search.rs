//! Text search over model name, description, and tags.
//!
//! Both backends share this module so that matching and ranking do not
//! depend on the store. A model matches when any query term equals one of
//! its tokens. Its score is the number of occurrences of the distinct query
//! terms across all three fields, each field weighted equally; ties go to
//! the newer model.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use modelhub_entity::model::Model;

/// Split text into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Distinct, sorted tokens of the indexed fields of a model.
pub fn search_terms(name: &str, description: Option<&str>, tags: &[String]) -> Vec<String> {
    let mut terms = BTreeSet::new();
    terms.extend(tokenize(name));
    if let Some(description) = description {
        terms.extend(tokenize(description));
    }
    for tag in tags {
        terms.extend(tokenize(tag));
    }
    terms.into_iter().collect()
}

/// Index terms for a stored model.
pub fn model_terms(model: &Model) -> Vec<String> {
    search_terms(&model.name, model.description.as_deref(), &model.tags)
}

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Parse free text into distinct query terms.
    pub fn parse(text: &str) -> Self {
        let terms: BTreeSet<String> = tokenize(text).collect();
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Distinct query terms, sorted.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether the query has no usable term. Such a query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Relevance of `model`; zero means no match.
    pub fn score(&self, model: &Model) -> usize {
        let mut tokens: Vec<String> = tokenize(&model.name).collect();
        if let Some(description) = &model.description {
            tokens.extend(tokenize(description));
        }
        for tag in &model.tags {
            tokens.extend(tokenize(tag));
        }

        tokens
            .iter()
            .filter(|token| self.terms.binary_search(token).is_ok())
            .count()
    }

    /// Keep matching models, most relevant first, newest first on ties.
    pub fn rank(&self, models: Vec<Model>) -> Vec<Model> {
        let mut scored: Vec<(usize, Model)> = models
            .into_iter()
            .map(|m| (self.score(&m), m))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by_key(|(score, m)| (Reverse(*score), Reverse(m.created_at), Reverse(m.id)));
        scored.into_iter().map(|(_, m)| m).collect()
    }
}
