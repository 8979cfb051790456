//! Free-text destination search.
//!
//! Queries and node fields go through the same [`normalize`] step before any
//! comparison. Each node is scored by the strongest [`MatchRule`] it satisfies;
//! nodes that satisfy none are left out of the result.

use std::fmt;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::graph::{CampusGraph, Category, Node};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Matching rules in descending order of strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Query equals the node id.
    ExactId,
    /// Query equals the node name.
    ExactName,
    /// Query is a prefix of the node name.
    NamePrefix,
    /// Query occurs inside the node name.
    NameSubstring,
    /// Query occurs inside the node description.
    Description,
    /// Query equals or occurs inside the category label.
    Category,
}

impl MatchRule {
    pub fn score(self) -> u32 {
        match self {
            MatchRule::ExactId | MatchRule::ExactName => 100,
            MatchRule::NamePrefix => 80,
            MatchRule::NameSubstring => 60,
            MatchRule::Description => 40,
            MatchRule::Category => 20,
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MatchRule::ExactId => "exact id",
            MatchRule::ExactName => "exact name",
            MatchRule::NamePrefix => "name prefix",
            MatchRule::NameSubstring => "name",
            MatchRule::Description => "description",
            MatchRule::Category => "category",
        };
        f.write_str(value)
    }
}

/// A node matched by a query together with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCandidate {
    pub node: Node,
    pub score: u32,
    pub rule: MatchRule,
}

/// Lower-case, strip diacritics, trim, and collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rank every node of `graph` against `query`.
///
/// Candidates are sorted by score, highest first; equal scores keep dataset
/// order. A blank query yields no candidates.
pub fn resolve(graph: &CampusGraph, query: &str) -> Vec<QueryCandidate> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<QueryCandidate> = graph
        .nodes()
        .iter()
        .filter_map(|node| {
            best_rule(node, &needle).map(|rule| QueryCandidate {
                node: node.clone(),
                score: rule.score(),
                rule,
            })
        })
        .collect();

    // Stable sort keeps dataset order among equal scores.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query = %needle,
        matches = candidates.len(),
        top_score = candidates.first().map(|c| c.score).unwrap_or(0),
        "resolved destination query"
    );

    candidates
}

/// Strongest rule `node` satisfies for an already normalized query.
pub fn best_rule(node: &Node, needle: &str) -> Option<MatchRule> {
    if needle.is_empty() {
        return None;
    }

    let name = normalize(&node.name);
    if normalize(&node.id) == needle {
        return Some(MatchRule::ExactId);
    }
    if name == needle {
        return Some(MatchRule::ExactName);
    }
    if name.starts_with(needle) {
        return Some(MatchRule::NamePrefix);
    }
    if name.contains(needle) {
        return Some(MatchRule::NameSubstring);
    }
    if normalize(&node.description).contains(needle) {
        return Some(MatchRule::Description);
    }
    if category_matches(node.category, needle) {
        return Some(MatchRule::Category);
    }
    None
}

fn category_matches(category: Category, needle: &str) -> bool {
    category.label().contains(needle)
}

/// Node names that look like `query`, most similar first.
///
/// Used to build "did you mean" hints when a query matches nothing.
pub fn suggestions(graph: &CampusGraph, query: &str, limit: usize) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Node)> = graph
        .nodes()
        .iter()
        .filter_map(|node| {
            let name = normalize(&node.name);
            let by_name = strsim::jaro_winkler(&needle, &name);
            let by_word = name
                .split(' ')
                .map(|word| strsim::jaro_winkler(&needle, word))
                .fold(0.0, f64::max);
            let similarity = by_name.max(by_word);
            (similarity >= SUGGESTION_THRESHOLD).then_some((similarity, node))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, node)| node.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    fn node(id: &str, name: &str, description: &str, category: Category) -> Node {
        Node {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            position: Position { x: 0.0, y: 0.0 },
        }
    }

    #[test]
    fn normalize_folds_case_whitespace_and_accents() {
        assert_eq!(normalize("  Café   Centrál \t"), "cafe central");
        assert_eq!(normalize("ÉCOLE"), "ecole");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn rules_rank_in_order() {
        let library = node("library", "Main Library", "Study hall.", Category::Academic);
        assert_eq!(best_rule(&library, "library"), Some(MatchRule::ExactId));
        assert_eq!(best_rule(&library, "main library"), Some(MatchRule::ExactName));
        assert_eq!(best_rule(&library, "main"), Some(MatchRule::NamePrefix));
        assert_eq!(best_rule(&library, "brar"), Some(MatchRule::NameSubstring));
        assert_eq!(best_rule(&library, "hall"), Some(MatchRule::Description));
        assert_eq!(best_rule(&library, "acad"), Some(MatchRule::Category));
        assert_eq!(best_rule(&library, "stadium"), None);
    }

    #[test]
    fn maximum_rule_wins_over_weaker_matches() {
        // Name prefix and description both match; the prefix score is kept.
        let gate = node("g1", "Gate North", "North gate of campus.", Category::Gate);
        let rule = best_rule(&gate, "gate").expect("matches");
        assert_eq!(rule, MatchRule::NamePrefix);
        assert_eq!(rule.score(), 80);
    }

    #[test]
    fn scores_match_published_values() {
        assert_eq!(MatchRule::ExactName.score(), 100);
        assert_eq!(MatchRule::NamePrefix.score(), 80);
        assert_eq!(MatchRule::NameSubstring.score(), 60);
        assert_eq!(MatchRule::Description.score(), 40);
        assert_eq!(MatchRule::Category.score(), 20);
    }
}
