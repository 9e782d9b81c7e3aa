//! # Search: Term Scoring and Relevance Order
//!
//! A query is a comma-separated list of terms. Matching is case-insensitive: terms and
//! fields are both uppercased before comparison.
//!
//! ## Scoring
//!
//! For every term, each enabled field adds one point when it matches:
//!
//! | Field | Match rule |
//! |-------|------------|
//! | title | term is a substring of the title |
//! | tags  | term equals one of the comma-split, trimmed tags (exact, not substring) |
//! | code  | term is a substring of the code or of any supplement's code |
//! | notes | term is a substring of the notes or of any supplement's notes |
//!
//! Points add up across terms and fields, so a snippet matching one term in two fields
//! scores the same as one matching two terms in one field.
//!
//! ## Two Kinds of Empty
//!
//! The *raw* query string and the *term list* are checked separately:
//!
//! - Raw query `""`: every snippet is shown and the default cascade order is restored.
//! - Raw query `" , "`: the term list is empty so nothing scores, but the query is not
//!   empty, so every snippet ends up hidden.

use crate::model::{SearchParameters, Snippet};
use crate::ordering;
use std::cmp::Ordering;

/// Summary of one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Snippets left with `showing = true`.
    pub showing: usize,
    pub terms: usize,
}

/// Trims, uppercases and splits the query on `,`. Empty terms are dropped.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_uppercase()
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(String::from)
        .collect()
}

pub fn score(snippet: &Snippet, terms: &[String], params: &SearchParameters) -> u32 {
    let title = snippet.title.to_uppercase();
    let tags: Vec<String> = snippet
        .tags
        .to_uppercase()
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect();
    let code: Vec<String> = std::iter::once(&snippet.code)
        .chain(snippet.supplements.iter().map(|s| &s.code))
        .map(|text| text.to_uppercase())
        .collect();
    let notes: Vec<String> = std::iter::once(&snippet.notes)
        .chain(snippet.supplements.iter().map(|s| &s.notes))
        .map(|text| text.to_uppercase())
        .collect();

    let mut total = 0;
    for term in terms {
        let term = term.as_str();
        if params.title && title.contains(term) {
            total += 1;
        }
        if params.tags && tags.iter().any(|tag| tag == term) {
            total += 1;
        }
        if params.code && code.iter().any(|text| text.contains(term)) {
            total += 1;
        }
        if params.notes && notes.iter().any(|text| text.contains(term)) {
            total += 1;
        }
    }
    total
}

/// Recomputes `showing` for every snippet and reorders the collection in place.
pub fn rank(snippets: &mut Vec<Snippet>, params: &SearchParameters) -> SearchOutcome {
    let terms = tokenize(&params.query);
    let query_empty = params.query.is_empty();

    let mut scored: Vec<(u32, Snippet)> = std::mem::take(snippets)
        .into_iter()
        .map(|mut snippet| {
            let points = score(&snippet, &terms, params);
            snippet.showing = points > 0 || query_empty;
            (points, snippet)
        })
        .collect();

    if query_empty {
        *snippets = scored.into_iter().map(|(_, snippet)| snippet).collect();
        ordering::sort_default(snippets);
    } else {
        scored.sort_by(by_relevance);
        *snippets = scored.into_iter().map(|(_, snippet)| snippet).collect();
    }

    SearchOutcome {
        showing: snippets.iter().filter(|s| s.showing).count(),
        terms: terms.len(),
    }
}

fn by_relevance((score_a, a): &(u32, Snippet), (score_b, b): &(u32, Snippet)) -> Ordering {
    if a.showing && b.showing {
        score_b.cmp(score_a)
    } else {
        b.showing.cmp(&a.showing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Supplement;

    fn only(query: &str, field: &str) -> SearchParameters {
        SearchParameters {
            query: query.to_string(),
            title: field == "title",
            tags: field == "tags",
            code: field == "code",
            notes: field == "notes",
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  foo , Bar,,baz  "), vec!["FOO", "BAR", "BAZ"]);
        assert!(tokenize(" , ,").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_title_substring_case_insensitive() {
        let snippet = Snippet::new("Parse JSON quickly", "");
        assert_eq!(score(&snippet, &tokenize("json"), &only("json", "title")), 1);
        assert_eq!(score(&snippet, &tokenize("xml"), &only("xml", "title")), 0);
    }

    #[test]
    fn test_tags_require_exact_match() {
        let snippet = Snippet::new("T", "").with_tags("rust, async-io ");
        let params = only("", "tags");
        assert_eq!(score(&snippet, &tokenize("async-io"), &params), 1);
        assert_eq!(score(&snippet, &tokenize("async"), &params), 0);
        assert_eq!(score(&snippet, &tokenize("RUST"), &params), 1);
    }

    #[test]
    fn test_supplements_count_for_code_and_notes() {
        let snippet = Snippet::new("T", "main code")
            .with_notes("main notes")
            .with_supplement(Supplement::new("helper()", "see docs"));
        assert_eq!(score(&snippet, &tokenize("helper"), &only("", "code")), 1);
        assert_eq!(score(&snippet, &tokenize("docs"), &only("", "notes")), 1);
        assert_eq!(score(&snippet, &tokenize("docs"), &only("", "code")), 0);
    }

    #[test]
    fn test_scores_add_across_terms_and_fields() {
        let snippet = Snippet::new("foo bar", "foo()").with_tags("foo");
        let params = SearchParameters::all("foo, bar");
        // foo: title + tags + code, bar: title
        assert_eq!(score(&snippet, &tokenize(&params.query), &params), 4);
    }

    #[test]
    fn test_rank_orders_by_score() {
        let mut snippets = vec![
            Snippet::new("one match", "x"),
            Snippet::new("nothing", ""),
            Snippet::new("two match", "match"),
        ];
        let params = SearchParameters::all("match");
        let outcome = rank(&mut snippets, &params);

        assert_eq!(outcome.showing, 2);
        assert_eq!(snippets[0].title, "two match");
        assert_eq!(snippets[1].title, "one match");
        assert_eq!(snippets[2].title, "nothing");
        assert!(!snippets[2].showing);
    }

    #[test]
    fn test_empty_query_shows_all_in_cascade_order() {
        let mut hidden = Snippet::new("b", "").with_timestamp(1);
        hidden.showing = false;
        let mut snippets = vec![hidden, Snippet::new("a", "").with_timestamp(2)];

        let outcome = rank(&mut snippets, &SearchParameters::default());
        assert_eq!(outcome.showing, 2);
        assert!(snippets.iter().all(|s| s.showing));
        assert_eq!(snippets[0].title, "a");
    }

    #[test]
    fn test_separator_only_query_hides_everything() {
        let mut snippets = vec![Snippet::new("a", ""), Snippet::new("b", "")];
        let outcome = rank(&mut snippets, &SearchParameters::all(" , , "));
        assert_eq!(outcome.terms, 0);
        assert_eq!(outcome.showing, 0);
        assert!(snippets.iter().all(|s| !s.showing));
    }

    #[test]
    fn test_more_toggles_never_hide() {
        let base = vec![
            Snippet::new("alpha", "beta"),
            Snippet::new("gamma", "").with_notes("alpha"),
            Snippet::new("delta", "").with_tags("alpha"),
        ];
        let narrow = SearchParameters {
            query: "alpha".into(),
            title: true,
            ..Default::default()
        };
        let wide = SearchParameters::all("alpha");

        let mut a = base.clone();
        rank(&mut a, &narrow);
        let mut b = base;
        rank(&mut b, &wide);

        for shown in a.iter().filter(|s| s.showing) {
            let same = b.iter().find(|s| s.title == shown.title).unwrap();
            assert!(same.showing);
        }
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let mut snippets = vec![
            Snippet::new("Foo", ""),
            Snippet::new("Bar", "").with_notes("foo helper"),
        ];
        let params = SearchParameters {
            query: "foo".into(),
            title: true,
            notes: true,
            ..Default::default()
        };
        rank(&mut snippets, &params);
        assert_eq!(snippets[0].title, "Foo");
        assert_eq!(snippets[1].title, "Bar");
        assert!(snippets.iter().all(|s| s.showing));
    }
}
