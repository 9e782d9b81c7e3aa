//! # Default Display Order
//!
//! Without an active query, snippets are listed by one total order built from four
//! tie-breaking comparators. Each stage only decides when the previous one saw a tie:
//!
//! 1. **Showing**: snippets matching the current filter come first.
//! 2. **Index**: ascending user-assigned index.
//! 3. **Timestamp**: newest first.
//! 4. **Title**: ascending, byte-wise, no case folding (`"B" < "a"`).
//!
//! Sorting always goes through [`slice::sort_by`], which is stable, so exact ties keep their
//! prior relative order.

use crate::model::Snippet;
use std::cmp::Ordering;

pub fn cascade(a: &Snippet, b: &Snippet) -> Ordering {
    by_showing(a, b)
        .then_with(|| by_index(a, b))
        .then_with(|| by_timestamp(a, b))
        .then_with(|| by_title(a, b))
}

pub fn sort_default(snippets: &mut [Snippet]) {
    snippets.sort_by(cascade);
}

fn by_showing(a: &Snippet, b: &Snippet) -> Ordering {
    b.showing.cmp(&a.showing)
}

fn by_index(a: &Snippet, b: &Snippet) -> Ordering {
    a.index.cmp(&b.index)
}

fn by_timestamp(a: &Snippet, b: &Snippet) -> Ordering {
    b.timestamp.cmp(&a.timestamp)
}

fn by_title(a: &Snippet, b: &Snippet) -> Ordering {
    a.title.cmp(&b.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snip(showing: bool, index: i64, timestamp: i64, title: &str) -> Snippet {
        let mut snippet = Snippet::new(title, "")
            .with_index(index)
            .with_timestamp(timestamp);
        snippet.showing = showing;
        snippet
    }

    fn titles(snippets: &[Snippet]) -> Vec<&str> {
        snippets.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_showing_beats_index() {
        let mut list = vec![snip(false, 0, 0, "hidden"), snip(true, 9, 0, "shown")];
        sort_default(&mut list);
        assert_eq!(titles(&list), vec!["shown", "hidden"]);
    }

    #[test]
    fn test_index_ascending_beats_timestamp() {
        let mut list = vec![snip(true, 2, 100, "late"), snip(true, 1, 1, "early")];
        sort_default(&mut list);
        assert_eq!(titles(&list), vec!["early", "late"]);
    }

    #[test]
    fn test_newer_timestamp_first() {
        let mut list = vec![snip(true, 0, 10, "old"), snip(true, 0, 20, "new")];
        sort_default(&mut list);
        assert_eq!(titles(&list), vec!["new", "old"]);
    }

    #[test]
    fn test_title_is_case_sensitive() {
        let mut list = vec![
            snip(true, 0, 0, "b"),
            snip(true, 0, 0, "a"),
            snip(true, 0, 0, "B"),
        ];
        sort_default(&mut list);
        assert_eq!(titles(&list), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_order_independent_of_input_permutation() {
        let base = vec![
            snip(true, 1, 5, "a"),
            snip(false, 0, 9, "b"),
            snip(true, 0, 5, "c"),
            snip(true, 0, 7, "d"),
            snip(true, 0, 7, "e"),
        ];
        let mut expected = base.clone();
        sort_default(&mut expected);
        assert_eq!(titles(&expected), vec!["d", "e", "c", "a", "b"]);

        let mut reversed: Vec<Snippet> = base.iter().rev().cloned().collect();
        sort_default(&mut reversed);
        assert_eq!(titles(&reversed), titles(&expected));

        let mut rotated = base.clone();
        rotated.rotate_left(2);
        sort_default(&mut rotated);
        assert_eq!(titles(&rotated), titles(&expected));
    }

    #[test]
    fn test_exact_ties_keep_prior_order() {
        let mut first = snip(true, 0, 0, "same");
        first.code = "first".into();
        let mut second = snip(true, 0, 0, "same");
        second.code = "second".into();

        let mut list = vec![first.clone(), second.clone()];
        sort_default(&mut list);
        assert_eq!(list[0].code, "first");

        let mut list = vec![second, first];
        sort_default(&mut list);
        assert_eq!(list[0].code, "second");
    }
}
