//! # Derived Views
//!
//! The display never reads the collection directly. It subscribes to views derived from it:
//!
//! - **Visible**: the first page (default 12) of the collection in current order, limited
//!   to snippets whose `showing` flag is set.
//! - **Pinned**: every pinned snippet in the *full* collection. Pinned snippets are exempt
//!   from paging.
//! - **Search parameters**: the request the current ordering came from.
//!
//! ## Replay-Latest Subjects
//!
//! Each view is a [`Subject`]: a value plus a list of subscriber channels. A new subscriber
//! immediately receives the current value, then every later publication. Published
//! snippet lists are [`Snapshot`]s, so subscribers can never see a list change under them.

use crate::model::{SearchParameters, Snippet};
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Immutable published list of snippets.
pub type Snapshot = Arc<[Snippet]>;

pub struct Subject<T: Clone> {
    current: T,
    subscribers: Vec<flume::Sender<T>>,
}

impl<T: Clone> Subject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn subscribe(&mut self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        // Unbounded and the receiver is alive, so this send cannot fail.
        let _ = sender.send(self.current.clone());
        self.subscribers.push(sender);
        receiver
    }

    pub fn publish(&mut self, value: T) {
        self.current = value;
        let current = &self.current;
        self.subscribers
            .retain(|subscriber| subscriber.send(current.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + PartialEq> Subject<T> {
    /// Publishes only if `value` differs from the current value. Returns whether it did.
    pub fn publish_distinct(&mut self, value: T) -> bool {
        if self.current == value {
            return false;
        }
        self.publish(value);
        true
    }
}

pub fn page(snippets: &[Snippet], page_size: usize) -> Snapshot {
    snippets
        .iter()
        .take(page_size)
        .filter(|snippet| snippet.showing)
        .cloned()
        .collect()
}

pub fn pinned(snippets: &[Snippet]) -> Snapshot {
    snippets
        .iter()
        .filter(|snippet| snippet.pinned)
        .cloned()
        .collect()
}

/// Whether more than `threshold` snippets are currently showing.
pub fn has_more(snippets: &[Snippet], threshold: usize) -> bool {
    snippets.iter().filter(|snippet| snippet.showing).count() > threshold
}

pub struct Views {
    page_size: usize,
    visible: Subject<Snapshot>,
    pinned: Subject<Snapshot>,
    search: Subject<SearchParameters>,
}

impl Views {
    pub fn new(snippets: &[Snippet], page_size: usize) -> Self {
        Self {
            page_size,
            visible: Subject::new(page(snippets, page_size)),
            pinned: Subject::new(pinned(snippets)),
            search: Subject::new(SearchParameters::default()),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible(&self) -> Snapshot {
        self.visible.value().clone()
    }

    pub fn pinned(&self) -> Snapshot {
        self.pinned.value().clone()
    }

    pub fn search_parameters(&self) -> &SearchParameters {
        self.search.value()
    }

    pub fn subscribe_visible(&mut self) -> flume::Receiver<Snapshot> {
        self.visible.subscribe()
    }

    pub fn subscribe_pinned(&mut self) -> flume::Receiver<Snapshot> {
        self.pinned.subscribe()
    }

    pub fn subscribe_search(&mut self) -> flume::Receiver<SearchParameters> {
        self.search.subscribe()
    }

    /// Re-slices the first page from the collection.
    pub fn refresh_visible(&mut self, snippets: &[Snippet]) {
        self.visible.publish(page(snippets, self.page_size));
    }

    pub fn refresh_pinned(&mut self, snippets: &[Snippet]) {
        self.pinned.publish(pinned(snippets));
    }

    /// Puts `snippet` in front of the current visible list without re-slicing.
    pub fn prepend_visible(&mut self, snippet: Snippet) {
        let list: Snapshot = std::iter::once(snippet)
            .chain(self.visible.value().iter().cloned())
            .collect();
        self.visible.publish(list);
    }

    /// Moves `snippet` to the front of the visible list, dropping any other copy of it.
    pub fn promote(&mut self, snippet: Snippet) {
        let list: Snapshot = std::iter::once(snippet.clone())
            .chain(
                self.visible
                    .value()
                    .iter()
                    .filter(|visible| visible.id != snippet.id)
                    .cloned(),
            )
            .collect();
        self.visible.publish(list);
    }

    /// Publishes the whole collection, ignoring paging and `showing`.
    pub fn show_all(&mut self, snippets: &[Snippet]) {
        self.visible.publish(snippets.iter().cloned().collect());
    }

    pub fn set_search(&mut self, params: SearchParameters) -> bool {
        self.search.publish_distinct(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Snippet> {
        (0..count)
            .map(|i| {
                let mut snippet = Snippet::new(format!("s{}", i), "");
                snippet.id = i.to_string();
                snippet
            })
            .collect()
    }

    #[test]
    fn test_subject_replays_latest_to_late_subscribers() {
        let mut subject = Subject::new(1);
        let early = subject.subscribe();
        subject.publish(2);
        let late = subject.subscribe();

        assert_eq!(early.try_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(late.try_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_subject_prunes_dropped_subscribers() {
        let mut subject = Subject::new(0);
        let kept = subject.subscribe();
        drop(subject.subscribe());
        assert_eq!(subject.subscriber_count(), 2);

        subject.publish(1);
        assert_eq!(subject.subscriber_count(), 1);
        assert_eq!(kept.try_iter().last(), Some(1));
    }

    #[test]
    fn test_publish_distinct_skips_equal_values() {
        let mut subject = Subject::new(SearchParameters::default());
        let receiver = subject.subscribe();
        assert!(subject.publish_distinct(SearchParameters::all("a")));
        assert!(!subject.publish_distinct(SearchParameters::all("a")));
        assert!(subject.publish_distinct(SearchParameters::all("b")));
        assert_eq!(receiver.try_iter().count(), 3);
    }

    #[test]
    fn test_page_is_sliced_before_filtering() {
        let mut snippets = numbered(20);
        snippets[3].showing = false;
        snippets[15].showing = false;

        let first = page(&snippets, DEFAULT_PAGE_SIZE);
        assert_eq!(first.len(), 11);
        assert!(first.iter().all(|s| s.id != "3"));
        assert_eq!(first.last().map(|s| s.id.as_str()), Some("11"));
    }

    #[test]
    fn test_has_more() {
        let snippets = numbered(12);
        assert!(!has_more(&snippets, 12));
        assert!(has_more(&snippets, 11));
    }

    #[test]
    fn test_pinned_uses_full_collection() {
        let mut snippets = numbered(20);
        snippets[18].pinned = true;
        let views = Views::new(&snippets, DEFAULT_PAGE_SIZE);
        assert_eq!(views.pinned().len(), 1);
        assert_eq!(views.pinned()[0].id, "18");
        assert_eq!(views.visible().len(), 12);
    }

    #[test]
    fn test_promote_moves_to_front_without_duplicates() {
        let snippets = numbered(5);
        let mut views = Views::new(&snippets, DEFAULT_PAGE_SIZE);
        views.promote(snippets[3].clone());

        let visible = views.visible();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "3");
        assert_eq!(visible.iter().filter(|s| s.id == "3").count(), 1);
    }
}
