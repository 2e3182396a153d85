// ============================================================================
// FEED STATE - infinite scroll pagination + active source filter
// ============================================================================
// Plain state machine: callers ask it for the next request, run the fetch,
// then hand the outcome back. Lives in an Rc<RefCell> owned by use_feed.
// ============================================================================

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::ApiError;
use crate::models::News;

/// Where the feed stands with respect to the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Ready to fetch the next page
    Idle,
    /// A page is in flight; triggers are dropped
    Loading,
    /// The last page was short; nothing more to fetch for this filter
    Exhausted,
    /// The last attempt failed; waits for a filter change
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// First page of a (new) filter, replaces the list
    Replace,
    /// Next page, appended to the list
    Append,
}

/// One page to fetch, produced by [`FeedState`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub source_ids: Vec<String>,
    pub cutoff: DateTime<Utc>,
    pub offset: usize,
    pub page_size: usize,
    pub mode: PageMode,
    ticket: u64,
}

impl PageRequest {
    /// Cutoff as sent on the wire (`2024-05-01T10:00:00.000Z`)
    pub fn cutoff_iso(&self) -> String {
        self.cutoff.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Clone)]
pub struct FeedState {
    stories: Vec<News>,
    offset: usize,
    page_size: usize,
    request: RequestState,
    active_sources: Vec<String>,
    filtered: bool,
    cutoff: DateTime<Utc>,
    generation: u64,
    started: bool,
    detached: bool,
}

impl FeedState {
    pub fn new(page_size: usize, cutoff: DateTime<Utc>) -> Self {
        Self {
            stories: Vec::new(),
            offset: 0,
            page_size: page_size.max(1),
            request: RequestState::Idle,
            active_sources: Vec::new(),
            filtered: false,
            cutoff,
            generation: 0,
            started: false,
            detached: false,
        }
    }

    /// Initial unfiltered page. Returns `None` on every call after the first,
    /// and when a filter was applied before mount finished.
    pub fn start(&mut self) -> Option<PageRequest> {
        if self.started || self.filtered || self.detached {
            return None;
        }
        self.started = true;
        Some(self.begin_replace(Vec::new()))
    }

    /// Commits a source selection and restarts pagination from zero
    pub fn apply_filter(&mut self, source_ids: Vec<String>) -> PageRequest {
        self.started = true;
        self.filtered = !source_ids.is_empty();
        self.begin_replace(source_ids)
    }

    /// Drops the filter, empties the list and reloads the global feed
    pub fn clear_filter(&mut self) -> PageRequest {
        self.started = true;
        self.filtered = false;
        self.stories.clear();
        self.begin_replace(Vec::new())
    }

    /// Next page for the sentinel trigger. Only an idle feed fetches;
    /// while loading, exhausted or failed the trigger is dropped.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.request != RequestState::Idle || !self.started || self.detached {
            return None;
        }
        self.request = RequestState::Loading;
        Some(self.request_for(PageMode::Append, self.offset))
    }

    /// Applies the outcome of `request`. Stale outcomes (superseded by a
    /// filter change, or arriving after [`FeedState::detach`]) are ignored
    /// and `false` is returned.
    pub fn complete(&mut self, request: &PageRequest, outcome: Result<Vec<News>, ApiError>) -> bool {
        if self.detached || request.ticket != self.generation || self.request != RequestState::Loading {
            return false;
        }

        match outcome {
            Ok(page) => {
                let received = page.len();
                match request.mode {
                    PageMode::Replace => self.stories = page,
                    PageMode::Append => self.stories.extend(page),
                }
                self.offset = request.offset + received;
                self.request = if received < request.page_size {
                    RequestState::Exhausted
                } else {
                    RequestState::Idle
                };
            }
            Err(_) => {
                if request.mode == PageMode::Replace {
                    self.stories.clear();
                }
                self.request = RequestState::Failed;
            }
        }
        true
    }

    /// The owner went away: every outstanding request becomes stale
    pub fn detach(&mut self) {
        self.detached = true;
        self.generation += 1;
    }

    fn begin_replace(&mut self, source_ids: Vec<String>) -> PageRequest {
        self.generation += 1;
        self.active_sources = source_ids;
        self.offset = 0;
        self.request = RequestState::Loading;
        self.request_for(PageMode::Replace, 0)
    }

    fn request_for(&self, mode: PageMode, offset: usize) -> PageRequest {
        PageRequest {
            source_ids: self.active_sources.clone(),
            cutoff: self.cutoff,
            offset,
            page_size: self.page_size,
            mode,
            ticket: self.generation,
        }
    }

    pub fn stories(&self) -> &[News] {
        &self.stories
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    pub fn has_more(&self) -> bool {
        self.request != RequestState::Exhausted
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn active_sources(&self) -> &[String] {
        &self.active_sources
    }

    /// A finished first page came back empty
    pub fn is_empty_result(&self) -> bool {
        self.started && self.stories.is_empty() && !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::Language;

    fn cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn page(tag: &str, count: usize) -> Vec<News> {
        (0..count)
            .map(|i| News {
                title: format!("{}-{}", tag, i),
                summary: String::new(),
                language: Language::Arabic,
                image_url: String::new(),
                sources: Vec::new(),
                articles: Vec::new(),
                publish_date: None,
            })
            .collect()
    }

    fn titles(state: &FeedState) -> Vec<String> {
        state.stories().iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn test_initial_fetch_happens_once() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        assert_eq!(first.offset, 0);
        assert!(first.source_ids.is_empty());
        assert_eq!(first.mode, PageMode::Replace);
        assert!(state.start().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_ten_then_four_items_exhausts_feed() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        assert!(state.complete(&first, Ok(page("a", 10))));
        assert!(state.has_more());
        assert_eq!(state.offset(), 10);

        let second = state.next_page().unwrap();
        assert_eq!(second.offset, 10);
        assert_eq!(second.mode, PageMode::Append);
        assert!(state.complete(&second, Ok(page("b", 4))));

        assert_eq!(state.stories().len(), 14);
        assert!(!state.has_more());
        assert_eq!(state.request_state(), RequestState::Exhausted);
        assert!(state.next_page().is_none());
        assert!(state.next_page().is_none());
    }

    #[test]
    fn test_full_pages_keep_has_more_until_short_page() {
        let mut state = FeedState::new(5, cutoff());
        let mut request = state.start().unwrap();
        for round in 0..4 {
            assert!(state.complete(&request, Ok(page("p", 5))));
            assert!(state.has_more(), "round {}", round);
            request = state.next_page().unwrap();
        }
        assert!(state.complete(&request, Ok(page("last", 2))));
        assert!(!state.has_more());
        assert_eq!(state.offset(), 22);
        assert!(state.next_page().is_none());
        assert!(!state.has_more());
    }

    #[test]
    fn test_trigger_while_loading_is_dropped() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        assert!(state.next_page().is_none());
        state.complete(&first, Ok(page("a", 10)));

        let second = state.next_page().unwrap();
        assert!(state.next_page().is_none());
        state.complete(&second, Ok(page("b", 10)));
        assert!(state.next_page().is_some());
    }

    #[test]
    fn test_apply_filter_replaces_list() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        state.complete(&first, Ok(page("global", 10)));
        let more = state.next_page().unwrap();
        state.complete(&more, Ok(page("global2", 10)));
        assert_eq!(state.stories().len(), 20);

        let filtered = state.apply_filter(vec!["src-1".to_string(), "src-2".to_string()]);
        assert_eq!(filtered.offset, 0);
        assert_eq!(filtered.mode, PageMode::Replace);
        assert_eq!(filtered.source_ids, vec!["src-1", "src-2"]);
        assert!(state.is_filtered());

        state.complete(&filtered, Ok(page("filtered", 3)));
        assert_eq!(titles(&state), vec!["filtered-0", "filtered-1", "filtered-2"]);
        assert_eq!(state.offset(), 3);
    }

    #[test]
    fn test_next_page_uses_active_filter() {
        let mut state = FeedState::new(2, cutoff());
        state.start();
        let filtered = state.apply_filter(vec!["src-1".to_string()]);
        state.complete(&filtered, Ok(page("f", 2)));
        let next = state.next_page().unwrap();
        assert_eq!(next.source_ids, vec!["src-1"]);
        assert_eq!(next.offset, 2);
    }

    #[test]
    fn test_clear_matches_empty_apply_but_unfilters() {
        let mut cleared = FeedState::new(10, cutoff());
        let r = cleared.apply_filter(vec!["src".to_string()]);
        cleared.complete(&r, Ok(page("f", 10)));
        let clear_request = cleared.clear_filter();

        let mut emptied = FeedState::new(10, cutoff());
        let r = emptied.apply_filter(vec!["src".to_string()]);
        emptied.complete(&r, Ok(page("f", 10)));
        let empty_request = emptied.apply_filter(Vec::new());

        assert_eq!(clear_request.offset, empty_request.offset);
        assert_eq!(clear_request.source_ids, empty_request.source_ids);
        assert_eq!(clear_request.mode, PageMode::Replace);
        assert!(!cleared.is_filtered());
        assert!(cleared.stories().is_empty());

        cleared.complete(&clear_request, Ok(page("fresh", 10)));
        assert_eq!(cleared.stories().len(), 10);
        assert_eq!(cleared.offset(), 10);
    }

    #[test]
    fn test_filter_change_discards_stale_page() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        state.complete(&first, Ok(page("a", 10)));
        let stale = state.next_page().unwrap();

        let filtered = state.apply_filter(vec!["src".to_string()]);
        assert!(!state.complete(&stale, Ok(page("stale", 10))));
        assert!(state.is_loading());

        assert!(state.complete(&filtered, Ok(page("fresh", 1))));
        assert_eq!(titles(&state), vec!["fresh-0"]);
    }

    #[test]
    fn test_failure_keeps_offset_and_stalls() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        state.complete(&first, Ok(page("a", 10)));
        let second = state.next_page().unwrap();

        assert!(state.complete(&second, Err(ApiError::Network("offline".to_string()))));
        assert_eq!(state.request_state(), RequestState::Failed);
        assert_eq!(state.offset(), 10);
        assert_eq!(state.stories().len(), 10);
        assert!(state.has_more());
        assert!(state.next_page().is_none());

        let retry = state.apply_filter(vec!["src".to_string()]);
        assert!(state.complete(&retry, Ok(page("b", 10))));
        assert_eq!(state.request_state(), RequestState::Idle);
    }

    #[test]
    fn test_empty_first_page_is_reported() {
        let mut state = FeedState::new(10, cutoff());
        assert!(!state.is_empty_result());
        let first = state.start().unwrap();
        assert!(!state.is_empty_result());
        state.complete(&first, Ok(Vec::new()));
        assert!(state.is_empty_result());
        assert!(!state.has_more());
    }

    #[test]
    fn test_completion_after_detach_is_ignored() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        state.detach();
        assert!(!state.complete(&first, Ok(page("late", 10))));
        assert!(state.stories().is_empty());
        assert!(state.next_page().is_none());
    }

    #[test]
    fn test_filter_before_mount_skips_initial_fetch() {
        let mut state = FeedState::new(10, cutoff());
        let _ = state.apply_filter(vec!["src".to_string()]);
        assert!(state.start().is_none());
    }

    #[test]
    fn test_cutoff_is_stable_and_iso_formatted() {
        let mut state = FeedState::new(10, cutoff());
        let first = state.start().unwrap();
        state.complete(&first, Ok(page("a", 10)));
        let second = state.next_page().unwrap();
        assert_eq!(first.cutoff, second.cutoff);
        assert_eq!(second.cutoff_iso(), "2024-05-01T10:00:00.000Z");
    }
}
