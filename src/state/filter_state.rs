// ============================================================================
// FILTER STATE - source picker with staged selection
// ============================================================================

use crate::models::SourceOption;

/// What the filter control asks the feed to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Filter by these source uuids; an empty list means the feed is unfiltered
    Apply(Vec<String>),
    Clear,
}

/// Applied selection (the chips) plus the selection staged in the open picker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    applied: Vec<SourceOption>,
    staged: Vec<SourceOption>,
    open: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the picker on a copy of the applied selection
    pub fn open(&mut self) {
        self.staged = self.applied.clone();
        self.open = true;
    }

    /// Closes the picker, dropping whatever was staged
    pub fn cancel(&mut self) {
        self.staged.clear();
        self.open = false;
    }

    /// Adds or removes a source from the staged selection
    pub fn toggle(&mut self, source: &SourceOption) {
        if let Some(pos) = self.staged.iter().position(|s| s.uuid == source.uuid) {
            self.staged.remove(pos);
        } else {
            self.staged.push(source.clone());
        }
    }

    /// Apply is only offered for a non-empty selection; Clear is the way
    /// back to the unfiltered feed.
    pub fn can_apply(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn apply(&mut self) -> Option<FilterEvent> {
        if !self.can_apply() {
            return None;
        }
        self.applied = std::mem::take(&mut self.staged);
        self.open = false;
        Some(FilterEvent::Apply(uuids(&self.applied)))
    }

    pub fn clear(&mut self) -> FilterEvent {
        self.applied.clear();
        self.staged.clear();
        FilterEvent::Clear
    }

    /// Removing a chip refilters right away with the remaining sources
    pub fn remove(&mut self, uuid: &str) -> Option<FilterEvent> {
        let pos = self.applied.iter().position(|s| s.uuid == uuid)?;
        self.applied.remove(pos);
        self.staged.retain(|s| s.uuid != uuid);
        Some(FilterEvent::Apply(uuids(&self.applied)))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_filtered(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Count shown on the filter badge
    pub fn badge_count(&self) -> usize {
        self.applied.len()
    }

    pub fn applied(&self) -> &[SourceOption] {
        &self.applied
    }

    pub fn is_staged(&self, uuid: &str) -> bool {
        self.staged.iter().any(|s| s.uuid == uuid)
    }
}

fn uuids(sources: &[SourceOption]) -> Vec<String> {
    sources.iter().map(|s| s.uuid.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(uuid: &str, name: &str) -> SourceOption {
        SourceOption { uuid: uuid.to_string(), name: name.to_string() }
    }

    fn applied_with(sources: &[SourceOption]) -> FilterState {
        let mut state = FilterState::new();
        state.open();
        for s in sources {
            state.toggle(s);
        }
        state.apply();
        state
    }

    #[test]
    fn test_starts_unfiltered() {
        let state = FilterState::new();
        assert!(!state.is_filtered());
        assert!(!state.is_open());
        assert_eq!(state.badge_count(), 0);
    }

    #[test]
    fn test_apply_commits_staged_selection() {
        let bbc = source("u1", "BBC");
        let jazeera = source("u2", "Al Jazeera");
        let mut state = FilterState::new();
        state.open();
        state.toggle(&bbc);
        state.toggle(&jazeera);
        assert!(!state.is_filtered());

        let event = state.apply();
        assert_eq!(event, Some(FilterEvent::Apply(vec!["u1".to_string(), "u2".to_string()])));
        assert!(!state.is_open());
        assert_eq!(state.badge_count(), 2);
    }

    #[test]
    fn test_apply_disabled_on_empty_selection() {
        let mut state = FilterState::new();
        state.open();
        assert!(!state.can_apply());
        assert_eq!(state.apply(), None);
        assert!(state.is_open());
    }

    #[test]
    fn test_cancel_discards_staged_changes() {
        let bbc = source("u1", "BBC");
        let mut state = applied_with(&[bbc.clone()]);
        state.open();
        state.toggle(&bbc);
        state.toggle(&source("u9", "Other"));
        state.cancel();
        assert_eq!(state.applied(), &[bbc]);
        assert!(!state.is_staged("u9"));
    }

    #[test]
    fn test_toggle_twice_unstages() {
        let bbc = source("u1", "BBC");
        let mut state = FilterState::new();
        state.open();
        state.toggle(&bbc);
        assert!(state.is_staged("u1"));
        state.toggle(&bbc);
        assert!(!state.is_staged("u1"));
    }

    #[test]
    fn test_removing_chip_emits_remaining_sources() {
        let mut state = applied_with(&[source("u1", "BBC"), source("u2", "CNN"), source("u3", "RT")]);
        assert_eq!(
            state.remove("u2"),
            Some(FilterEvent::Apply(vec!["u1".to_string(), "u3".to_string()]))
        );
        assert_eq!(state.badge_count(), 2);
    }

    #[test]
    fn test_removing_last_chip_emits_empty_selection() {
        let mut state = applied_with(&[source("u1", "BBC")]);
        assert_eq!(state.remove("u1"), Some(FilterEvent::Apply(Vec::new())));
        assert!(!state.is_filtered());
        assert_eq!(state.remove("u1"), None);
    }

    #[test]
    fn test_clear_returns_to_unfiltered() {
        let mut state = applied_with(&[source("u1", "BBC"), source("u2", "CNN")]);
        assert_eq!(state.clear(), FilterEvent::Clear);
        assert!(!state.is_filtered());
        assert_eq!(state.badge_count(), 0);
    }
}
