//! Chart State Container
//!
//! Owns the visible chart, the entries waiting to be displayed, and the
//! set of entries currently carrying the "new" marker. Entries move
//! through three stages:
//!
//! ```text
//! stage() → pending ──reveal()──→ visible + marked ──clear_marker()──→ visible
//!              └──abandon()──→ dropped
//! ```
//!
//! Visible entries are append-only: nothing is removed or reordered, and
//! ranks are never recomputed.

use chrono::Utc;
use std::collections::HashSet;

use crate::catalog::{seed, ChartEntry, EntryId, Trend};
use crate::publish::PublishRequest;

/// Issues chart entry ids derived from the wall clock
///
/// An id is the current Unix time in milliseconds, bumped past the last
/// issued id when the clock has not advanced. Ids are strictly increasing.
#[derive(Debug, Clone)]
pub struct EntryIdGenerator {
    last: i64,
}

impl EntryIdGenerator {
    /// Generator whose first id will be greater than `last`
    pub fn starting_after(last: i64) -> Self {
        Self { last }
    }

    /// Next id for the given clock reading
    pub fn next_at(&mut self, now_ms: i64) -> EntryId {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        EntryId(id)
    }

    /// Next id for the current time
    pub fn next_id(&mut self) -> EntryId {
        self.next_at(Utc::now().timestamp_millis())
    }
}

/// The chart list consumed by renderers
#[derive(Debug, Clone)]
pub struct ChartStore {
    entries: Vec<ChartEntry>,
    pending: Vec<ChartEntry>,
    marked: HashSet<EntryId>,
    ids: EntryIdGenerator,
}

impl ChartStore {
    /// Create a store holding the given entries
    pub fn new(entries: Vec<ChartEntry>) -> Self {
        let last = entries.iter().map(|e| e.id.0).max().unwrap_or(0);
        Self {
            entries,
            pending: Vec::new(),
            marked: HashSet::new(),
            ids: EntryIdGenerator::starting_after(last),
        }
    }

    /// Store holding the compiled-in chart
    pub fn seeded() -> Self {
        Self::new(seed::seed_chart())
    }

    /// Visible entries in display order
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visible entry by id
    pub fn get(&self, id: EntryId) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries created but not yet displayed
    pub fn pending(&self) -> &[ChartEntry] {
        &self.pending
    }

    pub fn is_pending(&self, id: EntryId) -> bool {
        self.pending.iter().any(|e| e.id == id)
    }

    /// Whether the entry currently carries the "new" marker
    pub fn is_new(&self, id: EntryId) -> bool {
        self.marked.contains(&id)
    }

    /// Synthesize an entry from a request and hold it as pending
    pub fn stage(&mut self, request: PublishRequest) -> EntryId {
        self.stage_at(request, Utc::now().timestamp_millis())
    }

    /// [`stage`](Self::stage) with an explicit clock reading
    pub fn stage_at(&mut self, request: PublishRequest, now_ms: i64) -> EntryId {
        let id = self.ids.next_at(now_ms);
        let rank = (self.entries.len() + 1) as u32;

        tracing::debug!(id = %id, rank, title = %request.title, "Staged chart entry");

        self.pending.push(ChartEntry {
            id,
            title: request.title,
            artist: request.artist,
            album: request.album,
            plays: request.plays,
            rank,
            trend: Trend::Up,
        });
        id
    }

    /// Move a pending entry to the end of the visible chart and mark it new
    ///
    /// Returns `None` when no pending entry has this id.
    pub fn reveal(&mut self, id: EntryId) -> Option<&ChartEntry> {
        let index = self.pending.iter().position(|e| e.id == id)?;
        let entry = self.pending.remove(index);
        self.entries.push(entry);
        self.marked.insert(id);
        self.entries.last()
    }

    /// Remove the "new" marker; returns whether it was set
    pub fn clear_marker(&mut self, id: EntryId) -> bool {
        self.marked.remove(&id)
    }

    /// Drop a pending entry that will never be displayed
    pub fn abandon(&mut self, id: EntryId) -> Option<ChartEntry> {
        let index = self.pending.iter().position(|e| e.id == id)?;
        Some(self.pending.remove(index))
    }
}

impl Default for ChartStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> PublishRequest {
        PublishRequest {
            title: title.to_string(),
            artist: "Test Band".to_string(),
            album: "Single".to_string(),
            plays: 420,
        }
    }

    #[test]
    fn test_id_generator_monotonic_within_same_tick() {
        let mut ids = EntryIdGenerator::starting_after(0);
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        let c = ids.next_at(1_699_999_999_999);

        assert_eq!(a, EntryId(1_700_000_000_000));
        assert_eq!(b, EntryId(1_700_000_000_001));
        assert_eq!(c, EntryId(1_700_000_000_002));
    }

    #[test]
    fn test_id_generator_starts_after_seed() {
        let mut store = ChartStore::seeded();
        let id = store.stage_at(request("Low Clock"), 3);
        assert_eq!(id, EntryId(9));
    }

    #[test]
    fn test_stage_then_reveal() {
        let mut store = ChartStore::seeded();
        let id = store.stage_at(request("Test Song"), 1_700_000_000_000);

        assert!(store.is_pending(id));
        assert!(store.get(id).is_none());
        assert_eq!(store.len(), 8);

        let entry = store.reveal(id).unwrap();
        assert_eq!(entry.rank, 9);
        assert_eq!(entry.trend, Trend::Up);
        assert_eq!(entry.title, "Test Song");

        assert!(!store.is_pending(id));
        assert!(store.is_new(id));
        assert_eq!(store.len(), 9);
        assert_eq!(store.entries().last().unwrap().id, id);

        assert!(store.clear_marker(id));
        assert!(!store.is_new(id));
        assert!(!store.clear_marker(id));
    }

    #[test]
    fn test_reveal_unknown_id() {
        let mut store = ChartStore::seeded();
        assert!(store.reveal(EntryId(42)).is_none());
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_concurrent_stages_share_rank() {
        // Both entries are staged before either becomes visible
        let mut store = ChartStore::seeded();
        let a = store.stage_at(request("First"), 1_700_000_000_000);
        let b = store.stage_at(request("Second"), 1_700_000_000_000);

        assert_ne!(a, b);
        let rank_b = store.reveal(b).unwrap().rank;
        let rank_a = store.reveal(a).unwrap().rank;
        assert_eq!(rank_a, 9);
        assert_eq!(rank_b, 9);

        // Fire order, not submission order
        let titles: Vec<_> = store.entries()[8..].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
    }

    #[test]
    fn test_abandon_pending() {
        let mut store = ChartStore::seeded();
        let id = store.stage_at(request("Torn Down"), 1_700_000_000_000);

        let dropped = store.abandon(id).unwrap();
        assert_eq!(dropped.title, "Torn Down");
        assert!(store.pending().is_empty());
        assert!(store.reveal(id).is_none());
        assert_eq!(store.len(), 8);
    }
}
