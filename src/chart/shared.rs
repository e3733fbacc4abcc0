//! Shared Chart Handle
//!
//! Thread-safe wrapper around [`ChartStore`] for the native runtime.
//! Every mutation is broadcast as a [`ChartEvent`] so renderers can redraw.
//! Mutations apply in the order callers acquire the lock.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use super::store::ChartStore;
use crate::catalog::{ChartEntry, EntryId};
use crate::publish::PublishRequest;

/// Change notification for chart renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartEvent {
    /// Entry synthesized and waiting to be displayed
    Staged { id: EntryId },
    /// Entry appended to the visible chart with the "new" marker
    Revealed { entry: ChartEntry },
    /// "New" marker removed
    MarkerCleared { id: EntryId },
    /// Pending entry dropped before it was displayed
    Abandoned { id: EntryId },
}

/// Cloneable handle to the chart state
#[derive(Clone)]
pub struct SharedChart {
    inner: Arc<RwLock<ChartStore>>,
    events: broadcast::Sender<ChartEvent>,
}

impl SharedChart {
    /// Default event channel capacity
    pub const EVENT_CAPACITY: usize = 64;

    pub fn new(store: ChartStore) -> Self {
        let (events, _) = broadcast::channel(Self::EVENT_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(store)),
            events,
        }
    }

    /// Subscribe to chart changes
    pub fn subscribe(&self) -> broadcast::Receiver<ChartEvent> {
        self.events.subscribe()
    }

    /// Copy of the visible entries
    pub async fn snapshot(&self) -> Vec<ChartEntry> {
        self.inner.read().await.entries().to_vec()
    }

    /// Run a closure against the store under a read lock
    pub async fn read<R>(&self, f: impl FnOnce(&ChartStore) -> R) -> R {
        f(&*self.inner.read().await)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_new(&self, id: EntryId) -> bool {
        self.inner.read().await.is_new(id)
    }

    pub async fn stage(&self, request: PublishRequest) -> EntryId {
        let id = self.inner.write().await.stage(request);
        self.emit(ChartEvent::Staged { id });
        id
    }

    pub async fn reveal(&self, id: EntryId) -> Option<ChartEntry> {
        let entry = self.inner.write().await.reveal(id).cloned();
        if let Some(entry) = &entry {
            self.emit(ChartEvent::Revealed {
                entry: entry.clone(),
            });
        }
        entry
    }

    pub async fn clear_marker(&self, id: EntryId) -> bool {
        let cleared = self.inner.write().await.clear_marker(id);
        if cleared {
            self.emit(ChartEvent::MarkerCleared { id });
        }
        cleared
    }

    pub async fn abandon(&self, id: EntryId) -> bool {
        let dropped = self.inner.write().await.abandon(id).is_some();
        if dropped {
            self.emit(ChartEvent::Abandoned { id });
        }
        dropped
    }

    fn emit(&self, event: ChartEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}

impl Default for SharedChart {
    fn default() -> Self {
        Self::new(ChartStore::seeded())
    }
}
