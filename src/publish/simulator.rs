//! Publication Simulator
//!
//! Emulates moderation for finished uploads. Each submission becomes one
//! background task that waits, creates the chart entry, waits again,
//! displays it with the "new" marker, and finally clears the marker.
//!
//! Every task runs under a child of the simulator's root
//! [`CancellationToken`], so a single submission can be aborted through its
//! [`PublishHandle`] and everything outstanding can be aborted at once
//! with [`PublicationSimulator::shutdown`]. Independent submissions are not
//! sequenced against each other.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::request::PublishRequest;
use crate::catalog::EntryId;
use crate::chart::SharedChart;
use crate::config::PublicationConfig;
use crate::wizard::Submission;

/// How a publication task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Entry is on the chart
    Published(EntryId),
    /// Aborted before the entry became visible
    Cancelled,
}

/// Handle to one in-flight publication
///
/// Dropping the handle does not cancel the task.
pub struct PublishHandle {
    token: CancellationToken,
    task: JoinHandle<PublishOutcome>,
}

impl PublishHandle {
    /// Abort the publication
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end
    pub async fn wait(self) -> PublishOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Publication task failed: {}", e);
                PublishOutcome::Cancelled
            }
        }
    }
}

/// Turns finished submissions into chart entries after a delay
pub struct PublicationSimulator {
    chart: SharedChart,
    config: PublicationConfig,
    root: CancellationToken,
}

impl PublicationSimulator {
    pub fn new(chart: SharedChart, config: PublicationConfig) -> Self {
        Self {
            chart,
            config,
            root: CancellationToken::new(),
        }
    }

    pub fn chart(&self) -> &SharedChart {
        &self.chart
    }

    pub fn config(&self) -> &PublicationConfig {
        &self.config
    }

    /// Schedule publication of a finished submission
    pub fn publish<H>(&self, submission: &Submission<H>) -> PublishHandle {
        let request = PublishRequest::with_random_plays(submission, self.config.play_range());
        self.publish_request(request)
    }

    /// Schedule publication of a prepared request
    pub fn publish_request(&self, request: PublishRequest) -> PublishHandle {
        let token = self.root.child_token();
        tracing::info!(
            title = %request.title,
            artist = %request.artist,
            review_ms = self.config.review_delay_ms,
            "Submission queued for review"
        );

        let task = tokio::spawn(run_publication(
            self.chart.clone(),
            self.config.clone(),
            request,
            token.clone(),
        ));

        PublishHandle { token, task }
    }

    /// Cancel every outstanding publication, including future ones
    pub fn shutdown(&self) {
        tracing::info!("Cancelling pending publications");
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Drop for PublicationSimulator {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

async fn run_publication(
    chart: SharedChart,
    timing: PublicationConfig,
    request: PublishRequest,
    token: CancellationToken,
) -> PublishOutcome {
    if !pause(timing.review_delay(), &token).await {
        tracing::debug!(title = %request.title, "Publication cancelled during review");
        return PublishOutcome::Cancelled;
    }

    let id = chart.stage(request).await;

    if !pause(timing.reveal_delay(), &token).await {
        chart.abandon(id).await;
        tracing::debug!(id = %id, "Publication cancelled before display");
        return PublishOutcome::Cancelled;
    }

    if let Some(entry) = chart.reveal(id).await {
        tracing::info!(
            id = %id,
            rank = entry.rank,
            plays = entry.plays,
            "New chart entry: {} - {}",
            entry.artist,
            entry.title
        );
    }

    // Cancellation here only shortens the marker
    pause(timing.new_marker(), &token).await;
    chart.clear_marker(id).await;

    PublishOutcome::Published(id)
}

/// Sleep unless cancelled first; returns `false` on cancellation
async fn pause(delay: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Trend;
    use crate::chart::{ChartEvent, ChartStore};
    use crate::wizard::{FileRef, ReleaseExtras};

    fn single() -> Submission {
        Submission::Single {
            artist: "Test Band".to_string(),
            title: "Test Song".to_string(),
            track: FileRef::named("demo.mp3"),
            extras: ReleaseExtras::default(),
        }
    }

    fn simulator() -> PublicationSimulator {
        PublicationSimulator::new(
            SharedChart::new(ChartStore::seeded()),
            PublicationConfig::default(),
        )
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_exactly_one_entry() {
        let sim = simulator();
        let handle = sim.publish(&single());

        let outcome = handle.wait().await;
        let PublishOutcome::Published(id) = outcome else {
            panic!("expected publication, got {:?}", outcome);
        };

        let entries = sim.chart().snapshot().await;
        assert_eq!(entries.len(), 9);

        let added: Vec<_> = entries.iter().filter(|e| e.artist == "Test Band").collect();
        assert_eq!(added.len(), 1);
        let entry = added[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, "Test Song");
        assert_eq!(entry.trend, Trend::Up);
        assert_eq!(entry.rank, 9);
        assert!(entry.plays > 0);
        assert!(!sim.chart().is_new(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_timeline() {
        let sim = simulator();
        let mut events = sim.chart().subscribe();
        let _handle = sim.publish(&single());

        tokio::time::sleep(ms(2999)).await;
        assert!(sim.chart().read(|c| c.pending().is_empty()).await);

        tokio::time::sleep(ms(2)).await;
        assert_eq!(sim.chart().read(|c| c.pending().len()).await, 1);
        assert_eq!(sim.chart().len().await, 8);

        tokio::time::sleep(ms(500)).await;
        assert_eq!(sim.chart().len().await, 9);
        let id = sim.chart().snapshot().await[8].id;
        assert!(sim.chart().is_new(id).await);

        tokio::time::sleep(ms(5000)).await;
        assert!(!sim.chart().is_new(id).await);

        assert!(matches!(events.recv().await.unwrap(), ChartEvent::Staged { .. }));
        assert!(matches!(events.recv().await.unwrap(), ChartEvent::Revealed { .. }));
        assert_eq!(events.recv().await.unwrap(), ChartEvent::MarkerCleared { id });
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_review() {
        let sim = simulator();
        let handle = sim.publish(&single());

        tokio::time::sleep(ms(1000)).await;
        handle.cancel();

        assert_eq!(handle.wait().await, PublishOutcome::Cancelled);
        assert_eq!(sim.chart().len().await, 8);
        assert!(sim.chart().read(|c| c.pending().is_empty()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_pending_discards_entry() {
        let sim = simulator();
        let mut events = sim.chart().subscribe();
        let handle = sim.publish(&single());

        tokio::time::sleep(ms(3200)).await;
        handle.cancel();
        assert_eq!(handle.wait().await, PublishOutcome::Cancelled);

        assert_eq!(sim.chart().len().await, 8);
        assert!(sim.chart().read(|c| c.pending().is_empty()).await);

        let ChartEvent::Staged { id } = events.recv().await.unwrap() else {
            panic!("expected staged event");
        };
        assert_eq!(events.recv().await.unwrap(), ChartEvent::Abandoned { id });
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_reveal_clears_marker() {
        let sim = simulator();
        let handle = sim.publish(&single());

        tokio::time::sleep(ms(4000)).await;
        handle.cancel();

        let PublishOutcome::Published(id) = handle.wait().await else {
            panic!("entry was already visible");
        };
        assert_eq!(sim.chart().len().await, 9);
        assert!(!sim.chart().is_new(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_all() {
        let sim = simulator();
        let first = sim.publish(&single());
        let second = sim.publish(&single());

        sim.shutdown();

        assert_eq!(first.wait().await, PublishOutcome::Cancelled);
        assert_eq!(second.wait().await, PublishOutcome::Cancelled);
        assert!(sim.is_shut_down());

        let late = sim.publish(&single());
        assert!(late.is_cancelled());
        assert_eq!(late.wait().await, PublishOutcome::Cancelled);
        assert_eq!(sim.chart().len().await, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interleaved_submissions() {
        let sim = simulator();
        let first = sim.publish(&single());
        tokio::time::sleep(ms(100)).await;
        let second = sim.publish_request(PublishRequest {
            title: "Second Song".to_string(),
            artist: "Other Band".to_string(),
            album: "Single".to_string(),
            plays: 300,
        });

        let PublishOutcome::Published(a) = first.wait().await else {
            panic!("first should publish");
        };
        let PublishOutcome::Published(b) = second.wait().await else {
            panic!("second should publish");
        };

        assert_ne!(a, b);
        let entries = sim.chart().snapshot().await;
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[8].id, a);
        assert_eq!(entries[9].id, b);
        // Second was created before the first became visible
        assert_eq!(entries[8].rank, 9);
        assert_eq!(entries[9].rank, 9);
    }
}
