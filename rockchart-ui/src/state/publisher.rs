//! Publication Scheduler
//!
//! Browser-side counterpart of the native publication simulator: review
//! delay, stage, reveal delay, show with a "new" marker, clear the marker.
//! Each scheduled publication holds a cancel ticket; cancelling before the
//! reveal drops the entry, cancelling after leaves it on the chart.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use rockchart::{ChartStore, PublicationConfig, PublishRequest, Submission};

/// Cancel flag shared between the scheduler and one publication
#[derive(Clone, Default)]
pub struct Ticket(Rc<Cell<bool>>);

impl Ticket {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn same(&self, other: &Ticket) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub struct Publisher {
    chart: RwSignal<ChartStore>,
    config: PublicationConfig,
    tickets: Rc<RefCell<Vec<Ticket>>>,
}

impl Publisher {
    pub fn new(chart: RwSignal<ChartStore>, config: PublicationConfig) -> Self {
        Self {
            chart,
            config,
            tickets: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &PublicationConfig {
        &self.config
    }

    /// Schedule a finished submission for display
    pub fn publish<H>(&self, submission: &Submission<H>) -> Ticket {
        let request = PublishRequest::with_random_plays(submission, self.config.play_range());
        self.publish_request(request)
    }

    pub fn publish_request(&self, request: PublishRequest) -> Ticket {
        let ticket = Ticket::default();
        self.tickets.borrow_mut().push(ticket.clone());

        let publisher = self.clone();
        let job = ticket.clone();
        spawn_local(async move {
            publisher.run(request, &job).await;
            publisher.tickets.borrow_mut().retain(|t| !t.same(&job));
        });

        ticket
    }

    /// Cancel every scheduled publication
    pub fn cancel_all(&self) {
        for ticket in self.tickets.borrow_mut().drain(..) {
            ticket.cancel();
        }
    }

    /// Publications not yet finished
    pub fn in_flight(&self) -> usize {
        self.tickets.borrow().len()
    }

    async fn run(&self, request: PublishRequest, ticket: &Ticket) {
        if !pause(self.config.review_delay(), ticket).await {
            return;
        }

        let Some(id) = self.chart.try_update(|chart| chart.stage(request)) else {
            return;
        };

        if !pause(self.config.reveal_delay(), ticket).await {
            self.chart.try_update(|chart| {
                chart.abandon(id);
            });
            return;
        }

        self.chart.try_update(|chart| {
            chart.reveal(id);
        });

        pause(self.config.new_marker(), ticket).await;
        self.chart.try_update(|chart| {
            chart.clear_marker(id);
        });
    }
}

/// Wait out `delay`; `false` when the ticket was cancelled meanwhile
async fn pause(delay: Duration, ticket: &Ticket) -> bool {
    if ticket.is_cancelled() {
        return false;
    }
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
    !ticket.is_cancelled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fast() -> PublicationConfig {
        PublicationConfig {
            review_delay_ms: 20,
            reveal_delay_ms: 20,
            new_marker_ms: 200,
            ..PublicationConfig::default()
        }
    }

    fn request() -> PublishRequest {
        PublishRequest {
            title: "Test Song".to_string(),
            artist: "Test Band".to_string(),
            album: PublishRequest::SINGLE_LABEL.to_string(),
            plays: 100,
        }
    }

    #[wasm_bindgen_test]
    async fn test_publication_reaches_chart() {
        let runtime = create_runtime();
        let chart = create_rw_signal(ChartStore::seeded());
        let publisher = Publisher::new(chart, fast());

        publisher.publish_request(request());
        assert_eq!(publisher.in_flight(), 1);

        TimeoutFuture::new(100).await;
        let (len, marked) = chart.with_untracked(|c| {
            let last = c.entries().last().map(|e| e.id);
            (c.len(), last.map(|id| c.is_new(id)))
        });
        assert_eq!(len, 9);
        assert_eq!(marked, Some(true));

        TimeoutFuture::new(250).await;
        assert_eq!(publisher.in_flight(), 0);
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_cancel_all_drops_pending() {
        let runtime = create_runtime();
        let chart = create_rw_signal(ChartStore::seeded());
        let publisher = Publisher::new(chart, fast());

        let ticket = publisher.publish_request(request());
        publisher.cancel_all();
        assert!(ticket.is_cancelled());

        TimeoutFuture::new(100).await;
        chart.with_untracked(|c| {
            assert_eq!(c.len(), 8);
            assert!(c.pending().is_empty());
        });
        runtime.dispose();
    }

    #[test]
    fn test_ticket_clones_share_flag() {
        let ticket = Ticket::default();
        let other = ticket.clone();
        other.cancel();
        assert!(ticket.is_cancelled());
        assert!(ticket.same(&other));
        assert!(!ticket.same(&Ticket::default()));
    }
}
