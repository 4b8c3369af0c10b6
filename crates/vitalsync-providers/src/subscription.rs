// ABOUTME: Cancellable live telemetry subscriptions backed by spawned Tokio tasks
// ABOUTME: Callback handles, bounded channel feeds and a registry for bulk cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Live Subscriptions
//!
//! Every subscription owns one task that sleeps until the next
//! [`TickSchedule`] deadline, draws a [`LiveUpdate`] and hands it to the
//! subscriber's callback.
//!
//! ## Cancellation
//!
//! [`SubscriptionHandle::cancel`] marks the subscription cancelled, waits for
//! any invocation in flight on another thread and drops the callback before
//! returning. Delivery holds the callback slot locked for the whole
//! invocation, so on a multi-threaded runtime no invocation starts after
//! `cancel` returns. A callback may cancel its own subscription: the
//! delivering thread is recorded and a cancel from that thread only sets the
//! flag, leaving the delivery path to drop the callback once it returns.

use crate::clock::Clock;
use crate::constants::timing::LIVE_FEED_CAPACITY;
use crate::core::LiveCallback;
use crate::generator::SampleGenerator;
use crate::models::{LiveUpdate, SubscriptionId};
use crate::schedule::TickSchedule;
use futures_util::Stream;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread::{self, ThreadId};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

/// State shared between a handle, its task and the provider registry
pub(crate) struct SubscriptionShared {
    id: SubscriptionId,
    cancelled: AtomicBool,
    callback: Mutex<Option<LiveCallback>>,
    delivering_on: Mutex<Option<ThreadId>>,
    task: OnceLock<AbortHandle>,
}

impl SubscriptionShared {
    fn new(callback: LiveCallback) -> Self {
        Self {
            id: SubscriptionId::new(),
            cancelled: AtomicBool::new(false),
            callback: Mutex::new(Some(callback)),
            delivering_on: Mutex::new(None),
            task: OnceLock::new(),
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn set_delivering_on(&self, thread: Option<ThreadId>) {
        *self
            .delivering_on
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = thread;
    }

    fn is_delivering_on_current_thread(&self) -> bool {
        *self
            .delivering_on
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            == Some(thread::current().id())
    }

    /// Mark cancelled, wait out an in-flight delivery, drop the callback and stop the task
    pub(crate) fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            debug!(subscription = %self.id, "Live subscription cancelled");
        }
        if let Some(task) = self.task.get() {
            task.abort();
        }
        // Called from inside the callback: the slot is held by this thread
        if self.is_delivering_on_current_thread() {
            return;
        }
        let callback = self
            .callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(callback);
    }

    /// Hand `update` to the callback; `false` once the subscription is dead
    fn deliver(&self, update: LiveUpdate) -> bool {
        let mut slot = self.callback.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_cancelled() {
            drop(slot.take());
            return false;
        }
        let Some(callback) = slot.as_mut() else {
            return false;
        };

        self.set_delivering_on(Some(thread::current().id()));
        callback(update);
        self.set_delivering_on(None);

        if self.is_cancelled() {
            drop(slot.take());
            false
        } else {
            true
        }
    }
}

/// Handle to a live subscription
///
/// Dropping the handle does not cancel the subscription; call
/// [`SubscriptionHandle::cancel`].
#[derive(Clone)]
pub struct SubscriptionHandle {
    shared: Arc<SubscriptionShared>,
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.shared.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl SubscriptionHandle {
    /// Subscription identifier
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.shared.id
    }

    /// Whether the subscription has been cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared.is_cancelled()
    }

    /// Stop delivery; no callback invocation starts after this returns
    pub fn cancel(&self) {
        self.shared.cancel();
    }
}

/// Spawn the delivery task for a new subscription
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub(crate) fn spawn_live_task(
    schedule: TickSchedule,
    generator: Arc<SampleGenerator>,
    clock: Arc<dyn Clock>,
    callback: LiveCallback,
) -> (SubscriptionHandle, Arc<SubscriptionShared>) {
    let shared = Arc::new(SubscriptionShared::new(callback));
    let task_shared = Arc::clone(&shared);

    let join = tokio::spawn(async move {
        let start = Instant::now();
        let mut tick: u64 = 0;
        loop {
            tick = tick.saturating_add(1);
            tokio::time::sleep_until(schedule.deadline(start, tick)).await;
            let update = generator.live_update(clock.now());
            trace!(subscription = %task_shared.id, tick, "Delivering live update");
            if !task_shared.deliver(update) {
                break;
            }
        }
    });

    // Only fails if already set, which cannot happen for a fresh subscription
    let _ = shared.task.set(join.abort_handle());

    let handle = SubscriptionHandle {
        shared: Arc::clone(&shared),
    };
    (handle, shared)
}

/// Bounded channel feed of live updates
///
/// Dropping the feed cancels its subscription. Updates produced while the
/// buffer is full are discarded, since only the latest value matters.
pub struct LiveFeed {
    receiver: mpsc::Receiver<LiveUpdate>,
    handle: SubscriptionHandle,
}

impl fmt::Debug for LiveFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveFeed")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl LiveFeed {
    /// Create a sender callback and the receiver half of a feed
    pub(crate) fn channel() -> (LiveCallback, mpsc::Receiver<LiveUpdate>) {
        let (sender, receiver) = mpsc::channel(LIVE_FEED_CAPACITY);
        let callback: LiveCallback = Box::new(move |update| {
            if let Err(e) = sender.try_send(update) {
                trace!("Live update dropped: {e}");
            }
        });
        (callback, receiver)
    }

    pub(crate) const fn new(
        receiver: mpsc::Receiver<LiveUpdate>,
        handle: SubscriptionHandle,
    ) -> Self {
        Self { receiver, handle }
    }

    /// Next update, or `None` once the subscription is cancelled
    ///
    /// Updates still buffered at cancellation time are never returned.
    pub async fn recv(&mut self) -> Option<LiveUpdate> {
        if self.handle.is_cancelled() {
            return None;
        }
        let update = self.receiver.recv().await?;
        if self.handle.is_cancelled() {
            None
        } else {
            Some(update)
        }
    }

    /// Handle controlling this feed's subscription
    #[must_use]
    pub const fn handle(&self) -> &SubscriptionHandle {
        &self.handle
    }

    /// Cancel the underlying subscription
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// Adapt into a `Stream` that ends on cancellation
    pub fn into_stream(self) -> impl Stream<Item = LiveUpdate> + Send {
        async_stream::stream! {
            let mut feed = self;
            while let Some(update) = feed.recv().await {
                yield update;
            }
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

/// Subscriptions created by one provider
#[derive(Default)]
pub(crate) struct SubscriptionRegistry {
    entries: Mutex<Vec<Arc<SubscriptionShared>>>,
}

impl SubscriptionRegistry {
    pub(crate) fn register(&self, shared: Arc<SubscriptionShared>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|entry| !entry.is_cancelled());
        entries.push(shared);
    }

    /// Live subscriptions not yet cancelled
    pub(crate) fn active_count(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|entry| !entry.is_cancelled());
        entries.len()
    }

    /// Cancel everything; returns how many were live
    pub(crate) fn cancel_all(&self) -> usize {
        let drained: Vec<_> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        let mut cancelled = 0;
        for entry in drained.into_iter().filter(|entry| !entry.is_cancelled()) {
            entry.cancel();
            cancelled += 1;
        }
        cancelled
    }
}
