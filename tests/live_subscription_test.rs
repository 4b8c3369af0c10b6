// ABOUTME: Integration tests for live telemetry subscriptions
// ABOUTME: Verifies tick cadence, cancellation guarantees, feeds and disconnect policy on paused time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use futures_util::StreamExt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vitalsync::constants::ranges;
use vitalsync::models::LiveUpdate;
use vitalsync::providers::{Clock, ConnectionPolicy, LiveCallback, WearableProvider};

fn collecting_callback() -> (LiveCallback, Arc<Mutex<Vec<LiveUpdate>>>) {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&updates);
    let callback: LiveCallback = Box::new(move |update| sink.lock().unwrap().push(update));
    (callback, updates)
}

#[tokio::test(start_paused = true)]
async fn test_updates_arrive_once_per_interval() {
    let provider = common::test_provider();
    let (callback, updates) = collecting_callback();

    let handle = provider.subscribe_to_real_time_data(callback);

    tokio::time::sleep(common::TEST_LIVE_INTERVAL / 2).await;
    assert!(updates.lock().unwrap().is_empty());

    common::sleep_ticks(3).await;
    assert_eq!(updates.lock().unwrap().len(), 3);

    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_live_values_within_ranges() {
    let provider = common::test_provider();
    let (callback, updates) = collecting_callback();
    let handle = provider.subscribe_to_real_time_data(callback);

    common::sleep_ticks(20).await;
    handle.cancel();

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 20);
    for update in updates.iter() {
        assert!(ranges::LIVE_HEART_RATE.contains(&update.heart_rate));
        assert!(ranges::LIVE_STRESS.contains(&update.stress));
        assert_eq!(update.timestamp, common::test_clock().now());
    }
}

#[tokio::test(start_paused = true)]
async fn test_no_updates_after_cancel() {
    let provider = common::test_provider();
    let (callback, updates) = collecting_callback();
    let handle = provider.subscribe_to_real_time_data(callback);

    common::sleep_ticks(2).await;
    handle.cancel();
    assert!(handle.is_cancelled());
    let delivered = updates.lock().unwrap().len();

    common::sleep_ticks(10).await;
    assert_eq!(updates.lock().unwrap().len(), delivered);

    // Cancelling twice is harmless
    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_callback_can_cancel_its_own_subscription() {
    let provider = common::test_provider();
    let calls = Arc::new(AtomicUsize::new(0));
    let handle_slot: Arc<Mutex<Option<vitalsync::providers::SubscriptionHandle>>> =
        Arc::new(Mutex::new(None));

    let counter = Arc::clone(&calls);
    let slot = Arc::clone(&handle_slot);
    let handle = provider.subscribe_to_real_time_data(Box::new(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 1 {
            if let Some(handle) = slot.lock().unwrap().as_ref() {
                handle.cancel();
            }
        }
    }));
    *handle_slot.lock().unwrap() = Some(handle.clone());

    common::sleep_ticks(6).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(handle.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_subscriptions_are_independent() {
    let provider = common::test_provider();
    let (first_callback, first) = collecting_callback();
    let (second_callback, second) = collecting_callback();

    let first_handle = provider.subscribe_to_real_time_data(first_callback);
    let second_handle = provider.subscribe_to_real_time_data(second_callback);
    assert_ne!(first_handle.id(), second_handle.id());
    assert_eq!(provider.connection_status().active_subscriptions, 2);

    common::sleep_ticks(1).await;
    first_handle.cancel();
    common::sleep_ticks(2).await;

    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(second.lock().unwrap().len(), 3);
    assert_eq!(provider.connection_status().active_subscriptions, 1);

    second_handle.cancel();
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(start_paused = true)]
async fn test_subscription_survives_disconnect_by_default() {
    let provider = common::test_provider();
    provider.connect().await.unwrap();
    let (callback, updates) = collecting_callback();
    let handle = provider.subscribe_to_real_time_data(callback);

    common::sleep_ticks(1).await;
    provider.disconnect();

    assert!(provider.get_current_metrics().await.unwrap_err().is_not_connected());
    common::sleep_ticks(2).await;
    assert_eq!(updates.lock().unwrap().len(), 3);
    assert!(!handle.is_cancelled());

    handle.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_strict_policy_cancels_on_disconnect() {
    let provider = common::test_provider_builder()
        .policy(ConnectionPolicy::strict())
        .build();
    provider.connect().await.unwrap();
    let (callback, updates) = collecting_callback();
    let handle = provider.subscribe_to_real_time_data(callback);

    common::sleep_ticks(1).await;
    provider.disconnect();
    common::sleep_ticks(3).await;

    assert!(handle.is_cancelled());
    assert_eq!(updates.lock().unwrap().len(), 1);
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(start_paused = true)]
async fn test_feed_receives_updates_until_cancelled() {
    let provider = common::test_provider();
    let mut feed = provider.subscribe();

    let first = feed.recv().await.unwrap();
    assert!(ranges::LIVE_HEART_RATE.contains(&first.heart_rate));
    assert!(feed.recv().await.is_some());

    feed.cancel();
    assert!(feed.recv().await.is_none());
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_feed_cancels_subscription() {
    let provider = common::test_provider();
    let feed = provider.subscribe();
    let handle = feed.handle().clone();

    drop(feed);

    assert!(handle.is_cancelled());
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(start_paused = true)]
async fn test_feed_as_stream() {
    let provider = common::test_provider();
    let feed = provider.subscribe();

    let updates: Vec<LiveUpdate> = feed.into_stream().take(4).collect().await;

    assert_eq!(updates.len(), 4);
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cancel_waits_for_callback_running_on_another_thread() {
    let provider = common::test_provider_builder()
        .live_interval(Duration::from_millis(5))
        .build();
    let entered = Arc::new(AtomicBool::new(false));
    let finished = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));

    let (entered_flag, finished_flag, counter) =
        (Arc::clone(&entered), Arc::clone(&finished), Arc::clone(&calls));
    let handle = provider.subscribe_to_real_time_data(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        finished_flag.store(false, Ordering::SeqCst);
        entered_flag.store(true, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        finished_flag.store(true, Ordering::SeqCst);
    }));

    while !entered.load(Ordering::SeqCst) {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    handle.cancel();
    assert!(finished.load(Ordering::SeqCst));

    let calls_at_cancel = calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(calls.load(Ordering::SeqCst), calls_at_cancel);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_invocation_starts_after_cancel_returns_across_threads() {
    let provider = common::test_provider_builder()
        .live_interval(Duration::from_millis(1))
        .build();
    let late_calls = Arc::new(AtomicUsize::new(0));

    let subscriptions: Vec<_> = (0..200)
        .map(|_| {
            let returned = Arc::new(AtomicBool::new(false));
            let (returned_flag, late) = (Arc::clone(&returned), Arc::clone(&late_calls));
            let handle = provider.subscribe_to_real_time_data(Box::new(move |_| {
                if returned_flag.load(Ordering::SeqCst) {
                    late.fetch_add(1, Ordering::SeqCst);
                }
            }));
            (handle, returned)
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(20)).await;
    for (handle, returned) in &subscriptions {
        handle.cancel();
        returned.store(true, Ordering::SeqCst);
    }
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(late_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.connection_status().active_subscriptions, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_self_cancel_on_multi_thread_runtime() {
    let provider = common::test_provider_builder()
        .live_interval(Duration::from_millis(2))
        .build();
    let calls = Arc::new(AtomicUsize::new(0));
    let handle_slot: Arc<Mutex<Option<vitalsync::providers::SubscriptionHandle>>> =
        Arc::new(Mutex::new(None));

    let (counter, slot) = (Arc::clone(&calls), Arc::clone(&handle_slot));
    let handle = provider.subscribe_to_real_time_data(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = slot.lock().unwrap().as_ref() {
            handle.cancel();
        }
    }));
    *handle_slot.lock().unwrap() = Some(handle.clone());

    while !handle.is_cancelled() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    let calls_at_cancel = calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(calls_at_cancel >= 1);
    assert_eq!(calls.load(Ordering::SeqCst), calls_at_cancel);
}
