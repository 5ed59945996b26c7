//! Integration tests for the request governor's scheduling behavior,
//! driven through the public library API with virtual time.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use matchday::error::AppError;
use matchday::governor::RequestGovernor;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[test]
fn test_misconfigured_governor_is_rejected_before_any_submission() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let _guard = runtime.enter();

    assert!(matches!(
        RequestGovernor::new(0, Duration::from_secs(6)),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        RequestGovernor::new(1, Duration::ZERO),
        Err(AppError::Config(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_ten_calls_per_minute_profile() {
    // The conservative default profile: one call at a time, six seconds
    // apart. Ten submissions must spread over 54 seconds.
    let governor =
        Arc::new(RequestGovernor::new(1, Duration::from_millis(6000)).unwrap());
    let started = Instant::now();
    let stamps = Arc::new(std::sync::Mutex::new(Vec::new()));

    let submissions: Vec<_> = (0..10usize)
        .map(|i| {
            let governor = Arc::clone(&governor);
            let stamps = Arc::clone(&stamps);
            let token = CancellationToken::new();
            async move {
                governor
                    .submit(
                        move || async move {
                            stamps.lock().unwrap().push(Instant::now());
                            Ok(i)
                        },
                        &token,
                    )
                    .await
            }
        })
        .collect();

    let results = futures::future::join_all(submissions).await;
    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap(), i);
    }

    let stamps = stamps.lock().unwrap();
    assert_eq!(stamps.len(), 10);
    // Every consecutive pair of dispatches respects the spacing
    for pair in stamps.windows(2) {
        assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(6000));
    }
    // The last dispatch lands at 9 spacings, within the minute
    let total = stamps.last().unwrap().duration_since(started);
    assert!(total >= Duration::from_millis(54_000));
    assert!(total < Duration::from_millis(60_000));
}

#[tokio::test(start_paused = true)]
async fn test_wider_ceiling_still_paces_dispatches() {
    // Two slots and one second of spacing: dispatch times step by the
    // spacing even while two calls overlap in flight.
    let governor = Arc::new(RequestGovernor::new(2, Duration::from_millis(1000)).unwrap());
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let stamps = Arc::new(std::sync::Mutex::new(Vec::new()));

    let submissions: Vec<_> = (0..5usize)
        .map(|_| {
            let governor = Arc::clone(&governor);
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            let stamps = Arc::clone(&stamps);
            let token = CancellationToken::new();
            async move {
                governor
                    .submit(
                        move || async move {
                            stamps.lock().unwrap().push(Instant::now());
                            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                            peak.fetch_max(now, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(2500)).await;
                            in_flight.fetch_sub(1, Ordering::SeqCst);
                            Ok(())
                        },
                        &token,
                    )
                    .await
            }
        })
        .collect();

    let results = futures::future::join_all(submissions).await;
    assert!(results.into_iter().all(|r| r.is_ok()));
    assert!(peak.load(Ordering::SeqCst) <= 2);

    let stamps = stamps.lock().unwrap();
    for pair in stamps.windows(2) {
        assert!(
            pair[1].duration_since(pair[0]) >= Duration::from_millis(1000),
            "pacing applies even with free slots"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_queue_tail_never_runs() {
    let governor = Arc::new(RequestGovernor::new(1, Duration::from_millis(5000)).unwrap());
    let ran = Arc::new(AtomicUsize::new(0));

    // Occupy the first dispatch slot
    let head_token = CancellationToken::new();
    let head = {
        let governor = Arc::clone(&governor);
        let ran = Arc::clone(&ran);
        tokio::spawn(async move {
            governor
                .submit(
                    move || async move {
                        ran.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    },
                    &head_token,
                )
                .await
        })
    };
    tokio::task::yield_now().await;

    // Queue three more and abandon them all before their turn
    let tail_token = CancellationToken::new();
    let tails: Vec<_> = (0..3)
        .map(|_| {
            let governor = Arc::clone(&governor);
            let ran = Arc::clone(&ran);
            let token = tail_token.clone();
            tokio::spawn(async move {
                governor
                    .submit(
                        move || async move {
                            ran.fetch_add(1, Ordering::SeqCst);
                            Ok(())
                        },
                        &token,
                    )
                    .await
            })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(100)).await;
    tail_token.cancel();

    head.await.unwrap().unwrap();
    for tail in tails {
        assert!(matches!(
            tail.await.unwrap(),
            Err(AppError::RequestCancelled)
        ));
    }

    // Give the dispatcher time to walk past the cancelled entries
    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(ran.load(Ordering::SeqCst), 1, "only the head ever ran");
}
