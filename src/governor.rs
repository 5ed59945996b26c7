//! Outbound request governor
//!
//! Every call to the football data provider goes through a single
//! [`RequestGovernor`]. The governor admits at most a configured number of
//! calls at once and enforces a minimum wall-clock spacing between two
//! dispatches, so a burst of concurrent fetches from the rest of the
//! application never exceeds the provider's per-minute quota.
//!
//! Submitted work is dispatched strictly in submission order. A caller can
//! abandon a request at any point through a [`CancellationToken`]; an
//! abandoned request that has not been dispatched yet is dropped without
//! ever touching the network.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::AppError;

/// A queued request waiting for its dispatch turn. The dispatcher hands the
/// submitter an admission permit through `permit_tx` when the request may
/// start; dropping the sender instead tells the submitter it was skipped.
struct QueuedItem {
    permit_tx: oneshot::Sender<OwnedSemaphorePermit>,
    token: CancellationToken,
}

/// Serializes and paces outbound API calls.
///
/// The governor owns only scheduling state. The outcome of each call belongs
/// to the caller of [`submit`](RequestGovernor::submit); failures of the
/// wrapped call pass through unchanged and retries are the caller's business.
pub struct RequestGovernor {
    queue_tx: mpsc::UnboundedSender<QueuedItem>,
    max_concurrent: usize,
    dispatch_interval: Duration,
}

impl std::fmt::Debug for RequestGovernor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGovernor")
            .field("max_concurrent", &self.max_concurrent)
            .field("dispatch_interval", &self.dispatch_interval)
            .finish()
    }
}

impl RequestGovernor {
    /// Creates a governor with the given concurrency ceiling and minimum
    /// spacing between dispatches, and starts its dispatcher task.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// * `AppError::Config` - `max_concurrent` is zero or `dispatch_interval`
    ///   is zero; both would make the governor misconfigured rather than slow
    pub fn new(max_concurrent: usize, dispatch_interval: Duration) -> Result<Self, AppError> {
        if max_concurrent == 0 {
            return Err(AppError::config_error(
                "max_concurrent_requests must be at least 1",
            ));
        }
        if dispatch_interval.is_zero() {
            return Err(AppError::config_error(
                "request_spacing_ms must be greater than 0",
            ));
        }

        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let slots = Arc::new(Semaphore::new(max_concurrent));
        tokio::spawn(run_dispatcher(queue_rx, slots, dispatch_interval));

        Ok(Self {
            queue_tx,
            max_concurrent,
            dispatch_interval,
        })
    }

    /// The configured concurrency ceiling
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// The configured minimum spacing between two dispatches
    pub fn dispatch_interval(&self) -> Duration {
        self.dispatch_interval
    }

    /// Submits one outbound call and waits for its outcome.
    ///
    /// `work` is invoked at most once, after the request has been admitted
    /// and the pacing delay since the previous dispatch has elapsed. The
    /// returned future resolves with `work`'s own result, or with
    /// `AppError::RequestCancelled` if `token` fires first.
    ///
    /// Cancelling after dispatch does not abort the call at the transport
    /// level: the call runs to settlement on its own task and releases its
    /// admission slot only once it settles. Callers that need a hard abort
    /// must thread the same token into `work` itself.
    pub async fn submit<F, Fut, T>(
        &self,
        work: F,
        token: &CancellationToken,
    ) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
        T: Send + 'static,
    {
        // A token that is already signalled never enters the queue.
        if token.is_cancelled() {
            return Err(AppError::RequestCancelled);
        }

        let (permit_tx, permit_rx) = oneshot::channel();
        self.queue_tx
            .send(QueuedItem {
                permit_tx,
                token: token.clone(),
            })
            .map_err(|_| AppError::config_error("request governor dispatcher is gone"))?;

        // Wait for dispatch, racing the cancellation token. If the token wins
        // the dispatcher later finds the stale entry and skips it.
        let permit = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(AppError::RequestCancelled),
            permit = permit_rx => permit.map_err(|_| AppError::RequestCancelled)?,
        };

        debug!("Dispatching governed request");

        // The call settles on its own task so that a caller losing interest
        // mid-flight gets its cancellation error immediately while the
        // admission slot stays held until the call actually settles.
        let in_flight = tokio::spawn(async move {
            let outcome = work().await;
            drop(permit);
            outcome
        });

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(AppError::RequestCancelled),
            settled = in_flight => match settled {
                Ok(outcome) => outcome,
                Err(join_error) => Err(AppError::TaskJoin(join_error.to_string())),
            },
        }
    }
}

/// Dispatcher loop: pops queued requests in FIFO order, waits for a free
/// admission slot, then waits out the pacing interval before handing over
/// the permit. Cancelled entries are skipped without consuming a pacing
/// turn. Exits when the governor handle is dropped.
async fn run_dispatcher(
    mut queue_rx: mpsc::UnboundedReceiver<QueuedItem>,
    slots: Arc<Semaphore>,
    dispatch_interval: Duration,
) {
    let mut next_dispatch = Instant::now();

    while let Some(item) = queue_rx.recv().await {
        if item.token.is_cancelled() {
            debug!("Skipping request cancelled while queued");
            continue;
        }

        let permit = match slots.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        tokio::time::sleep_until(next_dispatch).await;

        // Re-check after the waits above; a request abandoned while we were
        // pacing must not reach the network.
        if item.token.is_cancelled() {
            debug!("Skipping request cancelled during pacing wait");
            continue;
        }

        if item.permit_tx.send(permit).is_err() {
            // Submitter is gone (cancelled between our check and the send).
            // The permit travels back with the failed send and frees the slot.
            continue;
        }

        next_dispatch = Instant::now() + dispatch_interval;
    }
}
