//! Asynchronous user fetch service.
//!
//! The fetch runs on the tokio runtime while the event loop keeps drawing
//! the loading indicator. The service hands back a [`FetchHandle`] wrapping
//! a oneshot channel; the owning screen polls it once per tick.
//!
//! An in-flight fetch is never cancelled: if the user navigates away the
//! handle is dropped and the eventual result goes unobserved.

use tokio::runtime::Runtime;
use tokio::sync::oneshot;

use crate::api::{ApiError, UserApiClient, UserRecord};

/// Handle for polling completion of a spawned fetch.
pub struct FetchHandle {
    receiver: oneshot::Receiver<Result<Vec<UserRecord>, ApiError>>,
}

impl FetchHandle {
    /// Try to receive the fetch result without blocking.
    pub fn try_recv(&mut self) -> Option<Result<Vec<UserRecord>, ApiError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ApiError::Cancelled)),
        }
    }
}

/// Service that spawns user fetches onto the runtime.
pub struct FetchService;

impl FetchService {
    /// Start fetching a batch of users asynchronously.
    ///
    /// Returns a `FetchHandle` that can be polled for the result.
    pub fn start(runtime: &Runtime, client: UserApiClient, batch_size: u64) -> FetchHandle {
        let (sender, receiver) = oneshot::channel();

        runtime.spawn(async move {
            let result = client.fetch_users(batch_size).await;
            let _ = sender.send(result);
        });

        FetchHandle { receiver }
    }
}
