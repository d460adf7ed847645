//! A list/detail source whose requests complete only when the test says so.
//!
//! Every call parks on a oneshot channel. Tests resolve calls in any order,
//! which makes overlapping-request races deterministic.

#![allow(dead_code)]

use anidex::api::{ApiError, CatalogEntity};
use anidex::controller::{DetailSource, ListSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

use super::WAIT_TIMEOUT;

/// A request received by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Top,
    Search(String),
    Genre(i64),
    Detail(i64),
}

type Reply<E> = Result<Vec<E>, ApiError>;

struct GateState<E> {
    calls: Vec<Call>,
    pending: Vec<(Call, oneshot::Sender<Reply<E>>)>,
}

pub struct GatedSource<E> {
    state: Arc<Mutex<GateState<E>>>,
}

impl<E> Clone for GatedSource<E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<E: CatalogEntity> GatedSource<E> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(GateState {
                calls: Vec::new(),
                pending: Vec::new(),
            })),
        }
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Wait until `count` calls are parked.
    pub async fn wait_pending(&self, count: usize) -> bool {
        let start = Instant::now();
        while start.elapsed() < WAIT_TIMEOUT {
            if self.pending_count() >= count {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    /// Complete the oldest parked call equal to `call`.
    ///
    /// Returns false if no such call is parked or its requester is gone.
    pub fn resolve(&self, call: &Call, reply: Reply<E>) -> bool {
        let sender = {
            let mut state = self.state.lock();
            let Some(index) = state.pending.iter().position(|(c, _)| c == call) else {
                return false;
            };
            state.pending.remove(index).1
        };
        sender.send(reply).is_ok()
    }

    async fn park(&self, call: Call) -> Reply<E> {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.lock();
            state.calls.push(call.clone());
            state.pending.push((call, tx));
        }
        rx.await.unwrap_or_else(|_| {
            Err(ApiError::Status {
                status: 599,
                message: "gate dropped".to_string(),
            })
        })
    }
}

#[async_trait]
impl<E: CatalogEntity> ListSource for GatedSource<E> {
    type Item = E;

    async fn fetch_top(&self) -> Result<Vec<E>, ApiError> {
        self.park(Call::Top).await
    }

    async fn search(&self, query: &str) -> Result<Vec<E>, ApiError> {
        self.park(Call::Search(query.to_string())).await
    }

    async fn fetch_by_genre(&self, genre_id: i64) -> Result<Vec<E>, ApiError> {
        self.park(Call::Genre(genre_id)).await
    }
}

#[async_trait]
impl<E: CatalogEntity> DetailSource for GatedSource<E> {
    type Item = E;

    async fn fetch_by_id(&self, id: i64) -> Result<E, ApiError> {
        let mut items = self.park(Call::Detail(id)).await?;
        if items.is_empty() {
            return Err(ApiError::Status {
                status: 404,
                message: "Resource does not exist".to_string(),
            });
        }
        Ok(items.remove(0))
    }
}
