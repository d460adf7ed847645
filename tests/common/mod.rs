//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_catalog;
pub mod gated_source;
pub mod mock_backend;

use anidex::api::{Anime, Character, Genre};
use anidex::ui::Observable;
use std::net::TcpListener;
use std::time::{Duration, Instant};

pub const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Poll `observable` until `predicate` holds or the wait times out.
pub async fn wait_for<S, F>(observable: &Observable<S>, predicate: F) -> bool
where
    S: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&S) -> bool,
{
    let start = Instant::now();
    while start.elapsed() < WAIT_TIMEOUT {
        if predicate(&observable.get()) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    predicate(&observable.get())
}

/// Let spawned tasks run for a moment without expecting any change.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

// -- Fixtures -----------------------------------------------------------------

pub fn anime(id: i64, title: &str) -> Anime {
    Anime::new(id, title)
}

pub fn character(id: i64, name: &str) -> Character {
    Character::new(id, name)
}

pub fn action() -> Genre {
    Genre::new(1, "Action")
}

pub fn titles(items: &[Anime]) -> Vec<&str> {
    items.iter().map(|a| a.title.as_str()).collect()
}
