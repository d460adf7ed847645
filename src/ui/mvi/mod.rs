//! Model-View-Intent (MVI) primitives.
//!
//! Controllers never assign state directly: they describe what happened as
//! an intent and let a reducer derive the next state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── Controller ←─────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
