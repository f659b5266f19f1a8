//! Model-View-Intent (MVI) primitives for screen-local state.
//!
//! ```text
//! Key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                          │
//!     └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to draw itself
//! - **Intent**: a key press or an async result, already interpreted
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
