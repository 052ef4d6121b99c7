/// Frontend-facing layer: commands, state, events, transitions

pub mod commands;
pub mod events;
pub mod state;
pub mod store;
pub mod transition;

// Re-export commonly used types
pub use state::AppState;
pub use store::StoreCell;
