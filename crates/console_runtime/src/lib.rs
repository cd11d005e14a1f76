//! Reducer-driven session runtime for the terminal-portfolio console.
//!
//! The session aggregate (transcript, history, cursor, input buffer) advances
//! only through [`reducer::reduce_session`]; the [`session::ConsoleSession`]
//! driver orchestrates parsing and dispatch on top of it and executes the
//! emitted side-effect intents (history persistence).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod persistence;
pub mod reducer;
pub mod session;

pub use persistence::{
    HistoryStore, JsonFileHistoryStore, MemoryHistoryStore, HISTORY_STORAGE_KEY,
};
pub use reducer::{
    reduce_session, HistoryDirection, SessionAction, SessionEffect, SessionState, HISTORY_LIMIT,
};
pub use session::ConsoleSession;
