//! Tool-augmented mentor chat: a keyword heuristic selects between a two-hop
//! tool path and a plain completion. Every tool-path failure falls back to the
//! plain completion; the caller never sees tool exceptions.

pub mod chat;
pub mod handlers;
pub mod tools;
