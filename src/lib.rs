//! Record editor session client.
//!
//! The browser-free core of a JSON record editor: a session controller that
//! keeps an original/modified buffer pair synchronized with a remote record
//! store over HTTP, manages a version selector and backend-held undo/redo
//! history, and derives which editing actions are currently permitted.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
