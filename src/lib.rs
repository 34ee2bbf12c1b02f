//! Character list browser (charlist)
//!
//! TUI application that pages through a remote character catalogue, filters
//! it by name and favorites, and keeps a favorite count badge up to date.
//!
//! Pure Core / Impure Shell: `model`, `favorites` and `state` hold no I/O;
//! `source` talks to the network on worker threads and `view` owns the
//! terminal.

pub mod config;
pub mod favorites;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
