//! Terminal storefront client.
//!
//! An event-driven shop front: a typed publish/subscribe bus connects
//! one application-state singleton to a set of ratatui view components.
//! State changes and user intents only ever meet in the orchestration
//! layer (`ui::app`), never directly.

pub mod api;
pub mod bus;
pub mod catalog;
pub mod config;
pub mod events;
pub mod logging;
pub mod net;
pub mod state;
pub mod ui;
