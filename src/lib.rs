//! StackIt - a terminal client for the StackIt question-and-answer forum
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod router;
pub mod session;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
