//! Browser client for the Hack or Snooze story-sharing API.
//!
//! [`api`] wraps the remote resources, [`controller`] runs the page's workflows,
//! and [`components`] renders [`state::AppState`] with yew.

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod session;
pub mod state;
pub mod util;
