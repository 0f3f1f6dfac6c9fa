//! ud-dashboard library
//!
//! HTTP client, view state, renderer and shell for the user dashboard.

pub mod cli;
pub mod client;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod logger;
pub mod shell;
pub mod state;
pub mod view;


pub use client::{CliClientResult, Client, ClientError};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result as DashboardErrorResult};
pub use shell::{ParseCommandError, ShellCommand};
pub use state::DashboardState;
pub use view::render;
