//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each takes the shared [`ApiClient`]
//! trait object plus its command's arguments.

mod graph;
mod list;
mod show;

pub use graph::{run_graph, GraphKind};
pub use list::{run_list, run_tags};
pub use show::{run_scan, run_show};

pub use crate::client::ApiClient;
