//! # Internity Architecture
//!
//! Internity keeps track of internship applications: company, role, deadline,
//! pay and where each application stands. The library holds all of the logic;
//! the `internity` binary is a thin line-command client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses line commands, renders tables and the dashboard   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the list and the storage backend                    │
//! │  - Saves after every mutating command                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user command                              │
//! │  - Works on an InternshipList, returns a CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (list.rs) and Storage Layer (store/)          │
//! │  - InternshipList: ordered records plus username            │
//! │  - Storage trait: FileStorage (production), InMemoryStorage │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never prints and never exits. Diagnostics go through `tracing`; the binary
//! decides where they end up.
//!
//! ## Indexes
//!
//! Internships are addressed by their 1-based position in the list, which
//! shifts after a delete. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`list`]: The in-memory record store
//! - [`store`]: Storage trait, file format and backends
//! - [`model`]: `Internship`, `Deadline`, `Status` and field validation
//! - [`index`]: User-facing indexes
//! - [`config`]: Configuration file and data path resolution
//! - [`error`]: Error types
//! - `cli`: Line parsing, rendering and the interactive session (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod model;
pub mod store;
