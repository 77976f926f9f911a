//! # Cards Architecture
//!
//! Cards is a small task tracker: a document store of cards (summary, owner, state)
//! with a command-line client on top. The library is UI-agnostic; the CLI is one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filter (filter.rs)          │
//! │  - Card semantics on top of untyped records                 │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns `Result` values,
//! never writes to stdout/stderr and never exits the process. Diagnostics go through
//! the `log` facade; only the binary installs a logger.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`filter`]: Owner/state filtering used by listing
//! - [`store`]: Document store abstraction and implementations
//! - [`model`]: `Card`, `CardState`, `NewCard`, `CardPatch`
//! - [`config`]: Environment-based configuration
//! - [`init`]: Opens the configured database
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
