//! # Synz Architecture
//!
//! Synz is a **UI-agnostic synonym dictionary library**: a flat text file
//! of `word | syn1, syn2` lines, loaded whole into memory, mutated there,
//! and written back whole. The CLI binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
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
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic on the in-memory store               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - SynonymStore: the ordered in-memory collection           │
//! │  - store::fs: whole-file load/save boundary                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. File access
//! happens only in `store::fs`, scoped to a single load or save.
//!
//! ## Comparison semantics
//!
//! Word lookup is case-insensitive everywhere, through one shared fold
//! ([`model::fold`]). Synonym removal matches exactly, case-sensitive.
//! That asymmetry is intentional and pinned by tests; see the `store`
//! module docs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The in-memory store and the file load/save boundary
//! - [`model`]: Core data types (`Entry`, the line format)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `args`: Argument parsing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
