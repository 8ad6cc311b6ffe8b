//! # Stickies Architecture
//!
//! Stickies is a **UI-agnostic sticky-notes board**. The terminal session in `cli/` is one
//! client of the library; the board itself knows nothing about terminals, pointers or files
//! beyond what an export sink asks for.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses session lines, renders the grid, terminal I/O     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the board and its configuration                     │
//! │  - Converts user positions (1-based) into list indexes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (board.rs, drag.rs, export/)                          │
//! │  - Ordered note list with derived grid cells                │
//! │  - Drag-hover geometry, export sinks                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Grid
//!
//! Notes live in a single ordered list. Their grid cell is never stored independently: a
//! note at list index `i` sits at row `i / 3`, column `i % 3`. Every structural change
//! (add, delete, move) re-derives the cells of the whole list, so the cached `row`/`col`
//! fields on [`model::Note`] are always consistent with the order.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! The only file the core touches is the export target handed to an [`export::ExportSink`],
//! and the configuration file in [`config`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`board`]: The note-list manager
//! - [`commands`]: One module per operation
//! - [`drag`]: Drag sessions and the hover threshold
//! - [`export`]: Export records and sinks (spreadsheet, JSON)
//! - [`model`]: `Note` and `GridCell`
//! - [`config`]: Board configuration
//! - [`clipboard`]: Reading dropped text from the system clipboard
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod export;
pub mod model;
