//! # Promptpad Architecture
//!
//! Promptpad is a **UI-agnostic prompt manager library**: create, edit, search,
//! copy and delete short title + rich-content records kept in a local
//! key-value store. The terminal client in `main.rs` is one host; a browser
//! host drawing into the DOM is another. Neither changes the core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/, wired by main.rs)                              │
//! │  - Parses arguments, prints, owns stdout/stderr/exit codes  │
//! │  - Implements Surface and Clipboard for its environment     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ Command
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (app.rs)                                        │
//! │  - One owned App per session, one Command at a time         │
//! │  - Editor panel (editor.rs), list (render.rs), panel.rs     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - Ordered collection + selection, write-through            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: FileStore, InMemoryStore (testing)  │
//! │  - PromptStore: JSON collection under one namespaced key    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything below the host takes Rust values and returns Rust values. The
//! core never prints and never exits. Store and clipboard failures are logged
//! through `tracing` and swallowed; only save validation reaches the user,
//! as an alert on the surface.
//!
//! ## Module Overview
//!
//! - [`app`]: The dispatcher and the `Command` enum
//! - [`repository`]: The prompt collection and selection
//! - [`store`]: Storage abstraction and implementations
//! - [`editor`]: Title/content field handling
//! - [`render`]: List view projection and HTML fragment
//! - [`panel`]: Side panel state machine
//! - [`surface`]: The rendering surface trait
//! - [`clipboard`]: Clipboard trait and system clipboard
//! - [`markup`]: Plain text from rich markup
//! - [`model`]: Core data types (`Prompt`, `PromptId`, `PromptDraft`)
//! - [`index`]: Display indexes for terminal hosts
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod markup;
pub mod model;
pub mod panel;
pub mod render;
pub mod repository;
pub mod store;
pub mod surface;
