//! # Wares Architecture
//!
//! Wares is a **UI-agnostic inventory library**. The interactive menu is one
//! client of the library, not the other way around.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, raw stdin reads, output formatting            │
//! │  - The ONLY place that knows about a terminal               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - InventoryApi: owns the Inventory value and the store     │
//! │  - Dispatches to commands, returns structured Results       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation; pure logic over model types    │
//! │  - Validates, mutates, persists; never prints               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - InventoryStore trait                                     │
//! │  - FileStore (production JSON), InMemoryStore (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout, stderr, or
//! `std::process::exit`. The only side effect is the explicit persistence
//! call after each successful mutation: the in-memory [`model::Inventory`]
//! is the source of truth for the life of the process, and the JSON
//! document on disk trails it by at most one operation.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `Inventory`, `StockAction`)
//! - [`error`]: Error types
//! - [`cli`]: Menu loop and printing for the binary

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
