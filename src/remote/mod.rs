//! Remote music service access.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  ExportPipeline                          │
//! │  (partitions refs, bulk-resolves, downloads covers)      │
//! └─────────────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │          MusicApi trait (traits.rs)                      │
//! └─────────────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  YandexClient (client.rs) → DTOs (dto.rs)                │
//! │                           → entities (adapter.rs)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! DTOs never leave this module; the pipeline hands out model entities.

pub mod adapter;
pub mod client;
pub mod cover;
pub mod dto;
pub mod pipeline;
pub mod traits;

pub use client::YandexClient;
pub use cover::DEFAULT_COVER_SIZE;
pub use pipeline::{Albumless, ExportConfig, ExportPipeline, ExportRequest, export_to_file};
pub use traits::{CoverSession, MusicApi};
