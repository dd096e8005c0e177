//! Converse: conversation display built from per-entry segments.
//!
//! A `Conversation` is an ordered list of entries. Each entry is rendered by
//! one `Segment` that owns a layer in a `LayerTree`, an optional assistant
//! label, and exactly one child view chosen by classification.

pub mod config;
pub mod conversation;
pub mod error;
pub mod layer;
pub mod segments;
pub mod stack;
