//! Foundation types and traits for the badge view.
//!
//! This crate contains the host-agnostic types the widget layer is built on:
//! colors, font metrics, the render backend trait, measure specs,
//! configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod measure;
