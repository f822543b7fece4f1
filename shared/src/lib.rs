//! Shared utilities and common types for the Yuva server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Common type definitions

pub mod config;
pub mod types;
