//! Networking modules for the scrape and auth services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `search` sequences them into the product search
//! flow, `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod search;
pub mod types;
