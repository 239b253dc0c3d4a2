//! Browser-boundary helpers.

pub mod page_config;
