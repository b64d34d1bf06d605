//! Layer precedence for configuration sources.

pub mod merge_policy;
