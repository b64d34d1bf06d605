//! Property-based tests for the codec laws

mod probe_soundness;
mod round_trip;
mod strategies;
