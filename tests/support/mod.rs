// tests/support/mod.rs
// Shared support code for the integration test binaries. Some symbols are
// unused in individual test crates; allow the resulting warnings to keep CI
// output clean.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
