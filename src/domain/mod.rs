// src/domain/mod.rs
pub mod assert;
pub mod codes;
pub mod errors;
