// src/infrastructure/mod.rs
pub mod messages;
