// src/presentation/http/middleware/mod.rs
pub mod boundary;
