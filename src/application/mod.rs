// src/application/mod.rs
pub mod ports;
