// src/application/ports/mod.rs
pub mod messages;

// Type alias to make port injection sites more descriptive and reduce `dyn` noise
pub type MessageCatalogPort = dyn messages::MessageCatalog;
