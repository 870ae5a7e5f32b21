// src/application/ports/messages.rs
//! Message catalog port.
//!
//! The boundary translator consults the catalog only when a domain failure
//! carries no literal message. Implementations are loaded once at startup
//! and read-only afterwards.

pub trait MessageCatalog: Send + Sync {
    /// Resolve `code` (with positional `args`) against `locale`.
    ///
    /// Returns `None` when the catalog has no template for the code; the
    /// caller decides how to degrade.
    fn resolve(&self, code: &str, args: &[String], locale: &str) -> Option<String>;
}
