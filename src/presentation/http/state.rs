// src/presentation/http/state.rs
use crate::application::ports::MessageCatalogPort;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub catalog: Arc<MessageCatalogPort>,
    pub default_locale: String,
}
