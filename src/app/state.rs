use crate::core::generation::ContentService;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: ContentService,
}

impl AppState {
    pub fn new(service: ContentService) -> Self {
        Self { service }
    }
}
