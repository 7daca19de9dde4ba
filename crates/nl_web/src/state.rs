use std::sync::Arc;
use nl_core::Settings;
use nl_newsletter::NewsletterService;

pub struct AppState {
    pub service: Arc<NewsletterService>,
}

impl AppState {
    pub fn new(service: Arc<NewsletterService>) -> Self {
        Self { service }
    }

    pub fn settings(&self) -> &Settings {
        self.service.settings()
    }
}
