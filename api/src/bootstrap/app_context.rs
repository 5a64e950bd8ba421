use std::sync::Arc;

use crate::application::ports::book_repository::BookRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    book_repo: Arc<dyn BookRepository>,
}

impl AppServices {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn book_repo(&self) -> Arc<dyn BookRepository> {
        self.services.book_repo.clone()
    }
}
