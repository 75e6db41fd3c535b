//! Catalog Server
//!
//! A small REST JSON API over an in-memory library catalog: list, fetch and
//! create books, check copies out and return them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the store and services described by `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.catalog.seed {
            Repository::seeded()
        } else {
            Repository::default()
        };
        Self::with_repository(config, repository)
    }

    /// Build services over an existing store
    pub fn with_repository(config: AppConfig, repository: Repository) -> Self {
        Self {
            services: Arc::new(Services::new(repository, &config.catalog)),
        }
    }
}
