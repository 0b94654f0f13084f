pub mod app_state;
pub mod checks;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod handlers;
pub mod health;
pub mod repositories;
pub mod urls;
