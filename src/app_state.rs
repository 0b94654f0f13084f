use crate::{
    checks::CheckRunner,
    fetcher::PageSource,
    repositories::{CheckRepository, CheckRepositoryTrait, UrlRepository, UrlRepositoryTrait},
    urls::UrlService,
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub url_repo: Arc<dyn UrlRepositoryTrait>,
    pub check_repo: Arc<dyn CheckRepositoryTrait>,
    pub pages: Arc<dyn PageSource>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, pages: Arc<dyn PageSource>) -> Self {
        Self {
            url_repo: Arc::new(UrlRepository::new(pool.clone())),
            check_repo: Arc::new(CheckRepository::new(pool.clone())),
            pages,
            db_pool: pool,
        }
    }

    pub fn url_service(&self) -> UrlService {
        UrlService::new(self.url_repo.clone(), self.check_repo.clone())
    }

    pub fn check_runner(&self) -> CheckRunner {
        CheckRunner::new(
            self.url_repo.clone(),
            self.check_repo.clone(),
            self.pages.clone(),
        )
    }
}
