use crate::{errors::RepositoryError, model::investment::InvestmentModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvestmentQueryRepository = Arc<dyn InvestmentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InvestmentQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<InvestmentModel>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<InvestmentModel, RepositoryError>;

    /// Exact-name lookup. Returns `None` when no record carries the name,
    /// so callers can probe for absence without treating it as an error.
    async fn find_by_name(&self, name: &str) -> Result<Option<InvestmentModel>, RepositoryError>;

    async fn search_by_name(&self, name: &str) -> Result<Vec<InvestmentModel>, RepositoryError>;
}
