use crate::{
    domain::responses::{ApiResponse, InvestmentResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvestmentQueryService = Arc<dyn InvestmentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait InvestmentQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<InvestmentResponse>>, ServiceError>;

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError>;

    async fn search_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<Vec<InvestmentResponse>>, ServiceError>;
}
