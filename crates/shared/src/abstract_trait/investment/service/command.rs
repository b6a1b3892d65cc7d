use crate::{
    domain::{
        requests::{AmountRequest, CreateInvestmentRequest},
        responses::{ApiResponse, InvestmentResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvestmentCommandService = Arc<dyn InvestmentCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait InvestmentCommandServiceTrait {
    async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError>;

    async fn apply(
        &self,
        id: i32,
        request: &AmountRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError>;

    async fn withdraw(
        &self,
        id: i32,
        request: &AmountRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError>;

    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
