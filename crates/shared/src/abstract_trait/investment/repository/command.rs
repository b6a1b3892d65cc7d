use crate::{
    domain::requests::CreateInvestmentRequest, errors::RepositoryError,
    model::investment::InvestmentModel,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynInvestmentCommandRepository = Arc<dyn InvestmentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InvestmentCommandRepositoryTrait {
    async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<InvestmentModel, RepositoryError>;

    /// Adds `amount` to the stored value in a single atomic update.
    async fn apply_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError>;

    /// Subtracts `amount` from the stored value; the update only matches
    /// rows whose value covers the amount, so the row is untouched when
    /// the balance is insufficient (reported as `NotFound`).
    async fn withdraw_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
