//! In-memory repository double backing the service tests.

use crate::{
    abstract_trait::investment::repository::{
        command::InvestmentCommandRepositoryTrait, query::InvestmentQueryRepositoryTrait,
    },
    domain::requests::CreateInvestmentRequest,
    errors::RepositoryError,
    model::investment::InvestmentModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryInvestmentRepository {
    rows: Mutex<Vec<InvestmentModel>>,
}

impl InMemoryInvestmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvestmentCommandRepositoryTrait for InMemoryInvestmentRepository {
    async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        // Mirrors the UNIQUE constraint on the name column.
        if rows.iter().any(|r| r.name == request.name) {
            return Err(RepositoryError::AlreadyExists(format!(
                "Investment with name {} already registered in the system.",
                request.name
            )));
        }

        let investment = InvestmentModel {
            investment_id: rows.iter().map(|r| r.investment_id).max().unwrap_or(0) + 1,
            name: request.name.clone(),
            investment_type: request.investment_type,
            value: request.value,
            liquidity_frequency: request.liquidity_frequency,
            yield_rate: request.yield_rate,
            initial_date: request.initial_date,
            expiration_date: request.expiration_date,
            created_at: None,
            updated_at: None,
        };
        rows.push(investment.clone());

        Ok(investment)
    }

    async fn apply_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.investment_id == id)
            .ok_or(RepositoryError::NotFound)?;

        row.value += amount;
        Ok(row.clone())
    }

    async fn withdraw_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        // Mirrors the conditional UPDATE: only rows whose value covers the
        // amount match, everything else reads as a missed row.
        let row = rows
            .iter_mut()
            .find(|r| r.investment_id == id && r.value >= amount)
            .ok_or(RepositoryError::NotFound)?;

        row.value -= amount;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.investment_id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl InvestmentQueryRepositoryTrait for InMemoryInvestmentRepository {
    async fn find_all(&self) -> Result<Vec<InvestmentModel>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<InvestmentModel, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.investment_id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<InvestmentModel>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<InvestmentModel>, RepositoryError> {
        let fragment = name.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&fragment))
            .cloned()
            .collect())
    }
}
