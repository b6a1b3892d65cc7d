use crate::{
    abstract_trait::investment::{
        repository::query::DynInvestmentQueryRepository,
        service::query::InvestmentQueryServiceTrait,
    },
    domain::responses::{ApiResponse, InvestmentResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct InvestmentQueryService {
    query: DynInvestmentQueryRepository,
}

impl InvestmentQueryService {
    pub async fn new(query: DynInvestmentQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl InvestmentQueryServiceTrait for InvestmentQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<InvestmentResponse>>, ServiceError> {
        info!("🔍 Listing all investments");

        let investments = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to fetch investments: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Found {} investments", investments.len());

        let responses: Vec<InvestmentResponse> = investments
            .into_iter()
            .map(InvestmentResponse::from)
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Investments retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError> {
        info!("🔍 Finding investment by name: {name}");

        let investment = self.query.find_by_name(name).await.map_err(|e| {
            error!("❌ Database error while finding investment by name {name}: {e:?}");
            ServiceError::from(e)
        })?;

        let investment = investment.ok_or_else(|| {
            error!("❌ Investment with name {name} not found");
            ServiceError::NotFound(format!("Investment with name {name} not found."))
        })?;

        info!(
            "✅ Found investment with name {name}, id={}",
            investment.investment_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Investment retrieved successfully".to_string(),
            data: InvestmentResponse::from(investment),
        })
    }

    async fn search_by_name(
        &self,
        name: &str,
    ) -> Result<ApiResponse<Vec<InvestmentResponse>>, ServiceError> {
        info!("🔍 Searching investments by name fragment: {name}");

        let investments = self.query.search_by_name(name).await.map_err(|e| {
            error!("❌ Failed to search investments by name {name}: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Found {} matching investments", investments.len());

        let responses: Vec<InvestmentResponse> = investments
            .into_iter()
            .map(InvestmentResponse::from)
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Investments retrieved successfully".to_string(),
            data: responses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::investment::repository::command::InvestmentCommandRepositoryTrait,
        domain::requests::CreateInvestmentRequest,
        model::investment::{InvestmentType, LiquidityFrequency},
        service::investment::testing::InMemoryInvestmentRepository,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn create_request(name: &str) -> CreateInvestmentRequest {
        CreateInvestmentRequest {
            name: name.to_string(),
            investment_type: InvestmentType::Stock,
            value: Decimal::from(500),
            liquidity_frequency: LiquidityFrequency::Variable,
            yield_rate: None,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiration_date: None,
        }
    }

    async fn service_with_repo() -> (InvestmentQueryService, Arc<InMemoryInvestmentRepository>) {
        let repo = Arc::new(InMemoryInvestmentRepository::new());
        let query: DynInvestmentQueryRepository = repo.clone();
        (InvestmentQueryService::new(query).await, repo)
    }

    #[tokio::test]
    async fn find_by_name_returns_the_persisted_record() {
        let (service, repo) = service_with_repo().await;
        repo.create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();

        let response = service.find_by_name("Tesouro SELIC 2024").await.unwrap();

        assert_eq!(response.data.name, "Tesouro SELIC 2024");
        assert_eq!(response.data.value, Decimal::from(500));
    }

    #[tokio::test]
    async fn find_by_name_fails_for_unknown_name() {
        let (service, _repo) = service_with_repo().await;

        let err = service.find_by_name("Unknown fund").await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_by_name_matches_substring_ignoring_case() {
        let (service, repo) = service_with_repo().await;
        repo.create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        repo.create(&create_request("Tesouro IPCA 2035"))
            .await
            .unwrap();
        repo.create(&create_request("Petrobras PN")).await.unwrap();

        let response = service.search_by_name("tesouro").await.unwrap();

        assert_eq!(response.data.len(), 2);
    }

    #[tokio::test]
    async fn search_by_name_returns_empty_sequence_when_nothing_matches() {
        let (service, _repo) = service_with_repo().await;

        let response = service.search_by_name("nothing").await.unwrap();

        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn find_all_returns_every_record_in_insertion_order() {
        let (service, repo) = service_with_repo().await;
        repo.create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        repo.create(&create_request("Petrobras PN")).await.unwrap();

        let first = service.find_all().await.unwrap();
        let second = service.find_all().await.unwrap();

        let ids: Vec<i32> = first.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // Listing is idempotent with no intervening writes.
        let again: Vec<i32> = second.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, again);
    }
}
