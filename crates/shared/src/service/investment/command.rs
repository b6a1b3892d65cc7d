use crate::{
    abstract_trait::investment::{
        repository::{
            command::DynInvestmentCommandRepository, query::DynInvestmentQueryRepository,
        },
        service::command::InvestmentCommandServiceTrait,
    },
    domain::{
        requests::{AmountRequest, CreateInvestmentRequest},
        responses::{ApiResponse, InvestmentResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct InvestmentCommandService {
    command: DynInvestmentCommandRepository,
    query: DynInvestmentQueryRepository,
}

impl InvestmentCommandService {
    pub async fn new(
        command: DynInvestmentCommandRepository,
        query: DynInvestmentQueryRepository,
    ) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl InvestmentCommandServiceTrait for InvestmentCommandService {
    async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!("Creating investment name={}", request.name);

        if let Some(expiration_date) = request.expiration_date {
            if expiration_date < request.initial_date {
                error!(
                    "❌ Expiration date {expiration_date} precedes initial date {}",
                    request.initial_date
                );
                return Err(ServiceError::InvalidExpirationDate);
            }
        }

        if self.query.find_by_name(&request.name).await?.is_some() {
            error!("❌ Investment name already registered: {}", request.name);
            return Err(ServiceError::AlreadyRegistered(request.name.clone()));
        }

        // The UNIQUE constraint backs the probe above; a duplicate insert
        // that slipped past it still reports as AlreadyRegistered.
        let investment = self.command.create(request).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => {
                ServiceError::AlreadyRegistered(request.name.clone())
            }
            other => {
                error!("❌ Failed to create investment {}: {other:?}", request.name);
                ServiceError::from(other)
            }
        })?;

        let response = InvestmentResponse::from(investment);

        info!(
            "✅ Investment created successfully with id={} name={}",
            response.id, response.name
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Investment created successfully".into(),
            data: response,
        })
    }

    async fn apply(
        &self,
        id: i32,
        request: &AmountRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!("Applying amount={} to investment id={id}", request.amount);

        let investment = self
            .command
            .apply_amount(id, request.amount)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    error!("❌ Investment with id {id} not found");
                    ServiceError::NotFound(format!("Investment with id {id} not found."))
                }
                other => {
                    error!("❌ Failed to apply amount to investment {id}: {other:?}");
                    ServiceError::from(other)
                }
            })?;

        let response = InvestmentResponse::from(investment);

        info!(
            "✅ Applied amount to investment id={id}, new value={}",
            response.value
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Amount applied successfully".into(),
            data: response,
        })
    }

    async fn withdraw(
        &self,
        id: i32,
        request: &AmountRequest,
    ) -> Result<ApiResponse<InvestmentResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!(
            "Withdrawing amount={} from investment id={id}",
            request.amount
        );

        let existing = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                error!("❌ Investment with id {id} not found");
                ServiceError::NotFound(format!("Investment with id {id} not found."))
            }
            other => ServiceError::from(other),
        })?;

        if existing.value < request.amount {
            error!(
                "❌ Insufficient balance on investment id={id}: value={}, requested={}",
                existing.value, request.amount
            );
            return Err(ServiceError::InsufficientBalance(request.amount));
        }

        // Existence was established above, so a conditional-update miss
        // means the balance no longer covers the amount.
        let investment = self
            .command
            .withdraw_amount(id, request.amount)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::InsufficientBalance(request.amount),
                other => {
                    error!("❌ Failed to withdraw from investment {id}: {other:?}");
                    ServiceError::from(other)
                }
            })?;

        let response = InvestmentResponse::from(investment);

        info!(
            "✅ Withdrew amount from investment id={id}, new value={}",
            response.value
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Amount withdrawn successfully".into(),
            data: response,
        })
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting investment with id={id}");

        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => {
                error!("❌ Investment with id {id} not found");
                ServiceError::NotFound(format!("Investment with id {id} not found."))
            }
            other => {
                error!("❌ Failed to delete investment {id}: {other:?}");
                ServiceError::from(other)
            }
        })?;

        info!("✅ Investment deleted successfully with id={id}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::investment::repository::query::InvestmentQueryRepositoryTrait,
        model::investment::{InvestmentType, LiquidityFrequency},
        service::investment::testing::InMemoryInvestmentRepository,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn create_request(name: &str) -> CreateInvestmentRequest {
        CreateInvestmentRequest {
            name: name.to_string(),
            investment_type: InvestmentType::Bond,
            value: Decimal::from(1000),
            liquidity_frequency: LiquidityFrequency::Daily,
            yield_rate: None,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        }
    }

    async fn service_with_repo() -> (InvestmentCommandService, Arc<InMemoryInvestmentRepository>) {
        let repo = Arc::new(InMemoryInvestmentRepository::new());
        let command: DynInvestmentCommandRepository = repo.clone();
        let query: DynInvestmentQueryRepository = repo.clone();
        (InvestmentCommandService::new(command, query).await, repo)
    }

    #[tokio::test]
    async fn create_persists_record_and_assigns_identifier() {
        let (service, _repo) = service_with_repo().await;

        let response = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.name, "Tesouro SELIC 2024");
        assert_eq!(response.data.value, Decimal::from(1000));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let (service, _repo) = service_with_repo().await;

        service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        let err = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyRegistered(_)));
    }

    #[tokio::test]
    async fn create_rejects_expiration_before_initial_date() {
        let (service, repo) = service_with_repo().await;

        let mut request = create_request("Tesouro SELIC 2024");
        request.initial_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        request.expiration_date = NaiveDate::from_ymd_opt(1970, 1, 1);

        let err = service.create(&request).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidExpirationDate));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_non_positive_value() {
        let (service, _repo) = service_with_repo().await;

        let mut request = create_request("Tesouro SELIC 2024");
        request.value = Decimal::ZERO;

        let err = service.create(&request).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn apply_adds_amount_to_value() {
        let (service, _repo) = service_with_repo().await;

        let created = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        let response = service
            .apply(
                created.data.id,
                &AmountRequest {
                    amount: Decimal::from(250),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.value, Decimal::from(1250));
    }

    #[tokio::test]
    async fn apply_fails_for_unknown_identifier() {
        let (service, _repo) = service_with_repo().await;

        let err = service
            .apply(
                1,
                &AmountRequest {
                    amount: Decimal::from(250),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn withdraw_subtracts_amount_from_value() {
        let (service, _repo) = service_with_repo().await;

        let created = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        let response = service
            .withdraw(
                created.data.id,
                &AmountRequest {
                    amount: Decimal::from(400),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.value, Decimal::from(600));
    }

    #[tokio::test]
    async fn withdraw_of_entire_balance_reaches_zero() {
        let (service, _repo) = service_with_repo().await;

        let created = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        let response = service
            .withdraw(
                created.data.id,
                &AmountRequest {
                    amount: Decimal::from(1000),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.value, Decimal::ZERO);
    }

    #[tokio::test]
    async fn withdraw_beyond_balance_fails_and_leaves_value_unchanged() {
        let (service, repo) = service_with_repo().await;

        let created = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        let err = service
            .withdraw(
                created.data.id,
                &AmountRequest {
                    amount: Decimal::from(1300),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InsufficientBalance(_)));

        let stored = repo.find_by_id(created.data.id).await.unwrap();
        assert_eq!(stored.value, Decimal::from(1000));
    }

    #[tokio::test]
    async fn withdraw_fails_for_unknown_identifier() {
        let (service, _repo) = service_with_repo().await;

        let err = service
            .withdraw(
                99,
                &AmountRequest {
                    amount: Decimal::from(10),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let (service, repo) = service_with_repo().await;

        let created = service
            .create(&create_request("Tesouro SELIC 2024"))
            .await
            .unwrap();
        service.delete(created.data.id).await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_fails_for_unknown_identifier() {
        let (service, _repo) = service_with_repo().await;

        let err = service.delete(42).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
