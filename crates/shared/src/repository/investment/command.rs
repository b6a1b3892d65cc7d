use crate::{
    abstract_trait::investment::repository::command::InvestmentCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateInvestmentRequest, errors::RepositoryError,
    model::investment::InvestmentModel,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

pub struct InvestmentCommandRepository {
    db: ConnectionPool,
}

impl InvestmentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl InvestmentCommandRepositoryTrait for InvestmentCommandRepository {
    async fn create(
        &self,
        request: &CreateInvestmentRequest,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let investment = sqlx::query_as::<_, InvestmentModel>(
            r#"
            INSERT INTO investments (
                name,
                investment_type,
                value,
                liquidity_frequency,
                yield_rate,
                initial_date,
                expiration_date,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING
                investment_id,
                name,
                investment_type,
                value,
                liquidity_frequency,
                yield_rate,
                initial_date,
                expiration_date,
                created_at,
                updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.investment_type)
        .bind(request.value)
        .bind(request.liquidity_frequency)
        .bind(request.yield_rate)
        .bind(request.initial_date)
        .bind(request.expiration_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                error!("❌ Investment name already registered: {}", request.name);
                RepositoryError::AlreadyExists(format!(
                    "Investment with name {} already registered in the system.",
                    request.name
                ))
            }
            _ => {
                error!("❌ Failed to create investment: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(investment)
    }

    async fn apply_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let investment = sqlx::query_as::<_, InvestmentModel>(
            r#"
            UPDATE investments
            SET value = value + $2, updated_at = NOW()
            WHERE investment_id = $1
            RETURNING
                investment_id,
                name,
                investment_type,
                value,
                liquidity_frequency,
                yield_rate,
                initial_date,
                expiration_date,
                created_at,
                updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                error!("❌ Investment not found: {id}");
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to apply amount to investment {id}: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(investment)
    }

    async fn withdraw_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<InvestmentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let investment = sqlx::query_as::<_, InvestmentModel>(
            r#"
            UPDATE investments
            SET value = value - $2, updated_at = NOW()
            WHERE investment_id = $1 AND value >= $2
            RETURNING
                investment_id,
                name,
                investment_type,
                value,
                liquidity_frequency,
                yield_rate,
                initial_date,
                expiration_date,
                created_at,
                updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                error!("❌ Insufficient balance or investment not found: {id}");
                RepositoryError::NotFound
            }
            _ => {
                error!("❌ Failed to withdraw from investment {id}: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(investment)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM investments
            WHERE investment_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete investment {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if result.rows_affected() == 0 {
            error!("❌ Investment not found: {id}");
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
