use crate::{
    abstract_trait::investment::repository::query::InvestmentQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::investment::InvestmentModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct InvestmentQueryRepository {
    db: ConnectionPool,
}

impl InvestmentQueryRepository {
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
impl InvestmentQueryRepositoryTrait for InvestmentQueryRepository {
    async fn find_all(&self) -> Result<Vec<InvestmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let investments = sqlx::query_as::<_, InvestmentModel>(
            r#"
            SELECT
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
            FROM investments
            ORDER BY investment_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch investments: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} investments", investments.len());

        Ok(investments)
    }

    async fn find_by_id(&self, id: i32) -> Result<InvestmentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, InvestmentModel>(
            r#"
            SELECT
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
            FROM investments
            WHERE investment_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to query investment by ID: {e:?}");
            RepositoryError::from(e)
        })?;

        match row {
            Some(investment) => Ok(investment),
            None => {
                error!("❌ Investment with ID {id} not found");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<InvestmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, InvestmentModel>(
            r#"
            SELECT
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
            FROM investments
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to query investment by name {name}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<InvestmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Substring match, case-insensitive.
        let investments = sqlx::query_as::<_, InvestmentModel>(
            r#"
            SELECT
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
            FROM investments
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY investment_id
            "#,
        )
        .bind(name)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to search investments by name {name}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} investments matching {name}", investments.len());

        Ok(investments)
    }
}
