use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Closed set of investment categories. Stored as the `investment_type`
/// enum type in Postgres; serialized as the variant name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "investment_type")]
pub enum InvestmentType {
    Stock,
    Bond,
    Cryptocurrency,
    InvestmentFund,
    SavingAccount,
    BuildingSociety,
}

/// How often the invested funds may be accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "liquidity_frequency")]
pub enum LiquidityFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    AtExpiration,
    Variable,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvestmentModel {
    pub investment_id: i32,
    pub name: String,
    pub investment_type: InvestmentType,
    pub value: Decimal,
    pub liquidity_frequency: LiquidityFrequency,
    pub yield_rate: Option<Decimal>,
    pub initial_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
