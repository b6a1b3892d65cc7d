use crate::model::investment::{InvestmentModel, InvestmentType, LiquidityFrequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvestmentResponse {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub value: Decimal,
    pub liquidity_frequency: LiquidityFrequency,
    #[serde(rename = "yield")]
    pub yield_rate: Option<Decimal>,
    pub initial_date: String,
    pub expiration_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// model to response
impl From<InvestmentModel> for InvestmentResponse {
    fn from(model: InvestmentModel) -> Self {
        Self {
            id: model.investment_id,
            name: model.name,
            investment_type: model.investment_type,
            value: model.value,
            liquidity_frequency: model.liquidity_frequency,
            yield_rate: model.yield_rate,
            initial_date: model.initial_date.to_string(),
            expiration_date: model.expiration_date.map(|d| d.to_string()),
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn maps_model_fields_and_wire_names() {
        let model = InvestmentModel {
            investment_id: 7,
            name: "Tesouro SELIC 2024".to_string(),
            investment_type: InvestmentType::Bond,
            value: Decimal::from(1000),
            liquidity_frequency: LiquidityFrequency::Daily,
            yield_rate: None,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            created_at: None,
            updated_at: None,
        };

        let response = InvestmentResponse::from(model);
        assert_eq!(response.id, 7);
        assert_eq!(response.initial_date, "2024-01-15");
        assert_eq!(response.expiration_date.as_deref(), Some("2024-09-01"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Bond");
        assert_eq!(json["liquidity_frequency"], "Daily");
        assert!(json["yield"].is_null());
    }
}
