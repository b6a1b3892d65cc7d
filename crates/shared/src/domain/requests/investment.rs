use crate::model::investment::{InvestmentType, LiquidityFrequency};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateInvestmentRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name must be between 3 and 100 characters"
    ))]
    pub name: String,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    #[validate(custom(
        function = validate_positive,
        message = "Value must be greater than zero"
    ))]
    pub value: Decimal,

    pub liquidity_frequency: LiquidityFrequency,

    #[serde(rename = "yield", default)]
    #[validate(custom(
        function = validate_positive,
        message = "Yield must be greater than zero"
    ))]
    pub yield_rate: Option<Decimal>,

    pub initial_date: NaiveDate,

    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

/// Body of the apply/withdraw operations. Not persisted.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AmountRequest {
    #[validate(custom(
        function = validate_positive,
        message = "Amount must be greater than zero"
    ))]
    pub amount: Decimal,
}

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreateInvestmentRequest {
        CreateInvestmentRequest {
            name: "Tesouro SELIC 2024".to_string(),
            investment_type: InvestmentType::Bond,
            value: Decimal::from(1000),
            liquidity_frequency: LiquidityFrequency::Daily,
            yield_rate: None,
            initial_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn rejects_name_shorter_than_three_characters() {
        let mut req = valid_create_request();
        req.name = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_value() {
        let mut req = valid_create_request();
        req.value = Decimal::ZERO;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_amount() {
        let req = AmountRequest {
            amount: Decimal::from(-5),
        };
        assert!(req.validate().is_err());

        let req = AmountRequest {
            amount: Decimal::from(250),
        };
        assert!(req.validate().is_ok());
    }
}
