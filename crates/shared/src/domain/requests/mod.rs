mod investment;

pub use self::investment::{AmountRequest, CreateInvestmentRequest};
