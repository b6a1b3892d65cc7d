use anyhow::Result;
use shared::{
    abstract_trait::investment::{
        repository::{
            command::DynInvestmentCommandRepository, query::DynInvestmentQueryRepository,
        },
        service::{command::DynInvestmentCommandService, query::DynInvestmentQueryService},
    },
    config::ConnectionPool,
    repository::investment::{
        command::InvestmentCommandRepository, query::InvestmentQueryRepository,
    },
    service::investment::{command::InvestmentCommandService, query::InvestmentQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub command_service: DynInvestmentCommandService,
    pub query_service: DynInvestmentQueryService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let command_repo = Arc::new(InvestmentCommandRepository::new(db.clone()))
            as DynInvestmentCommandRepository;
        let query_repo =
            Arc::new(InvestmentQueryRepository::new(db.clone())) as DynInvestmentQueryRepository;

        let command_service =
            Arc::new(InvestmentCommandService::new(command_repo.clone(), query_repo.clone()).await)
                as DynInvestmentCommandService;
        let query_service = Arc::new(InvestmentQueryService::new(query_repo.clone()).await)
            as DynInvestmentQueryService;

        Ok(Self {
            command_service,
            query_service,
        })
    }
}
