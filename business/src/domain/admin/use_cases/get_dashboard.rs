use async_trait::async_trait;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::model::DashboardReport;

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardReport, AdminError>;
}
