use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::admin::use_cases::get_dashboard::GetDashboardUseCase;
use business::domain::auth::errors::AuthError;
use business::domain::auth::use_cases::current_user::CurrentUserUseCase;
use business::domain::auth::repository::UserRepository;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::order::repository::OrderRepository;

use crate::api::admin::dto::{DashboardResponse, TableResponse};
use crate::api::admin::tables;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AdminApi {
    dashboard_use_case: Arc<dyn GetDashboardUseCase>,
    current_user_use_case: Arc<dyn CurrentUserUseCase>,
    catalog: Arc<dyn CatalogRepository>,
    users: Arc<dyn UserRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl AdminApi {
    pub fn new(
        dashboard_use_case: Arc<dyn GetDashboardUseCase>,
        current_user_use_case: Arc<dyn CurrentUserUseCase>,
        catalog: Arc<dyn CatalogRepository>,
        users: Arc<dyn UserRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            dashboard_use_case,
            current_user_use_case,
            catalog,
            users,
            orders,
        }
    }

    /// Admin routes require a signed-in user whose role is admin; the
    /// role attribute is the only source of authorization.
    async fn authorize(&self) -> Result<(), AuthError> {
        let user = self.current_user_use_case.execute().await?;
        if user.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Admin console API
///
/// Dashboard aggregates and the manage tables. All endpoints require
/// the admin role.
#[OpenApi]
impl AdminApi {
    /// Get the dashboard report
    ///
    /// Revenue, sales, customer and product counts, and recent orders.
    #[oai(path = "/admin/dashboard", method = "get", tag = "ApiTags::Admin")]
    async fn dashboard(&self) -> DashboardApiResponse {
        if let Err(err) = self.authorize().await {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => DashboardApiResponse::Unauthorized(json),
                403 => DashboardApiResponse::Forbidden(json),
                _ => DashboardApiResponse::InternalError(json),
            };
        }

        match self.dashboard_use_case.execute().await {
            Ok(report) => DashboardApiResponse::Ok(Json(report.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DashboardApiResponse::InternalError(json)
            }
        }
    }

    /// Get a management table
    ///
    /// `tab` selects the entity set: products, orders, or users. Rows
    /// are rendered through a fixed set of column descriptors.
    #[oai(path = "/admin/manage/:tab", method = "get", tag = "ApiTags::Admin")]
    async fn manage(&self, tab: Path<String>) -> ManageTableResponse {
        if let Err(err) = self.authorize().await {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                401 => ManageTableResponse::Unauthorized(json),
                403 => ManageTableResponse::Forbidden(json),
                _ => ManageTableResponse::InternalError(json),
            };
        }

        let table = match tab.0.as_str() {
            "products" => self
                .catalog
                .get_all()
                .await
                .map(|products| tables::render(&tables::product_columns(), &products)),
            "orders" => self
                .orders
                .get_all()
                .await
                .map(|orders| tables::render(&tables::order_columns(), &orders)),
            "users" => self
                .users
                .get_all()
                .await
                .map(|users| tables::render(&tables::user_columns(), &users)),
            _ => {
                return ManageTableResponse::NotFound(Json(ErrorResponse {
                    name: "NotFound".to_string(),
                    message: "admin.unknown_tab".to_string(),
                }));
            }
        };

        match table {
            Ok((headers, rows)) => ManageTableResponse::Ok(Json(TableResponse { headers, rows })),
            Err(_) => ManageTableResponse::InternalError(Json(ErrorResponse {
                name: "InternalError".to_string(),
                message: "repository.persistence".to_string(),
            })),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DashboardApiResponse {
    #[oai(status = 200)]
    Ok(Json<DashboardResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ManageTableResponse {
    #[oai(status = 200)]
    Ok(Json<TableResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
