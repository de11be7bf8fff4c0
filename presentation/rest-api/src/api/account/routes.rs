use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::current_user::CurrentUserUseCase;
use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::order::use_cases::get_for_user::{
    GetOrdersForUserParams, GetOrdersForUserUseCase,
};

use crate::api::account::dto::{LoginRequest, OrderResponse, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AccountApi {
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
    current_user_use_case: Arc<dyn CurrentUserUseCase>,
    orders_use_case: Arc<dyn GetOrdersForUserUseCase>,
}

impl AccountApi {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
        current_user_use_case: Arc<dyn CurrentUserUseCase>,
        orders_use_case: Arc<dyn GetOrdersForUserUseCase>,
    ) -> Self {
        Self {
            login_use_case,
            logout_use_case,
            current_user_use_case,
            orders_use_case,
        }
    }
}

/// Account API
///
/// Sign-in, sign-out, the profile tab, and order history.
#[OpenApi]
impl AccountApi {
    /// Sign in
    ///
    /// Case-insensitive email lookup against the seeded accounts.
    /// Failure surfaces as a form-style error, not a lockout.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Account")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        match self
            .login_use_case
            .execute(LoginParams {
                email: body.0.email,
            })
            .await
        {
            Ok(user) => LoginResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign out
    ///
    /// Clears the session user. Signing out twice is harmless.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Account")]
    async fn logout(&self) -> LogoutResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutResponse::InternalError(json)
            }
        }
    }

    /// Get the signed-in profile
    #[oai(path = "/account", method = "get", tag = "ApiTags::Account")]
    async fn profile(&self) -> ProfileResponse {
        match self.current_user_use_case.execute().await {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => ProfileResponse::Unauthorized(json),
                    _ => ProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// List the signed-in user's orders
    ///
    /// Orders owned by the session user, in collection order. A user
    /// with no orders gets an empty list.
    #[oai(path = "/account/orders", method = "get", tag = "ApiTags::Account")]
    async fn orders(&self) -> AccountOrdersResponse {
        let user = match self.current_user_use_case.execute().await {
            Ok(user) => user,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    401 => AccountOrdersResponse::Unauthorized(json),
                    _ => AccountOrdersResponse::InternalError(json),
                };
            }
        };

        match self
            .orders_use_case
            .execute(GetOrdersForUserParams { user_id: user.id })
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> =
                    orders.into_iter().map(|o| o.into()).collect();
                AccountOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AccountOrdersResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AccountOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
