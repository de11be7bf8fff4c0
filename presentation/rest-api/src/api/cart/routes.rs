use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::checkout::CheckoutUseCase;
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::set_quantity::{
    SetCartQuantityParams, SetCartQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, CheckoutResponse, SetCartQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
    remove_use_case: Arc<dyn RemoveCartItemUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
        remove_use_case: Arc<dyn RemoveCartItemUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            set_quantity_use_case,
            remove_use_case,
            checkout_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for the session cart: line items, quantities, totals, and
/// test-mode checkout.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the session cart with line items and totals. An empty
    /// cart is a valid state, not an error.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Merges into an existing line when the product is already carted.
    /// Quantities are not capped by stock.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        match self
            .add_use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new(body.0.product_id),
                quantity: body.0.quantity.unwrap_or(1),
            })
            .await
        {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a line's quantity
    ///
    /// Replaces the quantity exactly. A quantity of zero or below
    /// removes the line, mirroring the storefront stepper.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn set_quantity(
        &self,
        product_id: Path<String>,
        body: Json<SetCartQuantityRequest>,
    ) -> SetCartQuantityResponse {
        match self
            .set_quantity_use_case
            .execute(SetCartQuantityParams {
                product_id: ProductId::new(product_id.0),
                quantity: body.0.quantity,
            })
            .await
        {
            Ok(cart) => SetCartQuantityResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SetCartQuantityResponse::InternalError(json)
            }
        }
    }

    /// Remove a line from the cart
    ///
    /// Removing a product that is not in the cart is a no-op.
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, product_id: Path<String>) -> RemoveCartItemResponse {
        match self
            .remove_use_case
            .execute(RemoveCartItemParams {
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(cart) => RemoveCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }

    /// Place a test-mode order
    ///
    /// Charges nothing and fulfills nothing: echoes the totals and
    /// empties the cart. Rejected when the cart is empty.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self) -> CheckoutApiResponse {
        match self.checkout_use_case.execute().await {
            Ok(receipt) => CheckoutApiResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => CheckoutApiResponse::UnprocessableEntity(json),
                    _ => CheckoutApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetCartQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
