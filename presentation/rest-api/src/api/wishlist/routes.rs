use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::get_all::GetWishlistUseCase;
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::WishlistResponse;

pub struct WishlistApi {
    get_use_case: Arc<dyn GetWishlistUseCase>,
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_use_case: Arc<dyn GetWishlistUseCase>,
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

/// Wishlist API
///
/// Endpoints for the session wishlist. Membership drives the heart
/// toggle on every product card.
#[OpenApi]
impl WishlistApi {
    /// Get the wishlist
    ///
    /// Returns saved products in insertion order. An empty wishlist is
    /// a valid state, not an error.
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(&self) -> GetWishlistResponse {
        match self.get_use_case.execute().await {
            Ok(wishlist) => GetWishlistResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetWishlistResponse::InternalError(json)
            }
        }
    }

    /// Save a product to the wishlist
    ///
    /// Idempotent: saving a product twice leaves one entry.
    #[oai(path = "/wishlist/:product_id", method = "put", tag = "ApiTags::Wishlist")]
    async fn add(&self, product_id: Path<String>) -> AddToWishlistResponse {
        match self
            .add_use_case
            .execute(AddToWishlistParams {
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(wishlist) => AddToWishlistResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddToWishlistResponse::NotFound(json),
                    _ => AddToWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the wishlist
    ///
    /// Removing an absent product is a no-op.
    #[oai(path = "/wishlist/:product_id", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove(&self, product_id: Path<String>) -> RemoveFromWishlistResponse {
        match self
            .remove_use_case
            .execute(RemoveFromWishlistParams {
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(wishlist) => RemoveFromWishlistResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveFromWishlistResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
