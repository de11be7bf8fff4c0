use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::catalog::query::CatalogQuery;
use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_related::{
    GetRelatedProductsParams, GetRelatedProductsUseCase,
};
use business::domain::catalog::use_cases::get_trending::GetTrendingProductsUseCase;
use business::domain::shared::value_objects::ProductId;

use crate::api::catalog::dto::{
    CategoryDto, ProductResponse, SortKeyDto, parse_price_filter,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_related_use_case: Arc<dyn GetRelatedProductsUseCase>,
    get_trending_use_case: Arc<dyn GetTrendingProductsUseCase>,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_related_use_case: Arc<dyn GetRelatedProductsUseCase>,
        get_trending_use_case: Arc<dyn GetTrendingProductsUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            get_by_id_use_case,
            get_related_use_case,
            get_trending_use_case,
        }
    }
}

/// Catalog browsing API
///
/// Endpoints for the shop listing, product detail, and home page strips.
#[OpenApi]
impl CatalogApi {
    /// Browse the catalog
    ///
    /// Runs the filter/sort pipeline over the product collection.
    /// Every parameter is optional; omitted parameters skip their stage.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<CategoryDto>>,
        price: Query<Option<String>>,
        rating: Query<Option<u8>>,
        sort: Query<Option<SortKeyDto>>,
    ) -> BrowseCatalogResponse {
        let price = match parse_price_filter(price.0.as_deref().unwrap_or("all")) {
            Ok(price) => price,
            Err(message) => {
                return BrowseCatalogResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message,
                }));
            }
        };

        let query = CatalogQuery {
            search: search.0.unwrap_or_default(),
            category: category.0.map(|c| c.into()),
            price,
            min_rating: rating.0.unwrap_or(0),
            sort: sort.0.map(|s| s.into()).unwrap_or_default(),
        };

        match self
            .browse_use_case
            .execute(BrowseCatalogParams { query })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                BrowseCatalogResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                BrowseCatalogResponse::InternalError(json)
            }
        }
    }

    /// List trending products
    ///
    /// Returns the home page "trending now" strip, capped to four items.
    #[oai(path = "/products/trending", method = "get", tag = "ApiTags::Catalog")]
    async fn get_trending(&self) -> GetTrendingResponse {
        match self.get_trending_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetTrendingResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTrendingResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier. An unknown
    /// identifier is a 404, rendered by clients as a "not found" state.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// List related products
    ///
    /// Products in the same category, the product itself excluded,
    /// capped to four, in collection order.
    #[oai(path = "/products/:id/related", method = "get", tag = "ApiTags::Catalog")]
    async fn get_related(&self, id: Path<String>) -> GetRelatedResponse {
        match self
            .get_related_use_case
            .execute(GetRelatedProductsParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetRelatedResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRelatedResponse::NotFound(json),
                    _ => GetRelatedResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTrendingResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRelatedResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
