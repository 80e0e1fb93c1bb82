//! Product and purchase handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{HotProductResponse, NewPurchase, ProductChanges, ProductResponse, ProductSummary};
use product_service_lib::CreateProduct;

use crate::extractors::{UuidPath, ValidatedJson};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// New catalog entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "tool")]
    pub product_type: String,
    pub description: String,
    /// Units in stock
    #[schema(example = 10)]
    pub amount: i32,
    #[schema(example = 500)]
    pub price_in_cents: i32,
}

/// Partial product update. Omitted optional fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub amount: Option<i32>,
    /// Always required
    pub description: String,
    /// New price in cents
    pub price: Option<i32>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            amount: req.amount,
            description: req.description,
            price_in_cents: req.price,
        }
    }
}

/// Stock overwrite
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchAmountRequest {
    pub amount: i32,
}

/// Purchase of a product
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub amount: i32,
}

/// Catalog listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<ProductSummary>,
}

/// Hot products listing
#[derive(Debug, Serialize, ToSchema)]
pub struct HotProductsResponse {
    pub products: Vec<HotProductResponse>,
}

/// Single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductEnvelope {
    pub product: ProductResponse,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/hots", get(list_hot_products))
        .route("/purchase", post(create_purchase))
        .route(
            "/:id",
            get(get_product)
                .put(update_product)
                .patch(patch_amount)
                .delete(delete_product),
        )
}

/// Create a product owned by the caller
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Validation error or name already taken"),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn create_product(
    user: CurrentUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<StatusCode> {
    state
        .product_service
        .create(
            CreateProduct {
                name: payload.name,
                product_type: payload.product_type,
                description: payload.description,
                amount: payload.amount,
                price_in_cents: payload.price_in_cents,
            },
            user.id,
        )
        .await?;

    Ok(StatusCode::CREATED)
}

/// List the catalog in insertion order
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog without stock", body = ProductsResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductsResponse>> {
    let products = state.product_service.list().await?;
    Ok(Json(ProductsResponse {
        products: products.into_iter().map(ProductSummary::from).collect(),
    }))
}

/// Up to five products selected by stock
#[utoipa::path(
    get,
    path = "/products/hots",
    tag = "Products",
    responses(
        (status = 200, description = "Hot products", body = HotProductsResponse)
    )
)]
pub async fn list_hot_products(
    State(state): State<AppState>,
) -> AppResult<Json<HotProductsResponse>> {
    let products = state.product_service.hot().await?;
    Ok(Json(HotProductsResponse {
        products: products.into_iter().map(HotProductResponse::from).collect(),
    }))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 200, description = "Product", body = ProductEnvelope),
        (status = 400, description = "Invalid Id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<Json<ProductEnvelope>> {
    let product = state.product_service.get(id).await?;
    Ok(Json(ProductEnvelope {
        product: ProductResponse::from(product),
    }))
}

/// Update product fields
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 202, description = "Product updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    user: CurrentUser,
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<StatusCode> {
    debug!(product_id = %id, user_id = %user.id, "Updating product");
    state.product_service.update(id, payload.into()).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Overwrite product stock
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    request_body = PatchAmountRequest,
    responses(
        (status = 202, description = "Amount updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn patch_amount(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<PatchAmountRequest>,
) -> AppResult<StatusCode> {
    state.product_service.patch_amount(id, payload.amount).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid Id"),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    user: CurrentUser,
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<StatusCode> {
    debug!(product_id = %id, user_id = %user.id, "Deleting product");
    state.product_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record a purchase
#[utoipa::path(
    post,
    path = "/products/purchase",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = PurchaseRequest,
    responses(
        (status = 201, description = "Purchase recorded"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 404, description = "Product or user not found")
    )
)]
pub async fn create_purchase(
    user: CurrentUser,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PurchaseRequest>,
) -> AppResult<StatusCode> {
    debug!(requester = %user.id, buyer = %payload.user_id, "Recording purchase");
    state
        .purchase_service
        .record(NewPurchase {
            product_id: payload.product_id,
            user_id: payload.user_id,
            amount: payload.amount,
        })
        .await?;

    Ok(StatusCode::CREATED)
}
