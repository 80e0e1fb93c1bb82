//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::LoginResponse;
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::product_handler::{
    CreateProductRequest, HotProductsResponse, PatchAmountRequest, ProductEnvelope,
    ProductsResponse, PurchaseRequest, UpdateProductRequest,
};
use crate::handlers::user_handler::{RegisterRequest, UserEnvelope, UsersResponse};
use domain::{HotProductResponse, ProductResponse, ProductSummary, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::login,
        crate::handlers::user_handler::register,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::product_handler::create_product,
        crate::handlers::product_handler::list_products,
        crate::handlers::product_handler::list_hot_products,
        crate::handlers::product_handler::get_product,
        crate::handlers::product_handler::update_product,
        crate::handlers::product_handler::patch_amount,
        crate::handlers::product_handler::delete_product,
        crate::handlers::product_handler::create_purchase,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            LoginResponse,
            UserResponse,
            RegisterRequest,
            UsersResponse,
            UserEnvelope,
            CreateProductRequest,
            UpdateProductRequest,
            PatchAmountRequest,
            PurchaseRequest,
            ProductSummary,
            ProductResponse,
            HotProductResponse,
            ProductsResponse,
            HotProductsResponse,
            ProductEnvelope,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuing"),
        (name = "Users", description = "Account registration and lookup"),
        (name = "Products", description = "Catalog, hot products and purchases"),
        (name = "Health", description = "Liveness and dependency checks"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
