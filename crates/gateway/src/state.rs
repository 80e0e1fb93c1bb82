//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator, UserClient};
use common::JwtConfig;
use product_service_lib::{
    ProductCatalog, ProductService, ProductStore, PurchaseRecorder, PurchaseService,
    PurchaseStore,
};
use store::Database;
use user_service_lib::{UserManager, UserRepository, UserService, UserStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
    pub purchase_service: Arc<dyn PurchaseService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state from already built services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        purchase_service: Arc<dyn PurchaseService>,
        database: Database,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            product_service,
            purchase_service,
            database,
        }
    }

    /// Wire every service against one store connection.
    pub fn from_database(database: Database, jwt: JwtConfig) -> Self {
        let connection = database.shared();

        let user_repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(connection.clone()));
        let user_service = Arc::new(UserManager::new(user_repo.clone()));
        let auth_service = Arc::new(Authenticator::new(
            Arc::new(UserClient::new(user_repo)),
            jwt,
        ));
        let product_service = Arc::new(ProductCatalog::new(Arc::new(ProductStore::new(
            connection.clone(),
        ))));
        let purchase_service = Arc::new(PurchaseRecorder::new(Arc::new(PurchaseStore::new(
            connection,
        ))));

        Self::new(
            auth_service,
            user_service,
            product_service,
            purchase_service,
            database,
        )
    }
}
