pub mod auth;
pub mod cart;
pub mod catalog;
pub mod common;
pub mod dashboard;
pub mod orders;
pub mod reviews;
pub mod wishlist;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::services::{
    accounts::AccountService, cart::CartService, catalog::CatalogService,
    dashboard::DashboardService, orders::OrderService, payments::PaymentService,
    reviews::ReviewService, sellers::SellerService, wishlist::WishlistService,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub accounts: Arc<AccountService>,
    pub catalog: Arc<CatalogService>,
    pub cart: Arc<CartService>,
    pub wishlist: Arc<WishlistService>,
    pub orders: Arc<OrderService>,
    pub reviews: Arc<ReviewService>,
    pub sellers: Arc<SellerService>,
    pub payments: Arc<PaymentService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, auth_service: Arc<AuthService>) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(db_pool.clone(), auth_service)),
            catalog: Arc::new(CatalogService::new(db_pool.clone())),
            cart: Arc::new(CartService::new(db_pool.clone())),
            wishlist: Arc::new(WishlistService::new(db_pool.clone())),
            orders: Arc::new(OrderService::new(db_pool.clone())),
            reviews: Arc::new(ReviewService::new(db_pool.clone())),
            sellers: Arc::new(SellerService::new(db_pool.clone())),
            payments: Arc::new(PaymentService::new(db_pool.clone())),
            dashboard: Arc::new(DashboardService::new(db_pool)),
        }
    }
}
