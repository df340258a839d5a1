use crate::{
    entities::{customer_order, platform_wallet, product, seller, seller_order, seller_wallet, DeliveryStatus},
    errors::ServiceResult,
};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

const RECENT_ORDERS: u64 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub total_sale: Decimal,
    pub total_product: u64,
    pub total_order: u64,
    pub total_seller: u64,
    pub recent_orders: Vec<customer_order::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerDashboard {
    pub total_sale: Decimal,
    pub total_product: u64,
    pub total_order: u64,
    pub total_pending_order: u64,
    pub recent_orders: Vec<seller_order::Model>,
}

#[derive(Clone)]
pub struct DashboardService {
    db: Arc<DatabaseConnection>,
}

impl DashboardService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn admin_dashboard(&self) -> ServiceResult<AdminDashboard> {
        let total_sale = platform_wallet::Entity::find()
            .all(&*self.db)
            .await?
            .iter()
            .map(|w| w.amount)
            .sum();

        Ok(AdminDashboard {
            total_sale,
            total_product: product::Entity::find().count(&*self.db).await?,
            total_order: customer_order::Entity::find().count(&*self.db).await?,
            total_seller: seller::Entity::find().count(&*self.db).await?,
            recent_orders: customer_order::Entity::find()
                .order_by_desc(customer_order::Column::CreatedAt)
                .limit(RECENT_ORDERS)
                .all(&*self.db)
                .await?,
        })
    }

    pub async fn seller_dashboard(&self, seller_id: Uuid) -> ServiceResult<SellerDashboard> {
        let total_sale = seller_wallet::Entity::find()
            .filter(seller_wallet::Column::SellerId.eq(seller_id))
            .all(&*self.db)
            .await?
            .iter()
            .map(|w| w.amount)
            .sum();

        let orders = seller_order::Entity::find().filter(seller_order::Column::SellerId.eq(seller_id));

        Ok(SellerDashboard {
            total_sale,
            total_product: product::Entity::find()
                .filter(product::Column::SellerId.eq(seller_id))
                .count(&*self.db)
                .await?,
            total_order: orders.clone().count(&*self.db).await?,
            total_pending_order: orders
                .clone()
                .filter(seller_order::Column::DeliveryStatus.eq(DeliveryStatus::Pending))
                .count(&*self.db)
                .await?,
            recent_orders: orders
                .order_by_desc(seller_order::Column::CreatedAt)
                .limit(RECENT_ORDERS)
                .all(&*self.db)
                .await?,
        })
    }
}
