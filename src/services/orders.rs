use crate::{
    entities::{
        cart_item,
        customer_order::{self, DeliveryStatus, OrderLine, PaymentStatus, ShippingInfo},
        platform_wallet, product, seller_order, seller_wallet,
    },
    errors::{ServiceError, ServiceResult},
    services::{today, ListQuery, Page},
};
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Where seller sub-orders are routed before delivery to the customer
pub const FULFILMENT_WAREHOUSE: &str = "Marketplace Main Warehouse";
const RECENT_ORDERS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderInput {
    pub items: Vec<OrderItemInput>,
    #[serde(default)]
    pub shipping_fee: Decimal,
    #[serde(default)]
    pub shipping_info: ShippingInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerDashboard {
    pub recent_orders: Vec<customer_order::Model>,
    pub pending_order: u64,
    pub total_order: u64,
    pub cancelled_order: u64,
}

/// Customer order together with its per-seller slices
#[derive(Debug, Clone, Serialize)]
pub struct AdminOrderView {
    #[serde(flatten)]
    pub order: customer_order::Model,
    pub suborders: Vec<seller_order::Model>,
}

#[derive(Clone)]
pub struct OrderService {
    db: Arc<DatabaseConnection>,
}

impl OrderService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates the customer order and one seller order per seller.
    ///
    /// Lines are priced at the discounted price; the customer pays the line
    /// total plus `shipping_fee`, each seller order carries only that seller's
    /// subtotal. Ordered products leave the customer's cart.
    #[instrument(skip(self, input), fields(lines = input.items.len()))]
    pub async fn place_order(&self, customer_id: Uuid, input: PlaceOrderInput) -> ServiceResult<Uuid> {
        if input.items.is_empty() {
            return Err(ServiceError::InvalidInput("Order has no products".to_string()));
        }
        if input.shipping_fee < Decimal::ZERO {
            return Err(ServiceError::InvalidInput(
                "Shipping fee cannot be negative".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let mut lines = Vec::with_capacity(input.items.len());
        for item in &input.items {
            if item.quantity < 1 {
                return Err(ServiceError::InvalidInput(
                    "Quantity must be at least 1".to_string(),
                ));
            }

            let product = product::Entity::find_by_id(item.product_id)
                .one(&txn)
                .await?
                .ok_or_else(|| ServiceError::not_found("Product", item.product_id))?;

            // Decrement only while enough stock is left at write time
            let claimed = product::Entity::update_many()
                .col_expr(
                    product::Column::Stock,
                    Expr::col(product::Column::Stock).sub(item.quantity),
                )
                .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(product::Column::Id.eq(product.id))
                .filter(product::Column::Stock.gte(item.quantity))
                .exec(&txn)
                .await?;
            if claimed.rows_affected == 0 {
                return Err(ServiceError::InsufficientStock(format!(
                    "{} has only {} left",
                    product.name, product.stock
                )));
            }

            lines.push(OrderLine {
                product_id: product.id,
                seller_id: product.seller_id,
                name: product.name.clone(),
                slug: product.slug.clone(),
                image: product.primary_image(),
                shop_name: product.shop_name.clone(),
                price: product.discounted_price(),
                quantity: item.quantity,
            });
        }

        let subtotal: Decimal = lines.iter().map(OrderLine::subtotal).sum();
        let now = Utc::now();
        let date = today();
        let order_id = Uuid::new_v4();

        customer_order::ActiveModel {
            id: Set(order_id),
            customer_id: Set(customer_id),
            products: Set(serde_json::to_value(&lines)?),
            price: Set(subtotal + input.shipping_fee),
            payment_status: Set(PaymentStatus::Unpaid),
            shipping_info: Set(serde_json::to_value(&input.shipping_info)?),
            delivery_status: Set(DeliveryStatus::Pending),
            date: Set(date.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let mut per_seller: BTreeMap<Uuid, Vec<OrderLine>> = BTreeMap::new();
        for line in &lines {
            per_seller.entry(line.seller_id).or_default().push(line.clone());
        }

        for (seller_id, seller_lines) in &per_seller {
            let price: Decimal = seller_lines.iter().map(OrderLine::subtotal).sum();
            seller_order::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                seller_id: Set(*seller_id),
                products: Set(serde_json::to_value(seller_lines)?),
                price: Set(price),
                payment_status: Set(PaymentStatus::Unpaid),
                shipping_info: Set(FULFILMENT_WAREHOUSE.to_string()),
                delivery_status: Set(DeliveryStatus::Pending),
                date: Set(date.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await?;
        }

        let ordered: Vec<Uuid> = lines.iter().map(|l| l.product_id).collect();
        cart_item::Entity::delete_many()
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .filter(cart_item::Column::ProductId.is_in(ordered))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            order_id = %order_id,
            customer_id = %customer_id,
            sellers = per_seller.len(),
            "order placed"
        );
        Ok(order_id)
    }

    pub async fn customer_dashboard(&self, customer_id: Uuid) -> ServiceResult<CustomerDashboard> {
        let base = customer_order::Entity::find()
            .filter(customer_order::Column::CustomerId.eq(customer_id));

        let recent_orders = base
            .clone()
            .order_by_desc(customer_order::Column::CreatedAt)
            .limit(RECENT_ORDERS)
            .all(&*self.db)
            .await?;
        let total_order = base.clone().count(&*self.db).await?;
        let pending_order = base
            .clone()
            .filter(customer_order::Column::DeliveryStatus.eq(DeliveryStatus::Pending))
            .count(&*self.db)
            .await?;
        let cancelled_order = base
            .filter(customer_order::Column::DeliveryStatus.eq(DeliveryStatus::Cancelled))
            .count(&*self.db)
            .await?;

        Ok(CustomerDashboard {
            recent_orders,
            pending_order,
            total_order,
            cancelled_order,
        })
    }

    /// `status` is `all` or a delivery status name
    pub async fn customer_orders(
        &self,
        customer_id: Uuid,
        status: &str,
    ) -> ServiceResult<Vec<customer_order::Model>> {
        let mut select = customer_order::Entity::find()
            .filter(customer_order::Column::CustomerId.eq(customer_id))
            .order_by_desc(customer_order::Column::CreatedAt);

        if !status.eq_ignore_ascii_case("all") {
            let status: DeliveryStatus = status.parse().map_err(ServiceError::InvalidInput)?;
            select = select.filter(customer_order::Column::DeliveryStatus.eq(status));
        }

        Ok(select.all(&*self.db).await?)
    }

    async fn find_order(&self, order_id: Uuid) -> ServiceResult<customer_order::Model> {
        customer_order::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))
    }

    /// Customer-facing order lookup; other customers' orders read as missing
    pub async fn order_details(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> ServiceResult<customer_order::Model> {
        let order = self.find_order(order_id).await?;
        if order.customer_id != customer_id {
            return Err(ServiceError::not_found("Order", order_id));
        }
        Ok(order)
    }

    async fn with_suborders(&self, order: customer_order::Model) -> ServiceResult<AdminOrderView> {
        let suborders = seller_order::Entity::find()
            .filter(seller_order::Column::OrderId.eq(order.id))
            .order_by_asc(seller_order::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(AdminOrderView { order, suborders })
    }

    pub async fn admin_orders(&self, query: &ListQuery) -> ServiceResult<Page<AdminOrderView>> {
        let paginator = customer_order::Entity::find()
            .order_by_desc(customer_order::Column::CreatedAt)
            .paginate(&*self.db, query.page_size());
        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(query.page_index()).await?;

        let mut items = Vec::with_capacity(orders.len());
        for order in orders {
            items.push(self.with_suborders(order).await?);
        }
        Ok(Page { items, total })
    }

    pub async fn admin_order_details(&self, order_id: Uuid) -> ServiceResult<AdminOrderView> {
        let order = self.find_order(order_id).await?;
        self.with_suborders(order).await
    }

    #[instrument(skip(self))]
    pub async fn admin_order_status_update(
        &self,
        order_id: Uuid,
        status: DeliveryStatus,
    ) -> ServiceResult<customer_order::Model> {
        let mut active = self.find_order(order_id).await?.into_active_model();
        active.delivery_status = Set(status);
        active.updated_at = Set(Utc::now());
        let order = active.update(&*self.db).await?;

        info!(order_id = %order_id, status = ?status, "order status updated");
        Ok(order)
    }

    pub async fn seller_orders(
        &self,
        seller_id: Uuid,
        query: &ListQuery,
    ) -> ServiceResult<Page<seller_order::Model>> {
        let paginator = seller_order::Entity::find()
            .filter(seller_order::Column::SellerId.eq(seller_id))
            .order_by_desc(seller_order::Column::CreatedAt)
            .paginate(&*self.db, query.page_size());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(query.page_index()).await?;
        Ok(Page { items, total })
    }

    async fn seller_order(&self, seller_id: Uuid, id: Uuid) -> ServiceResult<seller_order::Model> {
        seller_order::Entity::find_by_id(id)
            .filter(seller_order::Column::SellerId.eq(seller_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller order", id))
    }

    pub async fn seller_order_details(
        &self,
        seller_id: Uuid,
        id: Uuid,
    ) -> ServiceResult<seller_order::Model> {
        self.seller_order(seller_id, id).await
    }

    #[instrument(skip(self))]
    pub async fn seller_order_status_update(
        &self,
        seller_id: Uuid,
        id: Uuid,
        status: DeliveryStatus,
    ) -> ServiceResult<seller_order::Model> {
        let mut active = self.seller_order(seller_id, id).await?.into_active_model();
        active.delivery_status = Set(status);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&*self.db).await?)
    }

    /// Marks an order paid and credits the platform and seller wallets
    #[instrument(skip(self))]
    pub async fn confirm_payment(&self, order_id: Uuid) -> ServiceResult<customer_order::Model> {
        let txn = self.db.begin().await?;

        customer_order::Entity::find_by_id(order_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        let now = Utc::now();
        let (month, year) = (now.month() as i32, now.year());

        // Only one confirmation can flip the order to paid
        let flipped = customer_order::Entity::update_many()
            .col_expr(
                customer_order::Column::PaymentStatus,
                Expr::value(PaymentStatus::Paid.into_value()),
            )
            .col_expr(
                customer_order::Column::DeliveryStatus,
                Expr::value(DeliveryStatus::Placed.into_value()),
            )
            .col_expr(customer_order::Column::UpdatedAt, Expr::value(now))
            .filter(customer_order::Column::Id.eq(order_id))
            .filter(customer_order::Column::PaymentStatus.ne(PaymentStatus::Paid))
            .exec(&txn)
            .await?;
        if flipped.rows_affected == 0 {
            return Err(ServiceError::Conflict("Order already paid".to_string()));
        }

        let order = customer_order::Entity::find_by_id(order_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;

        platform_wallet::ActiveModel {
            id: Set(Uuid::new_v4()),
            amount: Set(order.price),
            month: Set(month),
            year: Set(year),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let suborders = seller_order::Entity::find()
            .filter(seller_order::Column::OrderId.eq(order_id))
            .all(&txn)
            .await?;
        for suborder in suborders {
            seller_wallet::ActiveModel {
                id: Set(Uuid::new_v4()),
                seller_id: Set(suborder.seller_id),
                amount: Set(suborder.price),
                month: Set(month),
                year: Set(year),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&txn)
            .await?;

            let mut active = suborder.into_active_model();
            active.payment_status = Set(PaymentStatus::Paid);
            active.delivery_status = Set(DeliveryStatus::Placed);
            active.updated_at = Set(now);
            active.update(&txn).await?;
        }

        txn.commit().await?;

        info!(order_id = %order_id, amount = %order.price, "payment confirmed");
        Ok(order)
    }
}
