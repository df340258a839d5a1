use crate::{
    entities::{cart_item, product},
    errors::{ServiceError, ServiceResult},
};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Flat shipping charged once per seller in the cart
pub const SHIPPING_FEE_PER_SELLER: Decimal = dec!(20);

#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartInput {
    pub product_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// A cart row joined with its product
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub cart_id: Uuid,
    pub quantity: i32,
    /// Discounted unit price
    pub unit_price: Decimal,
    pub product: product::Model,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerCart {
    pub seller_id: Uuid,
    pub shop_name: String,
    /// Subtotal of this seller's lines
    pub price: Decimal,
    pub products: Vec<CartLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub cart_products: Vec<SellerCart>,
    /// Subtotal across in-stock lines, shipping excluded
    pub price: Decimal,
    pub cart_product_count: i32,
    pub shipping_fee: Decimal,
    pub out_of_stock_products: Vec<CartLine>,
}

#[derive(Clone)]
pub struct CartService {
    db: Arc<DatabaseConnection>,
}

impl CartService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn add_to_cart(
        &self,
        customer_id: Uuid,
        input: AddToCartInput,
    ) -> ServiceResult<cart_item::Model> {
        if input.quantity < 1 {
            return Err(ServiceError::InvalidInput(
                "Quantity must be at least 1".to_string(),
            ));
        }

        product::Entity::find_by_id(input.product_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", input.product_id))?;

        let duplicate = cart_item::Entity::find()
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .filter(cart_item::Column::ProductId.eq(input.product_id))
            .one(&*self.db)
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(
                "Product Already Added To Cart".to_string(),
            ));
        }

        let now = Utc::now();
        let item = cart_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(customer_id),
            product_id: Set(input.product_id),
            quantity: Set(input.quantity),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(cart_id = %item.id, customer_id = %customer_id, "added to cart");
        Ok(item)
    }

    /// Groups the customer's cart by seller and prices it
    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer_id: Uuid) -> ServiceResult<CartView> {
        let rows = cart_item::Entity::find()
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .order_by_asc(cart_item::Column::CreatedAt)
            .find_also_related(product::Entity)
            .all(&*self.db)
            .await?;

        let mut by_seller: BTreeMap<Uuid, SellerCart> = BTreeMap::new();
        let mut out_of_stock_products = Vec::new();
        let mut price = Decimal::ZERO;
        let mut cart_product_count = 0;

        // Rows whose product was deleted are silently skipped
        for (item, product) in rows {
            let Some(product) = product else { continue };
            let line = CartLine {
                cart_id: item.id,
                quantity: item.quantity,
                unit_price: product.discounted_price(),
                product,
            };

            if line.product.stock < line.quantity {
                out_of_stock_products.push(line);
                continue;
            }

            let subtotal = line.unit_price * Decimal::from(line.quantity);
            price += subtotal;
            cart_product_count += line.quantity;

            let group = by_seller
                .entry(line.product.seller_id)
                .or_insert_with(|| SellerCart {
                    seller_id: line.product.seller_id,
                    shop_name: line.product.shop_name.clone(),
                    price: Decimal::ZERO,
                    products: Vec::new(),
                });
            group.price += subtotal;
            group.products.push(line);
        }

        let shipping_fee = SHIPPING_FEE_PER_SELLER * Decimal::from(by_seller.len() as u64);

        Ok(CartView {
            cart_products: by_seller.into_values().collect(),
            price,
            cart_product_count,
            shipping_fee,
            out_of_stock_products,
        })
    }

    async fn owned_item(&self, customer_id: Uuid, cart_id: Uuid) -> ServiceResult<cart_item::Model> {
        cart_item::Entity::find_by_id(cart_id)
            .filter(cart_item::Column::CustomerId.eq(customer_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Cart item", cart_id))
    }

    #[instrument(skip(self))]
    pub async fn delete_cart_item(&self, customer_id: Uuid, cart_id: Uuid) -> ServiceResult<()> {
        let item = self.owned_item(customer_id, cart_id).await?;
        item.delete(&*self.db).await?;
        Ok(())
    }

    async fn set_quantity(
        &self,
        item: cart_item::Model,
        quantity: i32,
    ) -> ServiceResult<cart_item::Model> {
        let mut active = item.into_active_model();
        active.quantity = Set(quantity);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&*self.db).await?)
    }

    pub async fn quantity_inc(
        &self,
        customer_id: Uuid,
        cart_id: Uuid,
    ) -> ServiceResult<cart_item::Model> {
        let item = self.owned_item(customer_id, cart_id).await?;
        let quantity = item.quantity.saturating_add(1);
        self.set_quantity(item, quantity).await
    }

    /// Decrements but never below one
    pub async fn quantity_dec(
        &self,
        customer_id: Uuid,
        cart_id: Uuid,
    ) -> ServiceResult<cart_item::Model> {
        let item = self.owned_item(customer_id, cart_id).await?;
        let quantity = (item.quantity - 1).max(1);
        self.set_quantity(item, quantity).await
    }
}
