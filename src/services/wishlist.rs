use crate::{
    entities::{product, wishlist},
    errors::{ServiceError, ServiceResult},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct AddToWishlistInput {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishlistView {
    pub wishlist_count: usize,
    pub wishlists: Vec<wishlist::Model>,
}

#[derive(Clone)]
pub struct WishlistService {
    db: Arc<DatabaseConnection>,
}

impl WishlistService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Saves a snapshot of the product's card for the customer
    #[instrument(skip(self))]
    pub async fn add_to_wishlist(
        &self,
        customer_id: Uuid,
        product_id: Uuid,
    ) -> ServiceResult<wishlist::Model> {
        let duplicate = wishlist::Entity::find()
            .filter(wishlist::Column::CustomerId.eq(customer_id))
            .filter(wishlist::Column::ProductId.eq(product_id))
            .one(&*self.db)
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(
                "Product is Already in Wishlist".to_string(),
            ));
        }

        let product = product::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        let now = Utc::now();
        let entry = wishlist::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(customer_id),
            product_id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            slug: Set(product.slug.clone()),
            discount: Set(product.discount),
            image: Set(product.primary_image()),
            rating: Set(product.rating),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(wishlist_id = %entry.id, customer_id = %customer_id, "added to wishlist");
        Ok(entry)
    }

    pub async fn get_wishlist(&self, customer_id: Uuid) -> ServiceResult<WishlistView> {
        let wishlists = wishlist::Entity::find()
            .filter(wishlist::Column::CustomerId.eq(customer_id))
            .order_by_desc(wishlist::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(WishlistView {
            wishlist_count: wishlists.len(),
            wishlists,
        })
    }

    #[instrument(skip(self))]
    pub async fn remove_wishlist(&self, customer_id: Uuid, wishlist_id: Uuid) -> ServiceResult<()> {
        let entry = wishlist::Entity::find_by_id(wishlist_id)
            .filter(wishlist::Column::CustomerId.eq(customer_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Wishlist item", wishlist_id))?;
        entry.delete(&*self.db).await?;
        Ok(())
    }
}
