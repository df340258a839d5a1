use crate::{
    entities::{product, review},
    errors::{ServiceError, ServiceResult},
    services::today,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

pub const REVIEWS_PER_PAGE: u64 = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewInput {
    pub product_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub review: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: i32,
    pub sum: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductReviews {
    pub reviews: Vec<review::Model>,
    pub total_review: u64,
    /// Counts for 5 down to 1 stars
    pub rating_review: Vec<RatingCount>,
}

/// Mean of `ratings` to one decimal place
pub fn average_rating(ratings: &[i32]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::ZERO;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    (Decimal::from(sum) / Decimal::from(ratings.len() as u64)).round_dp(1)
}

#[derive(Clone)]
pub struct ReviewService {
    db: Arc<DatabaseConnection>,
}

impl ReviewService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Stores a review and refreshes the product's mean rating
    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn submit_review(&self, input: ReviewInput) -> ServiceResult<review::Model> {
        input.validate()?;
        if !(1..=5).contains(&input.rating) {
            return Err(ServiceError::InvalidInput(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let product = product::Entity::find_by_id(input.product_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", input.product_id))?;

        let now = Utc::now();
        let saved = review::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product.id),
            name: Set(input.name.trim().to_string()),
            rating: Set(input.rating),
            review: Set(input.review),
            date: Set(today()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let ratings: Vec<i32> = review::Entity::find()
            .filter(review::Column::ProductId.eq(product.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.rating)
            .collect();
        let rating = average_rating(&ratings);

        let mut active = product.into_active_model();
        active.rating = Set(rating);
        active.update(&txn).await?;

        txn.commit().await?;

        info!(review_id = %saved.id, %rating, "review submitted");
        Ok(saved)
    }

    pub async fn product_reviews(&self, product_id: Uuid, page: u64) -> ServiceResult<ProductReviews> {
        let all = review::Entity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .all(&*self.db)
            .await?;

        let rating_review = (1..=5)
            .rev()
            .map(|rating| RatingCount {
                rating,
                sum: all.iter().filter(|r| r.rating == rating).count() as u64,
            })
            .collect();

        let paginator = review::Entity::find()
            .filter(review::Column::ProductId.eq(product_id))
            .order_by_desc(review::Column::CreatedAt)
            .paginate(&*self.db, REVIEWS_PER_PAGE);
        let reviews = paginator.fetch_page(page.max(1) - 1).await?;

        Ok(ProductReviews {
            reviews,
            total_review: all.len() as u64,
            rating_review,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[]), Decimal::ZERO);
        assert_eq!(average_rating(&[5, 4]), dec!(4.5));
        assert_eq!(average_rating(&[5, 4, 4]), dec!(4.3));
        assert_eq!(average_rating(&[1, 2, 2]), dec!(1.7));
    }
}
