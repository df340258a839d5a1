use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ActiveValue::Set, ConnectionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Product listed by a seller
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub seller_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Product name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[sea_orm(unique)]
    pub slug: String,

    /// Category name (not the slug)
    pub category: String,

    pub brand: String,

    /// List price before discount
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub price: Decimal,

    pub stock: i32,

    /// Discount in whole percent
    #[validate(range(min = 0, max = 100, message = "Discount must be between 0 and 100"))]
    pub discount: i32,

    pub description: String,

    pub shop_name: String,

    /// JSON array of image URLs
    #[sea_orm(column_type = "Json")]
    pub images: Json,

    /// Mean review rating, one decimal place
    #[sea_orm(column_type = "Decimal(Some((3, 1)))")]
    pub rating: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// Price after the percentage discount, rounded to cents
    pub fn discounted_price(&self) -> Decimal {
        discounted_price(self.price, self.discount)
    }

    /// First image, used as the thumbnail in carts, wishlists and orders
    pub fn primary_image(&self) -> String {
        self.images
            .as_array()
            .and_then(|images| images.first())
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }
}

pub fn discounted_price(price: Decimal, discount: i32) -> Decimal {
    if discount <= 0 {
        return price;
    }
    let discount = Decimal::from(discount.min(100));
    (price - price * discount / Decimal::from(100)).round_dp(2)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seller::Entity",
        from = "Column::SellerId",
        to = "super::seller::Column::Id"
    )]
    Seller,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        let now = Utc::now();

        if insert {
            if let ActiveValue::NotSet = active_model.rating {
                active_model.rating = Set(Decimal::ZERO);
            }
            active_model.created_at = Set(now);
        }
        active_model.updated_at = Set(now);

        let model: Model = active_model.clone().try_into().map_err(|_| {
            DbErr::Custom("Failed to convert ActiveModel to Model for validation".to_string())
        })?;

        if let Err(err) = model.validate() {
            return Err(DbErr::Custom(format!("Validation error: {}", err)));
        }

        Ok(active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn discount_applies_percentage() {
        assert_eq!(discounted_price(dec!(100), 10), dec!(90));
        assert_eq!(discounted_price(dec!(59.99), 15), dec!(50.99));
        assert_eq!(discounted_price(dec!(20), 0), dec!(20));
        assert_eq!(discounted_price(dec!(20), 150), dec!(0));
    }
}
