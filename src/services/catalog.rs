use crate::{
    entities::{banner, category, product, seller},
    errors::{ServiceError, ServiceResult},
    services::{chunk, slugify, ListQuery, Page},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Storefront page size for filtered product queries
pub const QUERY_PER_PAGE: u64 = 12;
const HOME_LATEST: u64 = 12;
const HOME_GROUP: u64 = 9;
const RELATED_LIMIT: u64 = 12;
const SAME_SHOP_LIMIT: u64 = 3;
const BANNER_LIMIT: u64 = 10;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub discount: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductInput {
    /// Field rules shared by create and update
    fn check(&self) -> ServiceResult<()> {
        self.validate()?;
        if self.price < Decimal::ZERO {
            return Err(ServiceError::InvalidInput("Price cannot be negative".to_string()));
        }
        Ok(())
    }
}

/// Sort key for [`ProductFilter::sort_price`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PriceSort {
    #[serde(rename = "low-to-high")]
    LowToHigh,
    #[serde(rename = "high-to-low")]
    HighToLow,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProductFilter {
    #[serde(default)]
    pub category: Option<String>,
    /// Minimum rating
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default, rename = "lowPrice")]
    pub low_price: Option<Decimal>,
    #[serde(default, rename = "highPrice")]
    pub high_price: Option<Decimal>,
    #[serde(default, rename = "sortPrice")]
    pub sort_price: Option<PriceSort>,
    #[serde(default, rename = "pageNumber")]
    pub page_number: Option<u64>,
    #[serde(default, rename = "searchValue")]
    pub search_value: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductQueryResult {
    pub products: Vec<product::Model>,
    pub total: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeProducts {
    pub products: Vec<product::Model>,
    pub latest_product: Vec<Vec<product::Model>>,
    pub top_rated_product: Vec<Vec<product::Model>>,
    pub discount_product: Vec<Vec<product::Model>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceRange {
    pub low: Decimal,
    pub high: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetails {
    pub product: product::Model,
    pub related_products: Vec<product::Model>,
    pub more_products: Vec<product::Model>,
}

/// Categories, seller listings, storefront queries and banners
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // ----- categories -----

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add_category(&self, input: CategoryInput) -> ServiceResult<category::Model> {
        input.validate()?;
        let slug = slugify(&input.name);
        if slug.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Category name must contain letters or digits".to_string(),
            ));
        }

        let exists = category::Entity::find()
            .filter(category::Column::Slug.eq(slug.clone()))
            .one(&*self.db)
            .await?;
        if exists.is_some() {
            return Err(ServiceError::Conflict("Category already exists".to_string()));
        }

        let now = Utc::now();
        let category = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            slug: Set(slug),
            image: Set(input.image),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(category_id = %category.id, slug = %category.slug, "category added");
        Ok(category)
    }

    pub async fn list_categories(&self, query: &ListQuery) -> ServiceResult<Page<category::Model>> {
        let mut select = category::Entity::find().order_by_desc(category::Column::CreatedAt);
        if let Some(term) = query.search_term() {
            select = select.filter(category::Column::Name.contains(term));
        }

        let paginator = select.paginate(&*self.db, query.page_size());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(query.page_index()).await?;
        Ok(Page { items, total })
    }

    // ----- seller products -----

    /// Slug for `name`, suffixed when another product already uses it
    async fn unique_product_slug(&self, name: &str, except: Option<Uuid>) -> ServiceResult<String> {
        let base = slugify(name);
        if base.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Product name must contain letters or digits".to_string(),
            ));
        }

        let taken = product::Entity::find()
            .filter(product::Column::Slug.eq(base.clone()))
            .one(&*self.db)
            .await?;

        match taken {
            Some(existing) if Some(existing.id) != except => {
                let suffix = Uuid::new_v4().simple().to_string();
                Ok(format!("{}-{}", base, &suffix[..8]))
            }
            _ => Ok(base),
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add_product(
        &self,
        seller_id: Uuid,
        input: ProductInput,
    ) -> ServiceResult<product::Model> {
        input.check()?;

        let seller = seller::Entity::find_by_id(seller_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", seller_id))?;
        let slug = self.unique_product_slug(&input.name, None).await?;

        let product = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(seller_id),
            name: Set(input.name.trim().to_string()),
            slug: Set(slug),
            category: Set(input.category.trim().to_string()),
            brand: Set(input.brand.trim().to_string()),
            price: Set(input.price),
            stock: Set(input.stock),
            discount: Set(input.discount),
            description: Set(input.description),
            shop_name: Set(seller.shop().shop_name),
            images: Set(serde_json::to_value(&input.images)?),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(product_id = %product.id, seller_id = %seller_id, "product added");
        Ok(product)
    }

    pub async fn seller_products(
        &self,
        seller_id: Uuid,
        query: &ListQuery,
    ) -> ServiceResult<Page<product::Model>> {
        let mut select = product::Entity::find()
            .filter(product::Column::SellerId.eq(seller_id))
            .order_by_desc(product::Column::CreatedAt);
        if let Some(term) = query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(product::Column::Name.contains(term))
                    .add(product::Column::Brand.contains(term)),
            );
        }

        let paginator = select.paginate(&*self.db, query.page_size());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(query.page_index()).await?;
        Ok(Page { items, total })
    }

    pub async fn get_product(&self, product_id: Uuid) -> ServiceResult<product::Model> {
        product::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))
    }

    async fn owned_product(&self, seller_id: Uuid, product_id: Uuid) -> ServiceResult<product::Model> {
        let product = self.get_product(product_id).await?;
        if product.seller_id != seller_id {
            return Err(ServiceError::Forbidden("Access denied".to_string()));
        }
        Ok(product)
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        seller_id: Uuid,
        product_id: Uuid,
        input: ProductInput,
    ) -> ServiceResult<product::Model> {
        input.check()?;
        let existing = self.owned_product(seller_id, product_id).await?;
        let slug = if existing.name == input.name.trim() {
            existing.slug.clone()
        } else {
            self.unique_product_slug(&input.name, Some(product_id)).await?
        };

        let mut active = existing.into_active_model();
        active.name = Set(input.name.trim().to_string());
        active.slug = Set(slug);
        active.category = Set(input.category.trim().to_string());
        active.brand = Set(input.brand.trim().to_string());
        active.price = Set(input.price);
        active.stock = Set(input.stock);
        active.discount = Set(input.discount);
        active.description = Set(input.description);
        if !input.images.is_empty() {
            active.images = Set(serde_json::to_value(&input.images)?);
        }
        let product = active.update(&*self.db).await?;

        info!(product_id = %product.id, "product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, seller_id: Uuid, product_id: Uuid) -> ServiceResult<()> {
        let product = self.owned_product(seller_id, product_id).await?;
        product.delete(&*self.db).await?;
        info!(product_id = %product_id, "product deleted");
        Ok(())
    }

    // ----- storefront -----

    async fn top_products(
        &self,
        order: product::Column,
        limit: u64,
        discounted_only: bool,
    ) -> ServiceResult<Vec<product::Model>> {
        let mut select = product::Entity::find()
            .order_by_desc(order)
            .order_by_desc(product::Column::CreatedAt);
        if discounted_only {
            select = select.filter(product::Column::Discount.gt(0));
        }
        Ok(select.limit(limit).all(&*self.db).await?)
    }

    pub async fn home_products(&self) -> ServiceResult<HomeProducts> {
        let products = self
            .top_products(product::Column::CreatedAt, HOME_LATEST, false)
            .await?;
        let latest = self
            .top_products(product::Column::CreatedAt, HOME_GROUP, false)
            .await?;
        let top_rated = self
            .top_products(product::Column::Rating, HOME_GROUP, false)
            .await?;
        let discounted = self
            .top_products(product::Column::Discount, HOME_GROUP, true)
            .await?;

        Ok(HomeProducts {
            products,
            latest_product: chunk(&latest, 3),
            top_rated_product: chunk(&top_rated, 3),
            discount_product: chunk(&discounted, 3),
        })
    }

    /// Cheapest and dearest list price; zeros when the catalog is empty
    pub async fn price_range(&self) -> ServiceResult<PriceRange> {
        let low = product::Entity::find()
            .order_by_asc(product::Column::Price)
            .one(&*self.db)
            .await?;
        let high = product::Entity::find()
            .order_by_desc(product::Column::Price)
            .one(&*self.db)
            .await?;

        Ok(PriceRange {
            low: low.map(|p| p.price).unwrap_or(Decimal::ZERO),
            high: high.map(|p| p.price).unwrap_or(Decimal::ZERO),
        })
    }

    #[instrument(skip(self))]
    pub async fn query_products(&self, filter: &ProductFilter) -> ServiceResult<ProductQueryResult> {
        let mut condition = Condition::all();

        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            condition = condition.add(product::Column::Category.eq(category));
        }
        if let Some(rating) = filter.rating {
            condition = condition.add(product::Column::Rating.gte(rating));
        }
        if let Some(low) = filter.low_price {
            condition = condition.add(product::Column::Price.gte(low));
        }
        if let Some(high) = filter.high_price {
            condition = condition.add(product::Column::Price.lte(high));
        }
        if let Some(term) = filter
            .search_value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            condition = condition.add(
                Condition::any()
                    .add(product::Column::Name.contains(term))
                    .add(product::Column::Brand.contains(term))
                    .add(product::Column::Category.contains(term)),
            );
        }

        let mut select = product::Entity::find().filter(condition);
        select = match filter.sort_price {
            Some(PriceSort::LowToHigh) => select.order_by_asc(product::Column::Price),
            Some(PriceSort::HighToLow) => select.order_by_desc(product::Column::Price),
            None => select.order_by_desc(product::Column::CreatedAt),
        };

        let paginator = select.paginate(&*self.db, QUERY_PER_PAGE);
        let total = paginator.num_items().await?;
        let page = filter.page_number.unwrap_or(1).max(1) - 1;
        let products = paginator.fetch_page(page).await?;

        Ok(ProductQueryResult {
            products,
            total,
            per_page: QUERY_PER_PAGE,
        })
    }

    pub async fn product_details(&self, slug: &str) -> ServiceResult<ProductDetails> {
        let product = product::Entity::find()
            .filter(product::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", slug))?;

        let related_products = product::Entity::find()
            .filter(product::Column::Category.eq(product.category.clone()))
            .filter(product::Column::Id.ne(product.id))
            .order_by_desc(product::Column::CreatedAt)
            .limit(RELATED_LIMIT)
            .all(&*self.db)
            .await?;

        let more_products = product::Entity::find()
            .filter(product::Column::SellerId.eq(product.seller_id))
            .filter(product::Column::Id.ne(product.id))
            .order_by_desc(product::Column::CreatedAt)
            .limit(SAME_SHOP_LIMIT)
            .all(&*self.db)
            .await?;

        Ok(ProductDetails {
            product,
            related_products,
            more_products,
        })
    }

    // ----- banners -----

    #[instrument(skip(self))]
    pub async fn add_banner(
        &self,
        seller_id: Uuid,
        product_id: Uuid,
        image: String,
    ) -> ServiceResult<banner::Model> {
        if image.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Banner image is required".to_string()));
        }
        let product = self.owned_product(seller_id, product_id).await?;

        let now = Utc::now();
        let banner = banner::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product.id),
            banner: Set(image),
            link: Set(product.slug),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(banner_id = %banner.id, product_id = %product_id, "banner added");
        Ok(banner)
    }

    /// Newest banners first
    pub async fn list_banners(&self) -> ServiceResult<Vec<banner::Model>> {
        Ok(banner::Entity::find()
            .order_by_desc(banner::Column::CreatedAt)
            .limit(BANNER_LIMIT)
            .all(&*self.db)
            .await?)
    }

    pub async fn get_banner(&self, product_id: Uuid) -> ServiceResult<Option<banner::Model>> {
        Ok(banner::Entity::find()
            .filter(banner::Column::ProductId.eq(product_id))
            .one(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn update_banner(
        &self,
        seller_id: Uuid,
        banner_id: Uuid,
        image: String,
    ) -> ServiceResult<banner::Model> {
        let banner = banner::Entity::find_by_id(banner_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Banner", banner_id))?;
        self.owned_product(seller_id, banner.product_id).await?;

        let mut active = banner.into_active_model();
        active.banner = Set(image);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&*self.db).await?)
    }
}
