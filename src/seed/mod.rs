//! Database population profiles for demos and local development.
//!
//! Every profile clears the tables it owns before inserting, so running the
//! same profile twice leaves the database in the same shape. Seeded accounts
//! all use the password `secret`.

pub mod fixtures;

use crate::{
    auth::password::hash_password,
    entities::{
        admin, banner, cart_item, category, customer,
        customer_order::{self, DeliveryStatus, OrderLine, PaymentStatus, ShippingInfo},
        platform_wallet, product, review,
        seller::{self, SellerPayment, SellerStatus, ShopInfo},
        seller_order, seller_wallet, wishlist,
        withdraw_request::{self, WithdrawStatus},
    },
    errors::ServiceResult,
    services::{orders::FULFILMENT_WAREHOUSE, reviews::average_rating, slugify, today},
};
use chrono::{Datelike, Utc};
use fixtures::{AccountSpec, CategorySpec, ProductSpec, SellerSpec};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Rows per multi-row INSERT, kept under SQLite's bound-parameter limit
const BATCH_SIZE: usize = 50;
const LARGE_PRODUCTS_PER_CATEGORY: usize = 30;
const LARGE_ORDER_COUNT: usize = 200;
const WALLET_MONTHS: i32 = 6;

const PAYMENT_MIX: [PaymentStatus; 3] = [
    PaymentStatus::Pending,
    PaymentStatus::Paid,
    PaymentStatus::Cancelled,
];
const DELIVERY_MIX: [DeliveryStatus; 4] = [
    DeliveryStatus::Pending,
    DeliveryStatus::Processing,
    DeliveryStatus::Shipped,
    DeliveryStatus::Delivered,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Standard,
    Large,
    Jerseys,
    ProductsOnly,
    All,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Large => "large",
            Profile::Jerseys => "jerseys",
            Profile::ProductsOnly => "products-only",
            Profile::All => "all",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counts per table after a run
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub tables: Vec<(&'static str, u64)>,
}

impl SeedSummary {
    pub async fn collect(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let tables = vec![
            ("admins", admin::Entity::find().count(db).await?),
            ("sellers", seller::Entity::find().count(db).await?),
            ("customers", customer::Entity::find().count(db).await?),
            ("categories", category::Entity::find().count(db).await?),
            ("products", product::Entity::find().count(db).await?),
            ("banners", banner::Entity::find().count(db).await?),
            ("reviews", review::Entity::find().count(db).await?),
            ("customer_orders", customer_order::Entity::find().count(db).await?),
            ("seller_orders", seller_order::Entity::find().count(db).await?),
            ("cart_items", cart_item::Entity::find().count(db).await?),
            ("wishlists", wishlist::Entity::find().count(db).await?),
            ("seller_wallets", seller_wallet::Entity::find().count(db).await?),
            ("platform_wallets", platform_wallet::Entity::find().count(db).await?),
            ("withdraw_requests", withdraw_request::Entity::find().count(db).await?),
        ];
        Ok(Self { tables })
    }

    pub fn count(&self, table: &str) -> u64 {
        self.tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (table, count) in &self.tables {
            writeln!(f, "{:<18} {}", table, count)?;
        }
        Ok(())
    }
}

/// Product fields before an owner and slug are attached
struct NewProduct {
    name: String,
    category: String,
    brand: String,
    price: Decimal,
    stock: i32,
    discount: i32,
    rating: Decimal,
    description: String,
    images: Vec<String>,
}

impl From<&ProductSpec> for NewProduct {
    fn from(spec: &ProductSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            category: spec.category.to_string(),
            brand: spec.brand.to_string(),
            price: spec.price,
            stock: spec.stock,
            discount: spec.discount,
            rating: spec.rating,
            description: spec.description.to_string(),
            images: spec.images.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct Seeder<'a> {
    db: &'a DatabaseConnection,
    rng: StdRng,
    password_hash: String,
}

impl<'a> Seeder<'a> {
    /// `rng_seed` makes the random parts of a run reproducible
    pub fn new(db: &'a DatabaseConnection, rng_seed: Option<u64>) -> ServiceResult<Self> {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            db,
            rng,
            password_hash: hash_password(fixtures::SEED_PASSWORD)?,
        })
    }

    pub async fn run(&mut self, profile: Profile) -> ServiceResult<SeedSummary> {
        info!(%profile, "Seeding database");

        match profile {
            Profile::Standard => self.standard().await?,
            Profile::Large => self.large().await?,
            Profile::Jerseys => self.jerseys().await?,
            Profile::ProductsOnly => self.products_only().await?,
            Profile::All => self.all().await?,
        }

        let summary = SeedSummary::collect(self.db).await?;
        info!(%profile, "Seeding complete");
        Ok(summary)
    }

    async fn standard(&mut self) -> Result<(), DbErr> {
        self.clear_storefront().await?;
        admin::Entity::delete_many().exec(self.db).await?;
        customer::Entity::delete_many().exec(self.db).await?;

        info!("Populating admin users");
        self.insert_admins(&fixtures::admins()).await?;

        info!("Populating categories");
        self.insert_categories(&fixtures::standard_categories()).await?;

        info!("Populating customers");
        let customers = self.insert_customers(&fixtures::customers()).await?;

        info!("Activating sellers");
        let sellers = self.upsert_sellers(&fixtures::standard_sellers()).await?;

        info!("Populating products");
        let specs = fixtures::curated_products();
        let mut products = Vec::with_capacity(specs.len());
        for spec in &specs {
            let slug = slugify(spec.name);
            products.push(self.insert_product(spec.into(), &sellers[spec.seller], slug).await?);
        }

        info!("Creating homepage banners");
        self.insert_banners(&products[..fixtures::BANNER_IMAGES.len().min(products.len())])
            .await?;

        info!("Adding product reviews");
        let reviewer_names: Vec<String> = customers.iter().map(|c| c.name.clone()).collect();
        self.insert_reviews(&products, &reviewer_names, 2..=4, true).await?;

        info!("Creating customer orders");
        let customer_ids: Vec<(Uuid, String)> =
            customers.iter().map(|c| (c.id, c.name.clone())).collect();
        let mut orders = Vec::new();
        for (id, name) in &customer_ids {
            let count = self.rng.gen_range(1..=3);
            for _ in 0..count {
                orders.push((*id, name.clone()));
            }
        }
        self.insert_orders(&orders, &products, 3).await?;

        info!("Creating shopping carts");
        let cart_owners: Vec<Uuid> = customers.iter().step_by(2).map(|c| c.id).collect();
        self.insert_carts(&cart_owners, &products, 4).await?;

        info!("Creating wishlists");
        let wishlist_owners: Vec<Uuid> = customers.iter().step_by(3).map(|c| c.id).collect();
        self.insert_wishlists(&wishlist_owners, &products, 5).await?;

        info!("Creating seller wallets and withdrawal requests");
        self.insert_wallets(&sellers).await?;
        self.insert_withdrawals(&sellers).await?;

        Ok(())
    }

    async fn large(&mut self) -> Result<(), DbErr> {
        self.clear_storefront().await?;
        admin::Entity::delete_many().exec(self.db).await?;
        customer::Entity::delete_many().exec(self.db).await?;
        seller::Entity::delete_many().exec(self.db).await?;

        info!("Creating admin user");
        let admins = fixtures::admins();
        self.insert_admins(&admins[..1]).await?;

        info!("Creating sellers");
        let sellers = self.upsert_sellers(&fixtures::large_sellers()).await?;

        info!("Creating customers");
        let mut customers = Vec::with_capacity(fixtures::LARGE_CUSTOMER_NAMES.len());
        for name in fixtures::LARGE_CUSTOMER_NAMES {
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            let method = if self.rng.gen_bool(0.5) { "google" } else { "manually" };
            customers.push(self.insert_customer(name, &email, method).await?);
        }

        info!("Creating categories");
        let categories = fixtures::large_categories();
        self.insert_categories(&categories).await?;

        info!("Creating product catalog");
        let mut products = Vec::new();
        let mut counter = 0usize;
        for (index, cat) in categories.iter().enumerate() {
            let (items, brands) = fixtures::generated_lines(cat.name);
            let owner = &sellers[index % sellers.len()];
            for i in 0..LARGE_PRODUCTS_PER_CATEGORY {
                counter += 1;
                let item = items[i % items.len()];
                let brand = brands[(i / items.len()) % brands.len()];
                let name = format!("{} {}", brand, item);
                let new = NewProduct {
                    description: format!("{} {} from {}.", brand, item.to_lowercase(), owner.name),
                    category: cat.name.to_string(),
                    brand: brand.to_string(),
                    price: Decimal::new(self.rng.gen_range(999..=199_999), 2),
                    stock: self.rng.gen_range(5..=150),
                    discount: self.rng.gen_range(0..=30),
                    rating: Decimal::ZERO,
                    images: vec![cat.image.to_string()],
                    name,
                };
                let slug = format!("{}-{}", slugify(&new.name), counter);
                products.push(self.insert_product(new, owner, slug).await?);
            }
            debug!(category = cat.name, "generated products");
        }

        info!("Creating banners");
        let featured: Vec<product::Model> = products
            .choose_multiple(&mut self.rng, 5)
            .cloned()
            .collect();
        self.insert_banners(&featured).await?;

        info!("Creating product reviews");
        let reviewer_names: Vec<String> = customers.iter().map(|c| c.name.clone()).collect();
        self.insert_reviews(&products, &reviewer_names, 5..=15, false).await?;

        info!("Creating customer orders");
        let mut orders = Vec::with_capacity(LARGE_ORDER_COUNT);
        for _ in 0..LARGE_ORDER_COUNT {
            if let Some(c) = customers.choose(&mut self.rng) {
                orders.push((c.id, c.name.clone()));
            }
        }
        self.insert_orders(&orders, &products, 4).await?;

        info!("Creating wishlists");
        let everyone: Vec<Uuid> = customers.iter().map(|c| c.id).collect();
        self.insert_wishlists(&everyone, &products, 10).await?;

        info!("Creating shopping carts");
        self.insert_carts(&everyone[..everyone.len() / 2], &products, 5)
            .await?;

        Ok(())
    }

    async fn jerseys(&mut self) -> Result<(), DbErr> {
        let sellers = self.upsert_sellers(&[fixtures::jersey_seller()]).await?;
        let owner = &sellers[0];

        let removed = product::Entity::delete_many()
            .filter(product::Column::SellerId.eq(owner.id))
            .exec(self.db)
            .await?
            .rows_affected;
        debug!(removed, "cleared previous jerseys");

        self.ensure_categories(&fixtures::jersey_categories()).await?;

        info!("Generating jerseys");
        let count = self.insert_jerseys(owner).await?;
        info!(count, "Jerseys added");
        Ok(())
    }

    async fn products_only(&mut self) -> Result<(), DbErr> {
        let owner = match seller::Entity::find()
            .order_by_asc(seller::Column::CreatedAt)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => {
                info!("No seller found, creating one");
                let mut created = self.upsert_sellers(&fixtures::standard_sellers()[..1]).await?;
                created.remove(0)
            }
        };

        product::Entity::delete_many().exec(self.db).await?;

        info!(seller = %owner.name, "Inserting products");
        for spec in &fixtures::standalone_products() {
            self.insert_product(spec.into(), &owner, slugify(spec.name))
                .await?;
        }
        Ok(())
    }

    async fn all(&mut self) -> Result<(), DbErr> {
        seller::Entity::delete_many().exec(self.db).await?;
        category::Entity::delete_many().exec(self.db).await?;
        product::Entity::delete_many().exec(self.db).await?;

        info!("Populating sellers");
        let mut sellers = Vec::new();
        for (id, spec) in &fixtures::fixed_sellers() {
            sellers.push(self.insert_seller(*id, spec).await?);
        }

        info!("Populating categories");
        let mut categories = fixtures::standard_categories();
        categories.truncate(6);
        categories.extend(fixtures::jersey_categories());
        self.insert_categories(&categories).await?;

        info!("Populating regular products");
        for spec in &fixtures::curated_products() {
            self.insert_product(spec.into(), &sellers[spec.seller], slugify(spec.name))
                .await?;
        }

        info!("Generating jerseys");
        let count = self.insert_jerseys(&sellers[2]).await?;
        info!(count, "Jerseys added");
        Ok(())
    }

    /// Empties catalog, order, shopping and payout tables
    async fn clear_storefront(&self) -> Result<(), DbErr> {
        let db = self.db;
        let removed = [
            category::Entity::delete_many().exec(db).await?.rows_affected,
            product::Entity::delete_many().exec(db).await?.rows_affected,
            banner::Entity::delete_many().exec(db).await?.rows_affected,
            review::Entity::delete_many().exec(db).await?.rows_affected,
            customer_order::Entity::delete_many().exec(db).await?.rows_affected,
            seller_order::Entity::delete_many().exec(db).await?.rows_affected,
            cart_item::Entity::delete_many().exec(db).await?.rows_affected,
            wishlist::Entity::delete_many().exec(db).await?.rows_affected,
            seller_wallet::Entity::delete_many().exec(db).await?.rows_affected,
            platform_wallet::Entity::delete_many().exec(db).await?.rows_affected,
            withdraw_request::Entity::delete_many().exec(db).await?.rows_affected,
        ];
        debug!(rows = removed.iter().sum::<u64>(), "cleared storefront tables");
        Ok(())
    }

    async fn insert_admins(&self, specs: &[AccountSpec]) -> Result<(), DbErr> {
        let now = Utc::now();
        let rows = specs.iter().map(|spec| admin::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(spec.name.to_string()),
            email: Set(spec.email.to_string()),
            password: Set(self.password_hash.clone()),
            image: Set(spec.image.to_string()),
            role: Set("admin".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        });
        insert_all(self.db, rows.collect()).await?;
        Ok(())
    }

    async fn insert_customers(&self, specs: &[AccountSpec]) -> Result<Vec<customer::Model>, DbErr> {
        let mut customers = Vec::with_capacity(specs.len());
        for spec in specs {
            customers.push(self.insert_customer(spec.name, spec.email, "manually").await?);
        }
        Ok(customers)
    }

    async fn insert_customer(
        &self,
        name: &str,
        email: &str,
        method: &str,
    ) -> Result<customer::Model, DbErr> {
        let now = Utc::now();
        customer::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password: Set(self.password_hash.clone()),
            method: Set(method.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db)
        .await
    }

    async fn insert_seller(&self, id: Uuid, spec: &SellerSpec) -> Result<seller::Model, DbErr> {
        let now = Utc::now();
        let shop = ShopInfo {
            shop_name: spec.shop_name.to_string(),
            district: spec.district.to_string(),
            sub_district: spec.sub_district.to_string(),
            ..Default::default()
        };
        let shop_info = serde_json::to_value(&shop).map_err(|e| DbErr::Custom(e.to_string()))?;

        seller::ActiveModel {
            id: Set(id),
            name: Set(spec.name.to_string()),
            email: Set(spec.email.to_string()),
            password: Set(self.password_hash.clone()),
            role: Set("seller".to_string()),
            status: Set(SellerStatus::Active),
            payment: Set(SellerPayment::Active),
            method: Set(spec.method.to_string()),
            image: Set(spec.image.to_string()),
            shop_info: Set(shop_info),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Creates missing sellers and activates the ones already registered
    async fn upsert_sellers(&self, specs: &[SellerSpec]) -> Result<Vec<seller::Model>, DbErr> {
        let mut sellers = Vec::with_capacity(specs.len());
        for spec in specs {
            let existing = seller::Entity::find()
                .filter(seller::Column::Email.eq(spec.email))
                .one(self.db)
                .await?;

            let model = match existing {
                Some(found) => {
                    let mut active = found.into_active_model();
                    active.status = Set(SellerStatus::Active);
                    active.payment = Set(SellerPayment::Active);
                    active.updated_at = Set(Utc::now());
                    active.update(self.db).await?
                }
                None => self.insert_seller(Uuid::new_v4(), spec).await?,
            };
            sellers.push(model);
        }
        Ok(sellers)
    }

    async fn insert_categories(&self, specs: &[CategorySpec]) -> Result<(), DbErr> {
        let now = Utc::now();
        let rows = specs.iter().map(|spec| category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(spec.name.to_string()),
            slug: Set(spec.slug.to_string()),
            image: Set(spec.image.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        });
        insert_all(self.db, rows.collect()).await?;
        Ok(())
    }

    /// Inserts only the categories whose slug is not taken yet
    async fn ensure_categories(&self, specs: &[CategorySpec]) -> Result<(), DbErr> {
        let mut missing = Vec::new();
        for spec in specs {
            let taken = category::Entity::find()
                .filter(category::Column::Slug.eq(spec.slug))
                .count(self.db)
                .await?
                > 0;
            if !taken {
                missing.push(CategorySpec {
                    name: spec.name,
                    slug: spec.slug,
                    image: spec.image,
                });
            }
        }
        self.insert_categories(&missing).await
    }

    async fn insert_product(
        &self,
        new: NewProduct,
        owner: &seller::Model,
        slug: String,
    ) -> Result<product::Model, DbErr> {
        product::ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(owner.id),
            name: Set(new.name),
            slug: Set(slug),
            category: Set(new.category),
            brand: Set(new.brand),
            price: Set(new.price),
            stock: Set(new.stock),
            discount: Set(new.discount),
            description: Set(new.description),
            shop_name: Set(owner.shop().shop_name),
            images: Set(serde_json::json!(new.images)),
            rating: Set(new.rating),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Home and away shirts in every size for each club
    async fn insert_jerseys(&mut self, owner: &seller::Model) -> Result<usize, DbErr> {
        let mut counter = 0usize;
        for club in fixtures::clubs() {
            for size in fixtures::JERSEY_SIZES {
                for kit in ["Home", "Away"] {
                    counter += 1;
                    let (price, discount, images) = if kit == "Home" {
                        (
                            self.rng.gen_range(4000..=9000),
                            self.rng.gen_range(0..20),
                            vec![club.home.to_string(), club.away.to_string()],
                        )
                    } else {
                        (
                            self.rng.gen_range(5000..=10000),
                            self.rng.gen_range(0..15),
                            vec![club.away.to_string(), club.home.to_string()],
                        )
                    };

                    let new = NewProduct {
                        name: format!(
                            "{} {} {} Jersey - {}",
                            club.name,
                            fixtures::JERSEY_SEASON,
                            kit,
                            size
                        ),
                        category: club.league.to_string(),
                        brand: club.name.to_string(),
                        price: Decimal::from(price),
                        stock: self.rng.gen_range(10..50),
                        discount,
                        rating: Decimal::new(self.rng.gen_range(35..=50), 1),
                        description: format!(
                            "Official {} {} jersey for the {} season. Breathable fabric. Size: {}.",
                            club.name,
                            kit.to_lowercase(),
                            fixtures::JERSEY_SEASON,
                            size
                        ),
                        images,
                    };
                    let slug = format!(
                        "{}-{}-{}-{}",
                        slugify(club.name),
                        kit.to_lowercase(),
                        size.to_lowercase(),
                        counter
                    );
                    self.insert_product(new, owner, slug).await?;
                }
            }
        }
        Ok(counter)
    }

    async fn insert_banners(&self, products: &[product::Model]) -> Result<(), DbErr> {
        let now = Utc::now();
        let rows = products.iter().enumerate().map(|(i, p)| banner::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(p.id),
            banner: Set(fixtures::BANNER_IMAGES[i % fixtures::BANNER_IMAGES.len()].to_string()),
            link: Set(p.slug.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        });
        insert_all(self.db, rows.collect()).await?;
        Ok(())
    }

    /// Adds reviews and stores each product's average rating. With
    /// `distinct_names` every review on a product comes from a different name.
    async fn insert_reviews(
        &mut self,
        products: &[product::Model],
        names: &[String],
        per_product: std::ops::RangeInclusive<usize>,
        distinct_names: bool,
    ) -> Result<(), DbErr> {
        if names.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let date = today();
        let mut rows = Vec::new();
        let mut ratings: HashMap<Uuid, Vec<i32>> = HashMap::new();

        for product in products {
            let mut count = self.rng.gen_range(per_product.clone());
            if distinct_names {
                count = count.min(names.len());
            }
            for i in 0..count {
                let name = if distinct_names {
                    names[i].clone()
                } else {
                    names[self.rng.gen_range(0..names.len())].clone()
                };
                let rating = self.rng.gen_range(4..=5);
                let text = fixtures::REVIEW_TEXTS[self.rng.gen_range(0..fixtures::REVIEW_TEXTS.len())];

                ratings.entry(product.id).or_default().push(rating);
                rows.push(review::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    product_id: Set(product.id),
                    name: Set(name),
                    rating: Set(rating),
                    review: Set(text.to_string()),
                    date: Set(date.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }
        }

        let inserted = insert_all(self.db, rows).await?;
        debug!(inserted, "reviews inserted");

        for (product_id, product_ratings) in ratings {
            product::Entity::update_many()
                .col_expr(product::Column::Rating, Expr::value(average_rating(&product_ratings)))
                .filter(product::Column::Id.eq(product_id))
                .exec(self.db)
                .await?;
        }
        Ok(())
    }

    /// One customer order per `(customer_id, name)` entry, each split into
    /// seller orders
    async fn insert_orders(
        &mut self,
        buyers: &[(Uuid, String)],
        products: &[product::Model],
        max_lines: usize,
    ) -> Result<(), DbErr> {
        if products.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let date = today();
        let mut orders = Vec::with_capacity(buyers.len());
        let mut seller_orders = Vec::new();

        for (customer_id, name) in buyers {
            let line_count = self.rng.gen_range(1..=max_lines.max(1));
            let picked: Vec<&product::Model> =
                products.choose_multiple(&mut self.rng, line_count).collect();
            let mut lines = Vec::with_capacity(picked.len());
            for p in picked {
                lines.push(OrderLine {
                    product_id: p.id,
                    seller_id: p.seller_id,
                    name: p.name.clone(),
                    slug: p.slug.clone(),
                    image: p.primary_image(),
                    shop_name: p.shop_name.clone(),
                    price: p.discounted_price(),
                    quantity: self.rng.gen_range(1..=3),
                });
            }

            let payment_status = PAYMENT_MIX[self.rng.gen_range(0..PAYMENT_MIX.len())];
            let delivery_status = DELIVERY_MIX[self.rng.gen_range(0..DELIVERY_MIX.len())];

            let shipping = ShippingInfo {
                name: name.clone(),
                address: format!("{} Main St", self.rng.gen_range(1..9999)),
                phone: format!("+1-555-{:04}", self.rng.gen_range(0..10000)),
                post: format!("{:05}", self.rng.gen_range(10000..99999)),
                province: "State".to_string(),
                city: "City".to_string(),
                area: "Downtown".to_string(),
            };

            let order_id = Uuid::new_v4();
            let total: Decimal = lines.iter().map(OrderLine::subtotal).sum();

            let mut by_seller: BTreeMap<Uuid, Vec<OrderLine>> = BTreeMap::new();
            for line in &lines {
                by_seller.entry(line.seller_id).or_default().push(line.clone());
            }
            for (seller_id, seller_lines) in by_seller {
                let price: Decimal = seller_lines.iter().map(OrderLine::subtotal).sum();
                seller_orders.push(seller_order::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    order_id: Set(order_id),
                    seller_id: Set(seller_id),
                    products: Set(to_json(&seller_lines)?),
                    price: Set(price),
                    payment_status: Set(payment_status),
                    shipping_info: Set(FULFILMENT_WAREHOUSE.to_string()),
                    delivery_status: Set(delivery_status),
                    date: Set(date.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }

            orders.push(customer_order::ActiveModel {
                id: Set(order_id),
                customer_id: Set(*customer_id),
                products: Set(to_json(&lines)?),
                price: Set(total),
                payment_status: Set(payment_status),
                shipping_info: Set(to_json(&shipping)?),
                delivery_status: Set(delivery_status),
                date: Set(date.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            });
        }

        insert_all(self.db, orders).await?;
        insert_all(self.db, seller_orders).await?;
        Ok(())
    }

    async fn insert_carts(
        &mut self,
        owners: &[Uuid],
        products: &[product::Model],
        max_items: usize,
    ) -> Result<(), DbErr> {
        let now = Utc::now();
        let mut rows = Vec::new();
        for owner in owners {
            let count = self.rng.gen_range(1..=max_items.max(1));
            let picked: Vec<Uuid> = products
                .choose_multiple(&mut self.rng, count)
                .map(|p| p.id)
                .collect();
            for product_id in picked {
                rows.push(cart_item::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    customer_id: Set(*owner),
                    product_id: Set(product_id),
                    quantity: Set(self.rng.gen_range(1..=3)),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }
        }
        insert_all(self.db, rows).await?;
        Ok(())
    }

    async fn insert_wishlists(
        &mut self,
        owners: &[Uuid],
        products: &[product::Model],
        max_items: usize,
    ) -> Result<(), DbErr> {
        let now = Utc::now();
        let mut rows = Vec::new();
        for owner in owners {
            let count = self.rng.gen_range(1..=max_items.max(1));
            for p in products.choose_multiple(&mut self.rng, count) {
                rows.push(wishlist::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    customer_id: Set(*owner),
                    product_id: Set(p.id),
                    name: Set(p.name.clone()),
                    price: Set(p.price),
                    slug: Set(p.slug.clone()),
                    discount: Set(p.discount),
                    image: Set(p.primary_image()),
                    rating: Set(p.rating),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }
        }
        insert_all(self.db, rows).await?;
        Ok(())
    }

    async fn insert_wallets(&mut self, sellers: &[seller::Model]) -> Result<(), DbErr> {
        let now = Utc::now();
        let mut rows = Vec::new();
        for seller in sellers {
            for (month, year) in months_back(now.month() as i32, now.year(), WALLET_MONTHS) {
                rows.push(seller_wallet::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    seller_id: Set(seller.id),
                    amount: Set(Decimal::from(self.rng.gen_range(1000..6000))),
                    month: Set(month),
                    year: Set(year),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }
        }
        insert_all(self.db, rows).await?;
        Ok(())
    }

    async fn insert_withdrawals(&mut self, sellers: &[seller::Model]) -> Result<(), DbErr> {
        let now = Utc::now();
        let statuses = [
            WithdrawStatus::Pending,
            WithdrawStatus::Success,
            WithdrawStatus::Cancelled,
        ];
        let mut rows = Vec::new();
        for seller in sellers {
            for _ in 0..self.rng.gen_range(1..=3) {
                rows.push(withdraw_request::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    seller_id: Set(seller.id),
                    amount: Set(Decimal::from(self.rng.gen_range(100..2100))),
                    status: Set(statuses[self.rng.gen_range(0..statuses.len())]),
                    created_at: Set(now),
                    updated_at: Set(now),
                });
            }
        }
        insert_all(self.db, rows).await?;
        Ok(())
    }
}

/// `(month, year)` pairs for the current month and the `count - 1` before it
fn months_back(month: i32, year: i32, count: i32) -> Vec<(i32, i32)> {
    (0..count)
        .map(|i| {
            let m = month - i;
            if m <= 0 {
                (m + 12, year - 1)
            } else {
                (m, year)
            }
        })
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Custom(e.to_string()))
}

async fn insert_all<A>(db: &DatabaseConnection, rows: Vec<A>) -> Result<u64, DbErr>
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let mut inserted = 0;
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(BATCH_SIZE).collect();
        inserted += <A::Entity as EntityTrait>::insert_many(batch)
            .exec_without_returning(db)
            .await?;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_wrap_into_previous_year() {
        assert_eq!(
            months_back(2, 2025, 4),
            vec![(2, 2025), (1, 2025), (12, 2024), (11, 2024)]
        );
        assert_eq!(months_back(9, 2025, 1), vec![(9, 2025)]);
    }

    #[test]
    fn profile_names() {
        assert_eq!(Profile::ProductsOnly.to_string(), "products-only");
        assert_eq!(Profile::Standard.as_str(), "standard");
    }
}
