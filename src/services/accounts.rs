use crate::{
    auth::{hash_password, verify_password, AuthService, AuthUser, Role},
    entities::{
        admin, customer,
        seller::{self, SellerPayment, SellerStatus, ShopInfo},
    },
    errors::{ServiceError, ServiceResult},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Token issued by a successful login or registration
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub role: Role,
    pub token: String,
}

/// Profile returned by `get-user`, shaped by the caller's role
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UserProfile {
    Admin(admin::Model),
    Seller(seller::Model),
    Customer(customer::Model),
}

/// Registration, login and profile maintenance for all three account kinds
#[derive(Clone)]
pub struct AccountService {
    db: Arc<DatabaseConnection>,
    auth: Arc<AuthService>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AccountService {
    pub fn new(db: Arc<DatabaseConnection>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }

    fn session(&self, id: Uuid, role: Role) -> ServiceResult<Session> {
        let token = self.auth.create_token(&id.to_string(), role)?;
        Ok(Session { id, role, token })
    }

    /// Checks a password against a stored hash, mapping failure to "Password wrong"
    fn check_password(password: &str, hash: &str) -> ServiceResult<()> {
        if verify_password(password, hash) {
            Ok(())
        } else {
            Err(ServiceError::InvalidInput("Password wrong".to_string()))
        }
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn admin_login(&self, input: LoginInput) -> ServiceResult<Session> {
        input.validate()?;
        let admin = admin::Entity::find()
            .filter(admin::Column::Email.eq(normalize_email(&input.email)))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Email not found".to_string()))?;

        Self::check_password(&input.password, &admin.password)?;
        info!(admin_id = %admin.id, "admin logged in");
        self.session(admin.id, Role::Admin)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn seller_register(&self, input: RegisterInput) -> ServiceResult<Session> {
        input.validate()?;
        let email = normalize_email(&input.email);

        let existing = seller::Entity::find()
            .filter(seller::Column::Email.eq(email.clone()))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Email already exists".to_string()));
        }

        let now = Utc::now();
        let seller = seller::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            email: Set(email),
            password: Set(hash_password(&input.password)?),
            role: Set(Role::Seller.to_string()),
            status: Set(SellerStatus::Pending),
            payment: Set(SellerPayment::Inactive),
            method: Set("manually".to_string()),
            image: Set(String::new()),
            shop_info: Set(serde_json::to_value(ShopInfo::default())?),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(seller_id = %seller.id, "seller registered");
        self.session(seller.id, Role::Seller)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn seller_login(&self, input: LoginInput) -> ServiceResult<Session> {
        input.validate()?;
        let seller = seller::Entity::find()
            .filter(seller::Column::Email.eq(normalize_email(&input.email)))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Email not found".to_string()))?;

        Self::check_password(&input.password, &seller.password)?;
        if seller.status == SellerStatus::Deactive {
            warn!(seller_id = %seller.id, "deactivated seller logged in");
        }
        self.session(seller.id, Role::Seller)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn customer_register(&self, input: RegisterInput) -> ServiceResult<Session> {
        input.validate()?;
        let email = normalize_email(&input.email);

        let existing = customer::Entity::find()
            .filter(customer::Column::Email.eq(email.clone()))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("Email already exists".to_string()));
        }

        let now = Utc::now();
        let customer = customer::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.trim().to_string()),
            email: Set(email),
            password: Set(hash_password(&input.password)?),
            method: Set("manually".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;

        info!(customer_id = %customer.id, "customer registered");
        self.session(customer.id, Role::Customer)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn customer_login(&self, input: LoginInput) -> ServiceResult<Session> {
        input.validate()?;
        let customer = customer::Entity::find()
            .filter(customer::Column::Email.eq(normalize_email(&input.email)))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Email not found".to_string()))?;

        Self::check_password(&input.password, &customer.password)?;
        self.session(customer.id, Role::Customer)
    }

    /// Loads the profile of the authenticated caller
    pub async fn get_user(&self, user: &AuthUser) -> ServiceResult<UserProfile> {
        let id = user.uuid()?;
        let profile = match user.role {
            Role::Admin => admin::Entity::find_by_id(id)
                .one(&*self.db)
                .await?
                .map(UserProfile::Admin),
            Role::Seller => seller::Entity::find_by_id(id)
                .one(&*self.db)
                .await?
                .map(UserProfile::Seller),
            Role::Customer => customer::Entity::find_by_id(id)
                .one(&*self.db)
                .await?
                .map(UserProfile::Customer),
        };

        profile.ok_or_else(|| ServiceError::not_found(user.role.as_str(), id))
    }

    async fn find_seller(&self, seller_id: Uuid) -> ServiceResult<seller::Model> {
        seller::Entity::find_by_id(seller_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", seller_id))
    }

    #[instrument(skip(self, info))]
    pub async fn update_shop_info(
        &self,
        seller_id: Uuid,
        info: ShopInfo,
    ) -> ServiceResult<seller::Model> {
        if info.shop_name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Shop name is required".to_string()));
        }

        let mut active = self.find_seller(seller_id).await?.into_active_model();
        active.shop_info = Set(serde_json::to_value(&info)?);
        active.updated_at = Set(Utc::now());
        let seller = active.update(&*self.db).await?;

        info!(seller_id = %seller_id, shop = %info.shop_name, "shop info updated");
        Ok(seller)
    }

    #[instrument(skip(self))]
    pub async fn update_profile_image(
        &self,
        seller_id: Uuid,
        image: String,
    ) -> ServiceResult<seller::Model> {
        if image.trim().is_empty() {
            return Err(ServiceError::InvalidInput("Image is required".to_string()));
        }

        let mut active = self.find_seller(seller_id).await?.into_active_model();
        active.image = Set(image);
        active.updated_at = Set(Utc::now());
        Ok(active.update(&*self.db).await?)
    }
}
