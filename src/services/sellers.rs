use crate::{
    entities::seller::{self, SellerStatus},
    errors::{ServiceError, ServiceResult},
    services::{ListQuery, Page},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Admin-side seller management
#[derive(Clone)]
pub struct SellerService {
    db: Arc<DatabaseConnection>,
}

impl SellerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn sellers_by_status(
        &self,
        status: SellerStatus,
        query: &ListQuery,
    ) -> ServiceResult<Page<seller::Model>> {
        let mut select = seller::Entity::find()
            .filter(seller::Column::Status.eq(status))
            .order_by_desc(seller::Column::CreatedAt);
        if let Some(term) = query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(seller::Column::Name.contains(term))
                    .add(seller::Column::Email.contains(term)),
            );
        }

        let paginator = select.paginate(&*self.db, query.page_size());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(query.page_index()).await?;
        Ok(Page { items, total })
    }

    pub async fn get_seller(&self, seller_id: Uuid) -> ServiceResult<seller::Model> {
        seller::Entity::find_by_id(seller_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", seller_id))
    }

    #[instrument(skip(self))]
    pub async fn seller_status_update(
        &self,
        seller_id: Uuid,
        status: SellerStatus,
    ) -> ServiceResult<seller::Model> {
        let mut active = self.get_seller(seller_id).await?.into_active_model();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        let seller = active.update(&*self.db).await?;

        info!(seller_id = %seller_id, status = ?status, "seller status updated");
        Ok(seller)
    }
}
