use crate::{
    entities::{
        seller, seller_wallet,
        withdraw_request::{self, WithdrawStatus},
    },
    errors::{ServiceError, ServiceResult},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalInput {
    pub amount: Decimal,
}

/// Seller balance sheet
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetails {
    pub total_amount: Decimal,
    pub pending_amount: Decimal,
    pub withdrawal_amount: Decimal,
    pub available_amount: Decimal,
    pub pending_withdraws: Vec<withdraw_request::Model>,
    pub success_withdraws: Vec<withdraw_request::Model>,
}

impl PaymentDetails {
    /// Builds the balance from wallet credits and withdrawal history
    pub fn from_records(
        wallet: &[seller_wallet::Model],
        withdraws: Vec<withdraw_request::Model>,
    ) -> Self {
        let total_amount: Decimal = wallet.iter().map(|w| w.amount).sum();

        let (pending_withdraws, rest): (Vec<_>, Vec<_>) = withdraws
            .into_iter()
            .partition(|w| w.status == WithdrawStatus::Pending);
        let success_withdraws: Vec<_> = rest
            .into_iter()
            .filter(|w| w.status == WithdrawStatus::Success)
            .collect();

        let pending_amount: Decimal = pending_withdraws.iter().map(|w| w.amount).sum();
        let withdrawal_amount: Decimal = success_withdraws.iter().map(|w| w.amount).sum();
        let available_amount = total_amount - pending_amount - withdrawal_amount;

        Self {
            total_amount,
            pending_amount,
            withdrawal_amount,
            available_amount,
            pending_withdraws,
            success_withdraws,
        }
    }
}

/// Seller payouts
#[derive(Clone)]
pub struct PaymentService {
    db: Arc<DatabaseConnection>,
}

impl PaymentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn seller_payment_details(&self, seller_id: Uuid) -> ServiceResult<PaymentDetails> {
        load_details(&*self.db, seller_id).await
    }

    #[instrument(skip(self))]
    pub async fn withdrawal_request(
        &self,
        seller_id: Uuid,
        amount: Decimal,
    ) -> ServiceResult<withdraw_request::Model> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidInput(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        // Held until commit; concurrent requests for one seller queue here
        seller::Entity::find_by_id(seller_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Seller", seller_id))?;

        let details = load_details(&txn, seller_id).await?;
        if amount > details.available_amount {
            return Err(ServiceError::InvalidInput(format!(
                "Amount exceeds available balance of {}",
                details.available_amount
            )));
        }

        let now = Utc::now();
        let request = withdraw_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(seller_id),
            amount: Set(amount),
            status: Set(WithdrawStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(request_id = %request.id, %amount, "withdrawal requested");
        Ok(request)
    }

    pub async fn admin_pending_requests(&self) -> ServiceResult<Vec<withdraw_request::Model>> {
        Ok(withdraw_request::Entity::find()
            .filter(withdraw_request::Column::Status.eq(WithdrawStatus::Pending))
            .order_by_asc(withdraw_request::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn confirm_withdrawal(&self, id: Uuid) -> ServiceResult<withdraw_request::Model> {
        withdraw_request::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Withdraw request", id))?;

        let confirmed = withdraw_request::Entity::update_many()
            .col_expr(
                withdraw_request::Column::Status,
                Expr::value(WithdrawStatus::Success.into_value()),
            )
            .col_expr(withdraw_request::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(withdraw_request::Column::Id.eq(id))
            .filter(withdraw_request::Column::Status.eq(WithdrawStatus::Pending))
            .exec(&*self.db)
            .await?;
        if confirmed.rows_affected == 0 {
            return Err(ServiceError::Conflict(
                "Withdraw request is not pending".to_string(),
            ));
        }

        let request = withdraw_request::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Withdraw request", id))?;

        info!(request_id = %id, "withdrawal confirmed");
        Ok(request)
    }
}

async fn load_details<C: ConnectionTrait>(conn: &C, seller_id: Uuid) -> ServiceResult<PaymentDetails> {
    let wallet = seller_wallet::Entity::find()
        .filter(seller_wallet::Column::SellerId.eq(seller_id))
        .all(conn)
        .await?;
    let withdraws = withdraw_request::Entity::find()
        .filter(withdraw_request::Column::SellerId.eq(seller_id))
        .order_by_desc(withdraw_request::Column::CreatedAt)
        .all(conn)
        .await?;

    Ok(PaymentDetails::from_records(&wallet, withdraws))
}
