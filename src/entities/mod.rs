//! Persisted records of the marketplace. Every table keys on a UUID and
//! carries `created_at`/`updated_at` stamps.

pub mod admin;
pub mod banner;
pub mod cart_item;
pub mod category;
pub mod customer;
pub mod customer_order;
pub mod platform_wallet;
pub mod product;
pub mod review;
pub mod seller;
pub mod seller_order;
pub mod seller_wallet;
pub mod wishlist;
pub mod withdraw_request;

pub use customer_order::{DeliveryStatus, PaymentStatus};
pub use seller::{SellerPayment, SellerStatus};
pub use withdraw_request::WithdrawStatus;
