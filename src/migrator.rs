use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_account_tables::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_order_tables::Migration),
            Box::new(m20240101_000004_create_shopping_tables::Migration),
            Box::new(m20240101_000005_create_payment_tables::Migration),
        ]
    }
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn stamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

fn money_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .decimal_len(16, 4)
        .not_null()
        .default(0)
        .to_owned()
}

fn index<T, C>(name: &str, table: T, col: C) -> IndexCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(col)
        .to_owned()
}

mod m20240101_000001_create_account_tables {
    use super::{id_col, stamp_col};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_account_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Admins::Table)
                        .if_not_exists()
                        .col(id_col(Admins::Id))
                        .col(ColumnDef::new(Admins::Name).string().not_null())
                        .col(ColumnDef::new(Admins::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Admins::Password).string().not_null())
                        .col(ColumnDef::new(Admins::Image).string().not_null().default(""))
                        .col(ColumnDef::new(Admins::Role).string().not_null().default("admin"))
                        .col(stamp_col(Admins::CreatedAt))
                        .col(stamp_col(Admins::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Sellers::Table)
                        .if_not_exists()
                        .col(id_col(Sellers::Id))
                        .col(ColumnDef::new(Sellers::Name).string().not_null())
                        .col(ColumnDef::new(Sellers::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Sellers::Password).string().not_null())
                        .col(ColumnDef::new(Sellers::Role).string().not_null().default("seller"))
                        .col(ColumnDef::new(Sellers::Status).string_len(20).not_null())
                        .col(ColumnDef::new(Sellers::Payment).string_len(20).not_null())
                        .col(ColumnDef::new(Sellers::Method).string().not_null())
                        .col(ColumnDef::new(Sellers::Image).string().not_null().default(""))
                        .col(ColumnDef::new(Sellers::ShopInfo).json().not_null())
                        .col(stamp_col(Sellers::CreatedAt))
                        .col(stamp_col(Sellers::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(super::index("idx_sellers_status", Sellers::Table, Sellers::Status))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(id_col(Customers::Id))
                        .col(ColumnDef::new(Customers::Name).string().not_null())
                        .col(ColumnDef::new(Customers::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Customers::Password).string().not_null())
                        .col(ColumnDef::new(Customers::Method).string().not_null())
                        .col(stamp_col(Customers::CreatedAt))
                        .col(stamp_col(Customers::UpdatedAt))
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Sellers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Admins::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Admins {
        Table,
        Id,
        Name,
        Email,
        Password,
        Image,
        Role,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Sellers {
        Table,
        Id,
        Name,
        Email,
        Password,
        Role,
        Status,
        Payment,
        Method,
        Image,
        ShopInfo,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Customers {
        Table,
        Id,
        Name,
        Email,
        Password,
        Method,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000002_create_catalog_tables {
    use super::{id_col, index, money_col, stamp_col};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(id_col(Categories::Id))
                        .col(ColumnDef::new(Categories::Name).string().not_null())
                        .col(ColumnDef::new(Categories::Slug).string().not_null().unique_key())
                        .col(ColumnDef::new(Categories::Image).string().not_null().default(""))
                        .col(stamp_col(Categories::CreatedAt))
                        .col(stamp_col(Categories::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(id_col(Products::Id))
                        .col(ColumnDef::new(Products::SellerId).uuid().not_null())
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(ColumnDef::new(Products::Slug).string().not_null().unique_key())
                        .col(ColumnDef::new(Products::Category).string().not_null())
                        .col(ColumnDef::new(Products::Brand).string().not_null())
                        .col(money_col(Products::Price))
                        .col(ColumnDef::new(Products::Stock).integer().not_null().default(0))
                        .col(ColumnDef::new(Products::Discount).integer().not_null().default(0))
                        .col(ColumnDef::new(Products::Description).text().not_null())
                        .col(ColumnDef::new(Products::ShopName).string().not_null())
                        .col(ColumnDef::new(Products::Images).json().not_null())
                        .col(
                            ColumnDef::new(Products::Rating)
                                .decimal_len(3, 1)
                                .not_null()
                                .default(0),
                        )
                        .col(stamp_col(Products::CreatedAt))
                        .col(stamp_col(Products::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index("idx_products_seller_id", Products::Table, Products::SellerId))
                .await?;
            manager
                .create_index(index("idx_products_category", Products::Table, Products::Category))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Banners::Table)
                        .if_not_exists()
                        .col(id_col(Banners::Id))
                        .col(ColumnDef::new(Banners::ProductId).uuid().not_null())
                        .col(ColumnDef::new(Banners::Banner).string().not_null())
                        .col(ColumnDef::new(Banners::Link).string().not_null())
                        .col(stamp_col(Banners::CreatedAt))
                        .col(stamp_col(Banners::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index("idx_banners_product_id", Banners::Table, Banners::ProductId))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Reviews::Table)
                        .if_not_exists()
                        .col(id_col(Reviews::Id))
                        .col(ColumnDef::new(Reviews::ProductId).uuid().not_null())
                        .col(ColumnDef::new(Reviews::Name).string().not_null())
                        .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                        .col(ColumnDef::new(Reviews::Review).text().not_null())
                        .col(ColumnDef::new(Reviews::Date).string_len(10).not_null())
                        .col(stamp_col(Reviews::CreatedAt))
                        .col(stamp_col(Reviews::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index("idx_reviews_product_id", Reviews::Table, Reviews::ProductId))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Reviews::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Banners::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Categories {
        Table,
        Id,
        Name,
        Slug,
        Image,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
        SellerId,
        Name,
        Slug,
        Category,
        Brand,
        Price,
        Stock,
        Discount,
        Description,
        ShopName,
        Images,
        Rating,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Banners {
        Table,
        Id,
        ProductId,
        Banner,
        Link,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Reviews {
        Table,
        Id,
        ProductId,
        Name,
        Rating,
        Review,
        Date,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000003_create_order_tables {
    use super::{id_col, index, money_col, stamp_col};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CustomerOrders::Table)
                        .if_not_exists()
                        .col(id_col(CustomerOrders::Id))
                        .col(ColumnDef::new(CustomerOrders::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(CustomerOrders::Products).json().not_null())
                        .col(money_col(CustomerOrders::Price))
                        .col(
                            ColumnDef::new(CustomerOrders::PaymentStatus)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(ColumnDef::new(CustomerOrders::ShippingInfo).json().not_null())
                        .col(
                            ColumnDef::new(CustomerOrders::DeliveryStatus)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(ColumnDef::new(CustomerOrders::Date).string().not_null())
                        .col(stamp_col(CustomerOrders::CreatedAt))
                        .col(stamp_col(CustomerOrders::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_customer_orders_customer_id",
                    CustomerOrders::Table,
                    CustomerOrders::CustomerId,
                ))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SellerOrders::Table)
                        .if_not_exists()
                        .col(id_col(SellerOrders::Id))
                        .col(ColumnDef::new(SellerOrders::OrderId).uuid().not_null())
                        .col(ColumnDef::new(SellerOrders::SellerId).uuid().not_null())
                        .col(ColumnDef::new(SellerOrders::Products).json().not_null())
                        .col(money_col(SellerOrders::Price))
                        .col(
                            ColumnDef::new(SellerOrders::PaymentStatus)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(ColumnDef::new(SellerOrders::ShippingInfo).string().not_null())
                        .col(
                            ColumnDef::new(SellerOrders::DeliveryStatus)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(ColumnDef::new(SellerOrders::Date).string().not_null())
                        .col(stamp_col(SellerOrders::CreatedAt))
                        .col(stamp_col(SellerOrders::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_seller_orders_order_id",
                    SellerOrders::Table,
                    SellerOrders::OrderId,
                ))
                .await?;
            manager
                .create_index(index(
                    "idx_seller_orders_seller_id",
                    SellerOrders::Table,
                    SellerOrders::SellerId,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SellerOrders::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CustomerOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CustomerOrders {
        Table,
        Id,
        CustomerId,
        Products,
        Price,
        PaymentStatus,
        ShippingInfo,
        DeliveryStatus,
        Date,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SellerOrders {
        Table,
        Id,
        OrderId,
        SellerId,
        Products,
        Price,
        PaymentStatus,
        ShippingInfo,
        DeliveryStatus,
        Date,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000004_create_shopping_tables {
    use super::{id_col, index, money_col, stamp_col};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_shopping_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CartItems::Table)
                        .if_not_exists()
                        .col(id_col(CartItems::Id))
                        .col(ColumnDef::new(CartItems::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(CartItems::ProductId).uuid().not_null())
                        .col(ColumnDef::new(CartItems::Quantity).integer().not_null().default(1))
                        .col(stamp_col(CartItems::CreatedAt))
                        .col(stamp_col(CartItems::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_cart_items_customer_id",
                    CartItems::Table,
                    CartItems::CustomerId,
                ))
                .await?;
            manager
                .create_index(index(
                    "idx_cart_items_product_id",
                    CartItems::Table,
                    CartItems::ProductId,
                ))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Wishlists::Table)
                        .if_not_exists()
                        .col(id_col(Wishlists::Id))
                        .col(ColumnDef::new(Wishlists::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Wishlists::ProductId).uuid().not_null())
                        .col(ColumnDef::new(Wishlists::Name).string().not_null())
                        .col(money_col(Wishlists::Price))
                        .col(ColumnDef::new(Wishlists::Slug).string().not_null())
                        .col(ColumnDef::new(Wishlists::Discount).integer().not_null().default(0))
                        .col(ColumnDef::new(Wishlists::Image).string().not_null().default(""))
                        .col(
                            ColumnDef::new(Wishlists::Rating)
                                .decimal_len(3, 1)
                                .not_null()
                                .default(0),
                        )
                        .col(stamp_col(Wishlists::CreatedAt))
                        .col(stamp_col(Wishlists::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_wishlists_customer_id",
                    Wishlists::Table,
                    Wishlists::CustomerId,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Wishlists::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CartItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CartItems {
        Table,
        Id,
        CustomerId,
        ProductId,
        Quantity,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Wishlists {
        Table,
        Id,
        CustomerId,
        ProductId,
        Name,
        Price,
        Slug,
        Discount,
        Image,
        Rating,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000005_create_payment_tables {
    use super::{id_col, index, money_col, stamp_col};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_payment_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SellerWallets::Table)
                        .if_not_exists()
                        .col(id_col(SellerWallets::Id))
                        .col(ColumnDef::new(SellerWallets::SellerId).uuid().not_null())
                        .col(money_col(SellerWallets::Amount))
                        .col(ColumnDef::new(SellerWallets::Month).integer().not_null())
                        .col(ColumnDef::new(SellerWallets::Year).integer().not_null())
                        .col(stamp_col(SellerWallets::CreatedAt))
                        .col(stamp_col(SellerWallets::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_seller_wallets_seller_id",
                    SellerWallets::Table,
                    SellerWallets::SellerId,
                ))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PlatformWallets::Table)
                        .if_not_exists()
                        .col(id_col(PlatformWallets::Id))
                        .col(money_col(PlatformWallets::Amount))
                        .col(ColumnDef::new(PlatformWallets::Month).integer().not_null())
                        .col(ColumnDef::new(PlatformWallets::Year).integer().not_null())
                        .col(stamp_col(PlatformWallets::CreatedAt))
                        .col(stamp_col(PlatformWallets::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WithdrawRequests::Table)
                        .if_not_exists()
                        .col(id_col(WithdrawRequests::Id))
                        .col(ColumnDef::new(WithdrawRequests::SellerId).uuid().not_null())
                        .col(money_col(WithdrawRequests::Amount))
                        .col(
                            ColumnDef::new(WithdrawRequests::Status)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(stamp_col(WithdrawRequests::CreatedAt))
                        .col(stamp_col(WithdrawRequests::UpdatedAt))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index(
                    "idx_withdraw_requests_seller_id",
                    WithdrawRequests::Table,
                    WithdrawRequests::SellerId,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WithdrawRequests::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PlatformWallets::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SellerWallets::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SellerWallets {
        Table,
        Id,
        SellerId,
        Amount,
        Month,
        Year,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum PlatformWallets {
        Table,
        Id,
        Amount,
        Month,
        Year,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum WithdrawRequests {
        Table,
        Id,
        SellerId,
        Amount,
        Status,
        CreatedAt,
        UpdatedAt,
    }
}
