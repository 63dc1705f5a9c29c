use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use depot_infra::{DepotConfig, InMemoryRepository, PostgresRepository, Repository};
use depot_inventory::{
    DeliveryInfo, InStockDetailsInfo, InStockInfo, LogInfo, MemberInfo, MerchandiseInfo,
    OrderDetailsInfo, OrderInfo, OutStockDetailsInfo, OutStockInfo, SupplierInfo, UnitInfo,
};

/// Resolve the repository serving record kind `R`.
pub trait RepositoryFor<R> {
    fn repository(&self) -> Arc<dyn Repository<R>>;
}

macro_rules! record_services {
    ($($field:ident: $record:ty),+ $(,)?) => {
        /// In-memory stores, one per listed record kind.
        ///
        /// Cloning shares the stores, so tests can seed them after handing
        /// a clone to [`AppServices::in_memory`].
        #[derive(Debug, Default, Clone)]
        pub struct InMemoryStores {
            $(pub $field: Arc<InMemoryRepository<$record>>,)+
        }

        /// Repositories behind the HTTP routes.
        pub struct AppServices {
            $($field: Arc<dyn Repository<$record>>,)+
            search_enabled: bool,
        }

        impl AppServices {
            pub fn in_memory(stores: &InMemoryStores, search_enabled: bool) -> Self {
                Self {
                    $($field: stores.$field.clone(),)+
                    search_enabled,
                }
            }

            pub fn postgres(pool: Arc<PgPool>, search_enabled: bool) -> Self {
                Self {
                    $($field: Arc::new(PostgresRepository::<$record>::from_shared(pool.clone())),)+
                    search_enabled,
                }
            }
        }

        $(
            impl RepositoryFor<$record> for AppServices {
                fn repository(&self) -> Arc<dyn Repository<$record>> {
                    self.$field.clone()
                }
            }
        )+
    };
}

record_services! {
    instock: InStockInfo,
    instock_details: InStockDetailsInfo,
    outstock: OutStockInfo,
    outstock_details: OutStockDetailsInfo,
    orders: OrderInfo,
    order_details: OrderDetailsInfo,
    delivery: DeliveryInfo,
    suppliers: SupplierInfo,
    members: MemberInfo,
    merchandise: MerchandiseInfo,
    units: UnitInfo,
    logs: LogInfo,
}

impl AppServices {
    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }
}

/// Wire repositories from configuration.
///
/// `USE_PERSISTENT_STORES=true` connects to Postgres (`DATABASE_URL` is then
/// required); otherwise every kind is served from an empty in-memory store.
pub async fn build_services(config: &DepotConfig) -> anyhow::Result<AppServices> {
    if config.use_persistent_stores {
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL must be set when USE_PERSISTENT_STORES=true")?;

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(url)
            .await
            .context("failed to connect to Postgres")?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "using Postgres-backed stores"
        );
        return Ok(AppServices::postgres(Arc::new(pool), config.search_enabled));
    }

    tracing::warn!("USE_PERSISTENT_STORES not enabled; serving from empty in-memory stores");
    Ok(AppServices::in_memory(
        &InMemoryStores::default(),
        config.search_enabled,
    ))
}
