use std::sync::Arc;

use crate::auth::{PrincipalResolver, TokenCodec};
use crate::database::models::{Order, Product, User, Vendor};
use crate::database::{fixtures, MemoryRepository, Repository};

/// Shared state handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User>>,
    pub vendors: Arc<dyn Repository<Vendor>>,
    pub products: Arc<dyn Repository<Product>>,
    pub orders: Arc<dyn Repository<Order>>,
    pub resolver: PrincipalResolver,
}

impl AppState {
    pub fn new(
        codec: TokenCodec,
        users: Arc<dyn Repository<User>>,
        vendors: Arc<dyn Repository<Vendor>>,
        products: Arc<dyn Repository<Product>>,
        orders: Arc<dyn Repository<Order>>,
    ) -> Self {
        let resolver = PrincipalResolver::new(codec, Arc::clone(&users));
        Self {
            users,
            vendors,
            products,
            orders,
            resolver,
        }
    }

    /// In-memory repositories loaded with the sample fixtures.
    pub fn seeded(codec: TokenCodec) -> Self {
        let users = fixtures::users();
        let vendors = fixtures::vendors();
        let products = fixtures::products();
        tracing::info!(
            "Seeded {} users, {} vendors, {} products",
            users.len(),
            vendors.len(),
            products.len()
        );

        Self::new(
            codec,
            Arc::new(MemoryRepository::with_records(users)),
            Arc::new(MemoryRepository::with_records(vendors)),
            Arc::new(MemoryRepository::with_records(products)),
            Arc::new(MemoryRepository::<Order>::new()),
        )
    }

    pub fn tokens(&self) -> &TokenCodec {
        self.resolver.codec()
    }
}
