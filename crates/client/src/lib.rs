//! # Vitrin Client
//!
//! HTTP layer of the Vitrin SDK: the auth-aware transport, one typed
//! client per server resource, and repository implementations of the
//! `vitrin-core` ports.
//!
//! ## Architecture Principles
//! - All requests funnel through one [`transport::AuthTransport`] that
//!   owns bearer attachment, status mapping, and the single-flight token
//!   refresh
//! - Resource clients are declarative path mappings with no behavior of
//!   their own
//! - Repositories adapt clients to the core ports so nothing above this
//!   crate sees HTTP types
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use vitrin_client::VitrinClient;
//! use vitrin_common::MemoryCredentialStore;
//! use vitrin_core::ports::AuthPort;
//! use vitrin_domain::LoginRequest;
//!
//! # async fn run() -> vitrin_domain::Result<()> {
//! let config = vitrin_client::config::ClientConfig::from_env()?;
//! let client = VitrinClient::new(&config, Arc::new(MemoryCredentialStore::new()))?;
//!
//! client
//!     .auth()
//!     .login(LoginRequest { email: "ada@example.com".into(), password: "secret".into() })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod repository;
pub mod transport;

use std::sync::Arc;

use vitrin_common::CredentialStore;
use vitrin_domain::Result;

pub use crate::config::ClientConfig;
pub use crate::transport::AuthTransport;

/// The assembled SDK: one shared transport and a repository per resource
pub struct VitrinClient {
    transport: Arc<AuthTransport>,
    auth: repository::AuthRepository,
    users: repository::UsersRepository,
    products: repository::ProductsRepository,
    categories: repository::CategoriesRepository,
    cart: repository::CartRepository,
    orders: repository::OrdersRepository,
    favorites: repository::FavoritesRepository,
    addresses: repository::AddressesRepository,
    seller_requests: repository::SellerRequestsRepository,
}

impl VitrinClient {
    /// Assemble the SDK over a credential store
    ///
    /// # Errors
    /// Returns `VitrinError::Config` if the transport cannot be built.
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let transport = Arc::new(AuthTransport::new(config, credentials)?);
        Ok(Self {
            auth: repository::AuthRepository::new(transport.clone()),
            users: repository::UsersRepository::new(transport.clone()),
            products: repository::ProductsRepository::new(transport.clone()),
            categories: repository::CategoriesRepository::new(transport.clone()),
            cart: repository::CartRepository::new(transport.clone()),
            orders: repository::OrdersRepository::new(transport.clone()),
            favorites: repository::FavoritesRepository::new(transport.clone()),
            addresses: repository::AddressesRepository::new(transport.clone()),
            seller_requests: repository::SellerRequestsRepository::new(transport.clone()),
            transport,
        })
    }

    /// The shared transport
    #[must_use]
    pub fn transport(&self) -> &Arc<AuthTransport> {
        &self.transport
    }

    /// Authentication operations
    #[must_use]
    pub fn auth(&self) -> &repository::AuthRepository {
        &self.auth
    }

    /// User account operations
    #[must_use]
    pub fn users(&self) -> &repository::UsersRepository {
        &self.users
    }

    /// Product catalog operations
    #[must_use]
    pub fn products(&self) -> &repository::ProductsRepository {
        &self.products
    }

    /// Category tree operations
    #[must_use]
    pub fn categories(&self) -> &repository::CategoriesRepository {
        &self.categories
    }

    /// Cart operations
    #[must_use]
    pub fn cart(&self) -> &repository::CartRepository {
        &self.cart
    }

    /// Order operations
    #[must_use]
    pub fn orders(&self) -> &repository::OrdersRepository {
        &self.orders
    }

    /// Favorites operations
    #[must_use]
    pub fn favorites(&self) -> &repository::FavoritesRepository {
        &self.favorites
    }

    /// Address book operations
    #[must_use]
    pub fn addresses(&self) -> &repository::AddressesRepository {
        &self.addresses
    }

    /// Seller application operations
    #[must_use]
    pub fn seller_requests(&self) -> &repository::SellerRequestsRepository {
        &self.seller_requests
    }
}
