//! # Vitrin Core
//!
//! Pure contract layer - no HTTP or storage dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits), one per API resource
//! - The debounced product-search service
//!
//! ## Architecture Principles
//! - Only depends on `vitrin-domain`
//! - No network or platform code
//! - All external effects via traits
//! - The ports are the seam where screens, repositories, and test doubles
//!   meet

pub mod ports;
pub mod search;

// Re-export specific items to avoid ambiguity
pub use ports::{AddressesPort, AuthPort, CartPort, CategoriesPort, FavoritesPort, OrdersPort,
                ProductsPort, SellerRequestsPort, UsersPort};
pub use search::{SearchDebouncer, SearchOutcome};
