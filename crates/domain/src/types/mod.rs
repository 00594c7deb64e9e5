//! Entity records mirroring server JSON
//!
//! All entities are plain immutable snapshots of whatever the server
//! returned. Timestamps are kept as server-formatted strings; no field is
//! re-derived or validated client-side. Embedded entities (a cart item's
//! product, an order item's product) are denormalized copies, not live
//! references.

pub mod address;
pub mod cart;
pub mod category;
pub mod favorite;
pub mod order;
pub mod product;
pub mod seller;
pub mod user;

pub use address::Address;
pub use cart::{Cart, CartItem};
pub use category::Category;
pub use favorite::Favorite;
pub use order::{Order, OrderItem};
pub use product::{Product, ProductImage};
pub use seller::SellerRequest;
pub use user::{User, UserSummary};
