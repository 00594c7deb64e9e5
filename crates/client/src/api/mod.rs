//! Typed resource clients
//!
//! One thin client per server resource. Each method is a declarative
//! {method, path, body, response} mapping over the shared
//! [`AuthTransport`](crate::transport::AuthTransport); no client adds
//! behavior beyond path construction, except the auth client which seeds
//! the credential store on successful login and registration.

mod addresses;
mod auth;
mod cart;
mod categories;
mod favorites;
mod orders;
mod products;
mod seller_requests;
mod users;

pub use addresses::AddressesClient;
pub use auth::AuthClient;
pub use cart::CartClient;
pub use categories::CategoriesClient;
pub use favorites::FavoritesClient;
pub use orders::OrdersClient;
pub use products::ProductsClient;
pub use seller_requests::SellerRequestsClient;
pub use users::UsersClient;
