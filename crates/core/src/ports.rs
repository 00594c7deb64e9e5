//! Port interfaces for the API resources
//!
//! One trait per server resource. These traits are the boundary the
//! screens depend on and the seam where test doubles are injected; the
//! client crate provides pass-through implementations over the typed
//! resource clients. No port adds logic beyond its single delegated call.

use async_trait::async_trait;
use vitrin_domain::{AddFavoriteRequest, AddToCartRequest, Address, AddressActionResponse,
                    AuthResponse, Cart, CartItemActionResponse, Category, CategoryActionResponse,
                    CategoryRequest, CreateAddressRequest, CreateOrderRequest,
                    CreateProductRequest, Favorite, FavoriteResponse, LoginRequest,
                    MessageResponse, Order, OrderActionResponse, Product, ProductActionResponse,
                    ProductImageResponse, RegisterRequest, Result, SellerApplyRequest,
                    SellerRequest, SellerRequestResponse, UpdateAddressRequest,
                    UpdateCartItemRequest, UpdateOrderStatusRequest, UpdateProductRequest,
                    UpdateUserRequest, User, UserUpdateResponse};

/// One file to upload alongside a product, held as owned bytes so the
/// request can be rebuilt if the transport retries it.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Authentication operations
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Register a new account; on success the credential store is seeded.
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;

    /// Log in; on success the credential store is seeded.
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// Exchange the stored refresh token for a new access token. The new
    /// token is also persisted to the credential store.
    async fn refresh(&self) -> Result<String>;

    /// Drop local credentials. Purely local; the server keeps no session.
    async fn logout(&self) -> Result<()>;
}

/// User account operations
#[async_trait]
pub trait UsersPort: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>>;
    async fn get_me(&self) -> Result<User>;
    async fn get_by_id(&self, user_id: i64) -> Result<User>;
    async fn update(&self, user_id: i64, request: UpdateUserRequest) -> Result<UserUpdateResponse>;
    async fn delete(&self, user_id: i64) -> Result<MessageResponse>;
}

/// Product catalog operations
#[async_trait]
pub trait ProductsPort: Send + Sync {
    /// Full-text search; returns the complete matching set (no pagination
    /// exists on this wire).
    async fn search(&self, query: &str) -> Result<Vec<Product>>;
    async fn get_all(&self) -> Result<Vec<Product>>;
    async fn get_by_id(&self, product_id: i64) -> Result<Product>;
    async fn create(&self, request: CreateProductRequest) -> Result<ProductActionResponse>;
    async fn update(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> Result<ProductActionResponse>;
    async fn delete(&self, product_id: i64) -> Result<MessageResponse>;
    /// Multipart upload, one part per file; the response carries the
    /// server-assigned image ids.
    async fn add_images(
        &self,
        product_id: i64,
        files: Vec<ImageUpload>,
    ) -> Result<ProductImageResponse>;
    /// Deletion is by server-assigned image id, never by position.
    async fn delete_image(&self, image_id: i64) -> Result<MessageResponse>;
    async fn get_by_seller(&self, seller_id: i64) -> Result<Vec<Product>>;
    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>>;
}

/// Category tree operations
#[async_trait]
pub trait CategoriesPort: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>>;
    async fn get_roots(&self) -> Result<Vec<Category>>;
    async fn get_by_id(&self, category_id: i64) -> Result<Category>;
    async fn get_children(&self, parent_id: i64) -> Result<Vec<Category>>;
    async fn create(&self, request: CategoryRequest) -> Result<CategoryActionResponse>;
    async fn update(
        &self,
        category_id: i64,
        request: CategoryRequest,
    ) -> Result<CategoryActionResponse>;
    async fn delete(&self, category_id: i64) -> Result<MessageResponse>;
}

/// Cart operations
#[async_trait]
pub trait CartPort: Send + Sync {
    async fn get(&self) -> Result<Cart>;
    async fn add_item(&self, request: AddToCartRequest) -> Result<CartItemActionResponse>;
    async fn update_item(
        &self,
        cart_item_id: i64,
        request: UpdateCartItemRequest,
    ) -> Result<CartItemActionResponse>;
    async fn remove_item(&self, cart_item_id: i64) -> Result<MessageResponse>;
    async fn clear(&self) -> Result<MessageResponse>;
}

/// Order operations
#[async_trait]
pub trait OrdersPort: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Order>>;
    async fn get_by_id(&self, order_id: i64) -> Result<Order>;
    async fn create(&self, request: CreateOrderRequest) -> Result<OrderActionResponse>;
    /// Admin-only on the server side; no client-side gate.
    async fn update_status(
        &self,
        order_id: i64,
        request: UpdateOrderStatusRequest,
    ) -> Result<OrderActionResponse>;
    async fn cancel(&self, order_id: i64) -> Result<MessageResponse>;
}

/// Favorites operations
#[async_trait]
pub trait FavoritesPort: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Favorite>>;
    async fn add(&self, request: AddFavoriteRequest) -> Result<FavoriteResponse>;
    /// Keyed by product id on the wire, not by favorite id.
    async fn remove(&self, product_id: i64) -> Result<FavoriteResponse>;
}

/// Address book operations
#[async_trait]
pub trait AddressesPort: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Address>>;
    async fn get_by_id(&self, address_id: i64) -> Result<Address>;
    async fn create(&self, request: CreateAddressRequest) -> Result<AddressActionResponse>;
    async fn update(
        &self,
        address_id: i64,
        request: UpdateAddressRequest,
    ) -> Result<AddressActionResponse>;
    async fn delete(&self, address_id: i64) -> Result<MessageResponse>;
}

/// Seller application operations
#[async_trait]
pub trait SellerRequestsPort: Send + Sync {
    async fn apply(&self, request: SellerApplyRequest) -> Result<SellerRequestResponse>;
    async fn get_pending(&self) -> Result<Vec<SellerRequest>>;
    async fn approve(&self, request_id: i64) -> Result<SellerRequestResponse>;
    async fn reject(&self, request_id: i64) -> Result<SellerRequestResponse>;
}
