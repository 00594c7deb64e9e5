//! Port implementations over the resource clients
//!
//! One repository per resource, each a pass-through to its typed client.
//! They exist so screens and services depend on the `vitrin-core` traits
//! and never on this crate's HTTP types; all retry, refresh, and error
//! mapping already happened below.

use std::sync::Arc;

use async_trait::async_trait;
use vitrin_core::ports::{AddressesPort, AuthPort, CartPort, CategoriesPort, FavoritesPort,
                         ImageUpload, OrdersPort, ProductsPort, SellerRequestsPort, UsersPort};
use vitrin_domain::{AddFavoriteRequest, AddToCartRequest, Address, AddressActionResponse,
                    AuthResponse, Cart, CartItemActionResponse, Category,
                    CategoryActionResponse, CategoryRequest, CreateAddressRequest,
                    CreateOrderRequest, CreateProductRequest, Favorite, FavoriteResponse,
                    LoginRequest, MessageResponse, Order, OrderActionResponse, Product,
                    ProductActionResponse, ProductImageResponse, RegisterRequest, Result,
                    SellerApplyRequest, SellerRequest, SellerRequestResponse,
                    UpdateAddressRequest, UpdateCartItemRequest, UpdateOrderStatusRequest,
                    UpdateProductRequest, UpdateUserRequest, User, UserUpdateResponse};

use crate::api::{AddressesClient, AuthClient, CartClient, CategoriesClient, FavoritesClient,
                 OrdersClient, ProductsClient, SellerRequestsClient, UsersClient};
use crate::transport::AuthTransport;

/// [`AuthPort`] over [`AuthClient`]
pub struct AuthRepository {
    client: AuthClient,
}

impl AuthRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: AuthClient::new(transport) }
    }
}

#[async_trait]
impl AuthPort for AuthRepository {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        self.client.register(&request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        self.client.login(&request).await
    }

    async fn refresh(&self) -> Result<String> {
        self.client.refresh().await
    }

    async fn logout(&self) -> Result<()> {
        self.client.logout().await
    }
}

/// [`UsersPort`] over [`UsersClient`]
pub struct UsersRepository {
    client: UsersClient,
}

impl UsersRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: UsersClient::new(transport) }
    }
}

#[async_trait]
impl UsersPort for UsersRepository {
    async fn get_all(&self) -> Result<Vec<User>> {
        self.client.get_all().await
    }

    async fn get_me(&self) -> Result<User> {
        self.client.get_me().await
    }

    async fn get_by_id(&self, user_id: i64) -> Result<User> {
        self.client.get_by_id(user_id).await
    }

    async fn update(&self, user_id: i64, request: UpdateUserRequest) -> Result<UserUpdateResponse> {
        self.client.update(user_id, &request).await
    }

    async fn delete(&self, user_id: i64) -> Result<MessageResponse> {
        self.client.delete(user_id).await
    }
}

/// [`ProductsPort`] over [`ProductsClient`]
pub struct ProductsRepository {
    client: ProductsClient,
}

impl ProductsRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: ProductsClient::new(transport) }
    }
}

#[async_trait]
impl ProductsPort for ProductsRepository {
    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        self.client.search(query).await
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        self.client.get_all().await
    }

    async fn get_by_id(&self, product_id: i64) -> Result<Product> {
        self.client.get_by_id(product_id).await
    }

    async fn create(&self, request: CreateProductRequest) -> Result<ProductActionResponse> {
        self.client.create(&request).await
    }

    async fn update(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> Result<ProductActionResponse> {
        self.client.update(product_id, &request).await
    }

    async fn delete(&self, product_id: i64) -> Result<MessageResponse> {
        self.client.delete(product_id).await
    }

    async fn add_images(
        &self,
        product_id: i64,
        files: Vec<ImageUpload>,
    ) -> Result<ProductImageResponse> {
        self.client.add_images(product_id, files).await
    }

    async fn delete_image(&self, image_id: i64) -> Result<MessageResponse> {
        self.client.delete_image(image_id).await
    }

    async fn get_by_seller(&self, seller_id: i64) -> Result<Vec<Product>> {
        self.client.get_by_seller(seller_id).await
    }

    async fn get_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        self.client.get_by_category(category_id).await
    }
}

/// [`CategoriesPort`] over [`CategoriesClient`]
pub struct CategoriesRepository {
    client: CategoriesClient,
}

impl CategoriesRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: CategoriesClient::new(transport) }
    }
}

#[async_trait]
impl CategoriesPort for CategoriesRepository {
    async fn get_all(&self) -> Result<Vec<Category>> {
        self.client.get_all().await
    }

    async fn get_roots(&self) -> Result<Vec<Category>> {
        self.client.get_roots().await
    }

    async fn get_by_id(&self, category_id: i64) -> Result<Category> {
        self.client.get_by_id(category_id).await
    }

    async fn get_children(&self, parent_id: i64) -> Result<Vec<Category>> {
        self.client.get_children(parent_id).await
    }

    async fn create(&self, request: CategoryRequest) -> Result<CategoryActionResponse> {
        self.client.create(&request).await
    }

    async fn update(
        &self,
        category_id: i64,
        request: CategoryRequest,
    ) -> Result<CategoryActionResponse> {
        self.client.update(category_id, &request).await
    }

    async fn delete(&self, category_id: i64) -> Result<MessageResponse> {
        self.client.delete(category_id).await
    }
}

/// [`CartPort`] over [`CartClient`]
pub struct CartRepository {
    client: CartClient,
}

impl CartRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: CartClient::new(transport) }
    }
}

#[async_trait]
impl CartPort for CartRepository {
    async fn get(&self) -> Result<Cart> {
        self.client.get().await
    }

    async fn add_item(&self, request: AddToCartRequest) -> Result<CartItemActionResponse> {
        self.client.add_item(&request).await
    }

    async fn update_item(
        &self,
        cart_item_id: i64,
        request: UpdateCartItemRequest,
    ) -> Result<CartItemActionResponse> {
        self.client.update_item(cart_item_id, &request).await
    }

    async fn remove_item(&self, cart_item_id: i64) -> Result<MessageResponse> {
        self.client.remove_item(cart_item_id).await
    }

    async fn clear(&self) -> Result<MessageResponse> {
        self.client.clear().await
    }
}

/// [`OrdersPort`] over [`OrdersClient`]
pub struct OrdersRepository {
    client: OrdersClient,
}

impl OrdersRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: OrdersClient::new(transport) }
    }
}

#[async_trait]
impl OrdersPort for OrdersRepository {
    async fn get_all(&self) -> Result<Vec<Order>> {
        self.client.get_all().await
    }

    async fn get_by_id(&self, order_id: i64) -> Result<Order> {
        self.client.get_by_id(order_id).await
    }

    async fn create(&self, request: CreateOrderRequest) -> Result<OrderActionResponse> {
        self.client.create(&request).await
    }

    async fn update_status(
        &self,
        order_id: i64,
        request: UpdateOrderStatusRequest,
    ) -> Result<OrderActionResponse> {
        self.client.update_status(order_id, &request).await
    }

    async fn cancel(&self, order_id: i64) -> Result<MessageResponse> {
        self.client.cancel(order_id).await
    }
}

/// [`FavoritesPort`] over [`FavoritesClient`]
pub struct FavoritesRepository {
    client: FavoritesClient,
}

impl FavoritesRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: FavoritesClient::new(transport) }
    }
}

#[async_trait]
impl FavoritesPort for FavoritesRepository {
    async fn get_all(&self) -> Result<Vec<Favorite>> {
        self.client.get_all().await
    }

    async fn add(&self, request: AddFavoriteRequest) -> Result<FavoriteResponse> {
        self.client.add(&request).await
    }

    async fn remove(&self, product_id: i64) -> Result<FavoriteResponse> {
        self.client.remove(product_id).await
    }
}

/// [`AddressesPort`] over [`AddressesClient`]
pub struct AddressesRepository {
    client: AddressesClient,
}

impl AddressesRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: AddressesClient::new(transport) }
    }
}

#[async_trait]
impl AddressesPort for AddressesRepository {
    async fn get_all(&self) -> Result<Vec<Address>> {
        self.client.get_all().await
    }

    async fn get_by_id(&self, address_id: i64) -> Result<Address> {
        self.client.get_by_id(address_id).await
    }

    async fn create(&self, request: CreateAddressRequest) -> Result<AddressActionResponse> {
        self.client.create(&request).await
    }

    async fn update(
        &self,
        address_id: i64,
        request: UpdateAddressRequest,
    ) -> Result<AddressActionResponse> {
        self.client.update(address_id, &request).await
    }

    async fn delete(&self, address_id: i64) -> Result<MessageResponse> {
        self.client.delete(address_id).await
    }
}

/// [`SellerRequestsPort`] over [`SellerRequestsClient`]
pub struct SellerRequestsRepository {
    client: SellerRequestsClient,
}

impl SellerRequestsRepository {
    /// Create the repository over a shared transport
    #[must_use]
    pub fn new(transport: Arc<AuthTransport>) -> Self {
        Self { client: SellerRequestsClient::new(transport) }
    }
}

#[async_trait]
impl SellerRequestsPort for SellerRequestsRepository {
    async fn apply(&self, request: SellerApplyRequest) -> Result<SellerRequestResponse> {
        self.client.apply(&request).await
    }

    async fn get_pending(&self) -> Result<Vec<SellerRequest>> {
        self.client.get_pending().await
    }

    async fn approve(&self, request_id: i64) -> Result<SellerRequestResponse> {
        self.client.approve(request_id).await
    }

    async fn reject(&self, request_id: i64) -> Result<SellerRequestResponse> {
        self.client.reject(request_id).await
    }
}
