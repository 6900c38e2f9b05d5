use shared::{
    abstract_trait::{
        DynAuthService, DynCategoryService, DynHashing, DynJwtService, DynOrderCommandService,
        DynOrderItemService, DynOrderQueryService, DynProductService,
    },
    config::{ConnectionPool, Hashing},
    repository::{
        CategoryCommandRepository, CategoryQueryRepository, OrderCommandRepository,
        OrderItemCommandRepository, OrderItemQueryRepository, OrderQueryRepository,
        ProductCommandRepository, ProductQueryRepository, UserQueryRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CategoryService, OrderCommandService,
        OrderCommandServiceDeps, OrderItemService, OrderQueryService, ProductService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub order_item_service: DynOrderItemService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("category_service", &"CategoryService")
            .field("product_service", &"ProductService")
            .field("order_query_service", &"OrderQueryService")
            .field("order_command_service", &"OrderCommandService")
            .field("order_item_service", &"OrderItemService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let user_query = Arc::new(UserQueryRepository::new(pool.clone()));
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: user_query,
            hash: hashing,
            jwt,
        })) as DynAuthService;

        let category_query = Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command = Arc::new(CategoryCommandRepository::new(pool.clone()));
        let category_service =
            Arc::new(CategoryService::new(category_query, category_command)) as DynCategoryService;

        let product_query = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command = Arc::new(ProductCommandRepository::new(pool.clone()));
        let product_service =
            Arc::new(ProductService::new(product_query, product_command)) as DynProductService;

        let order_query = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command = Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query_service =
            Arc::new(OrderQueryService::new(order_query.clone())) as DynOrderQueryService;
        let order_command_service = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            command: order_command,
            query: order_query,
        })) as DynOrderCommandService;

        let order_item_query = Arc::new(OrderItemQueryRepository::new(pool.clone()));
        let order_item_command = Arc::new(OrderItemCommandRepository::new(pool.clone()));
        let order_item_service = Arc::new(OrderItemService::new(
            order_item_query,
            order_item_command,
        )) as DynOrderItemService;

        Self {
            auth_service,
            category_service,
            product_service,
            order_query_service,
            order_command_service,
            order_item_service,
        }
    }
}
