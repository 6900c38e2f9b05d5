mod auth;
mod category;
mod hashing;
mod jwt;
mod order;
mod order_item;
mod product;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait, CategoryServiceTrait,
    DynCategoryCommandRepository, DynCategoryQueryRepository, DynCategoryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::order_item::{
    DynOrderItemCommandRepository, DynOrderItemQueryRepository, DynOrderItemService,
    OrderItemCommandRepositoryTrait, OrderItemQueryRepositoryTrait, OrderItemServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{DynUserQueryRepository, UserQueryRepositoryTrait};
