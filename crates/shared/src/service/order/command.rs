use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderDetailResponse, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps { command, query } = deps;
        Self { command, query }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        auth_user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let user_id = req.user_id.unwrap_or(auth_user_id);
        info!(
            "🏗️ Placing order for user {} with {} lines",
            user_id,
            req.products.len()
        );

        let order = self.command.place_order(user_id, &req.products).await?;
        let items = self.query.find_items(order.order_id).await?;

        Ok(ApiResponse::success(
            "Order placed successfully",
            OrderDetailResponse::from_parts(order, items),
        ))
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        info!("🔄 Updating order {} with {} lines", id, req.products.len());

        let order = self
            .command
            .rebuild_order(id, req.status, &req.products)
            .await?;
        let items = self.query.find_items(order.order_id).await?;

        Ok(ApiResponse::success(
            "Order updated successfully",
            OrderDetailResponse::from_parts(order, items),
        ))
    }

    async fn cancel_order(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.cancel_order(id).await?;

        Ok(ApiResponse::success(
            "Order canceled successfully",
            order.into(),
        ))
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete_order(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        domain::requests::{FindAllOrders, OrderLineRequest},
        errors::RepositoryError,
        model::{Order, OrderItem, OrderStatus},
    };
    use std::sync::Arc;

    const UNIT_PRICE: i64 = 500;

    /// In-memory stand-in for the transactional repository: one product with
    /// a fixed price and adjustable stock. Reserved quantities are tracked so
    /// cancel/delete can give stock back the way the real repository does,
    /// gated on `OrderStatus::holds_stock`.
    struct FakeOrderRepo {
        stock: std::sync::Mutex<i32>,
        reserved: std::sync::Mutex<i32>,
        last_user_id: std::sync::Mutex<Option<i32>>,
        status: std::sync::Mutex<OrderStatus>,
    }

    impl FakeOrderRepo {
        fn with_stock(stock: i32) -> Self {
            Self {
                stock: std::sync::Mutex::new(stock),
                reserved: std::sync::Mutex::new(0),
                last_user_id: std::sync::Mutex::new(None),
                status: std::sync::Mutex::new(OrderStatus::Pending),
            }
        }

        fn order(&self, total: i64) -> Order {
            Order {
                order_id: 1,
                user_id: 7,
                status: *self.status.lock().unwrap(),
                total_amount: total,
                created_at: None,
                updated_at: None,
            }
        }

        fn restore_if_held(&self) {
            let holds = self.status.lock().unwrap().holds_stock();
            if holds {
                let reserved = std::mem::take(&mut *self.reserved.lock().unwrap());
                *self.stock.lock().unwrap() += reserved;
            }
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeOrderRepo {
        async fn place_order(
            &self,
            user_id: i32,
            lines: &[OrderLineRequest],
        ) -> Result<Order, RepositoryError> {
            *self.last_user_id.lock().unwrap() = Some(user_id);
            let mut total = 0;
            for line in lines {
                let mut stock = self.stock.lock().unwrap();
                if *stock < line.quantity {
                    return Err(RepositoryError::InsufficientStock {
                        product_id: line.product_id,
                    });
                }
                *stock -= line.quantity;
                *self.reserved.lock().unwrap() += line.quantity;
                total += UNIT_PRICE * line.quantity as i64;
            }
            Ok(self.order(total))
        }

        async fn rebuild_order(
            &self,
            _order_id: i32,
            _status: Option<OrderStatus>,
            lines: &[OrderLineRequest],
        ) -> Result<Order, RepositoryError> {
            self.place_order(7, lines).await
        }

        async fn cancel_order(&self, _order_id: i32) -> Result<Order, RepositoryError> {
            self.restore_if_held();
            *self.status.lock().unwrap() = OrderStatus::Canceled;
            Ok(self.order(0))
        }

        async fn delete_order(&self, _order_id: i32) -> Result<(), RepositoryError> {
            self.restore_if_held();
            Ok(())
        }
    }

    struct FakeOrderQuery;

    #[async_trait]
    impl OrderQueryRepositoryTrait for FakeOrderQuery {
        async fn find_all(
            &self,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            Ok((vec![], 0))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }

        async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(vec![OrderItem {
                order_item_id: 1,
                order_id,
                product_id: 1,
                quantity: 3,
                price: UNIT_PRICE * 3,
                created_at: None,
                updated_at: None,
            }])
        }
    }

    fn service(repo: FakeOrderRepo) -> (OrderCommandService, Arc<FakeOrderRepo>) {
        let repo = Arc::new(repo);
        let svc = OrderCommandService::new(OrderCommandServiceDeps {
            command: repo.clone(),
            query: Arc::new(FakeOrderQuery),
        });
        (svc, repo)
    }

    #[tokio::test]
    async fn placing_an_order_reports_total_and_items() {
        let (svc, _) = service(FakeOrderRepo::with_stock(10));

        let resp = svc
            .create_order(
                7,
                &CreateOrderRequest {
                    user_id: None,
                    products: vec![OrderLineRequest {
                        product_id: 1,
                        quantity: 3,
                    }],
                },
            )
            .await
            .unwrap();

        assert_eq!(resp.data.total_amount, 1500);
        assert_eq!(resp.data.items.len(), 1);
        assert_eq!(resp.data.items[0].price, 1500);
    }

    #[tokio::test]
    async fn insufficient_stock_surfaces_as_repo_error() {
        let (svc, _) = service(FakeOrderRepo::with_stock(2));

        let err = svc
            .create_order(
                7,
                &CreateOrderRequest {
                    user_id: None,
                    products: vec![OrderLineRequest {
                        product_id: 1,
                        quantity: 3,
                    }],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::InsufficientStock { product_id: 1 })
        ));
    }

    #[tokio::test]
    async fn explicit_user_id_wins_over_authenticated_caller() {
        let (svc, repo) = service(FakeOrderRepo::with_stock(10));

        svc.create_order(
            7,
            &CreateOrderRequest {
                user_id: Some(99),
                products: vec![OrderLineRequest {
                    product_id: 1,
                    quantity: 1,
                }],
            },
        )
        .await
        .unwrap();

        assert_eq!(*repo.last_user_id.lock().unwrap(), Some(99));
    }

    #[tokio::test]
    async fn canceling_twice_restores_stock_only_once() {
        let (svc, repo) = service(FakeOrderRepo::with_stock(10));

        svc.create_order(
            7,
            &CreateOrderRequest {
                user_id: None,
                products: vec![OrderLineRequest {
                    product_id: 1,
                    quantity: 3,
                }],
            },
        )
        .await
        .unwrap();
        assert_eq!(*repo.stock.lock().unwrap(), 7);

        svc.cancel_order(1).await.unwrap();
        assert_eq!(*repo.stock.lock().unwrap(), 10);

        svc.cancel_order(1).await.unwrap();
        assert_eq!(*repo.stock.lock().unwrap(), 10);
    }

    #[tokio::test]
    async fn deleting_a_pending_order_restores_stock() {
        let (svc, repo) = service(FakeOrderRepo::with_stock(10));

        svc.create_order(
            7,
            &CreateOrderRequest {
                user_id: None,
                products: vec![OrderLineRequest {
                    product_id: 1,
                    quantity: 4,
                }],
            },
        )
        .await
        .unwrap();
        assert_eq!(*repo.stock.lock().unwrap(), 6);

        svc.delete_order(1).await.unwrap();
        assert_eq!(*repo.stock.lock().unwrap(), 10);
    }

    #[tokio::test]
    async fn deleting_a_canceled_order_does_not_restore_again() {
        let (svc, repo) = service(FakeOrderRepo::with_stock(10));

        svc.create_order(
            7,
            &CreateOrderRequest {
                user_id: None,
                products: vec![OrderLineRequest {
                    product_id: 1,
                    quantity: 3,
                }],
            },
        )
        .await
        .unwrap();

        svc.cancel_order(1).await.unwrap();
        svc.delete_order(1).await.unwrap();

        assert_eq!(*repo.stock.lock().unwrap(), 10);
    }

    #[tokio::test]
    async fn omitted_user_id_defaults_to_authenticated_caller() {
        let (svc, repo) = service(FakeOrderRepo::with_stock(10));

        svc.create_order(
            7,
            &CreateOrderRequest {
                user_id: None,
                products: vec![OrderLineRequest {
                    product_id: 1,
                    quantity: 1,
                }],
            },
        )
        .await
        .unwrap();

        assert_eq!(*repo.last_user_id.lock().unwrap(), Some(7));
    }
}
