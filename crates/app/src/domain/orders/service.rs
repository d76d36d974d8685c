//! Orders service.

use async_trait::async_trait;
use atelier_core::{PricedLine, PricingConfig, checkout_breakdown};
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::info;

use crate::{
    domain::{
        carts::{MemCartsRepository, models::SessionId},
        catalog::MemCatalogRepository,
        designs::{LinkError, MemDesignsRepository},
        orders::{
            MemOrdersRepository,
            errors::OrdersServiceError,
            models::{NewOrder, OrderItemRecord, OrderRecord, OrderStatus, OrderUuid},
        },
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemOrdersService {
    store: Store,
    pricing: PricingConfig,
    repository: MemOrdersRepository,
    carts: MemCartsRepository,
    catalog: MemCatalogRepository,
    designs: MemDesignsRepository,
}

impl MemOrdersService {
    #[must_use]
    pub fn new(store: Store, pricing: PricingConfig) -> Self {
        Self {
            store,
            pricing,
            repository: MemOrdersRepository::new(),
            carts: MemCartsRepository::new(),
            catalog: MemCatalogRepository::new(),
            designs: MemDesignsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for MemOrdersService {
    async fn place_order(
        &self,
        session: &SessionId,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tables = self.store.write().await;

        // Validate everything before the first mutation: a failure below
        // this block leaves the cart and every design untouched.
        let cart_items = self.carts.items_for_session(&tables, session);

        if cart_items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let mut items = Vec::with_capacity(cart_items.len());
        let mut lines = Vec::with_capacity(cart_items.len());

        for cart_item in cart_items {
            let product = self
                .catalog
                .product(&tables, cart_item.product_uuid)
                .ok_or(OrdersServiceError::ProductMissing)?;

            lines.push(PricedLine::new(product.price, cart_item.quantity));

            items.push(OrderItemRecord {
                product_uuid: product.uuid,
                name: product.name,
                unit_price: product.price,
                quantity: cart_item.quantity,
                size: cart_item.size,
                color: cart_item.color,
            });
        }

        // A repeated uuid would pass check_linkable twice and only fail on
        // the second link, after the order had been inserted.
        let mut seen = FxHashSet::default();

        for design in &order.design_uuids {
            if !seen.insert(*design) {
                return Err(OrdersServiceError::DesignAlreadyLinked(*design));
            }

            self.designs
                .check_linkable(&tables, *design)
                .map_err(|error| match error {
                    LinkError::NotFound => OrdersServiceError::DesignNotFound(*design),
                    LinkError::AlreadyLinked => OrdersServiceError::DesignAlreadyLinked(*design),
                })?;
        }

        let breakdown = checkout_breakdown(&lines, &self.pricing)?;

        let record = OrderRecord {
            uuid: OrderUuid::new(),
            session_id: session.clone(),
            user_email: order.user_email,
            status: OrderStatus::Pending,
            breakdown,
            shipping_address: order.shipping_address,
            payment_ref: order.payment_ref,
            items,
            created_at: Timestamp::now(),
        };

        let uuid = record.uuid;

        self.repository.insert_order(&mut tables, record.clone());

        for design in &order.design_uuids {
            self.designs
                .link_to_order(&mut tables, *design, uuid)
                .map_err(|error| match error {
                    LinkError::NotFound => OrdersServiceError::DesignNotFound(*design),
                    LinkError::AlreadyLinked => OrdersServiceError::DesignAlreadyLinked(*design),
                })?;
        }

        self.carts.clear_session(&mut tables, session);

        info!(order = %uuid, session = %session, total = %breakdown.total, "order placed");

        Ok(record)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let tables = self.store.read().await;

        self.repository
            .get_order(&tables, order)
            .ok_or(OrdersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places an order from the session's cart: freezes line prices, derives
    /// the pricing breakdown, links the referenced designs, and clears the
    /// cart. Atomic: on any failure nothing is mutated.
    async fn place_order(
        &self,
        session: &SessionId,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves a placed order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::{
        carts::{CartsService, MemCartsService, models::NewCartItem},
        catalog::{
            CatalogService, MemCatalogService,
            models::{NewProduct, ProductUuid},
        },
        designs::{
            DesignsService, MemDesignsService,
            models::{CanvasSpec, DesignStatus, DesignUuid, NewDesign},
        },
        orders::models::ShippingAddress,
    };

    use super::*;

    struct Fixture {
        carts: MemCartsService,
        designs: MemDesignsService,
        orders: MemOrdersService,
        product: ProductUuid,
    }

    fn pricing() -> TestResult<PricingConfig> {
        Ok(PricingConfig {
            flat_shipping_fee: "9.99".parse()?,
            free_shipping_threshold: "100.00".parse()?,
            tax_rate: "0.18".parse()?,
        })
    }

    async fn fixture() -> TestResult<Fixture> {
        let store = Store::new();
        let catalog = MemCatalogService::new(store.clone());

        let product = catalog
            .create_product(NewProduct {
                name: "TAILORED BLAZER".to_owned(),
                slug: "tailored-blazer".to_owned(),
                description: None,
                price: "19.99".parse()?,
                category_uuid: None,
                images: Vec::new(),
                sizes: Vec::new(),
                colors: Vec::new(),
                in_stock: true,
                featured: false,
            })
            .await?;

        Ok(Fixture {
            carts: MemCartsService::new(store.clone()),
            designs: MemDesignsService::new(store.clone()),
            orders: MemOrdersService::new(store, pricing()?),
            product: product.uuid,
        })
    }

    fn session() -> SessionId {
        SessionId::from("test-session")
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            name: "A Customer".to_owned(),
            email: "customer@example.com".to_owned(),
            address: "1 High Street".to_owned(),
            city: "London".to_owned(),
            postal_code: "N1 1AA".to_owned(),
        }
    }

    fn new_order(designs: Vec<DesignUuid>) -> NewOrder {
        NewOrder {
            user_email: Some("customer@example.com".to_owned()),
            shipping_address: address(),
            payment_ref: None,
            design_uuids: designs,
        }
    }

    async fn save_design(fixture: &Fixture) -> TestResult<DesignUuid> {
        let saved = fixture
            .designs
            .save_design(NewDesign {
                user_id: Some("guest-user".to_owned()),
                product_uuid: fixture.product,
                canvas: CanvasSpec {
                    width: 600.0,
                    height: 600.0,
                },
                text_elements: Vec::new(),
                image_elements: Vec::new(),
                preview_image_url: None,
            })
            .await?;

        Ok(saved.design.uuid)
    }

    #[tokio::test]
    async fn place_order_freezes_prices_and_clears_cart() -> TestResult {
        let fixture = fixture().await?;

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: Some("M".to_owned()),
                    color: None,
                },
            )
            .await?;

        let order = fixture
            .orders
            .place_order(&session(), new_order(Vec::new()))
            .await?;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].unit_price, "19.99".parse::<Decimal>()?);
        assert_eq!(order.items[0].size.as_deref(), Some("M"));

        // 19.99 + 9.99 shipping + 3.60 tax.
        assert_eq!(order.breakdown.subtotal, "19.99".parse::<Decimal>()?);
        assert_eq!(order.breakdown.shipping_fee, "9.99".parse::<Decimal>()?);
        assert_eq!(order.breakdown.tax_amount, "3.60".parse::<Decimal>()?);
        assert_eq!(order.breakdown.total, "33.58".parse::<Decimal>()?);

        assert!(
            fixture.carts.list_items(&session()).await?.is_empty(),
            "the cart is cleared once the order commits"
        );

        Ok(())
    }

    #[tokio::test]
    async fn place_order_links_referenced_designs() -> TestResult {
        let fixture = fixture().await?;
        let design = save_design(&fixture).await?;

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;

        let order = fixture
            .orders
            .place_order(&session(), new_order(vec![design]))
            .await?;

        let linked = fixture.designs.get_design(design).await?;

        assert_eq!(linked.design.status(), DesignStatus::OrderLinked);
        assert_eq!(linked.design.order_uuid, Some(order.uuid));

        Ok(())
    }

    #[tokio::test]
    async fn place_order_empty_cart_rejected() -> TestResult {
        let fixture = fixture().await?;

        let result = fixture
            .orders
            .place_order(&session(), new_order(Vec::new()))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_placement_leaves_cart_and_designs_untouched() -> TestResult {
        let fixture = fixture().await?;

        let good = save_design(&fixture).await?;
        let consumed = save_design(&fixture).await?;

        // Consume the second design with a first order from another session.
        let other = SessionId::from("other-session");
        fixture
            .carts
            .add_item(
                &other,
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;
        fixture
            .orders
            .place_order(&other, new_order(vec![consumed]))
            .await?;

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 2,
                    size: None,
                    color: None,
                },
            )
            .await?;

        // The already-consumed design makes this placement fail.
        let result = fixture
            .orders
            .place_order(&session(), new_order(vec![good, consumed]))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::DesignAlreadyLinked(uuid)) if uuid == consumed),
            "expected DesignAlreadyLinked, got {result:?}"
        );

        // Nothing moved: the cart is intact and the valid design is unlinked.
        assert_eq!(fixture.carts.list_items(&session()).await?.len(), 1);
        assert_eq!(
            fixture.designs.get_design(good).await?.design.status(),
            DesignStatus::Saved
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_design_uuid_rejected_before_any_mutation() -> TestResult {
        let fixture = fixture().await?;
        let design = save_design(&fixture).await?;

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;

        let result = fixture
            .orders
            .place_order(&session(), new_order(vec![design, design]))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::DesignAlreadyLinked(uuid)) if uuid == design),
            "expected DesignAlreadyLinked, got {result:?}"
        );

        // The failure commits nothing: no order, no link, cart intact.
        assert_eq!(
            fixture.designs.get_design(design).await?.design.status(),
            DesignStatus::Saved
        );
        assert_eq!(
            fixture.designs.get_design(design).await?.design.order_uuid,
            None
        );
        assert_eq!(fixture.carts.list_items(&session()).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn place_order_unknown_design_rejected() -> TestResult {
        let fixture = fixture().await?;
        let missing = DesignUuid::new();

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;

        let result = fixture
            .orders
            .place_order(&session(), new_order(vec![missing]))
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::DesignNotFound(uuid)) if uuid == missing),
            "expected DesignNotFound, got {result:?}"
        );
        assert_eq!(fixture.carts.list_items(&session()).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn placed_order_retrievable_by_uuid() -> TestResult {
        let fixture = fixture().await?;

        fixture
            .carts
            .add_item(
                &session(),
                NewCartItem {
                    product_uuid: fixture.product,
                    quantity: 1,
                    size: None,
                    color: None,
                },
            )
            .await?;

        let placed = fixture
            .orders
            .place_order(&session(), new_order(Vec::new()))
            .await?;

        let fetched = fixture.orders.get_order(placed.uuid).await?;

        assert_eq!(fetched, placed);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_returns_not_found() -> TestResult {
        let fixture = fixture().await?;

        let result = fixture.orders.get_order(OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
