//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use atelier_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        catalog::{
            MockCatalogService,
            models::{CategoryRecord, CategoryUuid, ProductRecord, ProductUuid},
        },
        designs::MockDesignsService,
        orders::MockOrdersService,
    },
};

use crate::state::State;

pub(crate) const TEST_SESSION: &str = "test-session";

pub(crate) fn make_category(uuid: CategoryUuid, name: &str, slug: &str) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: None,
        image_url: None,
    }
}

pub(crate) fn make_product(uuid: ProductUuid, slug: &str, price: Decimal) -> ProductRecord {
    ProductRecord {
        uuid,
        name: slug.to_uppercase().replace('-', " "),
        slug: slug.to_owned(),
        description: None,
        price,
        category_uuid: None,
        images: Vec::new(),
        sizes: vec!["S".to_owned(), "M".to_owned()],
        colors: vec!["Black".to_owned()],
        in_stock: true,
        featured: false,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_categories().never();
    catalog.expect_get_category_by_slug().never();
    catalog.expect_create_category().never();
    catalog.expect_list_products().never();
    catalog.expect_search_products().never();
    catalog.expect_get_product_by_slug().never();
    catalog.expect_get_product().never();
    catalog.expect_create_product().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_items().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();
    carts.expect_totals().never();

    carts
}

fn strict_designs_mock() -> MockDesignsService {
    let mut designs = MockDesignsService::new();

    designs.expect_save_design().never();
    designs.expect_get_design().never();
    designs.expect_list_designs_by_user().never();
    designs.expect_attach_to_order().never();

    designs
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_get_order().never();

    orders
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(strict_carts_mock()),
        designs: Arc::new(strict_designs_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(strict_catalog_mock()),
        carts: Arc::new(carts),
        designs: Arc::new(strict_designs_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_designs(designs: MockDesignsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(strict_catalog_mock()),
        carts: Arc::new(strict_carts_mock()),
        designs: Arc::new(designs),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(strict_catalog_mock()),
        carts: Arc::new(strict_carts_mock()),
        designs: Arc::new(strict_designs_mock()),
        orders: Arc::new(orders),
    }))
}

fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with_state(state_with_catalog(catalog), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with_state(state_with_carts(carts), route)
}

pub(crate) fn designs_service(designs: MockDesignsService, route: Router) -> Service {
    service_with_state(state_with_designs(designs), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with_state(state_with_orders(orders), route)
}
