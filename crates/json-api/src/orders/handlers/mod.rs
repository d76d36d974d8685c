//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use atelier_core::PricingBreakdown;

    use atelier_app::domain::{
        carts::models::SessionId,
        catalog::models::ProductUuid,
        orders::models::{
            OrderItemRecord, OrderRecord, OrderStatus, OrderUuid, ShippingAddress,
        },
    };

    pub(super) fn make_address() -> ShippingAddress {
        ShippingAddress {
            name: "A Customer".to_owned(),
            email: "customer@example.com".to_owned(),
            address: "1 High Street".to_owned(),
            city: "London".to_owned(),
            postal_code: "N1 1AA".to_owned(),
        }
    }

    pub(super) fn make_order(uuid: OrderUuid, session: &str) -> OrderRecord {
        OrderRecord {
            uuid,
            session_id: SessionId::from(session),
            user_email: Some("customer@example.com".to_owned()),
            status: OrderStatus::Pending,
            breakdown: PricingBreakdown {
                subtotal: rust_decimal::Decimal::new(12_990_00, 2),
                shipping_fee: rust_decimal::Decimal::new(200_00, 2),
                tax_amount: rust_decimal::Decimal::new(2_338_20, 2),
                total: rust_decimal::Decimal::new(15_528_20, 2),
            },
            shipping_address: make_address(),
            payment_ref: None,
            items: vec![OrderItemRecord {
                product_uuid: ProductUuid::new(),
                name: "WOOL BLEND COAT".to_owned(),
                unit_price: rust_decimal::Decimal::new(12_990_00, 2),
                quantity: 1,
                size: Some("M".to_owned()),
                color: None,
            }],
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
