use common::decimal::{dec, Amount, Price, Quantity};
use common::error::Error;
use common::model::markup::MarkupRule;
use common::model::order::OrderLine;
use pricing_engine::{PricingConfig, PricingEngine};
use uuid::Uuid;

fn create_line(
    supplier_id: Uuid,
    base_price: Price,
    quantity: Quantity,
    rule: Option<MarkupRule>,
) -> OrderLine {
    OrderLine {
        product_id: Uuid::new_v4(),
        supplier_id,
        base_price,
        quantity,
        markup_rule: rule,
    }
}

#[test]
fn test_price_line_with_percent_rule() {
    let engine = PricingEngine::new();
    let supplier = Uuid::new_v4();
    let line = create_line(
        supplier,
        dec!(58.00),
        dec!(2),
        Some(MarkupRule::percent(dec!(10))),
    );

    let priced = engine.price_line(&line);
    assert_eq!(priced.markup, dec!(5.80));
    assert_eq!(priced.unit_price, dec!(63.80));
    assert_eq!(priced.line_total, dec!(127.60));
    assert_eq!(priced.supplier_id, supplier);
}

#[test]
fn test_price_line_without_rule_uses_base_price() {
    let engine = PricingEngine::new();
    let line = create_line(Uuid::new_v4(), dec!(42.50), dec!(3), None);

    let priced = engine.price_line(&line);
    assert_eq!(priced.markup, Amount::ZERO);
    assert_eq!(priced.unit_price, dec!(42.50));
    assert_eq!(priced.line_total, dec!(127.50));
}

#[test]
fn test_markup_toggle_off_prices_at_base() {
    let engine = PricingEngine::with_config(PricingConfig::new(false, dec!(0.003), 2));
    let line = create_line(
        Uuid::new_v4(),
        dec!(58.00),
        dec!(2),
        Some(MarkupRule::percent(dec!(10))),
    );

    let priced = engine.price_line(&line);
    assert_eq!(priced.markup, Amount::ZERO);
    assert_eq!(priced.unit_price, dec!(58.00));

    let pricing = engine.price_order(std::slice::from_ref(&line)).unwrap();
    assert_eq!(pricing.subtotal, dec!(116.00));
}

#[test]
fn test_price_order_end_to_end() {
    let engine = PricingEngine::new();
    let line = create_line(
        Uuid::new_v4(),
        dec!(58.00),
        dec!(2),
        Some(MarkupRule::percent(dec!(10))),
    );

    let pricing = engine.price_order(&[line]).unwrap();
    assert_eq!(pricing.subtotal, dec!(127.60));
    assert_eq!(pricing.service_fee, dec!(0.38));
    assert_eq!(pricing.total, dec!(127.98));
}

#[test]
fn test_price_order_groups_by_supplier() {
    let engine = PricingEngine::new();
    let supplier_a = Uuid::new_v4();
    let supplier_b = Uuid::new_v4();
    let lines = vec![
        create_line(supplier_a, dec!(10.00), dec!(1), None),
        create_line(supplier_b, dec!(20.00), dec!(2), None),
        create_line(supplier_a, dec!(5.50), dec!(4), None),
    ];

    let pricing = engine.price_order(&lines).unwrap();
    assert_eq!(pricing.lines.len(), 3);
    assert_eq!(pricing.supplier_subtotals.len(), 2);
    assert_eq!(pricing.subtotal, dec!(72.00));

    // subtotals ordered by supplier id, and they sum to the order subtotal
    let ids: Vec<Uuid> = pricing
        .supplier_subtotals
        .iter()
        .map(|s| s.supplier_id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    let summed: Amount = pricing.supplier_subtotals.iter().map(|s| s.subtotal).sum();
    assert_eq!(summed, pricing.subtotal);

    let a_subtotal = pricing
        .supplier_subtotals
        .iter()
        .find(|s| s.supplier_id == supplier_a)
        .unwrap()
        .subtotal;
    assert_eq!(a_subtotal, dec!(32.00));
}

#[test]
fn test_price_order_empty_cart() {
    let engine = PricingEngine::new();
    let pricing = engine.price_order(&[]).unwrap();
    assert_eq!(pricing.subtotal, Amount::ZERO);
    assert_eq!(pricing.service_fee, Amount::ZERO);
    assert_eq!(pricing.total, Amount::ZERO);
    assert!(pricing.lines.is_empty());
    assert!(pricing.supplier_subtotals.is_empty());
}

#[test]
fn test_price_order_rejects_negative_quantity() {
    let engine = PricingEngine::new();
    let line = create_line(Uuid::new_v4(), dec!(10.00), dec!(-1), None);
    let result = engine.price_order(&[line]);
    assert!(matches!(result, Err(Error::InvalidAmount(_))));
}

#[test]
fn test_price_order_rejects_negative_rule_value() {
    let engine = PricingEngine::new();
    let line = create_line(
        Uuid::new_v4(),
        dec!(10.00),
        dec!(1),
        Some(MarkupRule::percent(dec!(-5))),
    );
    let result = engine.price_order(&[line]);
    assert!(matches!(result, Err(Error::InvalidMarkupRule(_))));
}

#[test]
fn test_pricing_is_deterministic() {
    let engine = PricingEngine::new();
    let lines = vec![create_line(
        Uuid::new_v4(),
        dec!(33.33),
        dec!(7),
        Some(MarkupRule::percent(dec!(8)).with_min_markup(dec!(1))),
    )];

    let first = engine.price_order(&lines).unwrap();
    let second = engine.price_order(&lines).unwrap();
    assert_eq!(first.subtotal, second.subtotal);
    assert_eq!(first.service_fee, second.service_fee);
    assert_eq!(first.total, second.total);
}

#[test]
fn test_service_fee_rounds_half_up() {
    // subtotal 50.00 * 0.003 = 0.15 exactly; 55.00 * 0.003 = 0.165 -> 0.17
    let engine = PricingEngine::new();
    let exact = engine
        .price_order(&[create_line(Uuid::new_v4(), dec!(50.00), dec!(1), None)])
        .unwrap();
    assert_eq!(exact.service_fee, dec!(0.15));

    let midpoint = engine
        .price_order(&[create_line(Uuid::new_v4(), dec!(55.00), dec!(1), None)])
        .unwrap();
    assert_eq!(midpoint.service_fee, dec!(0.17));
    assert_eq!(midpoint.total, dec!(55.17));
}
