//! End-to-end test: load the bakery fixture set, price the cart, and check
//! every line and total against hand-computed amounts.
//!
//! The fixture YAML is deliberately messy (mixed label vocabularies, string
//! amounts, wrapped lists, duplicate topping refs) so this also exercises
//! the normalization boundary on realistic documents.

use rust_decimal::Decimal;
use testresult::TestResult;

use tartine::prelude::*;

#[test]
fn bakery_cart_prices_line_by_line() -> TestResult {
    let fixture = Fixture::from_set("bakery")?;
    let cart = fixture.cart(None)?;

    let priced = price_cart(&cart, fixture.catalog(), &CheckoutRules::default());

    // Truffle at "1 KG" matches the 1kg entry (950), choco-chips add 50 at
    // that size, almonds never match and fall back to their first entry (45).
    // The candles ride along in the line total only.
    let truffle = priced.lines.first().ok_or("missing line")?;
    assert_eq!(truffle.resolved_size.as_deref(), Some("1kg"));
    assert_eq!(truffle.unit_price, Decimal::from(1045));
    assert_eq!(truffle.line_total, Decimal::from(1075));

    let velvet = priced.lines.get(1).ok_or("missing line")?;
    assert_eq!(velvet.unit_price, Decimal::from(600));
    assert_eq!(velvet.line_total, Decimal::from(1200));

    let brownie = priced.lines.get(2).ok_or("missing line")?;
    assert_eq!(brownie.resolved_size, None);
    assert_eq!(brownie.line_total, Decimal::from(750));

    let knife = priced.lines.get(3).ok_or("missing line")?;
    assert!(matches!(knife.product, ProductRef::Accessory(_)));
    assert_eq!(knife.line_total, Decimal::from(45));

    assert_eq!(priced.totals.subtotal, Decimal::from(3070));
    assert_eq!(priced.totals.delivery_fee, Decimal::ZERO);
    assert_eq!(priced.totals.total, Decimal::from(3070));

    Ok(())
}

#[test]
fn drifted_cart_flags_the_deleted_cake_and_still_totals() -> TestResult {
    let mut fixture = Fixture::from_set("bakery")?;
    fixture.load_cart("drifted")?;

    let cart = fixture.cart(None)?;
    let priced = price_cart(&cart, fixture.catalog(), &CheckoutRules::default());

    let gone = priced.lines.first().ok_or("missing line")?;
    assert!(!gone.is_available());
    assert_eq!(gone.line_total, Decimal::ZERO);

    let truffle = priced.lines.get(1).ok_or("missing line")?;
    assert_eq!(truffle.line_total, Decimal::from(550));

    assert_eq!(priced.totals.subtotal, Decimal::from(550));
    assert_eq!(priced.totals.delivery_fee, Decimal::from(60));
    assert_eq!(priced.totals.total, Decimal::from(610));

    Ok(())
}

#[test]
fn priced_bakery_cart_survives_a_serde_round_trip() -> TestResult {
    let fixture = Fixture::from_set("bakery")?;
    let cart = fixture.cart(None)?;

    let priced = price_cart(&cart, fixture.catalog(), &CheckoutRules::default());

    let yaml = serde_norway::to_string(&priced)?;
    let restored: PricedCart = serde_norway::from_str(&yaml)?;

    assert_eq!(priced, restored);

    Ok(())
}

#[test]
fn bakery_receipt_renders_every_line_and_the_total() -> TestResult {
    let fixture = Fixture::from_set("bakery")?;
    let cart = fixture.cart(None)?;

    let priced = price_cart(&cart, fixture.catalog(), &CheckoutRules::default());

    let mut out = Vec::new();
    Receipt::from_priced_cart(&priced).write_to(&mut out, rusty_money::iso::INR)?;

    let rendered = String::from_utf8(out)?;

    assert!(rendered.contains("Chocolate Truffle"));
    assert!(rendered.contains("Cake Knife"));
    assert!(rendered.contains("Total"));

    Ok(())
}
