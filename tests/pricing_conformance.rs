//! Integration tests for the documented pricing behaviour: size-matching
//! fallback order, topping resolution, unit/line-total asymmetry, and
//! aggregation rules.
//!
//! These pin the exact semantics every storefront surface (cart page,
//! checkout, order view, exports) relies on, so the numbers here are load
//! bearing: change them and historical display expectations break.

use rust_decimal::Decimal;
use smallvec::smallvec;
use testresult::TestResult;

use tartine::prelude::*;

fn two_size_list() -> Vec<SizePrice> {
    vec![
        SizePrice::new("500g", Decimal::from(100)),
        SizePrice::new("1kg", Decimal::from(180)),
    ]
}

fn celebration_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();

    catalog
        .insert_cake(Cake {
            id: "celebration".into(),
            name: "Celebration Cake".to_string(),
            pricing: Pricing::SizeBased(smallvec![SizePrice::new("1kg", Decimal::from(500))]),
            topping_group: Some("extras".into()),
        })
        .insert_cake(Cake {
            id: "cookie-box".into(),
            name: "Cookie Box".to_string(),
            pricing: Pricing::Flat(Decimal::from(750)),
            topping_group: None,
        })
        .insert_topping_group(ToppingGroup {
            id: "extras".into(),
            toppings: vec![
                Topping {
                    id: "ganache".into(),
                    name: "Ganache".to_string(),
                    prices: smallvec![SizePrice::new("1kg", Decimal::from(50))],
                },
                Topping {
                    id: "sprinkles".into(),
                    name: "Sprinkles".to_string(),
                    prices: smallvec![],
                },
            ],
        })
        .insert_accessory(Accessory {
            id: "candles".into(),
            name: "Birthday Candles".to_string(),
            price: Decimal::from(30),
        });

    catalog
}

#[test]
fn size_resolution_is_deterministic() -> TestResult {
    let sizes = two_size_list();
    let selector = SizeSelector::from("1 KG");

    let first = resolve_size(&sizes, &selector).ok_or("no resolution")?;
    let second = resolve_size(&sizes, &selector).ok_or("no resolution")?;
    let third = resolve_size(&sizes, &selector).ok_or("no resolution")?;

    assert_eq!(first, second);
    assert_eq!(second, third);

    Ok(())
}

#[test]
fn normalized_exact_match_beats_position() -> TestResult {
    let sizes = two_size_list();
    let hit = resolve_size(&sizes, &"1 KG".into()).ok_or("no resolution")?;

    assert_eq!(hit.label, "1kg");
    assert_eq!(hit.price, Decimal::from(180));

    Ok(())
}

#[test]
fn numeric_fallback_without_a_hit_defaults_to_first_entry() -> TestResult {
    // "1000g" extracts 1000; neither 500 nor 1 matches, so the resolver
    // silently defaults to index 0. Units are never normalized.
    let sizes = two_size_list();
    let hit = resolve_size(&sizes, &"1000g".into()).ok_or("no resolution")?;

    assert_eq!(hit.index, 0);
    assert_eq!(hit.price, Decimal::from(100));

    Ok(())
}

#[test]
fn priceless_topping_resolves_to_zero() {
    let bare = Topping {
        id: "sprinkles".into(),
        name: "Sprinkles".to_string(),
        prices: smallvec![],
    };

    assert_eq!(resolve_topping_price(&bare, "1kg"), Decimal::ZERO);
}

#[test]
fn missing_topping_id_keeps_the_line_valid() {
    let catalog = celebration_catalog();

    let line = CartLine::cake("celebration", 1)
        .with_size("1kg")
        .with_toppings(["no-such-topping".into()]);

    let priced = price_line(&line, &catalog);

    assert!(priced.is_available());
    assert_eq!(priced.unit_price, Decimal::from(500));
    assert_eq!(priced.line_total, Decimal::from(500));
}

#[test]
fn unit_price_excludes_attached_accessories_but_line_total_includes_them() {
    let catalog = celebration_catalog();

    let line = CartLine::cake("celebration", 2)
        .with_size("1kg")
        .with_toppings(["ganache".into()])
        .with_accessories([AccessoryRef {
            id: "candles".into(),
            quantity: 1,
        }]);

    let priced = price_line(&line, &catalog);

    assert_eq!(priced.unit_price, Decimal::from(550));
    assert_eq!(priced.line_total, Decimal::from(1160));
}

#[test]
fn aggregation_excludes_unavailable_lines() {
    let catalog = celebration_catalog();

    let cart = Cart::with_lines(vec![
        CartLine::cake("celebration", 1).with_size("1kg"),
        CartLine::cake("withdrawn", 2),
    ]);

    let priced = price_cart(&cart, &catalog, &CheckoutRules::default());

    assert_eq!(priced.lines.len(), 2);
    assert_eq!(
        priced.lines.get(1).map(PricedLine::is_available),
        Some(false)
    );
    assert_eq!(priced.totals.subtotal, Decimal::from(500));
}

#[test]
fn delivery_fee_thresholds() {
    let rules = CheckoutRules::default();

    let mid = aggregate(&[line_totalling(500)], &rules);
    let empty = aggregate(&[], &rules);
    let large = aggregate(&[line_totalling(1500)], &rules);

    assert_eq!(mid.delivery_fee, Decimal::from(60));
    assert_eq!(mid.total, Decimal::from(560));
    assert_eq!(empty.delivery_fee, Decimal::ZERO);
    assert_eq!(large.delivery_fee, Decimal::ZERO);
}

#[test]
fn aggregation_is_idempotent_and_does_not_mutate() {
    let rules = CheckoutRules::default();
    let lines = [line_totalling(100), line_totalling(300)];
    let snapshot = lines.clone();

    let first = aggregate(&lines, &rules);
    let second = aggregate(&lines, &rules);

    assert_eq!(first, second);
    assert_eq!(lines, snapshot);
}

#[test]
fn flat_pricing_ignores_any_size_selection() {
    let catalog = celebration_catalog();

    let with_label = price_line(&CartLine::cake("cookie-box", 1).with_size("1kg"), &catalog);
    let with_index = price_line(&CartLine::cake("cookie-box", 1).with_size(3), &catalog);
    let without = price_line(&CartLine::cake("cookie-box", 1), &catalog);

    assert_eq!(with_label.unit_price, Decimal::from(750));
    assert_eq!(with_index.unit_price, Decimal::from(750));
    assert_eq!(without.unit_price, Decimal::from(750));
    assert_eq!(with_label.resolved_size, None);
}

fn line_totalling(amount: i64) -> PricedLine {
    PricedLine {
        product: ProductRef::Cake("fixture".into()),
        name: "Fixture".to_string(),
        quantity: 1,
        resolved_size: None,
        unit_price: Decimal::from(amount),
        line_total: Decimal::from(amount),
        unavailable: None,
    }
}
