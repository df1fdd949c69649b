use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::modules::certificate_cart::use_cases::bulk_import::command::{
    BulkImport, FormFields, ParsedRow,
};
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::command::UpdateCartItemQuantity;
use crate::shared::core::primitives::UserId;
use crate::tests::fixtures::app::make_test_state;
use crate::tests::fixtures::cart::make_user;
use crate::tests::fixtures::commands::add_cart_item::AddCartItemBuilder;

fn named_row(name: &str) -> ParsedRow {
    ParsedRow::from([("nomeNoiva".to_string(), name.to_string())])
}

#[tokio::test]
async fn prices_a_mixed_basket_at_one_tier() {
    let state = make_test_state();
    let user = make_user();

    state
        .add_item_handler
        .handle(Some(&user), AddCartItemBuilder::new().quantity(Some(5)).build())
        .await
        .unwrap();
    let cart = state
        .add_item_handler
        .handle(
            Some(&user),
            AddCartItem {
                quantity: Some(6),
                ..AddCartItem::single("casamento", "Certificado de Casamento")
            },
        )
        .await
        .unwrap();

    assert_eq!(cart.pricing.total_quantity, 11);
    assert_eq!(cart.pricing.unit_price_cents, 200);
    assert!(cart.items.iter().all(|i| i.unit_price_cents == 200));
    let sum: u64 = cart.items.iter().map(|i| i.total_cents).sum();
    assert_eq!(sum, cart.pricing.total_cents);
    assert_eq!(cart.pricing.total_cents, 2200);
}

#[tokio::test]
async fn imports_a_sheet_then_trims_and_clears_the_cart() {
    let state = make_test_state();
    let user = make_user();

    let rows: Vec<ParsedRow> = (1..=12).map(|i| named_row(&format!("Noiva {i}"))).collect();
    let mut form = FormFields::default();
    let report = state
        .bulk_import_handler
        .handle(
            Some(&user),
            &mut form,
            BulkImport {
                certificate_slug: "casamento".into(),
                title: "Certificado de Casamento".into(),
                summary_field: Some("nomeNoiva".into()),
                rows,
            },
        )
        .await
        .unwrap();
    assert_eq!(report.committed, 12);
    assert_eq!(report.cart.items.len(), 1);
    assert_eq!(report.cart.items[0].item.entries.len(), 12);
    assert_eq!(report.cart.pricing.unit_price_cents, 200);

    let item_id = report.cart.items[0].item.id.clone();
    let trimmed = state
        .update_quantity_handler
        .handle(
            Some(&user),
            UpdateCartItemQuantity {
                item_id,
                quantity: 10,
            },
        )
        .await
        .unwrap();
    assert_eq!(trimmed.pricing.total_quantity, 10);
    assert_eq!(trimmed.pricing.unit_price_cents, 250);
    assert_eq!(trimmed.items[0].item.summary.as_deref(), Some("Noiva 10"));
    let upsell = trimmed.pricing.upsell.expect("one more unlocks the next tier");
    assert_eq!(upsell.new_total_cents, 2200);

    let draft = state.checkout_handler.handle(Some(&user)).await.unwrap();
    assert_eq!(draft.total_amount_cents, 2500);

    state.clear_cart_handler.handle(Some(&user)).await.unwrap();
    let cart = state.get_cart_handler.handle(Some(&user)).await.unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(cart.pricing.total_quantity, 0);
    assert_eq!(cart.pricing.unit_price_cents, 0);
}

#[tokio::test]
async fn keeps_carts_of_different_users_apart() {
    let state = make_test_state();
    let user = make_user();
    let other = UserId::resolve(Some("user-fixed-0002")).unwrap();

    state
        .add_item_handler
        .handle(Some(&user), AddCartItemBuilder::new().build())
        .await
        .unwrap();

    let cart = state.get_cart_handler.handle(Some(&other)).await.unwrap();
    assert!(cart.items.is_empty());
}
