use std::sync::Arc;
use std::time::Duration;

use crate::modules::certificate_cart::use_cases::add_cart_item::command::AddCartItem;
use crate::modules::certificate_cart::use_cases::add_cart_item::handler::AddCartItemHandler;
use crate::modules::certificate_cart::use_cases::clear_cart::handler::ClearCartHandler;
use crate::modules::certificate_cart::use_cases::get_cart::handler::GetCartHandler;
use crate::shared::infrastructure::cart_repository::in_memory::InMemoryCartRepository;
use crate::tests::fixtures::cart::make_user;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_adds_for_one_user_are_all_kept() {
    let repository = Arc::new(InMemoryCartRepository::new());
    let handler = Arc::new(AddCartItemHandler::new(repository.clone(), 64));
    let user = make_user();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let handler = handler.clone();
            let user = user.clone();
            tokio::spawn(async move {
                let slug = if i % 2 == 0 { "batismo" } else { "casamento" };
                handler
                    .handle(Some(&user), AddCartItem::single(slug, format!("Certificado {slug}")))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let cart = GetCartHandler::new(repository)
        .handle(Some(&user))
        .await
        .unwrap();
    assert_eq!(cart.pricing.total_quantity, 16);
    assert_eq!(cart.items.len(), 2);
    assert!(cart.items.iter().all(|i| i.item.entries.len() == 8));
}

#[tokio::test]
async fn a_write_started_before_a_clear_cannot_resurrect_the_cleared_cart() {
    let repository = Arc::new(InMemoryCartRepository::new());
    let add = AddCartItemHandler::new(repository.clone(), 3);
    let clear = ClearCartHandler::new(repository.clone());
    let user = make_user();
    add.handle(Some(&user), AddCartItem::single("batismo", "Certificado batismo"))
        .await
        .unwrap();

    repository.set_delay_save_ms(50);
    let slow_add = add.handle(Some(&user), AddCartItem::single("batismo", "Certificado batismo"));
    let clear_then_add = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        repository.set_delay_save_ms(0);
        clear.handle(Some(&user)).await.unwrap();
        add.handle(Some(&user), AddCartItem::single("casamento", "Certificado casamento"))
            .await
            .unwrap();
    };
    let (slow, ()) = tokio::join!(slow_add, clear_then_add);
    slow.unwrap();

    let cart = GetCartHandler::new(repository)
        .handle(Some(&user))
        .await
        .unwrap();
    let lines: Vec<(&str, u32)> = cart
        .items
        .iter()
        .map(|i| (i.item.certificate_slug.as_str(), i.item.quantity))
        .collect();
    assert_eq!(lines, vec![("casamento", 1), ("batismo", 1)]);
}
