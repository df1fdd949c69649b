use axum::http::HeaderName;
use std::sync::Arc;

use crate::modules::certificate_cart::use_cases::add_cart_item::handler::AddCartItemHandler;
use crate::modules::certificate_cart::use_cases::bulk_import::handler::BulkImportHandler;
use crate::modules::certificate_cart::use_cases::clear_cart::handler::ClearCartHandler;
use crate::modules::certificate_cart::use_cases::get_cart::handler::GetCartHandler;
use crate::modules::certificate_cart::use_cases::prepare_checkout::handler::PrepareCheckoutHandler;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::handler::UpdateCartItemQuantityHandler;
use crate::shared::infrastructure::cart_repository::in_memory::InMemoryCartRepository;

type Repository = InMemoryCartRepository;

#[derive(Clone)]
pub struct AppState {
    pub identity_header: HeaderName,
    pub get_cart_handler: Arc<GetCartHandler<Repository>>,
    pub add_item_handler: Arc<AddCartItemHandler<Repository>>,
    pub update_quantity_handler: Arc<UpdateCartItemQuantityHandler<Repository>>,
    pub clear_cart_handler: Arc<ClearCartHandler<Repository>>,
    pub bulk_import_handler: Arc<BulkImportHandler<AddCartItemHandler<Repository>>>,
    pub checkout_handler: Arc<PrepareCheckoutHandler<Repository>>,
}

impl AppState {
    pub fn new(
        repository: Arc<Repository>,
        identity_header: HeaderName,
        write_attempts: u32,
    ) -> Self {
        let add_item_handler = Arc::new(AddCartItemHandler::new(
            repository.clone(),
            write_attempts,
        ));
        Self {
            identity_header,
            get_cart_handler: Arc::new(GetCartHandler::new(repository.clone())),
            bulk_import_handler: Arc::new(BulkImportHandler::new(add_item_handler.clone())),
            add_item_handler,
            update_quantity_handler: Arc::new(UpdateCartItemQuantityHandler::new(
                repository.clone(),
                write_attempts,
            )),
            clear_cart_handler: Arc::new(ClearCartHandler::new(repository.clone())),
            checkout_handler: Arc::new(PrepareCheckoutHandler::new(repository)),
        }
    }
}
