use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::certificate_cart::use_cases::add_cart_item::inbound::graphql::AddCartItemMutation;
use crate::modules::certificate_cart::use_cases::clear_cart::inbound::graphql::ClearCartMutation;
use crate::modules::certificate_cart::use_cases::get_cart::inbound::graphql::CartQuery;
use crate::modules::certificate_cart::use_cases::list_certificate_templates::inbound::graphql::CertificateTemplatesQuery;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::inbound::graphql::UpdateCartItemQuantityMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CartQuery, CertificateTemplatesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddCartItemMutation,
    UpdateCartItemQuantityMutation,
    ClearCartMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
