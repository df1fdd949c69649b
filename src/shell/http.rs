use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post},
};

use crate::modules::certificate_cart::adapters::inbound::http::CurrentUser;
use crate::modules::certificate_cart::use_cases::add_cart_item::inbound::http as add_http;
use crate::modules::certificate_cart::use_cases::bulk_import::inbound::http as bulk_http;
use crate::modules::certificate_cart::use_cases::clear_cart::inbound::http as clear_http;
use crate::modules::certificate_cart::use_cases::get_cart::inbound::http as get_http;
use crate::modules::certificate_cart::use_cases::list_certificate_templates::inbound::http as templates_http;
use crate::modules::certificate_cart::use_cases::prepare_checkout::inbound::http as checkout_http;
use crate::modules::certificate_cart::use_cases::update_cart_item_quantity::inbound::http as update_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/cart",
            get(get_http::handle)
                .post(add_http::handle)
                .patch(update_http::handle)
                .delete(clear_http::handle),
        )
        .route("/cart/bulk-import", post(bulk_http::handle))
        .route("/bulk-import/fields", get(bulk_http::fields))
        .route("/checkout", post(checkout_http::handle))
        .route("/certificates", get(templates_http::handle))
        .route("/certificates/{slug}", get(templates_http::handle_one))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    user: CurrentUser,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(user)).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
