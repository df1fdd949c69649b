// Composition root: configuration, app state wiring, HTTP router and GraphQL
// schema. The binary entry point lives in main.rs.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
