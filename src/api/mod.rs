//! HTTP boundary. Validates request parameters into a [`crate::domain::Query`]
//! and hands it to the [`OrderResolver`].

pub mod handlers;
pub mod params;

use axum::routing::get;
use axum::Router;
use crate::resolver::OrderResolver;

pub fn router(resolver: OrderResolver) -> Router {
    Router::new()
        .route("/buy-item/:item", get(handlers::buy_item))
        .route("/buy-item-qty/:item", get(handlers::buy_item_qty))
        .route("/buy-item-qty-price/:item", get(handlers::buy_item_qty_price))
        .route("/show-summary", get(handlers::show_summary))
        .route("/fast-buy-item/:item", get(handlers::fast_buy_item))
        .with_state(resolver)
}
