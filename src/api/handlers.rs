use std::collections::BTreeMap;
use axum::extract::{Path, Query as Params, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, instrument};
use crate::domain::{Query, StockRecord};
use crate::resolver::OrderResolver;
use super::params::{self, BuyParams, ValidationError};

pub const NOT_FOUND_BODY: &str = "NOT_FOUND";

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn validation_error(e: ValidationError) -> Response {
    info!(error = %e, "Rejected request");
    json_error(StatusCode::BAD_REQUEST, e.code(), e.to_string())
}

fn availability_response(available: Vec<StockRecord>) -> Response {
    if available.is_empty() {
        return (StatusCode::OK, NOT_FOUND_BODY).into_response();
    }
    Json(available).into_response()
}

async fn resolve(resolver: &OrderResolver, query: Result<Query, ValidationError>, use_cache: bool) -> Response {
    match query {
        Ok(query) => availability_response(resolver.resolve(&query, use_cache).await),
        Err(e) => validation_error(e),
    }
}

#[instrument(skip(resolver))]
pub async fn buy_item(State(resolver): State<OrderResolver>, Path(item): Path<String>) -> Response {
    resolve(&resolver, params::item_query(&item), false).await
}

#[instrument(skip(resolver))]
pub async fn buy_item_qty(
    State(resolver): State<OrderResolver>,
    Path(item): Path<String>,
    Params(raw): Params<BuyParams>,
) -> Response {
    resolve(&resolver, params::quantity_query(&item, &raw), false).await
}

#[instrument(skip(resolver))]
pub async fn buy_item_qty_price(
    State(resolver): State<OrderResolver>,
    Path(item): Path<String>,
    Params(raw): Params<BuyParams>,
) -> Response {
    resolve(&resolver, params::quantity_price_query(&item, &raw), true).await
}

#[instrument(skip(resolver))]
pub async fn fast_buy_item(State(resolver): State<OrderResolver>, Path(item): Path<String>) -> Response {
    match params::item_query(&item) {
        Ok(query) => availability_response(resolver.resolve_fast(&query).await),
        Err(e) => validation_error(e),
    }
}

#[instrument(skip(resolver))]
pub async fn show_summary(State(resolver): State<OrderResolver>) -> Response {
    let summary: BTreeMap<_, _> = resolver.summary().await.into_iter().collect();
    Json(summary).into_response()
}
