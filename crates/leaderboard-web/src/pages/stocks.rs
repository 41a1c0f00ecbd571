use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::{
    components::stock_link::{is_valid_ticker, normalize_ticker, StockLink},
    utils::errors::app_error::AppError,
    AppState,
};

use super::Layout;

#[derive(Template)]
#[template(path = "stock.html")]
pub struct StockDetailPage {
    pub layout: Layout,
    pub symbol: String,
    /// Pre-rendered heading, the current ticker as a non-interactive link.
    pub heading: String,
    pub courses_href: String,
}

/// Detail page for one ticker. Lowercase tickers redirect to the canonical
/// uppercase URL.
pub(super) async fn stock_detail(
    State(app_state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Response, AppError> {
    let symbol = normalize_ticker(&ticker);
    if !is_valid_ticker(&symbol) {
        return Err(AppError::BadRequest(format!("Invalid ticker: {}", ticker)));
    }

    let link = StockLink::new(&symbol)
        .with_label(format!("{} overview", symbol))
        .disabled(true);
    if symbol != ticker {
        let canonical = link.target(&app_state.site);
        debug!(ticker = %ticker, canonical = %canonical, "Redirecting to canonical ticker");
        return Ok(Redirect::permanent(&canonical).into_response());
    }

    let page = StockDetailPage {
        layout: Layout::new(&app_state.site),
        heading: link.render(&app_state.site)?,
        courses_href: app_state.site.page_path("courses"),
        symbol,
    };

    Ok(Html(page.render()?).into_response())
}
