use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::portfolios::{Position, Tier};

/// Ranked, display-oriented projection of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position on the board.
    pub rank: u32,
    pub username: String,
    pub total_return: f64,
    pub total_return_percent: f64,
    pub tier: Tier,
    pub sector: String,
    pub primary_stock: String,
    /// Tickers held, for display chips.
    pub stocks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Position>>,
}

/// Criteria the leaderboard view narrows its rows by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_return: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_return: Option<f64>,
}
