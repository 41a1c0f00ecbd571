use std::{collections::HashMap, fmt::Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Performance bucket assigned to a portfolio, `S` being the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Tier {
    S,
    A,
    B,
    C,
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::S => write!(f, "S"),
            Tier::A => write!(f, "A"),
            Tier::B => write!(f, "B"),
            Tier::C => write!(f, "C"),
        }
    }
}

/// One holding within a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub shares: f64,
    pub average_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub user_id: String,
    pub username: String,
    /// Holdings, in the order the user added them.
    pub positions: Vec<Position>,
    pub total_value: f64,
    pub total_return: f64,
    pub total_return_percent: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub tier: Tier,
    pub sector: String,
    /// Ticker the portfolio is best known for.
    pub primary_stock: String,
    /// When the aggregate figures were last recomputed.
    pub last_calculated: DateTime<Utc>,
}

/// Inputs to a portfolio return calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCalculationInput {
    pub positions: Vec<Position>,
    /// Latest price per ticker.
    pub current_prices: HashMap<String, f64>,
    /// Previous close per ticker, used for day change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_prices: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformerSummary {
    pub symbol: String,
    pub return_percent: f64,
}

/// Aggregate figures produced by a portfolio return calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: f64,
    pub total_return: f64,
    pub total_return_percent: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_performer: Option<PerformerSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_performer: Option<PerformerSummary>,
}
