//! Inline ticker element that navigates to the stock detail page.
//!
//! Pages render it through askama. The decision of whether an input event
//! navigates lives in [`StockLink::activate`] and the page script in
//! `base.html` applies the same rules in the browser.

use askama::Template;

use crate::settings::SiteConfig;

/// Keys that activate a focused stock link.
const ACTIVATION_KEYS: [&str; 4] = ["Enter", " ", "Space", "Spacebar"];

/// Input that may trigger navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Click,
    /// A keydown, identified by its `KeyboardEvent.key` value.
    Key(String),
}

/// Client-side route change produced by an activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
    /// The browser's default handling of the event is suppressed.
    pub prevent_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLink {
    ticker: String,
    label: Option<String>,
    disabled: bool,
}

#[derive(Template)]
#[template(path = "components/stock_link.html")]
struct StockLinkTemplate<'a> {
    href: Option<String>,
    ticker: &'a str,
    label: &'a str,
}

impl StockLink {
    pub fn new(ticker: &str) -> Self {
        Self {
            ticker: normalize_ticker(ticker),
            label: None,
            disabled: false,
        }
    }

    /// Content shown inside the element. Defaults to the ticker.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn target(&self, site: &SiteConfig) -> String {
        site.page_path(&format!("stocks/{}", self.ticker))
    }

    pub fn activate(&self, site: &SiteConfig, activation: &Activation) -> Option<Navigation> {
        if self.disabled {
            return None;
        }

        let activates = match activation {
            Activation::Click => true,
            Activation::Key(key) => ACTIVATION_KEYS.contains(&key.as_str()),
        };

        activates.then(|| Navigation {
            target: self.target(site),
            prevent_default: true,
        })
    }

    /// Malformed tickers render like the disabled variant.
    pub fn render(&self, site: &SiteConfig) -> Result<String, askama::Error> {
        StockLinkTemplate {
            href: (!self.disabled && is_valid_ticker(&self.ticker)).then(|| self.target(site)),
            ticker: &self.ticker,
            label: self.label.as_deref().unwrap_or(&self.ticker),
        }
        .render()
    }
}

pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// Tickers are short symbols such as `AAPL` or `BRK.B`.
pub fn is_valid_ticker(ticker: &str) -> bool {
    (1..=10).contains(&ticker.len())
        && ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && ticker.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
