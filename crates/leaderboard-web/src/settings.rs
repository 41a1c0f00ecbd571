use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_ENVIRONMENT: &str = "DEV";
pub const DEFAULT_DATABASE: &str = "investing_course";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_PLACEHOLDER_USER_ID: &str = "demo-user";
/// Subpath the site is mounted under when deployed.
pub const PRODUCTION_BASE_PATH: &str = "/stock-leaderboard";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    pub environment: Option<String>,
    pub mongodb_uri: String,
    pub mongodb_database: Option<String>,
    pub port: Option<u16>,
    pub base_path: Option<String>,
    pub static_dir: Option<String>,
    pub placeholder_user_id: Option<String>,
}

impl Settings {
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    pub fn is_production(&self) -> bool {
        self.environment().eq_ignore_ascii_case("PROD")
    }

    pub fn database_name(&self) -> &str {
        self.mongodb_database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    pub fn static_dir(&self) -> &str {
        self.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    pub fn placeholder_user_id(&self) -> &str {
        self.placeholder_user_id
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_USER_ID)
    }

    /// Routing settings for the current deployment. An explicit `BASE_PATH`
    /// wins over the environment default.
    pub fn site_config(&self) -> SiteConfig {
        let base_path = match self.base_path.as_deref() {
            Some(path) => path,
            None if self.is_production() => PRODUCTION_BASE_PATH,
            None => "",
        };
        SiteConfig::new(base_path)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder();
    let settings = settings.add_source(Environment::default());
    settings.build()?.try_deserialize()
}

/// Where the site lives under the host and how page URLs are shaped.
///
/// Static assets are served unmodified from `<asset_prefix>/static`; there is
/// no image resizing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Empty or a `/`-prefixed path without a trailing slash.
    pub base_path: String,
    pub asset_prefix: String,
    /// Page routes always end in `/`.
    pub trailing_slash: bool,
}

impl SiteConfig {
    pub fn new(base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };

        Self {
            asset_prefix: base_path.clone(),
            base_path,
            trailing_slash: true,
        }
    }

    /// Absolute URL of a page, honoring the base path and trailing slash rule.
    pub fn page_path(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let mut url = format!("{}/{}", self.base_path, path);
        if self.trailing_slash && !url.ends_with('/') {
            url.push('/');
        }
        url
    }

    pub fn api_path(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_path, path.trim_start_matches('/'))
    }

    pub fn asset_path(&self, path: &str) -> String {
        format!(
            "{}/static/{}",
            self.asset_prefix,
            path.trim_start_matches('/')
        )
    }

    /// Whether a request path belongs to a page route, as opposed to the JSON
    /// API, the API docs or static files.
    pub fn is_page_path(&self, path: &str) -> bool {
        let Some(rest) = self.strip_base(path) else {
            return false;
        };
        let first_segment = rest.trim_start_matches('/').split('/').next();
        !matches!(first_segment, Some("api") | Some("static") | Some("docs"))
    }

    /// The slash-terminated location a page request should be redirected to,
    /// or `None` when the path is already canonical.
    pub fn slash_redirect(&self, path: &str, query: Option<&str>) -> Option<String> {
        if !self.trailing_slash || path.ends_with('/') || !self.is_page_path(path) {
            return None;
        }
        // `//host` and `\\host` locations are read by browsers as another origin.
        let rest = self.strip_base(path)?;
        if rest.starts_with("//") || path.contains('\\') {
            return None;
        }
        let last_segment = path.rsplit('/').next().unwrap_or_default();
        if last_segment.contains('.') {
            return None;
        }

        Some(match query {
            Some(query) => format!("{}/?{}", path, query),
            None => format!("{}/", path),
        })
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base_path.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base_path.as_str())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn settings(environment: Option<&str>, base_path: Option<&str>) -> Settings {
        Settings {
            environment: environment.map(str::to_string),
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            base_path: base_path.map(str::to_string),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(None, None, "")]
    #[case(Some("DEV"), None, "")]
    #[case(Some("PROD"), None, PRODUCTION_BASE_PATH)]
    #[case(Some("prod"), None, PRODUCTION_BASE_PATH)]
    #[case(Some("PROD"), Some("/learn/"), "/learn")]
    #[case(Some("DEV"), Some("preview"), "/preview")]
    fn base_path_follows_environment(
        #[case] environment: Option<&str>,
        #[case] base_path: Option<&str>,
        #[case] expected: &str,
    ) {
        let site = settings(environment, base_path).site_config();
        assert_eq!(site.base_path, expected);
        assert_eq!(site.asset_prefix, expected);
        assert!(site.trailing_slash);
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = settings(None, None);
        assert_eq!(settings.database_name(), "investing_course");
        assert_eq!(settings.static_dir(), "static");
        assert_eq!(settings.placeholder_user_id(), "demo-user");
        assert!(!settings.is_production());
    }

    #[test]
    fn page_paths_end_with_slash() {
        let site = SiteConfig::new("/stock-leaderboard");
        assert_eq!(site.page_path("courses"), "/stock-leaderboard/courses/");
        assert_eq!(site.page_path("/stocks/AAPL/"), "/stock-leaderboard/stocks/AAPL/");
        assert_eq!(SiteConfig::new("").page_path("/"), "/");
        assert_eq!(
            site.asset_path("site.css"),
            "/stock-leaderboard/static/site.css"
        );
        assert_eq!(
            site.api_path("v1/session"),
            "/stock-leaderboard/api/v1/session"
        );
    }

    #[rstest]
    #[case("", "/courses", None, Some("/courses/"))]
    #[case("", "/courses", Some("tab=1"), Some("/courses/?tab=1"))]
    #[case("", "/courses/", None, None)]
    #[case("", "/api/v1/session", None, None)]
    #[case("", "/static/logo", None, None)]
    #[case("", "/docs", None, None)]
    #[case("", "/favicon.ico", None, None)]
    #[case("/app", "/app", None, Some("/app/"))]
    #[case("/app", "/app/stocks/AAPL", None, Some("/app/stocks/AAPL/"))]
    #[case("/app", "/app/api/v1/health/mongodb", None, None)]
    #[case("/app", "/other", None, None)]
    #[case("/app", "/application", None, None)]
    #[case("", "//evil.example/x", None, None)]
    #[case("", "//evil", None, None)]
    #[case("", "/\\evil.example", None, None)]
    #[case("/app", "/app//evil.example", None, None)]
    fn redirects_only_page_paths(
        #[case] base_path: &str,
        #[case] path: &str,
        #[case] query: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let site = SiteConfig::new(base_path);
        assert_eq!(site.slash_redirect(path, query).as_deref(), expected);
    }
}
