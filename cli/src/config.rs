use std::path::PathBuf;

use anyhow::{Result, anyhow};
use entity::OfficeFilter;

/// Office labels offered by the filter dropdown. Configuration, not data
/// validation: the roster may carry labels outside this set.
pub const DEFAULT_OFFICES: [&str; 4] = ["Trondheim", "Oslo", "Bergen", "Stockholm"];

#[derive(Clone, Debug)]
pub struct AppConfig {
    base_url: Option<String>,
    pub locale: String,
    pub state_file: Option<PathBuf>,
    pub offices: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration from flags first, environment second.
    pub fn load(
        base_url: Option<String>,
        locale: Option<String>,
        state_file: Option<PathBuf>,
    ) -> Result<Self> {
        let base_url = base_url.or_else(|| std::env::var("DIRECTORY_BASE_URL").ok());

        let locale = locale
            .or_else(|| std::env::var("DIRECTORY_LOCALE").ok())
            .unwrap_or_else(|| "nb".into());

        let state_file =
            state_file.or_else(|| std::env::var("DIRECTORY_STATE_FILE").ok().map(PathBuf::from));

        let offices = std::env::var("DIRECTORY_OFFICES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| DEFAULT_OFFICES.iter().map(|s| s.to_string()).collect());

        Ok(Self {
            base_url,
            locale,
            state_file,
            offices,
        })
    }

    /// The roster endpoint base; only fetching commands need it.
    pub fn require_base_url(&self) -> Result<&str> {
        self.base_url.as_deref().ok_or_else(|| {
            anyhow!("missing directory base url; set DIRECTORY_BASE_URL or pass --base-url")
        })
    }

    /// Resolve a user-supplied office label against the configured set.
    pub fn office_filter(&self, label: &str) -> Result<OfficeFilter> {
        let filter = OfficeFilter::from(label);
        match &filter {
            OfficeFilter::All => Ok(filter),
            OfficeFilter::Office(name) if self.offices.iter().any(|o| o == name) => Ok(filter),
            OfficeFilter::Office(name) => Err(anyhow!(
                "unknown office {:?}; expected one of: all, {}",
                name,
                self.offices.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            base_url: Some("https://example.no".into()),
            locale: "nb".into(),
            state_file: None,
            offices: DEFAULT_OFFICES.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn resolves_known_offices_and_the_sentinel() {
        let config = config();
        assert_eq!(config.office_filter("all").unwrap(), OfficeFilter::All);
        assert_eq!(
            config.office_filter("Oslo").unwrap(),
            OfficeFilter::Office("Oslo".into())
        );
    }

    #[test]
    fn rejects_unknown_offices() {
        assert!(config().office_filter("Narvik").is_err());
    }
}
