use log::LevelFilter;
use url::Url;

pub static DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub base_url: Url,
	pub log_level: LevelFilter,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
			log_level: LevelFilter::Info,
		}
	}
}

impl Config {
	/// Resolves the build-time overrides, then the page's `<meta name="hack-or-snooze-api">` tag.
	pub fn load() -> anyhow::Result<Self> {
		let config = Self::from_build_env(option_env!("HACK_OR_SNOOZE_API_URL"), option_env!("HACK_OR_SNOOZE_LOG"))?;
		#[cfg(target_family = "wasm")]
		let config = match meta_content("hack-or-snooze-api") {
			Some(base_url) => Self {
				base_url: Url::parse(&base_url)?,
				..config
			},
			None => config,
		};
		Ok(config)
	}

	pub fn from_build_env(base_url: Option<&str>, log_level: Option<&str>) -> anyhow::Result<Self> {
		let mut config = Self::default();
		if let Some(base_url) = base_url.filter(|s| !s.is_empty()) {
			config.base_url = Url::parse(base_url)?;
		}
		if let Some(level) = log_level.filter(|s| !s.is_empty()) {
			config.log_level = level.parse()?;
		}
		Ok(config)
	}
}

#[cfg(target_family = "wasm")]
fn meta_content(name: &str) -> Option<String> {
	let selector = format!("meta[name=\"{name}\"]");
	let element = gloo_utils::document().query_selector(&selector).ok().flatten()?;
	element.get_attribute("content").filter(|s| !s.is_empty())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn defaults_to_hosted_api() {
		let config = Config::from_build_env(None, None).unwrap();
		assert_eq!(config.base_url.as_str(), "https://hack-or-snooze-v3.herokuapp.com/");
		assert_eq!(config.log_level, LevelFilter::Info);
	}

	#[test]
	fn build_overrides() {
		let config = Config::from_build_env(Some("http://localhost:5000"), Some("debug")).unwrap();
		assert_eq!(config.base_url.host_str(), Some("localhost"));
		assert_eq!(config.log_level, LevelFilter::Debug);
	}

	#[test]
	fn rejects_bad_url() {
		assert!(Config::from_build_env(Some("not a url"), None).is_err());
	}
}
