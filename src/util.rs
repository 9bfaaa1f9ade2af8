use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Pulls the host out of a story url, with or without a scheme, minus any leading `www.`.
pub fn host_name(url: &str) -> &str {
	let host = match url.contains("://") {
		true => url.split('/').nth(2).unwrap_or_default(),
		false => url.split('/').next().unwrap_or_default(),
	};
	host.strip_prefix("www.").unwrap_or(host)
}

/// Formats a server timestamp as `YYYY-MM-DD`.
pub fn account_date(timestamp: &str) -> String {
	let parsed = OffsetDateTime::parse(timestamp, &Rfc3339);
	let formatted = parsed.ok().and_then(|date| date.format(format_description!("[year]-[month]-[day]")).ok());
	match formatted {
		Some(date) => date,
		None => timestamp.chars().take(10).collect(),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn host_with_scheme() {
		assert_eq!(host_name("https://www.example.com/a"), "example.com");
		assert_eq!(host_name("http://news.ycombinator.com/item?id=1"), "news.ycombinator.com");
	}

	#[test]
	fn host_without_scheme() {
		assert_eq!(host_name("example.com/a"), "example.com");
		assert_eq!(host_name("www.rust-lang.org"), "rust-lang.org");
	}

	#[test]
	fn host_keeps_port() {
		assert_eq!(host_name("http://localhost:8080/x"), "localhost:8080");
	}

	#[test]
	fn account_date_from_timestamp() {
		assert_eq!(account_date("2019-12-04T17:21:20.137Z"), "2019-12-04");
	}

	#[test]
	fn account_date_falls_back_to_prefix() {
		assert_eq!(account_date("2019-12-04 garbage"), "2019-12-04");
		assert_eq!(account_date("short"), "short");
	}
}
