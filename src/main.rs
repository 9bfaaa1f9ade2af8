use hack_or_snooze::{config::Config, logging};

#[cfg(target_family = "wasm")]
fn main() {
	use hack_or_snooze::components::{App, AppProps};

	let config = match Config::load() {
		Ok(config) => config,
		Err(err) => {
			logging::wasm::init(logging::wasm::Config::default());
			log::error!(target: "startup", "invalid configuration: {err:?}");
			return;
		}
	};
	logging::wasm::init(logging::wasm::Config::default().with_level(config.log_level).prefer_target());
	yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	let config = Config::load()?;
	logging::init_native(config.log_level);
	log::info!(
		target: "startup",
		"{} renders in the browser; build it for wasm32-unknown-unknown (api: {})",
		env!("CARGO_PKG_NAME"),
		config.base_url
	);
	Ok(())
}
