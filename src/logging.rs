use log::LevelFilter;

#[cfg(target_family = "wasm")]
pub mod wasm {
	use log::{Level, LevelFilter, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	#[derive(Debug, Clone, Copy)]
	pub struct Config {
		pub level: LevelFilter,
		pub show_target: bool,
	}
	impl Default for Config {
		fn default() -> Self {
			Self {
				level: LevelFilter::Info,
				show_target: false,
			}
		}
	}
	impl Config {
		pub fn with_level(mut self, level: LevelFilter) -> Self {
			self.level = level;
			self
		}

		/// Print the `target:` of each record instead of its module path.
		pub fn prefer_target(mut self) -> Self {
			self.show_target = true;
			self
		}
	}

	struct ConsoleLogger(Config);
	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= self.0.level
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let origin = match self.0.show_target {
				true => record.target(),
				false => record.module_path().unwrap_or_else(|| record.target()),
			};
			let line = JsValue::from_str(&format!("[{}] {origin}: {}", record.level(), record.args()));
			match record.level() {
				Level::Error => web_sys::console::error_1(&line),
				Level::Warn => web_sys::console::warn_1(&line),
				Level::Info => web_sys::console::info_1(&line),
				Level::Debug => web_sys::console::debug_1(&line),
				Level::Trace => web_sys::console::log_1(&line),
			}
		}

		fn flush(&self) {}
	}

	pub fn init(config: Config) {
		let level = config.level;
		if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
			log::set_max_level(level);
		}
	}
}

/// Host builds (tests, the native stub binary) log to the terminal.
pub fn init_native(level: LevelFilter) {
	let _ = simplelog::TermLogger::init(
		level,
		simplelog::Config::default(),
		simplelog::TerminalMode::Mixed,
		simplelog::ColorChoice::Auto,
	);
}
