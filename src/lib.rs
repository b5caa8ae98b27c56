//! background-network: animated particle-network background for the field
//! monitoring dashboard.
//!
//! This crate provides a WASM canvas component that draws drifting points,
//! joins nearby ones with fading lines, and pushes them away from the pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_network::{
	FrameLoop, NetworkConfig, NetworkTheme, ParticleNetwork, ParticleNetworkCanvas, WindowListener,
	track_window, viewport_size,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("background-network: logging initialized");
}

/// Load config overrides from a script element with id="network-config".
/// Expected format: a JSON object with any subset of [`NetworkConfig`] fields.
/// Falls back to defaults when the element is absent or invalid.
pub fn load_network_config() -> NetworkConfig {
	let Some(json_text) = read_config_script() else {
		return NetworkConfig::default();
	};

	match NetworkConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"background-network: loaded config with {} particles",
				config.particle_count
			);
			config
		}
		Err(e) => {
			warn!("background-network: using default config: {:#}", e);
			NetworkConfig::default()
		}
	}
}

fn read_config_script() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("network-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the background behind whatever the page already shows.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_network_config();
	let theme = NetworkTheme::default();
	let theme_color = theme.background.from.to_css();

	view! {
		<Meta name="theme-color" content=theme_color />
		<ParticleNetworkCanvas config=config theme=theme />
	}
}
