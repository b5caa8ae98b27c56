//! Leptos component wrapping the particle network canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page content
//! and wires window listeners for resize and pointer tracking. Once mounted, a
//! [`FrameLoop`] advances and redraws the network every frame until the
//! component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::NetworkConfig;
use super::frame_loop::FrameLoop;
use super::listener::{WindowListener, track_window, viewport_size};
use super::network::ParticleNetwork;
use super::theme::NetworkTheme;

/// Everything that has to stay alive while the background is animating.
/// Dropping it stops the loop and unregisters the listeners.
struct NetworkRuntime {
	frame_loop: FrameLoop,
	_listeners: Vec<WindowListener>,
}

fn mount(
	canvas: HtmlCanvasElement,
	config: NetworkConfig,
	theme: NetworkTheme,
) -> anyhow::Result<NetworkRuntime> {
	let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| anyhow!("getContext failed: {:?}", e))?
		.ok_or_else(|| anyhow!("2d context unavailable"))?
		.dyn_into()
		.map_err(|_| anyhow!("2d context has an unexpected type"))?;

	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let network = Rc::new(RefCell::new(ParticleNetwork::new(config, theme, w, h, seed)));

	let listeners = track_window(&window, &network, Some(canvas))?;

	let frame_loop = FrameLoop::new(move || network.borrow_mut().tick(&mut ctx));
	frame_loop.start()?;

	info!("background-network: mounted on {}x{} canvas", w, h);
	Ok(NetworkRuntime {
		frame_loop,
		_listeners: listeners,
	})
}

/// Renders the animated particle network behind all other page content.
///
/// The canvas is fixed to the viewport and ignores pointer events, so the page
/// on top stays fully interactive; pointer tracking happens on the window.
#[component]
pub fn ParticleNetworkCanvas(
	#[prop(default = NetworkConfig::default())] config: NetworkConfig,
	#[prop(default = NetworkTheme::default())] theme: NetworkTheme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime = StoredValue::new_local(None::<NetworkRuntime>);

	let style = format!(
		"position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; \
		 pointer-events: none; display: block; background: {};",
		theme.background.to_css()
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		match mount(canvas, config.clone(), theme.clone()) {
			Ok(rt) => runtime.set_value(Some(rt)),
			Err(err) => error!("background-network: failed to start: {err:#}"),
		}
	});

	on_cleanup(move || {
		let _ = runtime.try_update_value(|rt| {
			if let Some(rt) = rt.take() {
				rt.frame_loop.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="background-network-canvas"
			aria-hidden="true"
			style=style
		/>
	}
}
