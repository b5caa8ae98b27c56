//! Window event listeners that unregister themselves when dropped, and the
//! resize/pointer wiring that feeds a [`ParticleNetwork`].

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Window};

use super::network::ParticleNetwork;

/// A window listener, removed again on drop.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	pub fn new(
		window: &Window,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> anyhow::Result<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.map_err(|e| anyhow!("failed to listen for {event}: {:?}", e))?;
		Ok(Self {
			window: window.clone(),
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// Current `innerWidth`/`innerHeight`.
pub fn viewport_size(window: &Window) -> anyhow::Result<(f64, f64)> {
	let width = window
		.inner_width()
		.map_err(|e| anyhow!("innerWidth unavailable: {:?}", e))?
		.as_f64()
		.ok_or_else(|| anyhow!("innerWidth is not a number"))?;
	let height = window
		.inner_height()
		.map_err(|e| anyhow!("innerHeight unavailable: {:?}", e))?
		.as_f64()
		.ok_or_else(|| anyhow!("innerHeight is not a number"))?;
	Ok((width, height))
}

/// Keep `network` in sync with the window: bounds on `resize`, pointer on
/// `mousemove`, pointer cleared when a `mouseout` leaves the page.
///
/// When a canvas is given its backing store follows the viewport too.
pub fn track_window(
	window: &Window,
	network: &Rc<RefCell<ParticleNetwork>>,
	canvas: Option<HtmlCanvasElement>,
) -> anyhow::Result<Vec<WindowListener>> {
	let network_resize = network.clone();
	let resize = WindowListener::new(window, "resize", move |_: Event| {
		let Some(win) = web_sys::window() else {
			return;
		};
		match viewport_size(&win) {
			Ok((w, h)) => {
				if let Some(ref canvas) = canvas {
					canvas.set_width(w as u32);
					canvas.set_height(h as u32);
				}
				network_resize.borrow_mut().resize(w, h);
			}
			Err(err) => warn!("background-network: ignoring resize: {err:#}"),
		}
	})?;

	let network_move = network.clone();
	let pointer_move = WindowListener::new(window, "mousemove", move |ev: Event| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			network_move
				.borrow_mut()
				.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
		}
	})?;

	let network_leave = network.clone();
	let pointer_leave = WindowListener::new(window, "mouseout", move |ev: Event| {
		// Only a mouseout with no destination element means the pointer left the page.
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			if ev.related_target().is_none() {
				network_leave.borrow_mut().clear_pointer();
			}
		}
	})?;

	Ok(vec![resize, pointer_move, pointer_leave])
}
