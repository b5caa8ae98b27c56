//! A stoppable `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::anyhow;
use log::{error, info};
use wasm_bindgen::prelude::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `on_frame` once per display refresh between `start` and `stop`.
///
/// Dropping the loop stops it and releases the callback.
pub struct FrameLoop {
	callback: FrameCallback,
	running: Rc<Cell<bool>>,
	handle: Rc<Cell<Option<i32>>>,
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> anyhow::Result<i32> {
	let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
	window
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.map_err(|e| anyhow!("requestAnimationFrame failed: {:?}", e))
}

impl FrameLoop {
	pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let running = Rc::new(Cell::new(false));
		let handle = Rc::new(Cell::new(None));

		let (callback_inner, running_inner, handle_inner) =
			(callback.clone(), running.clone(), handle.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			handle_inner.set(None);
			if !running_inner.get() {
				return;
			}
			on_frame();
			// on_frame may have stopped the loop
			if !running_inner.get() {
				return;
			}
			if let Some(ref cb) = *callback_inner.borrow() {
				match request_frame(cb) {
					Ok(id) => handle_inner.set(Some(id)),
					Err(err) => {
						error!("background-network: {err:#}");
						running_inner.set(false);
					}
				}
			}
		}));

		Self {
			callback,
			running,
			handle,
		}
	}

	/// Begin scheduling frames. No-op when already running.
	pub fn start(&self) -> anyhow::Result<()> {
		if self.running.get() {
			return Ok(());
		}
		let callback = self.callback.borrow();
		let cb = callback
			.as_ref()
			.ok_or_else(|| anyhow!("frame loop already released"))?;
		let id = request_frame(cb)?;
		self.handle.set(Some(id));
		self.running.set(true);
		info!("background-network: animation started");
		Ok(())
	}

	/// Cancel the pending frame. No-op when already stopped.
	pub fn stop(&self) {
		if !self.running.replace(false) {
			return;
		}
		if let Some(id) = self.handle.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		info!("background-network: animation stopped");
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
		// Break the closure's reference to its own cell.
		self.callback.borrow_mut().take();
	}
}
