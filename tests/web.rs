//! Browser tests for the frame loop and window wiring.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use background_network::{
	FrameLoop, NetworkConfig, NetworkTheme, ParticleNetwork, track_window, viewport_size,
};
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget, MouseEvent, MouseEventInit, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
	web_sys::window().unwrap()
}

/// Resolves on the next animation frame.
async fn next_frame() {
	let promise = Promise::new(&mut |resolve, _reject| {
		window().request_animation_frame(&resolve).unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

async fn frames(n: usize) {
	for _ in 0..n {
		next_frame().await;
	}
}

fn counting_loop() -> (FrameLoop, Rc<Cell<u32>>) {
	let frames = Rc::new(Cell::new(0u32));
	let counter = frames.clone();
	(FrameLoop::new(move || counter.set(counter.get() + 1)), frames)
}

fn shared_network(width: f64, height: f64) -> Rc<RefCell<ParticleNetwork>> {
	Rc::new(RefCell::new(ParticleNetwork::new(
		NetworkConfig {
			particle_count: 10,
			..NetworkConfig::default()
		},
		NetworkTheme::default(),
		width,
		height,
		1,
	)))
}

fn mouse(kind: &str, x: i32, y: i32, related: Option<&EventTarget>) -> MouseEvent {
	let init = MouseEventInit::new();
	init.set_client_x(x);
	init.set_client_y(y);
	init.set_related_target(related);
	MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
async fn running_loop_calls_back_every_frame() {
	let (frame_loop, count) = counting_loop();
	frame_loop.start().unwrap();
	frames(4).await;
	assert!(count.get() >= 2, "only {} frames ran", count.get());
	assert!(frame_loop.is_running());
}

#[wasm_bindgen_test]
async fn stopped_loop_stays_quiet() {
	let (frame_loop, count) = counting_loop();
	frame_loop.start().unwrap();
	frames(3).await;
	frame_loop.stop();
	let seen = count.get();
	assert!(seen > 0);

	frames(4).await;
	assert_eq!(count.get(), seen);
	assert!(!frame_loop.is_running());
}

#[wasm_bindgen_test]
async fn start_and_stop_are_idempotent() {
	let (frame_loop, count) = counting_loop();
	frame_loop.start().unwrap();
	frame_loop.start().unwrap();
	frames(3).await;
	// A second start must not schedule a second chain of callbacks.
	let after_three = count.get();
	assert!(after_three <= 3);

	frame_loop.stop();
	frame_loop.stop();
	frames(2).await;
	assert_eq!(count.get(), after_three);
}

#[wasm_bindgen_test]
async fn restart_after_stop() {
	let (frame_loop, count) = counting_loop();
	frame_loop.start().unwrap();
	frame_loop.stop();
	frames(2).await;
	assert_eq!(count.get(), 0);

	frame_loop.start().unwrap();
	frames(3).await;
	assert!(count.get() > 0);
}

#[wasm_bindgen_test]
async fn dropping_a_running_loop_stops_it() {
	let (frame_loop, count) = counting_loop();
	frame_loop.start().unwrap();
	drop(frame_loop);
	frames(3).await;
	assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
fn mousemove_sets_the_pointer() {
	let network = shared_network(800.0, 600.0);
	let _listeners = track_window(&window(), &network, None).unwrap();

	window()
		.dispatch_event(&mouse("mousemove", 40, 25, None))
		.unwrap();

	let pointer = network.borrow().pointer().unwrap();
	assert_eq!((pointer.x, pointer.y), (40.0, 25.0));
}

#[wasm_bindgen_test]
fn only_leaving_the_page_clears_the_pointer() {
	let network = shared_network(800.0, 600.0);
	let _listeners = track_window(&window(), &network, None).unwrap();
	let document = window().document().unwrap();
	let root = document.document_element().unwrap();
	let root: &EventTarget = root.as_ref();

	window()
		.dispatch_event(&mouse("mousemove", 10, 10, None))
		.unwrap();
	// Moving onto another element of the page.
	window()
		.dispatch_event(&mouse("mouseout", 10, 10, Some(root)))
		.unwrap();
	assert!(network.borrow().pointer().is_some());

	window()
		.dispatch_event(&mouse("mouseout", 10, 10, None))
		.unwrap();
	assert!(network.borrow().pointer().is_none());
}

#[wasm_bindgen_test]
fn resize_updates_bounds_and_keeps_particles() {
	let network = shared_network(1.0, 1.0);
	let _listeners = track_window(&window(), &network, None).unwrap();
	let before = network.borrow().particles().to_vec();

	window().dispatch_event(&Event::new("resize").unwrap()).unwrap();

	let net = network.borrow();
	assert_eq!(net.size(), viewport_size(&window()).unwrap());
	assert_eq!(net.particles(), &before[..]);
}

#[wasm_bindgen_test]
fn dropped_listeners_are_unregistered() {
	let network = shared_network(800.0, 600.0);
	let listeners = track_window(&window(), &network, None).unwrap();
	drop(listeners);

	window()
		.dispatch_event(&mouse("mousemove", 5, 5, None))
		.unwrap();
	assert!(network.borrow().pointer().is_none());
}
