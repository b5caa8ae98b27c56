//! The owned particle network: physics, link search and theme in one place.
//!
//! Created once when the component mounts, then driven every frame through
//! [`ParticleNetwork::tick`] and from the window listeners through
//! `resize`/`set_pointer`/`clear_pointer`.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::NetworkConfig;
use super::links::{Link, LinkIndex};
use super::particles::{Particle, ParticleField, Pointer};
use super::render::{self, Surface};
use super::theme::NetworkTheme;

/// The background's whole state: particles, pointer, bounds, links and theme.
pub struct ParticleNetwork {
	field: ParticleField,
	links: LinkIndex,
	theme: NetworkTheme,
	rng: SmallRng,
}

impl ParticleNetwork {
	/// Build and populate a network for a `width` x `height` surface.
	pub fn new(config: NetworkConfig, theme: NetworkTheme, width: f64, height: f64, seed: u64) -> Self {
		let mut network = Self {
			field: ParticleField::new(config, width, height),
			links: LinkIndex::new(),
			theme,
			rng: SmallRng::seed_from_u64(seed),
		};
		network.init(width, height);
		network
	}

	/// Replace every particle and forget the pointer.
	pub fn init(&mut self, width: f64, height: f64) {
		self.field.init(width, height, &mut self.rng);
		debug!(
			"background-network: spawned {} particles on {}x{}",
			self.field.particles().len(),
			width,
			height
		);
	}

	pub fn advance(&mut self) {
		self.field.advance();
	}

	/// Draw the current state: clear, links, particles.
	pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		let config = self.field.config();
		let links = self.links.rebuild(
			self.field.particles(),
			config.connection_distance,
			config.uses_grid(),
		);
		render::render(
			surface,
			self.field.width(),
			self.field.height(),
			self.field.particles(),
			links,
			&self.theme,
		);
	}

	/// One animation frame.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		self.advance();
		self.render(surface);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("background-network: resized to {}x{}", width, height);
		self.field.resize(width, height);
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.field.set_pointer(x, y);
	}

	pub fn clear_pointer(&mut self) {
		self.field.clear_pointer();
	}

	pub fn pointer(&self) -> Option<Pointer> {
		self.field.pointer()
	}

	pub fn particles(&self) -> &[Particle] {
		self.field.particles()
	}

	/// Links computed by the last `render`.
	pub fn links(&self) -> &[Link] {
		self.links.links()
	}

	pub fn size(&self) -> (f64, f64) {
		(self.field.width(), self.field.height())
	}
}
