//! Particle physics: drift, wall reflection and pointer repulsion.

use rand::Rng;

use super::config::NetworkConfig;

/// A single drifting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

/// Last known pointer position in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

/// Linear repulsion falloff: 1 at the pointer, 0 at `radius`.
///
/// Returns 0 outside `(0, radius)`; a particle sitting exactly on the pointer
/// has no direction to be pushed in and is left alone.
pub fn repulsion_force(distance: f64, radius: f64) -> f64 {
	if distance > 0.0 && distance < radius {
		(radius - distance) / radius
	} else {
		0.0
	}
}

/// Owns the particle set, the surface bounds and the pointer state.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	pointer: Option<Pointer>,
	config: NetworkConfig,
}

impl ParticleField {
	/// Create an empty field; call [`init`](Self::init) to populate it.
	pub fn new(config: NetworkConfig, width: f64, height: f64) -> Self {
		Self {
			particles: Vec::with_capacity(config.particle_count),
			width,
			height,
			pointer: None,
			config,
		}
	}

	/// Reset bounds and pointer, then replace every particle with a fresh one.
	pub fn init<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.pointer = None;

		let NetworkConfig {
			particle_count,
			max_speed,
			radius_min,
			radius_max,
			..
		} = self.config;

		self.particles.clear();
		self.particles.extend((0..particle_count).map(|_| Particle {
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height,
			vx: (rng.r#gen::<f64>() - 0.5) * 2.0 * max_speed,
			vy: (rng.r#gen::<f64>() - 0.5) * 2.0 * max_speed,
			radius: radius_min + rng.r#gen::<f64>() * (radius_max - radius_min),
		}));
	}

	/// Advance every particle by one frame.
	pub fn advance(&mut self) {
		let (width, height) = (self.width, self.height);
		let (radius, strength) = (self.config.repel_radius, self.config.repel_strength);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			// Reflect without clamping; a one-step overshoot is expected.
			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			if let Some(pointer) = self.pointer {
				let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
				let dist = dx.hypot(dy);
				let force = repulsion_force(dist, radius);
				if force > 0.0 {
					p.x += dx / dist * force * strength;
					p.y += dy / dist * force * strength;
				}
			}
		}
	}

	/// Track new surface bounds. Existing particles are left where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Pointer { x, y });
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	pub fn pointer(&self) -> Option<Pointer> {
		self.pointer
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
		&mut self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &NetworkConfig {
		&self.config
	}
}
