//! Proximity links between particles.
//!
//! Small fields are scanned pair by pair. Large ones are bucketed into a
//! uniform grid whose cell size equals the connection distance, so only the
//! 3x3 neighbourhood of each particle has to be checked.

use std::collections::HashMap;

use super::particles::Particle;

/// A line to draw between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub opacity: f64,
}

/// Linear fade: 1 when touching, 0 at `max_distance`. `None` at or beyond it.
pub fn connection_opacity(distance: f64, max_distance: f64) -> Option<f64> {
	(distance < max_distance).then(|| 1.0 - distance / max_distance)
}

fn distance(p: &Particle, q: &Particle) -> f64 {
	(p.x - q.x).hypot(p.y - q.y)
}

type CellKey = (i64, i64);

fn cell_of(p: &Particle, cell_size: f64) -> CellKey {
	(
		(p.x / cell_size).floor() as i64,
		(p.y / cell_size).floor() as i64,
	)
}

/// Reusable link buffer and spatial grid.
#[derive(Debug, Default)]
pub struct LinkIndex {
	links: Vec<Link>,
	cells: HashMap<CellKey, Vec<usize>>,
}

impl LinkIndex {
	pub fn new() -> Self {
		Self::default()
	}

	/// Recompute links for the current particle positions.
	pub fn rebuild(&mut self, particles: &[Particle], max_distance: f64, use_grid: bool) -> &[Link] {
		self.links.clear();
		if use_grid {
			self.scan_grid(particles, max_distance);
		} else {
			self.scan_pairs(particles, max_distance);
		}
		&self.links
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}

	fn push_if_close(&mut self, particles: &[Particle], a: usize, b: usize, max_distance: f64) {
		let d = distance(&particles[a], &particles[b]);
		if let Some(opacity) = connection_opacity(d, max_distance) {
			self.links.push(Link { a, b, opacity });
		}
	}

	fn scan_pairs(&mut self, particles: &[Particle], max_distance: f64) {
		for a in 0..particles.len() {
			for b in (a + 1)..particles.len() {
				self.push_if_close(particles, a, b, max_distance);
			}
		}
	}

	fn scan_grid(&mut self, particles: &[Particle], max_distance: f64) {
		for bucket in self.cells.values_mut() {
			bucket.clear();
		}
		for (i, p) in particles.iter().enumerate() {
			self.cells.entry(cell_of(p, max_distance)).or_default().push(i);
		}
		self.cells.retain(|_, bucket| !bucket.is_empty());

		let mut candidates = Vec::new();
		for (a, p) in particles.iter().enumerate() {
			let (cx, cy) = cell_of(p, max_distance);
			candidates.clear();
			for ny in (cy - 1)..=(cy + 1) {
				for nx in (cx - 1)..=(cx + 1) {
					if let Some(bucket) = self.cells.get(&(nx, ny)) {
						candidates.extend(bucket.iter().copied().filter(|&b| b > a));
					}
				}
			}
			for &b in &candidates {
				self.push_if_close(particles, a, b, max_distance);
			}
		}
	}
}
