//! Tunable parameters for the particle network.
//!
//! Defaults reproduce the dashboard background. A page can override any subset
//! of them with a JSON document (see [`NetworkConfig::from_json`]).

use anyhow::{Context, ensure};
use serde::Deserialize;

/// Upper bound on `particle_count`; the link search is quadratic per cell.
pub const MAX_PARTICLES: usize = 10_000;

/// Simulation and connection parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
	/// Number of particles created by each `init`.
	pub particle_count: usize,
	/// Pairs closer than this are joined by a line.
	pub connection_distance: f64,
	/// Pointer influence radius.
	pub repel_radius: f64,
	/// Maximum per-frame displacement applied by the pointer.
	pub repel_strength: f64,
	/// Velocity components are drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Smallest particle radius (inclusive).
	pub radius_min: f64,
	/// Largest particle radius (exclusive).
	pub radius_max: f64,
	/// Above this particle count the pair search switches to a spatial grid.
	pub grid_threshold: usize,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			particle_count: 100,
			connection_distance: 120.0,
			repel_radius: 150.0,
			repel_strength: 0.5,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_max: 2.5,
			grid_threshold: 400,
		}
	}
}

impl NetworkConfig {
	/// Parse a (possibly partial) JSON override and validate the result.
	pub fn from_json(json: &str) -> anyhow::Result<Self> {
		let config: Self = serde_json::from_str(json).context("malformed network config")?;
		config.validate()?;
		Ok(config)
	}

	/// Reject values the simulation cannot work with.
	pub fn validate(&self) -> anyhow::Result<()> {
		ensure!(
			self.particle_count <= MAX_PARTICLES,
			"particle_count must be at most {}, got {}",
			MAX_PARTICLES,
			self.particle_count
		);
		ensure!(
			self.connection_distance.is_finite() && self.connection_distance > 0.0,
			"connection_distance must be positive, got {}",
			self.connection_distance
		);
		ensure!(
			self.repel_radius.is_finite() && self.repel_radius > 0.0,
			"repel_radius must be positive, got {}",
			self.repel_radius
		);
		ensure!(
			self.repel_strength.is_finite() && self.repel_strength >= 0.0,
			"repel_strength must be non-negative, got {}",
			self.repel_strength
		);
		ensure!(
			self.max_speed.is_finite() && self.max_speed >= 0.0,
			"max_speed must be non-negative, got {}",
			self.max_speed
		);
		ensure!(
			self.radius_min.is_finite() && self.radius_min > 0.0,
			"radius_min must be positive, got {}",
			self.radius_min
		);
		ensure!(
			self.radius_max.is_finite() && self.radius_max >= self.radius_min,
			"radius_max ({}) must not be below radius_min ({})",
			self.radius_max,
			self.radius_min
		);
		Ok(())
	}

	/// Whether the pair search should use the spatial grid.
	pub fn uses_grid(&self) -> bool {
		self.particle_count > self.grid_threshold
	}
}
