//! Canvas rendering for the particle network.
//!
//! Drawing happens in three passes: clear, links, then particles on top.
//! All calls go through [`Surface`] so frames can be captured off-browser.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::links::Link;
use super::particles::Particle;
use super::theme::{Color, NetworkTheme};

/// The drawing primitives a frame needs.
pub trait Surface {
	/// Erase the whole drawing area.
	fn clear(&mut self, width: f64, height: f64);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	/// Fill a circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Renders one complete frame.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	width: f64,
	height: f64,
	particles: &[Particle],
	links: &[Link],
	theme: &NetworkTheme,
) {
	surface.clear(width, height);
	draw_links(surface, particles, links, theme);
	draw_particles(surface, particles, theme);
}

fn draw_links<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	links: &[Link],
	theme: &NetworkTheme,
) {
	for link in links {
		let (p, q) = (&particles[link.a], &particles[link.b]);
		surface.stroke_line(
			(p.x, p.y),
			(q.x, q.y),
			theme.link.with_alpha(link.opacity),
			theme.line_width,
		);
	}
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle], theme: &NetworkTheme) {
	for p in particles {
		surface.fill_circle(p.x, p.y, p.radius, theme.particle);
	}
}

/// Records draw calls instead of painting them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCall {
	Clear { width: f64, height: f64 },
	Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
	Circle { x: f64, y: f64, radius: f64, color: Color },
}

#[cfg(test)]
impl RecordingSurface {
	pub fn lines(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Line { .. }))
			.collect()
	}

	pub fn circles(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Circle { .. }))
			.collect()
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.calls.push(DrawCall::Clear { width, height });
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.calls.push(DrawCall::Line {
			from,
			to,
			color,
			width,
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.calls.push(DrawCall::Circle {
			x,
			y,
			radius,
			color,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(x: f64, y: f64, radius: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius,
		}
	}

	#[test]
	fn passes_run_in_order() {
		let theme = NetworkTheme::default();
		let particles = [at(0.0, 0.0, 1.0), at(10.0, 0.0, 2.0)];
		let links = [Link {
			a: 0,
			b: 1,
			opacity: 0.75,
		}];
		let mut surface = RecordingSurface::default();

		render(&mut surface, 640.0, 480.0, &particles, &links, &theme);

		assert_eq!(
			surface.calls,
			vec![
				DrawCall::Clear {
					width: 640.0,
					height: 480.0
				},
				DrawCall::Line {
					from: (0.0, 0.0),
					to: (10.0, 0.0),
					color: theme.link.with_alpha(0.75),
					width: theme.line_width,
				},
				DrawCall::Circle {
					x: 0.0,
					y: 0.0,
					radius: 1.0,
					color: theme.particle
				},
				DrawCall::Circle {
					x: 10.0,
					y: 0.0,
					radius: 2.0,
					color: theme.particle
				},
			]
		);
	}

	#[test]
	fn no_links_still_clears_and_draws_particles() {
		let mut surface = RecordingSurface::default();
		render(
			&mut surface,
			100.0,
			100.0,
			&[at(5.0, 5.0, 1.5)],
			&[],
			&NetworkTheme::default(),
		);
		assert!(surface.lines().is_empty());
		assert_eq!(surface.circles().len(), 1);
	}
}
