//! Visual theming for the particle network.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Two-stop diagonal gradient painted behind the canvas via CSS.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Top-left stop
	pub from: Color,
	/// Bottom-right stop
	pub to: Color,
}

impl BackgroundStyle {
	pub fn to_css(&self) -> String {
		format!(
			"linear-gradient(to bottom right, {}, {})",
			self.from.to_css(),
			self.to.to_css()
		)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct NetworkTheme {
	/// Fill for every particle
	pub particle: Color,
	/// Link stroke; alpha is replaced per link by the connection opacity
	pub link: Color,
	/// Link stroke width in pixels
	pub line_width: f64,
	pub background: BackgroundStyle,
}

impl NetworkTheme {
	/// Emerald on near-black green, matching the dashboard palette (default)
	pub fn field() -> Self {
		Self {
			particle: Color::rgb(52, 211, 153),
			link: Color::rgb(52, 211, 153),
			line_width: 0.5,
			background: BackgroundStyle {
				from: Color::rgb(0, 10, 5),
				to: Color::rgb(0, 24, 12),
			},
		}
	}
}

impl Default for NetworkTheme {
	fn default() -> Self {
		Self::field()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(52, 211, 153).to_css(), "#34d399");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let c = Color::rgb(52, 211, 153).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(52, 211, 153, 0.25)");
	}

	#[test]
	fn default_background_matches_dashboard() {
		assert_eq!(
			NetworkTheme::default().background.to_css(),
			"linear-gradient(to bottom right, #000a05, #00180c)"
		);
	}
}
