//! Animated particle-network background.
//!
//! Renders drifting points on an HTML canvas with:
//! - Straight-line drift and velocity reflection at the viewport edges
//! - Lines between nearby points that fade out with distance
//! - Points pushed away from the mouse pointer
//!
//! # Example
//!
//! ```ignore
//! use background_network::{NetworkConfig, ParticleNetworkCanvas};
//!
//! let config = NetworkConfig { particle_count: 150, ..NetworkConfig::default() };
//!
//! view! { <ParticleNetworkCanvas config=config /> }
//! ```

mod component;
pub mod config;
mod frame_loop;
pub mod links;
mod listener;
mod network;
pub mod particles;
pub mod render;
pub mod theme;

pub use component::ParticleNetworkCanvas;
pub use config::NetworkConfig;
pub use frame_loop::FrameLoop;
pub use listener::{WindowListener, track_window, viewport_size};
pub use network::ParticleNetwork;
pub use theme::NetworkTheme;
