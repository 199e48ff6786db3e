//! Rendering module
//!
//! Renderers only read a `Level`: grid, actors, player, size and status.

pub mod text;

pub use text::render_text;
