//! Terrain debug visualization: 2D preview images of generation inputs.
//!
//! Provides [`DebugImage`] plus renderers for sampled height grids and falloff
//! masks. Hosts use these to eyeball a parameter set before meshing it.

mod image;
mod renderers;

pub use self::image::{DebugImage, ImageEncodeError};
pub use renderers::{height_to_color, render_falloff_debug, render_heightmap_debug};
