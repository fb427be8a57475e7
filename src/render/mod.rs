//! Tessellation of scene commands into plain vertex buffers

pub mod shapes;
pub mod vertex;

pub use shapes::tessellate;
pub use vertex::{Vertex, colors};
