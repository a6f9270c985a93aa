//! Keyframe sampling and hierarchical skeletal skinning.
//!
//! The per-frame flow is driven by [`SkinnedMesh::update`]:
//! sample every active animation channel, write the blended values into the
//! bone locals, propagate world transforms root-to-leaf, then pack the
//! skin offset matrices into a square float texture for the GPU.
//!
//! Nothing in here is reentrant. Interpolants and the packer reuse their
//! scratch buffers, so a mesh must be updated from one thread, one frame at
//! a time, and rebuilt only between frames.

pub mod animation;
pub mod debug;
pub mod error;
pub mod mesh;
pub mod rotation;
pub mod skeleton;
pub mod skin;
pub mod transform;

pub use debug::SkinningLogging;
pub use error::{AwsmError, Result};
pub use mesh::{SkinGeometry, SkinnedMesh, SkinnedMeshOptions};
pub use transform::Transform;
