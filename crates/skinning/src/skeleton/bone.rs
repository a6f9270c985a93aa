use glam::Mat4;

use crate::transform::Transform;

/// One entry of the ordered bone list a geometry supplies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneDescriptor {
    pub name: String,
    /// `None` attaches the bone directly to the mesh.
    pub parent: Option<usize>,
    pub transform: Transform,
}

impl BoneDescriptor {
    pub fn new(name: impl Into<String>, parent: Option<usize>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            parent,
            transform,
        }
    }

    /// For loaders that mark roots with a negative parent index.
    pub fn from_parent_index(name: impl Into<String>, parent: i32, transform: Transform) -> Self {
        Self::new(name, usize::try_from(parent).ok(), transform)
    }
}

#[derive(Debug, Clone)]
pub struct Bone {
    pub local: Transform,
    name: String,
    parent: Option<usize>,
    pub(super) children: Vec<usize>,
    bind_local: Transform,
    // mesh space, refreshed by Skeleton::update_world
    pub(super) world: Mat4,
}

impl Bone {
    pub(super) fn new(descriptor: &BoneDescriptor) -> Self {
        Self {
            local: descriptor.transform,
            name: descriptor.name.clone(),
            parent: descriptor.parent,
            children: Vec::new(),
            bind_local: descriptor.transform,
            world: descriptor.transform.to_matrix(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }

    pub fn bind_local(&self) -> &Transform {
        &self.bind_local
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world
    }
}
