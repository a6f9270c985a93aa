//! Skinned mesh: owns the geometry, the bone hierarchy built from it, the
//! active animations and the packed skin matrices.

use crate::{
    animation::{
        AnimationClip, AnimationKey, AnimationLoopStyle, AnimationPlayer, Animations, PoseMixer,
    },
    debug::SkinningLogging,
    error::Result,
    skeleton::{Bone, BoneDescriptor, Skeleton},
    skin::{self, SkinIndices, SkinMatrices, SkinTextureWriter, SkinWeights},
};

/// Skinning-relevant slice of a mesh's geometry.
///
/// Bumping [`SkinGeometry::version`] through
/// [`SkinGeometry::mark_structure_changed`] makes the owning mesh rebuild
/// its hierarchy on the next update.
#[derive(Debug, Clone, Default)]
pub struct SkinGeometry {
    pub bones: Vec<BoneDescriptor>,
    pub skin_indices: Option<Vec<SkinIndices>>,
    pub skin_weights: Option<Vec<SkinWeights>>,
    pub animations: Vec<AnimationClip>,
    version: u64,
}

impl SkinGeometry {
    pub fn new(bones: Vec<BoneDescriptor>) -> Self {
        Self {
            bones,
            ..Default::default()
        }
    }

    pub fn with_skin(mut self, indices: Vec<SkinIndices>, weights: Vec<SkinWeights>) -> Self {
        self.skin_indices = Some(indices);
        self.skin_weights = Some(weights);
        self
    }

    pub fn with_animation(mut self, clip: AnimationClip) -> Self {
        self.animations.push(clip);
        self
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mark_structure_changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.animations.iter().find(|clip| clip.name == name)
    }

    /// See [`skin::normalize_skin_weights`].
    pub fn normalize_skin_weights(&mut self) -> skin::Result<usize> {
        skin::normalize_skin_weights(self.skin_indices.as_deref(), self.skin_weights.as_deref_mut())
    }
}

#[derive(Debug, Clone)]
pub struct SkinnedMeshOptions {
    /// Normalize skin weights whenever the hierarchy is (re)built.
    pub normalize_weights: bool,
    pub logging: SkinningLogging,
}

impl Default for SkinnedMeshOptions {
    fn default() -> Self {
        Self {
            normalize_weights: true,
            logging: SkinningLogging::default(),
        }
    }
}

impl SkinnedMeshOptions {
    pub fn with_normalize_weights(mut self, normalize_weights: bool) -> Self {
        self.normalize_weights = normalize_weights;
        self
    }

    pub fn with_logging(mut self, logging: SkinningLogging) -> Self {
        self.logging = logging;
        self
    }
}

pub struct SkinnedMesh {
    geometry: SkinGeometry,
    built_version: u64,
    options: SkinnedMeshOptions,
    skeleton: Skeleton,
    skin_matrices: SkinMatrices,
    animations: Animations,
    mixer: PoseMixer,
}

impl SkinnedMesh {
    pub fn new(geometry: SkinGeometry, options: SkinnedMeshOptions) -> Result<Self> {
        let mut mesh = Self {
            built_version: geometry.version(),
            geometry,
            options,
            skeleton: Skeleton::default(),
            skin_matrices: SkinMatrices::new(0)?,
            animations: Animations::new(),
            mixer: PoseMixer::new(),
        };

        mesh.rebuild()?;

        Ok(mesh)
    }

    /// Replaces the geometry and rebuilds everything derived from it. On
    /// failure the previous geometry is put back and nothing changes.
    pub fn set_geometry(&mut self, geometry: SkinGeometry) -> Result<()> {
        let previous = std::mem::replace(&mut self.geometry, geometry);
        if let Err(err) = self.rebuild() {
            self.geometry = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn geometry(&self) -> &SkinGeometry {
        &self.geometry
    }

    /// Structural edits should be followed by
    /// [`SkinGeometry::mark_structure_changed`] so the next update rebuilds.
    pub fn geometry_mut(&mut self) -> &mut SkinGeometry {
        &mut self.geometry
    }

    pub fn options(&self) -> &SkinnedMeshOptions {
        &self.options
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }

    pub fn skin_matrices(&self) -> &SkinMatrices {
        &self.skin_matrices
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.skeleton.bone_by_name(name)
    }

    pub fn bone_index_by_name(&self, name: &str) -> Option<usize> {
        self.skeleton.bone_index_by_name(name)
    }

    /// Starts playing the clip called `name`. `Ok(None)` if the geometry has
    /// no such clip. A player already running under that name is replaced.
    pub fn add_animation(
        &mut self,
        name: &str,
        weight: f32,
        looped: bool,
    ) -> Result<Option<AnimationKey>> {
        let Some(clip) = self.geometry.clip(name) else {
            tracing::debug!("no animation clip named {name}");
            return Ok(None);
        };

        let loop_style = looped.then_some(AnimationLoopStyle::Loop);
        let mut player = AnimationPlayer::new(clip, &self.skeleton)?
            .with_weight(weight)
            .with_loop_style(loop_style);
        player.play();

        Ok(Some(self.animations.insert(player)))
    }

    /// No-op if `name` isn't playing.
    pub fn remove_animation(&mut self, name: &str) {
        self.animations.remove(name);
    }

    pub fn animation(&self, name: &str) -> Option<&AnimationPlayer> {
        self.animations.by_name(name)
    }

    pub fn animation_mut(&mut self, name: &str) -> Option<&mut AnimationPlayer> {
        self.animations.by_name_mut(name)
    }

    /// Puts every bone back at its bind local and repacks the matrices.
    pub fn pose(&mut self) -> Result<()> {
        self.skeleton.reset_to_bind_pose();
        self.skin_matrices.update(&self.skeleton)?;
        Ok(())
    }

    /// One animation tick: sample, write bone locals, propagate world
    /// matrices, pack. Rebuilds first if the geometry changed structurally.
    pub fn update(&mut self, global_time_delta: f64) -> Result<()> {
        if self.geometry.version() != self.built_version {
            self.rebuild()?;
        }

        let _maybe_span_guard = self.options.logging.span("update");

        {
            let _maybe_span_guard = self.options.logging.span("sample animations");
            self.mixer.reset(self.skeleton.len());
            self.animations.update(global_time_delta, &mut self.mixer);
            self.mixer.apply(&mut self.skeleton);
        }

        {
            let _maybe_span_guard = self.options.logging.span("update world");
            self.skeleton.update_world();
        }

        {
            let _maybe_span_guard = self.options.logging.span("pack skin matrices");
            self.skin_matrices.update(&self.skeleton)?;
        }

        Ok(())
    }

    pub fn write_gpu(&mut self, writer: &mut impl SkinTextureWriter) -> Result<()> {
        let _maybe_span_guard = self.options.logging.span("skin texture write");
        self.skin_matrices.write_gpu(writer)?;
        Ok(())
    }

    // Tears down and rebuilds everything derived from the geometry. All
    // fallible work happens before any state is replaced.
    fn rebuild(&mut self) -> Result<()> {
        let _maybe_span_guard = self.options.logging.span("rebuild");

        let bone_count = self.geometry.bones.len();
        skin::skin_texture_dim(bone_count)?;

        let skeleton = Skeleton::build(&self.geometry.bones)?;

        if let Some(indices) = self.geometry.skin_indices.as_deref() {
            skin::validate_skin_indices(
                indices,
                self.geometry.skin_weights.as_deref(),
                bone_count,
            )?;
        }

        if self.options.normalize_weights {
            let normalized = self.geometry.normalize_skin_weights()?;
            tracing::debug!("normalized skin weights for {normalized} vertices");
        }

        // players hold bone indices into the old hierarchy
        if !self.animations.is_empty() {
            tracing::debug!("dropping {} animations on rebuild", self.animations.len());
            self.animations.clear();
        }

        self.skeleton = skeleton;
        self.skin_matrices.resize(bone_count)?;
        self.skin_matrices.update(&self.skeleton)?;
        self.built_version = self.geometry.version();

        tracing::debug!(
            "built skeleton with {bone_count} bones, skin texture {0}x{0}",
            self.skin_matrices.dim()
        );

        Ok(())
    }
}
