use super::error::{AwsmSkinError, Result};

/// Up to four bone indices per vertex.
pub type SkinIndices = [u16; 4];
/// Weights matching [`SkinIndices`] slot for slot.
pub type SkinWeights = [f32; 4];

/// Scales every vertex's weights to an L1 norm of 1.
///
/// Vertices whose weights sum to exactly zero are left alone. Nothing is
/// touched unless both indices and weights are present with matching
/// lengths. Returns the number of vertices rescaled.
pub fn normalize_skin_weights(
    indices: Option<&[SkinIndices]>,
    weights: Option<&mut [SkinWeights]>,
) -> Result<usize> {
    let Some(weights) = weights else {
        tracing::error!("cannot normalize skin weights, mesh has no skin weights");
        return Err(AwsmSkinError::MissingSkinWeights);
    };

    let Some(indices) = indices else {
        tracing::error!("cannot normalize skin weights, mesh has no skin indices");
        return Err(AwsmSkinError::MissingSkinIndices);
    };

    if indices.len() != weights.len() {
        tracing::error!(
            "cannot normalize skin weights, {} indices vs {} weights",
            indices.len(),
            weights.len()
        );
        return Err(AwsmSkinError::InfluenceLengthMismatch {
            indices: indices.len(),
            weights: weights.len(),
        });
    }

    let mut normalized = 0;

    for vertex in weights.iter_mut() {
        // f64 so four large weights can't overflow the sum
        let sum: f64 = vertex.iter().map(|w| f64::from(w.abs())).sum();
        if sum == 0.0 {
            continue;
        }

        for w in vertex.iter_mut() {
            *w = (f64::from(*w) / sum) as f32;
        }
        normalized += 1;
    }

    Ok(normalized)
}

/// Every influence that carries weight must point at an existing bone.
pub fn validate_skin_indices(
    indices: &[SkinIndices],
    weights: Option<&[SkinWeights]>,
    bone_count: usize,
) -> Result<()> {
    for (vertex, slots) in indices.iter().enumerate() {
        for (slot, bone) in slots.iter().enumerate() {
            let weighted = weights
                .and_then(|weights| weights.get(vertex))
                .map(|w| w[slot] != 0.0)
                .unwrap_or(true);

            if weighted && *bone as usize >= bone_count {
                return Err(AwsmSkinError::SkinIndexOutOfRange {
                    vertex,
                    bone: *bone as usize,
                    bone_count,
                });
            }
        }
    }

    Ok(())
}
