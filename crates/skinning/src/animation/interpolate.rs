//! Blend kernels shared by the interpolants and the pose mixer.
//!
//! The slice kernels write into a caller-owned `out` and never allocate.

use glam::{Quat, Vec3};

pub fn interpolate_linear_vec3(first: Vec3, second: Vec3, t: f32) -> Vec3 {
    first.lerp(second, t)
}

pub fn interpolate_linear_quat(first: Quat, second: Quat, t: f32) -> Quat {
    first.slerp(second, t)
}

pub(super) fn copy_sample(values: &[f32], stride: usize, index: usize, out: &mut [f32]) {
    let offset = index * stride;
    out.copy_from_slice(&values[offset..offset + stride]);
}

pub(super) fn interpolate_linear(
    values: &[f32],
    stride: usize,
    i1: usize,
    weight1: f32,
    out: &mut [f32],
) {
    let offset1 = i1 * stride;
    let offset0 = offset1 - stride;
    let weight0 = 1.0 - weight1;

    for (i, value) in out.iter_mut().enumerate() {
        *value = values[offset0 + i] * weight0 + values[offset1 + i] * weight1;
    }
}

pub(super) fn interpolate_quaternion_linear(
    values: &[f32],
    stride: usize,
    i1: usize,
    alpha: f32,
    out: &mut [f32],
) {
    let offset1 = i1 * stride;
    let offset0 = offset1 - stride;

    for block in (0..stride).step_by(4) {
        slerp_flat(
            &values[offset0 + block..offset0 + block + 4],
            &values[offset1 + block..offset1 + block + 4],
            alpha,
            &mut out[block..block + 4],
        );
    }
}

/// Hermite basis weights for the four samples around a segment.
///
/// `weight_prev`/`weight_next` are the ratios of half the segment length to
/// the neighbouring interval lengths; with uniform spacing both are 0.5 and
/// this is a Catmull-Rom spline.
#[derive(Debug, Clone, Copy)]
pub(super) struct HermiteWeights {
    pub prev: f32,
    pub left: f32,
    pub right: f32,
    pub next: f32,
}

impl HermiteWeights {
    pub fn new(p: f32, weight_prev: f32, weight_next: f32) -> Self {
        let pp = p * p;
        let ppp = pp * p;
        let wp = weight_prev;
        let wn = weight_next;

        Self {
            prev: -wp * ppp + 2.0 * wp * pp - wp * p,
            left: (1.0 + wp) * ppp + (-1.5 - 2.0 * wp) * pp + (-0.5 + wp) * p + 1.0,
            right: (-1.0 - wn) * ppp + (1.5 + wn) * pp + 0.5 * p,
            next: wn * ppp - wn * pp,
        }
    }
}

pub(super) fn interpolate_cubic(
    values: &[f32],
    stride: usize,
    i_prev: usize,
    i1: usize,
    i_next: usize,
    weights: HermiteWeights,
    out: &mut [f32],
) {
    let offset_prev = i_prev * stride;
    let offset1 = i1 * stride;
    let offset0 = offset1 - stride;
    let offset_next = i_next * stride;

    for (i, value) in out.iter_mut().enumerate() {
        *value = weights.prev * values[offset_prev + i]
            + weights.left * values[offset0 + i]
            + weights.right * values[offset1 + i]
            + weights.next * values[offset_next + i];
    }
}

/// Spherical linear interpolation between two `[x, y, z, w]` quaternions.
///
/// `t == 0` and `t == 1` return the endpoints unchanged. Otherwise the
/// shorter arc is taken (glam's slerp) and the result is normalized.
pub fn slerp_flat(first: &[f32], second: &[f32], t: f32, out: &mut [f32]) {
    if t == 0.0 {
        out.copy_from_slice(&first[..4]);
        return;
    }

    if t == 1.0 {
        out.copy_from_slice(&second[..4]);
        return;
    }

    if first[..4] == second[..4] {
        out.copy_from_slice(&first[..4]);
        return;
    }

    let result = Quat::from_slice(first).slerp(Quat::from_slice(second), t);
    let length = result.length();
    let result = if length > 0.0 { result / length } else { result };
    result.write_to_slice(out);
}
