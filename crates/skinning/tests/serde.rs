#![cfg(feature = "serde")]

use awsm_skinning::{
    animation::{AnimationClip, CubicEnding, InterpolationMode, KeyframeTrack},
    rotation::{Euler, RotationOrder},
    skeleton::BoneDescriptor,
    Transform,
};
use glam::{Quat, Vec3};

#[test]
fn bone_descriptor_round_trips() {
    let descriptor = BoneDescriptor::new(
        "spine",
        Some(0),
        Transform::IDENTITY
            .with_translation(Vec3::new(0.0, 0.5, 0.0))
            .with_euler(Euler::new(0.1, 0.2, 0.3, RotationOrder::ZYX)),
    );

    let json = serde_json::to_string(&descriptor).unwrap();
    let back: BoneDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, descriptor);
}

#[test]
fn clip_fills_in_interpolation_defaults() {
    let json = r#"{
        "name": "nod",
        "duration": 1.0,
        "tracks": [
            { "bone": "head", "channel": "Rotation", "times": [0.0, 1.0], "values": [0,0,0,1, 0,0,0,1] }
        ]
    }"#;

    let clip: AnimationClip = serde_json::from_str(json).unwrap();
    assert_eq!(clip.tracks[0].interpolation, InterpolationMode::Linear);
    assert_eq!(clip.tracks[0].ending, CubicEnding::ZeroCurvature);

    let keys = [Quat::IDENTITY, Quat::from_rotation_x(0.5)];
    let smooth = AnimationClip::new(
        "nod",
        vec![KeyframeTrack::rotation("head", vec![0.0, 1.0], &keys)
            .with_interpolation(InterpolationMode::Smooth)],
    );
    let json = serde_json::to_string(&smooth).unwrap();
    let back: AnimationClip = serde_json::from_str(&json).unwrap();
    assert_eq!(back, smooth);
}
