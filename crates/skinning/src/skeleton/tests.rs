use glam::{Mat4, Quat, Vec3};

use crate::transform::Transform;

use super::{AwsmSkeletonError, BoneDescriptor, Skeleton};

fn arm() -> Vec<BoneDescriptor> {
    vec![
        BoneDescriptor::new(
            "hips",
            None,
            Transform::IDENTITY
                .with_translation(Vec3::new(0.0, 1.0, 0.0))
                .with_rotation(Quat::from_rotation_y(0.4)),
        ),
        BoneDescriptor::new(
            "spine",
            Some(0),
            Transform::IDENTITY
                .with_translation(Vec3::new(0.0, 0.5, 0.1))
                .with_scale(Vec3::splat(1.5)),
        ),
        BoneDescriptor::new(
            "shoulder",
            Some(1),
            Transform::IDENTITY
                .with_translation(Vec3::new(0.3, 0.2, 0.0))
                .with_rotation(Quat::from_rotation_z(-0.8)),
        ),
        BoneDescriptor::new(
            "prop",
            None,
            Transform::IDENTITY.with_translation(Vec3::new(2.0, 0.0, 0.0)),
        ),
    ]
}

#[test]
fn build_links_parents_and_children() {
    let skeleton = Skeleton::build(&arm()).unwrap();

    assert_eq!(skeleton.len(), 4);
    assert_eq!(skeleton.roots().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(skeleton.bones()[0].children(), &[1]);
    assert_eq!(skeleton.bones()[1].children(), &[2]);
    assert_eq!(skeleton.bones()[2].parent(), Some(1));
    assert!(skeleton.bones()[3].children().is_empty());
}

#[test]
fn world_matrices_accumulate_down_the_chain() {
    let descriptors = arm();
    let skeleton = Skeleton::build(&descriptors).unwrap();

    let hips = descriptors[0].transform.to_matrix();
    let spine = hips * descriptors[1].transform.to_matrix();
    let shoulder = spine * descriptors[2].transform.to_matrix();

    assert!(skeleton.bones()[0].world_matrix().abs_diff_eq(hips, 1e-6));
    assert!(skeleton.bones()[1].world_matrix().abs_diff_eq(spine, 1e-6));
    assert!(skeleton.bones()[2].world_matrix().abs_diff_eq(shoulder, 1e-6));
}

#[test]
fn bind_pose_offsets_are_identity() {
    let skeleton = Skeleton::build(&arm()).unwrap();

    for index in 0..skeleton.len() {
        let offset = skeleton.offset_matrix(index).unwrap();
        assert!(offset.abs_diff_eq(Mat4::IDENTITY, 1e-5), "bone {index}: {offset:?}");
    }
}

#[test]
fn child_before_parent_is_rejected() {
    let descriptors = vec![
        BoneDescriptor::new("child", Some(1), Transform::IDENTITY),
        BoneDescriptor::new("parent", None, Transform::IDENTITY),
    ];
    assert!(matches!(
        Skeleton::build(&descriptors),
        Err(AwsmSkeletonError::ParentOutOfOrder { bone: 0, parent: 1 })
    ));
}

#[test]
fn self_parent_is_rejected() {
    let descriptors = vec![BoneDescriptor::new("loop", Some(0), Transform::IDENTITY)];
    assert!(matches!(
        Skeleton::build(&descriptors),
        Err(AwsmSkeletonError::ParentOutOfOrder { bone: 0, parent: 0 })
    ));
}

#[test]
fn missing_parent_is_rejected() {
    let descriptors = vec![
        BoneDescriptor::new("root", None, Transform::IDENTITY),
        BoneDescriptor::new("orphan", Some(7), Transform::IDENTITY),
    ];
    assert!(matches!(
        Skeleton::build(&descriptors),
        Err(AwsmSkeletonError::ParentOutOfRange {
            bone: 1,
            parent: 7,
            len: 2
        })
    ));
}

#[test]
fn negative_parent_index_is_a_root() {
    let descriptor = BoneDescriptor::from_parent_index("root", -1, Transform::IDENTITY);
    assert_eq!(descriptor.parent, None);
    let descriptor = BoneDescriptor::from_parent_index("child", 3, Transform::IDENTITY);
    assert_eq!(descriptor.parent, Some(3));
}

#[test]
fn lookup_by_name() {
    let skeleton = Skeleton::build(&arm()).unwrap();

    assert_eq!(skeleton.bone_index_by_name("shoulder"), Some(2));
    assert_eq!(skeleton.bone_by_name("spine").map(|bone| bone.name()), Some("spine"));
    assert!(skeleton.bone_by_name("tail").is_none());
    assert!(matches!(skeleton.bone(9), Err(AwsmSkeletonError::BoneNotFound(9))));
}

#[test]
fn moving_a_parent_moves_its_children() {
    let mut skeleton = Skeleton::build(&arm()).unwrap();
    let before = *skeleton.bones()[2].world_matrix();

    skeleton.bone_mut(0).unwrap().local.translation += Vec3::new(0.0, 0.0, 5.0);
    skeleton.update_world();

    let after = *skeleton.bones()[2].world_matrix();
    let moved = after.w_axis.truncate() - before.w_axis.truncate();
    assert!(moved.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));

    // the unrelated root stays put
    assert!(skeleton.offset_matrix(3).unwrap().abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn reset_to_bind_pose_restores_identity_offsets() {
    let mut skeleton = Skeleton::build(&arm()).unwrap();

    skeleton.bone_mut(1).unwrap().local.rotation.set_x(1.2);
    skeleton.update_world();
    assert!(!skeleton.offset_matrix(1).unwrap().abs_diff_eq(Mat4::IDENTITY, 1e-3));

    skeleton.reset_to_bind_pose();
    for index in 0..skeleton.len() {
        assert!(skeleton.offset_matrix(index).unwrap().abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }
}

#[test]
fn singular_bind_matrix_falls_back_to_identity_inverse() {
    let descriptors = vec![BoneDescriptor::new(
        "flat",
        None,
        Transform::IDENTITY.with_scale(Vec3::new(1.0, 0.0, 1.0)),
    )];
    let skeleton = Skeleton::build(&descriptors).unwrap();
    assert_eq!(skeleton.bone_inverses()[0], Mat4::IDENTITY);
}

#[test]
fn empty_skeleton_builds() {
    let skeleton = Skeleton::build(&[]).unwrap();
    assert!(skeleton.is_empty());
    assert!(skeleton.bone_inverses().is_empty());
}

#[test]
fn world_matrix_decomposes_back_into_a_transform() {
    let descriptors = arm();
    let skeleton = Skeleton::build(&descriptors).unwrap();

    // hips is a root, its world matrix is its local transform
    let hips = Transform::from_matrix(*skeleton.bones()[0].world_matrix());
    let expected = &descriptors[0].transform;
    assert!(hips.translation.abs_diff_eq(expected.translation, 1e-5));
    assert!(hips.scale.abs_diff_eq(expected.scale, 1e-5));
    assert!(hips.rotation.quaternion().dot(expected.rotation.quaternion()).abs() > 1.0 - 1e-5);

    let spine_world = *skeleton.bones()[1].world_matrix();
    let spine = Transform::from_matrix(spine_world);
    assert!(spine.scale.abs_diff_eq(Vec3::splat(1.5), 1e-5));
    assert!(spine.to_matrix().abs_diff_eq(spine_world, 1e-5));
}
