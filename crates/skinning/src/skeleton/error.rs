use thiserror::Error;

pub type Result<T> = std::result::Result<T, AwsmSkeletonError>;

#[derive(Error, Debug)]
pub enum AwsmSkeletonError {
    #[error("[skeleton] bone {bone} has parent {parent} but only {len} bones exist")]
    ParentOutOfRange {
        bone: usize,
        parent: usize,
        len: usize,
    },

    #[error("[skeleton] bone {bone} comes before its parent {parent}")]
    ParentOutOfOrder { bone: usize, parent: usize },

    #[error("[skeleton] bone not found: {0}")]
    BoneNotFound(usize),
}
