/// Generated-artifact surface
///
/// Everything the user sees of generation output: the types directory as a
/// tree, selective writing of generated declarations, and the request
/// helper files offered for preview.

pub mod request;
pub mod tree;
pub mod writer;
