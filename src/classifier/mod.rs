// Binary caption classifier — trait-based abstraction plus the local ONNX
// implementation and its model storage/download helpers.

pub mod traits;
pub mod onnx;
pub mod store;
pub mod download;
