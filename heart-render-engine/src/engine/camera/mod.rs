//! Fixed perspective camera framing the heart.
pub mod heart_camera;
