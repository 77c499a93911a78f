mod pinhole_camera;

pub use pinhole_camera::{image_height, PinholeCamera};
