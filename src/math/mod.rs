mod color;
mod ray;
mod vec;

pub use color::{normal_to_color, to_byte, to_bytes, RGBColor, BLACK, SKY_BLUE, WHITE};
pub use ray::Ray;
pub use vec::{dot, unit_vector, Point3, Vec3};
