use super::Vec3;

/// (r, g, b), each conceptually in [0, 1] before quantization.
pub type RGBColor = Vec3;

pub const WHITE: RGBColor = Vec3::new(1.0, 1.0, 1.0);
pub const SKY_BLUE: RGBColor = Vec3::new(0.5, 0.7, 1.0);
pub const BLACK: RGBColor = Vec3::new(0.0, 0.0, 0.0);

/// Quantizes one channel to the byte range. does not clamp, out of range
/// inputs produce out of range outputs.
#[inline(always)]
pub fn to_byte(channel: f64) -> i32 {
    (255.999 * channel) as i32
}

pub fn to_bytes(color: RGBColor) -> [i32; 3] {
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Maps a unit normal from [-1, 1] to [0, 1] per channel.
pub fn normal_to_color(normal: Vec3) -> RGBColor {
    0.5 * (normal + Vec3::ONE)
}
