use crate::math::*;

/// Image height for a given width and aspect ratio, floored and at least 1.
pub fn image_height(width: usize, aspect_ratio: f64) -> usize {
    ((width as f64 / aspect_ratio) as usize).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    pub origin: Point3,
    pub focal_length: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    // pixel (0, 0) center, half a pixel in from the viewport's upper left corner
    pub pixel00: Point3,
    pub pixel_delta_u: Vec3,
    pub pixel_delta_v: Vec3,
    pub width: usize,
    pub height: usize,
}

impl PinholeCamera {
    /// The viewport lies `focal_length` down -z from `origin`, with u pointing
    /// along +x and v pointing down along -y.
    pub fn new(
        origin: Point3,
        focal_length: f64,
        viewport_height: f64,
        width: usize,
        height: usize,
    ) -> PinholeCamera {
        debug_assert!(width > 0 && height > 0);
        // uses the realized image ratio rather than the requested one, since height was floored
        let viewport_width = viewport_height * (width as f64 / height as f64);

        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / width as f64;
        let pixel_delta_v = viewport_v / height as f64;

        let viewport_upper_left =
            origin - Vec3::new(0.0, 0.0, focal_length) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00 = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        info!(
            "camera at {:?}, viewport {}x{}, focal length {}",
            origin, viewport_width, viewport_height, focal_length
        );

        PinholeCamera {
            origin,
            focal_length,
            viewport_height,
            viewport_width,
            pixel00,
            pixel_delta_u,
            pixel_delta_v,
            width,
            height,
        }
    }

    pub fn with_aspect_ratio(
        origin: Point3,
        focal_length: f64,
        viewport_height: f64,
        width: usize,
        aspect_ratio: f64,
    ) -> PinholeCamera {
        let height = image_height(width, aspect_ratio);
        PinholeCamera::new(origin, focal_length, viewport_height, width, height)
    }

    pub fn pixel_center(&self, i: usize, j: usize) -> Point3 {
        self.pixel00 + (i as f64 * self.pixel_delta_u) + (j as f64 * self.pixel_delta_v)
    }

    // direction is left unnormalized
    pub fn get_ray(&self, i: usize, j: usize) -> Ray {
        let ray_direction = self.pixel_center(i, j) - self.origin;
        debug_assert!(ray_direction.is_finite());
        Ray::new(self.origin, ray_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_camera() -> PinholeCamera {
        PinholeCamera::with_aspect_ratio(Point3::ORIGIN, 1.0, 2.0, 400, 16.0 / 9.0)
    }

    #[test]
    fn test_image_height() {
        assert_eq!(image_height(400, 16.0 / 9.0), 225);
        assert_eq!(image_height(256, 1.0), 256);
        // never collapses to zero rows
        assert_eq!(image_height(1, 16.0 / 9.0), 1);
        assert_eq!(image_height(10, 100.0), 1);
    }

    #[test]
    fn test_viewport_geometry() {
        let camera = reference_camera();
        assert_eq!((camera.width, camera.height), (400, 225));
        assert!((camera.viewport_width - 2.0 * 400.0 / 225.0).abs() < 1e-12);
        assert!((camera.pixel_delta_u.x - camera.viewport_width / 400.0).abs() < 1e-12);
        assert!((camera.pixel_delta_v.y + 2.0 / 225.0).abs() < 1e-12);

        // pixel 00 is half a pixel in from the upper left corner
        let upper_left = Point3::new(-camera.viewport_width / 2.0, 1.0, -1.0);
        let offset = camera.pixel00 - upper_left;
        assert!((offset - 0.5 * (camera.pixel_delta_u + camera.pixel_delta_v)).norm() < 1e-12);
    }

    #[test]
    fn test_rays_cover_viewport_symmetrically() {
        let camera = reference_camera();
        let first = camera.get_ray(0, 0);
        let last = camera.get_ray(camera.width - 1, camera.height - 1);
        assert_eq!(first.origin, Point3::ORIGIN);
        assert!((first.direction + last.direction - Vec3::new(0.0, 0.0, -2.0)).norm() < 1e-12);
        assert!(first.direction.x < 0.0 && first.direction.y > 0.0);
        assert!((first.direction.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_offset_camera() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let camera = PinholeCamera::new(origin, 2.0, 2.0, 2, 2);
        let r = camera.get_ray(0, 0);
        assert_eq!(r.origin, origin);
        assert!((r.direction - Vec3::new(-0.5, 0.5, -2.0)).norm() < 1e-12);
    }
}
