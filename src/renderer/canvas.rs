use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};

use super::transform::Transform;
use crate::error::Result;
use crate::projection::{segments, Masked};

/// Blend `frac` of `a` into `b`; `frac` is clamped to `[0, 1]`.
pub fn mix(a: Rgb<u8>, b: Rgb<u8>, frac: f64) -> Rgb<u8> {
    let frac = frac.clamp(0.0, 1.0);
    let channel = |i: usize| (a[i] as f64 * frac + b[i] as f64 * (1.0 - frac)).round() as u8;
    Rgb([channel(0), channel(1), channel(2)])
}

/// Raster target taking world-space geometry.
pub struct Canvas {
    image: RgbImage,
    transform: Transform,
}

impl Canvas {
    pub fn new(width: u32, height: u32, world_lower: DVec2, world_upper: DVec2, background: Rgb<u8>) -> Self {
        let transform = Transform::new(
            world_lower,
            world_upper,
            DVec2::new(0.0, height as f64),
            DVec2::new(width as f64, 0.0),
        );
        Self {
            image: RgbImage::from_pixel(width, height, background),
            transform,
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    fn plot(&mut self, x: i64, y: i64, colour: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
            self.image.put_pixel(x as u32, y as u32, colour);
        }
    }

    fn dot(&mut self, centre: DVec2, radius: f64, colour: Rgb<u8>) {
        let reach = radius.ceil() as i64;
        let (cx, cy) = (centre.x.round() as i64, centre.y.round() as i64);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.plot(cx + dx, cy + dy, colour);
                }
            }
        }
    }

    /// Straight segment between two world points, `width` in pixels.
    pub fn line(&mut self, start: DVec2, end: DVec2, colour: Rgb<u8>, width: f64) {
        let a = self.transform.world_to_screen(start);
        let b = self.transform.world_to_screen(end);
        let steps = (b - a).abs().max_element().ceil().max(1.0) as usize;
        // cap runaway segments from points projected far off screen
        let steps = steps.min(4 * (self.image.width() + self.image.height()) as usize);
        for i in 0..=steps {
            let p = a.lerp(b, i as f64 / steps as f64);
            self.dot(p, (width - 1.0).max(0.0) / 2.0, colour);
        }
    }

    /// Draw every valid segment of a projected polyline.
    pub fn polyline(&mut self, points: &[Masked], colour: Rgb<u8>, width: f64) {
        for (start, end) in segments(points) {
            self.line(start, end, colour, width);
        }
    }

    /// Filled disc, radius in world units.
    pub fn disc(&mut self, centre: DVec2, radius: f64, colour: Rgb<u8>) {
        let centre = self.transform.world_to_screen(centre);
        let radius = self.transform.world_length(radius);
        self.dot(centre, radius, colour);
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn canvas() -> Canvas {
        Canvas::new(20, 20, DVec2::splat(-10.0), DVec2::splat(10.0), BLACK)
    }

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(WHITE, BLACK, 1.0), WHITE);
        assert_eq!(mix(WHITE, BLACK, 0.0), BLACK);
        assert_eq!(mix(WHITE, BLACK, 2.0), WHITE);
        assert_eq!(mix(Rgb([200, 100, 0]), BLACK, 0.5), Rgb([100, 50, 0]));
    }

    #[test]
    fn line_is_drawn_upright() {
        let mut c = canvas();
        c.line(DVec2::new(-5.0, 5.0), DVec2::new(5.0, 5.0), WHITE, 1.0);
        // world y = 5 is pixel row 5 from the top
        assert_eq!(*c.image().get_pixel(10, 5), WHITE);
        assert_eq!(*c.image().get_pixel(10, 15), BLACK);
    }

    #[test]
    fn invalid_segments_not_drawn() {
        let mut c = canvas();
        let line = [
            Masked::Valid(DVec2::new(-5.0, 0.0)),
            Masked::Invalid,
            Masked::Valid(DVec2::new(5.0, 0.0)),
        ];
        c.polyline(&line, WHITE, 1.0);
        assert!(c.image().pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn disc_fills_centre() {
        let mut c = canvas();
        c.disc(DVec2::ZERO, 2.0, WHITE);
        assert_eq!(*c.image().get_pixel(10, 10), WHITE);
        assert_eq!(*c.image().get_pixel(0, 0), BLACK);
    }
}
