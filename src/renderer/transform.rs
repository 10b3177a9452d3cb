use glam::DVec2;

/// Affine map from world coordinates to screen (pixel) coordinates.
///
/// Passing a screen rectangle whose y range runs downwards flips the image so
/// world "up" stays up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub world_lower: DVec2,
    pub world_upper: DVec2,
    pub screen_lower: DVec2,
    pub screen_upper: DVec2,
    scale: DVec2,
    shift: DVec2,
}

impl Transform {
    pub fn new(world_lower: DVec2, world_upper: DVec2, screen_lower: DVec2, screen_upper: DVec2) -> Self {
        let scale = (screen_upper - screen_lower) / (world_upper - world_lower);
        let shift = screen_lower - world_lower * scale;
        Self {
            world_lower,
            world_upper,
            screen_lower,
            screen_upper,
            scale,
            shift,
        }
    }

    pub fn world_extents(&self) -> DVec2 {
        self.world_upper - self.world_lower
    }

    pub fn screen_extents(&self) -> DVec2 {
        self.screen_upper - self.screen_lower
    }

    pub fn world_to_screen(&self, point: DVec2) -> DVec2 {
        point * self.scale + self.shift
    }

    /// Length of a world distance along x, in pixels.
    pub fn world_length(&self, length: f64) -> f64 {
        length * self.scale.x.abs()
    }
}
