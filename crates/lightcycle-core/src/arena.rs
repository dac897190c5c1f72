use crate::Rect;

/// The playfield: four boundary walls plus the score header strip above
/// them. The header height is the absolute difference between the arena
/// height and width, so a 600x660 arena carries a 60-unit header.
#[derive(Debug, Clone)]
pub struct Arena {
    width: f32,
    height: f32,
    header_offset: f32,
    walls: [Rect; 4],
}

impl Arena {
    pub fn new(width: f32, height: f32, wall_thickness: f32) -> Self {
        let header_offset = (height - width).abs();
        // Left and right walls overshoot the bottom edge; the overlap with
        // the bottom wall is harmless and keeps the corners sealed.
        let walls = [
            Rect::new(0.0, header_offset, wall_thickness, height),
            Rect::new(0.0, header_offset, width, wall_thickness),
            Rect::new(width - wall_thickness, header_offset, wall_thickness, height),
            Rect::new(0.0, height - wall_thickness, width, wall_thickness),
        ];
        Self {
            width,
            height,
            header_offset,
            walls,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top edge of the playfield proper; everything above it is the header.
    pub fn header_offset(&self) -> f32 {
        self.header_offset
    }

    /// Left, top, right, bottom.
    pub fn walls(&self) -> &[Rect; 4] {
        &self.walls
    }
}
