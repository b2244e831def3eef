use glam::Vec2;

/// Geometry of an obstacle, centered on its position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box given by its full extents
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl Shape {
    /// Radius of the smallest centered circle containing the shape
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Rectangle { width, height } => 0.5 * (width * width + height * height).sqrt(),
            Shape::Circle { radius } => radius,
        }
    }
}

/// A static occluder in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Stable id, unique within a scene
    pub id: u32,
    /// Center position in world coordinates
    pub position: Vec2,
    pub shape: Shape,
}

impl Obstacle {
    /// Create a new obstacle
    pub fn new(id: u32, position: Vec2, shape: Shape) -> Self {
        Obstacle {
            id,
            position,
            shape,
        }
    }

    /// Cheap upper bound on the distance from `origin` to the farthest point
    /// of this obstacle: Manhattan distance to the center plus the bounding
    /// radius. Used as a sort key only, never to drop an obstacle.
    pub fn approx_distance(&self, origin: Vec2) -> f32 {
        let diff = self.position - origin;
        diff.x.abs() + diff.y.abs() + self.shape.bounding_radius()
    }

    /// Whether any point of the obstacle can lie within `range` of `origin`.
    /// Conservative: may keep an unreachable obstacle, never drops a
    /// reachable one.
    pub fn within_range(&self, origin: Vec2, range: f32) -> bool {
        let reach = range + self.shape.bounding_radius();
        self.position.distance_squared(origin) <= reach * reach
    }
}
