use glam::Vec2;

use crate::obstacle::{Obstacle, Shape};

/// Project an obstacle onto the angular range around `origin`
///
/// Returns the two silhouette rays: origin-relative vectors to the
/// angularly extreme boundary points of the shape. None means the shape
/// cannot occlude anything from this origin (the origin is inside it or
/// the geometry is degenerate) and the obstacle contributes no segment.
pub fn project(origin: Vec2, obstacle: &Obstacle) -> Option<(Vec2, Vec2)> {
    match obstacle.shape {
        Shape::Rectangle { width, height } => {
            project_rectangle(origin, obstacle.position, width, height)
        }
        Shape::Circle { radius } => project_circle(origin, obstacle.position, radius),
    }
}

/// Widest-angle pair of corner rays. For a convex shape the pair of
/// boundary points with the largest mutual angle is exactly the silhouette.
fn project_rectangle(origin: Vec2, center: Vec2, width: f32, height: f32) -> Option<(Vec2, Vec2)> {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let rays = [
        center + Vec2::new(-half_w, -half_h) - origin,
        center + Vec2::new(half_w, -half_h) - origin,
        center + Vec2::new(half_w, half_h) - origin,
        center + Vec2::new(-half_w, half_h) - origin,
    ];

    let mut widest: Option<(Vec2, Vec2, f32)> = None;
    for i in 0..rays.len() {
        for j in (i + 1)..rays.len() {
            // a zero-length ray means the origin sits on that corner;
            // pairs anchored there are skipped
            if let Some(angle) = angle_between(rays[i], rays[j]) {
                if widest.map_or(true, |(_, _, best)| angle > best) {
                    widest = Some((rays[i], rays[j], angle));
                }
            }
        }
    }
    widest.map(|(ray_a, ray_b, _)| (ray_a, ray_b))
}

/// Unsigned angle between two rays, None if either has zero length
fn angle_between(ray_a: Vec2, ray_b: Vec2) -> Option<f32> {
    let scale = ray_a.length() * ray_b.length();
    if scale <= f32::EPSILON {
        return None;
    }
    // clamp guards acos against the quotient drifting past 1.0
    Some((ray_a.dot(ray_b) / scale).clamp(-1.0, 1.0).acos())
}

/// Tangent points via the right triangle origin-center-tangent: with
/// h = |origin - center| and tangent length t = sqrt(h^2 - r^2), the
/// tangent points sit at +/-theta around the center->origin direction
/// where cos(theta) = r/h and sin(theta) = t/h. Rotating that direction
/// by the (cos, sin) pair directly avoids any inverse trig.
fn project_circle(origin: Vec2, center: Vec2, radius: f32) -> Option<(Vec2, Vec2)> {
    let to_origin = origin - center;
    let h = to_origin.length();
    if h <= radius {
        return None; // origin inside or on the circle: no silhouette
    }
    let tangent_len = (h * h - radius * radius).sqrt();
    let cos_t = radius / h;
    let sin_t = tangent_len / h;
    let dir = to_origin / h;
    let tangent_a = center + radius * Vec2::new(cos_t, sin_t).rotate(dir);
    let tangent_b = center + radius * Vec2::new(cos_t, -sin_t).rotate(dir);
    Some((tangent_a - origin, tangent_b - origin))
}
