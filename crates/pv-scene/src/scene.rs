//! The in-memory scene.

use pv_core::Vec2;
use pv_model::Component;

/// An ordered list of components. Document order is paint order: later
/// components draw on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub components: Vec<Component>,
}

impl Scene {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Grid-space bounding box over component nodes (pipes contribute both
    /// endpoints), or None for an empty scene. Feeds the view auto-fit.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.components.iter().flat_map(|c| {
            std::iter::once(c.position()).chain(c.end_position())
        });
        let first = points.next()?.to_vec2();
        let (min, max) = points.fold((first, first), |(min, max), p| {
            let p = p.to_vec2();
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }
}
