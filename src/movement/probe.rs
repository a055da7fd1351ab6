//! Movement domain: ground probes and contact enumeration.
//!
//! Regimes only see the [`GroundQuery`] trait and a [`ContactSet`]; the avian2d
//! bindings at the bottom of this file are what the fixed-step systems hand
//! them at runtime.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Ground probes have no practical range limit.
pub const UNBOUNDED: f32 = f32::MAX;

/// Result of a single ray cast against ground geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlopeSample {
    pub hit: bool,
    pub normal: Vec2,
    pub distance: f32,
}

impl SlopeSample {
    pub const MISS: Self = Self {
        hit: false,
        normal: Vec2::ZERO,
        distance: 0.0,
    };

    pub fn hit(normal: Vec2, distance: f32) -> Self {
        Self {
            hit: true,
            normal,
            distance,
        }
    }

    /// Unit surface normal, or `None` when nothing usable was hit.
    pub fn surface_normal(&self) -> Option<Vec2> {
        if !self.hit {
            return None;
        }
        self.normal.try_normalize()
    }
}

pub trait GroundQuery {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> SlopeSample;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub point: Vec2,
    /// Points from the touched surface into the body
    pub normal: Vec2,
}

/// Contacts between the body and the world for the current physics step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSet {
    points: Vec<ContactPoint>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: ContactPoint) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactPoint> {
        self.points.iter()
    }
}

impl FromIterator<ContactPoint> for ContactSet {
    fn from_iter<I: IntoIterator<Item = ContactPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Ground probe backed by avian's spatial query pipeline.
pub struct SpatialGroundQuery<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    body: Entity,
}

impl<'a, 'w, 's> SpatialGroundQuery<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, body: Entity) -> Self {
        Self {
            spatial_query,
            body,
        }
    }
}

impl GroundQuery for SpatialGroundQuery<'_, '_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> SlopeSample {
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.body]);

        match self
            .spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
        {
            Some(hit) => SlopeSample::hit(hit.normal, hit.distance),
            None => SlopeSample::MISS,
        }
    }
}

/// Collect the touching, non-sensor contacts of `body` from avian's contact graph.
pub fn gather_contacts(
    collisions: &Collisions,
    sensors: &Query<(), With<Sensor>>,
    body: Entity,
) -> ContactSet {
    let mut contacts = ContactSet::new();

    for pair in collisions.collisions_with(body) {
        if !pair.is_touching() {
            continue;
        }

        let (other, flip) = if pair.collider1 == body {
            (pair.collider2, true)
        } else {
            (pair.collider1, false)
        };
        if sensors.contains(other) {
            continue;
        }

        // Manifold normals point from collider1 towards collider2.
        for manifold in &pair.manifolds {
            let normal = if flip {
                -manifold.normal
            } else {
                manifold.normal
            };
            for point in manifold.points.iter() {
                contacts.push(ContactPoint {
                    point: point.point,
                    normal,
                });
            }
        }
    }

    contacts
}
