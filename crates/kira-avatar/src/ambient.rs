//! The background ambient particle field.
//!
//! Fifty particles scattered once at construction, then gently rotated and
//! bobbed as a group every tick. Placement takes an injected rng; the
//! per-tick motion is a pure function of time.

use kira_types::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of particles in the ambient field.
pub const AMBIENT_PARTICLE_COUNT: usize = 50;

/// Per-tick pose of one ambient particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientPose {
    pub position: Vec3,
    /// Particle spin around the x axis, radians.
    pub rotation_x: f32,
    /// Particle spin around the z axis, radians.
    pub rotation_z: f32,
    pub opacity: f32,
}

/// Per-tick output of the whole field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientFrame {
    /// Group rotation around the y axis, radians.
    pub rotation_y: f32,
    pub particles: Vec<AmbientPose>,
}

/// The ambient particle field surrounding the scene.
#[derive(Debug, Clone)]
pub struct AmbientField {
    // Placement in cylindrical coordinates, fixed after construction.
    placements: Vec<(f32, f32)>, // (radius, angle)
}

impl AmbientField {
    /// Scatters the particles. Radius in `[5, 15)`, angle in `[0, 2π)`.
    pub fn new(rng: &mut impl Rng) -> Self {
        let placements = (0..AMBIENT_PARTICLE_COUNT)
            .map(|_| {
                let radius = 5.0 + rng.gen::<f32>() * 10.0;
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                (radius, angle)
            })
            .collect();
        Self { placements }
    }

    /// Computes the field pose for elapsed time `t`.
    pub fn tick(&self, t: f32, active: bool) -> AmbientFrame {
        let opacity = if active { 0.6 } else { 0.2 };
        let particles = self
            .placements
            .iter()
            .enumerate()
            .map(|(i, &(radius, angle))| {
                let fi = i as f32;
                AmbientPose {
                    position: Vec3::new(
                        angle.cos() * radius,
                        (t + fi).sin() * 0.5,
                        angle.sin() * radius,
                    ),
                    rotation_x: t + fi,
                    rotation_z: t * 0.5 + fi,
                    opacity,
                }
            })
            .collect();

        AmbientFrame {
            rotation_y: t * 0.1,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn field_has_fifty_particles() {
        let mut rng = StdRng::seed_from_u64(9);
        let field = AmbientField::new(&mut rng);
        let frame = field.tick(0.0, false);
        assert_eq!(frame.particles.len(), AMBIENT_PARTICLE_COUNT);
    }

    #[test]
    fn placement_is_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let fa = AmbientField::new(&mut a).tick(1.5, true);
        let fb = AmbientField::new(&mut b).tick(1.5, true);
        assert_eq!(fa, fb);
    }

    #[test]
    fn activity_only_changes_opacity() {
        let mut rng = StdRng::seed_from_u64(2);
        let field = AmbientField::new(&mut rng);
        let quiet = field.tick(3.0, false);
        let active = field.tick(3.0, true);
        for (a, b) in quiet.particles.iter().zip(active.particles.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.opacity, 0.2);
            assert_eq!(b.opacity, 0.6);
        }
    }

    #[test]
    fn group_rotation_tracks_time() {
        let mut rng = StdRng::seed_from_u64(5);
        let field = AmbientField::new(&mut rng);
        assert_eq!(field.tick(10.0, false).rotation_y, 1.0);
    }
}
