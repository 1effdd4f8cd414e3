use bevy::prelude::*;
use nalgebra::Vector3;

use crate::utils::{FEET_TO_METERS, TDZ_OFFSET_FT};

fn to_scene(v: &Vector3<f64>) -> Vec3 {
    let m = v * FEET_TO_METERS;
    Vec3::new(m.x as f32, m.y as f32, m.z as f32)
}

/// Pilot eye point on the extended centreline, looking at the touchdown zone.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CockpitView {
    /// Scene feet
    pub eye_ft: Vector3<f64>,
    pub look_at_ft: Vector3<f64>,
}

impl Default for CockpitView {
    fn default() -> Self {
        Self {
            eye_ft: Vector3::zeros(),
            look_at_ft: Vector3::new(0.0, 0.0, TDZ_OFFSET_FT),
        }
    }
}

impl CockpitView {
    /// `position_ft` is the longitudinal scene position, negative before the threshold.
    pub fn update(&mut self, altitude_ft: f64, position_ft: f64) {
        self.eye_ft = Vector3::new(0.0, altitude_ft, position_ft);
    }

    /// Camera transform in scene metres.
    pub fn transform(&self) -> Transform {
        let eye = to_scene(&self.eye_ft);
        let target = to_scene(&self.look_at_ft);
        if eye.abs_diff_eq(target, 1e-3) {
            return Transform::from_translation(eye);
        }
        Transform::from_translation(eye).looking_at(target, Vec3::Y)
    }

    /// Pitch of the line of sight to the touchdown zone [deg], negative looking down.
    pub fn sight_line_deg(&self) -> f64 {
        let d = self.look_at_ft - self.eye_ft;
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();
        d.y.atan2(horizontal).to_degrees()
    }
}
