use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{LightingSystemType, SystemConfig};
use crate::{resources::PapiLightColor, utils::FEET_TO_METERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightColor {
    White,
    Red,
    Green,
    Yellow,
    Strobe,
}

impl From<PapiLightColor> for LightColor {
    fn from(color: PapiLightColor) -> Self {
        match color {
            PapiLightColor::Red => LightColor::Red,
            PapiLightColor::White => LightColor::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightRole {
    Steady,
    SequencedFlasher,
    ThresholdBar,
    /// PAPI box, slot 0 is the leftmost
    Papi(u8),
    Reil,
    Rcls,
}

/// A single light point.
///
/// Positions are in feet relative to the runway threshold on the centreline:
/// x lateral (positive right when facing the runway), y height, z
/// longitudinal (negative on the approach side, positive down the runway).
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightFixture {
    pub name: String,
    pub group: String,
    pub position: Vector3<f64>,
    pub color: LightColor,
    pub role: LightRole,
    /// Approach lighting system the light belongs to; `None` for runway lights
    pub system: Option<LightingSystemType>,
}

impl LightFixture {
    /// Station [ft] measured from the threshold towards the approach.
    pub fn station_ft(&self) -> f64 {
        -self.position.z
    }

    /// Position in metres for the renderer's scene space.
    pub fn translation(&self) -> Vec3 {
        let m = self.position * FEET_TO_METERS;
        Vec3::new(m.x as f32, m.y as f32, m.z as f32)
    }

    /// Part of the rabbit sequence. REIL strobes are not.
    pub fn is_flasher(&self) -> bool {
        self.role == LightRole::SequencedFlasher
    }
}

/// The complete, immutable light layout for one configuration.
///
/// Replaced wholesale whenever the lighting system or a toggle changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    pub system: LightingSystemType,
    pub config: SystemConfig,
    fixtures: Vec<LightFixture>,
    /// Indices into `fixtures`, one group per rabbit step, nearest the
    /// threshold first
    flasher_groups: Vec<Vec<usize>>,
}

impl FixtureSet {
    pub fn new(
        system: LightingSystemType,
        config: SystemConfig,
        fixtures: Vec<LightFixture>,
        flasher_groups: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            system,
            config,
            fixtures,
            flasher_groups,
        }
    }

    pub fn fixtures(&self) -> &[LightFixture] {
        &self.fixtures
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LightFixture> {
        self.fixtures.get(index)
    }

    /// Flasher steps of the rabbit sequence, nearest the threshold first.
    pub fn sequenced_flashers(&self) -> &[Vec<usize>] {
        &self.flasher_groups
    }

    pub fn reil_indices(&self) -> Vec<usize> {
        self.indices_where(|f| f.role == LightRole::Reil)
    }

    /// PAPI boxes ordered by slot.
    pub fn papi_indices(&self) -> Vec<usize> {
        let mut papi: Vec<(u8, usize)> = self
            .fixtures
            .iter()
            .enumerate()
            .filter_map(|(i, f)| match f.role {
                LightRole::Papi(slot) => Some((slot, i)),
                _ => None,
            })
            .collect();
        papi.sort_unstable();
        papi.into_iter().map(|(_, i)| i).collect()
    }

    pub fn at_station(&self, station_ft: f64) -> impl Iterator<Item = &LightFixture> {
        self.fixtures
            .iter()
            .filter(move |f| (f.station_ft() - station_ft).abs() < 1e-6)
    }

    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a LightFixture> + 'a {
        self.fixtures.iter().filter(move |f| f.group == group)
    }

    pub fn with_role(&self, role: LightRole) -> impl Iterator<Item = &LightFixture> {
        self.fixtures.iter().filter(move |f| f.role == role)
    }

    fn indices_where(&self, predicate: impl Fn(&LightFixture) -> bool) -> Vec<usize> {
        self.fixtures
            .iter()
            .enumerate()
            .filter(|(_, f)| predicate(f))
            .map(|(i, _)| i)
            .collect()
    }
}
