use nalgebra::Vector3;

use super::{FixtureSet, LightColor, LightFixture, LightRole, LightingSystemType, SystemConfig};
use crate::utils::{ELEVATED_LIGHT_HEIGHT_FT, RUNWAY_WIDTH_FT, THRESHOLD_BAR_EXTENSION_FT};

/// Lateral layout of a crossbar's side barrettes.
#[derive(Debug, Clone, Copy)]
pub struct SideBarrettes {
    pub lights: usize,
    pub spacing_ft: f64,
    /// Distance from the centreline to the innermost light
    pub inner_offset_ft: f64,
}

impl SideBarrettes {
    fn center_offset_ft(&self) -> f64 {
        self.inner_offset_ft + (self.lights.saturating_sub(1)) as f64 * self.spacing_ft / 2.0
    }
}

/// Accumulates fixtures and flasher groups for one layout.
pub struct LayoutBuilder {
    owner: Option<LightingSystemType>,
    fixtures: Vec<LightFixture>,
    flasher_groups: Vec<Vec<usize>>,
}

impl LayoutBuilder {
    pub fn new(owner: Option<LightingSystemType>) -> Self {
        Self {
            owner,
            fixtures: Vec::new(),
            flasher_groups: Vec::new(),
        }
    }

    /// Lights added from here on belong to `owner`.
    pub fn set_owner(&mut self, owner: Option<LightingSystemType>) {
        self.owner = owner;
    }

    pub fn light(
        &mut self,
        group: &str,
        position: Vector3<f64>,
        color: LightColor,
        role: LightRole,
    ) -> usize {
        let prefix = self.owner.map(|o| o.tag()).unwrap_or("RWY");
        let ordinal = self.fixtures.iter().filter(|f| f.group == group).count();
        self.fixtures.push(LightFixture {
            name: format!("{}/{}/{}", prefix, group, ordinal),
            group: group.to_string(),
            position,
            color,
            role,
            system: self.owner,
        });
        self.fixtures.len() - 1
    }

    /// `count` lights evenly spaced across `center_x` at a station before the threshold.
    pub fn barrette(
        &mut self,
        group: &str,
        station_ft: f64,
        center_x: f64,
        count: usize,
        spacing_ft: f64,
        color: LightColor,
    ) -> Vec<usize> {
        let half_span = (count.saturating_sub(1)) as f64 * spacing_ft / 2.0;
        (0..count)
            .map(|i| {
                let x = center_x - half_span + i as f64 * spacing_ft;
                self.light(
                    group,
                    Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, -station_ft),
                    color,
                    LightRole::Steady,
                )
            })
            .collect()
    }

    /// Centreline barrette flanked by a side barrette on each side.
    pub fn crossbar(
        &mut self,
        station_ft: f64,
        center_lights: usize,
        center_spacing_ft: f64,
        sides: SideBarrettes,
    ) {
        let group = format!("crossbar-{}", station_ft);
        self.barrette(&group, station_ft, 0.0, center_lights, center_spacing_ft, LightColor::White);
        let offset = sides.center_offset_ft();
        for side in [-1.0, 1.0] {
            self.barrette(
                &group,
                station_ft,
                side * offset,
                sides.lights,
                sides.spacing_ft,
                LightColor::White,
            );
        }
    }

    /// A pair of red barrettes mirrored about the centreline.
    pub fn red_bar_pair(&mut self, group: &str, station_ft: f64, sides: SideBarrettes) {
        let offset = sides.center_offset_ft();
        for side in [-1.0, 1.0] {
            self.barrette(
                group,
                station_ft,
                side * offset,
                sides.lights,
                sides.spacing_ft,
                LightColor::Red,
            );
        }
    }

    /// Green bar across the threshold, wider than the runway by the standard extension.
    pub fn threshold_bar(&mut self, spacing_ft: f64) {
        let half_span = (RUNWAY_WIDTH_FT + THRESHOLD_BAR_EXTENSION_FT) / 2.0;
        let count = (2.0 * half_span / spacing_ft).round() as usize + 1;
        for i in 0..count {
            let x = -half_span + i as f64 * spacing_ft;
            self.light(
                "threshold-bar",
                Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, 0.0),
                LightColor::Green,
                LightRole::ThresholdBar,
            );
        }
    }

    /// A sequenced flasher forming its own rabbit step.
    pub fn flasher(&mut self, station_ft: f64, x: f64) -> usize {
        let index = self.light(
            &format!("flasher-{}", station_ft),
            Vector3::new(x, ELEVATED_LIGHT_HEIGHT_FT, -station_ft),
            LightColor::Strobe,
            LightRole::SequencedFlasher,
        );
        self.flasher_groups.push(vec![index]);
        index
    }

    /// Registers lights that fire together as one rabbit step.
    pub fn flasher_group(&mut self, indices: Vec<usize>) {
        if !indices.is_empty() {
            self.flasher_groups.push(indices);
        }
    }

    pub fn finish(self, system: LightingSystemType, config: SystemConfig) -> FixtureSet {
        FixtureSet::new(system, config, self.fixtures, self.flasher_groups)
    }
}

/// Stations from `first` to `last` inclusive every `step` feet.
pub fn stations(first: u32, last: u32, step: u32) -> impl Iterator<Item = f64> {
    (first..=last).step_by(step as usize).map(f64::from)
}
