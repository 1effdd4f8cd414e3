use bevy::prelude::*;
use std::time::Duration;

use super::{config::ApproachConfiguration, ApproachKind, DiagnosticFlags};
use crate::utils::{
    glidepath_altitude_ft, glidepath_distance_nm, knots_to_nm_per_ms, nautical_miles_to_feet,
    BREAKOUT_LEAD_TIME_S, GLIDESLOPE_DEG, LANDING_HEIGHT_FT, MIN_START_MARGIN_FT, TDZ_OFFSET_FT,
};

/// Distance from the TDZ [NM] at which the animation starts.
///
/// Breakout is placed roughly `BREAKOUT_LEAD_TIME_S` of flight after the
/// start, but the start is never lower than `MIN_START_MARGIN_FT` above the
/// ceiling.
pub fn starting_distance_nm(ceiling_ft: f64, approach_speed_kt: f64) -> f64 {
    let breakout_distance = glidepath_distance_nm(ceiling_ft, GLIDESLOPE_DEG);
    let lead_distance =
        knots_to_nm_per_ms(approach_speed_kt) * BREAKOUT_LEAD_TIME_S * 1000.0;
    let floor_distance = glidepath_distance_nm(ceiling_ft + MIN_START_MARGIN_FT, GLIDESLOPE_DEG);
    (breakout_distance + lead_distance).max(floor_distance)
}

/// Distance from the TDZ [NM] corresponding to the landing height on the
/// nominal glideslope. The animation never goes closer than this.
pub fn min_landing_distance_nm() -> f64 {
    glidepath_distance_nm(LANDING_HEIGHT_FT, GLIDESLOPE_DEG)
}

/// Reported altitude above the TDZ [ft] at `distance_nm`.
///
/// Procedures without vertical guidance level off at the ceiling (MDA) once
/// the glidepath would take them below it, and stay level from there on.
pub fn altitude_at(distance_nm: f64, ceiling_ft: f64, kind: ApproachKind) -> f64 {
    let nominal = glidepath_altitude_ft(distance_nm, GLIDESLOPE_DEG);
    if kind.levels_off_at_minimums() && nominal < ceiling_ft {
        ceiling_ft
    } else {
        nominal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Playing,
    Paused,
    /// Stopped at the landing floor, holding the final distance
    Landed,
}

/// What happened during one call to [`AnimationState::update_position`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionUpdate {
    pub broke_out: bool,
    pub landed: bool,
}

/// Simulated aircraft position along the final approach.
///
/// Timestamps are on the session clock passed in by the caller; distance
/// only advances through `update_position` deltas.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationState {
    is_playing: bool,
    is_paused: bool,
    current_distance_nm: f64,
    has_broken_out: bool,
    start_time: Option<Duration>,
    paused_time: Option<Duration>,
    starting_distance_nm: f64,
    /// (effective ceiling, approach speed) the starting distance was computed for
    start_inputs: (f64, f64),
}

impl AnimationState {
    pub fn new(config: &ApproachConfiguration) -> Self {
        let start_inputs = (config.effective_ceiling_ft(), config.approach_speed_kt());
        let starting_distance_nm = starting_distance_nm(start_inputs.0, start_inputs.1);
        Self {
            is_playing: false,
            is_paused: false,
            current_distance_nm: starting_distance_nm,
            has_broken_out: false,
            start_time: None,
            paused_time: None,
            starting_distance_nm,
            start_inputs,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn has_broken_out(&self) -> bool {
        self.has_broken_out
    }

    pub fn current_distance_nm(&self) -> f64 {
        self.current_distance_nm
    }

    pub fn starting_distance_nm(&self) -> f64 {
        self.starting_distance_nm
    }

    pub fn phase(&self) -> AnimationPhase {
        match (self.is_playing, self.is_paused) {
            (true, true) => AnimationPhase::Paused,
            (true, false) => AnimationPhase::Playing,
            _ if self.current_distance_nm <= min_landing_distance_nm() => AnimationPhase::Landed,
            _ => AnimationPhase::Idle,
        }
    }

    pub fn altitude_ft(&self, config: &ApproachConfiguration) -> f64 {
        altitude_at(
            self.current_distance_nm,
            config.effective_ceiling_ft(),
            config.approach_kind(),
        )
    }

    pub fn is_above_decision_height(&self, config: &ApproachConfiguration) -> bool {
        self.altitude_ft(config) > config.effective_ceiling_ft()
    }

    /// Share of the approach flown, 0 at the start and 100 at the landing floor.
    pub fn progress_percent(&self) -> f64 {
        let span = self.starting_distance_nm - min_landing_distance_nm();
        if span <= 0.0 {
            return 100.0;
        }
        ((self.starting_distance_nm - self.current_distance_nm) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Longitudinal scene position [ft], negative before the threshold.
    pub fn longitudinal_position_ft(&self) -> f64 {
        TDZ_OFFSET_FT - nautical_miles_to_feet(self.current_distance_nm)
    }

    /// Active (unpaused) time since play started.
    pub fn elapsed_active(&self, now: Duration) -> Duration {
        match (self.start_time, self.paused_time) {
            (Some(start), Some(paused)) => paused.saturating_sub(start),
            (Some(start), None) => now.saturating_sub(start),
            _ => Duration::ZERO,
        }
    }

    /// Recomputes the starting distance when the ceiling or speed changed.
    ///
    /// An idle animation parked at the old start follows the new one.
    /// Returns true when the starting distance changed.
    pub fn sync_with_config(&mut self, config: &ApproachConfiguration) -> bool {
        let inputs = (config.effective_ceiling_ft(), config.approach_speed_kt());
        if inputs == self.start_inputs {
            return false;
        }

        let previous = self.starting_distance_nm;
        self.starting_distance_nm = starting_distance_nm(inputs.0, inputs.1);
        self.start_inputs = inputs;

        if !self.is_playing {
            if (self.current_distance_nm - previous).abs() < 1e-9 {
                self.current_distance_nm = self.starting_distance_nm;
            } else {
                self.current_distance_nm = self.current_distance_nm.min(self.starting_distance_nm);
            }
        }
        debug!(
            "Starting distance {:.3} NM -> {:.3} NM",
            previous, self.starting_distance_nm
        );
        true
    }

    /// Starts from the beginning, or resumes a paused approach.
    pub fn play(&mut self, now: Duration, config: &ApproachConfiguration) {
        if !self.is_playing {
            self.reset(config);
            self.is_playing = true;
            self.is_paused = false;
            self.start_time = Some(now);
            info!("Approach started at {:.2} NM", self.current_distance_nm);
        } else if self.is_paused {
            // Shift the start forward by the pause so elapsed time excludes it
            if let (Some(start), Some(paused)) = (self.start_time, self.paused_time) {
                self.start_time = Some(start + now.saturating_sub(paused));
            }
            self.paused_time = None;
            self.is_paused = false;
            info!("Approach resumed at {:.2} NM", self.current_distance_nm);
        }
    }

    pub fn pause(&mut self, now: Duration) {
        if self.is_playing && !self.is_paused {
            self.is_paused = true;
            self.paused_time = Some(now);
            info!("Approach paused at {:.2} NM", self.current_distance_nm);
        }
    }

    /// Clears the transport flags without moving the aircraft.
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.is_paused = false;
        self.start_time = None;
        self.paused_time = None;
    }

    pub fn reset(&mut self, config: &ApproachConfiguration) {
        self.stop();
        self.sync_with_config(config);
        self.current_distance_nm = self.starting_distance_nm;
        self.has_broken_out = false;
    }

    /// Advances the aircraft by `delta_ms` of simulated time.
    pub fn update_position(
        &mut self,
        delta_ms: f64,
        config: &ApproachConfiguration,
        flags: &DiagnosticFlags,
    ) -> PositionUpdate {
        let mut update = PositionUpdate::default();
        if !self.is_playing || self.is_paused {
            return update;
        }
        self.sync_with_config(config);

        let speed_nm_per_ms = knots_to_nm_per_ms(config.approach_speed_kt());
        let travelled = speed_nm_per_ms * delta_ms.max(0.0) * flags.time_multiplier();
        self.current_distance_nm = (self.current_distance_nm - travelled).max(0.0);

        if !self.has_broken_out && self.altitude_ft(config) <= config.effective_ceiling_ft() {
            self.has_broken_out = true;
            update.broke_out = true;
            info!(
                "Broke out of the clouds at {:.0} ft, {:.2} NM",
                self.altitude_ft(config),
                self.current_distance_nm
            );
        }

        let landing_floor = min_landing_distance_nm();
        if self.current_distance_nm <= landing_floor {
            self.current_distance_nm = landing_floor;
            self.stop();
            update.landed = true;
            info!("Landed, approach stopped at {:.3} NM", landing_floor);
        }

        update
    }

    /// Manual scrub. Cancels autoplay and clamps into the flyable range.
    pub fn set_distance(&mut self, distance_nm: f64, config: &ApproachConfiguration) {
        if self.is_playing && !self.is_paused {
            self.stop();
        }
        self.sync_with_config(config);
        let requested = if distance_nm.is_finite() {
            distance_nm
        } else {
            self.current_distance_nm
        };
        self.current_distance_nm =
            requested.clamp(min_landing_distance_nm(), self.starting_distance_nm);
    }
}
