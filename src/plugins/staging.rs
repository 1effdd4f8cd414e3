use bevy::prelude::*;

/// Per-frame ordering of the approach systems.
///
/// Derived quantities read the position advanced earlier in the same frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ApproachSet {
    Input,
    Advance,
    Derive,
    Lighting,
}

pub struct ApproachSequencePlugin;

impl Plugin for ApproachSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ApproachSet::Input,
                ApproachSet::Advance,
                ApproachSet::Derive,
                ApproachSet::Lighting,
            )
                .chain(),
        );
    }
}
