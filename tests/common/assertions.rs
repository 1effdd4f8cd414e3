use approach::components::{LightColor, LightFixture, LightRole};
use bevy::prelude::*;

/// Assert that the PAPI boxes show `red_count` reds from the left
#[track_caller]
pub fn assert_papi_colors(fixtures: &[LightFixture], red_count: usize) {
    let mut boxes: Vec<(u8, LightColor)> = fixtures
        .iter()
        .filter_map(|f| match f.role {
            LightRole::Papi(slot) => Some((slot, f.color)),
            _ => None,
        })
        .collect();
    boxes.sort_by_key(|(slot, _)| *slot);
    assert_eq!(boxes.len(), 4, "expected four PAPI boxes");

    for (slot, color) in boxes {
        let expected = if (slot as usize) < red_count {
            LightColor::Red
        } else {
            LightColor::White
        };
        assert_eq!(color, expected, "PAPI slot {}", slot);
    }
}

#[track_caller]
pub fn assert_fixture_visible(fixture: &LightFixture, visibility: Visibility, visible: bool) {
    assert_eq!(
        visibility != Visibility::Hidden,
        visible,
        "{} visibility {:?}",
        fixture.name,
        visibility
    );
}
