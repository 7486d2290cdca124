//! Vein membership and richness from the toggle noise.

use lode_utils::math::clamped_map;

use super::VeinDefinition;

/// Decide whether a cell is part of the vein and, if so, its ore chance.
///
/// The vertical gate uses the vein origin, not the cell: a vein whose origin
/// sits outside `[min_y, max_y]` places nothing anywhere. Near the band
/// edges the roundoff penalty shaves the effective toggle strength so veins
/// taper off instead of ending in a flat wall.
pub fn evaluate(definition: &VeinDefinition, origin_y: i32, toggle: f64) -> Option<f64> {
    let below = origin_y - definition.min_y;
    let above = definition.max_y - origin_y;
    if below < 0 || above < 0 {
        return None;
    }

    let edge_roundoff = clamped_map(
        f64::from(below.min(above)),
        0.0,
        f64::from(definition.edge_roundoff_begin),
        -definition.max_edge_roundoff,
        0.0,
    );

    let strength = toggle.abs();
    if strength + edge_roundoff < f64::from(definition.veininess_threshold) {
        return None;
    }

    Some(clamped_map(
        strength,
        f64::from(definition.veininess_threshold),
        f64::from(definition.max_richness_threshold),
        f64::from(definition.min_richness),
        f64::from(definition.max_richness),
    ))
}
