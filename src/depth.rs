use serde::Serialize;

use crate::constants::{
    DEPTH_BAND_STARTS, DEPTH_COLOR_DEEP, DEPTH_COLOR_DEEPEST, DEPTH_COLOR_MID,
    DEPTH_COLOR_MIDDEEP, DEPTH_COLOR_SHALLOW, DEPTH_COLOR_SHALLOWEST,
};

/// Maps a hypocenter depth in kilometers to its band color.
///
/// Total over all of f64: negative depths land in the shallowest band,
/// anything beyond 90 km in the deepest. Marker styling and the legend
/// both go through this function; the thresholds exist nowhere else.
pub fn depth_color(depth_km: f64) -> &'static str {
    match depth_km {
        d if d > 90.0 => DEPTH_COLOR_DEEPEST,
        d if d > 70.0 => DEPTH_COLOR_DEEP,
        d if d > 50.0 => DEPTH_COLOR_MIDDEEP,
        d if d > 30.0 => DEPTH_COLOR_MID,
        d if d > 10.0 => DEPTH_COLOR_SHALLOW,
        _ => DEPTH_COLOR_SHALLOWEST,
    }
}

/// One row of the depth legend.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Builds the legend rows in ascending depth order.
///
/// Each row samples `depth_color` just inside its band (start + 1) so the
/// row color always agrees with the markers in that band. The last band
/// has no upper bound and is labeled "90+".
pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_BAND_STARTS
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let label = match DEPTH_BAND_STARTS.get(i + 1) {
                Some(end) => format!("{}&ndash;{}", start, end),
                None => format!("{}+", start),
            };
            LegendEntry {
                label,
                color: depth_color(start + 1.0),
            }
        })
        .collect()
}
