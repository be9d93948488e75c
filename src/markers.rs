use anyhow::{Context, Result};
use serde::Serialize;

use crate::constants::MAGNITUDE_RADIUS_FACTOR;
use crate::depth::depth_color;
use crate::feeds::{QuakeCollection, QuakeFeature};

/// One circle marker, fully derived and ready for the page to draw.
/// Outline and opacity are uniform and live in the page template.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub fill_color: &'static str,
    pub popup_html: String,
}

/// Derives a marker from a single earthquake feature.
///
/// The wire coordinate order is [longitude, latitude, depth], so the pair
/// is swapped for display. A feature without a magnitude or with fewer
/// than three coordinate components cannot be drawn and is rejected.
pub fn marker_from_feature(feature: &QuakeFeature) -> Result<Marker> {
    let coords = &feature.geometry.coordinates;
    let [lng, lat, depth_km] = match coords.as_slice() {
        [lng, lat, depth, ..] => [*lng, *lat, *depth],
        _ => anyhow::bail!("geometry has {} coordinate components, need 3", coords.len()),
    };
    let mag = feature.properties.mag.context("feature has no magnitude")?;
    let title = feature.properties.title.as_deref().unwrap_or("Unknown event");

    Ok(Marker {
        lat,
        lng,
        radius: mag * MAGNITUDE_RADIUS_FACTOR,
        fill_color: depth_color(depth_km),
        popup_html: format!(
            "<b>{}</b><br/>Magnitude: {}<br/>Depth: {} km",
            escape_html(title),
            mag,
            depth_km
        ),
    })
}

/// Derives markers for a whole collection, skipping malformed features.
///
/// Returns the markers and the number of features skipped; one bad record
/// never aborts the rest of the feed.
pub fn build_markers(collection: &QuakeCollection) -> (Vec<Marker>, usize) {
    let mut markers = Vec::with_capacity(collection.features.len());
    let mut skipped = 0;
    for feature in &collection.features {
        match marker_from_feature(feature) {
            Ok(marker) => markers.push(marker),
            Err(e) => {
                skipped += 1;
                tracing::warn!("skipping malformed earthquake feature: {e:#}");
            }
        }
    }
    (markers, skipped)
}

/// Feed titles end up inside popup markup, so angle brackets and
/// ampersands must not pass through verbatim.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(body: &str) -> QuakeCollection {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn derives_radius_color_and_popup() {
        let collection = collection(
            r#"{"features": [{
                "properties": {"mag": 6.5, "title": "Test Quake"},
                "geometry": {"coordinates": [12.5, -34.2, 45]}
            }]}"#,
        );
        let (markers, skipped) = build_markers(&collection);
        assert_eq!(skipped, 0);
        assert_eq!(markers.len(), 1);

        let marker = &markers[0];
        assert_eq!(marker.radius, 19.5);
        assert_eq!(marker.fill_color, depth_color(45.0));
        assert!(marker.popup_html.contains("Test Quake"));
        assert!(marker.popup_html.contains("Magnitude: 6.5"));
        assert!(marker.popup_html.contains("Depth: 45 km"));
    }

    #[test]
    fn reorders_wire_coordinates() {
        let collection = collection(
            r#"{"features": [{
                "properties": {"mag": 5.0, "title": "t"},
                "geometry": {"coordinates": [12.5, -34.2, 10]}
            }]}"#,
        );
        let (markers, _) = build_markers(&collection);
        assert_eq!(markers[0].lat, -34.2);
        assert_eq!(markers[0].lng, 12.5);
    }

    #[test]
    fn radius_is_not_clamped_for_extreme_magnitudes() {
        let collection = collection(
            r#"{"features": [{
                "properties": {"mag": 9.6, "title": "t"},
                "geometry": {"coordinates": [0, 0, 600]}
            }]}"#,
        );
        let (markers, _) = build_markers(&collection);
        assert!((markers[0].radius - 28.8).abs() < 1e-9);
    }

    #[test]
    fn skips_malformed_features_without_aborting() {
        let collection = collection(
            r#"{"features": [
                {"properties": {"mag": null, "title": "no magnitude"},
                 "geometry": {"coordinates": [1, 2, 3]}},
                {"properties": {"mag": 4.0, "title": "short coords"},
                 "geometry": {"coordinates": [1, 2]}},
                {"properties": {"mag": 4.0, "title": "good"},
                 "geometry": {"coordinates": [1, 2, 3]}}
            ]}"#,
        );
        let (markers, skipped) = build_markers(&collection);
        assert_eq!(markers.len(), 1);
        assert_eq!(skipped, 2);
        assert!(markers[0].popup_html.contains("good"));
    }

    #[test]
    fn empty_collection_yields_no_markers() {
        let (markers, skipped) = build_markers(&collection(r#"{"features": []}"#));
        assert!(markers.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn missing_title_falls_back_instead_of_skipping() {
        let collection = collection(
            r#"{"features": [{
                "properties": {"mag": 3.0},
                "geometry": {"coordinates": [1, 2, 3]}
            }]}"#,
        );
        let (markers, skipped) = build_markers(&collection);
        assert_eq!(skipped, 0);
        assert!(markers[0].popup_html.contains("Unknown event"));
    }

    #[test]
    fn escapes_markup_in_titles() {
        let collection = collection(
            r#"{"features": [{
                "properties": {"mag": 3.0, "title": "<script>alert(1)</script> & co"},
                "geometry": {"coordinates": [1, 2, 3]}
            }]}"#,
        );
        let (markers, _) = build_markers(&collection);
        assert!(!markers[0].popup_html.contains("<script>"));
        assert!(markers[0].popup_html.contains("&lt;script&gt;"));
        assert!(markers[0].popup_html.contains("&amp; co"));
    }
}
