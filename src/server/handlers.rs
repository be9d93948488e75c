use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::depth::{legend_entries, LegendEntry};
use crate::feeds::{fetch_earthquakes, fetch_plates};
use crate::html_template::get_map_html;
use crate::markers::{build_markers, Marker};

use super::state::AppState;

/// Everything the page needs to draw the earthquake overlay: the derived
/// markers, the legend rows, and the count of features that were dropped.
#[derive(Debug, Serialize)]
pub struct EarthquakePayload {
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
    pub skipped: usize,
}

/// A total feed failure is never fatal to the page; the handler answers
/// 502 with a JSON body the page turns into a visible notice.
type FeedError = (StatusCode, Json<Value>);

fn feed_error(what: &str, err: anyhow::Error) -> FeedError {
    tracing::error!("{what} feed failed: {err:#}");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": format!("{what} feed failed: {err:#}") })),
    )
}

// HTTP API Handlers

pub async fn index_html() -> Html<String> {
    get_map_html()
}

pub async fn get_earthquakes(
    State(state): State<AppState>,
) -> Result<Json<EarthquakePayload>, FeedError> {
    let collection = fetch_earthquakes(&state.http, &state.feeds.earthquakes)
        .await
        .map_err(|e| feed_error("earthquake", e))?;

    let (markers, skipped) = build_markers(&collection);
    if skipped > 0 {
        tracing::warn!(
            "dropped {skipped} of {} earthquake features",
            collection.features.len()
        );
    }
    tracing::info!("serving {} earthquake markers", markers.len());

    Ok(Json(EarthquakePayload {
        markers,
        legend: legend_entries(),
        skipped,
    }))
}

pub async fn get_plates(State(state): State<AppState>) -> Result<Json<Value>, FeedError> {
    let boundaries = fetch_plates(&state.http, &state.feeds.plates)
        .await
        .map_err(|e| feed_error("tectonic plates", e))?;
    tracing::info!("serving tectonic plate boundaries");
    Ok(Json(boundaries))
}
