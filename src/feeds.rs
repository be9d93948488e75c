use anyhow::{Context, Result};
use serde::Deserialize;

/// Earthquake feed body: a GeoJSON feature collection. Only the fields the
/// map needs are deserialized; everything else in the feed is ignored.
#[derive(Debug, Deserialize)]
pub struct QuakeCollection {
    #[serde(default)]
    pub features: Vec<QuakeFeature>,
}

#[derive(Debug, Deserialize)]
pub struct QuakeFeature {
    pub properties: QuakeProperties,
    pub geometry: QuakeGeometry,
}

#[derive(Debug, Deserialize)]
pub struct QuakeProperties {
    /// Magnitude is nullable in the live feed for unreviewed events.
    pub mag: Option<f64>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuakeGeometry {
    /// Wire order is [longitude, latitude, depth_km].
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Fetches and decodes the earthquake feature collection.
pub async fn fetch_earthquakes(client: &reqwest::Client, url: &str) -> Result<QuakeCollection> {
    let collection = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting earthquake feed {url}"))?
        .error_for_status()
        .context("earthquake feed returned an error status")?
        .json::<QuakeCollection>()
        .await
        .context("decoding earthquake feed body")?;
    Ok(collection)
}

/// Fetches the tectonic plate boundary collection.
///
/// The body is only validated as JSON and passed through; the page styles
/// the whole collection uniformly, so no fields are picked apart here.
pub async fn fetch_plates(client: &reqwest::Client, url: &str) -> Result<serde_json::Value> {
    let boundaries = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting tectonic plates feed {url}"))?
        .error_for_status()
        .context("tectonic plates feed returned an error status")?
        .json::<serde_json::Value>()
        .await
        .context("decoding tectonic plates feed body")?;
    Ok(boundaries)
}
