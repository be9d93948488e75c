// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Remote feeds
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_week.geojson";
pub const TECTONIC_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

// Tile providers
pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
pub const DARK_TILE_URL: &str =
    "https://cartodb-basemaps-{s}.global.ssl.fastly.net/dark_all/{z}/{x}/{y}.png";
pub const DARK_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors, CartoDB";

// Marker styling - radius grows linearly with magnitude, no upper cap
pub const MAGNITUDE_RADIUS_FACTOR: f64 = 3.0;

// Depth bands (km). Band starts, ascending; the last band is open-ended.
// The palette runs light (shallow) to dark (deep) and is indexed from the
// deepest band down, mirroring the threshold chain in depth::depth_color.
pub const DEPTH_BAND_STARTS: [f64; 6] = [0.0, 10.0, 30.0, 50.0, 70.0, 90.0];
pub const DEPTH_COLOR_DEEPEST: &str = "#800026"; // > 90 km
pub const DEPTH_COLOR_DEEP: &str = "#BD0026"; // 70-90 km
pub const DEPTH_COLOR_MIDDEEP: &str = "#E31A1C"; // 50-70 km
pub const DEPTH_COLOR_MID: &str = "#FC4E2A"; // 30-50 km
pub const DEPTH_COLOR_SHALLOW: &str = "#FD8D3C"; // 10-30 km
pub const DEPTH_COLOR_SHALLOWEST: &str = "#FEB24C"; // <= 10 km
