use axum::response::Html;

use crate::constants::{
    DARK_TILE_ATTRIBUTION, DARK_TILE_URL, STREET_TILE_ATTRIBUTION, STREET_TILE_URL,
};

/// Renders the map page with the tile provider constants substituted in,
/// so the template never carries a second copy of a URL.
pub fn get_map_html() -> Html<String> {
    let html = MAP_HTML
        .replace("__STREET_TILE_URL__", STREET_TILE_URL)
        .replace("__STREET_TILE_ATTRIBUTION__", STREET_TILE_ATTRIBUTION)
        .replace("__DARK_TILE_URL__", DARK_TILE_URL)
        .replace("__DARK_TILE_ATTRIBUTION__", DARK_TILE_ATTRIBUTION);
    Html(html)
}

// HTML template for the map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QuakeMap - Significant Earthquakes</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>
        body { margin: 0; padding: 0; font-family: Arial, sans-serif; }
        #map { height: 100vh; width: 100%; }
        .info {
            padding: 6px 8px;
            font: 14px/16px Arial, Helvetica, sans-serif;
            background: white;
            background: rgba(255,255,255,0.9);
            box-shadow: 0 0 15px rgba(0,0,0,0.2);
            border-radius: 5px;
        }
        .info h4 {
            margin: 0 0 5px;
            color: #777;
        }
        .legend i {
            width: 18px;
            height: 18px;
            float: left;
            margin-right: 8px;
            opacity: 0.8;
        }
        #notices {
            position: absolute;
            top: 10px;
            left: 50%;
            transform: translateX(-50%);
            z-index: 1100;
        }
        .notice {
            background: #b33;
            color: white;
            padding: 8px 14px;
            margin-bottom: 6px;
            border-radius: 5px;
            box-shadow: 0 0 10px rgba(0,0,0,0.3);
            font-size: 14px;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div id="map"></div>
    <div id="notices"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        // Initialize map with a world view
        const map = L.map('map').setView([0, 0], 2);

        // Base maps
        const streetMap = L.tileLayer('__STREET_TILE_URL__', {
            attribution: '__STREET_TILE_ATTRIBUTION__'
        });
        const darkMap = L.tileLayer('__DARK_TILE_URL__', {
            attribution: '__DARK_TILE_ATTRIBUTION__'
        });

        // Overlay layer groups, populated once the API calls resolve
        const earthquakeLayer = L.layerGroup();
        const tectonicPlatesLayer = L.layerGroup();

        streetMap.addTo(map);

        const baseMaps = {
            'Street Map': streetMap,
            'Dark Map': darkMap
        };
        const overlayMaps = {
            'Earthquakes': earthquakeLayer,
            'Tectonic Plates': tectonicPlatesLayer
        };

        // The layer control is usable before either feed has arrived;
        // toggling an unpopulated overlay just shows an empty group.
        L.control.layers(baseMaps, overlayMaps).addTo(map);

        function checkResponse(response) {
            if (!response.ok) {
                return response.json()
                    .catch(() => ({}))
                    .then(body => {
                        throw new Error(body.error || ('HTTP ' + response.status));
                    });
            }
            return response.json();
        }

        function showNotice(message) {
            const notice = document.createElement('div');
            notice.className = 'notice';
            notice.textContent = message;
            notice.title = 'Click to dismiss';
            notice.onclick = () => notice.remove();
            document.getElementById('notices').appendChild(notice);
        }

        // Earthquake markers and legend
        fetch('/api/earthquakes')
            .then(checkResponse)
            .then(payload => {
                payload.markers.forEach(m => {
                    L.circleMarker([m.lat, m.lng], {
                        radius: m.radius,
                        color: 'black',
                        weight: 1,
                        fillColor: m.fill_color,
                        fillOpacity: 0.8
                    }).bindPopup(m.popup_html).addTo(earthquakeLayer);
                });

                const legend = L.control({ position: 'bottomright' });
                legend.onAdd = function () {
                    const div = L.DomUtil.create('div', 'info legend');
                    div.innerHTML = '<h4>Depth (km)</h4>' +
                        payload.legend
                            .map(entry => '<i style="background:' + entry.color + '"></i> ' + entry.label)
                            .join('<br>');
                    return div;
                };
                legend.addTo(map);
            })
            .catch(err => showNotice('Earthquake data unavailable: ' + err.message));

        // Tectonic plate boundaries, styled uniformly
        fetch('/api/plates')
            .then(checkResponse)
            .then(data => {
                L.geoJSON(data, {
                    style: {
                        color: 'orange',
                        weight: 2
                    }
                }).addTo(tectonicPlatesLayer);
            })
            .catch(err => showNotice('Tectonic plate data unavailable: ' + err.message));
    </script>
</body>
</html>"#;
