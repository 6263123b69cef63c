use handlebars::Handlebars;
use serde::Serialize;

use super::{cards::ActivityCard, map::DayMap};
use crate::error::Result;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{days}}-day itinerary for {{city}}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  body { font-family: system-ui, sans-serif; background: #121212; color: #eee; margin: 0 auto; max-width: 1200px; padding: 24px; }
  .day { display: grid; grid-template-columns: 1.3fr 1fr; gap: 24px; margin-top: 40px; }
  .card { background: #1e1e1e; border: 1px solid #333; border-radius: 12px; padding: 16px; margin-bottom: 15px; }
  .time { color: #bbb; font-size: 13px; }
  .place { font-size: 17px; font-weight: 600; margin-top: 2px; }
  .place a { color: #4da3ff; text-decoration: none; }
  .description { color: #ccc; margin-top: 5px; }
  .category { color: #00bfff; font-size: 13px; margin-top: 5px; }
  .notes { background: #102a43; border-left: 5px solid #00bfff; color: #e6f1ff; padding: 12px; border-radius: 10px; margin-top: 10px; }
  .map { height: 500px; border-radius: 12px; }
</style>
</head>
<body>
<h1>Your {{days}}-day itinerary for {{city}}</h1>
{{#each day_views}}
<h2>Day {{day}}</h2>
<section class="day">
  <div>
    {{#each cards}}
    <div class="card">
      <div class="time">{{time}}</div>
      <div class="place"><a href="{{maps_url}}" target="_blank" rel="noopener">{{place}}</a></div>
      <div class="description">{{description}}</div>
      {{#if category}}<div class="category">{{category}}</div>{{/if}}
    </div>
    {{/each}}
    {{#if notes}}<div class="notes">{{notes}}</div>{{/if}}
  </div>
  {{#if map_json}}
  <div class="map" id="{{map_id}}" data-map="{{map_json}}"></div>
  {{/if}}
</section>
{{/each}}
<script>
document.querySelectorAll(".map").forEach(function (el) {
  var cfg = JSON.parse(el.dataset.map);
  var map = L.map(el).setView([cfg.center.latitude, cfg.center.longitude], cfg.zoom);
  L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
    attribution: "&copy; OpenStreetMap contributors"
  }).addTo(map);
  cfg.markers.forEach(function (m) {
    var popup = document.createElement("div");
    var title = document.createElement("b");
    title.textContent = m.title;
    popup.appendChild(title);
    popup.appendChild(document.createElement("br"));
    popup.appendChild(document.createTextNode(m.description));
    L.circleMarker([m.lat, m.lon], { color: m.color, radius: 9 })
      .bindPopup(popup, { maxWidth: 250 })
      .bindTooltip(m.title)
      .addTo(map);
  });
});
</script>
</body>
</html>
"##;

/// Everything shown for one day of the rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub day: u32,
    pub cards: Vec<ActivityCard>,
    pub notes: String,
    pub map: Option<DayMap>,
}

#[derive(Serialize)]
struct DayContext<'a> {
    day: u32,
    cards: &'a [ActivityCard],
    notes: &'a str,
    map_id: String,
    map_json: Option<String>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    city: &'a str,
    days: usize,
    day_views: Vec<DayContext<'a>>,
}

/// Render a self-contained HTML page. All text is HTML-escaped by the template engine.
pub fn render_page(city: &str, views: &[DayView]) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("page", PAGE_TEMPLATE)?;

    let day_views = views
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let map_json = view
                .map
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;
            Ok(DayContext {
                day: view.day,
                cards: &view.cards,
                notes: &view.notes,
                map_id: format!("map-{}", idx),
                map_json,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let context = PageContext {
        city,
        days: views.len(),
        day_views,
    };

    Ok(handlebars.render("page", &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::map::{Marker, DEFAULT_CENTER, DEFAULT_ZOOM};

    fn sample_view() -> DayView {
        DayView {
            day: 1,
            cards: vec![ActivityCard {
                time: "09:00 AM".to_string(),
                place: "Gateway of India".to_string(),
                category: "Sightseeing".to_string(),
                description: "<b>Harbour</b> views".to_string(),
                maps_url: "https://www.google.com/maps/search/?api=1&query=x".to_string(),
            }],
            notes: "Weather: Sunny, 30°C".to_string(),
            map: Some(DayMap {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
                markers: vec![Marker {
                    lat: 18.92,
                    lon: 72.83,
                    title: "Gateway of India".to_string(),
                    description: "</script>".to_string(),
                    color: "red",
                }],
            }),
        }
    }

    #[test]
    fn test_page_contains_cards_and_notes() {
        let html = render_page("Mumbai", &[sample_view()]).unwrap();

        assert!(html.contains("Your 1-day itinerary for Mumbai"));
        assert!(html.contains("Day 1"));
        assert!(html.contains("Gateway of India"));
        assert!(html.contains("Weather: Sunny, 30°C"));
        assert!(html.contains("id=\"map-0\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_page("Mumbai", &[sample_view()]).unwrap();
        assert!(!html.contains("<b>Harbour</b>"));
        assert!(html.contains("&lt;b&gt;Harbour&lt;/b&gt;"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_day_without_map() {
        let mut view = sample_view();
        view.map = None;
        let html = render_page("Mumbai", &[view]).unwrap();
        assert!(!html.contains("id=\"map-0\""));
    }
}
