use std::rc::Rc;

use leptos::{component, view, IntoView, ReadSignal, RwSignal, SignalGet, SignalWith, View};

use crate::models::{venue_marker, Performance, TimetableData, VenueMarker, VENUE_MARKERS};
use crate::schedule::{day_schedule, stage_visits};
use crate::storage::BrowserSelection;
use crate::walking::{festival_table, route_legs, total_walking_minutes, RouteLeg};

const MAP_WIDTH: f64 = 600.0;
const MAP_HEIGHT: f64 = 420.0;
const MAP_PADDING: f64 = 60.0;
const MARKER_RADIUS: f64 = 14.0;

/// Linear lat/lng to SVG viewport mapping over a bounding box of markers
#[derive(Debug, Clone, Copy, PartialEq)]
struct MapProjection {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl MapProjection {
    fn fit(markers: &[VenueMarker]) -> Self {
        markers.iter().fold(
            Self {
                min_lat: f64::INFINITY,
                max_lat: f64::NEG_INFINITY,
                min_lng: f64::INFINITY,
                max_lng: f64::NEG_INFINITY,
            },
            |b, m| Self {
                min_lat: b.min_lat.min(m.lat),
                max_lat: b.max_lat.max(m.lat),
                min_lng: b.min_lng.min(m.lng),
                max_lng: b.max_lng.max(m.lng),
            },
        )
    }

    /// North is up; a degenerate span collapses to the centre of the viewport
    fn project(&self, lat: f64, lng: f64) -> (f64, f64) {
        let inner_width = MAP_WIDTH - 2.0 * MAP_PADDING;
        let inner_height = MAP_HEIGHT - 2.0 * MAP_PADDING;
        let lng_span = self.max_lng - self.min_lng;
        let lat_span = self.max_lat - self.min_lat;

        let x = if lng_span > 0.0 {
            MAP_PADDING + (lng - self.min_lng) / lng_span * inner_width
        } else {
            MAP_WIDTH / 2.0
        };
        let y = if lat_span > 0.0 {
            MAP_PADDING + (self.max_lat - lat) / lat_span * inner_height
        } else {
            MAP_HEIGHT / 2.0
        };
        (x, y)
    }

    fn project_marker(&self, marker: &VenueMarker) -> (f64, f64) {
        self.project(marker.lat, marker.lng)
    }
}

/// Marker caption listing the visit order, e.g. "1,3"
fn visit_label(positions: &[usize]) -> String {
    positions.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

fn leg_view(leg: &RouteLeg, projection: &MapProjection) -> Option<View> {
    if leg.is_same_stage() {
        return None;
    }
    let (x1, y1) = projection.project_marker(venue_marker(&leg.from_stage)?);
    let (x2, y2) = projection.project_marker(venue_marker(&leg.to_stage)?);
    let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);

    Some(
        view! {
            <g class=format!("route-line {}", leg.difficulty.css_class())>
                <line x1=x1 y1=y1 x2=x2 y2=y2 />
                <text x=mx y=my class="route-minutes">{format!("{} min", leg.minutes)}</text>
            </g>
        }
        .into_view(),
    )
}

fn marker_view(marker: &VenueMarker, projection: &MapProjection, visits: Option<&Vec<usize>>) -> View {
    let (x, y) = projection.project_marker(marker);
    let caption_y = y + MARKER_RADIUS * 2.0;
    let (badge_x, badge_y) = (x + MARKER_RADIUS, y - MARKER_RADIUS);
    let badge_radius = MARKER_RADIUS * 0.8;
    let class = if marker.is_landmark { "venue-marker landmark" } else { "venue-marker" };
    let badge = visits
        .filter(|_| !marker.is_landmark)
        .map(|positions| visit_label(positions));

    view! {
        <g class=class>
            <circle cx=x cy=y r=MARKER_RADIUS fill=marker.color />
            <text x=x y=caption_y class="venue-name">{marker.short_name()}</text>
            {badge.map(|label| view! {
                <g class="visit-badge">
                    <circle cx=badge_x cy=badge_y r=badge_radius />
                    <text x=badge_x y=badge_y>{label}</text>
                </g>
            })}
        </g>
    }
    .into_view()
}

fn route_summary_view(schedule: &[&Performance], legs: &[RouteLeg]) -> View {
    if schedule.is_empty() {
        return view! {
            <div class="empty-state">
                <i class="fa-solid fa-map-location-dot"></i>
                <p>"Pick performances to see your route for this day."</p>
            </div>
        }
        .into_view();
    }

    let total = total_walking_minutes(legs);
    let stops = schedule
        .iter()
        .enumerate()
        .map(|(idx, p)| view! {
            <li>
                <span class="stop-number">{idx + 1}</span>
                " " {p.start_label()} " " {p.artist.clone()} " @ " {p.stage.clone()}
            </li>
        })
        .collect::<Vec<_>>();

    view! {
        <ol class="route-stops">{stops}</ol>
        {(total > 0).then(|| view! {
            <div class="walking-total">{format!("Total walking: {total} min")}</div>
        })}
    }
    .into_view()
}

/// Schematic venue map with the day's route between selected performances
#[component]
#[must_use]
pub fn RouteMap(
    data: Rc<TimetableData>,
    selected_day: ReadSignal<u8>,
    selection: RwSignal<BrowserSelection>,
) -> impl IntoView {
    let projection = MapProjection::fit(&VENUE_MARKERS);

    let content = move || {
        let day = selected_day.get();
        selection.with(|s| {
            let schedule = day_schedule(&data, s.ids(), day);
            let visits = stage_visits(&schedule);
            let legs = route_legs(&schedule, festival_table());

            let lines = legs
                .iter()
                .filter_map(|leg| leg_view(leg, &projection))
                .collect::<Vec<_>>();
            let markers = VENUE_MARKERS
                .iter()
                .map(|marker| marker_view(marker, &projection, visits.get(marker.name)))
                .collect::<Vec<_>>();

            view! {
                <svg class="venue-map" viewBox=format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}")>
                    <g class="route-lines">{lines}</g>
                    <g class="venue-markers">{markers}</g>
                </svg>
                {route_summary_view(&schedule, &legs)}
            }
            .into_view()
        })
    };

    view! {
        <div class="route-map">
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_projection_puts_north_up_and_east_right() {
        let projection = MapProjection::fit(&VENUE_MARKERS);
        let heaven = venue_marker("FIELD OF HEAVEN").map(|m| projection.project_marker(m));
        let red = venue_marker("RED MARQUEE").map(|m| projection.project_marker(m));
        let (Some((hx, hy)), Some((rx, ry))) = (heaven, red) else {
            panic!("both stages have markers");
        };
        // Heaven is the northernmost marker, the marquee the south-westernmost
        assert!(approx(hy, MAP_PADDING));
        assert!(approx(ry, MAP_HEIGHT - MAP_PADDING));
        assert!(approx(rx, MAP_PADDING));
        assert!(hx > rx);
    }

    #[test]
    fn test_every_marker_stays_inside_viewport() {
        let projection = MapProjection::fit(&VENUE_MARKERS);
        for marker in &VENUE_MARKERS {
            let (x, y) = projection.project_marker(marker);
            assert!(x > MAP_PADDING - 1e-6 && x < MAP_WIDTH - MAP_PADDING + 1e-6, "{} x={x}", marker.name);
            assert!(y > MAP_PADDING - 1e-6 && y < MAP_HEIGHT - MAP_PADDING + 1e-6, "{} y={y}", marker.name);
        }
    }

    #[test]
    fn test_single_marker_is_centred() {
        let projection = MapProjection::fit(&VENUE_MARKERS[..1]);
        let (x, y) = projection.project_marker(&VENUE_MARKERS[0]);
        assert!(approx(x, MAP_WIDTH / 2.0));
        assert!(approx(y, MAP_HEIGHT / 2.0));
    }

    #[test]
    fn test_visit_label_joins_positions() {
        assert_eq!(visit_label(&[1, 3]), "1,3");
        assert_eq!(visit_label(&[2]), "2");
    }
}
