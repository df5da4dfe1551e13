//! Plain-text rendering of each dashboard for the terminal viewer.

use jiff::civil::Date;
use payloads::responses::{
    DashboardAgriculture, DashboardInsurance, DashboardMain,
    DashboardWildfires, SpaceObject,
};
use std::collections::BTreeMap;

use crate::format::{format_date, percentage, trend_label};
use crate::hooks::FetchState;
use crate::hooks::use_space_objects::type_stats as space_object_stats;

/// Label column width for stat lines.
const LABEL_WIDTH: usize = 22;

fn stat(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<LABEL_WIDTH$}{value}")
}

/// Footer for data kept from an earlier fetch.
fn status_lines(lines: &mut Vec<String>, is_loading: bool, error: Option<&str>) {
    if is_loading {
        lines.push("(refreshing...)".into());
    }
    if let Some(error) = error {
        lines.push(format!("Refresh failed: {error}"));
    }
}

pub fn main_dashboard(state: &FetchState<DashboardMain>) -> String {
    state.render("environmental data", |data, is_loading, error| {
        let risk = &data.farm_risk_index;
        let mut lines = vec![
            stat(
                "Farm risk index",
                format!("{} ({})", risk.value, trend_label(risk.trend)),
            ),
            stat("  Frost risk", if risk.factors.frost_risk { "yes" } else { "no" }),
            stat("  Humidity", percentage(risk.factors.humidity_level)),
            stat(
                "Fire hotspots",
                format!(
                    "{} worldwide ({})",
                    data.fire_hotspots.global_count,
                    trend_label(data.fire_hotspots.trend)
                ),
            ),
            stat(
                "Weather",
                format!(
                    "{:.1}°C, wind {:.1} m/s, {}",
                    data.weather_summary.temperature,
                    data.weather_summary.wind_speed,
                    data.weather_summary.conditions
                ),
            ),
            stat(
                "Air quality",
                format!(
                    "AQI {} ({})",
                    data.air_quality_summary.aqi,
                    data.air_quality_summary.status
                ),
            ),
            stat("Location", data.location),
            stat("Updated", &data.last_updated),
        ];
        status_lines(&mut lines, is_loading, error);
        lines.join("\n")
    })
}

pub fn agriculture(state: &FetchState<DashboardAgriculture>) -> String {
    state.render("agriculture data", |data, is_loading, error| {
        let mut lines = vec![
            stat("Temperature", format!("{:.1}°C", data.current_temperature)),
            stat(
                "Frost risk",
                format!(
                    "{} ({})",
                    percentage(data.frost_risk.percentage.into()),
                    data.frost_risk.status
                ),
            ),
            stat(
                "PM2.5 impact",
                format!(
                    "{:.1} µg/m³ ({})",
                    data.aqi_impact.pm2_5, data.aqi_impact.status
                ),
            ),
            stat("Humidity", percentage(data.humidity)),
            stat("Precipitation", format!("{:.1} mm/day", data.precipitation)),
            stat("Wind", format!("{:.1} m/s", data.wind_speed)),
            stat("Location", data.location),
        ];
        status_lines(&mut lines, is_loading, error);
        lines.join("\n")
    })
}

pub fn insurance(state: &FetchState<DashboardInsurance>) -> String {
    state.render("insurance data", |data, is_loading, error| {
        let risk = &data.risk_assessment;
        let summary = &data.climate_summary;
        let mut lines = vec![
            stat("Region", &data.region),
            stat("Risk score", format!("{} ({})", risk.score, risk.level)),
            stat(
                "  Factors",
                format!(
                    "{:.1}°C, wind {:.1} m/s, clouds {}",
                    risk.factors.temperature,
                    risk.factors.wind_speed,
                    percentage(risk.factors.cloud_coverage)
                ),
            ),
            stat(
                "Climate summary",
                format!(
                    "avg {:.1}°C, {:.1} mm over {} days",
                    summary.avg_temperature,
                    summary.total_precipitation,
                    summary.days_analyzed
                ),
            ),
        ];
        if data.weather_verified_events.is_empty() {
            lines.push(stat("Verified events", "none"));
        } else {
            lines.push("Verified events".into());
            for event in &data.weather_verified_events {
                lines.push(stat(
                    &format!("  {}", event.event_type),
                    format!("{} ({})", event.value, event.severity),
                ));
            }
        }
        lines.push(stat("Location", data.location));
        status_lines(&mut lines, is_loading, error);
        lines.join("\n")
    })
}

pub fn wildfires(state: &FetchState<DashboardWildfires>) -> String {
    state.render("wildfire data", |data, is_loading, error| {
        let wind = &data.wind_conditions;
        let mut lines = vec![
            stat(
                "Active fires",
                format!(
                    "{} within {:.0} km ({} worldwide)",
                    data.active_fires_count,
                    data.search_radius_km,
                    data.total_fires_global
                ),
            ),
            stat(
                "Fire danger",
                format!(
                    "{} ({})",
                    data.fire_danger_index.value, data.fire_danger_index.level
                ),
            ),
            stat(
                "Wind",
                format!(
                    "{:.1} km/h {} ({:.0}°)",
                    wind.speed_kmh, wind.direction, wind.degrees
                ),
            ),
            stat(
                "Smoke",
                format!(
                    "AQI {} ({}), PM2.5 {:.1}",
                    data.aqi_smoke.aqi, data.aqi_smoke.status, data.aqi_smoke.pm2_5
                ),
            ),
        ];
        if !data.nearest_fires.is_empty() {
            lines.push("Nearest fires".into());
        }
        for fire in &data.nearest_fires {
            let detected = fire
                .acq_date
                .parse::<Date>()
                .map(format_date)
                .unwrap_or_else(|_| fire.acq_date.clone());
            lines.push(format!(
                "  {:>6.1} km  {:.0} MW  {} confidence  {detected}",
                fire.distance_km, fire.frp, fire.confidence
            ));
        }
        lines.push(stat("Location", data.location));
        status_lines(&mut lines, is_loading, error);
        lines.join("\n")
    })
}

pub fn space_objects(state: &FetchState<Vec<SpaceObject>>) -> String {
    state.render("space objects", |objects, is_loading, error| {
        let mut lines: Vec<String> = objects
            .iter()
            .map(|object| {
                let distance = object
                    .distance_from_earth
                    .map(|ly| format!("{ly} ly"))
                    .unwrap_or_else(|| "-".into());
                format!(
                    "{:>4}  {:<16}{:<12}{distance}",
                    object.id.0, object.name, object.object_type
                )
            })
            .collect();
        if lines.is_empty() {
            lines.push("No space objects found".into());
        } else {
            lines.push(type_stats(&space_object_stats(objects), objects.len()));
        }
        status_lines(&mut lines, is_loading, error);
        lines.join("\n")
    })
}

/// Summary line such as `3 objects: 2 planet, 1 star`.
pub fn type_stats(stats: &BTreeMap<String, usize>, total: usize) -> String {
    let per_type: Vec<String> = stats
        .iter()
        .map(|(object_type, count)| format!("{count} {object_type}"))
        .collect();
    if per_type.is_empty() {
        format!("{total} objects")
    } else {
        format!("{total} objects: {}", per_type.join(", "))
    }
}
