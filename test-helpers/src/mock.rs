//! Canned dataset served by the mock backend.
//!
//! Conditions are synthesized deterministically from a location's
//! coordinates, and the dashboard aggregates are derived from them with the
//! same thresholds the production backend applies. Repeated requests against
//! an unchanged backend therefore return identical payloads.

use jiff::civil::{Date, date};
use jiff::{Timestamp, ToSpan};
use payloads::{ClaimId, Coordinates, FireId, SpaceObjectId, responses};
use responses::{Severity, Trend};

/// Location used when a dashboard request names neither a city nor
/// coordinates.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 55.7558,
    longitude: 37.6173,
};

/// First day of every forecast in the dataset.
pub const FORECAST_START: Date = date(2025, 6, 10);

/// The moment all "current" observations were taken.
pub fn observed_at() -> Timestamp {
    Timestamp::constant(1_749_535_200, 0)
}

const CITIES: &[(&str, f64, f64)] = &[
    ("almaty", 43.2220, 76.8512),
    ("astana", 51.1694, 71.4491),
    ("pavlodar", 52.2873, 76.9665),
    ("ekibastuz", 51.7244, 75.3232),
    ("aktau", 43.6506, 51.1603),
    ("los-angeles", 34.0522, -118.2437),
    ("miami", 25.7617, -80.1918),
    ("sydney", -33.8688, 151.2093),
    ("perth", -31.9505, 115.8605),
    ("london", 51.5074, -0.1278),
    ("paris", 48.8566, 2.3522),
    ("barcelona", 41.3851, 2.1734),
    ("tokyo", 35.6762, 139.6503),
    ("singapore", 1.3521, 103.8198),
    ("dubai", 25.2048, 55.2708),
    ("sao-paulo", -23.5505, -46.6333),
    ("buenos-aires", -34.6037, -58.3816),
    ("cairo", 30.0444, 31.2357),
    ("cape-town", -33.9249, 18.4241),
];

/// Coordinates of a city the backend knows about.
pub fn resolve_city(city_id: &str) -> Option<Coordinates> {
    CITIES
        .iter()
        .find(|(id, _, _)| *id == city_id)
        .map(|(_, latitude, longitude)| Coordinates::new(*latitude, *longitude))
}

pub fn seed_space_objects() -> Vec<responses::SpaceObject> {
    vec![
        space_object(1, "Mars", "planet", Some("The red planet"), None),
        space_object(2, "Jupiter", "planet", None, None),
        space_object(3, "Sirius", "star", Some("Brightest star"), Some(8.6)),
        space_object(4, "Ceres", "asteroid", None, None),
    ]
}

fn space_object(
    id: i64,
    name: &str,
    object_type: &str,
    description: Option<&str>,
    distance_from_earth: Option<f64>,
) -> responses::SpaceObject {
    responses::SpaceObject {
        id: SpaceObjectId(id),
        name: name.into(),
        object_type: object_type.into(),
        description: description.map(Into::into),
        distance_from_earth,
    }
}

/// Raw conditions at a location, before any dashboard derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temperature: f64,
    /// Lowest daily minimum over the analysis window.
    pub min_temperature: f64,
    pub humidity: f64,
    /// Daily precipitation over the analysis window, mm.
    pub precipitation: Vec<f64>,
    /// Daily mean temperature over the analysis window.
    pub daily_temperatures: Vec<f64>,
    pub wind_speed: f64,
    pub wind_degrees: f64,
    pub clouds: f64,
    pub pm2_5: f64,
    /// OpenWeather style 1 (good) to 5 (very poor).
    pub aqi_index: u32,
    pub conditions: &'static str,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn observe(coordinates: &Coordinates) -> Observation {
    let lat = coordinates.latitude.abs();
    let lon = coordinates.longitude.abs();

    let temperature = round_to(32.0 - lat * 0.45, 1);
    let daily_temperatures: Vec<f64> = (0..7_i32)
        .map(|day| round_to(temperature + f64::from(day % 3) - 1.0, 1))
        .collect();
    let precipitation: Vec<f64> = (0..7_i32)
        .map(|day| round_to((lon + f64::from(day)) % 6.0, 2))
        .collect();
    let pm2_5 = round_to(lon % 60.0, 1);
    let aqi_index = match pm2_5 {
        v if v <= 12.0 => 1,
        v if v <= 25.0 => 2,
        v if v <= 35.0 => 3,
        v if v <= 55.0 => 4,
        _ => 5,
    };

    Observation {
        temperature,
        min_temperature: round_to(temperature - 9.0, 1),
        humidity: round_to(30.0 + lon % 50.0, 1),
        precipitation,
        daily_temperatures,
        wind_speed: round_to(2.0 + lat % 10.0, 2),
        wind_degrees: (lon * 7.0).round() % 360.0,
        clouds: (lat * 3.0).round() % 100.0,
        pm2_5,
        aqi_index,
        conditions: if temperature > 15.0 { "Clear" } else { "Clouds" },
    }
}

fn aqi_status(index: u32) -> &'static str {
    match index {
        1 => "Good",
        2 => "Fair",
        3 => "Moderate",
        4 => "Poor",
        5 => "Very Poor",
        _ => "Unknown",
    }
}

fn compass_direction(degrees: f64) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let index = ((degrees + 22.5) / 45.0) as usize % 8;
    DIRECTIONS[index]
}

/// Great-circle distance in kilometers.
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

pub fn weather_current(coordinates: &Coordinates) -> responses::WeatherCurrent {
    let observation = observe(coordinates);
    responses::WeatherCurrent {
        temperature: observation.temperature,
        humidity: observation.humidity,
        wind_speed: observation.wind_speed,
        wind_direction: compass_direction(observation.wind_degrees).into(),
        aqi: observation.aqi_index * 50,
        uv_index: round_to(observation.temperature / 4.0, 1).max(0.0),
        conditions: observation.conditions.into(),
        timestamp: observed_at(),
    }
}

pub fn weather_forecast(
    coordinates: &Coordinates,
    days: u32,
) -> Vec<responses::WeatherForecast> {
    let observation = observe(coordinates);
    (0..days)
        .filter_map(|day| {
            let date = FORECAST_START.checked_add(i64::from(day).days()).ok()?;
            let swing = f64::from(day % 4);
            let temp_min = round_to(observation.min_temperature + swing, 1);
            Some(responses::WeatherForecast {
                date,
                temp_min,
                temp_max: round_to(observation.temperature + swing + 6.0, 1),
                precipitation: observation.precipitation
                    [day as usize % observation.precipitation.len()],
                humidity: observation.humidity,
                wind_speed: observation.wind_speed,
                frost_risk: temp_min <= 0.0,
                aqi: Some(observation.aqi_index * 50),
            })
        })
        .collect()
}

pub fn farm_recommendation(
    coordinates: &Coordinates,
) -> responses::FarmRecommendation {
    let observation = observe(coordinates);
    let forecast = weather_forecast(coordinates, 7);
    let frost = forecast.iter().find(|day| day.frost_risk);
    let total_rain: f64 = observation.precipitation.iter().sum();

    responses::FarmRecommendation {
        spraying_safe: observation.wind_speed < 5.0,
        frost_warning: responses::FrostWarning {
            active: frost.is_some(),
            temperature: frost.map(|day| day.temp_min),
            time: frost.map(|day| format!("{}T04:00", day.date)),
        },
        best_work_days: forecast
            .iter()
            .filter(|day| day.precipitation < 2.0 && !day.frost_risk)
            .map(|day| day.date)
            .take(3)
            .collect(),
        drought_risk: match total_rain {
            r if r < 5.0 => responses::DroughtRisk::High,
            r if r < 15.0 => responses::DroughtRisk::Medium,
            _ => responses::DroughtRisk::Low,
        },
    }
}

pub fn farm_alerts(coordinates: &Coordinates) -> Vec<responses::FarmAlert> {
    let observation = observe(coordinates);
    let mut alerts = Vec::new();
    for day in weather_forecast(coordinates, 7) {
        if day.frost_risk {
            alerts.push(responses::FarmAlert {
                alert_type: responses::FarmAlertType::Frost,
                severity: if day.temp_min <= -5.0 {
                    Severity::Critical
                } else {
                    Severity::High
                },
                date: day.date,
                message: format!(
                    "Frost expected, minimum {:.1}°C",
                    day.temp_min
                ),
                temperature: Some(day.temp_min),
                days_without_rain: None,
            });
        }
    }
    let dry_days = observation
        .precipitation
        .iter()
        .filter(|mm| **mm < 0.5)
        .count() as u32;
    if dry_days >= 2 {
        alerts.push(responses::FarmAlert {
            alert_type: responses::FarmAlertType::Drought,
            severity: Severity::Medium,
            date: FORECAST_START,
            message: format!("{dry_days} days without significant rain"),
            temperature: None,
            days_without_rain: Some(dry_days),
        });
    }
    alerts
}

pub fn insurance_risks(region: &str, period: &str) -> Vec<responses::InsuranceRisk> {
    let coordinates = resolve_city(&region.to_lowercase())
        .unwrap_or(DEFAULT_COORDINATES);
    let observation = observe(&coordinates);
    let forecast = weather_forecast(&coordinates, 14);
    let frost_events: Vec<_> = forecast
        .iter()
        .filter(|day| day.frost_risk)
        .map(|day| responses::FrostEvent {
            date: day.date,
            temperature: day.temp_min,
        })
        .collect();
    let drought_days = observation
        .precipitation
        .iter()
        .filter(|mm| **mm < 0.5)
        .count() as u32;
    let fires = fires()
        .into_iter()
        .map(|fire| {
            let distance = distance_km(
                &coordinates,
                &Coordinates::new(fire.lat, fire.lon),
            );
            responses::FireNearRegion {
                lat: fire.lat,
                lon: fire.lon,
                area_ha: fire.area_ha,
                distance_km: round_to(distance, 1),
            }
        })
        .filter(|fire| fire.distance_km <= 500.0)
        .collect::<Vec<_>>();
    let risk_score = (10.0 * frost_events.len() as f64
        + 5.0 * f64::from(drought_days)
        + 15.0 * fires.len() as f64)
        .min(100.0);

    vec![responses::InsuranceRisk {
        region: region.into(),
        period: period.into(),
        risk_score,
        frost_events,
        drought_days,
        fires,
        ndvi: responses::Ndvi {
            current: 0.62,
            previous_year: 0.68,
            change_percent: -8.8,
        },
    }]
}

pub fn claims() -> Vec<responses::Claim> {
    vec![
        responses::Claim {
            claim_id: ClaimId("CLM-2024-001".into()),
            claim_type: responses::ClaimType::Drought,
            region: "Pavlodar".into(),
            period: responses::ClaimPeriod {
                start: date(2024, 6, 1),
                end: date(2024, 8, 31),
            },
            verification: responses::ClaimVerification {
                precipitation_mm: 41.5,
                days_above_30c: Some(38),
                days_below_0c: None,
                ndvi_drop_percent: 23.0,
                fraud_probability: 0.04,
            },
            status: responses::ClaimStatus::Verified,
        },
        responses::Claim {
            claim_id: ClaimId("CLM-2024-002".into()),
            claim_type: responses::ClaimType::Frost,
            region: "Astana".into(),
            period: responses::ClaimPeriod {
                start: date(2024, 5, 2),
                end: date(2024, 5, 4),
            },
            verification: responses::ClaimVerification {
                precipitation_mm: 3.2,
                days_above_30c: None,
                days_below_0c: Some(3),
                ndvi_drop_percent: 7.5,
                fraud_probability: 0.31,
            },
            status: responses::ClaimStatus::Pending,
        },
    ]
}

pub fn claim(claim_id: &str) -> Option<responses::Claim> {
    claims().into_iter().find(|claim| claim.claim_id.0 == claim_id)
}

/// A minimal PDF document standing in for a generated claim report.
pub fn claim_report(claim: &responses::Claim) -> Vec<u8> {
    format!(
        "%PDF-1.4\n% Claim {} ({:?}) {}\n%%EOF\n",
        claim.claim_id, claim.status, claim.region
    )
    .into_bytes()
}

pub fn insurance_forecast(period: &str) -> responses::InsuranceForecast {
    serde_json::json!({
        "period": period,
        "expected_claims": 14,
        "regions": [
            { "region": "Pavlodar", "risk_score": 71, "dominant_peril": "drought" },
            { "region": "Astana", "risk_score": 48, "dominant_peril": "frost" },
        ],
    })
}

pub fn fires() -> Vec<responses::Fire> {
    use responses::FireIntensity::{self, High, Low, Medium};

    let fire = |id: &str,
                lat: f64,
                lon: f64,
                area_ha: f64,
                intensity: FireIntensity,
                region: &str| responses::Fire {
        fire_id: FireId(id.into()),
        lat,
        lon,
        area_ha,
        intensity,
        detected_at: observed_at(),
        region: region.into(),
    };
    vec![
        fire("FIRE-KZ-001", 43.45, 77.10, 120.0, High, "Kazakhstan"),
        fire("FIRE-KZ-002", 51.40, 71.90, 35.5, Medium, "Kazakhstan"),
        fire("FIRE-KZ-003", 52.10, 76.40, 12.0, Low, "Kazakhstan"),
        fire("FIRE-US-001", 34.30, -118.10, 860.0, High, "USA"),
        fire("FIRE-AU-001", -33.50, 150.70, 410.0, Medium, "Australia"),
    ]
}

pub fn active_fires(region: Option<&str>) -> Vec<responses::Fire> {
    fires()
        .into_iter()
        .filter(|fire| {
            region.is_none_or(|region| fire.region.eq_ignore_ascii_case(region))
        })
        .collect()
}

pub fn fire_spread_forecast(
    fire_id: &str,
) -> Option<responses::FireSpreadForecast> {
    let fire = fires().into_iter().find(|fire| fire.fire_id.0 == fire_id)?;
    let observation = observe(&Coordinates::new(fire.lat, fire.lon));
    Some(responses::FireSpreadForecast {
        fire_id: fire.fire_id,
        region: fire.region,
        weather: responses::SpreadWeather {
            wind_speed_kmh: round_to(observation.wind_speed * 3.6, 1),
            wind_direction_deg: observation.wind_degrees,
            wind_direction: compass_direction(observation.wind_degrees).into(),
            humidity_percent: observation.humidity,
            temperature_c: observation.temperature,
            fwi: fire_danger(&observation).0 as f64,
        },
        threats: vec![
            responses::FireThreat {
                threat_type: responses::ThreatType::Settlement,
                name: "Nearest settlement".into(),
                distance_km: 12.5,
                eta_hours: 6.0,
            },
            responses::FireThreat {
                threat_type: responses::ThreatType::ProtectedForest,
                name: "Reserve buffer zone".into(),
                distance_km: 4.0,
                eta_hours: 2.5,
            },
        ],
    })
}

pub fn air_quality(affected: bool) -> Vec<responses::AirQualityArea> {
    CITIES
        .iter()
        .map(|(id, latitude, longitude)| {
            let observation = observe(&Coordinates::new(*latitude, *longitude));
            let aqi = (observation.pm2_5 * 4.0).round() as u32;
            let category = match aqi {
                0..=50 => responses::AqiCategory::Good,
                51..=100 => responses::AqiCategory::Moderate,
                101..=150 => responses::AqiCategory::Unhealthy,
                151..=200 => responses::AqiCategory::VeryUnhealthy,
                _ => responses::AqiCategory::Hazardous,
            };
            let recommendations = if aqi > 100 {
                vec!["Limit outdoor activity".to_string()]
            } else {
                Vec::new()
            };
            responses::AirQualityArea {
                city: (*id).to_string(),
                aqi,
                category,
                pm25: observation.pm2_5,
                pm10: Some(round_to(observation.pm2_5 * 1.6, 1)),
                recommendations,
            }
        })
        .filter(|area| !affected || area.aqi > 100)
        .collect()
}

pub fn wildfire_risk_forecast(hours: u32) -> Vec<responses::WildfireRiskRegion> {
    let growth = f64::from(hours.min(168)) / 24.0;
    [("Almaty region", 18.0), ("Pavlodar region", 27.0), ("Mangystau", 35.0)]
        .into_iter()
        .map(|(name, base)| {
            let fwi = round_to(base + growth * 2.5, 1);
            let risk_level = match fwi {
                v if v >= 38.0 => Severity::Critical,
                v if v >= 30.0 => Severity::High,
                v if v >= 21.0 => Severity::Medium,
                _ => Severity::Low,
            };
            responses::WildfireRiskRegion {
                name: name.into(),
                fwi,
                risk_level,
            }
        })
        .collect()
}

pub fn dashboard_agriculture(
    coordinates: &Coordinates,
) -> responses::DashboardAgriculture {
    let observation = observe(coordinates);
    let (percentage, status) = match observation.min_temperature {
        t if t <= -5.0 => (85, "Critical"),
        t if t <= -2.0 => (65, "High"),
        t if t <= 0.0 => (35, "Medium"),
        t if t <= 2.0 => (12, "Low"),
        _ => (5, "Very Low"),
    };
    let aqi_status = match observation.pm2_5 {
        v if v <= 12.0 => "Good",
        v if v <= 35.0 => "Moderate",
        v if v <= 55.0 => "Unhealthy for Sensitive",
        _ => "Unhealthy",
    };

    responses::DashboardAgriculture {
        current_temperature: observation.temperature,
        frost_risk: responses::RatedPercentage {
            percentage,
            status: status.into(),
        },
        aqi_impact: responses::AqiImpact {
            pm2_5: observation.pm2_5,
            status: aqi_status.into(),
        },
        humidity: observation.humidity,
        precipitation: observation.precipitation.last().copied().unwrap_or(0.0),
        wind_speed: observation.wind_speed,
        location: *coordinates,
    }
}

pub fn dashboard_insurance(
    coordinates: &Coordinates,
    region: &str,
) -> responses::DashboardInsurance {
    let observation = observe(coordinates);
    let temps = &observation.daily_temperatures;
    let precip = &observation.precipitation;
    let max_precip = precip.iter().copied().fold(f64::MIN, f64::max);
    let min_temp = temps.iter().copied().fold(f64::MAX, f64::min);
    let max_temp = temps.iter().copied().fold(f64::MIN, f64::max);

    let mut events = Vec::new();
    if max_precip > 10.0 {
        events.push(responses::VerifiedEvent {
            event_type: "Heavy Precipitation".into(),
            value: format!("{max_precip:.1} mm/day"),
            severity: "High".into(),
        });
    }
    if min_temp < -10.0 {
        events.push(responses::VerifiedEvent {
            event_type: "Extreme Cold".into(),
            value: format!("{min_temp:.1}°C"),
            severity: "Critical".into(),
        });
    } else if max_temp > 35.0 {
        events.push(responses::VerifiedEvent {
            event_type: "Extreme Heat".into(),
            value: format!("{max_temp:.1}°C"),
            severity: "High".into(),
        });
    }

    let mut score = 0;
    if observation.temperature < 0.0 || observation.temperature > 30.0 {
        score += 30;
    }
    if observation.wind_speed > 10.0 {
        score += 20;
    }
    if !events.is_empty() {
        score += 25;
    }
    let level = match score {
        s if s > 60 => "Critical",
        s if s > 40 => "High",
        s if s > 20 => "Medium",
        _ => "Low",
    };

    responses::DashboardInsurance {
        weather_verified_events: events,
        climate_summary: responses::ClimateSummary {
            avg_temperature: round_to(
                temps.iter().sum::<f64>() / temps.len() as f64,
                1,
            ),
            total_precipitation: round_to(precip.iter().sum(), 1),
            days_analyzed: temps.len() as u32,
        },
        risk_assessment: responses::RiskAssessment {
            score,
            level: level.into(),
            factors: responses::RiskFactors {
                temperature: observation.temperature,
                wind_speed: round_to(observation.wind_speed, 1),
                cloud_coverage: observation.clouds,
            },
        },
        region: region.into(),
        location: *coordinates,
    }
}

/// Simplified fire danger index (0-100) and its level.
fn fire_danger(observation: &Observation) -> (u32, &'static str) {
    let temperature_points = match observation.temperature {
        t if t > 30.0 => 40,
        t if t > 25.0 => 30,
        t if t > 20.0 => 20,
        _ => 10,
    };
    let humidity_points = match observation.humidity {
        h if h < 30.0 => 30,
        h if h < 50.0 => 20,
        _ => 10,
    };
    let wind_points = match observation.wind_speed {
        w if w > 10.0 => 30,
        w if w > 5.0 => 20,
        _ => 10,
    };
    let fdi: u32 = (temperature_points + humidity_points + wind_points).min(100);
    let level = match fdi {
        v if v >= 80 => "Critical",
        v if v >= 60 => "High",
        v if v >= 40 => "Moderate",
        _ => "Low",
    };
    (fdi, level)
}

pub fn dashboard_wildfires(
    coordinates: &Coordinates,
    radius_km: f64,
) -> responses::DashboardWildfires {
    let observation = observe(coordinates);
    let all_fires = fires();
    let mut nearby: Vec<responses::NearbyFire> = all_fires
        .iter()
        .filter_map(|fire| {
            let position = Coordinates::new(fire.lat, fire.lon);
            let distance = distance_km(coordinates, &position);
            (distance <= radius_km).then(|| responses::NearbyFire {
                latitude: fire.lat,
                longitude: fire.lon,
                distance_km: round_to(distance, 1),
                brightness: 330.0 + fire.area_ha / 10.0,
                frp: round_to(fire.area_ha / 4.0, 1),
                confidence: "n".into(),
                acq_date: FORECAST_START.to_string(),
            })
        })
        .collect();
    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    let active_fires_count = nearby.len() as u32;
    nearby.truncate(10);

    let (value, level) = fire_danger(&observation);
    responses::DashboardWildfires {
        active_fires_count,
        total_fires_global: all_fires.len() as u64,
        fire_danger_index: responses::DangerIndex {
            value,
            level: level.into(),
        },
        wind_conditions: responses::WindConditions {
            speed_ms: observation.wind_speed,
            speed_kmh: round_to(observation.wind_speed * 3.6, 1),
            direction: compass_direction(observation.wind_degrees).into(),
            degrees: observation.wind_degrees,
        },
        aqi_smoke: responses::AqiSmoke {
            aqi: observation.aqi_index,
            status: aqi_status(observation.aqi_index).into(),
            pm2_5: observation.pm2_5,
        },
        nearest_fires: nearby,
        search_radius_km: radius_km,
        location: *coordinates,
    }
}

pub fn dashboard_main(coordinates: &Coordinates) -> responses::DashboardMain {
    let observation = observe(coordinates);
    let mut farm_risk = 50;
    if observation.min_temperature < 0.0 {
        farm_risk += 20;
    }
    if observation.humidity < 40.0 {
        farm_risk += 15;
    } else if observation.humidity > 80.0 {
        farm_risk += 10;
    }

    responses::DashboardMain {
        farm_risk_index: responses::FarmRiskIndex {
            value: farm_risk.min(100),
            trend: Trend::Stable,
            factors: responses::FarmRiskFactors {
                frost_risk: observation.min_temperature < 0.0,
                humidity_level: observation.humidity,
            },
        },
        fire_hotspots: responses::FireHotspots {
            global_count: fires().len() as u64,
            trend: Trend::Increasing,
        },
        weather_summary: responses::WeatherSummary {
            temperature: observation.temperature,
            wind_speed: observation.wind_speed,
            conditions: observation.conditions.into(),
        },
        air_quality_summary: responses::AirQualitySummary {
            aqi: observation.aqi_index,
            status: aqi_status(observation.aqi_index).into(),
        },
        location: *coordinates,
        last_updated: "real-time".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observations_are_deterministic() {
        let almaty = resolve_city("almaty").unwrap();
        assert_eq!(observe(&almaty), observe(&almaty));
        assert_eq!(dashboard_main(&almaty), dashboard_main(&almaty));
    }

    #[test]
    fn nearest_fires_are_sorted_and_within_radius() {
        let almaty = resolve_city("almaty").unwrap();
        let dashboard = dashboard_wildfires(&almaty, 2000.0);
        assert!(dashboard.active_fires_count >= 2);
        for pair in dashboard.nearest_fires.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert!(
            dashboard
                .nearest_fires
                .iter()
                .all(|fire| fire.distance_km <= 2000.0)
        );
    }

    #[test]
    fn compass_direction_wraps_around() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(350.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(225.0), "SW");
    }
}
