use crate::{ClaimId, Coordinates, FireId, SpaceObjectId};
use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObject {
    pub id: SpaceObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// In light years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_earth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Shared four-step severity scale used by alerts and risk regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Stable,
    Increasing,
    Decreasing,
}

/// The backend emits RFC 3339 timestamps, or naive datetimes that are
/// implicitly UTC.
mod lenient_timestamp {
    use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        let value = String::deserialize(deserializer)?;
        if let Ok(timestamp) = value.parse::<Timestamp>() {
            return Ok(timestamp);
        }
        value
            .parse::<DateTime>()
            .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.timestamp())
            .map_err(D::Error::custom)
    }
}

// Weather

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCurrent {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub aqi: u32,
    pub uv_index: f64,
    pub conditions: String,
    #[serde(deserialize_with = "lenient_timestamp::deserialize")]
    pub timestamp: Timestamp,
}

/// One day of a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: Date,
    pub temp_min: f64,
    pub temp_max: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub frost_risk: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi: Option<u32>,
}

// Agriculture

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroughtRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrostWarning {
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmRecommendation {
    pub spraying_safe: bool,
    pub frost_warning: FrostWarning,
    pub best_work_days: Vec<Date>,
    pub drought_risk: DroughtRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmAlertType {
    Frost,
    Drought,
    Storm,
    Heat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmAlert {
    #[serde(rename = "type")]
    pub alert_type: FarmAlertType,
    pub severity: Severity,
    pub date: Date,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_without_rain: Option<u32>,
}

// Insurance

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrostEvent {
    pub date: Date,
    pub temperature: f64,
}

/// A fire near an insured region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireNearRegion {
    pub lat: f64,
    pub lon: f64,
    pub area_ha: f64,
    pub distance_km: f64,
}

/// Normalized difference vegetation index, compared year over year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ndvi {
    pub current: f64,
    pub previous_year: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceRisk {
    pub region: String,
    pub period: String,
    pub risk_score: f64,
    pub frost_events: Vec<FrostEvent>,
    pub drought_days: u32,
    pub fires: Vec<FireNearRegion>,
    pub ndvi: Ndvi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Drought,
    Frost,
    Flood,
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPeriod {
    pub start: Date,
    pub end: Date,
}

/// Weather evidence gathered to verify a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimVerification {
    pub precipitation_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_above_30c: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_below_0c: Option<u32>,
    pub ndvi_drop_percent: f64,
    pub fraud_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: ClaimId,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub region: String,
    pub period: ClaimPeriod,
    pub verification: ClaimVerification,
    pub status: ClaimStatus,
}

/// Insurance forecasts are passed through untouched; their layout is owned
/// by the backend's forecasting model.
pub type InsuranceForecast = serde_json::Value;

// Wildfire

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireIntensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fire {
    pub fire_id: FireId,
    pub lat: f64,
    pub lon: f64,
    pub area_ha: f64,
    pub intensity: FireIntensity,
    #[serde(deserialize_with = "lenient_timestamp::deserialize")]
    pub detected_at: Timestamp,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadWeather {
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: f64,
    pub wind_direction: String,
    pub humidity_percent: f64,
    pub temperature_c: f64,
    /// Fire weather index.
    pub fwi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatType {
    Settlement,
    ProtectedForest,
    Infrastructure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireThreat {
    #[serde(rename = "type")]
    pub threat_type: ThreatType,
    pub name: String,
    pub distance_km: f64,
    pub eta_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireSpreadForecast {
    pub fire_id: FireId,
    pub region: String,
    pub weather: SpreadWeather,
    pub threats: Vec<FireThreat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityArea {
    pub city: String,
    pub aqi: u32,
    pub category: AqiCategory,
    pub pm25: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireRiskRegion {
    pub name: String,
    pub fwi: f64,
    pub risk_level: Severity,
}

// Dashboard aggregates

/// A percentage with the backend's human label for it, e.g. `35` / `Medium`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedPercentage {
    pub percentage: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiImpact {
    pub pm2_5: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAgriculture {
    pub current_temperature: f64,
    pub frost_risk: RatedPercentage,
    pub aqi_impact: AqiImpact,
    pub humidity: f64,
    /// mm/day
    pub precipitation: f64,
    /// m/s
    pub wind_speed: f64,
    pub location: Coordinates,
}

/// An extreme weather event confirmed by climate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub value: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSummary {
    pub avg_temperature: f64,
    pub total_precipitation: f64,
    pub days_analyzed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub temperature: f64,
    pub wind_speed: f64,
    pub cloud_coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: String,
    pub factors: RiskFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInsurance {
    pub weather_verified_events: Vec<VerifiedEvent>,
    pub climate_summary: ClimateSummary,
    pub risk_assessment: RiskAssessment,
    pub region: String,
    pub location: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerIndex {
    pub value: u32,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindConditions {
    pub speed_ms: f64,
    pub speed_kmh: f64,
    pub direction: String,
    pub degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiSmoke {
    pub aqi: u32,
    pub status: String,
    pub pm2_5: f64,
}

/// A satellite fire detection within the search radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFire {
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub brightness: f64,
    /// Fire radiative power, MW.
    pub frp: f64,
    pub confidence: String,
    pub acq_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardWildfires {
    pub active_fires_count: u32,
    pub total_fires_global: u64,
    pub fire_danger_index: DangerIndex,
    pub wind_conditions: WindConditions,
    pub aqi_smoke: AqiSmoke,
    /// Sorted by distance, closest first.
    pub nearest_fires: Vec<NearbyFire>,
    pub search_radius_km: f64,
    pub location: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmRiskFactors {
    pub frost_risk: bool,
    pub humidity_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmRiskIndex {
    pub value: u32,
    pub trend: Trend,
    pub factors: FarmRiskFactors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireHotspots {
    pub global_count: u64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature: f64,
    pub wind_speed: f64,
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualitySummary {
    pub aqi: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMain {
    pub farm_risk_index: FarmRiskIndex,
    pub fire_hotspots: FireHotspots,
    pub weather_summary: WeatherSummary,
    pub air_quality_summary: AirQualitySummary,
    pub location: Coordinates,
    pub last_updated: String,
}
