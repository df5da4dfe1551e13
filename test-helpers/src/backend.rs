//! An in-process stand-in for the climate backend.
//!
//! Serves every endpoint the client consumes from the [`crate::mock`]
//! dataset. A middleware records each request and applies the delays and
//! faults configured through [`BackendState`].

use crate::mock;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Server, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::middleware::{Next, from_fn};
use actix_web::{
    App, HttpResponse, HttpServer, Responder, delete, get, post, put, web,
};
use payloads::{Coordinates, SpaceObjectId, requests, responses};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

/// Something the backend should do instead of answering normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Answer with this status and a JSON error body.
    Status(StatusCode),
    /// Answer 200 with a body that is not JSON.
    MalformedBody,
}

/// A request as the backend saw it, with the API prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    /// Value of a query parameter, if present.
    pub fn param(&self, key: &str) -> Option<String> {
        web::Query::<HashMap<String, String>>::from_query(&self.query)
            .ok()
            .and_then(|query| query.get(key).cloned())
    }
}

/// Mutable state shared by all server workers.
pub struct BackendState {
    prefix: String,
    space_objects: Mutex<BTreeMap<SpaceObjectId, responses::SpaceObject>>,
    requests: Mutex<Vec<RecordedRequest>>,
    /// Keyed by `city_id` when the request carries one, else by path.
    delays: Mutex<HashMap<String, Duration>>,
    /// Keyed by path.
    faults: Mutex<HashMap<String, Fault>>,
}

impl BackendState {
    pub fn new(prefix: &str) -> Self {
        let space_objects = mock::seed_space_objects()
            .into_iter()
            .map(|object| (object.id, object))
            .collect();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            space_objects: Mutex::new(space_objects),
            requests: Mutex::new(Vec::new()),
            delays: Mutex::new(HashMap::new()),
            faults: Mutex::new(HashMap::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn set_delay(&self, key: impl Into<String>, delay: Duration) {
        self.delays.lock().unwrap().insert(key.into(), delay);
    }

    pub fn set_fault(&self, path: impl Into<String>, fault: Fault) {
        self.faults.lock().unwrap().insert(path.into(), fault);
    }

    pub fn clear_faults(&self) {
        self.faults.lock().unwrap().clear();
    }

    fn record(&self, request: &ServiceRequest) -> RecordedRequest {
        let path = request
            .path()
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(request.path())
            .to_string();
        let recorded = RecordedRequest {
            method: request.method().to_string(),
            path,
            query: request.query_string().to_string(),
            content_type: request
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(String::from),
        };
        self.requests.lock().unwrap().push(recorded.clone());
        recorded
    }

    fn delay_for(&self, request: &RecordedRequest) -> Option<Duration> {
        let delays = self.delays.lock().unwrap();
        request
            .param("city_id")
            .and_then(|city| delays.get(&city).copied())
            .or_else(|| delays.get(&request.path).copied())
    }

    fn fault_for(&self, request: &RecordedRequest) -> Option<Fault> {
        self.faults.lock().unwrap().get(&request.path).copied()
    }
}

async fn intercept(
    request: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, actix_web::Error> {
    let state = request
        .app_data::<web::Data<BackendState>>()
        .cloned()
        .ok_or_else(|| {
            actix_web::error::ErrorInternalServerError("backend state missing")
        })?;
    let recorded = state.record(&request);
    tracing::debug!(method = %recorded.method, path = %recorded.path, "mock request");

    if let Some(delay) = state.delay_for(&recorded) {
        actix_web::rt::time::sleep(delay).await;
    }

    match state.fault_for(&recorded) {
        Some(Fault::Status(status)) => {
            let response = HttpResponse::build(status)
                .json(serde_json::json!({ "detail": "injected failure" }));
            Ok(request.into_response(response).map_into_right_body())
        }
        Some(Fault::MalformedBody) => {
            let response = HttpResponse::Ok()
                .content_type("application/json")
                .body("{\"truncated\": ");
            Ok(request.into_response(response).map_into_right_body())
        }
        None => next.call(request).await.map(|r| r.map_into_left_body()),
    }
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Path every endpoint is mounted under, e.g. `/api/v1`.
    pub prefix: String,
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    state: web::Data<BackendState>,
) -> std::io::Result<Server> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let prefix = config.prefix.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(
                web::scope(&prefix)
                    .wrap(from_fn(intercept))
                    .service(health)
                    .service(list_space_objects)
                    .service(create_space_object)
                    .service(space_objects_by_type)
                    .service(get_space_object)
                    .service(update_space_object)
                    .service(delete_space_object)
                    .service(current_weather)
                    .service(weather_forecast)
                    .service(farm_recommendations)
                    .service(farm_alerts)
                    .service(insurance_risks)
                    .service(claim_report)
                    .service(get_claim)
                    .service(insurance_forecast)
                    .service(active_fires)
                    .service(fire_spread_forecast)
                    .service(air_quality)
                    .service(wildfire_risk_forecast)
                    .service(dashboard_agriculture)
                    .service(dashboard_insurance)
                    .service(dashboard_wildfires)
                    .service(dashboard_main),
            )
    })
    .workers(2)
    .listen(listener)?
    .run();
    Ok(server)
}

fn not_found(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "detail": detail.into() }))
}

#[derive(Deserialize)]
struct CoordinatesQuery {
    lat: f64,
    lon: f64,
}

impl CoordinatesQuery {
    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[derive(Deserialize)]
struct LocationQuery {
    city_id: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    region: Option<String>,
    radius_km: Option<f64>,
}

impl LocationQuery {
    /// Resolves the requested place; `Err` carries the 404 to return for an
    /// unknown city.
    fn resolve(&self) -> Result<Coordinates, HttpResponse> {
        match (&self.city_id, self.lat, self.lon) {
            (Some(city_id), _, _) => mock::resolve_city(city_id)
                .ok_or_else(|| not_found(format!("Unknown city: {city_id}"))),
            (None, Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Ok(mock::DEFAULT_COORDINATES),
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(responses::HealthStatus {
        status: "healthy".into(),
        message: "Climate API is running".into(),
    })
}

#[get("/space-objects/")]
async fn list_space_objects(state: web::Data<BackendState>) -> impl Responder {
    let objects: Vec<_> =
        state.space_objects.lock().unwrap().values().cloned().collect();
    HttpResponse::Ok().json(objects)
}

#[post("/space-objects/")]
async fn create_space_object(
    state: web::Data<BackendState>,
    details: web::Json<requests::SpaceObjectCreate>,
) -> impl Responder {
    let mut objects = state.space_objects.lock().unwrap();
    let next_id = objects.keys().next_back().map_or(1, |id| id.0 + 1);
    let details = details.into_inner();
    let object = responses::SpaceObject {
        id: SpaceObjectId(next_id),
        name: details.name,
        object_type: details.object_type,
        description: details.description,
        distance_from_earth: details.distance_from_earth,
    };
    objects.insert(object.id, object.clone());
    HttpResponse::Ok().json(object)
}

#[get("/space-objects/type/{object_type}")]
async fn space_objects_by_type(
    state: web::Data<BackendState>,
    path: web::Path<String>,
) -> impl Responder {
    let object_type = path.into_inner();
    let objects: Vec<_> = state
        .space_objects
        .lock()
        .unwrap()
        .values()
        .filter(|object| object.object_type.eq_ignore_ascii_case(&object_type))
        .cloned()
        .collect();
    HttpResponse::Ok().json(objects)
}

#[get("/space-objects/{id}")]
async fn get_space_object(
    state: web::Data<BackendState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = SpaceObjectId(path.into_inner());
    match state.space_objects.lock().unwrap().get(&id) {
        Some(object) => HttpResponse::Ok().json(object),
        None => not_found("Space object not found"),
    }
}

#[put("/space-objects/{id}")]
async fn update_space_object(
    state: web::Data<BackendState>,
    path: web::Path<i64>,
    details: web::Json<requests::SpaceObjectCreate>,
) -> impl Responder {
    let id = SpaceObjectId(path.into_inner());
    let mut objects = state.space_objects.lock().unwrap();
    let Some(object) = objects.get_mut(&id) else {
        return not_found("Space object not found");
    };
    let details = details.into_inner();
    object.name = details.name;
    object.object_type = details.object_type;
    object.description = details.description;
    object.distance_from_earth = details.distance_from_earth;
    HttpResponse::Ok().json(object.clone())
}

#[delete("/space-objects/{id}")]
async fn delete_space_object(
    state: web::Data<BackendState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = SpaceObjectId(path.into_inner());
    match state.space_objects.lock().unwrap().remove(&id) {
        Some(object) => HttpResponse::Ok().json(responses::DeleteMessage {
            message: format!("Object {} deleted", object.name),
        }),
        None => not_found("Space object not found"),
    }
}

#[get("/weather/current")]
async fn current_weather(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::weather_current(&query.coordinates()))
}

#[derive(Deserialize)]
struct ForecastQuery {
    lat: f64,
    lon: f64,
    days: Option<u32>,
}

#[get("/weather/forecast")]
async fn weather_forecast(query: web::Query<ForecastQuery>) -> impl Responder {
    let coordinates = Coordinates::new(query.lat, query.lon);
    let days = query.days.unwrap_or(7).min(16);
    HttpResponse::Ok().json(mock::weather_forecast(&coordinates, days))
}

#[get("/recommendations/farm")]
async fn farm_recommendations(
    query: web::Query<CoordinatesQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(mock::farm_recommendation(&query.coordinates()))
}

#[get("/alerts/farm")]
async fn farm_alerts(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::farm_alerts(&query.coordinates()))
}

#[derive(Deserialize)]
struct RisksQuery {
    region: String,
    period: String,
}

#[get("/insurance/risks")]
async fn insurance_risks(query: web::Query<RisksQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::insurance_risks(&query.region, &query.period))
}

#[get("/insurance/claims/{claim_id}")]
async fn get_claim(path: web::Path<String>) -> impl Responder {
    match mock::claim(&path.into_inner()) {
        Some(claim) => HttpResponse::Ok().json(claim),
        None => not_found("Claim not found"),
    }
}

#[derive(Deserialize)]
struct ReportQuery {
    format: String,
}

#[get("/insurance/claims/{claim_id}/report")]
async fn claim_report(
    path: web::Path<String>,
    query: web::Query<ReportQuery>,
) -> impl Responder {
    if query.format != "pdf" {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "detail": "Unsupported format" }));
    }
    match mock::claim(&path.into_inner()) {
        Some(claim) => HttpResponse::Ok()
            .content_type("application/pdf")
            .body(mock::claim_report(&claim)),
        None => not_found("Claim not found"),
    }
}

#[derive(Deserialize)]
struct PeriodQuery {
    period: String,
}

#[get("/insurance/forecast")]
async fn insurance_forecast(query: web::Query<PeriodQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::insurance_forecast(&query.period))
}

#[derive(Deserialize)]
struct RegionQuery {
    region: Option<String>,
}

#[get("/wildfire/active-fires")]
async fn active_fires(query: web::Query<RegionQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::active_fires(query.region.as_deref()))
}

#[get("/wildfire/fires/{fire_id}/spread-forecast")]
async fn fire_spread_forecast(path: web::Path<String>) -> impl Responder {
    match mock::fire_spread_forecast(&path.into_inner()) {
        Some(forecast) => HttpResponse::Ok().json(forecast),
        None => not_found("Fire not found"),
    }
}

#[derive(Deserialize)]
struct AffectedQuery {
    #[serde(default)]
    affected: bool,
}

#[get("/wildfire/air-quality")]
async fn air_quality(query: web::Query<AffectedQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::air_quality(query.affected))
}

#[derive(Deserialize)]
struct HoursQuery {
    hours: Option<u32>,
}

#[get("/wildfire/risk-forecast")]
async fn wildfire_risk_forecast(query: web::Query<HoursQuery>) -> impl Responder {
    HttpResponse::Ok().json(mock::wildfire_risk_forecast(query.hours.unwrap_or(24)))
}

#[get("/dashboard/agriculture")]
async fn dashboard_agriculture(query: web::Query<LocationQuery>) -> impl Responder {
    match query.resolve() {
        Ok(coordinates) => {
            HttpResponse::Ok().json(mock::dashboard_agriculture(&coordinates))
        }
        Err(response) => response,
    }
}

#[get("/dashboard/insurance")]
async fn dashboard_insurance(query: web::Query<LocationQuery>) -> impl Responder {
    let region = query.region.as_deref().unwrap_or("Kazakhstan");
    match query.resolve() {
        Ok(coordinates) => HttpResponse::Ok()
            .json(mock::dashboard_insurance(&coordinates, region)),
        Err(response) => response,
    }
}

#[get("/dashboard/wildfires")]
async fn dashboard_wildfires(query: web::Query<LocationQuery>) -> impl Responder {
    let radius_km = query.radius_km.unwrap_or(500.0);
    match query.resolve() {
        Ok(coordinates) => HttpResponse::Ok()
            .json(mock::dashboard_wildfires(&coordinates, radius_km)),
        Err(response) => response,
    }
}

#[get("/dashboard/main")]
async fn dashboard_main(query: web::Query<LocationQuery>) -> impl Responder {
    match query.resolve() {
        Ok(coordinates) => {
            HttpResponse::Ok().json(mock::dashboard_main(&coordinates))
        }
        Err(response) => response,
    }
}
