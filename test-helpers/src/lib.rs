pub mod backend;
pub mod mock;

use actix_web::web;
use backend::{BackendState, Config, Fault, RecordedRequest};
use payloads::{APIClient, ClientError, requests, responses};
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, util::SubscriberInitExt};

/// Path the mock backend mounts its endpoints under.
pub const API_PREFIX: &str = "/api/v1";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    /// Address the client is configured with, including [`API_PREFIX`].
    pub address: String,
    pub client: Arc<APIClient>,
    pub backend: web::Data<BackendState>,
}

impl TestApp {
    /// Every request the backend has received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.requests()
    }

    /// Requests received for one path, e.g. `/dashboard/main`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    /// Delay answers for a city id (or, failing that, a path).
    pub fn delay(&self, key: &str, delay: Duration) {
        self.backend.set_delay(key, delay);
    }

    pub fn fail_with(&self, path: &str, status: StatusCode) {
        let status = actix_web::http::StatusCode::from_u16(status.as_u16())
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        self.backend.set_fault(path, Fault::Status(status));
    }

    pub fn serve_malformed(&self, path: &str) {
        self.backend.set_fault(path, Fault::MalformedBody);
    }

    pub fn recover(&self) {
        self.backend.clear_faults();
    }

    /// Creates a space object and checks the backend echoed it back.
    pub async fn create_test_space_object(
        &self,
    ) -> anyhow::Result<responses::SpaceObject> {
        let details = space_object_details_a();
        let created = self.client.create_space_object(&details).await?;
        assert_space_object_equal(&details, &created)?;
        Ok(created)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let _ = LogTracer::init();
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_test_writer()
        .finish()
        .try_init();

    let backend = web::Data::new(BackendState::new(API_PREFIX));
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        prefix: API_PREFIX.into(),
    };
    let server = backend::build(&mut config, backend.clone()).unwrap();
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{}{API_PREFIX}", config.port);
    let client = APIClient::new(address.clone(), None).unwrap();

    TestApp {
        port: config.port,
        address,
        client: Arc::new(client),
        backend,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn space_object_details_a() -> requests::SpaceObjectCreate {
    requests::SpaceObjectCreate {
        name: "Vega".into(),
        object_type: "star".into(),
        description: Some("Fifth-brightest star in the night sky".into()),
        distance_from_earth: Some(25.0),
    }
}

pub fn space_object_details_a_update() -> requests::SpaceObjectCreate {
    requests::SpaceObjectCreate {
        name: "Vega".into(),
        object_type: "star".into(),
        description: Some("Alpha Lyrae".into()),
        distance_from_earth: Some(25.04),
    }
}

pub fn assert_space_object_equal(
    details: &requests::SpaceObjectCreate,
    object: &responses::SpaceObject,
) -> anyhow::Result<()> {
    anyhow::ensure!(object.name == details.name, "name mismatch");
    anyhow::ensure!(
        object.object_type == details.object_type,
        "type mismatch"
    );
    anyhow::ensure!(
        object.description == details.description,
        "description mismatch"
    );
    anyhow::ensure!(
        object.distance_from_earth == details.distance_from_earth,
        "distance mismatch"
    );
    Ok(())
}
