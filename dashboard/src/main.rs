use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dashboard::{
    Config, cities,
    format::format_date_time,
    hooks::{
        DEFAULT_RADIUS_KM, FetchState, InsuranceKey, Resource, WildfiresKey,
        use_agriculture_data, use_insurance_data, use_main_dashboard,
        use_space_objects, use_wildfires_data,
    },
    telemetry::{get_subscriber, init_subscriber},
    view,
};
use payloads::Location;
use std::fmt::Debug;
use std::time::Duration;

/// Terminal viewer for the climate dashboards.
///
/// Environment variables can be set directly or loaded from a .env file:
/// - CLIMATE_API_URL: base address of the backend API
///   (defaults to http://127.0.0.1:8080/api/v1)
/// - CLIMATE_API_TIMEOUT_SECS: per-request timeout (optional)
/// - RUST_LOG: log filter (defaults to warn)
///
/// Example against the development server:
/// cargo run -p dev-server
/// cargo run -p dashboard -- main --city astana
#[derive(Parser)]
#[command(name = "dashboard", version)]
struct Cli {
    #[command(subcommand)]
    view: View,

    /// City id from the catalog (see the `cities` subcommand).
    #[arg(long, global = true, conflicts_with_all = ["lat", "lon"])]
    city: Option<String>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Refetch every SECS seconds until interrupted.
    #[arg(long, global = true, value_name = "SECS")]
    watch: Option<u64>,
}

#[derive(Subcommand)]
enum View {
    /// Farm risk, fire hotspots, weather and air quality.
    Main,
    Agriculture,
    Insurance {
        /// Region name reported with the risk assessment.
        #[arg(long)]
        region: Option<String>,
    },
    Wildfires {
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius_km: f64,
    },
    SpaceObjects,
    /// List the supported cities.
    Cities,
}

impl Cli {
    fn location(&self) -> anyhow::Result<Location> {
        match (self.lat, self.lon, &self.city) {
            (Some(lat), Some(lon), _) => Ok(Location::coordinates(lat, lon)),
            (None, None, Some(id)) => cities::find(id)
                .map(|city| city.location())
                .with_context(|| format!("unknown city {id:?}")),
            (None, None, None) => Ok(cities::DEFAULT_CITY.location()),
            _ => bail!("--lat and --lon must be given together"),
        }
    }

    fn watch_interval(&self) -> Option<Duration> {
        self.watch.map(|secs| Duration::from_secs(secs.max(1)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("warn".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = config.api_client()?;
    let location = cli.location()?;
    let watch = cli.watch_interval();
    tracing::info!(api_url = %config.api_url, %location, "starting dashboard");

    match cli.view {
        View::Main => {
            let mut hook = use_main_dashboard(client, location);
            show(&mut hook, view::main_dashboard, watch).await
        }
        View::Agriculture => {
            let mut hook = use_agriculture_data(client, location);
            show(&mut hook, view::agriculture, watch).await
        }
        View::Insurance { region } => {
            let key = InsuranceKey::new(location, region);
            let mut hook = use_insurance_data(client, key);
            show(&mut hook, view::insurance, watch).await
        }
        View::Wildfires { radius_km } => {
            let key = WildfiresKey::new(location).with_radius(radius_km);
            let mut hook = use_wildfires_data(client, key);
            show(&mut hook, view::wildfires, watch).await
        }
        View::SpaceObjects => {
            let mut hook = use_space_objects(client);
            show(&mut hook, view::space_objects, watch).await
        }
        View::Cities => {
            print_cities();
            Ok(())
        }
    }
}

/// Print the hook's state once it settles.
///
/// Without `watch` a failed fetch is returned as an error so the process
/// exits non-zero. With `watch` the hook is refetched on every tick, keeping
/// the last good payload on screen, until Ctrl+C.
async fn show<K, T>(
    hook: &mut Resource<K, T>,
    render: fn(&FetchState<T>) -> String,
    watch: Option<Duration>,
) -> anyhow::Result<()>
where
    K: Clone + PartialEq + Debug + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    let Some(interval) = watch else {
        let state = hook.settled().await;
        println!("{}", render(&state));
        if let Some(message) = state.error() {
            bail!("fetch failed: {message}");
        }
        return Ok(());
    };

    loop {
        tokio::select! {
            state = hook.settled() => {
                let now = format_date_time(&jiff::Zoned::now());
                println!("{}\n-- {now}\n", render(&state));
            }
            _ = tokio::signal::ctrl_c() => break,
        }
        tokio::select! {
            _ = tokio::time::sleep(interval) => hook.refetch(),
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    tracing::info!("stopped watching");
    Ok(())
}

fn print_cities() {
    for city in cities::CITIES {
        let marker = if city.id == cities::DEFAULT_CITY.id { "*" } else { " " };
        println!(
            "{marker} {:<14}{:<16}{:<14}{}",
            city.id,
            city.name_en,
            city.country,
            city.coordinates()
        );
    }
}
