use chrono::{Local, Timelike};
use url::Url;

use skyfit_core::{AppError, Config};
use skyfit_palette::{fallback_color, overlay_tint, sky_palette};
use skyfit_weather::{
    LocationSource, Position, RateLimiter, ReportStore, RequestCache, WeatherClient, WeatherError,
    WeatherReport,
};

/// What the lookup should be keyed on.
enum Lookup {
    Position(Position),
    City(String),
}

impl Lookup {
    fn cache_key(&self) -> String {
        match self {
            Self::Position(p) => format!("pos:{:.4},{:.4}", p.latitude, p.longitude),
            Self::City(city) => format!("city:{city}"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize core
    if let Err(e) = skyfit_core::init() {
        eprintln!("Failed to initialize: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        tracing::error!("Lookup failed: {e}");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Config directory: {}", config.config_dir.display());

    let base_url = Url::parse(&config.weather.api_base_url).map_err(WeatherError::Url)?;
    let client = WeatherClient::new(base_url, &config.weather.style)?;
    let limiter = RateLimiter::new(config.rate_limit.max_requests, config.rate_limit.window());
    let cache: RequestCache<WeatherReport> = RequestCache::new(config.weather.cache_ttl());
    let store = ReportStore::new(&config.config_dir);

    let lookup = resolve_lookup(&config).await?;
    let key = lookup.cache_key();

    let status = limiter.check(&key);
    if !status.allowed {
        return Err(WeatherError::RateLimited {
            seconds: status.seconds_until_reset(),
        }
        .into());
    }

    let report = match cache.get(&key) {
        Some(report) => {
            tracing::debug!(%key, "Serving cached report");
            report
        }
        None => {
            let report = fetch_report(&client, &lookup, &store).await?;
            cache.insert(key, report.clone());
            report
        }
    };

    render(&report);
    Ok(())
}

/// Pick the lookup target: explicit city argument, then pinned coordinates,
/// then the platform location service, then the configured default city.
async fn resolve_lookup(config: &Config) -> Result<Lookup, AppError> {
    if let Some(city) = std::env::args().nth(1) {
        return Ok(Lookup::City(city));
    }

    if let Some((latitude, longitude)) = config.location.fixed_position() {
        return Ok(Lookup::Position(Position {
            latitude,
            longitude,
        }));
    }

    match LocationSource::System.position().await {
        Ok(position) => Ok(Lookup::Position(position)),
        Err(e) => {
            let configured_city = config
                .location
                .city
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty());
            match configured_city {
                Some(city) => {
                    tracing::warn!("Location unavailable ({e}), using configured city");
                    Ok(Lookup::City(city.to_string()))
                }
                None => Err(e.into()),
            }
        }
    }
}

/// Fetch a fresh report, falling back to the last saved one when the
/// network is down.
async fn fetch_report(
    client: &WeatherClient,
    lookup: &Lookup,
    store: &ReportStore,
) -> Result<WeatherReport, AppError> {
    let fetched = match lookup {
        Lookup::Position(position) => client.fetch_by_position(*position).await,
        Lookup::City(city) => client.fetch_by_city(city).await,
    };

    match fetched {
        Ok(report) => {
            if let Err(e) = store.save(&report) {
                tracing::warn!("Failed to persist report: {e}");
            }
            Ok(report)
        }
        Err(e) => match store.load() {
            Some(report) => {
                tracing::warn!("Fetch failed ({e}), showing last saved report");
                println!("(offline: showing last saved report)\n");
                Ok(report)
            }
            None => Err(e.into()),
        },
    }
}

fn render(report: &WeatherReport) {
    let weather = &report.weather;
    let condition = weather.primary_condition();

    let now = Local::now();
    let palette = sky_palette(now.hour(), condition);
    let fallback = fallback_color(condition);
    let overlay = overlay_tint(condition);

    println!("{}", now.format("%A, %B %e"));
    println!("{}, {}", weather.name, weather.sys.country);
    println!();
    println!("  {:.0}°", weather.main.temp);
    if let Some(entry) = weather.weather.first() {
        println!("  {}", entry.description);
    }
    println!(
        "  H {:.0}°  L {:.0}°",
        weather.main.temp_max, weather.main.temp_min
    );
    println!();
    println!("  Feels like  {:.0}°", weather.main.feels_like);
    println!("  Humidity    {}%", weather.main.humidity);
    println!("  Wind        {} m/s", weather.wind.speed);
    println!();
    println!("Outfit suggestion: {}", report.outfit);
    println!();
    println!(
        "Sky gradient: {} {} {} {} {} (glow {})",
        palette.top, palette.upper, palette.mid, palette.lower, palette.bottom, palette.glow
    );
    println!("Fallback {fallback}, overlay {overlay}");
}
