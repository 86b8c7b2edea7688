use std::path::PathBuf;

use catalog::{
    builtin_catalog, nearby_locations, nearby_zones, nearest_location, Catalog, Location,
    LocationMatch, DEFAULT_CARD_ZONES,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use clock::{format_local_time, zone_display_name, LocalTime};
use foundation::math::{point_to_lat_lng, LatLng, SpherePoint, Vec3};
use globe::InteractionConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod replay;

#[derive(Parser, Debug)]
#[command(author, version, about = "World-clock globe lookups and interaction replays")]
struct Args {
    /// Interaction config JSON; missing keys keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Location catalog JSON (default: built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Render local times at this RFC 3339 instant instead of now
    #[arg(long, global = true)]
    at: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Nearest catalog location to a latitude/longitude
    Lookup {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Resolve a globe hit (texture UV or local sphere point) and look it up
    Pick {
        #[arg(long)]
        u: Option<f64>,

        #[arg(long)]
        v: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        y: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        z: Option<f64>,

        /// Sphere radius (default: globe_radius from the config)
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Zone cards near a location, or the default cards without one
    Nearby {
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,

        #[arg(long, default_value_t = 4)]
        count: usize,
    },

    /// Local time in an IANA zone
    Time { zone: String },

    /// Replay a JSON interaction script and print the observed states
    Replay { script: PathBuf },
}

#[derive(Serialize)]
struct MatchOutput {
    location: Location,
    distance_km: f64,
    local_time: LocalTime,
}

#[derive(Serialize)]
struct LookupOutput {
    query: LatLng,
    max_distance_km: f64,
    #[serde(rename = "match")]
    found: Option<MatchOutput>,
}

#[derive(Serialize)]
struct ZoneCard {
    zone: String,
    label: String,
    local_time: LocalTime,
}

#[derive(Serialize)]
struct NearbyOutput {
    locations: Vec<MatchOutput>,
    cards: Vec<ZoneCard>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InteractionConfig::load_json(path).map_err(|e| e.to_string())?,
        None => InteractionConfig::default(),
    };
    let loaded;
    let catalog: &[Location] = match &args.catalog {
        Some(path) => {
            loaded = Catalog::load_json(path).map_err(|e| e.to_string())?;
            loaded.entries()
        }
        None => builtin_catalog().entries(),
    };
    let now = match &args.at {
        Some(at) => parse_instant(at)?,
        None => Utc::now(),
    };

    match args.command {
        Command::Lookup { lat, lng } => print(&lookup(LatLng::new(lat, lng), &config, catalog, now)),
        Command::Pick {
            u,
            v,
            x,
            y,
            z,
            radius,
        } => {
            let point = match (u, v, x, y, z) {
                (Some(u), Some(v), None, None, None) => SpherePoint::Uv { u, v },
                (None, None, Some(x), Some(y), Some(z)) => SpherePoint::Cartesian {
                    point: Vec3::new(x, y, z),
                    radius: radius.unwrap_or(config.globe_radius),
                },
                _ => return Err("pick needs either --u/--v or --x/--y/--z".to_string()),
            };
            let ll = point_to_lat_lng(point, config.meridian)
                .ok_or_else(|| format!("{point:?} is not a usable globe hit"))?;
            print(&lookup(ll, &config, catalog, now))
        }
        Command::Nearby { lat, lng, count } => {
            let output = match lat.zip(lng) {
                Some((lat, lng)) => NearbyOutput {
                    locations: nearby_locations(lat, lng, catalog, count)
                        .into_iter()
                        .map(|m| match_output(m, now))
                        .collect(),
                    cards: nearby_zones(lat, lng, catalog, count)
                        .iter()
                        .map(|zone| zone_card(zone, now))
                        .collect(),
                },
                None => NearbyOutput {
                    locations: Vec::new(),
                    cards: DEFAULT_CARD_ZONES.iter().map(|zone| zone_card(zone, now)).collect(),
                },
            };
            print(&output)
        }
        Command::Time { zone } => print(&zone_card(&zone, now)),
        Command::Replay { script } => {
            let script = replay::Script::load(&script)?;
            print(&replay::run(&script, config, catalog))
        }
    }
}

fn lookup(query: LatLng, config: &InteractionConfig, catalog: &[Location], now: DateTime<Utc>) -> LookupOutput {
    LookupOutput {
        query,
        max_distance_km: config.max_distance_km,
        found: nearest_location(query.lat, query.lng, catalog, config.max_distance_km).map(|m| match_output(m, now)),
    }
}

fn match_output(m: LocationMatch<'_>, now: DateTime<Utc>) -> MatchOutput {
    MatchOutput {
        location: m.location.clone(),
        distance_km: m.distance_km,
        local_time: format_local_time(&m.location.name, now),
    }
}

fn zone_card(zone: &str, now: DateTime<Utc>) -> ZoneCard {
    ZoneCard {
        zone: zone.to_string(),
        label: zone_display_name(zone),
        local_time: format_local_time(zone, now),
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("--at {s:?}: {e}"))
}

fn print<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| format!("serialize output: {e}"))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn args_parse_negative_coordinates() {
        let args = Args::try_parse_from(["worldclock", "lookup", "--lat", "-33.87", "--lng", "151.21"]).unwrap();
        match args.command {
            Command::Lookup { lat, lng } => assert_eq!((lat, lng), (-33.87, 151.21)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn lookup_reports_match_and_local_time() {
        let out = lookup(
            LatLng::new(-33.87, 151.21),
            &InteractionConfig::default(),
            builtin_catalog().entries(),
            noon(),
        );
        let found = out.found.unwrap();
        assert_eq!(found.location.city, "Sydney");
        assert_eq!(found.local_time.time, "22:00:00");
    }

    #[test]
    fn parse_instant_accepts_offsets() {
        assert_eq!(parse_instant("2024-07-01T14:00:00+02:00").unwrap(), noon());
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn zone_card_labels() {
        let card = zone_card("America/New_York", noon());
        assert_eq!(card.label, "New York");
        assert_eq!(card.local_time.time, "08:00:00");
    }
}
