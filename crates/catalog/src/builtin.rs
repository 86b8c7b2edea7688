use once_cell::sync::Lazy;

use crate::location::{Catalog, Location};

/// Zones shown as cards when the user's location is unknown.
pub const DEFAULT_CARD_ZONES: [&str; 4] = [
    "America/New_York",
    "Europe/London",
    "Asia/Tokyo",
    "Australia/Sydney",
];

// (zone, city, country, lat, lng)
type Row = (&'static str, &'static str, &'static str, f64, f64);

const MAJOR_CITIES: &[Row] = &[
    // Americas
    ("America/New_York", "New York", "United States", 40.7128, -74.0060),
    ("America/Los_Angeles", "Los Angeles", "United States", 34.0522, -118.2437),
    ("America/Chicago", "Chicago", "United States", 41.8781, -87.6298),
    ("America/Denver", "Denver", "United States", 39.7392, -104.9903),
    ("America/Toronto", "Toronto", "Canada", 43.6532, -79.3832),
    ("America/Vancouver", "Vancouver", "Canada", 49.2827, -123.1207),
    ("America/Mexico_City", "Mexico City", "Mexico", 19.4326, -99.1332),
    ("America/Bogota", "Bogotá", "Colombia", 4.7110, -74.0721),
    ("America/Lima", "Lima", "Peru", -12.0464, -77.0428),
    ("America/Sao_Paulo", "São Paulo", "Brazil", -23.5505, -46.6333),
    ("America/Buenos_Aires", "Buenos Aires", "Argentina", -34.6037, -58.3816),
    ("America/Santiago", "Santiago", "Chile", -33.4489, -70.6693),
    // Europe
    ("Europe/London", "London", "United Kingdom", 51.5074, -0.1278),
    ("Europe/Paris", "Paris", "France", 48.8566, 2.3522),
    ("Europe/Berlin", "Berlin", "Germany", 52.5200, 13.4050),
    ("Europe/Rome", "Rome", "Italy", 41.9028, 12.4964),
    ("Europe/Madrid", "Madrid", "Spain", 40.4168, -3.7038),
    ("Europe/Moscow", "Moscow", "Russia", 55.7558, 37.6173),
    ("Europe/Istanbul", "Istanbul", "Turkey", 41.0082, 28.9784),
    ("Europe/Athens", "Athens", "Greece", 37.9838, 23.7275),
    // Africa
    ("Africa/Cairo", "Cairo", "Egypt", 30.0444, 31.2357),
    ("Africa/Lagos", "Lagos", "Nigeria", 6.5244, 3.3792),
    ("Africa/Johannesburg", "Johannesburg", "South Africa", -26.2041, 28.0473),
    ("Africa/Nairobi", "Nairobi", "Kenya", -1.2864, 36.8172),
    ("Africa/Casablanca", "Casablanca", "Morocco", 33.5731, -7.5898),
    ("Africa/Addis_Ababa", "Addis Ababa", "Ethiopia", 9.0320, 38.7469),
    ("Africa/Dakar", "Dakar", "Senegal", 14.6928, -17.4467),
    ("Africa/Accra", "Accra", "Ghana", 5.6037, -0.1870),
    // Asia
    ("Asia/Dubai", "Dubai", "UAE", 25.2048, 55.2708),
    ("Asia/Kolkata", "Mumbai", "India", 19.0760, 72.8777),
    ("Asia/Kolkata", "Delhi", "India", 28.6139, 77.2090),
    ("Asia/Kolkata", "Bangalore", "India", 12.9716, 77.5946),
    ("Asia/Kolkata", "Chennai", "India", 13.0827, 80.2707),
    ("Asia/Bangkok", "Bangkok", "Thailand", 13.7563, 100.5018),
    ("Asia/Singapore", "Singapore", "Singapore", 1.3521, 103.8198),
    ("Asia/Shanghai", "Shanghai", "China", 31.2304, 121.4737),
    ("Asia/Shanghai", "Beijing", "China", 39.9042, 116.4074),
    ("Asia/Urumqi", "Urumqi", "China", 43.8256, 87.6168),
    ("Asia/Tokyo", "Tokyo", "Japan", 35.6762, 139.6503),
    ("Asia/Seoul", "Seoul", "South Korea", 37.5665, 126.9780),
    ("Asia/Hong_Kong", "Hong Kong", "Hong Kong", 22.3193, 114.1694),
    ("Asia/Jakarta", "Jakarta", "Indonesia", -6.2088, 106.8456),
    ("Asia/Manila", "Manila", "Philippines", 14.5995, 120.9842),
    ("Asia/Tehran", "Tehran", "Iran", 35.6892, 51.3890),
    ("Asia/Riyadh", "Riyadh", "Saudi Arabia", 24.7136, 46.6753),
    ("Asia/Baghdad", "Baghdad", "Iraq", 33.3152, 44.3661),
    ("Asia/Yekaterinburg", "Yekaterinburg", "Russia", 56.8389, 60.6057),
    ("Asia/Novosibirsk", "Novosibirsk", "Russia", 55.0084, 82.9357),
    ("Asia/Vladivostok", "Vladivostok", "Russia", 43.1150, 131.8855),
    // Americas, continued
    ("America/Phoenix", "Phoenix", "United States", 33.4484, -112.0740),
    ("America/Anchorage", "Anchorage", "United States", 61.2181, -149.9003),
    ("America/Havana", "Havana", "Cuba", 23.1136, -82.3666),
    ("America/Caracas", "Caracas", "Venezuela", 10.4806, -66.9036),
    ("America/Rio_Branco", "Rio Branco", "Brazil", -9.9753, -67.8249),
    // Europe, continued
    ("Europe/Amsterdam", "Amsterdam", "Netherlands", 52.3676, 4.9041),
    ("Europe/Vienna", "Vienna", "Austria", 48.2082, 16.3738),
    ("Europe/Stockholm", "Stockholm", "Sweden", 59.3293, 18.0686),
    ("Europe/Warsaw", "Warsaw", "Poland", 52.2297, 21.0122),
    ("Europe/Bucharest", "Bucharest", "Romania", 44.4268, 26.1025),
    // Oceania
    ("Australia/Sydney", "Sydney", "Australia", -33.8688, 151.2093),
    ("Australia/Melbourne", "Melbourne", "Australia", -37.8136, 144.9631),
    ("Australia/Perth", "Perth", "Australia", -31.9505, 115.8605),
    ("Australia/Brisbane", "Brisbane", "Australia", -27.4698, 153.0251),
    ("Pacific/Auckland", "Auckland", "New Zealand", -36.8485, 174.7633),
    ("Pacific/Honolulu", "Honolulu", "United States", 21.3099, -157.8581),
    ("Pacific/Fiji", "Suva", "Fiji", -18.1416, 178.4419),
    // Open-ocean anchors so sea taps still resolve to a nominal zone.
    ("Etc/GMT+5", "Atlantic Ocean", "Ocean", 0.0, -30.0),
    ("Etc/GMT+12", "Pacific Ocean", "Ocean", 0.0, -170.0),
    ("Etc/GMT-5", "Indian Ocean", "Ocean", -20.0, 80.0),
    ("Etc/GMT", "Arctic Ocean", "Ocean", 85.0, 0.0),
    ("Etc/GMT+12", "Southern Ocean", "Ocean", -65.0, 0.0),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let entries = MAJOR_CITIES
        .iter()
        .map(|&(zone, city, country, lat, lng)| Location::new(zone, city, country, lat, lng))
        .collect();
    Catalog::from_table(entries)
});

/// The built-in world catalog, materialized once on first use.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}
