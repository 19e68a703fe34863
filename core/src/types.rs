//! Payload records returned by the FlightXML operations.
//!
//! # Design
//! Field names follow the wire format (a mix of camelCase and snake_case),
//! mapped onto Rust names with `#[serde(rename)]` where they differ. Every
//! record is `#[serde(default)]`: the service omits fields it has no value
//! for, and a sparse record should still decode.
//!
//! Timestamps are UNIX seconds. Coordinates are decimal degrees.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftType {
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub model: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfo {
    pub name: String,
    pub shortname: String,
    pub callsign: String,
    pub location: String,
    pub country: String,
    pub url: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportInfo {
    pub name: String,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,
    pub timezone: String,
}

/// One page of a paginated listing.
///
/// The list arrives under an operation-specific key (`arrivals`,
/// `departures`, `enroute`, `scheduled`, `flights`, `metar`); all of them
/// land in `items`. `next_offset` is whatever the service sent, `-1` once
/// the listing is exhausted.
///
/// Unlike the records below, a page is strict: the list key must be one of
/// the known names and nothing else may sit beside `next_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page<T> {
    pub next_offset: i64,
    #[serde(
        alias = "arrivals",
        alias = "departures",
        alias = "enroute",
        alias = "scheduled",
        alias = "flights",
        alias = "metar"
    )]
    pub items: Vec<T>,
}

/// A row of an airport or fleet board (arrived, departed, enroute,
/// scheduled). Columns that do not apply to a board are zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSummary {
    pub ident: String,
    pub aircrafttype: String,
    pub actualdeparturetime: i64,
    pub actualarrivaltime: i64,
    pub estimatedarrivaltime: i64,
    pub filed_departuretime: i64,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "originName")]
    pub origin_name: String,
    #[serde(rename = "originCity")]
    pub origin_city: String,
    #[serde(rename = "destinationName")]
    pub destination_name: String,
    #[serde(rename = "destinationCity")]
    pub destination_city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportOperationCounts {
    pub enroute: i64,
    pub departed: i64,
    pub scheduled_departures: i64,
    pub scheduled_arrivals: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineEnrouteCount {
    pub icao: String,
    pub count: i64,
}

/// A filed or flown flight as returned by `FlightInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightDetail {
    pub ident: String,
    pub aircrafttype: String,
    pub filed_ete: String,
    pub filed_time: i64,
    pub filed_departuretime: i64,
    pub filed_airspeed_kts: i64,
    pub filed_airspeed_mach: String,
    pub filed_altitude: i64,
    pub route: String,
    pub actualdeparturetime: i64,
    pub estimatedarrivaltime: i64,
    pub actualarrivaltime: i64,
    pub diverted: String,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "originName")]
    pub origin_name: String,
    #[serde(rename = "originCity")]
    pub origin_city: String,
    #[serde(rename = "destinationName")]
    pub destination_name: String,
    #[serde(rename = "destinationCity")]
    pub destination_city: String,
}

/// One position report of a track log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPoint {
    pub timestamp: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub groundspeed: i64,
    pub altitude: i64,
    #[serde(rename = "altitudeStatus")]
    pub altitude_status: String,
    #[serde(rename = "updateType")]
    pub update_type: String,
    #[serde(rename = "altitudeChange")]
    pub altitude_change: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InFlightInfo {
    #[serde(rename = "faFlightID")]
    pub fa_flight_id: String,
    pub ident: String,
    pub prefix: String,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub suffix: String,
    pub origin: String,
    pub destination: String,
    pub timeout: String,
    pub timestamp: i64,
    #[serde(rename = "departureTime")]
    pub departure_time: i64,
    #[serde(rename = "firstPositionTime")]
    pub first_position_time: i64,
    #[serde(rename = "arrivalTime")]
    pub arrival_time: i64,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(rename = "lowLongitude")]
    pub low_longitude: f64,
    #[serde(rename = "lowLatitude")]
    pub low_latitude: f64,
    #[serde(rename = "highLongitude")]
    pub high_longitude: f64,
    #[serde(rename = "highLatitude")]
    pub high_latitude: f64,
    pub groundspeed: i64,
    pub altitude: i64,
    pub heading: i64,
    #[serde(rename = "altitudeStatus")]
    pub altitude_status: String,
    #[serde(rename = "updateType")]
    pub update_type: String,
    #[serde(rename = "altitudeChange")]
    pub altitude_change: String,
    pub waypoints: String,
}

/// A decoded METAR weather report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetarReport {
    pub airport: String,
    pub time: i64,
    pub cloud_friendly: String,
    pub cloud_altitude: i64,
    pub cloud_type: String,
    pub conditions: String,
    pub pressure: f64,
    pub temp_air: i64,
    pub temp_dewpoint: i64,
    pub temp_relhum: i64,
    pub visibility: f64,
    pub wind_friendly: String,
    pub wind_direction: i64,
    pub wind_speed: i64,
    pub wind_speed_gust: i64,
    pub raw_data: String,
}
