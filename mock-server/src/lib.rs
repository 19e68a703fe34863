//! In-process imitation of the FlightXML2 JSON API.
//!
//! Every operation is `GET /{Operation}?...`, guarded by Basic Auth, and
//! answered with `{"<Operation>Result": ...}` or `{"error": "..."}`.

pub mod fixtures;

use std::{collections::HashMap, str::FromStr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

use fixtures::{Movement, MOVEMENTS};

pub const DEFAULT_PAGE_SIZE: usize = 15;

const EARTH_RADIUS_MILES: f64 = 3958.8;

type Reply = (StatusCode, Json<Value>);
type Params = HashMap<String, String>;

#[derive(Clone)]
struct AppState {
    authorization: Arc<String>,
}

pub fn app(username: &str, api_key: &str) -> Router {
    let state = AppState {
        authorization: Arc::new(format!(
            "Basic {}",
            STANDARD.encode(format!("{username}:{api_key}"))
        )),
    };
    Router::new()
        .route("/{operation}", get(dispatch))
        .with_state(state)
}

pub async fn run(listener: TcpListener, username: &str, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(username, api_key)).await
}

async fn dispatch(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    headers: HeaderMap,
    Query(params): Query<Params>,
) -> Reply {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented != Some(state.authorization.as_str()) {
        tracing::warn!(%operation, "rejected credentials");
        return error(StatusCode::UNAUTHORIZED, "invalid username or API key");
    }
    tracing::debug!(%operation, ?params, "request");

    let result = match operation.as_str() {
        "AircraftType" => lookup(&params, "type", fixtures::aircraft_type, "unknown aircraft type"),
        "AirlineInfo" => lookup(&params, "airlineCode", fixtures::airline_info, "unknown airline"),
        "AirportInfo" => lookup(&params, "airportCode", fixtures::airport_info, "unknown airport"),
        "AllAirlines" => Ok(json!({ "data": fixtures::AIRLINES })),
        "AllAirports" => Ok(json!({ "data": fixtures::AIRPORTS })),
        "Arrived" => airport_board(&params, "arrivals", |m, a| m.destination == a && m.arrived > 0),
        "Departed" => airport_board(&params, "departures", |m, a| m.origin == a && m.departed > 0),
        "Enroute" => airport_board(&params, "enroute", |m, a| m.destination == a && m.is_enroute()),
        "Scheduled" => airport_board(&params, "scheduled", |m, a| m.origin == a && m.is_scheduled()),
        "CountAirportOperations" => count_airport_operations(&params),
        "CountAllEnrouteAirlineOperations" => Ok(count_enroute_airlines()),
        "FleetArrived" => fleet_board(&params, "arrivals", |m| m.arrived > 0),
        "FleetScheduled" => fleet_board(&params, "scheduled", Movement::is_scheduled),
        "FlightInfo" => flight_info(&params),
        "GetLastTrack" => ident_lookup(&params, fixtures::last_track).map(Value::from),
        "InFlightInfo" => in_flight_info(&params),
        "LatLongsToDistance" => lat_longs(&params, distance_miles),
        "LatLongsToHeading" => lat_longs(&params, initial_heading),
        "MetarEx" => metar_ex(&params),
        other => Err(error(StatusCode::NOT_FOUND, &format!("unknown operation {other}"))),
    };

    match result {
        Ok(payload) => {
            let mut envelope = Map::new();
            envelope.insert(format!("{operation}Result"), payload);
            (StatusCode::OK, Json(Value::Object(envelope)))
        }
        Err(reply) => reply,
    }
}

fn error(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "error": message })))
}

fn required<'a>(params: &'a Params, name: &str) -> Result<&'a str, Reply> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, &format!("missing argument {name}")))
}

fn optional<T: FromStr>(params: &Params, name: &str) -> Result<Option<T>, Reply> {
    match params.get(name) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| error(StatusCode::BAD_REQUEST, &format!("invalid value for {name}"))),
    }
}

fn number<T: FromStr>(params: &Params, name: &str) -> Result<T, Reply> {
    required(params, name)?;
    optional(params, name)?.ok_or_else(|| error(StatusCode::BAD_REQUEST, &format!("missing argument {name}")))
}

fn lookup(params: &Params, name: &str, find: fn(&str) -> Option<Value>, missing: &str) -> Result<Value, Reply> {
    let key = required(params, name)?;
    find(key).ok_or_else(|| error(StatusCode::BAD_REQUEST, missing))
}

fn ident_lookup(params: &Params, find: fn(&str) -> Option<Vec<Value>>) -> Result<Vec<Value>, Reply> {
    let ident = required(params, "ident")?;
    find(ident).ok_or_else(|| error(StatusCode::BAD_REQUEST, "invalid ident"))
}

/// Slice `items` by `howMany`/`offset` into `{"next_offset", <list_key>}`.
fn paginate(params: &Params, list_key: &str, items: Vec<Value>) -> Result<Value, Reply> {
    let how_many: usize = optional(params, "howMany")?.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset: usize = optional(params, "offset")?.unwrap_or(0);
    let total = items.len();
    let page: Vec<Value> = items.into_iter().skip(offset).take(how_many).collect();
    let end = offset + page.len();
    let next_offset: i64 = if end < total { end as i64 } else { -1 };

    let mut body = Map::new();
    body.insert("next_offset".to_string(), json!(next_offset));
    body.insert(list_key.to_string(), Value::Array(page));
    Ok(Value::Object(body))
}

fn airport_board(params: &Params, list_key: &str, on_board: fn(&Movement, &str) -> bool) -> Result<Value, Reply> {
    let airport = required(params, "airport")?;
    if fixtures::airport_names(airport).0.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "unknown airport"));
    }
    let filter = params.get("filter").map(String::as_str).unwrap_or("");
    let items = MOVEMENTS
        .iter()
        .filter(|&m| on_board(m, airport))
        .filter(|m| match filter {
            "ga" => m.is_general_aviation(),
            "airline" => !m.is_general_aviation(),
            _ => true,
        })
        .map(Movement::to_json)
        .collect();
    paginate(params, list_key, items)
}

fn fleet_board(params: &Params, list_key: &str, on_board: fn(&Movement) -> bool) -> Result<Value, Reply> {
    let fleet = required(params, "fleet")?;
    let items = MOVEMENTS
        .iter()
        .filter(|m| m.ident.starts_with(fleet) && !m.is_general_aviation())
        .filter(|&m| on_board(m))
        .map(Movement::to_json)
        .collect();
    paginate(params, list_key, items)
}

fn count_airport_operations(params: &Params) -> Result<Value, Reply> {
    let airport = required(params, "airport")?;
    Ok(json!({
        "enroute": count(|m| m.destination == airport && m.is_enroute()),
        "departed": count(|m| m.origin == airport && m.departed > 0),
        "scheduled_departures": count(|m| m.origin == airport && m.is_scheduled()),
        "scheduled_arrivals": count(|m| m.destination == airport && m.is_scheduled()),
    }))
}

fn count(pred: impl Fn(&Movement) -> bool) -> usize {
    MOVEMENTS.iter().filter(|&m| pred(m)).count()
}

fn count_enroute_airlines() -> Value {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    for m in MOVEMENTS.iter().filter(|m| m.is_enroute() && !m.is_general_aviation()) {
        let icao = &m.ident[..3];
        match counts.iter().position(|(code, _)| *code == icao) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((icao, 1)),
        }
    }
    counts.sort_by(|a, b| a.0.cmp(b.0));
    Value::Array(
        counts
            .into_iter()
            .map(|(icao, count)| json!({ "icao": icao, "count": count }))
            .collect(),
    )
}

fn flight_info(params: &Params) -> Result<Value, Reply> {
    let flights = ident_lookup(params, fixtures::flight_history)?;
    let mut scoped = params.clone();
    scoped.remove("offset");
    paginate(&scoped, "flights", flights)
}

// An unknown ident still answers 200, with the error inside the envelope.
fn in_flight_info(params: &Params) -> Result<Value, Reply> {
    let ident = required(params, "ident")?;
    fixtures::in_flight(ident).ok_or_else(|| error(StatusCode::OK, "unknown ident"))
}

fn lat_longs(params: &Params, measure: fn(f64, f64, f64, f64) -> f64) -> Result<Value, Reply> {
    let lat1: f64 = number(params, "lat1")?;
    let lon1: f64 = number(params, "lon1")?;
    let lat2: f64 = number(params, "lat2")?;
    let lon2: f64 = number(params, "lon2")?;
    Ok(json!(measure(lat1, lon1, lat2, lon2)))
}

fn metar_ex(params: &Params) -> Result<Value, Reply> {
    let airport = required(params, "airport")?;
    let start_time: i64 = optional(params, "startTime")?.unwrap_or(0);
    let reports = fixtures::metar_reports(airport)
        .into_iter()
        .filter(|r| r["time"].as_i64().unwrap_or(0) >= start_time)
        .collect();
    paginate(params, "metar", reports)
}

/// Haversine great-circle distance in statute miles.
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
}

/// Initial true bearing in degrees, normalised to `[0, 360)`.
pub fn initial_heading(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_lambda = (lon2 - lon1).to_radians();
    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_sfo_lax_is_fractional() {
        let d = distance_miles(37.6188, -122.375, 33.9425, -118.408);
        assert!(d > 330.0 && d < 345.0, "got {d}");
        assert!(d.fract() > 0.0);
    }

    #[test]
    fn heading_is_normalised() {
        let h = initial_heading(33.9425, -118.408, 37.6188, -122.375);
        assert!((0.0..360.0).contains(&h));
        assert!(h > 300.0, "LAX to SFO heads north-west, got {h}");
    }

    #[test]
    fn zero_distance_for_same_point() {
        assert_eq!(distance_miles(10.0, 20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn enroute_counts_are_sorted_by_icao() {
        let counts = count_enroute_airlines();
        let icaos: Vec<&str> = counts
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["icao"].as_str().unwrap())
            .collect();
        assert_eq!(icaos, vec!["AAL", "SWA", "UAL"]);
    }

    #[test]
    fn paginate_reports_exhaustion() {
        let mut params = Params::new();
        params.insert("howMany".to_string(), "2".to_string());
        let page = paginate(&params, "metar", vec![json!(1), json!(2), json!(3)]).unwrap();
        assert_eq!(page["next_offset"], 2);

        params.insert("offset".to_string(), "2".to_string());
        let page = paginate(&params, "metar", vec![json!(1), json!(2), json!(3)]).unwrap();
        assert_eq!(page["next_offset"], -1);
        assert_eq!(page["metar"], json!([3]));
    }

    #[test]
    fn optional_rejects_garbage_numbers() {
        let mut params = Params::new();
        params.insert("howMany".to_string(), "lots".to_string());
        let err = optional::<usize>(&params, "howMany").unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
