//! Canned flight data served by the mock.
//!
//! A movement with `departed == 0` is still scheduled; one with
//! `departed > 0 && arrived == 0` is enroute. Idents starting with `N` are
//! general aviation, everything else is airline traffic.

use serde::Serialize;
use serde_json::{json, Value};

pub struct Movement {
    pub ident: &'static str,
    pub aircrafttype: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub filed_departure: i64,
    pub departed: i64,
    pub arrived: i64,
    pub estimated_arrival: i64,
}

impl Movement {
    pub fn is_general_aviation(&self) -> bool {
        self.ident.starts_with('N')
    }

    pub fn is_enroute(&self) -> bool {
        self.departed > 0 && self.arrived == 0
    }

    pub fn is_scheduled(&self) -> bool {
        self.departed == 0
    }

    pub fn to_json(&self) -> Value {
        let (origin_name, origin_city) = airport_names(self.origin);
        let (destination_name, destination_city) = airport_names(self.destination);
        json!(BoardEntry {
            ident: self.ident,
            aircrafttype: self.aircrafttype,
            filed_departuretime: self.filed_departure,
            actualdeparturetime: self.departed,
            actualarrivaltime: self.arrived,
            estimatedarrivaltime: self.estimated_arrival,
            origin: self.origin,
            destination: self.destination,
            origin_name,
            origin_city,
            destination_name,
            destination_city,
        })
    }
}

/// One row of an airport or fleet board, in wire field names.
#[derive(Serialize)]
struct BoardEntry<'a> {
    ident: &'a str,
    aircrafttype: &'a str,
    filed_departuretime: i64,
    actualdeparturetime: i64,
    actualarrivaltime: i64,
    estimatedarrivaltime: i64,
    origin: &'a str,
    destination: &'a str,
    #[serde(rename = "originName")]
    origin_name: &'a str,
    #[serde(rename = "originCity")]
    origin_city: &'a str,
    #[serde(rename = "destinationName")]
    destination_name: &'a str,
    #[serde(rename = "destinationCity")]
    destination_city: &'a str,
}

pub const MOVEMENTS: &[Movement] = &[
    Movement { ident: "UAL123", aircrafttype: "B738", origin: "KLAX", destination: "KSFO", filed_departure: 1_699_999_800, departed: 1_700_000_000, arrived: 1_700_004_500, estimated_arrival: 1_700_004_400 },
    Movement { ident: "UAL456", aircrafttype: "A320", origin: "KSEA", destination: "KSFO", filed_departure: 1_700_000_900, departed: 1_700_001_000, arrived: 1_700_008_200, estimated_arrival: 1_700_008_000 },
    Movement { ident: "DAL789", aircrafttype: "B739", origin: "KATL", destination: "KSFO", filed_departure: 1_699_989_000, departed: 1_699_990_000, arrived: 1_700_010_000, estimated_arrival: 1_700_010_300 },
    Movement { ident: "N12345", aircrafttype: "C172", origin: "KOAK", destination: "KSFO", filed_departure: 1_700_003_000, departed: 1_700_003_000, arrived: 1_700_005_000, estimated_arrival: 1_700_005_000 },
    Movement { ident: "SWA100", aircrafttype: "B737", origin: "KSFO", destination: "KLAX", filed_departure: 1_700_005_800, departed: 1_700_006_000, arrived: 0, estimated_arrival: 1_700_010_000 },
    Movement { ident: "UAL900", aircrafttype: "B772", origin: "KSFO", destination: "RJAA", filed_departure: 1_700_006_500, departed: 1_700_007_000, arrived: 0, estimated_arrival: 1_700_047_000 },
    Movement { ident: "UAL321", aircrafttype: "A319", origin: "KSFO", destination: "KDEN", filed_departure: 1_700_020_000, departed: 0, arrived: 0, estimated_arrival: 1_700_028_000 },
    Movement { ident: "N67890", aircrafttype: "PA28", origin: "KSFO", destination: "KSQL", filed_departure: 1_700_021_000, departed: 0, arrived: 0, estimated_arrival: 1_700_021_900 },
    Movement { ident: "AAL55", aircrafttype: "A321", origin: "KJFK", destination: "KSFO", filed_departure: 1_700_008_500, departed: 1_700_009_000, arrived: 0, estimated_arrival: 1_700_030_000 },
];

pub fn airport_names(code: &str) -> (&'static str, &'static str) {
    match code {
        "KSFO" => ("San Francisco Intl", "San Francisco, CA"),
        "KLAX" => ("Los Angeles Intl", "Los Angeles, CA"),
        "KSEA" => ("Seattle-Tacoma Intl", "Seattle, WA"),
        "KATL" => ("Hartsfield-Jackson Intl", "Atlanta, GA"),
        "KOAK" => ("Metropolitan Oakland Intl", "Oakland, CA"),
        "KJFK" => ("John F Kennedy Intl", "New York, NY"),
        "KDEN" => ("Denver Intl", "Denver, CO"),
        "KSQL" => ("San Carlos", "San Carlos, CA"),
        "RJAA" => ("Narita Intl", "Tokyo"),
        _ => ("", ""),
    }
}

pub const AIRPORTS: &[&str] = &["KATL", "KDEN", "KJFK", "KLAX", "KOAK", "KSEA", "KSFO", "KSQL", "RJAA"];

pub const AIRLINES: &[&str] = &["AAL", "DAL", "SWA", "UAL"];

pub fn airport_info(code: &str) -> Option<Value> {
    let (name, city) = airport_names(code);
    let (latitude, longitude, timezone) = match code {
        "KSFO" => (37.6188, -122.375, ":America/Los_Angeles"),
        "KLAX" => (33.9425, -118.408, ":America/Los_Angeles"),
        "KJFK" => (40.6398, -73.7789, ":America/New_York"),
        _ => return None,
    };
    Some(json!({
        "name": name,
        "location": city,
        "latitude": latitude,
        "longitude": longitude,
        "timezone": timezone,
    }))
}

pub fn airline_info(code: &str) -> Option<Value> {
    let (name, shortname, callsign, location, url, phone) = match code {
        "UAL" => ("United Air Lines Inc.", "United", "United", "Chicago, IL", "http://www.united.com/", "+1-800-864-8331"),
        "DAL" => ("Delta Air Lines", "Delta", "Delta", "Atlanta, GA", "http://www.delta.com/", "+1-800-221-1212"),
        _ => return None,
    };
    Some(json!({
        "name": name,
        "shortname": shortname,
        "callsign": callsign,
        "location": location,
        "country": "United States",
        "url": url,
        "phone": phone,
    }))
}

pub fn aircraft_type(code: &str) -> Option<Value> {
    let (manufacturer, model, description) = match code {
        "B738" => ("Boeing", "737-800", "twin-jet"),
        "A320" => ("Airbus", "A320", "twin-jet"),
        "C172" => ("Cessna", "172 Skyhawk", "single-engine piston"),
        _ => return None,
    };
    Some(json!({
        "manufacturer": manufacturer,
        "type": model,
        "description": description,
    }))
}

/// Two legs flown under the same ident, newest first.
pub fn flight_history(ident: &str) -> Option<Vec<Value>> {
    if ident != "UAL123" {
        return None;
    }
    let leg = |departed: i64, arrived: i64| {
        json!({
            "ident": "UAL123",
            "aircrafttype": "B738",
            "filed_ete": "01:10:00",
            "filed_time": departed - 86_400,
            "filed_departuretime": departed - 200,
            "filed_airspeed_kts": 447,
            "filed_airspeed_mach": "",
            "filed_altitude": 340,
            "route": "SUMMR2 STOKD SERFR SERFR4",
            "actualdeparturetime": departed,
            "estimatedarrivaltime": arrived - 100,
            "actualarrivaltime": arrived,
            "diverted": "",
            "origin": "KLAX",
            "destination": "KSFO",
            "originName": "Los Angeles Intl",
            "originCity": "Los Angeles, CA",
            "destinationName": "San Francisco Intl",
            "destinationCity": "San Francisco, CA",
        })
    };
    Some(vec![
        leg(1_700_000_000, 1_700_004_500),
        leg(1_699_913_600, 1_699_918_100),
    ])
}

pub fn last_track(ident: &str) -> Option<Vec<Value>> {
    if ident != "UAL123" {
        return None;
    }
    let point = |timestamp: i64, latitude: f64, longitude: f64, groundspeed: i64, altitude: i64| {
        json!({
            "timestamp": timestamp,
            "latitude": latitude,
            "longitude": longitude,
            "groundspeed": groundspeed,
            "altitude": altitude,
            "altitudeStatus": "",
            "updateType": "TZ",
            "altitudeChange": "",
        })
    };
    Some(vec![
        point(1_700_000_060, 33.9501, -118.4202, 160, 12),
        point(1_700_002_000, 35.7810, -120.3011, 452, 340),
        point(1_700_004_300, 37.5902, -122.3516, 142, 15),
    ])
}

pub fn in_flight(ident: &str) -> Option<Value> {
    if ident != "SWA100" {
        return None;
    }
    Some(json!({
        "faFlightID": "SWA100-1699900000-airline-0001",
        "ident": "SWA100",
        "prefix": "",
        "type": "B737",
        "suffix": "",
        "origin": "KSFO",
        "destination": "KLAX",
        "timeout": "ok",
        "timestamp": 1_700_007_800,
        "departureTime": 1_700_006_000,
        "firstPositionTime": 1_700_005_900,
        "arrivalTime": 0,
        "longitude": -120.61,
        "latitude": 35.51,
        "lowLongitude": -122.38,
        "lowLatitude": 35.51,
        "highLongitude": -120.61,
        "highLatitude": 37.62,
        "groundspeed": 455,
        "altitude": 360,
        "heading": 141,
        "altitudeStatus": "",
        "updateType": "TA",
        "altitudeChange": "",
        "waypoints": "37.62 -122.38 35.51 -120.61",
    }))
}

pub fn metar_reports(airport: &str) -> Vec<Value> {
    if airport != "KSFO" {
        return Vec::new();
    }
    [
        (1_700_000_000, 12, 9, "KSFO 142156Z 29012KT 10SM FEW008 12/09 A3002"),
        (1_700_003_600, 13, 9, "KSFO 142256Z 29014KT 10SM FEW010 13/09 A3001"),
        (1_700_007_200, 14, 8, "KSFO 142356Z 30016G22KT 10SM CLR 14/08 A3000"),
    ]
    .into_iter()
    .map(|(time, temp_air, temp_dewpoint, raw)| {
        json!({
            "airport": "KSFO",
            "time": time,
            "cloud_friendly": "Few clouds",
            "cloud_altitude": 800,
            "cloud_type": "FEW",
            "conditions": "",
            "pressure": 30.01,
            "temp_air": temp_air,
            "temp_dewpoint": temp_dewpoint,
            "temp_relhum": 81,
            "visibility": 10.0,
            "wind_friendly": "Windy",
            "wind_direction": 290,
            "wind_speed": 12,
            "wind_speed_gust": 0,
            "raw_data": raw,
        })
    })
    .collect()
}
