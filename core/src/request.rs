//! Typed requests, one per operation family.
//!
//! A `FlightRequest` knows which operation it targets, how its fields map to
//! query parameters, and how the unwrapped payload turns into its output.
//! Operations that share a parameter list and payload shape (the four
//! airport boards, the two fleet boards, the two lat/long measures) share a
//! request type keyed by a small enum.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::DATA_KEY;
use crate::error::ApiError;
use crate::operation::Operation;
use crate::query::QueryParams;
use crate::types::{
    AircraftType, AirlineEnrouteCount, AirlineInfo, AirportInfo, AirportOperationCounts,
    FlightDetail, FlightSummary, InFlightInfo, MetarReport, Page, TrackPoint,
};

pub trait FlightRequest {
    type Output: DeserializeOwned;

    fn operation(&self) -> Operation;

    fn query(&self) -> QueryParams;

    /// Field of the payload holding the actual result, if nested.
    fn sub_key(&self) -> Option<&'static str> {
        None
    }

    fn decode(&self, payload: Value) -> Result<Self::Output, ApiError> {
        Ok(serde_json::from_value(payload)?)
    }
}

/// Restricts an airport board to one class of traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightFilter {
    Airline,
    GeneralAviation,
}

impl FlightFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            FlightFilter::Airline => "airline",
            FlightFilter::GeneralAviation => "ga",
        }
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AircraftTypeRequest {
    pub aircraft_type: String,
}

impl FlightRequest for AircraftTypeRequest {
    type Output = AircraftType;

    fn operation(&self) -> Operation {
        Operation::AircraftType
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("type", &self.aircraft_type);
        q
    }
}

#[derive(Debug, Clone)]
pub struct AirlineInfoRequest {
    pub airline_code: String,
}

impl FlightRequest for AirlineInfoRequest {
    type Output = AirlineInfo;

    fn operation(&self) -> Operation {
        Operation::AirlineInfo
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("airlineCode", &self.airline_code);
        q
    }
}

#[derive(Debug, Clone)]
pub struct AirportInfoRequest {
    pub airport_code: String,
}

impl FlightRequest for AirportInfoRequest {
    type Output = AirportInfo;

    fn operation(&self) -> Operation {
        Operation::AirportInfo
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("airportCode", &self.airport_code);
        q
    }
}

/// `AllAirlines` / `AllAirports`: code lists nested under `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeList {
    Airlines,
    Airports,
}

impl FlightRequest for CodeList {
    type Output = Vec<String>;

    fn operation(&self) -> Operation {
        match self {
            CodeList::Airlines => Operation::AllAirlines,
            CodeList::Airports => Operation::AllAirports,
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    fn sub_key(&self) -> Option<&'static str> {
        Some(DATA_KEY)
    }
}

// ---------------------------------------------------------------------------
// Airport and fleet boards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportBoard {
    Arrived,
    Departed,
    Enroute,
    Scheduled,
}

#[derive(Debug, Clone)]
pub struct AirportBoardRequest {
    pub board: AirportBoard,
    pub airport: String,
    pub how_many: Option<u32>,
    pub filter: Option<FlightFilter>,
    pub offset: Option<u32>,
}

impl FlightRequest for AirportBoardRequest {
    type Output = Page<FlightSummary>;

    fn operation(&self) -> Operation {
        match self.board {
            AirportBoard::Arrived => Operation::Arrived,
            AirportBoard::Departed => Operation::Departed,
            AirportBoard::Enroute => Operation::Enroute,
            AirportBoard::Scheduled => Operation::Scheduled,
        }
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("airport", &self.airport)
            .push_opt("howMany", self.how_many)
            .push_opt("filter", self.filter.map(FlightFilter::as_str))
            .push("offset", self.offset.unwrap_or(0));
        q
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetBoard {
    Arrived,
    Scheduled,
}

#[derive(Debug, Clone)]
pub struct FleetBoardRequest {
    pub board: FleetBoard,
    pub fleet: String,
    pub how_many: Option<u32>,
    pub offset: Option<u32>,
}

impl FlightRequest for FleetBoardRequest {
    type Output = Page<FlightSummary>;

    fn operation(&self) -> Operation {
        match self.board {
            FleetBoard::Arrived => Operation::FleetArrived,
            FleetBoard::Scheduled => Operation::FleetScheduled,
        }
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("fleet", &self.fleet)
            .push_opt("howMany", self.how_many)
            .push("offset", self.offset.unwrap_or(0));
        q
    }
}

#[derive(Debug, Clone)]
pub struct CountAirportOperationsRequest {
    pub airport: String,
}

impl FlightRequest for CountAirportOperationsRequest {
    type Output = AirportOperationCounts;

    fn operation(&self) -> Operation {
        Operation::CountAirportOperations
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("airport", &self.airport);
        q
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountAllEnrouteAirlineOperationsRequest;

impl FlightRequest for CountAllEnrouteAirlineOperationsRequest {
    type Output = Vec<AirlineEnrouteCount>;

    fn operation(&self) -> Operation {
        Operation::CountAllEnrouteAirlineOperations
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
    }
}

// ---------------------------------------------------------------------------
// Per-flight lookups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FlightInfoRequest {
    pub ident: String,
    pub how_many: Option<u32>,
}

impl FlightRequest for FlightInfoRequest {
    type Output = Page<FlightDetail>;

    fn operation(&self) -> Operation {
        Operation::FlightInfo
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("ident", &self.ident).push_opt("howMany", self.how_many);
        q
    }
}

#[derive(Debug, Clone)]
pub struct GetLastTrackRequest {
    pub ident: String,
}

impl FlightRequest for GetLastTrackRequest {
    type Output = Vec<TrackPoint>;

    fn operation(&self) -> Operation {
        Operation::GetLastTrack
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("ident", &self.ident);
        q
    }
}

#[derive(Debug, Clone)]
pub struct InFlightInfoRequest {
    pub ident: String,
}

impl FlightRequest for InFlightInfoRequest {
    type Output = InFlightInfo;

    fn operation(&self) -> Operation {
        Operation::InFlightInfo
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("ident", &self.ident);
        q
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Great-circle distance in statute miles.
    Distance,
    /// Initial true heading in degrees.
    Heading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLongsRequest {
    pub measure: Measure,
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

impl FlightRequest for LatLongsRequest {
    type Output = i64;

    fn operation(&self) -> Operation {
        match self.measure {
            Measure::Distance => Operation::LatLongsToDistance,
            Measure::Heading => Operation::LatLongsToHeading,
        }
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("lat1", self.lat1)
            .push("lon1", self.lon1)
            .push("lat2", self.lat2)
            .push("lon2", self.lon2);
        q
    }

    /// Truncates toward zero; 142.9 becomes 142.
    fn decode(&self, payload: Value) -> Result<i64, ApiError> {
        let value = payload.as_f64().ok_or_else(|| {
            ApiError::UnexpectedEnvelope(format!("{} returned a non-numeric payload", self.operation()))
        })?;
        Ok(value.trunc() as i64)
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MetarExRequest {
    pub airport: String,
    /// Only reports issued at or after this UNIX time.
    pub start_time: Option<i64>,
    pub how_many: Option<u32>,
    pub offset: Option<u32>,
}

impl FlightRequest for MetarExRequest {
    type Output = Page<MetarReport>;

    fn operation(&self) -> Operation {
        Operation::MetarEx
    }

    fn query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push("airport", &self.airport)
            .push_opt("startTime", self.start_time)
            .push_opt("howMany", self.how_many)
            .push("offset", self.offset.unwrap_or(0));
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryValue;
    use serde_json::json;

    fn board(how_many: Option<u32>, filter: Option<FlightFilter>, offset: Option<u32>) -> AirportBoardRequest {
        AirportBoardRequest {
            board: AirportBoard::Arrived,
            airport: "KSFO".to_string(),
            how_many,
            filter,
            offset,
        }
    }

    #[test]
    fn board_omits_unset_optionals_but_sends_offset() {
        let q = board(None, None, None).query();
        assert_eq!(q.get("airport"), Some(&QueryValue::Str("KSFO".to_string())));
        assert!(!q.contains("howMany"));
        assert!(!q.contains("filter"));
        assert_eq!(q.get("offset"), Some(&QueryValue::Int(0)));
    }

    #[test]
    fn board_sends_supplied_optionals_verbatim() {
        let q = board(Some(15), Some(FlightFilter::GeneralAviation), Some(30)).query();
        assert_eq!(q.get("howMany"), Some(&QueryValue::Int(15)));
        assert_eq!(q.get("filter"), Some(&QueryValue::Str("ga".to_string())));
        assert_eq!(q.get("offset"), Some(&QueryValue::Int(30)));
    }

    #[test]
    fn board_kind_selects_operation() {
        let mut req = board(None, None, None);
        req.board = AirportBoard::Enroute;
        assert_eq!(req.operation(), Operation::Enroute);
    }

    #[test]
    fn fleet_board_defaults_offset() {
        let req = FleetBoardRequest {
            board: FleetBoard::Scheduled,
            fleet: "UAL".to_string(),
            how_many: None,
            offset: None,
        };
        assert_eq!(req.operation(), Operation::FleetScheduled);
        let q = req.query();
        assert!(!q.contains("howMany"));
        assert_eq!(q.get("offset"), Some(&QueryValue::Int(0)));
    }

    #[test]
    fn flight_info_has_no_offset() {
        let q = FlightInfoRequest {
            ident: "UAL123".to_string(),
            how_many: None,
        }
        .query();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn metar_start_time_is_optional() {
        let mut req = MetarExRequest {
            airport: "KSFO".to_string(),
            start_time: None,
            how_many: None,
            offset: None,
        };
        assert!(!req.query().contains("startTime"));
        req.start_time = Some(1_700_000_000);
        assert_eq!(req.query().get("startTime"), Some(&QueryValue::Int(1_700_000_000)));
    }

    #[test]
    fn code_lists_unwrap_data() {
        assert_eq!(CodeList::Airports.sub_key(), Some("data"));
        assert_eq!(CodeList::Airlines.operation(), Operation::AllAirlines);
    }

    fn measure(measure: Measure) -> LatLongsRequest {
        LatLongsRequest {
            measure,
            lat1: 37.6188,
            lon1: -122.375,
            lat2: 33.9425,
            lon2: -118.408,
        }
    }

    #[test]
    fn lat_longs_truncates_instead_of_rounding() {
        assert_eq!(measure(Measure::Distance).decode(json!(142.9)).unwrap(), 142);
        assert_eq!(measure(Measure::Heading).decode(json!(359.99)).unwrap(), 359);
    }

    #[test]
    fn lat_longs_accepts_integer_payload() {
        assert_eq!(measure(Measure::Distance).decode(json!(337)).unwrap(), 337);
    }

    #[test]
    fn lat_longs_truncates_negative_toward_zero() {
        assert_eq!(measure(Measure::Heading).decode(json!(-12.7)).unwrap(), -12);
    }

    #[test]
    fn lat_longs_rejects_non_numeric() {
        let err = measure(Measure::Distance).decode(json!("far")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedEnvelope(_)));
    }

    #[test]
    fn lat_longs_sends_all_coordinates() {
        let rendered: Vec<_> = measure(Measure::Heading).query().iter().collect();
        assert_eq!(
            rendered,
            vec![
                ("lat1", "37.6188".to_string()),
                ("lon1", "-122.375".to_string()),
                ("lat2", "33.9425".to_string()),
                ("lon2", "-118.408".to_string()),
            ]
        );
    }

    #[test]
    fn default_decode_rejects_wrong_shape() {
        let err = AirportInfoRequest {
            airport_code: "KSFO".to_string(),
        }
        .decode(json!([1, 2, 3]))
        .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn aircraft_type_sends_type_and_maps_model() {
        let req = AircraftTypeRequest {
            aircraft_type: "B738".to_string(),
        };
        assert_eq!(req.query().get("type"), Some(&QueryValue::Str("B738".to_string())));

        let decoded = req
            .decode(json!({"manufacturer": "Boeing", "type": "737-800", "description": "twin-jet"}))
            .unwrap();
        assert_eq!(decoded.model, "737-800");
    }
}
