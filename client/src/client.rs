//! Blocking FlightXML client.
//!
//! # Design
//! `FlightXml` pairs the I/O-free `FlightXmlClient` with a `ureq::Agent`
//! that is created on the first call and reused afterwards. The agent is
//! configured to hand back 4xx/5xx responses as data, so status handling
//! stays in one place (`flightxml_core::unwrap_envelope`).
//!
//! `ureq::Agent` is `Send + Sync`, and so is `FlightXml`; one instance can
//! serve concurrent callers.

use std::sync::OnceLock;

use flightxml_core::{
    AircraftType, AircraftTypeRequest, AirlineEnrouteCount, AirlineInfo, AirlineInfoRequest, AirportBoard,
    AirportBoardRequest, AirportInfo, AirportInfoRequest, AirportOperationCounts, CodeList, Config,
    CountAirportOperationsRequest, CountAllEnrouteAirlineOperationsRequest, FleetBoard, FleetBoardRequest,
    FlightDetail, FlightFilter, FlightInfoRequest, FlightRequest, FlightSummary, FlightXmlClient,
    GetLastTrackRequest, HttpRequest, HttpResponse, InFlightInfo, InFlightInfoRequest, LatLongsRequest, Measure,
    MetarExRequest, MetarReport, Page, QueryParams, TrackPoint,
};
use serde_json::Value;

use crate::error::Result;

pub struct FlightXml {
    core: FlightXmlClient,
    agent: OnceLock<ureq::Agent>,
}

impl FlightXml {
    pub fn new(config: &Config) -> Self {
        Self {
            core: FlightXmlClient::new(config),
            agent: OnceLock::new(),
        }
    }

    /// Build from `FLIGHTAWARE_USERNAME` / `FLIGHTAWARE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&Config::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    fn agent(&self) -> &ureq::Agent {
        self.agent.get_or_init(|| {
            tracing::debug!(base_url = %self.core.base_url(), "creating HTTP agent");
            ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent()
        })
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut call = self.agent().get(&request.url);
        for (name, value) in &request.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        let mut response = call.call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, headers, body })
    }

    /// Run any typed request through the shared build/send/parse path.
    pub fn execute<R: FlightRequest>(&self, request: &R) -> Result<R::Output> {
        let operation = request.operation();
        let http = self.core.build(request)?;
        let response = self.send(http)?;
        log_response(operation.name(), &response);
        self.core.parse(request, response).map_err(|e| {
            if e.is_remote() {
                tracing::warn!(%operation, error = %e, "FlightXML rejected request");
            }
            e.into()
        })
    }

    /// Call an operation by name and return the unwrapped JSON payload.
    pub fn call_raw(&self, operation: &str, query: &QueryParams, sub_key: Option<&str>) -> Result<Value> {
        let http = self.core.build_raw(operation, query)?;
        let response = self.send(http)?;
        log_response(operation, &response);
        Ok(self.core.parse_raw(response, sub_key)?)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Manufacturer, model and description for an ICAO type code (`B738`).
    pub fn aircraft_type(&self, aircraft_type: &str) -> Result<AircraftType> {
        self.execute(&AircraftTypeRequest {
            aircraft_type: aircraft_type.to_string(),
        })
    }

    pub fn airline_info(&self, airline_code: &str) -> Result<AirlineInfo> {
        self.execute(&AirlineInfoRequest {
            airline_code: airline_code.to_string(),
        })
    }

    pub fn airport_info(&self, airport_code: &str) -> Result<AirportInfo> {
        self.execute(&AirportInfoRequest {
            airport_code: airport_code.to_string(),
        })
    }

    /// ICAO codes of every known airline.
    pub fn all_airlines(&self) -> Result<Vec<String>> {
        self.execute(&CodeList::Airlines)
    }

    /// ICAO codes of every known airport.
    pub fn all_airports(&self) -> Result<Vec<String>> {
        self.execute(&CodeList::Airports)
    }

    // -----------------------------------------------------------------------
    // Airport boards
    // -----------------------------------------------------------------------

    /// Flights that recently landed at `airport`. `offset` defaults to 0.
    pub fn arrived(
        &self,
        airport: &str,
        how_many: Option<u32>,
        filter: Option<FlightFilter>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.board(AirportBoard::Arrived, airport, how_many, filter, offset)
    }

    pub fn departed(
        &self,
        airport: &str,
        how_many: Option<u32>,
        filter: Option<FlightFilter>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.board(AirportBoard::Departed, airport, how_many, filter, offset)
    }

    /// Flights airborne and bound for `airport`.
    pub fn enroute(
        &self,
        airport: &str,
        how_many: Option<u32>,
        filter: Option<FlightFilter>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.board(AirportBoard::Enroute, airport, how_many, filter, offset)
    }

    pub fn scheduled(
        &self,
        airport: &str,
        how_many: Option<u32>,
        filter: Option<FlightFilter>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.board(AirportBoard::Scheduled, airport, how_many, filter, offset)
    }

    fn board(
        &self,
        board: AirportBoard,
        airport: &str,
        how_many: Option<u32>,
        filter: Option<FlightFilter>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.execute(&AirportBoardRequest {
            board,
            airport: airport.to_string(),
            how_many,
            filter,
            offset,
        })
    }

    pub fn count_airport_operations(&self, airport: &str) -> Result<AirportOperationCounts> {
        self.execute(&CountAirportOperationsRequest {
            airport: airport.to_string(),
        })
    }

    /// Number of airborne flights per airline, worldwide.
    pub fn count_all_enroute_airline_operations(&self) -> Result<Vec<AirlineEnrouteCount>> {
        self.execute(&CountAllEnrouteAirlineOperationsRequest)
    }

    // -----------------------------------------------------------------------
    // Fleet boards
    // -----------------------------------------------------------------------

    pub fn fleet_arrived(&self, fleet: &str, how_many: Option<u32>, offset: Option<u32>) -> Result<Page<FlightSummary>> {
        self.fleet(FleetBoard::Arrived, fleet, how_many, offset)
    }

    pub fn fleet_scheduled(
        &self,
        fleet: &str,
        how_many: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.fleet(FleetBoard::Scheduled, fleet, how_many, offset)
    }

    fn fleet(
        &self,
        board: FleetBoard,
        fleet: &str,
        how_many: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<FlightSummary>> {
        self.execute(&FleetBoardRequest {
            board,
            fleet: fleet.to_string(),
            how_many,
            offset,
        })
    }

    // -----------------------------------------------------------------------
    // Individual flights
    // -----------------------------------------------------------------------

    /// Recent and upcoming flights flown under `ident`.
    pub fn flight_info(&self, ident: &str, how_many: Option<u32>) -> Result<Page<FlightDetail>> {
        self.execute(&FlightInfoRequest {
            ident: ident.to_string(),
            how_many,
        })
    }

    pub fn get_last_track(&self, ident: &str) -> Result<Vec<TrackPoint>> {
        self.execute(&GetLastTrackRequest {
            ident: ident.to_string(),
        })
    }

    pub fn in_flight_info(&self, ident: &str) -> Result<InFlightInfo> {
        self.execute(&InFlightInfoRequest {
            ident: ident.to_string(),
        })
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Great-circle distance in statute miles, truncated toward zero.
    pub fn lat_longs_to_distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<i64> {
        self.execute(&LatLongsRequest {
            measure: Measure::Distance,
            lat1,
            lon1,
            lat2,
            lon2,
        })
    }

    /// Initial heading in degrees, truncated toward zero.
    pub fn lat_longs_to_heading(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<i64> {
        self.execute(&LatLongsRequest {
            measure: Measure::Heading,
            lat1,
            lon1,
            lat2,
            lon2,
        })
    }

    // -----------------------------------------------------------------------
    // Weather
    // -----------------------------------------------------------------------

    pub fn metar_ex(
        &self,
        airport: &str,
        start_time: Option<i64>,
        how_many: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page<MetarReport>> {
        self.execute(&MetarExRequest {
            airport: airport.to_string(),
            start_time,
            how_many,
            offset,
        })
    }
}

fn log_response(operation: &str, response: &HttpResponse) {
    let content_type = response.header("content-type").unwrap_or_default();
    tracing::debug!(%operation, status = response.status, content_type, "response received");
    if response.status < 500 && !content_type.contains("json") {
        tracing::warn!(%operation, status = response.status, content_type, "non-JSON response body");
    }
}

impl std::fmt::Debug for FlightXml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightXml")
            .field("core", &self.core)
            .field("agent_ready", &self.agent.get().is_some())
            .finish()
    }
}
