//! Synchronous API client core for the FlightXML2 flight-data service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The `flightxml` crate
//! executes the round-trip; tests can do the same with any HTTP library.
//!
//! # Design
//! - `FlightXmlClient` is stateless: endpoint plus precomputed auth header.
//! - Each operation is a `FlightRequest` that knows its wire name, its query
//!   parameters and how to decode its payload.
//! - `unwrap_envelope` is the one place response bodies are interpreted.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod operation;
pub mod query;
pub mod request;
pub mod types;

pub use client::FlightXmlClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use envelope::unwrap_envelope;
pub use error::{ApiError, ConfigError};
pub use http::{HttpRequest, HttpResponse};
pub use operation::Operation;
pub use query::{QueryParams, QueryValue};
pub use request::{
    AircraftTypeRequest, AirlineInfoRequest, AirportBoard, AirportBoardRequest, AirportInfoRequest, CodeList,
    CountAirportOperationsRequest, CountAllEnrouteAirlineOperationsRequest, FleetBoard, FleetBoardRequest,
    FlightFilter, FlightInfoRequest, FlightRequest, GetLastTrackRequest, InFlightInfoRequest, LatLongsRequest,
    Measure, MetarExRequest,
};
pub use types::{
    AircraftType, AirlineEnrouteCount, AirlineInfo, AirportInfo, AirportOperationCounts, FlightDetail,
    FlightSummary, InFlightInfo, MetarReport, Page, TrackPoint,
};
