//! Blocking client for the FlightXML2 flight-data API.
//!
//! ```no_run
//! use flightxml::FlightXml;
//!
//! let client = FlightXml::from_env()?;
//! let page = client.arrived("KSFO", Some(10), None, None)?;
//! for flight in &page.items {
//!     println!("{} from {}", flight.ident, flight.origin);
//! }
//! let miles = client.lat_longs_to_distance(37.6188, -122.375, 33.9425, -118.408)?;
//! println!("{miles} mi");
//! # Ok::<(), flightxml::Error>(())
//! ```
//!
//! Request building and envelope parsing live in `flightxml-core`; this
//! crate only moves bytes.

pub mod client;
pub mod error;

pub use client::FlightXml;
pub use error::{Error, Result};
pub use flightxml_core::{
    AircraftType, AircraftTypeRequest, AirlineEnrouteCount, AirlineInfo, AirlineInfoRequest, AirportBoard,
    AirportBoardRequest, AirportInfo, AirportInfoRequest, AirportOperationCounts, ApiError, CodeList, Config,
    ConfigError, CountAirportOperationsRequest, CountAllEnrouteAirlineOperationsRequest, FleetBoard,
    FleetBoardRequest, FlightDetail, FlightFilter, FlightInfoRequest, FlightRequest, FlightSummary,
    GetLastTrackRequest, InFlightInfo, InFlightInfoRequest, LatLongsRequest, Measure, MetarExRequest, MetarReport,
    Operation, Page, QueryParams, QueryValue, TrackPoint,
};
