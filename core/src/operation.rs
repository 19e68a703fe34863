//! Catalogue of remote operations and their wire names.

use std::fmt;

/// One named remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AircraftType,
    AirlineInfo,
    AirportInfo,
    AllAirlines,
    AllAirports,
    Arrived,
    Departed,
    Enroute,
    Scheduled,
    CountAirportOperations,
    CountAllEnrouteAirlineOperations,
    FleetArrived,
    FleetScheduled,
    FlightInfo,
    GetLastTrack,
    InFlightInfo,
    LatLongsToDistance,
    LatLongsToHeading,
    MetarEx,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::AircraftType => "AircraftType",
            Operation::AirlineInfo => "AirlineInfo",
            Operation::AirportInfo => "AirportInfo",
            Operation::AllAirlines => "AllAirlines",
            Operation::AllAirports => "AllAirports",
            Operation::Arrived => "Arrived",
            Operation::Departed => "Departed",
            Operation::Enroute => "Enroute",
            Operation::Scheduled => "Scheduled",
            Operation::CountAirportOperations => "CountAirportOperations",
            Operation::CountAllEnrouteAirlineOperations => "CountAllEnrouteAirlineOperations",
            Operation::FleetArrived => "FleetArrived",
            Operation::FleetScheduled => "FleetScheduled",
            Operation::FlightInfo => "FlightInfo",
            Operation::GetLastTrack => "GetLastTrack",
            Operation::InFlightInfo => "InFlightInfo",
            Operation::LatLongsToDistance => "LatLongsToDistance",
            Operation::LatLongsToHeading => "LatLongsToHeading",
            Operation::MetarEx => "MetarEx",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
