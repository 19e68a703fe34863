//! Every `FlightXml` method end-to-end against the mock server.

use std::sync::Arc;

use flightxml::{
    AirportBoard, AirportBoardRequest, ApiError, Config, Error, FlightFilter, FlightXml, LatLongsRequest, Measure,
    QueryParams,
};

fn start_mock() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, "demo", "demo").await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client() -> FlightXml {
    let config = Config::new("demo", "demo").with_base_url(&start_mock()).unwrap();
    FlightXml::new(&config)
}

#[test]
fn lookups() {
    let c = client();

    let t = c.aircraft_type("B738").unwrap();
    assert_eq!(t.manufacturer, "Boeing");
    assert_eq!(t.model, "737-800");

    let airline = c.airline_info("UAL").unwrap();
    assert_eq!(airline.shortname, "United");

    let airport = c.airport_info("KSFO").unwrap();
    assert_eq!(airport.name, "San Francisco Intl");
    assert_eq!(airport.timezone, ":America/Los_Angeles");
    assert!((airport.latitude - 37.6188).abs() < 1e-9);

    let airlines = c.all_airlines().unwrap();
    assert_eq!(airlines, vec!["AAL", "DAL", "SWA", "UAL"]);

    let airports = c.all_airports().unwrap();
    assert!(airports.contains(&"KSFO".to_string()));
}

#[test]
fn airport_boards() {
    let c = client();

    let arrived = c.arrived("KSFO", None, None, None).unwrap();
    assert_eq!(arrived.items.len(), 4);
    assert_eq!(arrived.next_offset, -1);

    let first = c.arrived("KSFO", Some(2), None, None).unwrap();
    assert_eq!(first.next_offset, 2);
    let rest = c.arrived("KSFO", Some(2), None, Some(first.next_offset as u32)).unwrap();
    assert_eq!(rest.items.len(), 2);
    assert_eq!(rest.next_offset, -1);

    let airline_only = c.arrived("KSFO", None, Some(FlightFilter::Airline), None).unwrap();
    assert!(airline_only.items.iter().all(|f| !f.ident.starts_with('N')));
    assert_eq!(airline_only.items.len(), 3);

    let departed = c.departed("KSFO", None, None, None).unwrap();
    let idents: Vec<&str> = departed.items.iter().map(|f| f.ident.as_str()).collect();
    assert_eq!(idents, vec!["SWA100", "UAL900"]);

    let enroute = c.enroute("KSFO", None, None, None).unwrap();
    assert_eq!(enroute.items.len(), 1);
    assert_eq!(enroute.items[0].ident, "AAL55");
    assert_eq!(enroute.items[0].origin_city, "New York, NY");

    let scheduled = c.scheduled("KSFO", None, Some(FlightFilter::GeneralAviation), None).unwrap();
    assert_eq!(scheduled.items.len(), 1);
    assert_eq!(scheduled.items[0].ident, "N67890");

    let counts = c.count_airport_operations("KSFO").unwrap();
    assert_eq!(counts.enroute, 1);
    assert_eq!(counts.departed, 2);
    assert_eq!(counts.scheduled_departures, 2);
    assert_eq!(counts.scheduled_arrivals, 0);

    let per_airline = c.count_all_enroute_airline_operations().unwrap();
    let icaos: Vec<&str> = per_airline.iter().map(|c| c.icao.as_str()).collect();
    assert_eq!(icaos, vec!["AAL", "SWA", "UAL"]);
    assert!(per_airline.iter().all(|c| c.count == 1));
}

#[test]
fn fleet_boards() {
    let c = client();

    let arrived = c.fleet_arrived("UAL", None, None).unwrap();
    let idents: Vec<&str> = arrived.items.iter().map(|f| f.ident.as_str()).collect();
    assert_eq!(idents, vec!["UAL123", "UAL456"]);

    let one = c.fleet_arrived("UAL", Some(1), None).unwrap();
    assert_eq!(one.items.len(), 1);
    assert_eq!(one.next_offset, 1);

    let scheduled = c.fleet_scheduled("UAL", None, None).unwrap();
    assert_eq!(scheduled.items.len(), 1);
    assert_eq!(scheduled.items[0].destination, "KDEN");
}

#[test]
fn individual_flights() {
    let c = client();

    let info = c.flight_info("UAL123", None).unwrap();
    assert_eq!(info.items.len(), 2);
    assert_eq!(info.items[0].route, "SUMMR2 STOKD SERFR SERFR4");

    let latest = c.flight_info("UAL123", Some(1)).unwrap();
    assert_eq!(latest.items.len(), 1);
    assert_eq!(latest.next_offset, 1);

    let track = c.get_last_track("UAL123").unwrap();
    assert_eq!(track.len(), 3);
    assert_eq!(track[1].altitude, 340);
    assert_eq!(track[2].update_type, "TZ");

    let airborne = c.in_flight_info("SWA100").unwrap();
    assert_eq!(airborne.destination, "KLAX");
    assert_eq!(airborne.heading, 141);
}

#[test]
fn geometry_truncates() {
    let c = client();

    // 337.52 miles on the wire.
    let miles = c.lat_longs_to_distance(37.6188, -122.375, 33.9425, -118.408).unwrap();
    assert_eq!(miles, 337);

    // 137.62 degrees on the wire.
    let heading = c.lat_longs_to_heading(37.6188, -122.375, 33.9425, -118.408).unwrap();
    assert_eq!(heading, 137);
}

#[test]
fn weather() {
    let c = client();

    let all = c.metar_ex("KSFO", None, None, None).unwrap();
    assert_eq!(all.items.len(), 3);
    assert_eq!(all.next_offset, -1);

    let recent = c.metar_ex("KSFO", Some(1_700_003_600), Some(1), None).unwrap();
    assert_eq!(recent.items.len(), 1);
    assert_eq!(recent.items[0].time, 1_700_003_600);
    assert_eq!(recent.next_offset, 1);
}

#[test]
fn remote_errors() {
    let c = client();

    let err = c.flight_info("NOPE1", None).unwrap_err();
    assert_eq!(err.remote(), Some((400, "invalid ident")));

    let err = c.in_flight_info("NOPE1").unwrap_err();
    assert_eq!(err.remote(), Some((200, "unknown ident")));

    let err = c.get_last_track("NOPE1").unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Remote { status: 400, .. })));
}

#[test]
fn rejected_credentials() {
    let config = Config::new("demo", "not-the-key").with_base_url(&start_mock()).unwrap();
    let err = FlightXml::new(&config).airport_info("KSFO").unwrap_err();
    assert_eq!(err.remote().map(|(status, _)| status), Some(401));
}

#[test]
fn call_raw_returns_payload() {
    let c = client();

    let mut query = QueryParams::new();
    query.push("airportCode", "KLAX");
    let payload = c.call_raw("AirportInfo", &query, None).unwrap();
    assert_eq!(payload["name"], "Los Angeles Intl");

    let codes = c.call_raw("AllAirlines", &QueryParams::new(), Some("data")).unwrap();
    assert_eq!(codes[0], "AAL");

    let err = c.call_raw("Teleport", &QueryParams::new(), None).unwrap_err();
    assert_eq!(err.remote().map(|(status, _)| status), Some(404));
}

#[test]
fn execute_accepts_typed_requests() {
    let c = client();

    let page = c
        .execute(&AirportBoardRequest {
            board: AirportBoard::Departed,
            airport: "KSFO".to_string(),
            how_many: Some(1),
            filter: None,
            offset: None,
        })
        .unwrap();
    assert_eq!(page.items[0].ident, "SWA100");
    assert_eq!(page.next_offset, 1);

    let heading = c
        .execute(&LatLongsRequest {
            measure: Measure::Heading,
            lat1: 37.6188,
            lon1: -122.375,
            lat2: 33.9425,
            lon2: -118.408,
        })
        .unwrap();
    assert_eq!(heading, 137);
}

#[test]
fn shared_across_threads() {
    let c = Arc::new(client());
    let handles: Vec<_> = ["KSFO", "KLAX", "KJFK"]
        .into_iter()
        .map(|code| {
            let c = Arc::clone(&c);
            std::thread::spawn(move || c.airport_info(code).unwrap().name)
        })
        .collect();
    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, vec!["San Francisco Intl", "Los Angeles Intl", "John F Kennedy Intl"]);
}
