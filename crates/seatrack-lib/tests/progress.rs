mod common;

use chrono::Duration;
use seatrack_lib::{estimate_arrival, EtaEngine, Route, AVERAGE_SPEED_KNOTS};

use common::{departure, now};

fn engine() -> EtaEngine {
    EtaEngine::default()
}

#[test]
fn total_distance_is_order_sensitive() {
    let engine = engine();
    let forward = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let reversed = Route::new(["Colombo", "Singapore", "Mumbai"]).unwrap();

    assert_eq!(
        engine.total_distance(&forward),
        engine.lookup("Mumbai", "Singapore") + engine.lookup("Singapore", "Colombo")
    );
    assert_eq!(engine.total_distance(&forward), 3000.0);
    // Colombo-Singapore is listed, Singapore-Mumbai is not.
    assert_eq!(engine.total_distance(&reversed), 2200.0);
}

#[test]
fn mumbai_singapore_colombo_takes_166_67_hours() {
    let engine = engine();
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let progress = engine
        .compute_progress_at(&route, "Mumbai", departure(), now())
        .expect("progress");

    assert_eq!(progress.total_distance, 3000.0);
    let hours = progress.total_distance / AVERAGE_SPEED_KNOTS;
    assert!((hours - 166.67).abs() < 0.01);
    assert_eq!(progress.total_hours, 167.0);
}

#[test]
fn unlisted_pair_uses_default_distance() {
    let route = Route::new(["Mumbai", "Dubai"]).unwrap();
    assert_eq!(engine().total_distance(&route), 1000.0);
}

#[test]
fn arrival_offset_equals_distance_over_speed() {
    for distance in [0.0, 20.0, 1000.0, 3000.0, 6500.0] {
        let arrival = estimate_arrival(distance, departure(), AVERAGE_SPEED_KNOTS).unwrap();
        let expected_secs = distance * 3600.0 / AVERAGE_SPEED_KNOTS;
        let elapsed = arrival - departure();
        assert_eq!(
            elapsed.num_nanoseconds(),
            Some((expected_secs * 1e9).round() as i64),
            "distance {distance}"
        );
    }
}

#[test]
fn arrival_keeps_sub_hour_precision() {
    // 20 nm at 18 kn is 1h 6m 40s.
    let arrival = estimate_arrival(20.0, departure(), AVERAGE_SPEED_KNOTS).unwrap();
    assert_eq!(arrival - departure(), Duration::seconds(4000));
}

#[test]
fn at_origin_nothing_is_complete() {
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let progress = engine()
        .compute_progress_at(&route, "Mumbai", departure(), now())
        .unwrap();

    assert_eq!(progress.completed_segments, 0);
    assert_eq!(progress.percent_complete, 0.0);
    assert_eq!(progress.remaining_distance, progress.total_distance);
    assert_eq!(
        progress.remaining_eta,
        Some(now() + Duration::seconds(600_000))
    );
}

#[test]
fn at_destination_everything_is_complete() {
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let progress = engine()
        .compute_progress_at(&route, "Colombo", departure(), now())
        .unwrap();

    assert_eq!(progress.completed_segments, route.port_count() - 1);
    assert_eq!(progress.percent_complete, 100.0);
    assert_eq!(progress.remaining_eta, None);
    assert_eq!(progress.remaining_distance, 0.0);
    assert!(progress.has_arrived());
}

#[test]
fn location_off_route_yields_no_remaining_eta() {
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let progress = engine()
        .compute_progress_at(&route, "Hamburg", departure(), now())
        .expect("off-route location is not an error");

    assert_eq!(progress.remaining_eta, None);
    assert_eq!(progress.current_index, None);
}

#[test]
fn total_eta_ignores_now() {
    let engine = engine();
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let early = engine
        .compute_progress_at(&route, "Singapore", departure(), now())
        .unwrap();
    let later = engine
        .compute_progress_at(&route, "Singapore", departure(), now() + Duration::days(2))
        .unwrap();

    assert_eq!(early.total_eta, later.total_eta);
    assert_eq!(
        later.remaining_eta.unwrap() - early.remaining_eta.unwrap(),
        Duration::days(2)
    );
}

#[test]
fn wall_clock_progress_is_in_the_future() {
    let engine = engine();
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let before = chrono::Utc::now();
    let progress = engine
        .compute_progress(&route, "Singapore", departure())
        .unwrap();

    let eta = progress.remaining_eta.expect("still sailing");
    assert!(eta >= before + Duration::seconds(240_000));
}

#[test]
fn progress_serializes_with_rfc3339_timestamps() {
    let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
    let progress = engine()
        .compute_progress_at(&route, "Colombo", departure(), now())
        .unwrap();
    let value = serde_json::to_value(&progress).expect("serialize");

    assert_eq!(value["completed_segments"], 2);
    assert!(value["remaining_eta"].is_null());
    let total_eta = value["total_eta"].as_str().expect("string timestamp");
    assert!(total_eta.starts_with("2025-07-08T"));
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(2));
}
