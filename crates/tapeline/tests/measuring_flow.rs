use tapeline::anchors::{AnchorEvent, AnchorId, PlaneAnchorTracker};
use tapeline::geometry::WorldPoint;
use tapeline::measure::{MeasureSession, SessionState, SessionStatus, TrackingState};

/// Rigid world transform with the hit position in the translation column,
/// as delivered by a ray-cast against a detected plane.
fn hit_transform(x: f32, y: f32, z: f32) -> [[f32; 4]; 4] {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ]
}

#[test]
fn measuring_screen_walkthrough() -> Result<(), Box<dyn std::error::Error>> {
    // The screen comes up before the first tracking callback.
    let mut label = SessionStatus::default();
    assert_eq!(label.to_string(), "Loading...");

    // Camera warms up while the user scans the room.
    label = TrackingState::Limited.into();
    assert_eq!(label.to_string(), "Analyzing");
    label = TrackingState::Normal.into();
    assert_eq!(label.to_string(), "Ready");

    // The floor plane is detected and then refined as coverage grows.
    let mut planes = PlaneAnchorTracker::new();
    let floor = AnchorId::new("floor");
    planes.apply(AnchorEvent::Added {
        id: floor.clone(),
        extent_x: 0.6,
        extent_z: 0.4,
        center: WorldPoint::new(0.0, -1.3, -0.2),
    })?;
    planes.apply(AnchorEvent::Updated {
        id: floor.clone(),
        extent_x: 1.8,
        extent_z: 1.1,
        center: WorldPoint::new(0.1, -1.31, -0.4),
    })?;
    let rect = planes.get(&floor).expect("floor is tracked");
    assert_eq!(rect.width, 1.8);
    assert_eq!(rect.height, 1.1);

    // First tap drops a marker with nothing to measure against.
    let mut session = MeasureSession::new();
    let first =
        session.place_point(WorldPoint::from_world_transform(&hit_transform(0.0, 0.0, 0.0)));
    assert!(first.measurement.is_none());
    assert_eq!(session.state(), SessionState::Tracking);

    // Second tap lands one foot away and reads in inches.
    let second =
        session.place_point(WorldPoint::from_world_transform(&hit_transform(0.0, 0.0, 0.3048)));
    let measurement = second.measurement.expect("second tap measures");
    assert_eq!(measurement.label, "Distance: 12.000 inches");
    label = SessionStatus::Distance(measurement.distance);
    assert_eq!(label.to_string(), "Distance: 12.000 inches");

    // Third tap lands half a meter further and tips the readout into feet.
    let third =
        session.place_point(WorldPoint::from_world_transform(&hit_transform(0.0, 0.0, 0.8048)));
    let measurement = third.measurement.expect("third tap measures");
    assert_eq!(measurement.label, "Distance: 1.640 feet");
    assert_eq!(session.segments().count(), 2);

    // The plane goes away; a second removal for the same id stays silent.
    assert!(planes.apply(AnchorEvent::Removed { id: floor.clone() })?.is_some());
    assert!(planes.apply(AnchorEvent::Removed { id: floor })?.is_none());

    // Restarting the session drops every marker and tracked plane.
    session.clear();
    planes.clear();
    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(session.segments().count(), 0);
    assert!(planes.is_empty());

    Ok(())
}

#[test]
fn chained_taps_measure_consecutive_pairs() {
    let mut session = MeasureSession::new();

    let taps = [
        WorldPoint::new(0.0, 0.0, 0.0),
        WorldPoint::new(0.1016, 0.0, 0.0),
        WorldPoint::new(0.1016, 0.2032, 0.0),
    ];

    let mut labels = Vec::new();
    for tap in taps {
        if let Some(m) = session.place_point(tap).measurement {
            labels.push(m.label);
        }
    }

    // Each new marker measures against its direct predecessor only.
    assert_eq!(labels, vec!["Distance: 4.000 inches", "Distance: 8.000 inches"]);
}
