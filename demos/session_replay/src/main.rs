use argh::FromArgs;

use tapeline::anchors::{AnchorEvent, AnchorId, PlaneAnchorTracker};
use tapeline::geometry::WorldPoint;
use tapeline::measure::{MeasureSession, SessionStatus, TrackingState};

#[derive(FromArgs)]
/// Replay a canned measuring session and print each info label update
struct Args {
    /// number of canned taps to replay
    #[argh(option, short = 'n', default = "5")]
    taps: usize,
}

/// Rigid world transform with the hit position in the translation column.
fn hit_transform(x: f32, y: f32, z: f32) -> [[f32; 4]; 4] {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // The screen comes up before the first tracking callback.
    let mut status = SessionStatus::default();
    println!("[label] {status}");

    // Camera warms up while the user scans the room.
    for state in [
        TrackingState::NotAvailable,
        TrackingState::Limited,
        TrackingState::Normal,
    ] {
        status = state.into();
        println!("[label] {status}");
    }

    // Plane detection finds the floor and refines it as coverage grows.
    let mut planes = PlaneAnchorTracker::new();
    let floor = AnchorId::new("floor");
    let anchor_feed = [
        AnchorEvent::Added {
            id: floor.clone(),
            extent_x: 0.6,
            extent_z: 0.4,
            center: WorldPoint::new(0.0, -1.3, -0.2),
        },
        AnchorEvent::Updated {
            id: floor.clone(),
            extent_x: 1.8,
            extent_z: 1.1,
            center: WorldPoint::new(0.1, -1.31, -0.4),
        },
    ];
    for event in anchor_feed {
        planes.apply(event)?;
    }
    if let Some(rect) = planes.get(&floor) {
        println!(
            "[plane] floor {:.1} x {:.1} m at {:?}",
            rect.width, rect.height, rect.center
        );
    }

    // Ray-cast hits for each tap, in screen order.
    let tap_feed = [
        hit_transform(0.0, 0.0, 0.0),
        hit_transform(0.3048, 0.0, 0.0),
        hit_transform(0.3048, 0.0, 0.5),
        hit_transform(0.5080, 0.0, 0.5),
        hit_transform(0.5080, 0.0, 1.414),
    ];

    let mut session = MeasureSession::new();
    for transform in tap_feed.iter().take(args.taps) {
        let placement = session.place_point(WorldPoint::from_world_transform(transform));
        match placement.measurement {
            Some(measurement) => {
                status = SessionStatus::Distance(measurement.distance);
                println!("[label] {status}");
            }
            None => println!("[tap] first marker at {:?}", placement.point),
        }
    }

    let total: f64 = session.segments().map(|segment| segment.length()).sum();
    println!(
        "replayed {} markers, {} segments, {:.3} m end to end",
        session.len(),
        session.segments().count(),
        total
    );

    Ok(())
}
