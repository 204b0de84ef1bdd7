use std::process::ExitCode;

use kdmap::{MapError, Point, SpatialMap};
use tracing::{error, info, Level};

#[derive(Default)]
struct Checks {
    passed: usize,
    failed: usize,
}

impl Checks {
    fn check(&mut self, condition: bool, message: &str) {
        if condition {
            self.passed += 1;
            info!("PASS: {}", message);
        } else {
            self.failed += 1;
            error!("FAIL: {}", message);
        }
    }
}

fn unit_cube_4d() -> Vec<[f64; 4]> {
    (0..16u8)
        .map(|i| {
            [
                f64::from((i >> 3) & 1),
                f64::from((i >> 2) & 1),
                f64::from((i >> 1) & 1),
                f64::from(i & 1),
            ]
        })
        .collect()
}

fn basic(checks: &mut Checks) {
    info!("Basic map");
    let mut map: SpatialMap<f64, usize, 3> = SpatialMap::new();

    checks.check(map.dimension() == 3, "Dimension is three.");
    checks.check(map.is_empty(), "New map is empty.");

    let data_points = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    for (i, p) in data_points.iter().enumerate() {
        map.insert(&Point::new(*p), i);
    }

    checks.check(map.size() == 3, "After adding three elements, size is three.");
    for (i, p) in data_points.iter().enumerate() {
        let point = Point::new(*p);
        checks.check(map.contains(&point), "New map has element.");
        checks.check(map.at(&point) == Ok(&i), "New map has correct value.");
    }
}

fn duplicates(checks: &mut Checks) {
    info!("Duplicate keys");
    let data_points = [
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0, 0.0],
    ];
    let mut map: SpatialMap<f64, usize, 4> = SpatialMap::new();
    for (i, p) in data_points.iter().enumerate() {
        map.insert(&Point::new(*p), i);
    }

    checks.check(map.size() == 4, "Map has the right number of elements (no duplicates).");
    checks.check(
        map.at(&Point::new(data_points[0])) == Ok(&2),
        "Insert overwrites old labels.",
    );
}

fn mutating(checks: &mut Checks) {
    info!("Get-or-create mutation");
    let mut map: SpatialMap<f64, usize, 3> = SpatialMap::new();
    let corners: Vec<[f64; 3]> = unit_cube_4d().iter().take(8).map(|p| [p[1], p[2], p[3]]).collect();

    for (i, p) in corners.iter().enumerate() {
        *map.get_or_insert_default(&Point::new(*p)) = i;
    }
    for p in corners.iter().step_by(2) {
        *map.get_or_insert_default(&Point::new(*p)) = 0;
    }

    checks.check(map.size() == 8, "Map has the right number of elements.");
    for (i, p) in corners.iter().enumerate() {
        let expected = if i % 2 == 0 { 0 } else { i };
        checks.check(
            *map.get_or_insert_default(&Point::new(*p)) == expected,
            "Values are correct after mutation.",
        );
    }
}

fn checked_access(checks: &mut Checks) {
    info!("Checked access");
    let empty: SpatialMap<f64, usize, 3> = SpatialMap::new();

    checks.check(
        matches!(empty.at(&Point::new([0.0, 0.0, 0.0])), Err(MapError::KeyNotFound(_))),
        "Lookup on an empty map reports a missing key.",
    );
}

fn nearest_neighbour(checks: &mut Checks) {
    info!("Nearest neighbour");
    let data_points = unit_cube_4d();
    let test_points = [
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.7],
        [0.0, 0.0, 0.9, 0.0],
        [0.0, 0.0, 0.6, 0.6],
        [0.0, 0.9, 0.0, 0.0],
        [0.0, 0.8, 0.0, 0.7],
        [0.0, 0.6, 0.7, -0.1],
        [-0.4, 0.7, 0.7, 0.7],
    ];

    let mut map: SpatialMap<f64, usize, 4> = SpatialMap::new();
    for (i, p) in data_points.iter().enumerate() {
        map.insert(&Point::new(*p), i);
    }

    for (i, p) in data_points.iter().enumerate() {
        checks.check(
            map.knn_vote(&Point::new(*p), 1) == Ok(&i),
            "Nearest neighbour of element is that element.",
        );
    }
    for (i, p) in test_points.iter().enumerate() {
        checks.check(
            map.knn_vote(&Point::new(*p), 1) == Ok(&i),
            "Test point yielded correct nearest neighbour.",
        );
    }
}

fn majority_vote(checks: &mut Checks) {
    info!("Majority vote");
    let labelled = [
        ([0.0, 0.0], 'a'),
        ([0.0, 0.5], 'b'),
        ([0.0, 1.0], 'a'),
        ([0.5, 0.0], 'b'),
        ([0.5, 0.5], 'a'),
        ([0.5, 1.0], 'b'),
        ([1.0, 0.0], 'b'),
        ([1.0, 0.5], 'b'),
        ([1.0, 1.0], 'b'),
    ];
    let map: SpatialMap<f64, char, 2> = labelled
        .iter()
        .map(|(p, label)| (Point::new(*p), *label))
        .collect();

    let cases = [
        ([0.0, 0.5], 4, 'a'),
        ([0.0, 0.5], 9, 'b'),
        ([0.5, 0.5], 5, 'b'),
        ([0.75, 0.75], 4, 'b'),
        ([10.0, 10.0], 9, 'b'),
        ([-10.0, -10.0], 9, 'b'),
        ([-10.0, -10.0], 25, 'b'),
    ];
    for (query, k, expected) in cases {
        checks.check(
            map.knn_vote(&Point::new(query), k) == Ok(&expected),
            "Nearest neighbours are correct.",
        );
    }
}

fn copies(checks: &mut Checks) {
    info!("Copies");
    let mut one: SpatialMap<f64, usize, 1> = SpatialMap::new();
    for i in 0..10 {
        *one.get_or_insert_default(&Point::new([(2 * i) as f64])) = i;
    }

    {
        let mut clone = one.clone();
        checks.check(clone.size() == one.size(), "Copy has the same number of elements.");
        for i in 0..10 {
            clone.insert(&Point::new([(2 * i + 1) as f64]), i);
        }
        checks.check(one.size() == 10, "Adding to the copy leaves the original alone.");
    }

    for i in 0..10 {
        checks.check(
            !one.contains(&Point::new([(2 * i + 1) as f64])),
            "After the copy is dropped, missing elements are still missing.",
        );
        checks.check(
            one.at(&Point::new([(2 * i) as f64])) == Ok(&i),
            "After the copy is dropped, original elements are still there.",
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let mut checks = Checks::default();

    basic(&mut checks);
    duplicates(&mut checks);
    mutating(&mut checks);
    checked_access(&mut checks);
    nearest_neighbour(&mut checks);
    majority_vote(&mut checks);
    copies(&mut checks);

    info!(passed = checks.passed, failed = checks.failed, "All checks completed");

    if checks.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
