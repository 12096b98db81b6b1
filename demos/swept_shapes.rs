use std::f64::consts::FRAC_PI_2;
use swept_collide::{
    core::math::Vector2,
    core::traits::FuzzyEq,
    polygon,
    shapes::Pose,
    sweep::{circle_hits_point, circle_hits_polygon, polygons_collide},
};

fn main() {
    disk_sweeps();
    moving_polygons();
}

fn disk_sweeps() {
    println!("Testing swept disks...");

    // a disk of radius 2 moving from (-6,1) to (4,1) stops when its rim reaches (1,1)
    let hit = circle_hits_point(
        Vector2::new(1.0, 1.0),
        2.0,
        Vector2::new(-6.0, 1.0),
        Vector2::new(10.0, 0.0),
    )
    .expect("Disk path runs over the target point");
    assert!(
        hit.position.fuzzy_eq(Vector2::new(-1.0, 1.0)),
        "Disk should stop with its rim on the target"
    );
    assert!(
        hit.impact.fuzzy_eq(Vector2::new(1.0, 1.0)),
        "Impact should be the target point itself"
    );
    println!(
        "Disk vs point: stopped at ({}, {}) touching ({}, {})",
        hit.position.x, hit.position.y, hit.impact.x, hit.impact.y
    );

    // the same disk stops radius short of a polygon face
    let square = polygon![(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
    let hit = circle_hits_polygon(
        &square,
        0.3,
        Vector2::new(-5.0, 0.0),
        Vector2::new(20.0, 0.0),
    )
    .expect("Disk path runs into the square");
    assert!(
        hit.position.fuzzy_eq(Vector2::new(-1.3, 0.0)),
        "Disk should stop 0.3 short of the left face"
    );
    assert!(
        hit.impact.fuzzy_eq(Vector2::new(-1.0, 0.0)),
        "Impact should be on the left face"
    );
    let gap = (hit.position - hit.impact).length();
    assert!(gap.fuzzy_eq(0.3), "Gap at the stop should equal the radius");
    println!(
        "Disk vs square: stopped at ({}, {}), rim against the face at ({}, {})",
        hit.position.x, hit.position.y, hit.impact.x, hit.impact.y
    );

    // a disk that begins inside reports no travel at all
    let embedded = circle_hits_polygon(
        &square,
        0.3,
        Vector2::new(0.5, 0.0),
        Vector2::new(20.0, 0.0),
    )
    .expect("Embedded disk center always collides");
    assert!(
        embedded.position.fuzzy_eq(Vector2::new(0.5, 0.0)),
        "Embedded start should be reported in place"
    );
    println!("Disk vs square: embedded start reported in place");

    println!("Swept disk tests completed successfully!\n");
}

fn moving_polygons() {
    println!("Testing moving polygons...");

    let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
    let square = polygon![(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

    // the triangle, rotated a quarter turn and sitting below the square, sweeps straight up
    let start_pose = Pose::new(Vector2::new(0.0, -5.0), FRAC_PI_2);
    let delta = Vector2::new(0.0, 10.0);
    let contact = polygons_collide(&triangle, start_pose, &square, Pose::identity(), delta)
        .expect("Upward sweep runs into the square");
    assert!(
        contact.position.fuzzy_eq(Vector2::new(0.0, -3.0)),
        "Triangle should stop when its top vertex reaches the square"
    );
    assert!(
        contact.impact.fuzzy_eq(Vector2::new(0.0, -1.0)),
        "Contact should be on the square bottom face"
    );
    assert!(
        contact.normal.dot(delta) < 0.0,
        "Contact normal should oppose the motion"
    );

    let travelled = (contact.position - start_pose.position).length();
    assert!(travelled.fuzzy_eq(2.0), "Only 2 of the 10 units should be used");
    println!(
        "Moving triangle: travelled {} of {} units, contact at ({}, {})",
        travelled,
        delta.length(),
        contact.impact.x,
        contact.impact.y
    );

    // sweeping the other way never connects
    assert!(
        polygons_collide(
            &triangle,
            start_pose,
            &square,
            Pose::identity(),
            Vector2::new(0.0, -10.0)
        )
        .is_none(),
        "Downward sweep should miss"
    );
    println!("Moving triangle: sweeping away misses");

    // overlapping placements collide without any travel
    let overlap = polygons_collide(
        &triangle,
        Pose::identity(),
        &square,
        Pose::identity(),
        Vector2::new(1.0, 0.0),
    )
    .expect("Overlapping start always collides");
    assert!(
        overlap.position.fuzzy_eq(Vector2::new(0.0, 0.0)),
        "Overlapping start should not move"
    );
    println!("Moving triangle: overlapping start reports contact in place");

    println!("Moving polygon tests completed successfully!\n");
}
