use std::f64::consts::FRAC_PI_2;
use swept_collide::{
    core::math::Vector2,
    core::traits::FuzzyEq,
    polygon,
    shapes::{Circle, Pose},
    sweep::{ray_hits_circle, ray_hits_polygon, ray_hits_polygon_posed},
};

fn main() {
    polygon_casts();
    circle_casts();
    posed_casts();
}

fn polygon_casts() {
    println!("Testing ray casts against polygons...");

    let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];

    // cast down and left through the upper right edge
    let start = Vector2::new(2.0, 4.0);
    let delta = Vector2::new(-1.0, -4.0);
    let hit = ray_hits_polygon(&triangle, start, delta)
        .expect("Ray pointed at the triangle should hit");
    assert!(
        hit.point.fuzzy_eq(Vector2::new(1.5, 2.0)),
        "Ray should stop on the upper right edge"
    );
    assert!(
        hit.normal.dot(delta) < 0.0,
        "Normal should face against the ray direction"
    );
    println!("Triangle: ray hit the boundary at ({}, {})", hit.point.x, hit.point.y);

    // casting again from the hit point does not advance any further
    let recast = ray_hits_polygon(&triangle, hit.point, delta)
        .expect("Recast from the boundary should report the boundary");
    assert!(
        recast.point.fuzzy_eq(hit.point),
        "Recast should not travel past the hit point"
    );
    println!("Triangle: recast from the hit point stays at the hit point");

    // a ray that starts inside reports the start itself
    let embedded = ray_hits_polygon(&triangle, Vector2::new(0.0, 0.0), delta)
        .expect("Embedded ray start always hits");
    assert!(
        embedded.point.fuzzy_eq(Vector2::new(0.0, 0.0)),
        "Embedded start should be reported as the hit point"
    );
    assert!(
        embedded.normal.fuzzy_eq(-delta),
        "Embedded hit normal should oppose the ray"
    );
    println!("Triangle: embedded start reported in place");

    // too short to reach
    assert!(
        ray_hits_polygon(&triangle, start, Vector2::new(-0.1, -0.4)).is_none(),
        "Ray falling short should miss"
    );
    println!("Triangle: short ray misses");

    println!("Polygon ray cast tests completed successfully!\n");
}

fn circle_casts() {
    println!("Testing ray casts against circles...");

    let circle = Circle::new(Vector2::new(1.0, 1.0), 2.0);
    let hit = ray_hits_circle(&circle, Vector2::new(-6.0, 1.0), Vector2::new(10.0, 0.0))
        .expect("Ray through the circle center should hit");
    assert!(
        hit.point.fuzzy_eq(Vector2::new(-1.0, 1.0)),
        "Ray should enter the circle on its left"
    );
    assert!(
        hit.normal.length().fuzzy_eq(circle.radius),
        "Circle hit normal should have the radius as its length"
    );
    println!("Circle: ray entered at ({}, {})", hit.point.x, hit.point.y);

    assert!(
        ray_hits_circle(&circle, Vector2::new(-6.0, 1.0), Vector2::new(-10.0, 0.0)).is_none(),
        "Ray cast away from the circle should miss"
    );
    println!("Circle: ray cast away misses");

    println!("Circle ray cast tests completed successfully!\n");
}

fn posed_casts() {
    println!("Testing ray casts against posed polygons...");

    let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];

    // rotate the triangle a quarter turn about the origin, then cast straight left along the
    // x axis
    let pose = Pose::new(Vector2::new(0.0, 0.0), FRAC_PI_2);
    let hit = ray_hits_polygon_posed(
        &triangle,
        pose,
        Vector2::new(5.0, 0.0),
        Vector2::new(-10.0, 0.0),
    )
    .expect("Ray should hit the rotated triangle");
    assert!(
        hit.point.fuzzy_eq(Vector2::new(1.2, 0.0)),
        "Rotated bottom edge should be struck at x = 1.2"
    );
    println!(
        "Posed triangle: ray hit the rotated edge at ({}, {})",
        hit.point.x, hit.point.y
    );

    // the same cast against the unposed triangle lands elsewhere
    let unposed = ray_hits_polygon(&triangle, Vector2::new(5.0, 0.0), Vector2::new(-10.0, 0.0))
        .expect("Ray should hit the unposed triangle too");
    assert!(
        !unposed.point.fuzzy_eq(hit.point),
        "Pose should change where the ray lands"
    );
    println!(
        "Unposed triangle: same ray hit ({}, {}) instead",
        unposed.point.x, unposed.point.y
    );

    println!("Posed ray cast tests completed successfully!\n");
}
