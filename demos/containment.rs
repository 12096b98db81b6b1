use swept_collide::{core::math::Vector2, polygon};

fn main() {
    general_containment();
    convex_containment();
}

fn general_containment() {
    println!("Testing point containment...");

    // hexagon with a notch cut into its bottom
    let hexagon = polygon![
        (2.0, -3.0),
        (2.0, 2.0),
        (-2.0, 3.0),
        (-2.0, -3.0),
        (0.0, -1.0),
        (1.0, -1.0),
    ];

    let inside = Vector2::new(0.0, 0.0);
    let in_notch = Vector2::new(0.0, -2.0);
    let outside = Vector2::new(-5.0, -1.0);

    assert!(
        hexagon.contains(inside),
        "Center point should be inside the hexagon"
    );
    println!("Concave hexagon: ({}, {}) is inside", inside.x, inside.y);

    assert!(
        !hexagon.contains(in_notch),
        "Point in the notch should be outside the hexagon"
    );
    println!(
        "Concave hexagon: ({}, {}) sits in the notch, outside",
        in_notch.x, in_notch.y
    );

    assert!(
        !hexagon.contains(outside),
        "Point left of the hexagon should be outside"
    );
    println!("Concave hexagon: ({}, {}) is outside", outside.x, outside.y);

    // winding direction does not change any answer
    let reversed = polygon![
        (1.0, -1.0),
        (0.0, -1.0),
        (-2.0, -3.0),
        (-2.0, 3.0),
        (2.0, 2.0),
        (2.0, -3.0),
    ];
    for probe in [inside, in_notch, outside] {
        assert_eq!(
            hexagon.contains(probe),
            reversed.contains(probe),
            "Reversing the winding should not change containment"
        );
    }
    println!("Concave hexagon: reversed winding gives the same answers");

    println!("Point containment tests completed successfully!\n");
}

fn convex_containment() {
    println!("Testing convex point containment...");

    let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];

    // for convex polygons the sign test and the crossing test agree away from the boundary
    let probes = [
        Vector2::new(0.0, 1.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.5, 0.5),
        Vector2::new(-2.0, 3.0),
        Vector2::new(5.0, 1.0),
    ];
    for probe in probes {
        assert_eq!(
            triangle.convex_contains(probe),
            triangle.contains(probe),
            "Convex containment should agree with general containment"
        );
    }
    println!("Triangle: convex_contains agrees with contains on {} probes", probes.len());

    assert!(
        triangle.convex_contains(Vector2::new(0.0, 1.0)),
        "Interior point should be inside"
    );
    assert!(
        !triangle.convex_contains(Vector2::new(5.0, 1.0)),
        "Exterior point should be outside"
    );
    println!("Triangle: (0, 1) is inside, (5, 1) is outside");

    println!("Convex point containment tests completed successfully!\n");
}
