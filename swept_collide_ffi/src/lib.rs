//! This module contains the C foreign function interface for swept_collide.
#![allow(non_camel_case_types)]
use core::slice;
use std::{convert::TryFrom, panic};
use swept_collide::{
    core::math::Vector2,
    shapes::{Circle, Polygon, Pose},
    sweep::{
        circle_hits_circle, circle_hits_line, circle_hits_point, circle_hits_polygon,
        circle_hits_polygon_posed, circle_hits_segment, polygons_collide, ray_hits_circle,
        ray_hits_polygon, ray_hits_polygon_posed,
    },
};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct swco_point {
    pub x: f64,
    pub y: f64,
}

impl swco_point {
    pub fn new(x: f64, y: f64) -> Self {
        swco_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        swco_point::new(v.x, v.y)
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Represents a circle with center and radius.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct swco_circle {
    pub center: swco_point,
    pub radius: f64,
}

impl swco_circle {
    pub fn new(center: swco_point, radius: f64) -> Self {
        swco_circle { center, radius }
    }

    pub fn to_internal(self) -> Circle<f64> {
        Circle::new(self.center.to_internal(), self.radius)
    }
}

/// Represents a rigid placement, a translation paired with a counterclockwise rotation in radians.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct swco_pose {
    pub position: swco_point,
    pub angle: f64,
}

impl swco_pose {
    pub fn new(position: swco_point, angle: f64) -> Self {
        swco_pose { position, angle }
    }

    pub fn to_internal(self) -> Pose<f64> {
        Pose::new(self.position.to_internal(), self.angle)
    }
}

/// Opaque type that wraps a [Polygon].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct swco_polygon(pub Polygon<f64>);

/// Write `v` to `target` unless `target` is null.
///
/// # Safety
///
/// `target` must be null or point to a valid place in memory to be written.
unsafe fn write_point(target: *mut swco_point, v: Vector2<f64>) {
    if !target.is_null() {
        target.write(swco_point::from_internal(v));
    }
}

/// Create a new polygon object.
///
/// `vertexes` is an array of [swco_point] to create the polygon with, ordered along the boundary
/// (either winding).
/// `n_vertexes` contains the number of vertexes in the array (at least 3).
/// `polygon` is an out parameter to hold the created polygon.
///
/// ## Specific Error Codes
/// * 1 = `vertexes` is null.
/// * 2 = `n_vertexes` is less than 3.
///
/// # Safety
///
/// `vertexes` must point to a valid contiguous buffer of [swco_point] with length of at least
/// `n_vertexes`.
/// `polygon` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_create(
    vertexes: *const swco_point,
    n_vertexes: u32,
    polygon: *mut *const swco_polygon,
) -> i32 {
    ffi_catch_unwind!({
        if vertexes.is_null() {
            return 1;
        }
        if n_vertexes < 3 {
            return 2;
        }

        let data = slice::from_raw_parts(vertexes, n_vertexes as usize);
        let result = Polygon::new(data.iter().map(|p| p.to_internal()).collect());

        polygon.write(Box::into_raw(Box::new(swco_polygon(result))));
        0
    })
}

/// Free an existing [swco_polygon] object.
///
/// Nothing happens if `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn swco_polygon_f(polygon: *mut swco_polygon) {
    if !polygon.is_null() {
        drop(Box::from_raw(polygon))
    }
}

/// Clones the polygon.
///
/// `polygon` is the polygon to be cloned.
/// `cloned` is used as an out parameter to hold the new polygon from cloning.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `cloned` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_clone(
    polygon: *const swco_polygon,
    cloned: *mut *const swco_polygon,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        cloned.write(Box::into_raw(Box::new(swco_polygon((*polygon).0.clone()))));
        0
    })
}

/// Get the vertex count of a polygon.
///
/// `count` used as out parameter to hold the vertex count.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_get_vertex_count(
    polygon: *const swco_polygon,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        // using try_from to catch odd case of polygon vertex count greater than u32::MAX to
        // prevent memory corruption/access errors but just panic as internal error if it does occur
        count.write(u32::try_from((*polygon).0.vertex_count()).unwrap());
        0
    })
}

/// Fills the buffer given with the vertex data of a polygon.
///
/// You must use [swco_polygon_get_vertex_count] to ensure the buffer given has adequate length
/// to be filled with all vertexes!
///
/// `vertex_data` must point to a buffer that can be filled with all `polygon` vertexes.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `vertex_data` must point to a buffer that is large enough to hold all the vertexes or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_get_vertex_data(
    polygon: *const swco_polygon,
    vertex_data: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        let buffer = slice::from_raw_parts_mut(vertex_data, (*polygon).0.vertex_count());
        for (i, &v) in (*polygon).0.vertexes().iter().enumerate() {
            buffer[i] = swco_point::from_internal(v);
        }
        0
    })
}

/// Wraps [Polygon::contains].
///
/// `point` is the point to test against the polygon boundary.
/// `result` is used as the out parameter to hold whether the point is inside (non-zero) or
/// outside (zero).
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_contains(
    polygon: *const swco_polygon,
    point: swco_point,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }
        result.write((*polygon).0.contains(point.to_internal()) as u8);
        0
    })
}

/// Wraps [Polygon::convex_contains].
///
/// Only meaningful for convex polygons, see [Polygon::convex_contains] for the boundary
/// conventions (which differ from [swco_polygon_contains]).
///
/// `point` is the point to test against the polygon boundary.
/// `result` is used as the out parameter to hold whether the point is inside (non-zero) or
/// outside (zero).
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygon_convex_contains(
    polygon: *const swco_polygon,
    point: swco_point,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }
        result.write((*polygon).0.convex_contains(point.to_internal()) as u8);
        0
    })
}

/// Wraps [ray_hits_circle].
///
/// `circle` is the circle to cast against.
/// `start` is the ray origin and `delta` its displacement, the cast covers `start` to
/// `start + delta` only.
/// `hit` is used as the out parameter to hold whether the ray hit (non-zero) or missed (zero).
/// `point` and `normal` are optional out parameters for the hit point and surface normal, each
/// skipped when null. Nothing is written to them on a miss.
///
/// # Safety
///
/// `hit` must point to a valid place in memory to be written.
/// `point` and `normal` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_ray_hits_circle(
    circle: swco_circle,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    point: *mut swco_point,
    normal: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        match ray_hits_circle(&circle.to_internal(), start.to_internal(), delta.to_internal()) {
            Some(h) => {
                hit.write(1);
                write_point(point, h.point);
                write_point(normal, h.normal);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [ray_hits_polygon].
///
/// `start` is the ray origin and `delta` its displacement, the cast covers `start` to
/// `start + delta` only.
/// `hit` is used as the out parameter to hold whether the ray hit (non-zero) or missed (zero).
/// `point` and `normal` are optional out parameters for the hit point and surface normal, each
/// skipped when null. Nothing is written to them on a miss.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `hit` must point to a valid place in memory to be written.
/// `point` and `normal` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_ray_hits_polygon(
    polygon: *const swco_polygon,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    point: *mut swco_point,
    normal: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        match ray_hits_polygon(&(*polygon).0, start.to_internal(), delta.to_internal()) {
            Some(h) => {
                hit.write(1);
                write_point(point, h.point);
                write_point(normal, h.normal);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [ray_hits_polygon_posed].
///
/// Same as [swco_ray_hits_polygon] with the polygon placed by `pose` rather than read in its
/// local coordinates.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `hit` must point to a valid place in memory to be written.
/// `point` and `normal` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_ray_hits_polygon_posed(
    polygon: *const swco_polygon,
    pose: swco_pose,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    point: *mut swco_point,
    normal: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        match ray_hits_polygon_posed(
            &(*polygon).0,
            pose.to_internal(),
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(point, h.point);
                write_point(normal, h.normal);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_point].
///
/// `target` is the point the disk sweeps against.
/// `radius` is the disk radius and `start` its center at the beginning of the sweep, `delta` is
/// the translation swept over.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos` and `impact` are optional out parameters for the stopped disk center and the touched
/// point, each skipped when null. Nothing is written to them on a miss.
///
/// # Safety
///
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_point(
    target: swco_point,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        match circle_hits_point(
            target.to_internal(),
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_circle].
///
/// `target` is the stationary circle the disk sweeps against.
/// `radius` is the disk radius and `start` its center at the beginning of the sweep, `delta` is
/// the translation swept over.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos` and `impact` are optional out parameters for the stopped disk center and the touched
/// point, each skipped when null. Nothing is written to them on a miss.
///
/// # Safety
///
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_circle(
    target: swco_circle,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        match circle_hits_circle(
            &target.to_internal(),
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_line].
///
/// `p0` and `p1` are two distinct points spanning the infinite line.
/// `radius` is the disk radius and `start` its center at the beginning of the sweep, `delta` is
/// the translation swept over.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos` and `impact` are optional out parameters for the stopped disk center and the touched
/// point, each skipped when null. Nothing is written to them on a miss.
///
/// ## Specific Error Codes
/// * 1 = `p0` and `p1` are the same point (no line is spanned).
///
/// # Safety
///
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_line(
    p0: swco_point,
    p1: swco_point,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if p0.to_internal().fuzzy_eq(p1.to_internal()) {
            return 1;
        }

        match circle_hits_line(
            p0.to_internal(),
            p1.to_internal(),
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_segment].
///
/// `p0` and `p1` are the segment end points (they may coincide, collapsing to a point sweep).
/// `radius` is the disk radius and `start` its center at the beginning of the sweep, `delta` is
/// the translation swept over.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos` and `impact` are optional out parameters for the stopped disk center and the touched
/// point, each skipped when null. Nothing is written to them on a miss.
///
/// # Safety
///
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_segment(
    p0: swco_point,
    p1: swco_point,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        match circle_hits_segment(
            p0.to_internal(),
            p1.to_internal(),
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_polygon].
///
/// `radius` is the disk radius and `start` its center at the beginning of the sweep, `delta` is
/// the translation swept over.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos` and `impact` are optional out parameters for the stopped disk center and the touched
/// point, each skipped when null. Nothing is written to them on a miss.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_polygon(
    polygon: *const swco_polygon,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        match circle_hits_polygon(
            &(*polygon).0,
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [circle_hits_polygon_posed].
///
/// Same as [swco_circle_hits_polygon] with the polygon placed by `pose` rather than read in its
/// local coordinates.
///
/// ## Specific Error Codes
/// * 1 = `polygon` is null.
///
/// # Safety
///
/// `polygon` must be null or a valid swco_polygon object that was created with
/// [swco_polygon_create] and has not been freed.
/// `hit` must point to a valid place in memory to be written.
/// `pos` and `impact` must each be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_circle_hits_polygon_posed(
    polygon: *const swco_polygon,
    pose: swco_pose,
    radius: f64,
    start: swco_point,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if polygon.is_null() {
            return 1;
        }

        match circle_hits_polygon_posed(
            &(*polygon).0,
            pose.to_internal(),
            radius,
            start.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
            }
            None => hit.write(0),
        }
        0
    })
}

/// Wraps [polygons_collide].
///
/// `moving` placed by `moving_pose` is swept by `delta` against `stationary` placed by
/// `stationary_pose`. All coordinates are world space.
/// `hit` is used as the out parameter to hold whether the sweep hit (non-zero) or missed (zero).
/// `pos`, `impact`, and `normal` are optional out parameters for the stopped position of the
/// moving polygon, the contact point, and the surface normal at the contact, each skipped when
/// null. Nothing is written to them on a miss.
///
/// ## Specific Error Codes
/// * 1 = `moving` is null.
/// * 2 = `stationary` is null.
///
/// # Safety
///
/// `moving` and `stationary` must each be null or a valid swco_polygon object that was created
/// with [swco_polygon_create] and has not been freed.
/// `hit` must point to a valid place in memory to be written.
/// `pos`, `impact`, and `normal` must each be null or point to a valid place in memory to be
/// written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn swco_polygons_collide(
    moving: *const swco_polygon,
    moving_pose: swco_pose,
    stationary: *const swco_polygon,
    stationary_pose: swco_pose,
    delta: swco_point,
    hit: *mut u8,
    pos: *mut swco_point,
    impact: *mut swco_point,
    normal: *mut swco_point,
) -> i32 {
    ffi_catch_unwind!({
        if moving.is_null() {
            return 1;
        }
        if stationary.is_null() {
            return 2;
        }

        match polygons_collide(
            &(*moving).0,
            moving_pose.to_internal(),
            &(*stationary).0,
            stationary_pose.to_internal(),
            delta.to_internal(),
        ) {
            Some(h) => {
                hit.write(1);
                write_point(pos, h.position);
                write_point(impact, h.impact);
                write_point(normal, h.normal);
            }
            None => hit.write(0),
        }
        0
    })
}
