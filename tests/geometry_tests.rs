// Host-side tests for the icosahedron wireframe and color helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::PerspectiveCamera;
use geometry::*;
use glam::{Vec3, Vec4};
use std::collections::HashSet;

#[test]
fn counts_follow_geodesic_formulas() {
    for detail in 0..=3u32 {
        let n = ((detail + 1) * (detail + 1)) as usize;
        let mesh = icosahedron(1.0, detail);
        assert_eq!(mesh.face_count, 20 * n, "faces at detail {}", detail);
        assert_eq!(mesh.positions.len(), 10 * n + 2, "vertices at detail {}", detail);
        assert_eq!(mesh.edge_count(), 30 * n, "edges at detail {}", detail);
    }
}

#[test]
fn page_mesh_has_42_vertices_and_120_edges() {
    let mesh = icosahedron(constants::ICOSAHEDRON_RADIUS, constants::ICOSAHEDRON_DETAIL);
    assert_eq!(mesh.positions.len(), 42);
    assert_eq!(mesh.edge_count(), 120);
    assert_eq!(mesh.indices.len(), 240);
}

#[test]
fn vertices_sit_on_the_sphere() {
    let radius = 9.0;
    let mesh = icosahedron(radius, 2);
    for p in &mesh.positions {
        let len = Vec3::from_array(*p).length();
        assert!((len - radius).abs() < 1e-4, "vertex at distance {}", len);
    }
}

#[test]
fn edges_are_unique_and_in_range() {
    let mesh = icosahedron(1.0, 1);
    let mut seen = HashSet::new();
    for pair in mesh.indices.chunks(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_ne!(a, b);
        assert!((a as usize) < mesh.positions.len());
        assert!((b as usize) < mesh.positions.len());
        assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge {}-{}", a, b);
    }
}

#[test]
fn edge_lengths_are_roughly_uniform() {
    let mesh = icosahedron(1.0, 1);
    let lengths: Vec<f32> = mesh
        .indices
        .chunks(2)
        .map(|e| {
            Vec3::from_array(mesh.positions[e[0] as usize])
                .distance(Vec3::from_array(mesh.positions[e[1] as usize]))
        })
        .collect();
    let min = lengths.iter().cloned().fold(f32::MAX, f32::min);
    let max = lengths.iter().cloned().fold(0.0, f32::max);
    assert!(min > 0.0);
    assert!(max / min < 1.5, "edge spread {} .. {}", min, max);
}

#[test]
fn every_vertex_has_five_or_six_neighbours() {
    let mesh = icosahedron(1.0, 1);
    let mut degree = vec![0u32; mesh.positions.len()];
    for &i in &mesh.indices {
        degree[i as usize] += 1;
    }
    assert_eq!(degree.iter().filter(|d| **d == 5).count(), 12);
    assert!(degree.iter().all(|d| *d == 5 || *d == 6));
}

#[test]
fn srgb_conversion_endpoints_and_ordering() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = srgb_hex_to_linear(0xFFFFFF);
    for c in white {
        assert!((c - 1.0).abs() < 1e-6);
    }
    let [r, g, b] = srgb_hex_to_linear(constants::MESH_COLOR);
    assert!(b > g && g > r);
    assert!(r > 0.0 && b < 1.0);
    // linear values are darker than the encoded ones
    assert!(b < 0xC6 as f32 / 255.0);
}

#[test]
fn camera_looks_down_negative_z_from_its_offset() {
    let mut cam = PerspectiveCamera::new(16.0 / 9.0);
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, constants::CAMERA_Z));
    cam.position.x = 0.3;

    let ahead = cam.view_projection() * Vec4::new(0.3, 0.0, 0.0, 1.0);
    assert!(ahead.w > 0.0);
    assert!((ahead.x / ahead.w).abs() < 1e-5);
    assert!((ahead.y / ahead.w).abs() < 1e-5);

    let behind = cam.view_projection() * Vec4::new(0.3, 0.0, 30.0, 1.0);
    assert!(behind.w < 0.0);
}

#[test]
fn camera_mesh_fits_in_view() {
    let cam = PerspectiveCamera::new(1.0);
    let top = cam.view_projection() * Vec4::new(0.0, constants::ICOSAHEDRON_RADIUS, 0.0, 1.0);
    let ndc_y = top.y / top.w;
    assert!(ndc_y > 0.0 && ndc_y < 1.0);
}

#[test]
fn camera_viewport_updates_aspect() {
    let mut cam = PerspectiveCamera::new(1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
    assert_eq!(PerspectiveCamera::new(f32::NAN).aspect, 1.0);
}
