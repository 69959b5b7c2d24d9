// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_never_overshoot() {
    // A factor in (0, 1) moves part of the way and never past the target
    for f in [SCROLL_SMOOTHING, POINTER_SMOOTHING] {
        assert!(f > 0.0 && f < 1.0);
    }
    // Camera parallax eases in more slowly than scroll tracking
    assert!(POINTER_SMOOTHING < SCROLL_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn placement_constants_are_sane() {
    assert!(SCROLL_LIMIT_PX > 0.0);
    assert_ne!(START_POSITION, END_POSITION);
    assert!(DEPTH_TRAVEL >= 0.0);
    assert!(SPIN_PER_FRAME > 0.0);
    assert!(REFERENCE_FPS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_mesh() {
    assert!(CAMERA_Z - DEPTH_TRAVEL > ICOSAHEDRON_RADIUS);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z + ICOSAHEDRON_RADIUS < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn material_and_reveal_ranges() {
    assert!(MESH_OPACITY > 0.0 && MESH_OPACITY < 1.0);
    assert!(MESH_SHININESS > 0.0);
    assert!(AMBIENT_INTENSITY > 0.0 && LIGHT_INTENSITY > 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(LINK_OPACITY > 0.0 && LINK_OPACITY <= 1.0);
    assert!(matches!(MSAA_SAMPLES, 1 | 4));
}

#[test]
fn dom_contract_selectors() {
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert!(!REVEAL_VISIBLE_CLASS.contains(' '));
    assert!(!SCENE_CONTAINER_ID.starts_with('#'));
    assert!(!PARTICLES_CONTAINER_ID.starts_with('#'));
    assert_eq!(ANCHOR_SELECTOR, "a[href^=\"#\"]");
}

#[test]
fn palette_hex_values_fit_24_bits() {
    for c in [MESH_COLOR, MESH_SPECULAR, AMBIENT_COLOR, LIGHT_COLOR] {
        assert!(c <= 0xFF_FFFF);
    }
    for c in [PARTICLE_COLOR, LINK_COLOR] {
        assert!(c.starts_with('#') && c.len() == 7);
    }
}
