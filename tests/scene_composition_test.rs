use std::rc::Rc;

use backdrop_ngin::backdrop::{Backdrop, STAR_COUNT, STAR_SPREAD, TORUS_FRAME_SPIN};
use backdrop_ngin::data_structures::mesh::{Color, Geometry, Material};
use backdrop_ngin::data_structures::registry::{RegistryError, SharedResources};
use backdrop_ngin::data_structures::texture::Texture;

fn dummy_texture(source: &str) -> Texture {
    let img = image::DynamicImage::new_rgba8(2, 2);
    Texture::from_image(&img, source, false)
}

#[test]
fn star_field_positions_stay_inside_spread() {
    let backdrop = Backdrop::new().unwrap();
    let star_geometry = backdrop
        .shared_resources()
        .resolve_geometry("star")
        .unwrap();

    let scene = backdrop.scene();
    let scene = scene.borrow();
    let stars: Vec<_> = scene
        .meshes
        .iter()
        .filter(|node| Rc::ptr_eq(&node.borrow().geometry, &star_geometry))
        .collect();

    assert_eq!(stars.len(), STAR_COUNT);
    let half = STAR_SPREAD / 2.0;
    for star in &stars {
        let position = star.borrow().position;
        for coord in [position.x, position.y, position.z] {
            assert!((-half..=half).contains(&coord), "{coord} out of bounds");
        }
    }
}

#[test]
fn star_field_shares_one_geometry_and_one_material() {
    let backdrop = Backdrop::new().unwrap();
    let star_geometry = backdrop
        .shared_resources()
        .resolve_geometry("star")
        .unwrap();
    let star_material = backdrop
        .shared_resources()
        .resolve_material("star_material")
        .unwrap();

    let scene = backdrop.scene();
    let scene = scene.borrow();
    let stars: Vec<_> = scene
        .meshes
        .iter()
        .filter(|node| Rc::ptr_eq(&node.borrow().geometry, &star_geometry))
        .collect();

    assert_eq!(stars.len(), STAR_COUNT);
    // Identity equality: one instance, many referencing meshes.
    for star in &stars {
        assert!(Rc::ptr_eq(&star.borrow().material, &star_material));
    }
}

#[test]
fn registry_returns_the_same_instance_on_repeated_resolves() {
    let mut shared = SharedResources::new();
    shared.register_geometry(
        "orb",
        Geometry::Sphere {
            radius: 1.0,
            width_segments: 8,
            height_segments: 8,
        },
    );
    let first = shared.resolve_geometry("orb").unwrap();
    let second = shared.resolve_geometry("orb").unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn registry_keeps_the_first_instance_on_duplicate_registration() {
    let mut shared = SharedResources::new();
    let first = shared.register_material("white", Material::standard(Color::WHITE));
    let second = shared.register_material("white", Material::standard(Color::hex(0xff6347)));
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn resolving_an_unregistered_id_is_a_configuration_error() {
    let shared = SharedResources::new();
    match shared.resolve_geometry("nebula") {
        Err(RegistryError::UnknownGeometry(id)) => assert_eq!(id, "nebula"),
        other => panic!("expected UnknownGeometry, got {other:?}"),
    }
    assert!(matches!(
        shared.resolve_material("nebula"),
        Err(RegistryError::UnknownMaterial(_))
    ));
}

#[test]
fn torus_accumulates_spin_every_frame_without_scrolling() {
    let backdrop = Backdrop::new().unwrap();
    let frames = 60;
    for _ in 0..frames {
        backdrop.advance_frame();
    }

    let torus = backdrop.torus().get().expect("torus is published at build");
    let rotation = torus.borrow().rotation;
    let expected = TORUS_FRAME_SPIN * frames as f32;
    assert!((rotation.x - expected.x).abs() < 1e-4);
    assert!((rotation.y - expected.y).abs() < 1e-4);
    assert!((rotation.z - expected.z).abs() < 1e-4);
}

#[test]
fn moon_frame_hook_is_skipped_until_the_moon_exists() {
    let backdrop = Backdrop::new().unwrap();
    for _ in 0..10 {
        backdrop.advance_frame();
    }
    assert!(backdrop.moon().get().is_none());

    backdrop.install_moon(dummy_texture("moon.jpeg"), dummy_texture("normal.jpeg"));
    for _ in 0..10 {
        backdrop.advance_frame();
    }

    let moon = backdrop.moon().get().unwrap();
    let rotation = moon.borrow().rotation;
    // Only the ten frames after install count.
    assert!((rotation.x - 0.05).abs() < 1e-5);
    assert_eq!(rotation.y, 0.0);
    assert_eq!(rotation.z, 0.0);
}

#[test]
fn moon_appears_once_both_textures_resolve_and_never_duplicates() {
    let backdrop = Backdrop::new().unwrap();
    let initial_meshes = backdrop.scene().borrow().meshes.len();
    assert!(backdrop.moon().get().is_none());

    backdrop.install_moon(dummy_texture("moon.jpeg"), dummy_texture("normal.jpeg"));
    assert!(backdrop.moon().get().is_some());
    assert_eq!(backdrop.scene().borrow().meshes.len(), initial_meshes + 1);

    // A second resolution must not add a second moon.
    backdrop.install_moon(dummy_texture("moon.jpeg"), dummy_texture("normal.jpeg"));
    assert_eq!(backdrop.scene().borrow().meshes.len(), initial_meshes + 1);
}

#[test]
fn avatar_cube_is_gated_on_its_texture() {
    let backdrop = Backdrop::new().unwrap();
    assert!(backdrop.avatar().get().is_none());

    backdrop.install_avatar(dummy_texture("chau.jpeg"));
    let avatar = backdrop.avatar().get().expect("avatar present after install");
    let node = avatar.borrow();
    assert_eq!(node.position, backdrop_ngin::Vector3::new(2.0, 0.0, -5.0));
    assert!(matches!(*node.geometry, Geometry::Box { .. }));
    assert!(matches!(*node.material, Material::Basic { .. }));
}

#[test]
fn background_keeps_the_first_texture() {
    let backdrop = Backdrop::new().unwrap();
    backdrop.install_background(dummy_texture("space.jpeg"));
    backdrop.install_background(dummy_texture("other.jpeg"));

    let scene = backdrop.scene();
    let scene = scene.borrow();
    assert_eq!(scene.background.as_ref().unwrap().source, "space.jpeg");
}

#[test]
fn late_texture_resolutions_after_teardown_mutate_nothing() {
    let backdrop = Backdrop::new().unwrap();
    let initial_meshes = backdrop.scene().borrow().meshes.len();

    backdrop.teardown();
    backdrop.install_avatar(dummy_texture("chau.jpeg"));
    backdrop.install_moon(dummy_texture("moon.jpeg"), dummy_texture("normal.jpeg"));
    backdrop.install_background(dummy_texture("space.jpeg"));

    let scene = backdrop.scene();
    let scene = scene.borrow();
    assert_eq!(scene.meshes.len(), initial_meshes);
    assert!(scene.background.is_none());
    assert!(backdrop.avatar().get().is_none());
    assert!(backdrop.moon().get().is_none());
}

#[test]
fn frames_after_teardown_leave_rotations_untouched() {
    let backdrop = Backdrop::new().unwrap();
    backdrop.advance_frame();
    let torus = backdrop.torus().get().unwrap();
    let before = torus.borrow().rotation;

    backdrop.teardown();
    backdrop.advance_frame();
    assert_eq!(torus.borrow().rotation, before);
}
