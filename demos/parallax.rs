use std::{cell::RefCell, rc::Rc};

use backdrop_ngin::{
    Vector3,
    backdrop::Backdrop,
    camera::Camera,
    scroll::ScrollStream,
};
use instant::Instant;

fn write_demo_image(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("backdrop_demo_{name}"));
    let img = image::RgbaImage::from_pixel(16, 16, image::Rgba([90, 90, 140, 255]));
    img.save(&path).expect("demo image written");
    path
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let backdrop = Backdrop::new()?;
    let camera = Rc::new(RefCell::new(Camera::new(Vector3::new(-3.0, 0.0, 30.0))));
    backdrop.provide_camera(camera.clone());

    let stream = ScrollStream::new();
    backdrop.subscribe_scroll(&stream);

    // Stand-ins for the avatar/moon/space images a real page would serve.
    let avatar = write_demo_image("avatar.png");
    let moon = write_demo_image("moon.png");
    let normal = write_demo_image("normal.png");
    let space = write_demo_image("space.png");
    futures::executor::block_on(async {
        let (a, m, b) = futures::join!(
            backdrop.attach_avatar(avatar.to_str().unwrap()),
            backdrop.attach_moon(moon.to_str().unwrap(), normal.to_str().unwrap()),
            backdrop.attach_background(space.to_str().unwrap()),
        );
        a.and(m).and(b)
    })?;

    // Fake a browser session: 60 frames/second-ish, a scroll event every
    // half second, scrolling the document further down each time.
    let started = Instant::now();
    let mut top = 0.0f32;
    for frame in 0..180u32 {
        backdrop.advance_frame();
        if frame % 30 == 0 {
            top -= 250.0;
            stream.emit(top);
        }
    }

    let torus = backdrop.torus().get().unwrap();
    let moon = backdrop.moon().get().unwrap();
    log::info!(
        "after 180 frames ({:?}): torus rotation {:?}, moon rotation {:?}, camera {:?}",
        started.elapsed(),
        torus.borrow().rotation,
        moon.borrow().rotation,
        camera.borrow().position,
    );

    backdrop.teardown();
    stream.emit(-9000.0);
    log::info!(
        "post-teardown scroll ignored, camera still at {:?}",
        camera.borrow().position
    );

    Ok(())
}
