//! Render a single shaded sphere and save it as a PNG.

use anyhow::Result;
use glint_renderer::{PinholeCamera, Renderer, Scene, Vec3};

fn main() -> Result<()> {
    env_logger::init();

    let (width, height) = (800, 450);

    let mut scene = Scene::default();
    scene.sphere.radius = 0.75;
    scene.light.set_direction(Vec3::new(-1.0, -1.0, -1.0));

    let mut camera = PinholeCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, 45.0);
    camera.resize(width, height);

    let mut renderer = Renderer::new(scene);
    renderer.on_resize(width, height);

    println!("Rendering {}x{}...", width, height);
    let start = std::time::Instant::now();
    renderer.render(&camera);
    println!("Rendered in {:?}", start.elapsed());

    let image = renderer.film().image().expect("film was resized");
    image.save_png("sphere.png")?;
    println!("Saved sphere.png");

    Ok(())
}
