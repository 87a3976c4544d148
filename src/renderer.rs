use crate::camera::Camera;
use crate::image::Image;
use crate::manager::WorkQueue;
use crate::scene::Scene;
use crate::tile::{generate_tiles, Tile, DEFAULT_TILE_SIZE};
use crate::*;

use log::*;
use rand::distributions::Uniform;
use rand::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

pub mod pt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Full,
    /// Diffuse albedo of the first hit, no light transport.
    Preview,
}

/// Strata per axis for the first bounce of every camera path.
pub const SQRT_FIRST_BOUNCE_SAMPLES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub spp: usize,
    /// Worker threads, 0 for one per hardware thread.
    pub nthread: usize,
    pub tile_size: u32,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1920,
            height: 1080,
            spp: 40,
            nthread: 1,
            tile_size: DEFAULT_TILE_SIZE,
            mode: RenderMode::Full,
        }
    }
}

impl RenderConfig {
    pub fn thread_count(&self) -> usize {
        if self.nthread == 0 {
            num_cpus::get()
        } else {
            self.nthread
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Average of `config.spp` jittered camera paths through pixel `(x, y)`.
/// The sample sequence depends only on the pixel coordinates.
pub fn render_pixel(scene: &Scene, camera: &Camera, config: &RenderConfig, x: u32, y: u32) -> RGB {
    let mut rng = SmallRng::seed_from_u64(x as u64 + y as u64 * config.width as u64);
    let unit = Uniform::new(0.0, 1.0);
    let mut color = RGB::black();
    for _ in 0..config.spp {
        let u = (x as f64 + unit.sample(&mut rng)) / config.width as f64;
        let v = (y as f64 + unit.sample(&mut rng)) / config.height as f64;
        let ray = camera.ray(u, v, unit.sample(&mut rng), unit.sample(&mut rng));
        let radiance = pt::radiance(
            config.mode,
            scene,
            &ray,
            0,
            SQRT_FIRST_BOUNCE_SAMPLES,
            &mut rng,
        );
        if !radiance.is_finite() {
            warn!("radiance is not finite at ({}, {}): {:?}", x, y, radiance);
        }
        color += radiance;
    }
    color / config.spp as f64
}

pub struct Renderer;

impl Renderer {
    pub fn render(&self, scene: Arc<Scene>, camera: &Camera, config: RenderConfig) -> Result<Image> {
        let tiles = generate_tiles(
            config.width,
            config.height,
            config.tile_size,
            config.tile_size,
        );
        let nthread = config.thread_count();
        info!(
            "rendering {}x{} at {} spp ({:?}): {} tiles on {} threads",
            config.width,
            config.height,
            config.spp,
            config.mode,
            tiles.len(),
            nthread
        );
        let start = Instant::now();

        let queue = Arc::new(WorkQueue::new(tiles));
        let mut threads = vec![];
        for i in 0..nthread {
            let camera = camera.clone();
            let scene = scene.clone();
            let queue = queue.clone();
            let thread = thread::Builder::new()
                .name(format!("render-{}", i))
                .spawn(move || Self::render_thread(&scene, &camera, &config, &queue, i))?;
            threads.push(thread);
        }

        let mut image = Image::new(config.width, config.height);
        let mut panicked = 0;
        for thread in threads {
            match thread.join() {
                Ok(rendered) => {
                    for (tile, pixels) in rendered {
                        image.plot_tile(&tile, &pixels);
                    }
                }
                Err(_) => panicked += 1,
            }
        }
        if panicked > 0 {
            error!("{} render threads panicked", panicked);
            return Err(Error::WorkerPanicked);
        }

        info!("rendered in {:.2?}", start.elapsed());
        Ok(image)
    }

    // Tiles are disjoint, so each thread keeps what it renders and hands it
    // back on join.
    fn render_thread(
        scene: &Scene,
        camera: &Camera,
        config: &RenderConfig,
        queue: &WorkQueue<Tile>,
        thread_id: usize,
    ) -> Vec<(Tile, Vec<RGB>)> {
        let mut rendered = vec![];
        while let Some(tile) = queue.pop() {
            let pixels = tile
                .pixels()
                .map(|(x, y)| render_pixel(scene, camera, config, x, y))
                .collect();
            rendered.push((tile, pixels));
        }
        debug!("thread {} rendered {} tiles", thread_id, rendered.len());
        rendered
    }
}
