use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use raylib::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use tilecaster::config::AppConfig;
use tilecaster::core::level::{Level, load_level};
use tilecaster::core::player::update_pose;
use tilecaster::core::process_events::process_events;
use tilecaster::demos;
use tilecaster::render::framebuffer::Framebuffer;
use tilecaster::render::minimap::render_minimap;
use tilecaster::render::render3d::FrameRenderer;
use tilecaster::render::textures::TextureStore;
use tilecaster::scheduler::FrameThrottle;

#[derive(Parser)]
#[command(name = "tilecaster", about = "Raycasting demos on a tile grid")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled demos
    List,
    /// Open a window and run a demo or a level file
    Run {
        /// Demo name (see `list`)
        #[arg(default_value = "courtyard")]
        demo: String,
        /// Seed for random demos
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Level file (.json, or .txt text map) to run instead of a demo
        #[arg(short, long)]
        level: Option<PathBuf>,
        /// Directory of images; file stems become texture names
        #[arg(short, long)]
        textures: Option<PathBuf>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::List => {
            for d in demos::DEMOS {
                println!("{:<12} {}", d.name, d.description);
            }
            Ok(())
        }
        Commands::Run { demo, seed, level, textures, config } => {
            let cfg = match config {
                Some(path) => AppConfig::load(&path)?,
                None => {
                    let cfg = AppConfig::default();
                    cfg.render.check();
                    cfg
                }
            };
            let ts = cfg.render.tile_size;
            let level = match level {
                Some(path) => load_level(&path, &demos::text_map_template(ts))
                    .with_context(|| format!("loading level {}", path.display()))?,
                None => {
                    let d = demos::find(&demo).ok_or_else(|| anyhow!("unknown demo {demo:?}; try `list`"))?;
                    tracing::info!(demo = d.name, seed, "starting demo");
                    d.build(seed, ts)
                }
            };

            let mut store = TextureStore::new();
            if let Some(dir) = textures {
                store.load_dir(&dir).with_context(|| format!("reading textures from {}", dir.display()))?;
            }
            demos::install_textures(&mut store);

            run(&cfg, &level, &store)
        }
    }
}

fn run(cfg: &AppConfig, level: &Level, store: &TextureStore) -> anyhow::Result<()> {
    let (w, h) = (cfg.window_width, cfg.window_height);
    let (mut window, raylib_thread) = raylib::init()
        .size(w as i32, h as i32)
        .title("tilecaster")
        .build();
    window.disable_cursor();

    let mut framebuffer = Framebuffer::new(w, h);
    let blank = Image::gen_image_color(w as i32, h as i32, Color::BLACK);
    let mut screen = window
        .load_texture_from_image(&raylib_thread, &blank)
        .map_err(|e| anyhow!("creating screen texture: {e}"))?;

    let renderer = FrameRenderer::new(cfg.render.clone());
    let ts = cfg.render.tile_size;
    let mut pose = level.spawn;
    let mut throttle = FrameThrottle::new(cfg.frame_interval());
    let mut show_map = false;

    while !window.window_should_close() {
        if window.is_key_pressed(KeyboardKey::KEY_M) {
            show_map = !show_map;
        }

        let input = process_events(&window);
        let dt = window.get_frame_time();
        pose = update_pose(pose, &input, dt, &cfg.movement, |x, y| level.grid.is_solid_at(x, y, ts));

        if throttle.tick(Instant::now()) {
            renderer.render(&mut framebuffer, &pose, &level.grid, store);
            if show_map {
                render_minimap(&mut framebuffer, &level.grid, &pose, &renderer, store, (8, 8), 8);
            }
            framebuffer.upload_to_texture(&mut screen);
        }

        let fps_now = window.get_fps();
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&screen, 0, 0, Color::WHITE);
        d.draw_text(&format!("FPS: {}", fps_now), 10, h as i32 - 30, 20, Color::WHITE);
        d.draw_text(&level.name, 10, h as i32 - 54, 20, Color::LIGHTGRAY);
    }

    tracing::info!(rendered = throttle.rendered(), dropped = throttle.dropped(), "window closed");
    Ok(())
}
