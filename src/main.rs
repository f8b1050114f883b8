use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use spheretrace::config::load_scene;
use spheretrace::output::{save_image, send_image_to_tev};
use spheretrace::{render_with, RenderSettings, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("spheretrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let scene = match &args.scene {
        Some(path) => match load_scene(path) {
            Ok(scene) => {
                info!("Loaded scene from {}", path);
                scene
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Scene::demo(),
    };

    let mut settings = RenderSettings::new(args.width, args.height, args.bounces).with_progress(!args.quiet);
    settings.seed = args.seed;

    let frame = render_with(&scene, &settings);

    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost");
        send_image_to_tev(&frame, tev_address, args.width, args.height);
    }

    if let Err(e) = save_image(&frame, Path::new(&args.output), args.width, args.height) {
        error!("Failed to save {}: {}", args.output, e);
        return ExitCode::FAILURE;
    }

    info!("Rendering complete. Image saved as {}", args.output);
    ExitCode::SUCCESS
}
