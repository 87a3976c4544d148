use log::*;
use std::process;
use std::sync::Arc;
use tilepath::cli::{self, Command};
use tilepath::renderer::Renderer;
use tilepath::*;

fn run(args: &[String]) -> Result<()> {
    let options = match cli::parse_args(args)? {
        Command::Help(usage) => {
            print!("{}", usage);
            return Ok(());
        }
        Command::Render(options) => options,
    };

    let config = options.config;
    let (camera, scene) = example_scenes::make_box(config.aspect());
    let image = Renderer.render(Arc::new(scene), &camera, config)?;
    image.save_ppm(&options.output)?;
    info!("wrote {}", options.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => {}
        Err(e @ Error::Args(_)) | Err(e @ Error::InvalidValue { .. }) => {
            eprintln!("Error in command line: {}", e);
            eprintln!("{}", cli::usage());
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
