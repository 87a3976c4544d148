use crate::renderer::{RenderConfig, RenderMode};
use crate::*;
use getopts::{Matches, Options};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_OUTPUT: &str = "image.ppm";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub config: RenderConfig,
    pub output: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            config: RenderConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Render(RenderOptions),
    Help(String),
}

fn options() -> Options {
    let mut opts = Options::new();
    // lets "-nc" through as a long option; single letters stay short
    opts.long_only(true);
    opts.optopt("w", "width", "output image width (default 1920)", "WIDTH");
    opts.optopt("h", "height", "output image height (default 1080)", "HEIGHT");
    opts.optopt("", "spp", "number of samples per pixel (default 40)", "SAMPLES");
    opts.optopt("", "num-cpus", "number of CPUs to use, 0 for all", "CPUS");
    opts.optopt("", "nc", "same as --num-cpus", "CPUS");
    opts.optflag("p", "preview", "super quick preview");
    opts.optopt("o", "output", "output file (default image.ppm)", "FILE");
    opts.optopt("", "tile-size", "edge of a render tile in pixels", "PIXELS");
    opts.optflag("", "help", "print this help and exit");
    opts
}

pub fn usage() -> String {
    options().usage("Usage: tilepath [options]")
}

fn parse_value<T: FromStr>(matches: &Matches, name: &'static str) -> Result<Option<T>> {
    match matches.opt_str(name) {
        None => Ok(None),
        Some(value) => match value.parse() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(Error::InvalidValue { name, value }),
        },
    }
}

fn non_zero<T: Default + PartialEq + ToString>(name: &'static str, value: T) -> Result<T> {
    if value == T::default() {
        Err(Error::InvalidValue {
            name,
            value: value.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Parse the arguments following the program name.
pub fn parse_args<S: AsRef<std::ffi::OsStr>>(args: &[S]) -> Result<Command> {
    let matches = options().parse(args)?;
    if matches.opt_present("help") {
        return Ok(Command::Help(usage()));
    }
    if let Some(free) = matches.free.first() {
        return Err(getopts::Fail::UnrecognizedOption(free.clone()).into());
    }

    let mut opts = RenderOptions::default();
    let config = &mut opts.config;
    if let Some(width) = parse_value(&matches, "width")? {
        config.width = non_zero("width", width)?;
    }
    if let Some(height) = parse_value(&matches, "height")? {
        config.height = non_zero("height", height)?;
    }
    if let Some(spp) = parse_value(&matches, "spp")? {
        config.spp = non_zero("spp", spp)?;
    }
    if let Some(nthread) = parse_value(&matches, "num-cpus")? {
        config.nthread = nthread;
    }
    if let Some(nthread) = parse_value(&matches, "nc")? {
        config.nthread = nthread;
    }
    if let Some(tile_size) = parse_value(&matches, "tile-size")? {
        config.tile_size = non_zero("tile-size", tile_size)?;
    }
    if matches.opt_present("preview") {
        config.mode = RenderMode::Preview;
    }
    if let Some(output) = matches.opt_str("output") {
        opts.output = PathBuf::from(output);
    }
    Ok(Command::Render(opts))
}
