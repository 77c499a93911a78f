extern crate pinhole_tracer as root;

use root::parsing::{construct_world, get_settings, parse_config_and_camera, TOMLConfig};
use root::renderer::{construct_renderer, render_to_file, verify_output};

#[macro_use]
extern crate tracing;

use tracing::level_filters::LevelFilter;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: PathBuf,
    #[structopt(short, long)]
    pub output: Option<PathBuf>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// read the written image back and compare it with the rendered film
    #[structopt(long)]
    pub verify: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn load_settings(path: &Path) -> anyhow::Result<TOMLConfig> {
    if path.exists() {
        get_settings(path)
    } else {
        warn!(
            "config file {} not found, using built in defaults",
            path.display()
        );
        Ok(TOMLConfig::default())
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let settings = load_settings(&opts.config_file)?;
    let (mut config, camera) = parse_config_and_camera(&settings)?;
    if let Some(output) = opts.output {
        config.render_settings.filename = output;
    }
    let world = construct_world(&settings)?;

    let threads = config
        .render_settings
        .threads
        .unwrap_or(num_cpus::get() as u16);
    config.render_settings.threads = Some(threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;

    let renderer = construct_renderer(config.renderer);
    if opts.dry_run {
        info!(
            "dry run, skipping render of {}x{} to {}",
            config.render_settings.resolution.width,
            config.render_settings.resolution.height,
            config.render_settings.filename.display()
        );
        return Ok(());
    }
    let film = render_to_file(renderer.as_ref(), &world, &camera, &config.render_settings)?;
    if opts.verify {
        verify_output(&config.render_settings, &film)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .with_writer(std::io::stderr)
        .init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal error, aborting. error is {:?}", e);
            ExitCode::FAILURE
        }
    }
}
