/* 3rd party libraries */
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

/* Custom libraries */
use elevator_sim::config::{self, ConfigOverrides};
use elevator_sim::session::{self, Prompter, Renderer, Session};
use elevator_sim::unwrap_or_exit;
use elevator_sim::System;

/* Command line */
#[derive(Parser, Debug)]
#[clap(name = "elevator-sim", version, about = "Interactive multi-elevator dispatch simulator")]
struct Args {
    /// Configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[clap(flatten)]
    overrides: ConfigOverrides,
}

/* Main */
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration, flags win over the file
    let mut config = unwrap_or_exit!(config::load_config(&args.config), "Failed to load configuration");
    config.apply_overrides(&args.overrides);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    if !session::complete_building(&mut prompter, &mut config.building)? {
        info!("Input closed before the building was configured");
        return Ok(());
    }

    // Create the building and hand it to the operator
    let system = unwrap_or_exit!(System::from_config(&config.building), "Failed to create the building");
    let renderer = Renderer::from_config(&config.simulation);
    Session::new(system, prompter, renderer).run()
}
