use clap::Parser;
use log::error;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = fractal_sketches::SnapshotCli::parse();
    let settings = cli.sketch.settings();

    let presenter = fractal_sketches::PpmFilePresenter::new();
    let mut controller = fractal_sketches::SnapshotController::new(presenter, &settings)?;

    controller.generate(cli.pointer)?;
    controller.write(&cli.outfile)?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
