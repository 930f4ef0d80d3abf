use clap::Parser;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = fractal_sketches::GuiCli::parse();
    let command = fractal_sketches::RunGuiCommand::new(cli.sketch.settings());

    if let Err(err) = command.execute() {
        error!("{}", err);
        std::process::exit(1);
    }
}
