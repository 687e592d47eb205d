use clap::Parser;

mod cli;
mod config;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = cli::Args::parse();
    if let Err(err) = cli::run(args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
