use anyhow::Result;
use odadee_qr::config::BrandConfig;
use odadee_qr::helper::{generate_and_save, summary};

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    setup_logging();

    let config = BrandConfig::default();
    let (width, height) = generate_and_save(&config)?;
    println!("{}", summary(&config.output_path, width, height));

    Ok(())
}
