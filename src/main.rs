mod bot;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let settings = startup::load_settings(&config).await;

    tracing::info!("Starting gatekeeper");

    let client = bot::start::init_bot(&config, BotState::new(settings)).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
