use crate::appointment_manager::AppointmentManager;
use crate::configuration::Configuration;
use crate::http::start_server;
use crate::provider::{MessageBirdClient, SmsProvider};
use crate::store::{AppointmentBackend, InMemoryAppointments};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod appointment_manager;
mod configuration;
mod http;
mod provider;
mod store;
#[cfg(test)]
mod testutils;
mod types;
mod verification;
mod views;

#[derive(Clone)]
pub struct AppState<P: SmsProvider, S: AppointmentBackend> {
    pub manager: AppointmentManager<P, S>,
    pub provider: P,
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("appointment_reminders=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_logger();

    let config = match Configuration::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let provider = match MessageBirdClient::new(&config.access_key) {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("Failed to create provider client: {err}");
            std::process::exit(1);
        }
    };

    let store = InMemoryAppointments::default();
    let manager = AppointmentManager::new(
        provider.clone(),
        store,
        config.originator.clone(),
        config.country_code.clone(),
    );

    let state = AppState { manager, provider };
    start_server(state, config.port).await;
}
