use qqbot::config::AppConfig;
use qqbot::services::scheduler::SchedulerService;
use qqbot::utils::telemetry::init_subscriber;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_subscriber(config.app_env);
    info!(
        app_env = ?config.app_env,
        server_name = %config.server_name,
        mc_server_url = %config.mc_server_url,
        "Loaded configuration"
    );

    let scheduled = SchedulerService::spawn_scheduled_task(config.schedule_interval);

    let listener = TcpListener::bind(config.listen_addr()?).await?;
    qqbot::serve(listener).await?;

    scheduled.abort();
    Ok(())
}
