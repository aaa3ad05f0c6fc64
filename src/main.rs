use anyhow::Context;
use courses_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load courses settings")?;
    courses_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.bind_address(),
        database = settings.database.enabled,
        "courses-app bootstrap starting"
    );

    courses_app::bootstrap::run(settings).await
}
