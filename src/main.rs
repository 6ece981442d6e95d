use kuser_backend::{settings::get_settings, startup, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::from_filename("configs/.env").ok();
    dotenvy::dotenv().ok();

    let settings = get_settings().expect("Failed to read settings.");

    let _guard = telemetry::init_subscriber(settings.debug, &settings.log_directory);

    let application = startup::Application::build(settings).await?;

    tracing::event!(target: "backend", tracing::Level::INFO, "Listening on {}", application.url());

    application.run_until_stopped().await?;

    drop(_guard);
    Ok(())
}
