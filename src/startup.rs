use std::{sync::Arc, time::Duration};

use actix_web::{dev::Server, middleware::Logger, web::Data, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::{
    db_adapters::{UserAdapter, UserStore},
    routes::user_routes,
    settings::{DatabaseSettings, Settings},
};

pub struct Application {
    host: String,
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection(&settings.database)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to open DB connection: {}", e)))?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, Arc::new(UserAdapter::init(db)))?;

        Ok(Self {
            host: settings.application.host,
            port,
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self) -> String {
        listening_url(&self.host, self.port)
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn listening_url(host: &str, port: u16) -> String {
    format!("http://{}:{}/", host, port)
}

pub async fn get_database_connection(
    settings: &DatabaseSettings,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.connection_string());
    options
        .max_connections(settings.max_connections)
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        .acquire_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        .sqlx_logging(false);
    Database::connect(options).await
}

pub fn run(
    listener: std::net::TcpListener,
    store: Arc<dyn UserStore>,
) -> Result<Server, std::io::Error> {
    let store = Data::from(store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(user_routes)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
