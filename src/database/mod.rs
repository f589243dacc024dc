use crate::{config::Config, utils::AppError};
use mongodb::{
    bson::doc,
    options::{ClientOptions, ConnectionString},
    Client, Collection, Database,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::OnceCell;

/// Conexão com o MongoDB, criada no `main` e compartilhada pelos handlers.
///
/// The client is built lazily: `mongodb+srv://` URIs need a DNS lookup to
/// resolve their hosts, and a failed lookup must not stop the service.
/// Until the client is built, every call retries building it and reports
/// the driver error.
#[derive(Clone)]
pub struct MongoDB {
    uri: String,
    database_name: String,
    db: Arc<OnceCell<Database>>,
}

impl MongoDB {
    /// Checks the URI syntax, then builds the client and pings the server once.
    ///
    /// Only a malformed URI is an error. DNS or network failures are logged
    /// and the service keeps running.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        ConnectionString::parse(&config.mongodb_uri)
            .map_err(|e| AppError::Config(format!("invalid MONGODB_URI: {}", e)))?;

        let mongodb = Self {
            uri: config.mongodb_uri.clone(),
            database_name: config.database_name.clone(),
            db: Arc::new(OnceCell::new()),
        };

        match mongodb.ping().await {
            Ok(()) => log::info!("✅ Connected to MongoDB database: {}", config.database_name),
            Err(e) => log::error!("❌ MongoDB connection failed: {}", e),
        }

        Ok(mongodb)
    }

    async fn database(&self) -> Result<&Database, AppError> {
        self.db
            .get_or_try_init(|| async {
                let mut client_options = ClientOptions::parse(self.uri.as_str()).await?;

                client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
                client_options.connect_timeout = Some(Duration::from_secs(5));
                client_options.server_selection_timeout = Some(Duration::from_secs(5));

                let client = Client::with_options(client_options)?;
                Ok::<_, AppError>(client.database(&self.database_name))
            })
            .await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.database().await?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn collection<T: Send + Sync>(&self, name: &str) -> Result<Collection<T>, AppError> {
        Ok(self.database().await?.collection(name))
    }

    /// Closes pooled connections; called once the HTTP server has stopped.
    pub async fn shutdown(self) {
        if let Some(db) = self.db.get() {
            db.client().clone().shutdown().await;
            log::info!("👋 MongoDB connection closed");
        }
    }
}
