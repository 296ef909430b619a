use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pexels_client::{Client, PhotoSize, SearchResult, pexels};

const TOKEN_VAR: &str = "PEXELS_API_KEY";

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Pexels(#[from] pexels::Error),

    #[error("PEXELS_API_KEY is not set, add it to {0}")]
    MissingToken(String),
}

type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    query: String,
    per_page: u32,
    page: u32,
    output: PathBuf,
    folder: PathBuf,
    download: Option<PhotoSize>,
}

impl Default for Config {
    fn default() -> Self {
        let folder = dirs::picture_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Pexels");

        Self {
            query: "waves".to_owned(),
            per_page: 80,
            page: 1,
            output: PathBuf::from("test.json"),
            folder,
            download: None,
        }
    }
}

fn configure<P: AsRef<Path>>(config_folder: P) -> Result<(Config, String)> {
    let config_folder = config_folder.as_ref();

    if !config_folder.exists() {
        fs::create_dir_all(config_folder)?;
    }

    let env_path = config_folder.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path).map_err(|err| match err {
            dotenvy::Error::Io(err) => Error::Io(err),

            err => Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)),
        })?;
    } else {
        dotenvy::dotenv().ok();
    }

    let token = std::env::var(TOKEN_VAR)
        .map_err(|_| Error::MissingToken(env_path.display().to_string()))?;

    let config_path = config_folder.join("config.json");
    let config = match fs::read_to_string(&config_path) {
        Ok(content) => serde_json::from_str(&content)?,

        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(
                path = %config_path.display(),
                "Writing default options, edit them to change the search"
            );

            let config = Config::default();
            fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

            config
        }

        Err(err) => return Err(err.into()),
    };

    Ok((config, token))
}

async fn snapshot(client: &Client, config: &Config) -> Result<SearchResult> {
    let result = client
        .search_photos(&config.query, config.per_page, config.page)
        .await?;

    if result.page == 0 {
        warn!(query = %config.query, "Search result has no page, the response looks empty");
    }

    fs::write(&config.output, serde_json::to_vec(&result)?)?;

    info!(
        photos = result.photos.len(),
        total = result.total_results,
        path = %config.output.display(),
        "Wrote search snapshot"
    );

    Ok(result)
}

async fn download_first(client: &Client, config: &Config, result: &SearchResult) -> Result<()> {
    let (Some(size), Some(photo)) = (config.download, result.photos.first()) else {
        return Ok(());
    };

    let data = client.download(photo.src.get(size)).await?;

    fs::create_dir_all(&config.folder)?;

    let path = config.folder.join(format!("{}.jpeg", photo.id));
    fs::write(&path, &data)?;

    info!(path = %path.display(), bytes = data.len(), "Downloaded photo");

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    async fn run() -> Result<()> {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Pexels");

        let (config, token) = configure(&path)?;
        let client = Client::new(token);

        let result = snapshot(&client, &config).await?;
        download_first(&client, &config, &result).await?;

        info!(remaining = client.remaining_requests(), "Requests left this month");

        Ok(())
    }

    if let Err(e) = run().await {
        eprintln!("{}", e);
    }
}
