use clap::{Parser, Subcommand};
use filestore_files::paths::{copy_file, extension_of, remove_file};
use filestore_files::{
    metadata, FileIngestor, StorageConfig, StorageEngine, DEFAULT_STORAGE_DIR,
};
use filestore_uuid::UuidGenerator;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "filestore")]
#[command(about = "Copy files into managed storage and manage their metadata records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a file into storage and write its metadata record
    Ingest {
        /// File to ingest
        source: PathBuf,
        /// Storage directory (overrides FILESTORE_STORAGE_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print a metadata record
    Show {
        /// Record file
        record: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change the filename stored in a record
    Rename {
        /// Record file
        record: PathBuf,
        /// New filename
        name: String,
    },
    /// Store an artifact's current size in its record
    RefreshSize {
        /// Record file
        record: PathBuf,
        /// Artifact whose size to record
        artifact: PathBuf,
    },
    /// Check whether a file would be accepted for ingestion
    Validate {
        /// File to check
        path: PathBuf,
    },
    /// Print the extension of a path
    Ext {
        /// Path to inspect
        path: String,
    },
    /// Copy a file without overwriting the target
    Copy {
        /// Source file
        source: PathBuf,
        /// Target file (must not exist)
        target: PathBuf,
    },
    /// Delete a file
    Remove {
        /// File to delete
        path: PathBuf,
    },
    /// Print a freshly generated record identifier
    NewId,
}

/// Settings resolved once from the environment at startup
struct Settings {
    storage_dir: PathBuf,
    config: StorageConfig,
}

impl Settings {
    /// Reads settings from the environment
    ///
    /// # Environment Variables
    /// - `FILESTORE_STORAGE_DIR`: managed storage directory (default: "catalog")
    /// - `FILESTORE_MAX_FILE_SIZE`: largest accepted source in bytes (default: 5 MiB)
    /// - `FILESTORE_MAX_PATH_LEN`: longest destination path in bytes (default: 256)
    /// - `FILESTORE_COPY_BUFFER_SIZE`: copy buffer size in bytes (default: 1024)
    fn from_env() -> anyhow::Result<Self> {
        let storage_dir: PathBuf = std::env::var("FILESTORE_STORAGE_DIR")
            .unwrap_or_else(|_| DEFAULT_STORAGE_DIR.into())
            .into();

        let config = StorageConfig::from_env_values(
            std::env::var("FILESTORE_MAX_FILE_SIZE").ok(),
            std::env::var("FILESTORE_MAX_PATH_LEN").ok(),
            std::env::var("FILESTORE_COPY_BUFFER_SIZE").ok(),
        )?;
        tracing::debug!("storage dir {}, {:?}", storage_dir.display(), config);

        Ok(Self {
            storage_dir,
            config,
        })
    }

    fn ingestor(&self, dir: Option<PathBuf>) -> anyhow::Result<FileIngestor> {
        let storage_dir = dir.unwrap_or_else(|| self.storage_dir.clone());
        Ok(FileIngestor::new(
            storage_dir,
            self.config,
            UuidGenerator::new()?,
        ))
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("filestore=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    if let Err(e) = run(cli, &settings) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, settings: &Settings) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Ingest { source, dir }) => {
            let stored = settings.ingestor(dir)?.ingest(&source)?;
            println!("Stored: {}", stored.destination_path.display());
            println!("Record: {}", stored.record_path.display());
            println!("{}", stored.metadata);
        }
        Some(Commands::Show { record, json }) => {
            let record = metadata::load(&record)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record.describe());
            }
        }
        Some(Commands::Rename { record, name }) => {
            let updated = settings.ingestor(None)?.rename(&record, &name)?;
            println!("{}", updated);
        }
        Some(Commands::RefreshSize { record, artifact }) => {
            let updated = settings.ingestor(None)?.refresh_size(&record, &artifact)?;
            println!("{}", updated);
        }
        Some(Commands::Validate { path }) => {
            StorageEngine::new(settings.config).validate(&path)?;
            println!("{} can be ingested", path.display());
        }
        Some(Commands::Ext { path }) => match extension_of(&path) {
            Some(ext) => println!("{}", ext),
            None => println!("No extension."),
        },
        Some(Commands::Copy { source, target }) => {
            let copied = copy_file(&source, &target)?;
            println!(
                "Copied {} bytes from {} to {}",
                copied,
                source.display(),
                target.display()
            );
        }
        Some(Commands::Remove { path }) => {
            remove_file(&path)?;
            println!("Removed {}", path.display());
        }
        Some(Commands::NewId) => {
            println!("{}", UuidGenerator::new()?.generate());
        }
        None => {
            println!("Use 'filestore --help' for commands");
        }
    }

    Ok(())
}
