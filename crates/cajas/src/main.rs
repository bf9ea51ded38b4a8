use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use cajas::config::Config;
use cajas::seed::{generate_cajas, generate_sucursales};
use cajas::storage::cached::{CachedCajaRepository, CachedSucursalRepository};
use cajas_core::cache::Cache;
use cajas_core::catalog::{group_cajas_by_sucursal, Caja, Sucursal};
use cajas_core::storage::{CajaRepository, Repository, SucursalRepository};

/// Cajas - cash registers per branch, served through a read-through cache
#[derive(Parser, Debug)]
#[command(name = "cajas")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "pretty")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Raw JSON output
    Json,
    /// One line per record
    #[default]
    Pretty,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load demo branches and registers into an empty store
    Seed,
    /// List every register
    List,
    /// List the registers of one branch
    BySucursal {
        /// Branch id
        id: i32,
    },
    /// Show one register
    Get {
        /// Register id
        id: Uuid,
    },
    /// Register a new cash register
    Add {
        /// Branch the register belongs to
        #[arg(long)]
        sucursal: i32,
        /// Free-text description
        #[arg(long)]
        descripcion: String,
        /// Register type id
        #[arg(long, default_value = "1")]
        tipo: i32,
    },
    /// List branches with their register count
    Sucursales,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cajas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let store = open_store(&config).await?;
    let cache = open_cache(&config).await?;

    run(cli, store, cache, &config).await
}

#[cfg(feature = "sqlite")]
async fn open_store(config: &Config) -> Result<Arc<cajas::storage::SqliteRepository>> {
    tracing::info!(path = %config.sqlite_path, "Opening SQLite store");
    let repo = cajas::storage::SqliteRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repo))
}

#[cfg(all(feature = "inmemory", not(feature = "sqlite")))]
async fn open_store(_config: &Config) -> Result<Arc<cajas::storage::InMemoryRepository>> {
    tracing::warn!("Using in-memory store, data is lost on exit");
    Ok(Arc::new(cajas::storage::InMemoryRepository::new()))
}

#[cfg(feature = "memory")]
async fn open_cache(config: &Config) -> Result<Arc<cajas::cache::MemoryCache>> {
    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(cajas::cache::MemoryCache::new(
        config.cache_max_entries,
    )))
}

#[cfg(feature = "redis")]
async fn open_cache(config: &Config) -> Result<Arc<cajas::cache::RedisCache>> {
    tracing::info!(url = %config.redis_url, "Connecting to Redis cache");
    let cache = cajas::cache::RedisCache::connect(&config.redis_url).await?;
    Ok(Arc::new(cache))
}

async fn run<R, C>(cli: Cli, store: Arc<R>, cache: Arc<C>, config: &Config) -> Result<()>
where
    R: CajaRepository + SucursalRepository + 'static,
    C: Cache + 'static,
{
    let cajas: CachedCajaRepository<R, C> =
        CachedCajaRepository::new(store.clone(), cache.clone(), config.caja_cache_ttl());
    let sucursales: CachedSucursalRepository<R, C> =
        CachedSucursalRepository::new(store, cache, config.sucursal_cache_ttl());

    match cli.command {
        Commands::Seed => {
            if !sucursales.get_all().await?.is_empty() {
                tracing::info!("Store already seeded, skipping");
                return Ok(());
            }

            let demo_sucursales = generate_sucursales();
            let demo_cajas = generate_cajas(&demo_sucursales);
            for sucursal in &demo_sucursales {
                sucursales.add(sucursal).await?;
            }
            for caja in &demo_cajas {
                cajas.add(caja).await?;
            }

            tracing::info!(
                sucursales = demo_sucursales.len(),
                cajas = demo_cajas.len(),
                "Seeded demo data"
            );
        }
        Commands::List => {
            let all = cajas.get_all().await?;
            print_cajas(&all, cli.format)?;
        }
        Commands::BySucursal { id } => {
            let filtered = cajas.get_all_by_sucursal(id).await?;
            print_cajas(&filtered, cli.format)?;
        }
        Commands::Get { id } => match cajas.get_one(id).await? {
            Some(caja) => print_cajas(std::slice::from_ref(&caja), cli.format)?,
            None => bail!("Caja {id} not found"),
        },
        Commands::Add {
            sucursal,
            descripcion,
            tipo,
        } => {
            let caja = Caja::new(sucursal, descripcion, tipo);
            cajas.add(&caja).await?;
            print_cajas(std::slice::from_ref(&caja), cli.format)?;
        }
        Commands::Sucursales => {
            let all_sucursales = sucursales.get_all().await?;
            let all_cajas = cajas.get_all().await?;
            print_sucursales(&all_sucursales, &all_cajas, cli.format)?;
        }
    }

    Ok(())
}

fn print_cajas(cajas: &[Caja], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cajas)?),
        OutputFormat::Pretty => {
            if cajas.is_empty() {
                println!("No cajas found.");
            }
            for caja in cajas {
                println!(
                    "{}  sucursal={:<3} tipo={}  {}",
                    caja.id, caja.sucursal_id, caja.tipo_caja_id, caja.descripcion
                );
            }
        }
    }
    Ok(())
}

fn print_sucursales(sucursales: &[Sucursal], cajas: &[Caja], format: OutputFormat) -> Result<()> {
    let grouped = group_cajas_by_sucursal(cajas);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(sucursales)?),
        OutputFormat::Pretty => {
            if sucursales.is_empty() {
                println!("No sucursales found.");
            }
            for sucursal in sucursales {
                let count = grouped.get(&sucursal.id).map_or(0, Vec::len);
                println!(
                    "{:<3} {:<24} {:<12} cajas={}",
                    sucursal.id, sucursal.direccion, sucursal.telefono, count
                );
            }
        }
    }
    Ok(())
}
