use anyhow::Context;
use clap::{Parser, Subcommand};
use slotwatch_config::load as load_config;
use slotwatch_gateway::{create_router, GatewayState};
use slotwatch_runtime::{telemetry, ActiveBackend, BotServices};
use slotwatch_subscribers::ChatId;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "slotwatch")]
#[command(about = "Telegram bot managing appointment notification subscribers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server (default)
    Serve,
    /// Print the chat ids currently subscribed
    Subscribers,
    /// Subscribe a chat id directly
    Register {
        /// Telegram chat id
        #[arg(allow_hyphen_values = true)]
        chat_id: ChatId,
    },
    /// Unsubscribe a chat id directly
    Unregister {
        /// Telegram chat id
        #[arg(allow_hyphen_values = true)]
        chat_id: ChatId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Subscribers => list_subscribers().await,
        Commands::Register { chat_id } => register(chat_id).await,
        Commands::Unregister { chat_id } => unregister(chat_id).await,
    }
}

async fn initialise() -> anyhow::Result<(slotwatch_config::AppConfig, BotServices)> {
    let config = load_config().context("failed to load configuration")?;

    let services = BotServices::initialise(&config)
        .await
        .context("failed to initialise bot services")?;

    Ok((config, services))
}

async fn admin_services() -> anyhow::Result<BotServices> {
    let (_, services) = initialise().await?;
    if services.backend == ActiveBackend::Memory {
        warn!("admin command is running against an in-memory store; changes will not persist");
    }
    Ok(services)
}

async fn run_server() -> anyhow::Result<()> {
    info!("starting slotwatch");

    let (config, services) = initialise().await?;

    let state = GatewayState::new(services.dispatcher.clone(), config.telegram.clone());
    let app = create_router(state);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, webhook_path = %config.telegram.webhook_path, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(slotwatch_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("slotwatch shut down");
    Ok(())
}

async fn list_subscribers() -> anyhow::Result<()> {
    let services = admin_services().await?;

    let subscribers = services
        .registry
        .fetch()
        .await
        .context("failed to read subscriber set")?;

    if subscribers.is_empty() {
        println!("No subscribers");
        return Ok(());
    }

    println!("{} subscriber(s):", subscribers.len());
    for chat_id in subscribers.iter() {
        println!("  {chat_id}");
    }
    Ok(())
}

async fn register(chat_id: ChatId) -> anyhow::Result<()> {
    let services = admin_services().await?;
    println!("{}", services.registry.register(chat_id).await);
    Ok(())
}

async fn unregister(chat_id: ChatId) -> anyhow::Result<()> {
    let services = admin_services().await?;
    println!("{}", services.registry.unregister(chat_id).await);
    Ok(())
}
