use brave_search_mcp::{
    BraveClient, BraveMcpServer, SearchService, Settings,
    cli::{Cli, Commands, output::Output},
    mcp,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose, cli.json_logs);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so the stdio transport owns stdout.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli, output: &Output) -> anyhow::Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or_default();

    if let Commands::Serve { host, port } = &command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }

    let client = BraveClient::new(&settings)?;
    let search = SearchService::new(Arc::new(client));

    match command {
        Commands::Serve { .. } => {
            let addr = settings.socket_addr()?;
            output.banner();
            output.kv("Endpoint", &format!("http://{}{}", addr, settings.server.path));
            output.kv("Brave API", &settings.base_url);
            mcp::serve_http(BraveMcpServer::new(search), addr, &settings.server.path).await?;
            output.success("Server stopped");
        }
        Commands::Stdio => {
            mcp::serve_stdio(BraveMcpServer::new(search)).await?;
            info!("stdio client disconnected");
        }
        Commands::Web {
            query,
            count,
            offset,
        } => {
            output.results(&search.web_search(&query, count, offset).await?);
        }
        Commands::Local { query, count } => {
            output.results(&search.local_search(&query, count).await?);
        }
    }

    Ok(())
}
