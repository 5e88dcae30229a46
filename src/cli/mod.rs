//! CLI module for brave-search-mcp
//!
//! Provides command-line interface parsing for the brave-search-mcp binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Brave Search MCP Server
///
/// Exposes Brave web search and local business search as MCP tools.
#[derive(Parser, Debug)]
#[command(
    name = "brave-search-mcp",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Brave Search MCP Server",
    long_about = "Brave Search MCP Server\n\n\
                  Exposes Brave web search and local business search as Model Context Protocol tools.\n\n\
                  Run without arguments to serve over streamable HTTP, or use 'stdio' for\n\
                  clients that spawn the server as a subprocess. Requires BRAVE_API_KEY.",
    after_help = "EXAMPLES:\n    \
                  brave-search-mcp                                # Serve MCP over HTTP on 127.0.0.1:8080/mcp\n    \
                  brave-search-mcp serve --port 3009              # Serve on another port\n    \
                  brave-search-mcp stdio                          # Serve MCP over stdin/stdout\n    \
                  brave-search-mcp web \"python programming\" -n 3  # One-off web search\n    \
                  brave-search-mcp local \"coffee near Times Square\" # One-off local search"
)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./brave-search.toml if present)
    #[arg(short, long, global = true, env = "BRAVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Serve MCP over streamable HTTP (default)
    Serve {
        /// Host address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Serve MCP over stdin/stdout
    Stdio,

    /// Run a single web search and print the results
    Web {
        /// Search query
        query: String,

        /// Number of results (1-20)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Pagination offset (0-9)
        #[arg(short, long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },

    /// Run a single local search and print the results
    Local {
        /// Local search query
        query: String,

        /// Number of results (1-20)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
