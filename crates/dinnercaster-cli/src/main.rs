use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

mod client;

use client::RpcClient;

#[derive(Parser)]
#[command(name = "dinnercaster", about = "Dinnercaster3 CLI - talk to a running server")]
struct Cli {
    /// Dinnercaster3 server URL
    #[arg(long, env = "DINNERCASTER_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform the protocol handshake and print the server info
    Init,

    /// List the tools the server exposes
    Tools,

    /// Invoke a tool and print its text output
    Call {
        /// Tool name (e.g. `echo`, `get_info`)
        tool: String,

        /// Shorthand for the `text` argument
        #[arg(long)]
        text: Option<String>,

        /// Tool arguments as a JSON object
        #[arg(long)]
        arguments: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = RpcClient::new(&cli.url);

    let (method, params) = match cli.command {
        Commands::Init => ("initialize", None),
        Commands::Tools => ("tools/list", None),
        Commands::Call {
            tool,
            text,
            arguments,
        } => {
            let arguments = build_arguments(text, arguments.as_deref())?;
            (
                "tools/call",
                Some(serde_json::json!({ "name": tool, "arguments": arguments })),
            )
        }
    };

    let resp = client.call(method, params).await?;

    if let Some(error) = resp.error {
        anyhow::bail!("Error {}: {}", error.code, error.message);
    }

    let result = resp.result.unwrap_or_default();
    match method {
        "tools/call" => {
            for text in content_texts(&result) {
                println!("{text}");
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

/// Merge `--arguments` JSON with the `--text` shorthand.
fn build_arguments(
    text: Option<String>,
    arguments: Option<&str>,
) -> anyhow::Result<Map<String, Value>> {
    let mut map = match arguments {
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            _ => anyhow::bail!("--arguments must be a JSON object"),
        },
        None => Map::new(),
    };

    if let Some(text) = text {
        map.insert("text".to_string(), Value::String(text));
    }

    Ok(map)
}

fn content_texts(result: &Value) -> Vec<&str> {
    result["content"]
        .as_array()
        .map(|blocks| blocks.iter().filter_map(|b| b["text"].as_str()).collect())
        .unwrap_or_default()
}
