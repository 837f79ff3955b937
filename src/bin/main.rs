use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use subrobot::{Client, Options, Request};
use tracing::Level;

#[derive(Parser)]
#[command(name = "subrobot-fetch")]
#[command(about = "Fetch a URL with the subtitles robot HTTP client")]
#[command(version)]
struct Cli {
    /// URL to request
    #[arg(value_name = "URL")]
    url: String,

    /// Kind of request to send
    #[arg(short, long, default_value = "get")]
    method: MethodArg,

    /// JSON body for post-json
    #[arg(short, long)]
    data: Option<String>,

    /// Form field for post-form (format: "key=value"), may be repeated
    #[arg(short, long)]
    form: Vec<String>,

    /// Proxy URL (http, https or socks5)
    #[arg(long)]
    proxy: Option<String>,

    /// User-Agent header
    #[arg(long)]
    user_agent: Option<String>,

    /// Timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Write the body to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log request lifecycle to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum MethodArg {
    Get,
    PostJson,
    PostForm,
}

fn build_request(client: &Client, cli: &Cli) -> anyhow::Result<Request> {
    let request = match cli.method {
        MethodArg::Get => client.get(&cli.url),
        MethodArg::PostJson => {
            let data = cli.data.as_deref().unwrap_or("null");
            let body: serde_json::Value =
                serde_json::from_str(data).context("--data is not valid JSON")?;
            client.post_json(&cli.url, &body)
        }
        MethodArg::PostForm => {
            let mut pairs = Vec::with_capacity(cli.form.len());
            for field in &cli.form {
                match field.split_once('=') {
                    Some((key, value)) => pairs.push((key.to_string(), value.to_string())),
                    None => bail!("form field {:?} is not key=value", field),
                }
            }
            client.post_form(&cli.url, pairs)
        }
    };
    Ok(request)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut options = Options::from_env();
    if cli.proxy.is_some() {
        options.proxy = cli.proxy.clone();
    }
    if cli.user_agent.is_some() {
        options.user_agent = cli.user_agent.clone();
    }
    if let Some(secs) = cli.timeout {
        options.timeout = Some(Duration::from_secs(secs));
    }

    let client = Client::new(Some(&options)).context("failed to create client")?;
    let response = build_request(&client, &cli)?.invoke().await;

    let written = match &cli.output {
        Some(path) => {
            let mut file = tokio::fs::File::create(path)
                .await
                .with_context(|| format!("failed to create {}", path.display()))?;
            response.write_to(&mut file).await?
        }
        None => {
            let mut stdout = tokio::io::stdout();
            response.write_to(&mut stdout).await?
        }
    };

    tracing::debug!(written, "body written");
    Ok(())
}
