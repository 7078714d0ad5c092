use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use code_review::{
    CompletionClient, Credential, GeminiConfig, HttpClientConfig, ModelConfig, Provider,
    review_prompt,
};

/// Review a code snippet with Gemini.
#[derive(Debug, Parser)]
#[command(name = "code-review", version)]
struct Cli {
    /// File to review. Reads stdin when omitted or `-`.
    path: Option<PathBuf>,

    /// Extra instruction placed before the code, e.g. "focus on security".
    #[arg(short, long)]
    note: Option<String>,

    /// Model identifier.
    #[arg(short, long, env = "CODE_REVIEW_MODEL", default_value = Provider::Gemini.default_model())]
    model: String,

    /// Give up after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

/// Read the snippet from `path`, or from `stdin` when the path is missing or `-`.
fn read_snippet(path: Option<&PathBuf>, mut stdin: impl Read) -> std::io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Configuration is resolved once, before anything is read or sent.
    let credential = Credential::from_env()?;
    let model_config = ModelConfig::code_review_with_model(cli.model)?;
    let provider_config = GeminiConfig::default().with_http_config(
        HttpClientConfig::default()
            .with_user_agent(format!("code-review-cli/{}", env!("CARGO_PKG_VERSION"))),
    );
    let client = CompletionClient::with_provider_config(credential, model_config, provider_config)?;

    let code = read_snippet(cli.path.as_ref(), std::io::stdin().lock())?;
    let prompt = review_prompt(&code, cli.note.as_deref());

    let review = match cli.timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), client.generate(&prompt))
            .await
            .map_err(|_| format!("no response within {secs}s"))??,
        None => client.generate(&prompt).await?,
    };

    println!("{review}");

    Ok(())
}
