use clap::Parser;
use feedback_insight::client::{api, AnalysisStore, ApiClient, UploadPhase, Uploader};
use feedback_insight::domain::model::UploadedFile;
use feedback_insight::utils::logger;
use std::path::PathBuf;

/// Terminal uploader: runs the same validate → upload → store flow the web
/// client does, against a running feedback-insight server.
#[derive(Debug, Parser)]
#[command(name = "upload-csv")]
#[command(about = "Upload a feedback CSV to a feedback-insight server and print the analysis")]
struct Args {
    /// CSV file to analyze.
    file: PathBuf,

    /// API base URL of the server.
    #[arg(long, default_value = api::DEFAULT_API_BASE)]
    api_url: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let file = UploadedFile::from_path(&args.file)?;
    let api = ApiClient::new(args.api_url);
    let store = AnalysisStore::new();
    let uploader = Uploader::new(api, store.clone());

    match uploader.upload(file).await {
        UploadPhase::Succeeded => {
            let state = store.snapshot();
            let response = state
                .analysis_data
                .ok_or_else(|| anyhow::anyhow!("upload succeeded but no analysis was stored"))?;
            println!(
                "✅ Analyzed {} rows ({} feedback entries)",
                response.data_points, response.feedback_count
            );
            println!("{}", serde_json::to_string_pretty(&response.analysis)?);
            Ok(())
        }
        UploadPhase::Failed(message) => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
        other => anyhow::bail!("unexpected terminal phase: {:?}", other),
    }
}
