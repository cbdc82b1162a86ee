use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use docshift::config::ConverterConfig;
use docshift::{
    create_event_channel, ConversionDirection, DocumentConverter, FileService,
    PassthroughConverter, RemoteConverter, ValidationService, WorkflowController,
};

#[derive(Parser)]
#[command(name = "docshift", version, about = "Convert Word documents to PDF and back")]
struct Cli {
    /// Conversion direction
    #[arg(value_enum)]
    direction: ConversionDirection,

    /// Input file (.docx or .pdf, matching the direction)
    input: PathBuf,

    /// Directory the converted file is written into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Convert through a remote HTTP endpoint instead of the built-in
    /// passthrough backend
    #[arg(long)]
    remote: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ConverterConfig::load();

    let (event_sender, mut event_receiver) = create_event_channel();
    tokio::spawn(async move {
        while let Some(event) = event_receiver.recv().await {
            tracing::debug!("Workflow event: {:?}", event);
        }
    });

    let file_service = FileService::new(event_sender.clone());
    let mut controller = WorkflowController::new(
        cli.direction,
        ValidationService::new(config.max_file_size_bytes),
        event_sender,
    );

    let candidate = file_service
        .read_candidate(&cli.input)
        .await
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    controller.select_file(candidate)?;

    let converter: Box<dyn DocumentConverter> = match cli
        .remote
        .clone()
        .or_else(|| config.remote_endpoint.clone())
    {
        Some(endpoint) => Box::new(RemoteConverter::new(endpoint)?),
        None => Box::new(PassthroughConverter::new()),
    };

    let artifact = controller.start_conversion(converter.as_ref()).await?;

    let output_dir = cli
        .output_dir
        .or_else(|| config.last_output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let delivered = file_service
        .deliver(&artifact, &output_dir)
        .await
        .with_context(|| format!("Failed to write into {}", output_dir.display()))?;
    config.update_output_dir(Some(output_dir));

    println!("{}", delivered.display());
    Ok(())
}
