use speech_delivery::domain::delivery::DeliveryPipelineApi;
use speech_delivery::infrastructure::aws::AwsClients;
use speech_delivery::infrastructure::config::Config;
use speech_delivery::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load and validate configuration before touching the network
    let config = Config::from_env()?;

    init_logging(&config.log_format);

    let plan = config.plan();
    tracing::info!(
        source = %plan.source,
        sink = %plan.sink,
        "Starting speech delivery"
    );

    let clients = AwsClients::load(&config).await;
    let pipeline = clients.pipeline();

    let report = pipeline.deliver(&plan).await.map_err(|e| {
        tracing::error!(error = %e, kind = e.kind(), "Speech delivery failed");
        e
    })?;

    tracing::info!(
        "Audio written to {} ({} bytes from {} characters)",
        report.plan.sink,
        report.audio_bytes_written,
        report.characters_read
    );

    Ok(())
}
