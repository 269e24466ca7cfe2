use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use speech_delivery::controllers::InvocationController;
use speech_delivery::infrastructure::aws::AwsClients;
use speech_delivery::infrastructure::config::{Config, TargetKind};
use speech_delivery::infrastructure::logging::init_logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Functions always read and write the configured bucket
    let config = Config::from_env_with_target(TargetKind::S3)?;

    init_logging(&config.log_format);

    let clients = AwsClients::load(&config).await;
    let pipeline = Arc::new(clients.pipeline());
    let controller = Arc::new(InvocationController::new(pipeline, Arc::new(config)));

    tracing::info!("Lambda handler ready");

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let controller = controller.clone();
        async move {
            tracing::info!(request_id = %event.context.request_id, "Invocation received");
            controller.handle(event.payload).await.map_err(Error::from)
        }
    }))
    .await
}
