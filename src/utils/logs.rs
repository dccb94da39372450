use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        // INFO unless RUST_LOG says otherwise
        .with_env_filter(EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy())
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}
