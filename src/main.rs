use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so exported content on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("BOOKMARK_EXPORT_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    bookmark_export::cli::run()
}
