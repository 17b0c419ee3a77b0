use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use xicon::Layout;

/// Generates the iOS app icon set from the pre-rendered logo sizes.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory the workspace layout is resolved from. Defaults to the
    /// directory containing this executable.
    #[clap(long)]
    script_dir: Option<PathBuf>,
    /// Directory containing the `{size}x{size}.png` logos.
    #[clap(long)]
    logo_dir: Option<PathBuf>,
    /// The `AppIcon.appiconset` directory to write to.
    #[clap(long)]
    output_dir: Option<PathBuf>,
}

impl Args {
    fn layout(self) -> Result<Layout> {
        Layout::resolve(self.script_dir.as_deref(), self.logo_dir, self.output_dir)
    }
}

fn main() -> ExitCode {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    match args.layout().and_then(|layout| xicon::run(&layout)) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) => {
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
