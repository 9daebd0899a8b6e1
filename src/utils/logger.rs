use std::io::Stderr;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Plain fmt layer shared by both formats; logs go to stderr so stdout only carries names.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr> {
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        env_filter("truth_names=debug,info")
    } else {
        env_filter("truth_names=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer().compact())
        .init();
}

pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("truth_names=info"))
        .with(stderr_layer().json())
        .init();
}
