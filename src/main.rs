use std::io;

use tracing_subscriber::EnvFilter;

use plum_rules::shell::shell_top::run_stdio_loop;

fn main() -> io::Result<()> {
    // stdout carries the shell protocol; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run_stdio_loop()
}
