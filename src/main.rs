use std::io;

use anyhow::Result;
use tracing::info;

use piecemoves_query::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("piecemoves starting");
    let stdin = io::stdin();
    Session::new().run(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
