//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   _______ ____   __      __         _ __
  / ____(_) __/  / /___ _/ /___  ___(_) /_
 / / __/ / /_   / / __ `/ / __ \/ __/ / __/
/ /_/ / / __/  / / /_/ / / /_/ / /_/ / /_
\____/_/_/     \_/\__,_/_/\____/\__/_/\__/

                 GifVault
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/api", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("{}", separator);
}
