//! Interactive dashboard — `jobdeck` / `jobdeck dashboard`.

use anyhow::Result;

use jobdeck::app::App;
use jobdeck::config::Config;

pub async fn cmd_dashboard(config: Config) -> Result<()> {
    let mut app = App::new(config);
    app.run().await
}
