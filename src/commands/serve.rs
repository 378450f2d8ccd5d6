//! Serve command implementation

use std::sync::Arc;

use crate::{config::Config, presenter::Analyzer, server, Result};

/// Handle the serve command
pub async fn handle_serve(config: Config, bind: &str) -> Result<()> {
    let analyzer = Analyzer::from_config(&config);
    if !analyzer.is_configured() {
        println!("⚠ No usable Gemini API key; every analyze action will report it");
    }

    println!("Cricket Insight listening on http://{bind}");
    server::run(Arc::new(analyzer), bind).await
}
