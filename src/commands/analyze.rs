//! Analyze command implementation

use crate::{
    config::Config,
    models::{AnalyzeOutcome, ProfileView},
    presenter::Analyzer,
    Result,
};

/// Handle the analyze command
pub async fn handle_analyze(config: Config, name: &str, as_json: bool) -> Result<()> {
    let analyzer = Analyzer::from_config(&config);

    if !as_json && analyzer.is_configured() && !name.trim().is_empty() {
        eprintln!("Scouting data for {name}...");
    }

    let outcome = analyzer.analyze(name).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", format_outcome(&outcome));
    }

    Ok(())
}

/// Plain-text rendering of an outcome for the terminal
pub fn format_outcome(outcome: &AnalyzeOutcome) -> String {
    match outcome {
        AnalyzeOutcome::Found(view) => format_profile(view),
        AnalyzeOutcome::MissingName => format!("⚠ {}\n", AnalyzeOutcome::MISSING_NAME_MESSAGE),
        other => format!("✗ {}\n", other.banner().unwrap_or_default()),
    }
}

fn format_profile(view: &ProfileView) -> String {
    let p = &view.profile;
    format!(
        "✓ {}\n\
         Country: {}\n\
         Role: {}\n\
         Fact: {}\n\
         Batting: {}\n\
         Bowling: {}\n\
         Image: {} ({})\n",
        view.banner,
        p.country,
        p.role,
        p.interesting_fact,
        p.batting_stats,
        p.bowling_stats,
        view.image.url,
        view.image.caption,
    )
}
