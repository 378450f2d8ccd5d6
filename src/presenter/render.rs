//! Server-side HTML for the single analyzer page.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::models::{AnalyzeOutcome, ProfileView};

const STYLE: &str = r#"<style>
body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: .5rem; margin-bottom: 1rem; }
input[type=text] { flex: 1; padding: .5rem; }
.banner { padding: .75rem 1rem; border-radius: .4rem; margin: 1rem 0; }
.success { background: #e6f4ea; color: #1e4620; }
.warning { background: #fff4e5; color: #663c00; }
.error { background: #fdecea; color: #611a15; }
.info { background: #e8f0fe; color: #0b3d91; padding: .75rem 1rem; border-radius: .4rem; }
.columns { display: grid; grid-template-columns: 1fr 2fr; gap: 1.5rem; }
.columns img { width: 100%; }
figcaption { text-align: center; color: #555; font-size: .9rem; }
textarea { width: 100%; height: 70px; overflow-y: auto; resize: vertical; }
</style>"#;

// Reveal the busy indicator and block a second submit until the page reloads.
const SCRIPT: &str = r#"<script>
document.getElementById("analyze-form").addEventListener("submit", function () {
  var name = document.getElementById("player_name").value;
  document.getElementById("busy-name").textContent = name;
  document.getElementById("busy").hidden = false;
  document.getElementById("analyze-button").disabled = true;
});
</script>"#;

/// Render the whole page for the current input value and outcome.
pub fn render_page(player_name: &str, outcome: &AnalyzeOutcome) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Cricket Insight AI</title>\n",
    );
    html.push_str(STYLE);
    html.push_str("\n</head>\n<body>\n<h1>&#127951; AI Cricket Analyzer</h1>\n");

    html.push_str(&format!(
        "<form id=\"analyze-form\" method=\"post\" action=\"/analyze\">\n\
         <label for=\"player_name\">Enter Player Name</label>\n\
         <input type=\"text\" id=\"player_name\" name=\"player_name\" \
         placeholder=\"e.g. Rohit Sharma\" value=\"{}\">\n\
         <button id=\"analyze-button\" type=\"submit\">Analyze Player</button>\n\
         </form>\n",
        attr(player_name)
    ));
    html.push_str(
        "<div id=\"busy\" class=\"banner info\" hidden>Scouting data for \
         <span id=\"busy-name\"></span>...</div>\n",
    );

    if let Some(message) = outcome.banner() {
        html.push_str(&format!(
            "<div class=\"banner {}\" role=\"alert\">{}</div>\n",
            banner_class(outcome),
            text(message)
        ));
    }

    if let AnalyzeOutcome::Found(view) = outcome {
        html.push_str(&render_profile(view));
    }

    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

fn banner_class(outcome: &AnalyzeOutcome) -> &'static str {
    match outcome {
        AnalyzeOutcome::Found(_) => "success",
        AnalyzeOutcome::MissingName => "warning",
        _ => "error",
    }
}

fn render_profile(view: &ProfileView) -> String {
    let profile = &view.profile;
    format!(
        "<div class=\"columns\">\n\
         <figure>\n<img src=\"{src}\" alt=\"{caption}\">\n<figcaption>{caption_text}</figcaption>\n</figure>\n\
         <div>\n\
         <h2>{country}</h2>\n\
         <p><strong>Role:</strong> {role}</p>\n\
         <p class=\"info\">&#128161; <strong>Fact:</strong> {fact}</p>\n\
         <h3>&#128202; Statistics</h3>\n\
         <label for=\"batting\">Batting Details</label>\n\
         <textarea id=\"batting\" readonly>{batting}</textarea>\n\
         <label for=\"bowling\">Bowling Details</label>\n\
         <textarea id=\"bowling\" readonly>{bowling}</textarea>\n\
         </div>\n</div>\n",
        src = attr(&view.image.url),
        caption = attr(&view.image.caption),
        caption_text = text(&view.image.caption),
        country = text(&profile.country),
        role = text(&profile.role),
        fact = text(&profile.interesting_fact),
        batting = text(&profile.batting_stats),
        bowling = text(&profile.bowling_stats),
    )
}
