//! Prompt construction for the player profile request.

/// The six keys the model must return, each with its one-line description.
pub const PROFILE_FIELDS: [(&str, &str); 6] = [
    ("full_name", "Name of the player"),
    ("country", "Country they play for"),
    ("role", "e.g. Right-hand Bat / Right-arm Offbreak"),
    (
        "batting_stats",
        "A string summarizing their batting (e.g. \"Matches: 200, Runs: 8000\")",
    ),
    (
        "bowling_stats",
        "A string summarizing their bowling (e.g. \"Wickets: 150\")",
    ),
    ("interesting_fact", "One short, unique fact about them."),
];

/// Build the instruction asking for a raw JSON profile of `name`.
///
/// The name is embedded verbatim; any string is accepted.
pub fn build_prompt(name: &str) -> String {
    let mut prompt = format!(
        "Return a valid JSON object for the cricket player \"{name}\".\n\
         The JSON must have these exact keys:\n"
    );
    for (key, description) in PROFILE_FIELDS {
        prompt.push_str(&format!("- \"{key}\": {description}\n"));
    }
    prompt.push_str("\nDo NOT use Markdown formatting. Just return the raw JSON string.\n");
    prompt
}
