//! Reaction emoji to target language lookup.
//!
//! Country flags and the short country emoji Slack ships (`:jp:`, `:fr:`)
//! both resolve to the language most commonly spoken there.

const REACTION_LANGUAGES: &[(&str, &str)] = &[
    ("ae", "Arabic"),
    ("sa", "Arabic"),
    ("eg", "Arabic"),
    ("br", "Portuguese"),
    ("pt", "Portuguese"),
    ("cn", "Chinese (Simplified)"),
    ("tw", "Chinese (Traditional)"),
    ("hk", "Chinese (Traditional)"),
    ("cz", "Czech"),
    ("dk", "Danish"),
    ("de", "German"),
    ("at", "German"),
    ("ch", "German"),
    ("es", "Spanish"),
    ("mx", "Spanish"),
    ("ar", "Spanish"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gb", "English"),
    ("uk", "English"),
    ("us", "English"),
    ("au", "English"),
    ("gr", "Greek"),
    ("il", "Hebrew"),
    ("in", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("jp", "Japanese"),
    ("kr", "Korean"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("se", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("ua", "Ukrainian"),
    ("vn", "Vietnamese"),
];

/// Resolve a reaction name such as `flag-jp`, `:fr:` or `jp` to a language.
#[must_use]
pub fn resolve_reaction(reaction: &str) -> Option<&'static str> {
    let name = reaction.trim().trim_matches(':').to_ascii_lowercase();
    let code = name.strip_prefix("flag-").unwrap_or(&name);

    REACTION_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, lang)| *lang)
}
