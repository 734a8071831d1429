/// Maximum distance, in characters, between a keyword and the secret it
/// introduces.
const CONTEXT_WINDOW: usize = 40;

/// Builds the keyword-context fragment shared by detector patterns.
///
/// The returned fragment matches any of `keywords` (case-insensitively)
/// followed by up to 40 characters of arbitrary context, lazily, so a secret
/// expression appended after it only matches near a keyword. Newlines count
/// as context; a keyword on the line above still introduces a secret.
#[must_use]
pub fn keyword_context(keywords: &[&str]) -> String {
    let joined = keywords.join("|");
    format!(r"(?i)(?:{joined})(?:.|[\n\r]){{0,{CONTEXT_WINDOW}}}?")
}
