//! Prompt building for the generation endpoint.

use super::GenerateRequest;

/// Level used when the request does not name one.
pub const DEFAULT_LEVEL: &str = "Lycée";

/// Output format used when the request does not name one.
pub const DEFAULT_FORMAT: &str = "Fiche + Quiz";

const NO_DETAILS: &str = "—";

/// Build the French teacher prompt for a validated request.
///
/// Empty strings count as absent, so a blank form field still gets the
/// default.
pub fn build_prompt(req: &GenerateRequest) -> String {
    let level = non_empty(req.level.as_deref()).unwrap_or(DEFAULT_LEVEL);
    let format = non_empty(req.format.as_deref()).unwrap_or(DEFAULT_FORMAT);
    let details = non_empty(req.details.as_deref()).unwrap_or(NO_DETAILS);

    format!(
        "Tu es un excellent professeur. Génère un contenu en FRANÇAIS.\n\
         \n\
         THEME: {topic}\n\
         NIVEAU: {level}\n\
         FORMAT: {format}\n\
         CONSIGNES: {details}\n\
         \n\
         Règles:\n\
         - Le contenu doit porter uniquement sur \"{topic}\"\n\
         - Structure claire: TITRES, puces, exemples\n\
         - Si \"Fiche + Quiz\": fiche puis quiz puis corrigé\n\
         - Quiz: 8 questions (4 QCM + 4 ouvertes) + corrigé",
        topic = req.topic,
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
