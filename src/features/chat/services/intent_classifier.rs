use crate::features::chat::models::Intent;

/// One row of the rule table: an intent and the keywords that trigger it
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

// Accented and unaccented spellings are listed explicitly; nothing is folded.
// "atención" has no unaccented twin here, so "atencion" does not match.
const SCHEDULE_KEYWORDS: &[&str] = &[
    "horario", "horarios", "atención", "atienden", "abren", "abierto", "cierra",
];

const LOCATION_KEYWORDS: &[&str] = &[
    "sede",
    "sedes",
    "ubicación",
    "ubicacion",
    "direccion",
    "dirección",
    "departamento",
    "mapa",
    "dónde",
    "donde",
];

const COMPLAINT_KEYWORDS: &[&str] = &[
    "denuncia", "denunciar", "maltrato", "violencia", "abuso", "reportar", "presentar",
];

/// Ordered keyword classifier. The first rule with a keyword contained in the
/// lower-cased message wins; no rule matching gives [`Intent::Unknown`].
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, message: &str) -> Intent {
        let lower = message.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(vec![
            IntentRule {
                intent: Intent::ScheduleInquiry,
                keywords: SCHEDULE_KEYWORDS,
            },
            IntentRule {
                intent: Intent::LocationInquiry,
                keywords: LOCATION_KEYWORDS,
            },
            IntentRule {
                intent: Intent::ComplaintIntake,
                keywords: COMPLAINT_KEYWORDS,
            },
        ])
    }
}
