//! Natural-language replies for each intent.

use crate::features::chat::models::Intent;
use crate::shared::constants::OFFICIAL_SCHEDULE;

const LOCATION_HINT: &str =
    "Puedes pedir: 'Sedes en Guatemala', 'Ubicación sedes Quetzaltenango'.";
const LOCATION_QUERY_EXAMPLE: &str = "/api/offices?region=Guatemala";

const COMPLAINT_ENDPOINT: &str = "/api/complaints";
const COMPLAINT_EXAMPLE: &[(&str, &str)] = &[
    ("reporterName", "Juan Pérez"),
    ("nationalId", "1234567890101"),
    ("phone", "5555-5555"),
    ("region", "Guatemala"),
    ("category", "violencia"),
    ("description", "Descripción breve..."),
];

const FALLBACK: &str =
    "No pude reconocer tu solicitud. Puedo ayudarte con: horarios, sedes y denuncias.";

/// Compose the reply for `intent`. `office_count` is only used for location inquiries.
pub fn compose(intent: Intent, office_count: usize) -> String {
    match intent {
        Intent::ScheduleInquiry => OFFICIAL_SCHEDULE.to_string(),
        Intent::LocationInquiry => format!(
            "Tengo {} sedes registradas. {} También: {}",
            office_count, LOCATION_HINT, LOCATION_QUERY_EXAMPLE
        ),
        Intent::ComplaintIntake => format!(
            "Envía POST a {} con JSON similar a: {}",
            COMPLAINT_ENDPOINT,
            render_example(COMPLAINT_EXAMPLE)
        ),
        Intent::Unknown => FALLBACK.to_string(),
    }
}

/// Render pairs as `{'key': 'value', ...}` for display inside a chat bubble
fn render_example(pairs: &[(&str, &str)]) -> String {
    let body = pairs
        .iter()
        .map(|(key, value)| format!("'{}': '{}'", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}
