/// Official office hours; returned verbatim by the schedule endpoint and the chat router
pub const OFFICIAL_SCHEDULE: &str = "La PGN atiende de lunes a viernes de 8:00 a 16:00 horas.";

/// Confirmation returned after a complaint is stored
pub const COMPLAINT_CONFIRMATION: &str =
    "Su denuncia preliminar fue registrada. Un operador de la PGN revisará la información.";
