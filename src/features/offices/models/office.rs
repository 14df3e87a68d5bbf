/// A PGN office (sede) within a region
#[derive(Debug, Clone, PartialEq)]
pub struct OfficeLocation {
    /// Department the office belongs to
    pub region: String,
    pub site_name: String,
    pub address: String,
    pub phone: Option<String>,
    /// Opening hours, free text
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

const WEEKDAY_HOURS: &str = "Lunes a viernes de 8:00 a 16:00";

/// The fixed office table, in declaration order
pub fn default_offices() -> Vec<OfficeLocation> {
    vec![
        OfficeLocation {
            region: "Guatemala".to_string(),
            site_name: "Sede Central PGN".to_string(),
            address: "Zona 1, Ciudad de Guatemala".to_string(),
            phone: Some("1234-5678".to_string()),
            hours: Some(WEEKDAY_HOURS.to_string()),
            latitude: Some(14.6349),
            longitude: Some(-90.5069),
        },
        OfficeLocation {
            region: "Quetzaltenango".to_string(),
            site_name: "Sede PGN Quetzaltenango".to_string(),
            address: "Zona 3, Quetzaltenango".to_string(),
            phone: Some("7766-1122".to_string()),
            hours: Some(WEEKDAY_HOURS.to_string()),
            latitude: Some(14.8347),
            longitude: Some(-91.5180),
        },
        OfficeLocation {
            region: "Huehuetenango".to_string(),
            site_name: "Sede PGN Huehuetenango".to_string(),
            address: "Zona 1, Huehuetenango".to_string(),
            phone: Some("7765-0099".to_string()),
            hours: Some(WEEKDAY_HOURS.to_string()),
            latitude: Some(15.3190),
            longitude: Some(-91.4700),
        },
    ]
}
