use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub iata_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Airport {
    /// `"CGK - Soekarno-Hatta (Jakarta, Indonesia)"`; empty parts are dropped.
    pub fn label(&self) -> String {
        let mut label = self.iata_code.clone();
        if !self.name.is_empty() {
            label.push_str(" - ");
            label.push_str(&self.name);
        }
        let location: Vec<&str> = [self.city.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if !location.is_empty() {
            label.push_str(&format!(" ({})", location.join(", ")));
        }
        label
    }

    /// Picker label; the country is only shown alongside a city.
    pub fn option(&self) -> AirportOption {
        let mut label = format!("{} - {}", self.iata_code, self.name);
        if !self.city.is_empty() {
            if self.country.is_empty() {
                label.push_str(&format!(" ({})", self.city));
            } else {
                label.push_str(&format!(" ({}, {})", self.city, self.country));
            }
        }
        AirportOption {
            value: self.iata_code.clone(),
            label,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAirportRequest {
    pub iata_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

pub type UpdateAirportRequest = AddAirportRequest;

/// Value/label pair for airport pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(name: &str, city: &str, country: &str) -> Airport {
        let now = Utc::now();
        Airport {
            iata_code: "CGK".to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            latitude: None,
            longitude: None,
            timezone: "Asia/Jakarta".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(
            airport("Soekarno-Hatta", "Jakarta", "Indonesia").label(),
            "CGK - Soekarno-Hatta (Jakarta, Indonesia)"
        );
        assert_eq!(airport("Soekarno-Hatta", "", "Indonesia").label(), "CGK - Soekarno-Hatta (Indonesia)");
        assert_eq!(airport("", "", "").label(), "CGK");
    }

    #[test]
    fn test_option_hides_country_without_city() {
        let option = airport("Soekarno-Hatta", "", "Indonesia").option();
        assert_eq!(
            option,
            AirportOption {
                value: "CGK".to_string(),
                label: "CGK - Soekarno-Hatta".to_string(),
            }
        );

        let option = airport("Soekarno-Hatta", "Jakarta", "Indonesia").option();
        assert_eq!(option.label, "CGK - Soekarno-Hatta (Jakarta, Indonesia)");
    }
}
