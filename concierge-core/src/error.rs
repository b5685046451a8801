use thiserror::Error;

/// Everything that can end a concierge query. The engine itself never fails;
/// these all come from the lookup stages around it.
#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("City not found: '{city}'.")]
    LocationNotFound { city: String },

    #[error(
        "Date '{date}' not found in forecast range ({first} .. {last}).\n\
         Please enter a valid date (YYYY-MM-DD) inside that window."
    )]
    DateOutOfRange { date: String, first: String, last: String },

    #[error("Daily forecast data not found.")]
    ForecastUnavailable,

    #[error("Failed to reach {service}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    HttpStatus { service: &'static str, status: u16, body: String },

    #[error("Failed to parse {service} response")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConciergeError {
    /// Network, HTTP and payload failures are reported as one generic class.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ConciergeError::Transport { .. }
                | ConciergeError::HttpStatus { .. }
                | ConciergeError::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_out_of_range_mentions_window() {
        let err = ConciergeError::DateOutOfRange {
            date: "2030-01-01".into(),
            first: "2024-06-01".into(),
            last: "2024-06-16".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2030-01-01"));
        assert!(msg.contains("2024-06-01 .. 2024-06-16"));
        assert!(msg.contains("inside that window"));
        assert!(!err.is_transport());
    }

    #[test]
    fn classifies_transport_family() {
        let http = ConciergeError::HttpStatus {
            service: "Open-Meteo forecast",
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(http.is_transport());

        let decode = ConciergeError::Decode {
            service: "Open-Meteo geocoding",
            source: serde_json::from_str::<u8>("nope").unwrap_err(),
        };
        assert!(decode.is_transport());
        assert!(!ConciergeError::ForecastUnavailable.is_transport());
        assert!(!ConciergeError::LocationNotFound { city: "Atlantis".into() }.is_transport());
    }
}
