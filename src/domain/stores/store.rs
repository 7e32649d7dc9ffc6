//! Store value objects.

use serde::{Deserialize, Serialize};

/// Marker position on the mocked map, as percentages of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub hours: String,
    pub features: Vec<String>,
    pub distance: String,
    pub pin: MapPin,
    pub rating: f32,
    pub is_open: bool,
}

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

impl Store {
    /// Google Maps directions link with the address as destination.
    pub fn directions_url(&self) -> String {
        format!("{}{}", DIRECTIONS_BASE, urlencoding::encode(&self.address))
    }

    /// `tel:` link dialling the store's phone number as listed.
    pub fn call_link(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn directions_message(&self) -> String {
        format!("Opening directions to {}!", self.name)
    }

    pub fn call_message(&self) -> String {
        format!("Calling {}...", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downtown() -> Store {
        Store {
            id: "1".to_string(),
            name: "Downtown Location".to_string(),
            address: "123 Main Street, Downtown".to_string(),
            city: "new-york".to_string(),
            phone: "(555) 123-4567".to_string(),
            hours: "Mon-Sun: 10:00 AM - 11:00 PM".to_string(),
            features: vec!["Drive-Thru".to_string()],
            distance: "2.1 miles".to_string(),
            pin: MapPin { x: 25.0, y: 40.0 },
            rating: 4.8,
            is_open: true,
        }
    }

    #[test]
    fn directions_url_percent_encodes_address() {
        assert_eq!(
            downtown().directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=123%20Main%20Street%2C%20Downtown"
        );
    }

    #[test]
    fn call_link_uses_phone_verbatim() {
        assert_eq!(downtown().call_link(), "tel:(555) 123-4567");
    }

    #[test]
    fn toast_messages() {
        assert_eq!(downtown().directions_message(), "Opening directions to Downtown Location!");
        assert_eq!(downtown().call_message(), "Calling Downtown Location...");
    }
}
