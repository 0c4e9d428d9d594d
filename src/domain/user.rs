//! User domain model and client-side user synthesis.
//!
//! This module defines the [`User`] record as served by the remote API, along with
//! [`UserFormData`], the editable subset collected by the add-user form. Users are
//! never mutated once created; new ones are synthesized from form data with a
//! timestamp-derived id and generated geo coordinates.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Representative city coordinates used to place newly added users.
const CITY_COORDINATES: [(f64, f64); 15] = [
    (40.7128, -74.006),    // New York
    (34.0522, -118.2437),  // Los Angeles
    (41.8781, -87.6298),   // Chicago
    (29.7604, -95.3698),   // Houston
    (33.749, -84.388),     // Atlanta
    (25.7617, -80.1918),   // Miami
    (39.9526, -75.1652),   // Philadelphia
    (32.7767, -96.797),    // Dallas
    (37.7749, -122.4194),  // San Francisco
    (47.6062, -122.3321),  // Seattle
    (51.5074, -0.1278),    // London
    (48.8566, 2.3522),     // Paris
    (52.52, 13.405),       // Berlin
    (35.6762, 139.6503),   // Tokyo
    (31.2304, 121.4737),   // Shanghai
];

/// Maximum jitter applied to each coordinate, in degrees.
const GEO_JITTER: f64 = 0.05;

/// A user record as returned by the users endpoint.
///
/// Field names follow the API's camelCase JSON. Optional text fields are
/// `None` when absent from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub address: Address,
    pub company: Company,
}

/// Postal address with geo coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Latitude/longitude pair, kept as strings like the API serves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

/// Raw values entered in the add-user form.
///
/// Everything is a plain string; optional fields are empty when left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: AddressFormData,
    pub company: CompanyFormData,
}

/// Address portion of [`UserFormData`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFormData {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// Company portion of [`UserFormData`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFormData {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl UserFormData {
    /// Returns a mutable handle to the value at a dotted field path.
    ///
    /// Paths match the validator's field names (`"name"`, `"address.street"`,
    /// `"company.catchPhrase"`, ...). Returns `None` for unknown paths.
    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        let slot = match field {
            "name" => &mut self.name,
            "username" => &mut self.username,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "website" => &mut self.website,
            "address.street" => &mut self.address.street,
            "address.suite" => &mut self.address.suite,
            "address.city" => &mut self.address.city,
            "address.zipcode" => &mut self.address.zipcode,
            "company.name" => &mut self.company.name,
            "company.catchPhrase" => &mut self.company.catch_phrase,
            "company.bs" => &mut self.company.bs,
            _ => return None,
        };
        Some(slot)
    }

    /// Returns the value at a dotted field path, if the path is known.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        let value = match field {
            "name" => &self.name,
            "username" => &self.username,
            "email" => &self.email,
            "phone" => &self.phone,
            "website" => &self.website,
            "address.street" => &self.address.street,
            "address.suite" => &self.address.suite,
            "address.city" => &self.address.city,
            "address.zipcode" => &self.address.zipcode,
            "company.name" => &self.company.name,
            "company.catchPhrase" => &self.company.catch_phrase,
            "company.bs" => &self.company.bs,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Builds a complete [`User`] from the form values.
    ///
    /// The caller supplies the id and coordinates; see [`UserFormData::into_new_user`]
    /// for the variant that generates both. Values are trimmed and blank optional
    /// fields become `None`.
    #[must_use]
    pub fn into_user(self, id: i64, geo: Geo) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            website: non_blank(self.website),
            address: Address {
                street: self.address.street.trim().to_string(),
                suite: non_blank(self.address.suite),
                city: self.address.city.trim().to_string(),
                zipcode: self.address.zipcode.trim().to_string(),
                geo,
            },
            company: Company {
                name: self.company.name.trim().to_string(),
                catch_phrase: non_blank(self.company.catch_phrase),
                bs: non_blank(self.company.bs),
            },
        }
    }

    /// Synthesizes a new [`User`] with a generated id and random coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdeck::domain::UserFormData;
    ///
    /// let mut form = UserFormData::default();
    /// form.name = "John Doe".to_string();
    /// let user = form.into_new_user();
    /// assert!(user.id > 0);
    /// assert!(user.address.geo.lat.parse::<f64>().is_ok());
    /// ```
    #[must_use]
    pub fn into_new_user(self) -> User {
        let id = generate_user_id();
        let geo = generate_geo(&mut rand::thread_rng());
        tracing::debug!(user_id = id, lat = %geo.lat, lng = %geo.lng, "synthesized new user");
        self.into_user(id, geo)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns a new user id derived from the current time in milliseconds.
#[must_use]
pub fn generate_user_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Picks a city from the fixed coordinate set and applies a small random offset.
///
/// Coordinates are formatted to 6 decimal places.
pub fn generate_geo<R: Rng + ?Sized>(rng: &mut R) -> Geo {
    let index = rng.gen_range(0..CITY_COORDINATES.len());
    let (lat, lng) = CITY_COORDINATES[index];
    let lat_offset = rng.gen_range(-GEO_JITTER..GEO_JITTER);
    let lng_offset = rng.gen_range(-GEO_JITTER..GEO_JITTER);

    Geo {
        lat: format!("{:.6}", lat + lat_offset),
        lng: format!("{:.6}", lng + lng_offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn deserializes_api_payload() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.address.suite.as_deref(), Some("Apt. 556"));
        assert_eq!(
            user.company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{
            "id": 2, "name": "A B", "username": "ab", "email": "a@b.co", "phone": "123",
            "address": { "street": "s", "city": "c", "zipcode": "12345",
                         "geo": { "lat": "0", "lng": "0" } },
            "company": { "name": "Co" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.website.is_none());
        assert!(user.address.suite.is_none());
        assert!(user.company.bs.is_none());
    }

    #[test]
    fn field_paths_round_trip_through_form() {
        let mut form = UserFormData::default();
        *form.field_mut("address.city").unwrap() = "Paris".to_string();
        *form.field_mut("company.catchPhrase").unwrap() = "Hello".to_string();
        assert_eq!(form.field("address.city"), Some("Paris"));
        assert_eq!(form.company.catch_phrase, "Hello");
        assert!(form.field_mut("address.geo").is_none());
    }

    #[test]
    fn into_user_trims_and_drops_blank_optionals() {
        let mut form = UserFormData::default();
        form.name = "  John Doe ".to_string();
        form.website = "   ".to_string();
        form.address.suite = String::new();
        let geo = Geo { lat: "1.000000".into(), lng: "2.000000".into() };

        let user = form.into_user(42, geo.clone());
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "John Doe");
        assert!(user.website.is_none());
        assert!(user.address.suite.is_none());
        assert_eq!(user.address.geo, geo);
    }

    #[test]
    fn generated_geo_stays_near_a_known_city() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let geo = generate_geo(&mut rng);
            let lat: f64 = geo.lat.parse().unwrap();
            let lng: f64 = geo.lng.parse().unwrap();
            assert_eq!(geo.lat.split('.').nth(1).map(str::len), Some(6));
            assert!(CITY_COORDINATES.iter().any(|(clat, clng)| {
                (lat - clat).abs() <= GEO_JITTER + 1e-6 && (lng - clng).abs() <= GEO_JITTER + 1e-6
            }));
        }
    }
}
