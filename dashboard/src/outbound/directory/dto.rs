//! DTOs for decoding directory JSON responses.
//!
//! Upstream shape is trusted loosely: every slot decodes through a lenient
//! wrapper so a partially-shaped record still yields a complete domain
//! [`User`] with empty text where data was missing.
//!
//! - text slots: strings verbatim, numbers/booleans as their JSON text,
//!   anything else empty;
//! - nested records: objects decode field-by-field, anything else is empty;
//! - `id`: integers, or strings of ASCII digits; anything else is absent.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Address, Company, Geo, User, UserId};

#[derive(Debug, Default, PartialEq, Eq)]
struct LenientText(String);

impl<'de> Deserialize<'de> for LenientText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        };
        Ok(Self(text))
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct LenientId(Option<i64>);

impl<'de> Deserialize<'de> for LenientId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                text.parse().ok()
            }
            _ => None,
        };
        Ok(Self(id))
    }
}

/// A nested record that falls back to its default for non-object JSON.
#[derive(Debug, Default)]
struct LenientRecord<T>(T);

impl<'de, T> Deserialize<'de> for LenientRecord<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(record_from_value(Value::deserialize(deserializer)?)))
    }
}

fn record_from_value<T: DeserializeOwned + Default>(value: Value) -> T {
    match value {
        // Every field is lenient and defaulted, so object decoding cannot
        // fail on content; fall back anyway rather than propagate.
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeoDto {
    lat: LenientText,
    lng: LenientText,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddressDto {
    street: LenientText,
    suite: LenientText,
    city: LenientText,
    zipcode: LenientText,
    geo: LenientRecord<GeoDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CompanyDto {
    name: LenientText,
    catch_phrase: LenientText,
    bs: LenientText,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct UserDto {
    id: LenientId,
    name: LenientText,
    username: LenientText,
    email: LenientText,
    phone: LenientText,
    website: LenientText,
    address: LenientRecord<AddressDto>,
    company: LenientRecord<CompanyDto>,
}

impl UserDto {
    /// Decode one collection element or single-record body.
    pub(super) fn from_value(value: Value) -> Self {
        record_from_value(value)
    }

    pub(super) fn into_domain(self) -> User {
        let LenientRecord(address) = self.address;
        let LenientRecord(geo) = address.geo;
        let LenientRecord(company) = self.company;
        User {
            id: self.id.0.map(UserId::new),
            name: self.name.0,
            username: self.username.0,
            email: self.email.0,
            phone: self.phone.0,
            website: self.website.0,
            address: Address {
                street: address.street.0,
                suite: address.suite.0,
                city: address.city.0,
                zipcode: address.zipcode.0,
                geo: Geo {
                    lat: geo.lat.0,
                    lng: geo.lng.0,
                },
            },
            company: Company {
                name: company.name.0,
                catch_phrase: company.catch_phrase.0,
                bs: company.bs.0,
            },
        }
    }
}

/// Whether a JSON body counts as "no record": `null`, `false`, zero or `""`.
pub(super) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn decode(value: Value) -> User {
        UserDto::from_value(value).into_domain()
    }

    #[test]
    fn complete_record_maps_every_field() {
        let user = decode(json!({
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
        }));

        assert_eq!(user.id, Some(UserId::new(1)));
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lng, "81.1496");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn missing_fields_become_empty() {
        let user = decode(json!({ "name": "Only Name" }));
        assert_eq!(user.name, "Only Name");
        assert_eq!(user.id, None);
        assert_eq!(user.email, "");
        assert_eq!(user.address, Address::default());
        assert_eq!(user.company, Company::default());
    }

    #[rstest]
    #[case::number(json!(42), "42")]
    #[case::float(json!(-37.5), "-37.5")]
    #[case::boolean(json!(true), "true")]
    #[case::null(Value::Null, "")]
    #[case::array(json!(["a"]), "")]
    #[case::object(json!({ "first": "A" }), "")]
    fn text_slots_accept_scalars(#[case] raw: Value, #[case] expected: &str) {
        let user = decode(json!({ "name": raw }));
        assert_eq!(user.name, expected);
    }

    #[rstest]
    #[case::integer(json!(7), Some(7))]
    #[case::digit_string(json!("12"), Some(12))]
    #[case::float(json!(1.5), None)]
    #[case::word(json!("abc"), None)]
    #[case::signed_string(json!("-3"), None)]
    #[case::empty_string(json!(""), None)]
    #[case::null(Value::Null, None)]
    fn ids_accept_integers_and_digit_strings(#[case] raw: Value, #[case] expected: Option<i64>) {
        let user = decode(json!({ "id": raw }));
        assert_eq!(user.id, expected.map(UserId::new));
    }

    #[test]
    fn non_object_nested_records_become_empty() {
        let user = decode(json!({
            "address": "somewhere",
            "company": null
        }));
        assert_eq!(user.address, Address::default());
        assert_eq!(user.company, Company::default());

        let user = decode(json!({ "address": { "city": "Gwenborough", "geo": 5 } }));
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.address.geo, Geo::default());
    }

    #[test]
    fn non_object_body_decodes_to_empty_user() {
        assert_eq!(decode(json!([1, 2])), User::default());
        assert_eq!(decode(json!("text")), User::default());
    }

    #[rstest]
    #[case::null(Value::Null, true)]
    #[case::false_flag(json!(false), true)]
    #[case::zero(json!(0), true)]
    #[case::float_zero(json!(0.0), true)]
    #[case::empty_string(json!(""), true)]
    #[case::true_flag(json!(true), false)]
    #[case::number(json!(3), false)]
    #[case::empty_object(json!({}), false)]
    #[case::empty_array(json!([]), false)]
    fn falsiness_follows_json_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_falsy(&value), expected);
    }
}
