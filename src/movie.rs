//! The catalog record and the records every fresh catalog starts with.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Wire names of the [`Movie`] fields.
const FIELDS: [&str; 6] = ["entryNo", "movieName", "reviewScore", "synopsis", "Director", "yearOfRelease"];

/// One catalog entry.
///
/// Field names on the wire are camelCase except `Director`, which existing
/// clients send and expect capitalized. Missing or `null` fields decode to
/// their zero value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Movie {
    #[serde(rename = "entryNo", deserialize_with = "null_as_zero")]
    pub entry_no: i64,
    #[serde(rename = "movieName", deserialize_with = "null_as_zero")]
    pub movie_name: String,
    #[serde(
        rename = "reviewScore",
        deserialize_with = "null_as_zero",
        serialize_with = "whole_as_integer"
    )]
    pub review_score: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub synopsis: String,
    #[serde(rename = "Director", deserialize_with = "null_as_zero")]
    pub director: String,
    #[serde(rename = "yearOfRelease", deserialize_with = "null_as_zero")]
    pub year_of_release: i64,
}

impl Movie {
    /// Case-insensitive substring match on the director.
    pub fn directed_by(&self, needle: &str) -> bool {
        self.director.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Decodes a movie the way existing clients send them.
    ///
    /// Object keys match field names regardless of case (`director`,
    /// `YEAROFRELEASE`), and a bare `null` is the zero movie. Anything that
    /// is not an object or `null` is rejected.
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => {
                let fields: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, value)| match FIELDS.iter().find(|f| f.eq_ignore_ascii_case(&key)) {
                        Some(name) => ((*name).to_owned(), value),
                        None => (key, value),
                    })
                    .collect();
                serde_json::from_value(Value::Object(fields))
            }
            other => Err(de::Error::invalid_type(unexpected(&other), &"a movie object")),
        }
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Null | Value::Object(_) => de::Unexpected::Other("value"),
    }
}

fn null_as_zero<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

// Whole scores go out as `8`, not `8.0`.
fn whole_as_integer<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
    let whole = score.fract() == 0.0 && score.abs() < 1e15 && !(*score == 0.0 && score.is_sign_negative());
    if whole {
        s.serialize_i64(*score as i64)
    } else {
        s.serialize_f64(*score)
    }
}

/// The three records a seeded catalog holds at startup.
pub fn seed() -> Vec<Movie> {
    vec![
        Movie {
            entry_no: 1,
            movie_name: "Robo".into(),
            review_score: 8.5,
            synopsis: "A film about Robos".into(),
            director: "Shankar".into(),
            year_of_release: 2012,
        },
        Movie {
            entry_no: 2,
            movie_name: "Robo 2".into(),
            review_score: 7.5,
            synopsis: "A film about Robos - Part 2".into(),
            director: "Shankar".into(),
            year_of_release: 2018,
        },
        Movie {
            entry_no: 3,
            movie_name: "RRR".into(),
            review_score: 9.5,
            synopsis: "A fiction film about two freedom fighters".into(),
            director: "Rajamouli".into(),
            year_of_release: 2022,
        },
    ]
}
