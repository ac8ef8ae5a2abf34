//! Custom serde helpers for the price document format.

/// Deserializes a `[priceString, timestamp]` pair.
///
/// The price stays a string here; numeric validation happens in the
/// series conversion so errors can name the offending range and index.
/// Some exports send the timestamp as a string as well, so both a JSON
/// number and a numeric string are accepted.
pub mod price_pair {
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::fmt;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stamp {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Pairs;

        impl<'de> Visitor<'de> for Pairs {
            type Value = Vec<(String, f64)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of [price, timestamp] pairs")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some((price, stamp)) = seq.next_element::<(String, Stamp)>()? {
                    let t = match stamp {
                        Stamp::Number(n) => n,
                        Stamp::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                            de::Error::custom(format!("Invalid timestamp: {}", s))
                        })?,
                    };
                    out.push((price, t));
                }
                Ok(out)
            }
        }

        deserializer.deserialize_seq(Pairs)
    }
}
