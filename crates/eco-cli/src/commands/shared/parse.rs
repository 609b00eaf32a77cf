use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    deserialize_str(&normalized, raw, field)
}

/// Parse a camelCase enum value, accepting `in-progress` and `in_progress`
/// spellings for `inProgress`.
pub fn parse_camel_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    deserialize_str(&to_camel_case(raw), raw, field)
}

fn deserialize_str<T>(normalized: &str, raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::String(normalized.to_string()))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

fn to_camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, part) in raw.split(['-', '_']).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
