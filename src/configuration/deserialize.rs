pub mod boolean_string {
    use serde::{Deserialize, Deserializer};

    /// Reads a boolean the way the reporting switch is documented: the value
    /// is a string, compared to `true` ignoring ASCII case, and anything else
    /// counts as `false`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|v| v.eq_ignore_ascii_case("true"))
    }
}
