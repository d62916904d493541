use serde::{Deserialize, Deserializer, Serialize};

/// A football competition as listed by `/leagues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub abbr: String,
    #[serde(default)]
    pub logos: Logos,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logos {
    #[serde(default)]
    pub light: String,
    #[serde(default)]
    pub dark: String,
}

/// One row of a league table.
///
/// The API returns rows already ranked, so there is no position field here -
/// a row's rank is its index in the returned sequence plus one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team: Team,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(deserialize_with = "u32_from_str_or_num")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_display_name: String,
    #[serde(default)]
    pub logo: String,
}

/// A named statistic. `abbreviation` is the lookup key (`GP`, `W`, `D`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub short_display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub display_value: String,
}

/// A year-scoped edition of a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: i32,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub types: Vec<SeasonType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// Team ids show up both as numbers and as numeric strings
fn u32_from_str_or_num<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Num(u32),
        Str(String),
    }

    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Num(n) => Ok(n),
        StrOrNum::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
