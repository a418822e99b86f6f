//! SAUCE records fetched from an archive API instead of decoded locally.
//!
//! Archive APIs publish the trailer as a JSON object keyed by the SAUCE field
//! names. Any key may be missing, and the dates come as numbers or strings.
//! The ANSI flags usually arrive pre-split in `ansiflags`.
//!
//! ```
//! use ansi_sauce::RemoteSauce;
//!
//! let remote: RemoteSauce = serde_json::from_str(
//!     r#"{"Title": "fire #40 members", "Date": 20240707, "Datatype": 1, "Filetype": 1}"#,
//! ).unwrap();
//! assert_eq!(remote.title.as_deref(), Some("fire #40 members"));
//! assert_eq!(remote.date.unwrap().to_string(), "20240707");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// The `Date` value, which some sources send as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteDate {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for RemoteDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteDate::Number(number) => write!(f, "{number}"),
            RemoteDate::Text(text) => f.write_str(text),
        }
    }
}

/// The split flags byte: `blink` is the ICE colors bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsiFlags {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub blink: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub ls: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub ar: Option<u8>,
}

/// One SAUCE record as published by a remote archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteSauce {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub date: Option<RemoteDate>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub filesize: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub datatype: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub filetype: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub tinfo1: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub tinfo2: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub tinfo3: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub tinfo4: Option<u16>,
    /// The packed flags byte, used when `ansiflags` is missing.
    #[serde(default, deserialize_with = "deserialize_number")]
    pub tflags: Option<u8>,
    /// Font name
    #[serde(default)]
    pub tinfos: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, rename = "ansiflags")]
    pub ansi_flags: Option<AnsiFlags>,
}

/// Accepts `true`/`false` as well as `0`/`1`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(u64),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0,
    }))
}

/// Reads an integer field. Numbers that do not fit the field, and values
/// that are not integers, read as absent.
fn deserialize_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + TryFrom<i64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Unsigned(u64),
        Signed(i64),
        Other(serde::de::IgnoredAny),
    }

    let number = match Option::<Number>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Number::Unsigned(value)) => <T as TryFrom<u64>>::try_from(value).ok(),
        Some(Number::Signed(value)) => <T as TryFrom<i64>>::try_from(value).ok(),
        Some(Number::Other(_)) => None,
    };
    if number.is_none() {
        log::warn!("Remote SAUCE field out of range - ignoring");
    }
    Ok(number)
}
