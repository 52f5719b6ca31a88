//! GitHub timestamps, strictly `YYYY-MM-DDTHH:MM:SSZ`.

use serde::{de, ser, Deserialize, Deserializer, Serializer};
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

const GITHUB_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

pub(crate) fn serialize<S: Serializer>(
    date: &OffsetDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let formatted = date
        .to_offset(UtcOffset::UTC)
        .format(GITHUB_DATE_FORMAT)
        .map_err(ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<OffsetDateTime, D::Error> {
    let value = String::deserialize(deserializer)?;
    PrimitiveDateTime::parse(&value, GITHUB_DATE_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(de::Error::custom)
}
