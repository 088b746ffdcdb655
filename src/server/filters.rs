use askama::{Error, Result};
use time::{macros::format_description, OffsetDateTime};

pub fn timestamp(val: &OffsetDateTime) -> Result<String> {
    val.format(format_description!(
        "[weekday repr:short] [month repr:short] [day] [year] [hour]:[minute]:[second] GMT[offset_hour sign:mandatory][offset_minute] (UTC)"
    ))
    .map_err(|err| Error::Custom(Box::new(err)))
}
