use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

///
/// Parses booking start time.
///
/// Accepts RFC 3339 timestamps. Timestamps without an offset
/// are read in the given local offset.
///
pub fn parse_start_time(value: &str, local_offset: UtcOffset) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(start_time) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(start_time);
    }

    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(value, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
    })
    .ok()
    .map(|start_time| start_time.assume_offset(local_offset))
}

///
/// Formats start time for display, e.g. `Oct 17, 2026 3:05 PM`
///
pub fn format_start_time(start_time: OffsetDateTime, local_offset: UtcOffset) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none], [year] [hour repr:12 padding:none]:[minute] [period]"
    );

    start_time
        .to_offset(local_offset)
        .format(format)
        .unwrap_or_else(|_| start_time.to_string())
}
