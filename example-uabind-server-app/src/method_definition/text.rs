use uabind::StatusCode;
use uabind_method::error::MethodFault;

/// Number of characters in `text`, plus `offset`.
pub fn length_plus_offset(offset: i32, text: String) -> Result<i32, MethodFault> {
    i32::try_from(text.chars().count())
        .ok()
        .and_then(|length| length.checked_add(offset))
        .ok_or_else(|| {
            MethodFault::new(StatusCode::BadOutOfRange, "length plus offset overflows Int32")
        })
}
