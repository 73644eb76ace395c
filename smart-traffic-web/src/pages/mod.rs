pub mod models;
pub mod not_found;
pub mod predict;
pub mod routes;

/// Convert a slider reading to an integer field.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn slider_u8(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn slider_i32(value: f64) -> i32 {
    value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn slider_u32(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
