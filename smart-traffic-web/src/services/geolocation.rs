use js_sys::{Function, Promise};
use smart_traffic_core::LatLng;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError, PositionOptions};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("Geolocation not supported")]
    Unsupported,
    #[error("Unable to get location: {0}")]
    Unavailable(String),
}

fn geolocation() -> Option<Geolocation> {
    web_sys::window()?.navigator().geolocation().ok()
}

fn coords_of(position: &GeolocationPosition) -> LatLng {
    let coords = position.coords();
    LatLng::new(coords.latitude(), coords.longitude())
}

fn high_accuracy() -> PositionOptions {
    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options
}

fn failure_message(err: &JsValue) -> String {
    err.dyn_ref::<GeolocationPositionError>()
        .map_or_else(|| crate::dom::js_error_message(err), GeolocationPositionError::message)
}

/// One-shot device position.
///
/// # Errors
/// Returns [`GeoError::Unsupported`] without a geolocation API and
/// [`GeoError::Unavailable`] when the user denies access or no fix arrives.
#[allow(clippy::future_not_send)]
pub async fn current_position() -> Result<LatLng, GeoError> {
    let geo = geolocation().ok_or(GeoError::Unsupported)?;
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_now = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::UNDEFINED, &position);
        });
        let on_error = Closure::once_into_js(move |err: JsValue| {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        });
        if let Err(err) = geo.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            let _ = reject_now.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| GeoError::Unavailable(failure_message(&err)))?;
    let position: GeolocationPosition = value
        .dyn_into()
        .map_err(|err| GeoError::Unavailable(failure_message(&err)))?;
    Ok(coords_of(&position))
}

/// Continuous position updates, cancelled when dropped.
pub struct PositionWatch {
    id: i32,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl PositionWatch {
    /// Start watching; `None` when geolocation is unavailable.
    pub fn start(mut on_position: impl FnMut(LatLng) + 'static) -> Option<Self> {
        let geo = geolocation()?;
        let callback = Closure::wrap(Box::new(move |value: JsValue| {
            if let Ok(position) = value.dyn_into::<GeolocationPosition>() {
                on_position(coords_of(&position));
            }
        }) as Box<dyn FnMut(JsValue)>);
        let id = geo
            .watch_position_with_error_callback_and_options(
                callback.as_ref().unchecked_ref(),
                None,
                &high_accuracy(),
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for PositionWatch {
    fn drop(&mut self) {
        if let Some(geo) = geolocation() {
            geo.clear_watch(self.id);
        }
    }
}
