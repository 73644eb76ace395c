//! Browser I/O: backend API, geocoder, routing service, and device location
//!
//! Each call maps browser failures into the core's typed errors so callers
//! never handle raw `JsValue`s.
pub mod backend;
pub mod geocoder;
pub mod geolocation;
pub mod routing;
