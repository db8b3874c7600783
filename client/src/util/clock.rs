//! Wall-clock helpers for message timestamps.
//!
//! In the browser the local time zone comes from `js_sys::Date`; on the
//! server (SSR and tests) times are rendered in UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Two-digit `HH:MM` label.
#[must_use]
pub fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// `(hours, minutes)` of a UTC timestamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn utc_hours_minutes(ms: f64) -> (u32, u32) {
    let total_minutes = (ms.max(0.0) / 60_000.0) as u64;
    ((total_minutes / 60 % 24) as u32, (total_minutes % 60) as u32)
}

/// Label for a message timestamp in the viewer's local time.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn local_clock_label(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        clock_label(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (hours, minutes) = utc_hours_minutes(ms);
        clock_label(hours, minutes)
    }
}
