//! Page-view analytics.
//!
//! Analytics is fire-and-forget: sinks return errors so they can be tested,
//! but the header only logs them (see [`report_page`] / [`report_identify`]).

use std::fmt;
use std::sync::Arc;

use crate::core::error::AnalyticsError;

pub trait AnalyticsSink: Send + Sync {
    /// Record a page view for `path`.
    fn page(&self, path: &str) -> Result<(), AnalyticsError>;

    /// Associate following events with an account (`None` for anonymous).
    fn identify(&self, account: Option<&str>) -> Result<(), AnalyticsError>;
}

/// Shared handle passed through component props and context.
#[derive(Clone)]
pub struct Analytics(Arc<dyn AnalyticsSink>);

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// Browser builds talk to `window.analytics`; everything else only logs.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(WindowAnalytics)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(TracingAnalytics)
        }
    }

    pub fn sink(&self) -> &dyn AnalyticsSink {
        self.0.as_ref()
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Analytics(..)")
    }
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

pub fn report_page(sink: &dyn AnalyticsSink, path: &str) {
    if let Err(err) = sink.page(path) {
        tracing::warn!(%err, path, "analytics page view dropped");
    }
}

pub fn report_identify(sink: &dyn AnalyticsSink, account: Option<&str>) {
    if let Err(err) = sink.identify(account) {
        tracing::warn!(%err, ?account, "analytics identify dropped");
    }
}

/// Writes events to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn page(&self, path: &str) -> Result<(), AnalyticsError> {
        tracing::debug!(path, "page view");
        Ok(())
    }

    fn identify(&self, account: Option<&str>) -> Result<(), AnalyticsError> {
        tracing::debug!(?account, "identify");
        Ok(())
    }
}

/// Forwards to a segment-style `window.analytics` client when one is loaded.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAnalytics;

#[cfg(target_arch = "wasm32")]
impl WindowAnalytics {
    fn call(method: &'static str, arg: wasm_bindgen::JsValue) -> Result<(), AnalyticsError> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(AnalyticsError::Unavailable)?;
        let client = js_sys::Reflect::get(&window, &"analytics".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or(AnalyticsError::Unavailable)?;
        let func = js_sys::Reflect::get(&client, &method.into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(AnalyticsError::Unavailable)?;
        func.call1(&client, &arg).map(|_| ()).map_err(|err| AnalyticsError::Call {
            method,
            message: format!("{err:?}"),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl AnalyticsSink for WindowAnalytics {
    fn page(&self, path: &str) -> Result<(), AnalyticsError> {
        Self::call("page", path.into())
    }

    fn identify(&self, account: Option<&str>) -> Result<(), AnalyticsError> {
        let arg = account.map(Into::into).unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
        Self::call("identify", arg)
    }
}
