//! Window scroll subscription scoped to the lifetime of a value.
//!
//! A [`ScrollListener`] registers its callback on construction and removes it
//! when dropped, so a component that stores one in a hook cannot leak the
//! listener past unmount.

/// Current vertical scroll offset of the page, `0.0` where there is no window.
pub fn current_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        match window.scroll_y() {
            Ok(y) if y >= 0.0 => y,
            _ => window
                .document()
                .and_then(|doc| doc.document_element())
                .map(|el| f64::from(el.scroll_top()))
                .unwrap_or(0.0),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

#[cfg(target_arch = "wasm32")]
pub struct ScrollListener {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListener {
    /// Calls `on_scroll` with the page offset after every window scroll event.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let callback = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
            move |_event: web_sys::Event| on_scroll(current_scroll_y()),
        );
        if let Err(err) = window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "could not subscribe to window scroll");
            return None;
        }
        Some(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "could not unsubscribe from window scroll");
        }
    }
}

/// Hosts without a browser window never emit scroll events.
#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollListener {
    _on_scroll: Box<dyn FnMut(f64)>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollListener {
    pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        Some(Self {
            _on_scroll: Box::new(on_scroll),
        })
    }
}
