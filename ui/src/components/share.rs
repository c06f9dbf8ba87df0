use phumpanya_common::share::{ShareOutcome, ShareRequest};

/// Address of the page currently shown, used as the shared link.
pub fn current_url() -> String {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(href) = window.location().href() {
                return href;
            }
        }
    }
    String::new()
}

/// Offer the native share sheet, falling back to copying the link.
#[cfg(target_family = "wasm")]
pub async fn share(request: ShareRequest) -> ShareOutcome {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return ShareOutcome::Failed("no window".into());
    };
    let navigator = window.navigator();

    let share_fn = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    let Some(share_fn) = share_fn else {
        let promise = navigator.clipboard().write_text(&request.url);
        return match JsFuture::from(promise).await {
            Ok(_) => ShareOutcome::Copied,
            Err(e) => ShareOutcome::Failed(format!("{e:?}")),
        };
    };

    let data = js_sys::Object::new();
    for (key, value) in [
        ("title", &request.title),
        ("text", &request.text),
        ("url", &request.url),
    ] {
        let _ = js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
    }

    let promise = match share_fn.call1(&navigator, &data) {
        Ok(value) => value.dyn_into::<js_sys::Promise>(),
        Err(e) => return ShareOutcome::Failed(format!("{e:?}")),
    };
    match promise {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) => ShareOutcome::Shared,
            Err(e) => ShareOutcome::Failed(format!("{e:?}")),
        },
        Err(e) => ShareOutcome::Failed(format!("{e:?}")),
    }
}

#[cfg(not(target_family = "wasm"))]
pub async fn share(request: ShareRequest) -> ShareOutcome {
    tracing::debug!(url = %request.url, "Share requested outside the browser");
    ShareOutcome::Failed("sharing is only available in the browser".into())
}
