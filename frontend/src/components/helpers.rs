use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a short-lived notice at the bottom of the page.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Grey placeholder block shown while data is loading.
pub fn skeleton(class: &'static str) -> yew::Html {
    yew::html! { <div class={yew::classes!("skeleton", class)} aria-hidden="true"></div> }
}
