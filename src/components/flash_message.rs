//! Flash Message Component
//!
//! Transient error banner fed by `AppContext::flash_error`. The context owns
//! the auto-clear timer; this component only renders whatever is current.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn FlashMessage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || match ctx.flash.get() {
            Some(message) => view! {
                <div class="flash-message error" role="alert">{message}</div>
            }.into_any(),
            None => view! { <div class="flash-message hidden"></div> }.into_any(),
        }}
    }
}
