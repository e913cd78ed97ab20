use leptos::*;

use crate::state::use_app_context;

/// Text input whose value lives in the view under its element id
#[component]
pub fn TextField(id: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let read = ctx.view.clone();
    let write = ctx.view.clone();

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || read.text_or_empty(id)
                on:input=move |ev| write.set_text(id, &event_target_value(&ev))
            />
        </div>
    }
}

/// Select whose value lives in the view under its element id
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let ctx = use_app_context();
    let read = ctx.view.clone();
    let write = ctx.view.clone();

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || read.text_or_empty(id)
                on:change=move |ev| write.set_text(id, &event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Id of the element a click landed on; the modal id itself means the backdrop
pub fn backdrop_target(ev: &ev::MouseEvent) -> String {
    event_target::<web_sys::Element>(ev).id()
}
