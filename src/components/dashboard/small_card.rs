use leptos::*;

use crate::state::use_app_context;
use crate::state::view::card_value_id;

/// A single reading card
#[component]
pub fn SmallCard(label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let value_id = card_value_id(label);
    let element_id = value_id.clone();

    let value = move || {
        ctx.view
            .text(&value_id)
            .unwrap_or_else(|| "--".to_string())
    };

    view! {
        <div class="card small-card">
            <div class="card-label">{label}</div>
            <div class="card-value" id=element_id>
                {value}
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::state::provide_app_context;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_card_exposes_label_and_value() {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: web_sys::HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        document.body().unwrap().append_child(&parent).unwrap();

        mount_to(parent.clone(), || {
            provide_app_context();
            view! { <SmallCard label="Voltage"/> }
        });

        let label = parent
            .query_selector(".small-card .card-label")
            .unwrap()
            .unwrap();
        assert_eq!(label.text_content().as_deref(), Some("Voltage"));

        let value = parent
            .query_selector(".small-card .card-value")
            .unwrap()
            .unwrap();
        assert_eq!(value.id(), card_value_id("Voltage"));
    }
}
