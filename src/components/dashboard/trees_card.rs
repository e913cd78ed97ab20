use leptos::*;

use crate::services::TreeScale;

/// Trees-equivalent figure with a scale selector
#[component]
pub fn TreesCard() -> impl IntoView {
    let (scale, set_scale) = create_signal(TreeScale::X1);

    view! {
        <div class="card trees-card">
            <h3 class="card-title">"Trees Equivalent"</h3>
            <div class="trees-value">{move || scale.get().display_value()}</div>
            <div class="trees-scale">
                {TreeScale::ALL
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <button
                                class=move || {
                                    if scale.get() == option { "scale-button active" } else { "scale-button" }
                                }
                                on:click=move |_| set_scale.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
