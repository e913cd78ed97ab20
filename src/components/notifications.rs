use leptos::*;

use crate::state::use_toasts;

/// Stack of transient notifications
#[component]
pub fn Toasts() -> impl IntoView {
    let queue = use_toasts();
    let toasts = queue.toasts();

    view! {
        <div class="notifications">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let queue = queue.clone();
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("notification {}", toast.kind.as_str())
                            style=format!("background: {};", toast.kind.color())
                            on:click=move |_| queue.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
