use leptos::*;

use crate::charts::{CanvasSurface, ChartSpec};
use crate::state::use_app_context;

/// Canvas that joins the chart board once mounted
#[component]
pub fn ChartCanvas(spec: ChartSpec, width: u32, height: u32) -> impl IntoView {
    let ctx = use_app_context();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let canvas_id = spec.canvas_id;

    let board = ctx.charts.clone();
    let rng = ctx.rng.clone();
    canvas_ref.on_load(move |canvas| {
        let element: &web_sys::HtmlCanvasElement = &canvas;

        match CanvasSurface::new(element.clone()) {
            Some(surface) => {
                board.attach(canvas_id, Box::new(surface));
                board.redraw_chart(canvas_id, &rng);
            }
            None => log::warn!("Canvas {} has no 2D context", canvas_id),
        }
    });

    let board = ctx.charts.clone();
    on_cleanup(move || board.detach(canvas_id));

    view! {
        <div class="card chart-card">
            <h3 class="card-title">{spec.title}</h3>
            <canvas
                id=canvas_id
                node_ref=canvas_ref
                width=width
                height=height
            />
        </div>
    }
}
