//! Chart Component
//!
//! Population line chart using HTML5 Canvas.

use leptos::*;
use uspop::chart::{
    format_millions, monotone_segments, y_ticks, Margins, PlotArea, Point, YDomain, Y_TICK_COUNT,
};
use uspop::PopulationRecord;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::PopulationState;

const LINE_COLOR: &str = "#0f0f0f";
const LINE_WIDTH: f64 = 4.0;
const GRID_COLOR: &str = "#cccccc";
const AXIS_COLOR: &str = "#666666";
const LABEL_COLOR: &str = "#666666";
const BACKGROUND: &str = "#ffffff";

/// Responsive population chart of the selected trend window
#[component]
pub fn PopulationChart() -> impl IntoView {
    let state = use_context::<PopulationState>().expect("PopulationState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Bumped on window resize so the canvas is redrawn at its new size
    let (resized, set_resized) = create_signal(0u32);
    let resize_handle = window_event_listener(ev::resize, move |_| {
        set_resized.update(|n| *n = n.wrapping_add(1));
    });
    on_cleanup(move || resize_handle.remove());

    // Redraw when the visible slice or the container size changes
    create_effect(move |_| {
        let _ = resized.get();
        let records = state.view.with(|view| view.visible().to_vec());

        if let Some(canvas) = canvas_ref.get() {
            fit_to_container(&canvas);
            draw_chart(&canvas, &records);
        }
    });

    view! {
        <div class="mt-12 w-full flex-1 min-h-[300px]">
            <canvas node_ref=canvas_ref class="w-full h-full" />
        </div>
    }
}

/// Match the drawing buffer to the element's laid-out size
fn fit_to_container(canvas: &HtmlCanvasElement) {
    let width = canvas.client_width();
    let height = canvas.client_height();

    if width > 0 && height > 0 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, records: &[PopulationRecord]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot = PlotArea::new(width, height, Margins::default());

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_font("12px sans-serif");

    let domain = YDomain::from_records(records);
    let ticks = domain.map(|d| y_ticks(d, Y_TICK_COUNT)).unwrap_or_default();

    draw_grid(&ctx, &plot, records.len(), domain, &ticks);
    draw_axes(&ctx, &plot);

    // Empty series: axes only
    let Some(domain) = domain else {
        return;
    };

    let y_scale = plot.y_scale(domain);

    // Y-axis labels
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for &tick in &ticks {
        let _ = ctx.fill_text(&format_millions(tick), plot.left - 8.0, y_scale.map(tick));
    }

    // X-axis labels
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (i, record) in records.iter().enumerate() {
        let x = plot.x_for_index(i, records.len());
        let _ = ctx.fill_text(&record.year.to_string(), x, plot.bottom() + 8.0);
    }

    let points: Vec<Point> = records
        .iter()
        .enumerate()
        .map(|(i, record)| Point::new(plot.x_for_index(i, records.len()), y_scale.map(record.value())))
        .collect();

    draw_line(&ctx, &points);
}

/// Dashed 3-3 grid: one horizontal line per tick, one vertical per year
fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    plot: &PlotArea,
    count: usize,
    domain: Option<YDomain>,
    ticks: &[f64],
) {
    let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);

    if let Some(domain) = domain {
        let y_scale = plot.y_scale(domain);
        for &tick in ticks {
            let y = y_scale.map(tick);
            ctx.begin_path();
            ctx.move_to(plot.left, y);
            ctx.line_to(plot.right(), y);
            ctx.stroke();
        }
    }

    for i in 0..count {
        let x = plot.x_for_index(i, count);
        ctx.begin_path();
        ctx.move_to(x, plot.top);
        ctx.line_to(x, plot.bottom());
        ctx.stroke();
    }

    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_axes(ctx: &CanvasRenderingContext2d, plot: &PlotArea) {
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);

    ctx.begin_path();
    ctx.move_to(plot.left, plot.top);
    ctx.line_to(plot.left, plot.bottom());
    ctx.line_to(plot.right(), plot.bottom());
    ctx.stroke();
}

/// Monotone line through the points; a lone point is drawn as a dot
fn draw_line(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some(first) = points.first() else {
        return;
    };

    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_fill_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH);

    if points.len() == 1 {
        ctx.begin_path();
        let _ = ctx.arc(first.x, first.y, LINE_WIDTH, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        return;
    }

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for segment in monotone_segments(points) {
        ctx.bezier_curve_to(
            segment.control1.x,
            segment.control1.y,
            segment.control2.x,
            segment.control2.y,
            segment.to.x,
            segment.to.y,
        );
    }
    ctx.stroke();
}
