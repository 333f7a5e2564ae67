use std::f64::consts::PI;

use shared::segments::{truncate_label, Segment};
use shared::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub rotation: f64,
    pub theme: Theme,
    pub is_spinning: bool,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.segments.clone(), props.rotation, props.theme, props.is_spinning),
            move |(segments, rotation, theme, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(&canvas, &context, segments, *rotation, *theme, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="400"
            height="400"
            class="w-full h-auto max-w-[400px] aspect-square"
        />
    }
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    segments: &[Segment],
    rotation: f64,
    theme: Theme,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    // Clear canvas
    context.clear_rect(0.0, 0.0, width, height);

    // Soft outer glow, brighter while spinning
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    if segments.is_empty() {
        return;
    }

    // Save context state before rotation
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation.to_radians());

    // Segment 0 starts at 12 o'clock and the rest follow clockwise
    let segment_angle = 2.0 * PI / segments.len() as f64;
    let start_offset = -PI / 2.0;

    for (i, segment) in segments.iter().enumerate() {
        let start = start_offset + i as f64 * segment_angle;
        let end = start + segment_angle;

        context.begin_path();
        context.set_fill_style_str(theme.segment_color(i));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(1.5);
        context.stroke();

        // Label along the middle of the segment, anchored near the rim
        context.save();
        let _ = context.rotate(start + segment_angle / 2.0);
        context.set_fill_style_str(theme.label_color());
        context.set_font("bold 16px sans-serif");
        context.set_text_align("right");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&truncate_label(&segment.text), radius - 14.0, 0.0);
        context.restore();
    }

    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center_x, center_y, 14.0, 0.0, 2.0 * PI);
    context.fill();

    // Pointer at 3 o'clock, pointing inward
    context.begin_path();
    context.set_fill_style_str("#111827");
    context.move_to(width - 2.0, center_y - 15.0);
    context.line_to(width - 2.0, center_y + 15.0);
    context.line_to(center_x + radius - 12.0, center_y);
    context.close_path();
    context.fill();
}
