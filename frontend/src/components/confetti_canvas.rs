use std::cell::RefCell;
use std::rc::Rc;

use shared::celebration::{Celebration, CelebrationConfig};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::frame_loop::FrameLoop;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfettiCanvasProps {
    /// Bumped once per winner; zero means nothing to celebrate yet.
    pub burst: u64,
}

#[function_component(ConfettiCanvas)]
pub fn confetti_canvas(props: &ConfettiCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.burst, move |burst| {
            let running = if *burst > 0 {
                start_confetti(&canvas_ref)
            } else {
                None
            };
            let canvas_ref = canvas_ref.clone();
            move || {
                if let Some((frame_loop, celebration)) = running {
                    drop(frame_loop);
                    celebration.borrow_mut().stop();
                }
                clear(&canvas_ref);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class={styles::CONFETTI_CANVAS} />
    }
}

fn context_for(canvas_ref: &NodeRef) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

fn clear(canvas_ref: &NodeRef) {
    if let Some((canvas, context)) = context_for(canvas_ref) {
        context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

fn start_confetti(canvas_ref: &NodeRef) -> Option<(FrameLoop, Rc<RefCell<Celebration>>)> {
    let (canvas, context) = context_for(canvas_ref)?;

    // Match the backing store to the viewport so particles aren't stretched
    if let Some(window) = window() {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    let celebration = Rc::new(RefCell::new(Celebration::start(
        js_sys::Date::now(),
        CelebrationConfig::default(),
    )));
    let mut rng = rand::thread_rng();
    let ticking = celebration.clone();

    let frame_loop = FrameLoop::start(move |_| {
        let mut celebration = ticking.borrow_mut();
        let keep_going = celebration.tick(js_sys::Date::now(), &mut rng);

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        context.clear_rect(0.0, 0.0, width, height);

        for particle in celebration.particles() {
            context.save();
            context.set_global_alpha(particle.opacity());
            context.set_fill_style_str(celebration.color(particle));
            let _ = context.translate(particle.x * width, particle.y * height);
            let _ = context.rotate(particle.tilt);
            context.fill_rect(-5.0, -2.5, 10.0, 5.0);
            context.restore();
        }

        keep_going
    });
    Some((frame_loop, celebration))
}
