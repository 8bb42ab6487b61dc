//! Full-screen canvas meteor shower.
//!
//! The simulation lives in [`vidjalsa_core::meteor`]; this component owns the
//! canvas, the per-frame callback and the resize listener. Every change of the
//! rate tears the subscription down and starts a new one, re-sizing the canvas
//! for the device pixel ratio. Live meteors and the last frame time survive
//! that restart.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use leptos::logging::error;
use leptos::prelude::*;
use vidjalsa_core::{Bounds, MeteorConfig, MeteorShower as Shower, RandomSource, SurfaceSize, TrailSegment};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use crate::app::use_config;

const TRAIL_TAIL_COLOR: &str = "rgba(255, 255, 255, 0)";
const HEAD_COLOR: &str = "white";

/// `Math.random()` as a [`RandomSource`].
struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Simulation state shared by successive subscriptions.
struct FrameState {
    shower: Shower,
    last_frame_ms: f64,
}

/// One running animation loop at a fixed rate.
struct Animation {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    state: Rc<RefCell<FrameState>>,
    config: MeteorConfig,
    trail_color: String,
    rate: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Animation {
    fn schedule(self: &Rc<Self>) {
        let animation = Rc::clone(self);
        let handle = request_animation_frame(move |_| animation.draw_frame());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }

    fn draw_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();

        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let trails = {
            let mut state = self.state.borrow_mut();
            let now = js_sys::Date::now();
            let delta_ms = now - state.last_frame_ms;
            state.last_frame_ms = now;
            state
                .shower
                .step(Bounds::new(width, height), delta_ms, self.rate, &mut MathRandom)
        };

        self.ctx.clear_rect(0.0, 0.0, width, height);
        for trail in &trails {
            if let Err(e) = self.draw_meteor(trail) {
                error!("Failed to draw meteor: {e:?}");
                break;
            }
        }

        self.schedule();
    }

    fn draw_meteor(&self, trail: &TrailSegment) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        let gradient =
            ctx.create_linear_gradient(trail.tail_x, trail.tail_y, trail.head_x, trail.head_y);
        gradient.add_color_stop(0.0, TRAIL_TAIL_COLOR)?;
        gradient.add_color_stop(1.0, &self.trail_color)?;

        ctx.begin_path();
        ctx.move_to(trail.tail_x, trail.tail_y);
        ctx.line_to(trail.head_x, trail.head_y);
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(self.config.trail_width);
        ctx.stroke();

        ctx.begin_path();
        ctx.arc(trail.head_x, trail.head_y, self.config.head_radius, 0.0, TAU)?;
        ctx.set_fill_style_str(HEAD_COLOR);
        ctx.set_shadow_blur(self.config.glow_blur);
        ctx.set_shadow_color(HEAD_COLOR);
        ctx.fill();
        ctx.set_shadow_blur(0.0);

        Ok(())
    }
}

/// Registrations owned by one subscription; dropping it stops the loop.
struct Subscription {
    animation: Rc<Animation>,
    _resize: EventListener,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.animation.stop();
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn apply_surface(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    surface: SurfaceSize,
) -> Result<(), JsValue> {
    // Resizing the backing store also resets the context transform.
    canvas.set_width(surface.pixel_width);
    canvas.set_height(surface.pixel_height);

    let style = HtmlElement::style(canvas);
    for (property, value) in css_size_properties(&surface) {
        style.set_property(property, &value)?;
    }

    ctx.scale(surface.scale, surface.scale)
}

/// Inline style properties that pin the canvas to its CSS size.
fn css_size_properties(surface: &SurfaceSize) -> Vec<(&'static str, String)> {
    surface
        .css_size
        .map(|(width, height)| {
            vec![
                ("width", format!("{width}px")),
                ("height", format!("{height}px")),
            ]
        })
        .unwrap_or_default()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn subscribe(
    canvas: &HtmlCanvasElement,
    state: Rc<RefCell<FrameState>>,
    config: &MeteorConfig,
    rate: f64,
) -> Result<Subscription, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;
    let ctx = context_2d(canvas)?;

    let (width, height) = viewport_size(&window);
    apply_surface(
        canvas,
        &ctx,
        SurfaceSize::for_viewport(width, height, window.device_pixel_ratio()),
    )?;

    let animation = Rc::new(Animation {
        canvas: canvas.clone(),
        ctx: ctx.clone(),
        state,
        config: config.clone(),
        trail_color: format!("rgba(255, 255, 255, {})", config.trail_opacity),
        rate,
        frame: RefCell::new(None),
    });
    animation.schedule();

    let resize_canvas = canvas.clone();
    let resize_window = window.clone();
    let resize = EventListener::new(&window, "resize", move |_| {
        let (width, height) = viewport_size(&resize_window);
        if let Err(e) = apply_surface(&resize_canvas, &ctx, SurfaceSize::after_resize(width, height))
        {
            error!("Failed to resize meteor canvas: {e:?}");
        }
    });

    Ok(Subscription {
        animation,
        _resize: resize,
    })
}

/// Meteor shower component.
///
/// Draws behind the page content; the spawn rate follows `rate`.
#[component]
pub fn MeteorShower(
    /// Spawn rate in `[0, 100]`.
    #[prop(into)]
    rate: Signal<f64>,
) -> impl IntoView {
    let config = use_config().meteors;
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let state = Rc::new(RefCell::new(FrameState {
        shower: Shower::new(config.clone()),
        last_frame_ms: js_sys::Date::now(),
    }));
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move || {
        let rate = rate.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        subscription.update_value(|slot| {
            slot.take();
            match subscribe(&canvas, Rc::clone(&state), &config, rate) {
                Ok(next) => *slot = Some(next),
                Err(e) => error!("Failed to start meteor shower: {e:?}"),
            }
        });
    });

    on_cleanup(move || {
        subscription.update_value(|slot| {
            slot.take();
        });
    });

    view! { <canvas class="meteor-canvas" node_ref=canvas_ref></canvas> }
}
