use crate::animation::canvas::{
    AnimationGate, GateCommand, Needle, BACKGROUND, CIRCLE, GRADIENT, GRADIENT_INNER,
    GRADIENT_OUTER, NEEDLE_STROKE, NEEDLE_WIDTH, RECT, RECT_FILL, RECT_SHADOW, RECT_SHADOW_BLUR,
    TITLE, TITLE_FILL, TITLE_FONT, TITLE_POS, VISIBILITY_THRESHOLD,
};
use crate::error::PortalError;
use crate::platform::browser::js_error_message;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

pub const CANVAS_WIDTH: u32 = 300;
pub const CANVAS_HEIGHT: u32 = 200;

fn dom_error(e: JsValue) -> PortalError {
    PortalError::Dom(js_error_message(&e))
}

struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    gradient: CanvasGradient,
    width: f64,
    height: f64,
}

impl Scene {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, PortalError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom_error)?
            .ok_or_else(|| PortalError::Dom("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PortalError::Dom("unexpected canvas context".to_string()))?;
        let ((x0, y0, r0), (x1, y1, r1)) = GRADIENT;
        let gradient = ctx
            .create_radial_gradient(x0, y0, r0, x1, y1, r1)
            .map_err(dom_error)?;
        gradient.add_color_stop(0.0, GRADIENT_INNER).map_err(dom_error)?;
        gradient.add_color_stop(1.0, GRADIENT_OUTER).map_err(dom_error)?;

        Ok(Self {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
            canvas,
            ctx,
            gradient,
        })
    }

    fn draw(&self, needle: Option<&Needle>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        ctx.set_fill_style_canvas_gradient(&self.gradient);
        ctx.begin_path();
        let (cx, cy, radius) = CIRCLE;
        ctx.arc(cx, cy, radius, 0.0, 2.0 * PI)?;
        ctx.fill();

        ctx.set_shadow_color(RECT_SHADOW);
        ctx.set_shadow_blur(RECT_SHADOW_BLUR);
        ctx.set_fill_style_str(RECT_FILL);
        let (x, y, w, h) = RECT;
        ctx.fill_rect(x, y, w, h);
        ctx.set_shadow_blur(0.0);

        ctx.set_fill_style_str(TITLE_FILL);
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("center");
        ctx.fill_text(TITLE, TITLE_POS.0, TITLE_POS.1)?;

        if let Some(needle) = needle {
            let (px, py) = Needle::pivot(self.width, self.height);
            let (tx, ty) = needle.tip(self.width, self.height);
            ctx.set_stroke_style_str(NEEDLE_STROKE);
            ctx.set_line_width(NEEDLE_WIDTH);
            ctx.begin_path();
            ctx.move_to(px, py);
            ctx.line_to(tx, ty);
            ctx.stroke();
        }
        Ok(())
    }

    fn in_viewport(&self) -> bool {
        let viewport_height = window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let rect = self.canvas.get_bounding_client_rect();
        rect.top() < viewport_height && rect.bottom() > 0.0
    }
}

struct Animation {
    scene: Scene,
    needle: Cell<Needle>,
    gate: Cell<AnimationGate>,
    frame_id: Cell<Option<i32>>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Animation {
    fn apply(&self, command: GateCommand) {
        match command {
            GateCommand::Start => {
                log::debug!("Canvas animation started");
                if self.frame_id.get().is_none() {
                    self.tick();
                }
            }
            GateCommand::Stop => {
                log::debug!("Canvas animation paused");
                self.cancel();
            }
            GateCommand::Keep => {}
        }
    }

    fn tick(&self) {
        self.frame_id.set(None);
        if !self.gate.get().is_running() {
            return;
        }
        let mut needle = self.needle.get();
        if let Err(e) = self.scene.draw(Some(&needle)) {
            log::warn!("Canvas draw failed: {}", js_error_message(&e));
        }
        needle.step();
        self.needle.set(needle);
        self.request_frame();
    }

    fn request_frame(&self) {
        let Some(window) = window() else { return };
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else { return };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.frame_id.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {}", js_error_message(&e)),
        }
    }

    fn cancel(&self) {
        if let (Some(id), Some(window)) = (self.frame_id.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn update_gate(&self, change: impl FnOnce(&mut AnimationGate) -> GateCommand) {
        let mut gate = self.gate.get();
        let command = change(&mut gate);
        self.gate.set(gate);
        self.apply(command);
    }
}

/// Draws the demo scene and runs the needle animation while the canvas is
/// visible. Dropping it cancels the pending frame and detaches all listeners.
pub struct CanvasAnimator {
    animation: Rc<Animation>,
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
    on_visibility: Closure<dyn FnMut()>,
}

impl CanvasAnimator {
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, PortalError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| PortalError::Dom("no document".to_string()))?;
        let scene = Scene::new(canvas)?;
        scene.draw(None).map_err(dom_error)?;

        let animation = Rc::new(Animation {
            scene,
            needle: Cell::new(Needle::default()),
            gate: Cell::new(AnimationGate::default()),
            frame_id: Cell::new(None),
            frame: RefCell::new(None),
        });

        let weak: Weak<Animation> = Rc::downgrade(&animation);
        *animation.frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new({
            let weak = weak.clone();
            move || {
                if let Some(animation) = weak.upgrade() {
                    animation.tick();
                }
            }
        }));

        let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new({
            let weak = weak.clone();
            move |entries: js_sys::Array| {
                let Some(animation) = weak.upgrade() else { return };
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    animation.update_gate(|gate| gate.on_intersection(entry.is_intersecting()));
                }
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
                .map_err(dom_error)?;
        observer.observe(&animation.scene.canvas);

        let on_visibility = Closure::<dyn FnMut()>::new({
            let document = document.clone();
            move || {
                let Some(animation) = weak.upgrade() else { return };
                let in_viewport = animation.scene.in_viewport();
                animation.update_gate(|gate| gate.on_visibility(document.hidden(), in_viewport));
            }
        });
        document
            .add_event_listener_with_callback(
                "visibilitychange",
                on_visibility.as_ref().unchecked_ref(),
            )
            .map_err(dom_error)?;

        Ok(Self {
            animation,
            observer,
            _on_intersect: on_intersect,
            on_visibility,
        })
    }
}

impl Drop for CanvasAnimator {
    fn drop(&mut self) {
        self.animation.cancel();
        self.observer.disconnect();
        if let Some(document) = window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                self.on_visibility.as_ref().unchecked_ref(),
            );
        }
    }
}

#[function_component(CanvasDemo)]
pub fn canvas_demo() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animator = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or_else(|| PortalError::Dom("canvas not mounted".to_string()))
                    .and_then(CanvasAnimator::attach);
                let animator = match animator {
                    Ok(animator) => Some(animator),
                    Err(e) => {
                        log::error!("Canvas demo unavailable: {}", e);
                        None
                    }
                };
                move || drop(animator)
            },
            (),
        );
    }

    html! {
        <canvas
            id="demo-canvas"
            ref={canvas_ref}
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
        />
    }
}
