use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::POINTER_IDLE_MS;
use crate::hooks::frame::FrameLoop;
use crate::hooks::media::{now_ms, prefers_reduced_motion};
use crate::hooks::viewport::{use_pointer, use_viewport, Pointer};
use crate::motion::particles::{is_moving, SmokeField};

struct Painter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: SmokeField,
    pointer: Rc<RefCell<Pointer>>,
}

impl Painter {
    fn new(canvas: HtmlCanvasElement, pointer: Rc<RefCell<Pointer>>) -> Option<Self> {
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context.dyn_into::<CanvasRenderingContext2d>().ok()?,
            Ok(None) => {
                warn!("canvas has no 2d context");
                return None;
            }
            Err(err) => {
                warn!("failed to get canvas context: {:?}", err);
                return None;
            }
        };
        Some(Self {
            canvas,
            context,
            field: SmokeField::default(),
            pointer,
        })
    }

    /// Pointer position in canvas space, only while it is moving.
    fn emitter(&self) -> Option<(f64, f64)> {
        let pointer = *self.pointer.borrow();
        if !is_moving(now_ms(), pointer.moved_at, POINTER_IDLE_MS) {
            return None;
        }
        let rect = self.canvas.get_bounding_client_rect();
        Some((pointer.x - rect.left(), pointer.y - rect.top()))
    }

    fn paint(&mut self) {
        let emitter = self.emitter();
        self.field.step(emitter, &mut Math::random);

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
        for puff in self.field.puffs() {
            self.context.begin_path();
            if self.context.arc(puff.x, puff.y, puff.size, 0.0, TAU).is_err() {
                continue;
            }
            self.context.set_fill_style_str(&puff.fill_style());
            self.context.fill();
        }
        self.field.prune();
    }
}

fn fit_to_parent(canvas: &HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        canvas.set_width(parent.client_width().max(0) as u32);
        canvas.set_height(parent.client_height().max(0) as u32);
    }
}

/// Gold particles trailing the pointer across the parent element. Nothing is
/// drawn under reduced motion or without a 2d context.
#[function_component(GoldSmoke)]
pub fn gold_smoke() -> Html {
    let canvas_ref = use_node_ref();
    let viewport = use_viewport();
    let pointer = use_pointer();
    let latest_pointer = use_mut_ref(Pointer::default);

    {
        let latest_pointer = latest_pointer.clone();
        use_effect_with_deps(
            move |pointer| {
                *latest_pointer.borrow_mut() = *pointer;
                || ()
            },
            pointer,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    fit_to_parent(&canvas);
                }
                || ()
            },
            (viewport.width, viewport.height),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .filter(|_| !prefers_reduced_motion())
                    .and_then(|canvas| Painter::new(canvas, latest_pointer))
                    .and_then(|mut painter| {
                        FrameLoop::start(move |_| {
                            painter.paint();
                            true
                        })
                    });
                move || drop(frame_loop)
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            aria-hidden="true"
            style="position: absolute; inset: 0; pointer-events: none; opacity: 0.4;"
        />
    }
}
