//! `requestAnimationFrame` driver shared by every animated component.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::parallax::HeroMotion;
use crate::motion::timeline::TimelinePlayer;

type Tick = Box<dyn FnMut(f64) -> bool>;

/// Loop bookkeeping kept apart from the browser calls. The tick is taken out
/// while it runs so it can drop its own loop.
struct Frames<F> {
    tick: Option<F>,
    handle: Option<i32>,
    last_timestamp: Option<f64>,
    cancelled: bool,
}

impl<F> Frames<F> {
    fn new(tick: F) -> Self {
        Self {
            tick: Some(tick),
            handle: None,
            last_timestamp: None,
            cancelled: false,
        }
    }

    /// A frame arrived: seconds since the previous one and the tick to run.
    fn begin(&mut self, timestamp: f64) -> Option<(f64, F)> {
        self.handle = None;
        let dt = self
            .last_timestamp
            .map_or(0.0, |last| ((timestamp - last) / 1000.0).max(0.0));
        self.last_timestamp = Some(timestamp);
        self.tick.take().map(|tick| (dt, tick))
    }

    /// Hands the tick back after it ran. True when another frame is wanted.
    fn end(&mut self, tick: F, keep_going: bool) -> bool {
        if self.cancelled {
            return false;
        }
        self.tick = Some(tick);
        keep_going
    }

    /// Stops the loop for good and returns the pending frame to cancel.
    fn cancel(&mut self) -> Option<i32> {
        self.cancelled = true;
        self.tick = None;
        self.handle.take()
    }
}

struct State {
    frames: Frames<Tick>,
    closure: Option<Closure<dyn FnMut(f64)>>,
}

/// Calls `tick(dt_secs)` once per animation frame for as long as it returns
/// `true`. Dropping the loop cancels the pending frame; the tick is never
/// called again after that.
pub struct FrameLoop {
    state: Rc<RefCell<State>>,
}

impl FrameLoop {
    /// `None` when no frame could be requested (no window, or the browser
    /// refused). Callers render their final state in that case.
    pub fn start(tick: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let state = Rc::new(RefCell::new(State {
            frames: Frames::new(Box::new(tick)),
            closure: None,
        }));

        let weak = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(state) = weak.upgrade() {
                on_frame(&state, timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        state.borrow_mut().closure = Some(closure);

        if request(&state) {
            Some(Self { state })
        } else {
            None
        }
    }

    /// A frame is pending. Between frames of a finished loop this is false.
    pub fn is_running(&self) -> bool {
        self.state
            .try_borrow()
            .map_or(true, |state| state.frames.handle.is_some())
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        if let Some(handle) = state.frames.cancel() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

fn request(state: &Rc<RefCell<State>>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let mut state = state.borrow_mut();
    let requested = match state.closure.as_ref() {
        Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref()),
        None => return false,
    };
    match requested {
        Ok(handle) => {
            state.frames.handle = Some(handle);
            true
        }
        Err(err) => {
            warn!("requestAnimationFrame failed: {:?}", err);
            false
        }
    }
}

fn on_frame(state: &Rc<RefCell<State>>, timestamp: f64) {
    let Some((dt, mut tick)) = state.borrow_mut().frames.begin(timestamp) else {
        return;
    };

    // The tick may re-render components, which may drop this loop.
    let keep_going = tick(dt);

    let again = state.borrow_mut().frames.end(tick, keep_going);
    if again {
        request(state);
    }
}

/// Something a [`FrameLoop`] can drive.
pub trait Animate {
    /// Advances by `dt` seconds. Returns `false` once nothing moves.
    fn advance(&mut self, dt: f64) -> bool;

    /// Jumps to the resting end state. Used when frames are unavailable.
    fn settle(&mut self);
}

impl Animate for TimelinePlayer {
    fn advance(&mut self, dt: f64) -> bool {
        self.tick(dt)
    }

    fn settle(&mut self) {
        self.finish();
    }
}

impl Animate for HeroMotion {
    fn advance(&mut self, dt: f64) -> bool {
        self.tick(dt)
    }

    fn settle(&mut self) {
        self.finish();
    }
}

/// Animation model owned by a component, plus the loop that drives it.
pub struct AnimationHandle<T> {
    model: Rc<RefCell<T>>,
    frame_loop: Rc<RefCell<Option<FrameLoop>>>,
    redraw: Rc<dyn Fn()>,
}

impl<T> Clone for AnimationHandle<T> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            frame_loop: self.frame_loop.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<T: Animate + 'static> AnimationHandle<T> {
    pub fn get(&self) -> Ref<'_, T> {
        self.model.borrow()
    }

    /// Mutates the model and makes sure frames are flowing.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.model.borrow_mut());
        self.kick();
    }

    fn kick(&self) {
        let running = self
            .frame_loop
            .borrow()
            .as_ref()
            .map_or(false, FrameLoop::is_running);
        if running {
            return;
        }

        let model = self.model.clone();
        let redraw = self.redraw.clone();
        let started = FrameLoop::start(move |dt| {
            let active = model.borrow_mut().advance(dt);
            redraw();
            active
        });
        if started.is_none() {
            self.model.borrow_mut().settle();
            (self.redraw)();
        }
        *self.frame_loop.borrow_mut() = started;
    }
}

/// Keeps `init()`'s model for the component's lifetime. The frame loop is
/// cancelled on unmount.
#[hook]
pub fn use_animation<T, F>(init: F) -> AnimationHandle<T>
where
    T: Animate + 'static,
    F: FnOnce() -> T,
{
    let model = use_mut_ref(init);
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let redraw = use_update();

    {
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frame_loop.borrow_mut().take();
                }
            },
            (),
        );
    }

    AnimationHandle {
        model,
        frame_loop,
        redraw,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counting(calls: &Rc<Cell<u32>>) -> Frames<Tick> {
        let calls = calls.clone();
        Frames::new(Box::new(move |_| {
            calls.set(calls.get() + 1);
            true
        }))
    }

    fn run_frame(frames: &mut Frames<Tick>, timestamp: f64) -> bool {
        match frames.begin(timestamp) {
            Some((dt, mut tick)) => {
                let keep_going = tick(dt);
                frames.end(tick, keep_going)
            }
            None => false,
        }
    }

    #[test]
    fn frame_deltas_are_in_seconds() {
        let mut frames = Frames::new(());
        assert_eq!(frames.begin(1000.0).map(|(dt, _)| dt), Some(0.0));
        frames.end((), true);
        assert_eq!(frames.begin(1016.0).map(|(dt, _)| dt), Some(0.016));
    }

    #[test]
    fn cancelled_loop_never_ticks_again() {
        let calls = Rc::new(Cell::new(0));
        let mut frames = counting(&calls);
        assert!(run_frame(&mut frames, 0.0));
        frames.handle = Some(7);

        assert_eq!(frames.cancel(), Some(7));
        assert!(!run_frame(&mut frames, 16.0));
        assert!(!run_frame(&mut frames, 32.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn loop_dropped_during_its_own_tick_stops() {
        let calls = Rc::new(Cell::new(0));
        let mut frames = counting(&calls);

        let (dt, mut tick) = frames.begin(0.0).unwrap();
        assert!(tick(dt));
        assert_eq!(frames.cancel(), None);
        assert!(!frames.end(tick, true));

        assert!(frames.begin(16.0).is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn finished_tick_asks_for_no_more_frames() {
        let mut frames: Frames<Tick> = Frames::new(Box::new(|_| false));
        assert!(!run_frame(&mut frames, 0.0));
        assert!(frames.tick.is_some());
    }
}
