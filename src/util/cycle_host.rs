//! Browser host for the `wordcycle` engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AnimatedTextCycle` renders; this module keeps it moving. It supplies the
//! engine with a repeating timer (`gloo_timers` intervals), text widths (the
//! bounding boxes of the hidden measurement pass), and a frame loop built on
//! `requestAnimationFrame` that runs only while a transition or width spring
//! is in flight.
//!
//! TRADE-OFFS
//! ==========
//! The rotator lives in a local (non-`Send`) stored value owned by the
//! component, so it is dropped, and its timer cancelled, when the component
//! is disposed even if the explicit cleanup never ran.

#[cfg(test)]
#[path = "cycle_host_test.rs"]
mod cycle_host_test;

use std::collections::HashMap;

use wordcycle::TextMeasure;

/// Longest step fed to the engine in one frame. Larger gaps (a background
/// tab, a debugger pause) are clamped so the motion resumes instead of
/// jumping to its end.
pub const MAX_FRAME_DELTA_MS: f64 = 64.0;

/// Milliseconds between two animation-frame timestamps. The first frame of a
/// run advances by zero so it paints the starting pose.
#[must_use]
pub fn frame_delta(last_ts: Option<f64>, now_ts: f64) -> f64 {
    match last_ts {
        Some(last) => (now_ts - last).clamp(0.0, MAX_FRAME_DELTA_MS),
        None => 0.0,
    }
}

/// Widths read from one measurement pass, keyed by word.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredWidths {
    widths: HashMap<String, f64>,
}

impl MeasuredWidths {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut widths = HashMap::new();
        for (word, width) in pairs {
            let entry = widths.entry(word.into()).or_insert(0.0_f64);
            *entry = entry.max(width);
        }
        Self { widths }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Read the rendered width of every child of the measurement container.
    #[cfg(feature = "csr")]
    pub fn read(container: &web_sys::Element) -> Self {
        let children = container.children();
        Self::from_pairs((0..children.length()).filter_map(|i| {
            let child = children.item(i)?;
            let word = child.text_content()?;
            Some((word, child.get_bounding_client_rect().width()))
        }))
    }
}

impl TextMeasure for MeasuredWidths {
    fn width_of(&self, word: &str) -> f64 {
        self.widths.get(word).copied().unwrap_or(0.0)
    }
}

#[cfg(feature = "csr")]
pub use browser::{GlooIntervals, drive};

#[cfg(feature = "csr")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::callback::Interval;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;
    use wordcycle::{CycleConfig, CycleError, Frame, IntervalHost, Reconfigured, Rotator};

    use super::{MeasuredWidths, frame_delta};

    /// `IntervalHost` backed by `setInterval`; dropping the handle clears it.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooIntervals;

    impl IntervalHost for GlooIntervals {
        type Handle = Interval;

        fn start_interval(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
            Interval::new(period_ms, move || tick())
        }
    }

    type RotatorSlot = StoredValue<Option<Rotator<GlooIntervals>>, LocalStorage>;

    /// Per-instance frame loop bookkeeping.
    #[derive(Default)]
    struct FrameLoop {
        pending: Cell<bool>,
        last_ts: Cell<Option<f64>>,
    }

    /// Mount, reconfigure and tear down the rotator behind one
    /// `AnimatedTextCycle`, publishing each rendered frame to `frame`.
    pub fn drive(
        config: Memo<Result<CycleConfig, CycleError>>,
        measure_ref: NodeRef<leptos::html::Div>,
        frame: RwSignal<Option<Frame>>,
    ) {
        let rotator: RotatorSlot = StoredValue::new_local(None);
        let frames = Rc::new(FrameLoop::default());

        Effect::new(move || {
            let config = match config.get() {
                Ok(config) => config,
                Err(e) => {
                    log::error!("word cycle not started: {e}");
                    rotator.update_value(|slot| {
                        if let Some(mut stale) = slot.take() {
                            stale.unmount();
                        }
                    });
                    frame.set(None);
                    return;
                }
            };
            let Some(container) = measure_ref.get() else {
                return;
            };
            let measured = MeasuredWidths::read(&container);

            let published = rotator.try_update_value(|slot| {
                let active = match slot {
                    Some(existing) => {
                        if existing.reconfigure(config) == Reconfigured::Unchanged {
                            return None;
                        }
                        existing
                    }
                    None => {
                        let mounted = Rotator::mount(config, GlooIntervals);
                        let frames_for_tick = Rc::clone(&frames);
                        mounted.on_advance(move |_| request_frame(rotator, frame, Rc::clone(&frames_for_tick)));
                        slot.insert(mounted)
                    }
                };
                active.stabilize_width(&measured);
                Some(active.frame())
            });

            if let Some(Some(next)) = published {
                frame.set(Some(next));
                request_frame(rotator, frame, Rc::clone(&frames));
            }
        });

        on_cleanup(move || {
            let _ = rotator.try_update_value(|slot| {
                if let Some(rotator) = slot.as_mut() {
                    rotator.unmount();
                }
            });
        });
    }

    /// Schedule one animation frame; each frame schedules the next while the
    /// engine reports motion. Only one frame is ever pending per instance.
    fn request_frame(rotator: RotatorSlot, frame: RwSignal<Option<Frame>>, frames: Rc<FrameLoop>) {
        if frames.pending.replace(true) {
            return;
        }
        let Some(window) = web_sys::window() else {
            frames.pending.set(false);
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let frames_for_cb = Rc::clone(&frames);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            frames_for_cb.pending.set(false);
            let dt = frame_delta(frames_for_cb.last_ts.get(), ts);
            let stepped = rotator
                .try_with_value(|slot| slot.as_ref().map(|r| (r.animate(dt), r.frame())))
                .flatten();
            match stepped {
                Some((more, next)) => {
                    let _ = frame.try_set(Some(next));
                    if more {
                        frames_for_cb.last_ts.set(Some(ts));
                        request_frame(rotator, frame, Rc::clone(&frames_for_cb));
                    } else {
                        frames_for_cb.last_ts.set(None);
                    }
                }
                None => frames_for_cb.last_ts.set(None),
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        } else {
            frames.pending.set(false);
        }
    }
}
