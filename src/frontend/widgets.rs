use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Array, Date, Function, Math, Object, Reflect};
use std::{cell::RefCell, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use super::log_event;
use crate::diagnostics::{dom_write_failure, LogLevel};
use crate::motion::{
    cursor::{CursorFrame, CursorTracker, OutlinePhase, Point},
    reveal::{skill_fill_style, RevealMotion, RevealState, SKILL_ROW},
    scroll::ScrollState,
    tilt::{Rect, TiltConfig, TiltState},
    typewriter::{jitter_from_unit, PhraseCycle, CARET_BLINK},
};

const REVEAL_THRESHOLD: f64 = 0.15;
const FRAME_MS: u32 = 16;

pub(super) fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// `(scroll offset, document height, viewport height)` of the window.
pub(super) fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let win = window()?;
    let offset = win.scroll_y().ok()?;
    let viewport = win.inner_height().ok()?.as_f64()?;
    let document = win.document()?.document_element()?.scroll_height();

    Some((offset, f64::from(document), viewport))
}

fn report_dom_write(operation: &str, name: &str, result: Result<(), JsValue>) {
    if let Err(error) = result {
        let detail = error.as_string().unwrap_or_else(|| format!("{error:?}"));
        log_event(
            LogLevel::Warn,
            "dom_write_failed",
            dom_write_failure(operation, name, &detail),
        );
    }
}

fn set_outline_state(outline: &HtmlElement, phase: OutlinePhase) {
    report_dom_write(
        "set_attribute",
        "data-state",
        outline.set_attribute("data-state", phase.as_str()),
    );
}

fn place(element: &HtmlElement, point: Point) {
    let style = element.style();
    for (property, value) in [("left", point.x), ("top", point.y)] {
        report_dom_write(
            "set_property",
            property,
            style.set_property(property, &format!("{value:.1}px")),
        );
    }
}

fn animate_outline(outline: &HtmlElement, frame: CursorFrame) {
    let target = frame.outline_target;
    let element: &JsValue = outline.as_ref();

    let Some(animate) = Reflect::get(element, &JsValue::from_str("animate"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        place(outline, target);
        return;
    };

    let keyframes = Object::new();
    let options = Object::new();
    let staged = Reflect::set(
        &keyframes,
        &JsValue::from_str("left"),
        &JsValue::from_str(&format!("{:.1}px", target.x)),
    )
    .and_then(|_| {
        Reflect::set(
            &keyframes,
            &JsValue::from_str("top"),
            &JsValue::from_str(&format!("{:.1}px", target.y)),
        )
    })
    .and_then(|_| {
        Reflect::set(
            &options,
            &JsValue::from_str("duration"),
            &JsValue::from_f64(frame.outline_duration.as_secs_f64() * 1_000.0),
        )
    })
    .and_then(|_| Reflect::set(&options, &JsValue::from_str("fill"), &JsValue::from_str("forwards")));

    if staged.is_err() || animate.call2(element, &keyframes, &options).is_err() {
        place(outline, target);
    }
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot = use_node_ref();
    let outline = use_node_ref();
    let tracker = use_mut_ref(CursorTracker::default);

    {
        let dot = dot.clone();
        let outline = outline.clone();
        use_effect_with((), move |_| {
            let settle_timer: Rc<RefCell<Option<Timeout>>> = Rc::default();

            let listener = window().map(|win| {
                let settle_timer = settle_timer.clone();
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let (Some(dot), Some(outline)) =
                        (dot.cast::<HtmlElement>(), outline.cast::<HtmlElement>())
                    else {
                        return;
                    };

                    let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                    let frame = tracker.borrow_mut().pointer_moved(position);
                    place(&dot, frame.dot);
                    animate_outline(&outline, frame);
                    set_outline_state(&outline, tracker.borrow().outline());

                    let tracker = tracker.clone();
                    let settle = Timeout::new(millis(frame.outline_duration), move || {
                        tracker.borrow_mut().settle();
                        set_outline_state(&outline, tracker.borrow().outline());
                    });
                    settle_timer.borrow_mut().replace(settle);
                })
            });

            move || {
                drop(listener);
                settle_timer.borrow_mut().take();
            }
        });
    }

    html! {
        <>
            <div class="cursor-dot" ref={dot} aria-hidden="true"></div>
            <div class="cursor-outline" ref={outline} data-state="idle" aria-hidden="true"></div>
        </>
    }
}

#[function_component(Background)]
pub fn background() -> Html {
    html! {
        <div class="bg-animation" aria-hidden="true">
            <div class="blob blob-1"></div>
            <div class="blob blob-2"></div>
            <div class="blob blob-3"></div>
        </div>
    }
}

enum TypingAction {
    Tick,
    Blink,
    Retarget(&'static [&'static str]),
}

impl Reducible for PhraseCycle {
    type Action = TypingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            TypingAction::Tick => next.tick(),
            TypingAction::Blink => next.state.blink(),
            TypingAction::Retarget(phrases) => {
                if !next.set_phrases(phrases) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub phrases: &'static [&'static str],
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let typing = use_reducer({
        let phrases = props.phrases;
        move || PhraseCycle::new(phrases)
    });
    let PhraseCycle { phrases, state } = *typing;

    {
        let dispatcher = typing.dispatcher();
        use_effect_with(props.phrases, move |phrases| {
            dispatcher.dispatch(TypingAction::Retarget(*phrases));
        });
    }

    {
        let dispatcher = typing.dispatcher();
        use_effect_with(
            (phrases, state.index, state.chars_shown, state.direction),
            move |_| {
                let delay = state.delay_before_tick(phrases, jitter_from_unit(Math::random()));
                let timeout = Timeout::new(millis(delay), move || {
                    dispatcher.dispatch(TypingAction::Tick)
                });
                move || drop(timeout)
            },
        );
    }

    {
        let dispatcher = typing.dispatcher();
        use_effect_with(state.caret_visible, move |_| {
            let timeout = Timeout::new(millis(CARET_BLINK), move || {
                dispatcher.dispatch(TypingAction::Blink)
            });
            move || drop(timeout)
        });
    }

    html! {
        <span class="text-gradient">
            {format!("{}{}", state.visible_text(phrases), state.caret())}
        </span>
    }
}

enum ProgressAction {
    Observe {
        offset: f64,
        document: f64,
        viewport: f64,
    },
    Frame {
        now_ms: f64,
    },
}

impl Reducible for ScrollState {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ProgressAction::Observe {
                offset,
                document,
                viewport,
            } => next.observe(offset, document, viewport),
            ProgressAction::Frame { now_ms } => {
                next.frame(now_ms);
            }
        }
        Rc::new(next)
    }
}

fn observe_window_scroll(dispatcher: &UseReducerDispatcher<ScrollState>) {
    if let Some((offset, document, viewport)) = scroll_metrics() {
        dispatcher.dispatch(ProgressAction::Observe {
            offset,
            document,
            viewport,
        });
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_reducer(ScrollState::default);

    {
        let dispatcher = progress.dispatcher();
        use_effect_with((), move |_| {
            observe_window_scroll(&dispatcher);
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| observe_window_scroll(&dispatcher))
            });
            move || drop(listener)
        });
    }

    {
        // Keyed on the running flag only, so scroll events never restart it.
        let dispatcher = progress.dispatcher();
        use_effect_with(progress.needs_frames(), move |running| {
            let interval = running.then(|| {
                Interval::new(FRAME_MS, move || {
                    dispatcher.dispatch(ProgressAction::Frame { now_ms: Date::now() })
                })
            });
            move || drop(interval)
        });
    }

    let style = format!(
        "transform: scaleX({:.4});",
        progress.smoothed_fraction()
    );

    html! { <div class="progress-bar" style={style} aria-hidden="true"></div> }
}

struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports intersection changes of `element` until `on_change` returns
/// `true`, then stops observing.
fn watch_viewport(
    element: &Element,
    mut on_change: impl FnMut(bool) -> bool + 'static,
) -> Option<ViewportWatch> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_change(entry.is_intersecting()) {
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(ViewportWatch {
        observer,
        _callback: callback,
    })
}

/// `true` once the referenced element has been seen in the viewport.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    let reveal_state = use_mut_ref(RevealState::default);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let watch = node.cast::<Element>().and_then(|element| {
                watch_viewport(&element, move |intersecting| {
                    let fired = reveal_state.borrow_mut().observe(intersecting);
                    if fired {
                        revealed.set(true);
                    }
                    reveal_state.borrow().is_revealed()
                })
            });
            move || drop(watch)
        });
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: RevealMotion,
    #[prop_or_default]
    pub delay: Duration,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={props.motion.style(props.delay, revealed)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub delay: Duration,
    pub skill: AttrValue,
    pub percentage: u8,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class="skill-bar-container" style={SKILL_ROW.style(props.delay, revealed)}>
            <div class="skill-info">
                <span>{props.skill.clone()}</span>
                <span>{format!("{}%", props.percentage)}</span>
            </div>
            <div class="skill-track">
                <div
                    class="skill-progress"
                    style={skill_fill_style(props.delay, props.percentage, revealed)}
                ></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltProps {
    pub config: TiltConfig,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Tilt)]
pub fn tilt(props: &TiltProps) -> Html {
    let state = use_state_eq(TiltState::default);
    let config = props.config;

    let onmousemove = {
        let state = state.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            state.set(config.tilt_at(
                rect,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            ));
        })
    };

    let onmouseleave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(TiltState::NEUTRAL))
    };

    html! {
        <div
            class="tilt"
            style={config.style(*state)}
            {onmousemove}
            {onmouseleave}
        >
            {props.children.clone()}
        </div>
    }
}
