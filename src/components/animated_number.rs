//! Animated Number Component
//!
//! Renders a numeric value that eases toward its latest target instead
//! of jumping. The easing itself lives in [`crate::anim`]; this
//! component only wires a `NumberAnimation` into the reactive graph:
//! target changes come in through a signal, each frame's display value
//! goes out through another, and the pending frame callback is
//! cancelled when the component unmounts.

use std::rc::Rc;

use leptos::*;

use crate::anim::{BrowserFrames, NumberAnimation, DEFAULT_DURATION_MS};
use crate::format::{self, DEFAULT_LOCALE};

/// Smoothly animated numeric display.
///
/// The caller is responsible for only handing over finite numbers; a
/// missing value is rendered by the caller as a dash and never reaches
/// this component.
#[component]
pub fn AnimatedNumber(
    /// Target value; every change starts (or redirects) a transition
    #[prop(into)]
    value: Signal<f64>,
    /// Transition length in milliseconds
    #[prop(default = DEFAULT_DURATION_MS)]
    duration_ms: f64,
    /// Locale tag for digit grouping; formatting only
    #[prop(default = DEFAULT_LOCALE.to_string(), into)]
    locale: String,
) -> impl IntoView {
    let initial = value.get_untracked();
    let (display, set_display) = create_signal(initial.round());

    let anim = Rc::new(NumberAnimation::new(
        BrowserFrames::new(),
        initial,
        duration_ms,
        move |v| set_display.set(v),
    ));

    // New data retargets the in-flight transition; an unchanged value
    // schedules nothing.
    let anim_on_change = Rc::clone(&anim);
    create_effect(move |_| {
        anim_on_change.set_target(value.get());
    });

    // Unmount must not leave a frame callback behind.
    on_cleanup(move || anim.cancel());

    view! {
        <span>{move || format::group_digits(display.get() as i64, &locale)}</span>
    }
}
