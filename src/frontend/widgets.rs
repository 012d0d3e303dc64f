use super::dom;
use crate::effects::{self, LoadingPhase};
use crate::notification::{self, Notification, NotificationKind, NotificationPhase};
use crate::theme::Theme;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use web_sys::{window, HtmlImageElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            id={props.id.clone()}
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.pressed().to_string()}
            onclick={props.on_toggle.clone()}
        >
            <i class={props.theme.icon_class()} aria-hidden="true"></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Lazily loaded image that marks itself `loaded` and swaps in a placeholder
/// when the source fails.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let loaded = use_state(|| false);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let onerror = Callback::from(|event: Event| {
        let Some(image) = event.target_dyn_into::<HtmlImageElement>() else {
            return;
        };
        if image.src() != effects::IMAGE_PLACEHOLDER {
            image.set_src(effects::IMAGE_PLACEHOLDER);
            image.set_alt(effects::IMAGE_PLACEHOLDER_ALT);
        }
    });

    html! {
        <img
            class={classes!(props.class.clone(), (*loaded).then_some("loaded"))}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            {onload}
            {onerror}
        />
    }
}

pub enum ToastAction {
    Show(Notification),
    Advance {
        id: u64,
        phase: Option<NotificationPhase>,
    },
}

#[derive(Default, PartialEq)]
pub struct ToastState {
    pub current: Option<Notification>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(notification) => Rc::new(Self {
                current: Some(notification),
            }),
            ToastAction::Advance { id, phase } => {
                match notification::advance(self.current.as_ref(), id, phase) {
                    Some(current) => Rc::new(Self { current }),
                    None => self,
                }
            }
        }
    }
}

/// Replaces any visible notification and schedules its slide in/out.
///
/// `id` must be unique per call; timers left over from a replaced toast are
/// ignored by id.
pub fn show_toast(
    toast: &UseReducerDispatcher<ToastState>,
    id: u64,
    kind: NotificationKind,
    message: &str,
) {
    toast.dispatch(ToastAction::Show(Notification::new(id, kind, message)));

    let schedule = |delay, phase| {
        let dispatcher = toast.clone();
        Timeout::new(dom::millis(delay), move || {
            dispatcher.dispatch(ToastAction::Advance { id, phase });
        })
        .forget();
    };

    schedule(notification::SLIDE_IN_AFTER, Some(NotificationPhase::Shown));
    schedule(notification::DISMISS_AFTER, Some(NotificationPhase::Leaving));
    schedule(
        notification::DISMISS_AFTER + notification::SLIDE_OUT_FOR,
        None,
    );
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    html! {
        <div class={notification.class()} style={notification.style()} role="status" aria-live="polite">
            {notification.message.clone()}
        </div>
    }
}

pub enum LoadingAction {
    Hide,
    Remove,
}

#[derive(PartialEq)]
pub struct LoadingState(LoadingPhase);

impl Reducible for LoadingState {
    type Action = LoadingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LoadingAction::Hide => self.0.hide(),
            LoadingAction::Remove => self.0.remove(),
        };

        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

fn hide_after(dispatcher: UseReducerDispatcher<LoadingState>, delay: std::time::Duration) {
    Timeout::new(dom::millis(delay), move || {
        dispatcher.dispatch(LoadingAction::Hide);
        Timeout::new(dom::millis(effects::LOADING_FADE_OUT), move || {
            dispatcher.dispatch(LoadingAction::Remove);
        })
        .forget();
    })
    .forget();
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let state = use_reducer(|| LoadingState(LoadingPhase::Visible));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            if dom::document_loaded() {
                hide_after(dispatcher.clone(), effects::LOADING_MIN_VISIBLE);
            } else if let Some(win) = window() {
                let on_load = dispatcher.clone();
                EventListener::once(&win, "load", move |_| {
                    hide_after(on_load, effects::LOADING_MIN_VISIBLE);
                })
                .forget();
            }

            hide_after(dispatcher, effects::LOADING_FALLBACK);
            || ()
        });
    }

    if state.0 == LoadingPhase::Removed {
        return html! {};
    }

    html! {
        <div id="loading-screen" class={state.0.class()} aria-hidden="true">
            <div class="loading-content">
                <div class="loading-book">
                    <span class="page"></span>
                    <span class="page"></span>
                    <span class="page"></span>
                </div>
                <p class="loading-text">{"Turning the pages..."}</p>
            </div>
        </div>
    }
}
