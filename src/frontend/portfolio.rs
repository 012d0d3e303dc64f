use super::dom;
use super::widgets::LazyImage;
use crate::content::{PortfolioEntry, SiteContent};
use crate::effects;
use crate::filter::{FilterControl, ItemDecision};
use crate::modal;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let controller = {
        let content = props.content.clone();
        use_state(move || content.portfolio_controller())
    };
    let open_entry = use_state(|| None::<usize>);

    let plan = controller.recompute();

    let on_filter = {
        let controller = controller.clone();
        Callback::from(move |category: String| {
            let mut next = (*controller).clone();
            next.set_category(&category);
            controller.set(next);
        })
    };

    let on_close = {
        let open_entry = open_entry.clone();
        Callback::from(move |_: ()| open_entry.set(None))
    };

    let buttons = controller.controls().iter().map(|control| {
        filter_button(control, controller.is_active(control), on_filter.clone())
    });

    let on_open = {
        let open_entry = open_entry.clone();
        Callback::from(move |index: usize| open_entry.set(Some(index)))
    };

    let items = props
        .content
        .portfolio
        .iter()
        .zip(plan.decisions.iter())
        .map(|(entry, decision)| {
            html! {
                <PortfolioCard
                    key={entry.id.clone()}
                    entry={entry.clone()}
                    decision={*decision}
                    on_open={on_open.clone()}
                />
            }
        });

    let modal = (*open_entry)
        .and_then(|index| props.content.portfolio.get(index).cloned())
        .map(|entry| html! { <PortfolioModal {entry} on_close={on_close.clone()} /> });

    html! {
        <section id="portfolio" class="portfolio scroll-animate">
            <div class="container">
                <h2 class="section-title">{"Selected Work"}</h2>
                <div class="portfolio-filters" role="group" aria-label="Filter portfolio">
                    { for buttons }
                </div>
                <div class="portfolio-grid">
                    { for items }
                </div>
                if plan.show_empty {
                    <p class="no-results show">{"Nothing here yet."}</p>
                }
            </div>
            { for modal }
        </section>
    }
}

pub fn filter_button(control: &FilterControl, active: bool, on_select: Callback<String>) -> Html {
    let onclick = {
        let category = control.category.clone();
        Callback::from(move |_| on_select.emit(category.clone()))
    };

    html! {
        <button
            type="button"
            class={classes!("filter-btn", active.then_some("active"))}
            data-filter={control.category.clone()}
            aria-pressed={active.to_string()}
            {onclick}
        >
            {control.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    entry: PortfolioEntry,
    decision: ItemDecision,
    on_open: Callback<usize>,
}

/// Grid card that fades out when filtered away, then collapses out of the
/// layout so it can neither take space nor receive clicks.
#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let decision = props.decision;
    let collapsed = use_state(|| !decision.visible);

    {
        let collapsed = collapsed.clone();
        use_effect_with(decision.visible, move |&visible| {
            let fade = if visible {
                collapsed.set(false);
                None
            } else {
                Some(Timeout::new(dom::millis(effects::CARD_FADE_OUT), move || {
                    collapsed.set(true);
                }))
            };
            move || drop(fade)
        });
    }

    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(decision.index))
    };
    let entry = &props.entry;

    html! {
        <article
            class="portfolio-item"
            data-category={entry.category.clone()}
            aria-hidden={(!decision.visible).to_string()}
            style={effects::portfolio_card_style(decision.visible, decision.delay_ms, *collapsed)}
        >
            <div class="portfolio-image">
                <LazyImage src={entry.image.clone()} alt={entry.title.clone()} />
                <div class="portfolio-overlay">
                    <button
                        class="btn btn-outline"
                        type="button"
                        disabled={!decision.visible}
                        tabindex={(!decision.visible).then_some("-1")}
                        {onclick}
                    >
                        {"Read more"}
                    </button>
                </div>
            </div>
            <div class="portfolio-content">
                <span class="portfolio-category">{entry.category.clone()}</span>
                <h3>{entry.title.clone()}</h3>
                <p>{entry.description.clone()}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioModalProps {
    entry: PortfolioEntry,
    on_close: Callback<()>,
}

fn focusable_elements(dialog: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = dialog.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn trap_focus(dialog: &Element, event: &KeyboardEvent) {
    let focusable = focusable_elements(dialog);
    let active = dom::document().and_then(|d| d.active_element());
    let current = active.and_then(|active| {
        focusable
            .iter()
            .position(|element| AsRef::<Element>::as_ref(element) == &active)
    });

    if let Some(next) = modal::trapped_focus(focusable.len(), current, event.shift_key()) {
        dom::focus(&focusable[next]);
        event.prevent_default();
    }
}

#[function_component(PortfolioModal)]
fn portfolio_modal(props: &PortfolioModalProps) -> Html {
    let dialog_ref = use_node_ref();

    {
        let on_close = props.on_close.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with((), move |_| {
            dom::set_body_overflow(modal::body_overflow(true));
            tracing::debug!("portfolio modal opened");

            let listener = dom::document().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match event.key().as_str() {
                        "Escape" => on_close.emit(()),
                        "Tab" => {
                            if let Some(dialog) = dialog_ref.cast::<Element>() {
                                trap_focus(&dialog, event);
                            }
                        }
                        _ => {}
                    }
                })
            });

            move || {
                drop(listener);
                dom::set_body_overflow(modal::body_overflow(false));
            }
        });
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            let on_overlay = event
                .target_dyn_into::<Element>()
                .map(|target| target.class_list().contains("modal"))
                .unwrap_or(false);
            if on_overlay {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let entry = &props.entry;
    let title_id = format!("modal-title-{}", entry.id);

    html! {
        <div
            id={format!("modal-{}", entry.id)}
            class="modal"
            role="dialog"
            aria-modal="true"
            aria-labelledby={title_id.clone()}
            style="display: block;"
            onclick={on_overlay_click}
            ref={dialog_ref}
        >
            <div class="modal-content" style="animation: modalSlideIn 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94);">
                <button class="close" type="button" aria-label="Close" onclick={on_close_click}>{"×"}</button>
                <LazyImage src={entry.image.clone()} alt={entry.title.clone()} class="modal-image" />
                <h3 id={title_id}>{entry.title.clone()}</h3>
                <p class="modal-description">{entry.description.clone()}</p>
                <p class="modal-details">{entry.details.clone()}</p>
                <ul class="modal-tags">
                    { for entry.tags.iter().map(|tag| html! { <li key={tag.clone()}>{tag.clone()}</li> }) }
                </ul>
            </div>
        </div>
    }
}
