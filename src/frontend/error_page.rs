use super::dom::{self, LocalThemeStore, ThemeRoot};
use super::widgets::ThemeToggle;
use crate::effects::{self, Jitter};
use crate::error_page::{self, Shortcut};
use crate::scroll;
use crate::theme::{self, Theme};
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

/// Blocks that slide in one after another on load.
const ENTRANCE_BLOCKS: usize = 7;

const SHELF: [(&str, &str); 3] = [
    ("Drafts", "#8B4513"),
    ("Edits", "#A0522D"),
    ("Lost Pages", "#CD853F"),
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/#portfolio", "Portfolio"),
    ("/#blog", "Blog"),
    ("/#faq", "FAQ"),
    ("/#contact", "Contact"),
];

fn focus_search(search_ref: &NodeRef) {
    if let Some(input) = search_ref.cast::<HtmlInputElement>() {
        let _ = input.focus();
    }
}

fn toggle_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "background: rgba(26, 26, 26, 0.9); color: white;",
        Theme::Light => "background: rgba(255, 255, 255, 0.9); color: var(--primary-color);",
    }
}

#[derive(Properties, PartialEq)]
struct FloatingProps {
    index: usize,
    quote: bool,
    children: Html,
}

/// Decoration that drifts to a fresh random offset on its own period.
#[function_component(Floating)]
fn floating(props: &FloatingProps) -> Html {
    let jitter = use_state(|| None::<Jitter>);

    {
        let jitter = jitter.clone();
        use_effect_with((props.index, props.quote), move |&(index, quote)| {
            let period = if quote {
                effects::quote_jitter_period(index)
            } else {
                effects::book_jitter_period(index)
            };
            let interval = Interval::new(dom::millis(period), move || {
                let next = if quote {
                    Jitter::quote(dom::random)
                } else {
                    Jitter::book(dom::random)
                };
                jitter.set(Some(next));
            });
            move || drop(interval)
        });
    }

    html! {
        <div
            class={if props.quote { "floating-quote" } else { "floating-book" }}
            style={(*jitter).map(|jitter| jitter.transform())}
            aria-hidden="true"
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ShelfBookProps {
    title: AttrValue,
    color: AttrValue,
}

#[function_component(ShelfBook)]
fn shelf_book(props: &ShelfBookProps) -> Html {
    let hovered = use_state(|| false);
    let replay = use_state(|| 0_u32);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let onclick = {
        let replay = replay.clone();
        Callback::from(move |_: MouseEvent| replay.set(*replay + 1))
    };

    let transform = if *hovered {
        "transform: translateY(-10px) rotate(5deg) scale(1.05); transition: all 0.3s ease;"
    } else {
        "transform: translateY(0) rotate(0deg) scale(1);"
    };
    let animation = if *replay > 0 {
        "animation: bookStack 0.5s ease-in-out;"
    } else {
        ""
    };

    // Keyed on the click count so each click restarts the animation.
    html! {
        <div
            key={*replay}
            class="book"
            style={format!("background: {}; {transform} {animation}", props.color)}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <span class="book-title">{props.title.clone()}</span>
        </div>
    }
}

#[function_component(QuestionMark)]
fn question_mark() -> Html {
    let replay = use_state(|| 0_u32);
    let onclick = {
        let replay = replay.clone();
        Callback::from(move |_: MouseEvent| replay.set(*replay + 1))
    };
    let style = (*replay > 0).then_some("animation: bounce 0.5s ease-in-out;");

    html! {
        <span key={*replay} class="question-mark" {style} {onclick}>{"?"}</span>
    }
}

fn entrance_style(index: usize, revealed: usize) -> &'static str {
    if index < revealed {
        "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;"
    } else {
        "opacity: 0; transform: translateY(30px);"
    }
}

#[function_component(ErrorPage)]
pub fn not_found_page() -> Html {
    let theme = use_state(|| theme::resolve(&LocalThemeStore, Theme::Light));
    let revealed = use_state(|| 0_usize);
    let query = use_state(String::new);
    let search_ref = use_node_ref();

    {
        let current = *theme;
        let revealed = revealed.clone();
        let search_ref = search_ref.clone();
        use_effect_with((), move |_| {
            dom::apply_theme(current, ThemeRoot::DocumentElement);
            tracing::info!("404 - Chapter Not Found");
            tracing::info!("Looks like this page got lost in the editing process!");
            tracing::info!("Press H to go home, S to search, or Escape to go back");

            let entrance: Vec<Timeout> = (0..ENTRANCE_BLOCKS)
                .map(|index| {
                    let revealed = revealed.clone();
                    Timeout::new(dom::millis(effects::entrance_delay(index)), move || {
                        revealed.set(index + 1);
                    })
                })
                .collect();

            let focus = {
                let search_ref = search_ref.clone();
                Timeout::new(dom::millis(error_page::SEARCH_FOCUS_DELAY), move || {
                    focus_search(&search_ref);
                })
            };

            let shortcuts = dom::document().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match error_page::shortcut_for_key(&key_event.key(), dom::is_text_field(event)) {
                        Some(Shortcut::Home) => dom::navigate("/"),
                        Some(Shortcut::FocusSearch) => {
                            key_event.prevent_default();
                            focus_search(&search_ref);
                        }
                        Some(Shortcut::Back) => dom::go_back_or_home(),
                        None => {}
                    }
                })
            });

            move || {
                drop(entrance);
                drop(focus);
                drop(shortcuts);
            }
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle(&LocalThemeStore, *theme);
            dom::apply_theme(next, ThemeRoot::DocumentElement);
            theme.set(next);
        })
    };

    let perform_search = {
        let query = query.clone();
        Callback::from(move |_: ()| {
            let target = dom::location_origin()
                .and_then(|origin| error_page::search_redirect(&origin, &query));
            match target {
                Some(url) => dom::navigate(&url),
                None => tracing::debug!("ignoring blank search"),
            }
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onkeypress = {
        let perform_search = perform_search.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                perform_search.emit(());
            }
        })
    };

    let on_search_click = {
        let perform_search = perform_search.clone();
        Callback::from(move |_: MouseEvent| perform_search.emit(()))
    };

    let on_anchor = Callback::from(|event: MouseEvent| {
        let Some(anchor) = event.target_dyn_into::<Element>() else {
            return;
        };
        let Some(href) = anchor
            .closest("a")
            .ok()
            .flatten()
            .and_then(|link| link.get_attribute("href"))
        else {
            return;
        };
        if let Some(id) = scroll::anchor_id(&href) {
            event.prevent_default();
            dom::scroll_into_view(id);
        }
    });

    let step = |index: usize| entrance_style(index, *revealed);

    html! {
        <div class="error-page">
            <div class="theme-toggle-fixed" style={toggle_style(*theme)}>
                <ThemeToggle theme={*theme} on_toggle={on_toggle_theme} />
            </div>
            <div class="floating-elements">
                <Floating index={0} quote={false}>{"📕"}</Floating>
                <Floating index={1} quote={false}>{"📗"}</Floating>
                <Floating index={2} quote={false}>{"📘"}</Floating>
                <Floating index={0} quote={true}>{"“Not all those who wander are lost.”"}</Floating>
                <Floating index={1} quote={true}>{"“Every story has a missing chapter.”"}</Floating>
            </div>
            <main id="top" class="error-container">
                <div class="error-code" style={step(0)}>
                    {"4"}<QuestionMark />{"4"}
                </div>
                <h1 class="error-title" style={step(1)}>{"Chapter Not Found"}</h1>
                <p class="error-description" style={step(2)}>
                    {"The page you're looking for seems to have been edited out of the story."}
                </p>
                <div class="error-suggestion" style={step(3)}>
                    <div class="bookshelf">
                        { for SHELF.into_iter().map(|(title, color)| html! {
                            <ShelfBook key={title} title={title} color={color} />
                        }) }
                    </div>
                    <div class="search-box">
                        <input
                            id="search-input"
                            type="search"
                            placeholder="Search the blog..."
                            aria-label="Search the blog"
                            value={(*query).clone()}
                            ref={search_ref}
                            {oninput}
                            {onkeypress}
                        />
                        <button id="search-btn" type="button" aria-label="Search" onclick={on_search_click}>
                            <i class="fas fa-search" aria-hidden="true"></i>
                        </button>
                    </div>
                </div>
                <div class="error-actions" style={step(4)}>
                    <a href="/" class="btn btn-primary">{"Back to Home"}</a>
                    <button type="button" class="btn btn-outline" onclick={Callback::from(|_: MouseEvent| dom::go_back_or_home())}>
                        {"Go Back"}
                    </button>
                </div>
                <ul class="error-links" style={step(5)}>
                    { for QUICK_LINKS.into_iter().map(|(href, label)| html! {
                        <li key={href}><a {href}>{label}</a></li>
                    }) }
                </ul>
                <footer class="error-footer" style={step(6)}>
                    <p>{"Press H to go home, S to search, or Escape to go back."}</p>
                    <a href="#top" onclick={on_anchor}>{"Back to top"}</a>
                </footer>
            </main>
        </div>
    }
}
