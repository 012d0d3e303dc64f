use super::blog::Blog;
use super::contact::Contact;
use super::dom::{self, LocalThemeStore, ThemeRoot};
use super::portfolio::Portfolio;
use super::widgets::{show_toast, LazyImage, LoadingScreen, ThemeToggle, Toast, ToastState};
use crate::accordion::Accordion;
use crate::content::{FaqEntry, SiteContent};
use crate::effects::{self, Particle};
use crate::notification::NotificationKind;
use crate::scroll::{self, NavState};
use crate::theme::{self, Theme};
use crate::typing::{self, TypingAnimation};
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::{Array, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};
use yew::prelude::*;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#portfolio", "Portfolio"),
    ("#blog", "Blog"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

fn load_content() -> SiteContent {
    SiteContent::embedded().unwrap_or_else(|error| {
        tracing::error!("{error}");
        SiteContent::default()
    })
}

/// Smooth-scrolls to a same-page anchor instead of jumping.
fn anchor_navigation(href: &'static str, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        let Some(id) = scroll::anchor_id(href) else {
            return;
        };
        event.prevent_default();
        if !dom::smooth_scroll_to_section(id) {
            tracing::debug!("no section #{id} to scroll to");
        }
        if let Some(after) = after.as_ref() {
            after.emit(());
        }
    })
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_targets() -> Vec<Element> {
    let Some(nodes) = dom::document().and_then(|d| d.query_selector_all(".scroll-animate").ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn start_reveal_observer() -> Option<RevealObserver> {
    let targets = reveal_targets();
    let supported = window()
        .and_then(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false);

    if !supported {
        for target in &targets {
            let _ = target.class_list().add_1(effects::REVEAL_CLASS);
        }
        return None;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(effects::REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(effects::REVEAL_THRESHOLD));
    options.set_root_margin(effects::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for target in &targets {
        observer.observe(target);
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Most recent value of a scroll-derived quantity; an unchanged value does
/// not re-render.
#[derive(Default, PartialEq)]
struct Latest<T>(T);

impl<T: PartialEq> Reducible for Latest<T> {
    type Action = T;

    fn reduce(self: Rc<Self>, next: Self::Action) -> Rc<Self> {
        if self.0 == next {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    theme: Theme,
    on_toggle_theme: Callback<MouseEvent>,
    scrolled: bool,
    active_section: Option<String>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let Some(target) = dom::event_target_node(event) else {
                        return;
                    };
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .cast::<Node>()
                            .map(|node| node.contains(Some(&target)))
                            .unwrap_or(false)
                    };
                    if !inside(&menu_ref) && !inside(&toggle_ref) {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let links = NAV_LINKS.into_iter().map(|(href, label)| {
        let active = props.active_section.as_deref() == scroll::anchor_id(href);

        html! {
            <li key={href}>
                <a
                    href={href}
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then_some("true")}
                    onclick={anchor_navigation(href, Some(close_menu.clone()))}
                >
                    {label}
                </a>
            </li>
        }
    });

    html! {
        <nav id="navbar" class={classes!("navbar", props.scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={anchor_navigation("#home", None)}>
                    {"Aditi"}<span>{"."}</span>
                </a>
                <ul id="nav-menu" class={classes!("nav-menu", menu_open.then_some("active"))} ref={menu_ref}>
                    { for links }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle id="theme-toggle" theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <button
                        id="nav-toggle"
                        type="button"
                        class={classes!("nav-toggle", menu_open.then_some("active"))}
                        aria-label="Toggle navigation menu"
                        aria-expanded={menu_open.to_string()}
                        aria-controls="nav-menu"
                        onclick={on_toggle_menu}
                        ref={toggle_ref}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

fn schedule_typing(
    delay: Duration,
    animation: Rc<RefCell<TypingAnimation>>,
    text: UseStateHandle<String>,
    alive: Rc<Cell<bool>>,
) {
    Timeout::new(dom::millis(delay), move || {
        if !alive.get() {
            return;
        }
        let Some(frame) = animation.borrow_mut().tick() else {
            return;
        };
        text.set(frame.text);
        schedule_typing(frame.next_delay, animation, text, alive);
    })
    .forget();
}

#[derive(Properties, PartialEq)]
struct TypingTextProps {
    words: Rc<Vec<String>>,
}

#[function_component(TypingText)]
fn typing_text(props: &TypingTextProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with(props.words.clone(), move |words| {
            let alive = Rc::new(Cell::new(true));
            let animation = Rc::new(RefCell::new(TypingAnimation::new(words)));
            schedule_typing(typing::START_DELAY, animation, text, alive.clone());
            move || alive.set(false)
        });
    }

    html! {
        <>
            <span id="typing-text" class="typing-text">{(*text).clone()}</span>
            <span class="typing-cursor" aria-hidden="true">{"|"}</span>
        </>
    }
}

enum ParticleAction {
    Add(Particle),
    TopUp(Particle),
    Remove(u64),
}

#[derive(Default, PartialEq)]
struct ParticleField {
    particles: Vec<Particle>,
}

impl Reducible for ParticleField {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut particles = self.particles.clone();
        match action {
            ParticleAction::Add(particle) => particles.push(particle),
            ParticleAction::TopUp(particle) => {
                if !effects::should_top_up_particles(particles.len()) {
                    return self;
                }
                particles.push(particle);
            }
            ParticleAction::Remove(id) => particles.retain(|particle| particle.id != id),
        }
        Rc::new(Self { particles })
    }
}

fn spawn_particle(
    field: &UseReducerDispatcher<ParticleField>,
    next_id: &Rc<Cell<u64>>,
    alive: &Rc<Cell<bool>>,
    top_up: bool,
) {
    let id = next_id.get();
    next_id.set(id + 1);
    let particle = Particle::spawn(id, dom::random);
    let lifetime = particle.lifetime();

    field.dispatch(if top_up {
        ParticleAction::TopUp(particle)
    } else {
        ParticleAction::Add(particle)
    });

    let field = field.clone();
    let alive = alive.clone();
    Timeout::new(dom::millis(lifetime), move || {
        if alive.get() {
            field.dispatch(ParticleAction::Remove(id));
        }
    })
    .forget();
}

#[function_component(FloatingParticles)]
fn floating_particles() -> Html {
    let field = use_reducer(ParticleField::default);

    {
        let dispatcher = field.dispatcher();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let next_id = Rc::new(Cell::new(0_u64));

            for index in 0..effects::PARTICLE_LIMIT {
                let dispatcher = dispatcher.clone();
                let next_id = next_id.clone();
                let alive = alive.clone();
                let delay = effects::PARTICLE_SPAWN_SPACING * index as u32;
                Timeout::new(dom::millis(delay), move || {
                    if alive.get() {
                        spawn_particle(&dispatcher, &next_id, &alive, false);
                    }
                })
                .forget();
            }

            let top_up = {
                let alive = alive.clone();
                Interval::new(dom::millis(effects::PARTICLE_TOP_UP_EVERY), move || {
                    spawn_particle(&dispatcher, &next_id, &alive, true);
                })
            };

            move || {
                alive.set(false);
                drop(top_up);
            }
        });
    }

    html! {
        <div id="floating-particles" class="floating-particles" aria-hidden="true">
            { for field.particles.iter().map(|particle| html! {
                <div key={particle.id} class="particle" style={particle.style()}></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    words: Rc<Vec<String>>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let scroll_y = use_reducer(Latest::<f64>::default);

    {
        let dispatcher = scroll_y.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(dom::scroll_y());
            let frames = dom::on_scroll_frames(move || dispatcher.dispatch(dom::scroll_y()));
            move || drop(frames)
        });
    }

    let y = scroll_y.0;
    let on_scroll_indicator = Callback::from(|_: MouseEvent| {
        dom::smooth_scroll_to_section("about");
    });

    html! {
        <section id="home" class="hero">
            <div
                class="hero-background"
                style={scroll::parallax_transform(y, scroll::HERO_BACKGROUND_RATE)}
            >
                <div
                    class="animated-gradient"
                    style={scroll::parallax_transform(y, scroll::GRADIENT_RATE)}
                ></div>
                <div
                    class="literary-elements"
                    style={scroll::parallax_transform(y, scroll::LITERARY_ELEMENTS_RATE)}
                    aria-hidden="true"
                >
                    <span class="literary-element quill">{"✒"}</span>
                    <span class="literary-element book">{"📖"}</span>
                    <span class="literary-element quote">{"“"}</span>
                </div>
                <FloatingParticles />
            </div>
            <div class="hero-content">
                <p class="hero-greeting">{"Hello, I'm"}</p>
                <h1 class="hero-title">{"Aditi Sharma"}</h1>
                <p class="hero-subtitle">
                    <TypingText words={props.words.clone()} />
                </p>
                <p class="hero-description">
                    {"Crafting stories, shaping manuscripts and chasing the right word."}
                </p>
                <div class="hero-buttons">
                    <a href="#portfolio" class="btn btn-primary" onclick={anchor_navigation("#portfolio", None)}>
                        {"View My Work"}
                    </a>
                    <a href="#contact" class="btn btn-outline" onclick={anchor_navigation("#contact", None)}>
                        {"Get In Touch"}
                    </a>
                </div>
            </div>
            <button
                type="button"
                class="scroll-indicator"
                aria-label="Scroll to about section"
                onclick={on_scroll_indicator}
            >
                <span class="scroll-arrow" aria-hidden="true"></span>
            </button>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about scroll-animate">
            <div class="container about-container">
                <div class="about-image">
                    <LazyImage src="/images/about.jpg" alt="Portrait of Aditi at her writing desk" />
                </div>
                <div class="about-text">
                    <h2 class="section-title">{"About Me"}</h2>
                    <p>
                        {"I write fiction and essays, and I edit other people's manuscripts until they sound more like themselves."}
                    </p>
                    <p>
                        {"Most days start with morning pages and end with a red pen. In between there is a lot of tea."}
                    </p>
                    <ul class="about-stats">
                        <li><span class="stat-number">{"40+"}</span><span class="stat-label">{"Published pieces"}</span></li>
                        <li><span class="stat-number">{"25"}</span><span class="stat-label">{"Manuscripts edited"}</span></li>
                        <li><span class="stat-number">{"6"}</span><span class="stat-label">{"Years writing"}</span></li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqProps {
    entries: Rc<Vec<FaqEntry>>,
}

#[function_component(Faq)]
fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    let items = props.entries.iter().enumerate().map(|(index, entry)| {
        let open = accordion.is_open(index);
        let onclick = {
            let accordion = accordion.clone();
            Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(index)))
        };
        let answer_id = format!("faq-answer-{index}");

        html! {
            <div key={index} class={classes!("faq-item", open.then_some("active"))}>
                <button
                    type="button"
                    class="faq-question"
                    aria-expanded={open.to_string()}
                    aria-controls={answer_id.clone()}
                    {onclick}
                >
                    <span>{entry.question.clone()}</span>
                    <i class="fas fa-chevron-down" aria-hidden="true"></i>
                </button>
                <div id={answer_id} class="faq-answer" role="region">
                    <p>{entry.answer.clone()}</p>
                </div>
            </div>
        }
    });

    html! {
        <section id="faq" class="faq scroll-animate">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for items }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{"© Aditi Sharma. Words, edits and the occasional poem."}</p>
                <ul class="social-links">
                    <li><a href="https://www.linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn"><i class="fab fa-linkedin" aria-hidden="true"></i></a></li>
                    <li><a href="https://www.instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram"><i class="fab fa-instagram" aria-hidden="true"></i></a></li>
                    <li><a href="https://medium.com" target="_blank" rel="noopener noreferrer" aria-label="Medium"><i class="fab fa-medium" aria-hidden="true"></i></a></li>
                </ul>
            </div>
        </footer>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let content = use_memo((), |_| load_content());
    let words = use_memo(content.clone(), |content| content.typing_words());
    let faq_entries = use_memo(content.clone(), |content| content.faq.clone());
    let theme = use_state(|| theme::resolve(&LocalThemeStore, Theme::Dark));
    let nav = use_reducer(Latest::<NavState>::default);
    let toast = use_reducer(ToastState::default);
    let toast_ids = use_mut_ref(|| 0_u64);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::apply_theme(current, ThemeRoot::Body);
            tracing::info!("Welcome to Aditi Sharma's portfolio!");
            tracing::info!("Built with Rust and WebAssembly. Visit /404 for a fun error page!");
            || ()
        });
    }

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            let read = move || {
                dispatcher.dispatch(NavState::at(dom::scroll_y(), &dom::section_bounds()));
            };
            read();
            let frames = dom::on_scroll_frames(read);
            move || drop(frames)
        });
    }

    use_effect_with((), |_| {
        let observer = start_reveal_observer();
        move || drop(observer)
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle(&LocalThemeStore, *theme);
            dom::apply_theme_with_transition(next, ThemeRoot::Body);
            theme.set(next);
        })
    };

    let on_notify = {
        let dispatcher = toast.dispatcher();
        use_callback(
            (),
            move |(kind, message): (NotificationKind, &'static str), _| {
                let id = {
                    let mut last = toast_ids.borrow_mut();
                    *last += 1;
                    *last
                };
                show_toast(&dispatcher, id, kind, message);
            },
        )
    };

    html! {
        <>
            <LoadingScreen />
            <Navbar
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
                scrolled={nav.0.scrolled}
                active_section={nav.0.active_section.clone()}
            />
            <main id="content">
                <Hero words={words} />
                <About />
                <Portfolio content={content.clone()} />
                <Blog content={content.clone()} />
                <Faq entries={faq_entries} />
                <Contact {on_notify} />
            </main>
            <Footer />
            <Toast notification={toast.current.clone()} />
        </>
    }
}
