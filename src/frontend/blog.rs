use super::dom;
use super::portfolio::filter_button;
use crate::content::SiteContent;
use crate::effects;
use crate::error_page::search_from_location;
use std::rc::Rc;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BlogProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Blog)]
pub fn blog(props: &BlogProps) -> Html {
    let seeded_query = use_memo((), |_| {
        dom::location_href()
            .and_then(|href| search_from_location(&href))
            .unwrap_or_default()
    });
    let query = {
        let seeded_query = seeded_query.clone();
        use_state(move || (*seeded_query).clone())
    };
    let controller = {
        let content = props.content.clone();
        let seeded_query = seeded_query.clone();
        use_state(move || {
            let mut controller = content.blog_controller();
            if !seeded_query.is_empty() {
                tracing::info!("blog search seeded from link: {seeded_query}");
                controller.set_search_term(&seeded_query);
            }
            controller
        })
    };
    let search_ref = use_node_ref();

    let plan = controller.recompute();

    let apply_search = {
        let query = query.clone();
        let controller = controller.clone();
        Callback::from(move |raw: String| {
            let mut next = (*controller).clone();
            next.set_search_term(&raw);
            controller.set(next);
            query.set(raw);
        })
    };

    let oninput = {
        let apply_search = apply_search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            apply_search.emit(input.value());
        })
    };

    let onkeydown = {
        let apply_search = apply_search.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                apply_search.emit(String::new());
            }
        })
    };

    let on_clear = {
        let apply_search = apply_search.clone();
        let search_ref = search_ref.clone();
        Callback::from(move |_: MouseEvent| {
            apply_search.emit(String::new());
            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        })
    };

    let on_filter = {
        let controller = controller.clone();
        Callback::from(move |category: String| {
            let mut next = (*controller).clone();
            next.set_category(&category);
            controller.set(next);
        })
    };

    let buttons = controller.controls().iter().map(|control| {
        filter_button(control, controller.is_active(control), on_filter.clone())
    });

    let posts = props
        .content
        .posts
        .iter()
        .zip(plan.decisions.iter())
        .map(|(post, decision)| {
            html! {
                <article
                    key={post.id.clone()}
                    class={classes!(
                        "blog-post",
                        if decision.visible { "visible" } else { "hidden" },
                    )}
                    data-category={post.category.clone()}
                    data-tags={post.tags.join(", ")}
                    style={effects::blog_post_style(decision.visible, decision.delay_ms)}
                >
                    <div class="blog-meta">
                        <span class="blog-category">{post.category.clone()}</span>
                        <time datetime={post.date.clone()}>{post.date.clone()}</time>
                        <span class="blog-read-time">{format!("{} min read", post.read_minutes)}</span>
                    </div>
                    <h3 class="blog-title">{post.title.clone()}</h3>
                    <p class="blog-excerpt">{post.excerpt.clone()}</p>
                    <ul class="blog-tags">
                        { for post.tags.iter().map(|tag| html! { <li key={tag.clone()}>{format!("#{tag}")}</li> }) }
                    </ul>
                </article>
            }
        });

    let clear_style = if controller.shows_clear_control() {
        "display: block;"
    } else {
        "display: none;"
    };
    let grid_style = if plan.show_empty {
        "display: none;"
    } else {
        "display: grid;"
    };

    html! {
        <section id="blog" class="blog scroll-animate">
            <div class="container">
                <h2 class="section-title">{"From the Notebook"}</h2>
                <div class="blog-controls">
                    <div class="search-box">
                        <i class="fas fa-search" aria-hidden="true"></i>
                        <input
                            id="blog-search"
                            type="search"
                            placeholder="Search posts..."
                            aria-label="Search blog posts"
                            value={(*query).clone()}
                            ref={search_ref}
                            {oninput}
                            {onkeydown}
                        />
                        <button
                            id="search-clear"
                            type="button"
                            class="search-clear"
                            aria-label="Clear search"
                            style={clear_style}
                            onclick={on_clear}
                        >
                            <i class="fas fa-times" aria-hidden="true"></i>
                        </button>
                    </div>
                    <div class="blog-filters" role="group" aria-label="Filter posts">
                        { for buttons }
                    </div>
                </div>
                <div id="blog-grid" class="blog-grid" style={grid_style}>
                    { for posts }
                </div>
                <div
                    id="no-results"
                    class={classes!("no-results", plan.show_empty.then_some("show"))}
                    aria-live="polite"
                >
                    <i class="fas fa-book-open" aria-hidden="true"></i>
                    <p>{"No posts match your search. Try another word or category."}</p>
                </div>
            </div>
        </section>
    }
}
