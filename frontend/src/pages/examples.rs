use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::hooks::on_next_pointer_down;
use crate::overlay;
use crate::reveal::reveal_style;
use crate::viewport::{self, use_viewport_tier, ExamplesLayout};
use crate::zoom::{CardRect, ZoomAction, ZoomPhase, ZoomState, ZoomTransform, CARD_DURATION_MS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExampleItem {
    pub title: &'static str,
    pub img: &'static str,
    pub explanation: &'static str,
}

pub const EXAMPLES: [ExampleItem; 3] = [
    ExampleItem {
        title: "Homepage design",
        img: config::PLACEHOLDER_IMAGE,
        explanation: "If you want to build/redesign only a homepage for your site.",
    },
    ExampleItem {
        title: "Ecommerce Websites",
        img: config::PLACEHOLDER_IMAGE,
        explanation: "If you want to create a website to sell your products.",
    },
    ExampleItem {
        title: "AI Applications",
        img: config::PLACEHOLDER_IMAGE,
        explanation: "If you want to build applications that use AI agents (Chatbot, general workflows).",
    },
];

/// Reveal slot of the section title, right after the header's three.
const TITLE_REVEAL_ORDER: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ExamplesProps {
    pub section_ref: NodeRef,
}

#[function_component(Examples)]
pub fn examples(props: &ExamplesProps) -> Html {
    let layout = ExamplesLayout::for_tier(use_viewport_tier());

    let cards: Vec<Html> = EXAMPLES
        .iter()
        .enumerate()
        .map(|(i, item)| html! {
            <ExampleCard key={item.title} item={*item} reveal_order={TITLE_REVEAL_ORDER + 1 + i} />
        })
        .collect();

    let card_grid = match layout {
        ExamplesLayout::TwoThenOne => html! {
            <div class="examples-stacked">
                { for layout.rows(&cards).into_iter().map(|row| html! {
                    <div class="examples-row">
                        { for row.iter().cloned() }
                    </div>
                }) }
            </div>
        },
        ExamplesLayout::Grid => html! {
            <div class="examples-grid">
                { for layout.rows(&cards).into_iter().flatten().cloned() }
            </div>
        },
    };

    html! {
        <section ref={props.section_ref.clone()} class="examples-section">
            <span class="reveal section-title" style={reveal_style(TITLE_REVEAL_ORDER)}>
                {"Build Any Website"}
            </span>
            { card_grid }
            <style>
                {r#"
                .examples-section {
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                }
                .examples-stacked {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 0 2rem;
                    width: 85%;
                    align-items: center;
                    justify-content: center;
                }
                .examples-row {
                    display: flex;
                    flex-direction: row;
                    justify-content: center;
                    gap: 1rem;
                }
                .examples-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    padding: 0 1rem;
                    justify-items: center;
                    width: 85%;
                }
                .example-card {
                    max-width: 16rem;
                    display: flex;
                    flex-direction: column;
                    border-radius: 0.75rem;
                    padding: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.18), 0 0 0 1px rgba(0, 0, 0, 0.1);
                    position: relative;
                }
                .example-card.zooming-in {
                    animation: card-zoom-fade 0.3s ease;
                }
                @keyframes card-zoom-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .example-card img {
                    width: 100%;
                    border-radius: 0.5rem;
                }
                .example-card img.clickable {
                    cursor: pointer;
                }
                .example-title {
                    margin: 0.25rem 0 0;
                    font-family: var(--font-nav);
                    font-size: 1.125rem;
                }
                .example-explanation {
                    margin: 0.25rem 0;
                    font-family: var(--font-body);
                }
                @media (min-width: 640px) {
                    .examples-grid { padding: 0 2rem; }
                    .example-card { max-width: 20rem; }
                }
                @media (min-width: 768px) {
                    .example-card { max-width: 24rem; }
                }
                @media (min-width: 1024px) {
                    .examples-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExampleCardProps {
    pub item: ExampleItem,
    pub reveal_order: usize,
}

/// Example card that zooms to the middle of the screen when clicked.
///
/// The next pointer press anywhere on the page sends it back.
#[function_component(ExampleCard)]
pub fn example_card(props: &ExampleCardProps) -> Html {
    let zoom = use_reducer_eq(ZoomState::default);
    let card_ref = use_node_ref();

    let onclick = {
        let zoom = zoom.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if zoom.is_modified() {
                return;
            }
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let Some((width, height)) = viewport::current_size() else {
                return;
            };
            let rect = CardRect::from(&card.get_bounding_client_rect());

            if let Err(err) = overlay::show() {
                warn!("could not show blur overlay: {}", err);
            }
            zoom.dispatch(ZoomAction::Start(ZoomTransform::centering(rect, width, height)));

            {
                let zoom = zoom.clone();
                Timeout::new(CARD_DURATION_MS, move || zoom.dispatch(ZoomAction::Settle)).forget();
            }

            // Wait a tick so the click that opened the card can't close it.
            let zoom = zoom.clone();
            Timeout::new(0, move || {
                let release = move || {
                    match overlay::hide() {
                        Ok(true) => {}
                        Ok(false) => log::debug!("no blur overlay to hide"),
                        Err(err) => warn!("could not hide blur overlay: {}", err),
                    }
                    zoom.dispatch(ZoomAction::Release);
                    Timeout::new(CARD_DURATION_MS, move || zoom.dispatch(ZoomAction::Restore)).forget();
                };
                if let Err(err) = on_next_pointer_down(release) {
                    warn!("could not listen for pointerdown: {}", err);
                }
            })
            .forget();
        })
    };

    let ExampleItem { title, img, explanation } = props.item;
    let zooming_in = matches!(zoom.phase, ZoomPhase::ZoomingIn(_));

    html! {
        <div class="reveal" style={reveal_style(props.reveal_order)}>
            <div
                ref={card_ref}
                class={classes!("example-card", zooming_in.then(|| "zooming-in"))}
                style={zoom.card_style()}
                {onclick}
            >
                <img src={img} class={classes!((!zoom.is_modified()).then(|| "clickable"))} alt={title} />
                <p class="example-title">{title}</p>
                <p class="example-explanation">{explanation}</p>
            </div>
        </div>
    }
}
