use yew::prelude::*;
use web_sys::MouseEvent;

use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<Section>,
    pub selected: Option<Section>,
    pub on_select: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { links, selected, on_select } = props;

    html! {
        <nav class="top-nav">
            <ul class="nav-links">
                {
                    for links.iter().map(|section| {
                        let section = *section;
                        let onclick = {
                            let on_select = on_select.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(section);
                            })
                        };
                        let is_selected = *selected == Some(section);

                        html! {
                            <li key={section.label()} class="nav-item" {onclick}>
                                <div class="nav-label">{section.label()}</div>
                                if is_selected {
                                    <div class="nav-underline"></div>
                                }
                            </li>
                        }
                    })
                }
            </ul>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    background: #ffffff;
                    z-index: 50;
                }
                .nav-links {
                    display: flex;
                    flex-direction: row;
                    gap: 0.25rem;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    margin: 0;
                    padding: 0.5rem 0;
                    list-style: none;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-item {
                    position: relative;
                    cursor: pointer;
                    padding: 0 0.5rem;
                }
                .nav-label {
                    position: relative;
                    z-index: 10;
                    font-family: var(--font-nav);
                    font-weight: 600;
                    font-size: 1.125rem;
                }
                .nav-underline {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    background: rgb(211, 211, 211);
                    z-index: 0;
                    animation: nav-highlight 0.25s ease-out;
                }
                @keyframes nav-highlight {
                    from { opacity: 0; transform: scaleX(0.6); }
                    to { opacity: 1; transform: scaleX(1); }
                }
                @media (min-width: 640px) {
                    .nav-links {
                        gap: 0.5rem;
                    }
                }
                @media (min-width: 768px) {
                    .nav-label {
                        font-size: 1.25rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
