use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::reveal::reveal_style;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_quote: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let onclick = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };

    html! {
        <header class="page-header">
            <img src={config::HEADER_IMAGE} class="header-background img-blur" alt="" />
            <div class="header-content">
                <h1 class="reveal header-title" style={reveal_style(0)}>{"Jace Genereux"}</h1>
                <span class="reveal header-tagline" style={reveal_style(1)}>
                    {"Bring your website idea to life"}
                </span>
                <button class="reveal quote-button" style={reveal_style(2)} {onclick}>
                    {"Get Quote"}
                </button>
            </div>
            <style>
                {r#"
                .page-header {
                    position: relative;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 0 1.5rem;
                    height: 250px;
                    align-items: center;
                    justify-content: center;
                    box-sizing: border-box;
                }
                .header-background {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .header-content {
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    color: #22c55e;
                }
                .header-title {
                    margin: 0;
                    font-family: var(--font-header);
                    font-size: 2.25rem;
                }
                .header-tagline {
                    font-family: var(--font-body);
                    font-size: 1.5rem;
                    text-align: center;
                }
                .quote-button {
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                    font-family: var(--font-nav);
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
                    transition: scale 0.2s ease, background 0.2s ease, border-color 0.2s ease;
                }
                .quote-button:hover {
                    scale: 1.04;
                    background: rgba(255, 255, 255, 0.2);
                    border-color: rgba(255, 255, 255, 0.5);
                }
                @media (min-width: 640px) {
                    .page-header { height: 300px; }
                    .header-title { font-size: 3.75rem; }
                    .header-tagline { font-size: 1.875rem; }
                }
                @media (min-width: 768px) {
                    .header-tagline { font-size: 2.25rem; }
                    .quote-button {
                        padding: 0.5rem 1rem;
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
