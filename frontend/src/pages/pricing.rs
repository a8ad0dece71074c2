use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{QuoteRequest, QuoteSubmitter, UnwiredSubmitter};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub section_ref: NodeRef,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let request = use_state(QuoteRequest::default);

    let on_email = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.email = input.value();
            request.set(next);
        })
    };

    let on_subject = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.set_subject(&input.value());
            request.set(next);
        })
    };

    let on_inquiry = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.inquiry = input.value();
            request.set(next);
        })
    };

    // No service behind the form yet, the button leaves the page as it is.
    let on_send = {
        let request = request.clone();
        Callback::from(move |_: MouseEvent| {
            UnwiredSubmitter.submit(&request);
        })
    };

    html! {
        <section ref={props.section_ref.clone()} class="pricing-section">
            <div class="pricing-container">
                <h1 class="pricing-title">{"Pricing"}</h1>
                <div class="pricing-panel">
                    <div class="pricing-grid">
                        <div class="pricing-text">
                            <p>
                                {"Prices are based on estimated development time. After launch, you only pay for hosting. Share your idea below to get a tailored quote."}
                            </p>
                        </div>
                        <div>
                            <form class="quote-form">
                                <label class="quote-label">
                                    {"Email"}
                                    <input type="email" class="quote-input" oninput={on_email} />
                                </label>
                                <label class="quote-label">
                                    {"Subject (Optional)"}
                                    <input type="text" class="quote-input" oninput={on_subject} />
                                </label>
                                <label class="quote-label">
                                    {"Inquiry"}
                                    <textarea class="quote-input quote-textarea" oninput={on_inquiry} />
                                </label>
                                <button type="button" class="send-button" onclick={on_send}>
                                    {"Send Message"}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .pricing-section {
                    width: 100%;
                    padding: 3rem 1.5rem;
                    box-sizing: border-box;
                    background: linear-gradient(to bottom, #f8fafc, #f1f5f9);
                }
                .pricing-container {
                    margin: 0 auto;
                    width: 100%;
                    max-width: 64rem;
                }
                .pricing-title {
                    font-size: 3rem;
                    font-family: var(--font-header-light);
                    font-weight: normal;
                    text-align: center;
                    margin: 0 0 2rem;
                }
                .pricing-panel {
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.18), 0 0 0 1px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    align-items: start;
                }
                .pricing-text {
                    font-size: 1.125rem;
                    font-family: var(--font-body);
                }
                .pricing-text p {
                    margin: 0;
                }
                .quote-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .quote-label {
                    display: flex;
                    flex-direction: column;
                    font-size: 1.125rem;
                    font-family: var(--font-nav);
                }
                .quote-input {
                    margin-top: 0.25rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.8);
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    padding: 0.5rem 1rem;
                    font: inherit;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05), 0 0 0 1px rgba(0, 0, 0, 0.05);
                    transition: all 0.2s ease;
                }
                .quote-input:hover {
                    border-color: rgba(0, 0, 0, 0.2);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .quote-input:focus {
                    outline: none;
                    border-color: rgba(0, 0, 0, 0.2);
                    box-shadow: 0 0 0 2px rgba(0, 0, 0, 0.2);
                }
                .quote-textarea {
                    resize: none;
                    height: 11rem;
                }
                .send-button {
                    align-self: center;
                    cursor: pointer;
                    margin-top: 0.5rem;
                    width: fit-content;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    font-family: var(--font-nav);
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: rgba(0, 0, 0, 0.8);
                    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.2);
                }
                @media (min-width: 768px) {
                    .pricing-panel { padding: 2rem; }
                    .pricing-grid {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2.5rem;
                    }
                    .send-button { align-self: flex-start; }
                }
                "#}
            </style>
        </section>
    }
}
