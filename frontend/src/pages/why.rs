use yew::prelude::*;

const SKILLS: [(&str, &str); 4] = [
    ("Beat Any Quote", "Send your best quote; I’ll beat it if reasonable."),
    ("Any Idea, Any Size", "From landing pages to complex apps."),
    ("AI‑Ready", "Chatbots, agents, and custom AI features."),
    ("Fast Delivery", "Optimized for snappy performance."),
];

/// Heading of a skill bubble, numbered from one.
pub fn skill_heading(index: usize, skill: &str) -> String {
    format!("{}) {}", index + 1, skill)
}

#[derive(Properties, PartialEq)]
pub struct WhyProps {
    pub section_ref: NodeRef,
}

#[function_component(Why)]
pub fn why(props: &WhyProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="why-section">
            <div class="why-heading">
                <span class="section-title">{"Why Choose Me To Build It"}</span>
                <div class="why-divider"></div>
            </div>
            <div class="skills-grid">
                { for SKILLS.iter().enumerate().map(|(i, (skill, description))| html! {
                    <div key={i} class="skill-bubble">
                        <p class="skill-name">{skill_heading(i, skill)}</p>
                        <p class="skill-description">{*description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .why-section {
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    margin: 2rem 0;
                }
                .why-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: #111827;
                }
                .why-divider {
                    height: 1px;
                    width: 4rem;
                    background: linear-gradient(to right, transparent, rgba(0, 0, 0, 0.2), transparent);
                }
                .skills-grid {
                    padding: 0 2rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                .skill-bubble {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 0.25rem;
                    margin: 0.5rem 0;
                    width: 14rem;
                    height: 14rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.1));
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.2), 0 0 0 1px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .skill-bubble:hover {
                    transform: scale(1.05);
                    box-shadow: 0 16px 50px rgba(0, 0, 0, 0.25), 0 0 0 2px rgba(0, 0, 0, 0.2);
                }
                .skill-name {
                    margin: 0;
                    font-family: var(--font-nav);
                    font-weight: 700;
                    color: #111827;
                }
                .skill-description {
                    margin: 0;
                    padding: 0 1rem;
                    font-family: var(--font-body);
                    font-size: 0.875rem;
                    color: #374151;
                    opacity: 0.9;
                }
                @media (min-width: 640px) {
                    .skills-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_numbered_from_one() {
        let headings: Vec<_> = SKILLS
            .iter()
            .enumerate()
            .map(|(i, (skill, _))| skill_heading(i, skill))
            .collect();
        assert_eq!(headings[0], "1) Beat Any Quote");
        assert_eq!(headings[3], "4) Fast Delivery");
    }
}
