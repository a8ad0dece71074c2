use yew::prelude::*;

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 7] = [
    Step {
        title: "Get A Quote",
        description: "Fill out the form at the bottom of the page to get a quote for your website",
    },
    Step {
        title: "Quick Call",
        description: "Quick 15 minute call to discuss the quote, general idea for the website, and other topics like design",
    },
    Step {
        title: "Send Design Ideas",
        description: "If you have ideas for the design they can be sent throughout the entire development process",
    },
    Step {
        title: "Get Started",
        description: "I will get started with building the website, I will provide a timeline which will let you know what will be completed and by when it will be completed.",
    },
    Step {
        title: "Notifications for objectives",
        description: "As objectives on the timeline are reached, I will update you with screenshots and messages for feedback.",
    },
    Step {
        title: "Launch your website",
        description: "Once development is complete it will be hosted through AWS, where we can make final changes if needed.",
    },
    Step {
        title: "Add features and maintain",
        description: "Once deployed all that will be left is to add features and maintain it.",
    },
];

/// Side of the spine a timeline card sits on once the spine is centred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Right
        } else {
            TimelineSide::Left
        }
    }

    fn class(self) -> &'static str {
        match self {
            TimelineSide::Left => "timeline-left",
            TimelineSide::Right => "timeline-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkflowProps {
    pub section_ref: NodeRef,
}

#[function_component(DevelopmentWorkflow)]
pub fn development_workflow(props: &WorkflowProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="workflow-section">
            <span class="section-title workflow-title">{"Timeline Idea To Development"}</span>
            <div class="timeline">
                <div class="timeline-spine"></div>
                <div class="timeline-steps">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div key={i} class="timeline-entry">
                            <span class="timeline-dot"></span>
                            <div class={classes!("timeline-card", TimelineSide::for_index(i).class())}>
                                <div class="timeline-card-header">
                                    <span class="timeline-number">{(i + 1).to_string()}</span>
                                    <p class="timeline-card-title">{step.title}</p>
                                </div>
                                <p class="timeline-card-description">{step.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .workflow-section {
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 0 2rem;
                    box-sizing: border-box;
                }
                .workflow-title {
                    align-self: center;
                    text-align: center;
                }
                .timeline {
                    position: relative;
                    margin: 0 auto;
                    width: 100%;
                    max-width: 56rem;
                }
                .timeline-spine {
                    position: absolute;
                    left: 1rem;
                    top: 0;
                    bottom: 0;
                    width: 1px;
                    background: rgba(0, 0, 0, 0.1);
                }
                .timeline-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 1rem 0;
                }
                .timeline-entry {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding-left: 3rem;
                }
                .timeline-dot {
                    position: absolute;
                    left: 10px;
                    top: 1.5rem;
                    z-index: 10;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: #3b82f6;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    box-shadow: 0 0 0 1px rgba(0, 0, 0, 0.1);
                }
                .timeline-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin: 0.5rem 0;
                    min-height: 140px;
                    border-radius: 0.75rem;
                    padding: 1rem;
                    box-sizing: border-box;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.18), 0 0 0 1px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .timeline-card:hover {
                    transform: scale(1.03);
                    box-shadow: 0 16px 50px rgba(0, 0, 0, 0.2), 0 0 0 2px rgba(0, 0, 0, 0.18);
                }
                .timeline-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .timeline-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.4), rgba(255, 255, 255, 0.1));
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    font-family: var(--font-nav);
                    font-weight: 700;
                    color: #111827;
                }
                .timeline-card-title {
                    margin: 0;
                    font-size: 1.125rem;
                    font-family: var(--font-nav);
                    font-weight: 600;
                    color: #111827;
                }
                .timeline-card-description {
                    margin: 0;
                    font-family: var(--font-body);
                    font-size: 0.875rem;
                    color: rgba(55, 65, 81, 0.9);
                }
                @media (min-width: 768px) {
                    .timeline-spine { left: 50%; }
                    .timeline-entry { padding-left: 0; }
                    .timeline-dot {
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .timeline-card { width: calc(50% - 32px); }
                    .timeline-right { margin-left: calc(50% + 16px); }
                    .timeline-left {
                        margin-right: calc(50% + 16px);
                        align-self: flex-end;
                    }
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
    fn cards_alternate_sides() {
        let sides: Vec<_> = (0..STEPS.len()).map(TimelineSide::for_index).collect();
        assert_eq!(sides[0], TimelineSide::Right);
        assert_eq!(sides[1], TimelineSide::Left);
        assert!(sides.windows(2).all(|pair| pair[0] != pair[1]));
    }
}
