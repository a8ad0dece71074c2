use log::debug;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::hooks::{scroll_into_view, use_in_view};
use crate::pages::examples::Examples;
use crate::pages::header::Header;
use crate::pages::pricing::Pricing;
use crate::pages::why::Why;
use crate::pages::workflow::DevelopmentWorkflow;
use crate::reveal::reveal_css;
use crate::sections::{next_selected, Section, SectionVisibility};

/// Node references of the sections the navigation can jump to.
#[derive(Clone, PartialEq)]
struct SectionRefs {
    examples: NodeRef,
    why: NodeRef,
    workflow: NodeRef,
    pricing: NodeRef,
}

impl SectionRefs {
    fn get(&self, section: Section) -> &NodeRef {
        match section {
            Section::Examples => &self.examples,
            Section::Why => &self.why,
            Section::Workflow => &self.workflow,
            Section::Pricing => &self.pricing,
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let selected = use_state_eq(|| None::<Section>);
    let refs = SectionRefs {
        examples: use_node_ref(),
        why: use_node_ref(),
        workflow: use_node_ref(),
        pricing: use_node_ref(),
    };

    let mut visibility = SectionVisibility::default();
    visibility.set(Section::Examples, use_in_view(refs.examples.clone()));
    visibility.set(Section::Why, use_in_view(refs.why.clone()));
    visibility.set(Section::Workflow, use_in_view(refs.workflow.clone()));
    visibility.set(Section::Pricing, use_in_view(refs.pricing.clone()));

    // Follow the viewport. This can undo a click selection once the smooth
    // scroll it started brings other sections into view.
    {
        let selected = selected.clone();
        use_effect_with_deps(move |visibility: &SectionVisibility| {
            let next = next_selected(*selected, visibility);
            if next != *selected {
                debug!("tab {:?} selected by scroll position", next);
                selected.set(next);
            }
            || ()
        }, visibility);
    }

    let handle_click = {
        let selected = selected.clone();
        let refs = refs.clone();
        Callback::from(move |section: Section| {
            debug!("tab {:?} selected by click", section);
            selected.set(Some(section));
            scroll_into_view(refs.get(section));
        })
    };

    let scroll_to_quote = {
        let pricing = refs.pricing.clone();
        Callback::from(move |_: ()| scroll_into_view(&pricing))
    };

    html! {
        <div class="home">
            <Nav links={Section::ALL.to_vec()} selected={*selected} on_select={handle_click} />
            <div class="home-sections">
                <Header on_quote={scroll_to_quote} />
                <Examples section_ref={refs.examples.clone()} />
                <Why section_ref={refs.why.clone()} />
                <DevelopmentWorkflow section_ref={refs.workflow.clone()} />
                <Pricing section_ref={refs.pricing.clone()} />
            </div>
            <style>
                { reveal_css() }
                {r#"
                .home {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .home-sections {
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-family: var(--font-header-light);
                    letter-spacing: -0.025em;
                    line-height: 1.25;
                }
                @media (min-width: 640px) {
                    .section-title { font-size: 3rem; }
                }
                "#}
            </style>
        </div>
    }
}
