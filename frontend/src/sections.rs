/// The page sections the navigation bar can point at.
///
/// Declaration order is both the order of the nav labels and the priority
/// used when several sections are on screen at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Examples,
    Why,
    Workflow,
    Pricing,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Examples,
        Section::Why,
        Section::Workflow,
        Section::Pricing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Examples => "Examples",
            Section::Why => "Why",
            Section::Workflow => "Workflow",
            Section::Pricing => "Pricing",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Which of the tracked sections currently intersect the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    flags: [bool; 4],
}

impl SectionVisibility {
    pub fn new(examples: bool, why: bool, workflow: bool, pricing: bool) -> Self {
        Self {
            flags: [examples, why, workflow, pricing],
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        self.flags[section.slot()] = visible;
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.flags[section.slot()]
    }
}

/// First visible section in priority order, if any.
pub fn resolve_active(visibility: &SectionVisibility) -> Option<Section> {
    Section::ALL
        .iter()
        .copied()
        .find(|section| visibility.is_visible(*section))
}

/// Tab to highlight after a visibility change.
///
/// When nothing is on screen the current selection is kept, there is no
/// automatic way back to "nothing selected".
pub fn next_selected(current: Option<Section>, visibility: &SectionVisibility) -> Option<Section> {
    resolve_active(visibility).or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nothing_selected_before_any_signal() {
        let visibility = SectionVisibility::default();
        assert_eq!(next_selected(None, &visibility), None);
    }

    #[test]
    fn why_beats_workflow_when_both_visible() {
        let visibility = SectionVisibility::new(false, true, true, false);
        assert_eq!(next_selected(None, &visibility), Some(Section::Why));
        assert_eq!(
            next_selected(Some(Section::Pricing), &visibility),
            Some(Section::Why)
        );
    }

    #[test]
    fn empty_viewport_keeps_previous_tab() {
        let visibility = SectionVisibility::default();
        assert_eq!(
            next_selected(Some(Section::Workflow), &visibility),
            Some(Section::Workflow)
        );
    }

    #[test]
    fn clicked_tab_is_overridden_once_scrolling_settles() {
        // Clicking Pricing while Why is still on screen: the click selects
        // Pricing, then the next intersection update moves it back.
        let clicked = Some(Section::Pricing);
        let mut visibility = SectionVisibility::new(false, true, false, false);
        assert_eq!(next_selected(clicked, &visibility), Some(Section::Why));

        visibility.set(Section::Why, false);
        visibility.set(Section::Pricing, true);
        assert_eq!(next_selected(clicked, &visibility), Some(Section::Pricing));
    }

    #[test]
    fn labels_follow_nav_order() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Examples", "Why", "Workflow", "Pricing"]);
    }

    fn any_section() -> impl Strategy<Value = Option<Section>> {
        prop_oneof![
            Just(None),
            Just(Some(Section::Examples)),
            Just(Some(Section::Why)),
            Just(Some(Section::Workflow)),
            Just(Some(Section::Pricing)),
        ]
    }

    proptest! {
        #[test]
        fn highest_priority_visible_section_wins(
            flags in prop::array::uniform4(any::<bool>()),
            previous in any_section(),
        ) {
            let visibility = SectionVisibility::new(flags[0], flags[1], flags[2], flags[3]);
            let selected = next_selected(previous, &visibility);

            match flags.iter().position(|visible| *visible) {
                Some(first) => prop_assert_eq!(selected, Some(Section::ALL[first])),
                None => prop_assert_eq!(selected, previous),
            }
        }

        #[test]
        fn signal_order_does_not_matter(
            flags in prop::array::uniform4(any::<bool>()),
            order in Just(Section::ALL.to_vec()).prop_shuffle(),
        ) {
            let mut visibility = SectionVisibility::default();
            for section in order {
                visibility.set(section, flags[section as usize]);
            }
            let direct = SectionVisibility::new(flags[0], flags[1], flags[2], flags[3]);
            prop_assert_eq!(resolve_active(&visibility), resolve_active(&direct));
        }
    }
}
