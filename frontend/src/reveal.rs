/// Entrance animation shared by the header and the example cards.
///
/// Elements drop in from above and fade in one after another, each
/// `STAGGER_SECS` after the previous one. The keyframes only fill backwards
/// so a finished reveal leaves no transform behind, a zoomed card inside
/// must not be trapped in its stacking context.
pub const START_DELAY_SECS: f64 = 0.1;
pub const STAGGER_SECS: f64 = 0.3;
pub const DROP_PX: i32 = 50;

pub fn delay_secs(order: usize) -> f64 {
    START_DELAY_SECS + STAGGER_SECS * order as f64
}

pub fn reveal_style(order: usize) -> String {
    format!("animation-delay: {:.2}s;", delay_secs(order))
}

pub fn reveal_css() -> String {
    format!(
        r#"
        @keyframes reveal-drop {{
            from {{ transform: translateY(-{drop}px); opacity: 0; }}
            to {{ transform: translateY(0); opacity: 1; }}
        }}
        .reveal {{
            animation: reveal-drop 0.5s cubic-bezier(0.2, 0.9, 0.3, 1.2) backwards;
        }}
        "#,
        drop = DROP_PX
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_waits_for_start_delay() {
        assert_eq!(reveal_style(0), "animation-delay: 0.10s;");
    }

    #[test]
    fn items_are_staggered() {
        assert_eq!(reveal_style(1), "animation-delay: 0.40s;");
        assert_eq!(reveal_style(3), "animation-delay: 1.00s;");
    }
}
