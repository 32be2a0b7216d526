use foundation::math::Vec2;
use scene::interaction::HoverState;

/// Tooltip styling; the offset keeps the label clear of the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    pub offset_px: Vec2,
    pub font_size_px: f32,
    pub padding_px: f32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset_px: Vec2::new(10.0, 10.0),
            font_size_px: 14.0,
            padding_px: 5.0,
        }
    }
}

/// A placed hover label.
///
/// The label is presentation-only: renderers must make it transparent to
/// pointer events, otherwise hovering the label itself would fire a leave on
/// the marker underneath and the tooltip would flicker.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position_px: Vec2,
    pub style: TooltipStyle,
}

/// Places the tooltip for the current hover state; `Idle` has no tooltip.
pub fn tooltip_for(state: &HoverState, style: &TooltipStyle) -> Option<Tooltip> {
    match state {
        HoverState::Idle => None,
        HoverState::Showing { name, x, y } => Some(Tooltip {
            text: name.clone(),
            position_px: Vec2::new(x + style.offset_px.x, y + style.offset_px.y),
            style: style.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{TooltipStyle, tooltip_for};
    use foundation::math::Vec2;
    use scene::interaction::HoverState;

    #[test]
    fn showing_places_the_label_at_the_pointer_offset() {
        let state = HoverState::Showing {
            name: "서울대".to_string(),
            x: 100.0,
            y: 200.0,
        };
        let tooltip = tooltip_for(&state, &TooltipStyle::default()).expect("tooltip");
        assert_eq!(tooltip.text, "서울대");
        assert_eq!(tooltip.position_px, Vec2::new(110.0, 210.0));
    }

    #[test]
    fn idle_has_no_tooltip() {
        assert!(tooltip_for(&HoverState::Idle, &TooltipStyle::default()).is_none());
    }
}
