use api::{GestureLabel, ModeToken};

/// What a confirmed gesture asks the system to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    TogglePalette,
    SetToken(ModeToken),
}

/// Map a confirmed label onto an effect.
///
/// `Palette` always toggles palette mode, even while it is already active,
/// and never produces a token. Every other label is ignored entirely while
/// palette mode is on.
pub fn dispatch(confirmed: GestureLabel, palette_active: bool) -> Option<Effect> {
    if confirmed == GestureLabel::Palette {
        return Some(Effect::TogglePalette);
    }
    if palette_active {
        return None;
    }

    let token = match confirmed {
        GestureLabel::Emergency => ModeToken::Pcint1,
        GestureLabel::ThumbsUp => ModeToken::Pcint2,
        GestureLabel::ThumbsDown => ModeToken::Pcint3,
        GestureLabel::Default => ModeToken::Default,
        GestureLabel::Unknown | GestureLabel::Palette => return None,
    };
    Some(Effect::SetToken(token))
}
