use crate::display::Key;
use crate::engine::{Action, BoldPolicy};
use crate::renderer::MatrixColor;

/// What a key asks the frame driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Quit,
    Apply(Action),
}

const BINDINGS: &[(char, Binding)] = &[
    ('q', Binding::Quit),
    ('Q', Binding::Quit),
    ('a', Binding::Apply(Action::ToggleAsync)),
    ('A', Binding::Apply(Action::ToggleAsync)),
    ('b', Binding::Apply(Action::SetBold(BoldPolicy::Some))),
    ('B', Binding::Apply(Action::SetBold(BoldPolicy::All))),
    ('n', Binding::Apply(Action::SetBold(BoldPolicy::None))),
    ('N', Binding::Apply(Action::SetBold(BoldPolicy::None))),
    ('o', Binding::Apply(Action::ToggleScroll)),
    ('O', Binding::Apply(Action::ToggleScroll)),
    ('0', Binding::Apply(Action::SetPacing(0))),
    ('1', Binding::Apply(Action::SetPacing(1))),
    ('2', Binding::Apply(Action::SetPacing(2))),
    ('3', Binding::Apply(Action::SetPacing(3))),
    ('4', Binding::Apply(Action::SetPacing(4))),
    ('5', Binding::Apply(Action::SetPacing(5))),
    ('6', Binding::Apply(Action::SetPacing(6))),
    ('7', Binding::Apply(Action::SetPacing(7))),
    ('8', Binding::Apply(Action::SetPacing(8))),
    ('9', Binding::Apply(Action::SetPacing(9))),
    ('!', Binding::Apply(Action::SetColor(MatrixColor::Red))),
    ('@', Binding::Apply(Action::SetColor(MatrixColor::Green))),
    ('#', Binding::Apply(Action::SetColor(MatrixColor::Yellow))),
    ('$', Binding::Apply(Action::SetColor(MatrixColor::Blue))),
    ('%', Binding::Apply(Action::SetColor(MatrixColor::Magenta))),
    ('^', Binding::Apply(Action::SetColor(MatrixColor::Cyan))),
    ('&', Binding::Apply(Action::SetColor(MatrixColor::White))),
    ('r', Binding::Apply(Action::ToggleRainbow)),
    ('R', Binding::Apply(Action::ToggleRainbow)),
    ('m', Binding::Apply(Action::ToggleLambda)),
    ('M', Binding::Apply(Action::ToggleLambda)),
    ('p', Binding::Apply(Action::TogglePause)),
    ('P', Binding::Apply(Action::TogglePause)),
    ('k', Binding::Apply(Action::ToggleChanges)),
    ('K', Binding::Apply(Action::ToggleChanges)),
];

pub fn binding_for(key: Key) -> Option<Binding> {
    match key {
        Key::Interrupt => Some(Binding::Quit),
        Key::Char(c) => BINDINGS
            .iter()
            .find(|(bound, _)| *bound == c)
            .map(|(_, binding)| *binding),
        Key::Other => None,
    }
}
