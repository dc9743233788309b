//! The flight controller never touches widgets directly. Everything it wants
//! the outside world to do goes through [`FlightEffects`].

use macroquad::math::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectId {
    Projectile,
    Marker(usize),
}

pub trait FlightEffects {
    fn set_position(&mut self, object: ObjectId, top_left: Vec2);
    fn set_visibility(&mut self, marker: usize, visible: bool);
    fn show_message(&mut self, text: &str);
    fn start_timer(&mut self);
    fn stop_timer(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetPosition(ObjectId, Vec2),
    SetVisibility(usize, bool),
    ShowMessage(String),
    StartTimer,
    StopTimer,
}

/// Records effects in emission order. Used by the headless simulator and tests.
#[derive(Clone, Debug, Default)]
pub struct EffectLog {
    pub effects: Vec<Effect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Drop everything except shown messages.
    pub fn retain_messages(&mut self) {
        self.effects.retain(|effect| matches!(effect, Effect::ShowMessage(_)));
    }

    pub fn messages(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::ShowMessage(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_position(&self, object: ObjectId) -> Option<Vec2> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::SetPosition(id, pos) if *id == object => Some(*pos),
            _ => None,
        })
    }

    pub fn count(&self, wanted: &Effect) -> usize {
        self.effects.iter().filter(|effect| *effect == wanted).count()
    }
}

impl FlightEffects for EffectLog {
    fn set_position(&mut self, object: ObjectId, top_left: Vec2) {
        self.effects.push(Effect::SetPosition(object, top_left));
    }

    fn set_visibility(&mut self, marker: usize, visible: bool) {
        self.effects.push(Effect::SetVisibility(marker, visible));
    }

    fn show_message(&mut self, text: &str) {
        self.effects.push(Effect::ShowMessage(text.to_string()));
    }

    fn start_timer(&mut self) {
        self.effects.push(Effect::StartTimer);
    }

    fn stop_timer(&mut self) {
        self.effects.push(Effect::StopTimer);
    }
}
