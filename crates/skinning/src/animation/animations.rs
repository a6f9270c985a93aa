use indexmap::IndexMap;
use slotmap::{new_key_type, DenseSlotMap};

use super::{
    error::{AwsmAnimationError, Result},
    mixer::PoseMixer,
    player::AnimationPlayer,
};

new_key_type! {
    pub struct AnimationKey;
}

/// Active players of one mesh, addressable by key or by clip name.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    players: DenseSlotMap<AnimationKey, AnimationPlayer>,
    names: IndexMap<String, AnimationKey>,
}

impl Animations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a player under its clip name, replacing any player already
    /// registered with that name.
    pub fn insert(&mut self, player: AnimationPlayer) -> AnimationKey {
        let name = player.name().to_string();
        if let Some(existing) = self.names.shift_remove(&name) {
            self.players.remove(existing);
        }

        let key = self.players.insert(player);
        self.names.insert(name, key);
        key
    }

    /// No-op if nothing is registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<AnimationPlayer> {
        let key = self.names.shift_remove(name)?;
        self.players.remove(key)
    }

    pub fn clear(&mut self) {
        self.players.clear();
        self.names.clear();
    }

    pub fn key(&self, name: &str) -> Option<AnimationKey> {
        self.names.get(name).copied()
    }

    pub fn get(&self, key: AnimationKey) -> Result<&AnimationPlayer> {
        self.players
            .get(key)
            .ok_or(AwsmAnimationError::MissingKey(key))
    }

    pub fn get_mut(&mut self, key: AnimationKey) -> Result<&mut AnimationPlayer> {
        self.players
            .get_mut(key)
            .ok_or(AwsmAnimationError::MissingKey(key))
    }

    pub fn by_name(&self, name: &str) -> Option<&AnimationPlayer> {
        self.key(name).and_then(|key| self.players.get(key))
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut AnimationPlayer> {
        let key = self.key(name)?;
        self.players.get_mut(key)
    }

    /// Clip names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Advances every player, then samples each into `mixer`.
    pub fn update(&mut self, global_time_delta: f64, mixer: &mut PoseMixer) {
        for player in self.players.values_mut() {
            player.update(global_time_delta);
        }

        for player in self.players.values_mut() {
            player.sample_into(mixer);
        }
    }
}
