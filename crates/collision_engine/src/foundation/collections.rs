//! Specialized collection types

pub use slotmap::{new_key_type, SlotMap};

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

new_key_type! {
    /// Stable handle to a planet owned by a sandbox
    pub struct PlanetHandle;

    /// Stable handle to a bullet owned by a sandbox
    pub struct BulletHandle;
}
