//! Disabled-state policy
//!
//! A leaf is disabled when it carries its own `disabled` flag or when any
//! group on the way down to it is disabled. A child can never re-enable
//! itself under a disabled ancestor.

use serde_json::Value;

use crate::domain::entities::OptionGroup;

/// Leaf values that may mark themselves disabled.
///
/// Plain scalars are never disabled. JSON objects are disabled when they hold
/// `"disabled": true`.
pub trait Disableable {
    fn is_disabled(&self) -> bool {
        false
    }
}

impl<T: Disableable + ?Sized> Disableable for &T {
    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

impl<T: Disableable + ?Sized> Disableable for Box<T> {
    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

impl Disableable for Value {
    fn is_disabled(&self) -> bool {
        self.get("disabled").and_then(Value::as_bool).unwrap_or(false)
    }
}

macro_rules! never_disabled {
    ($($ty:ty),* $(,)?) => {
        $(impl Disableable for $ty {})*
    };
}

never_disabled!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

/// Disabled state inherited from the groups above the current walk position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisabledState {
    ancestor_disabled: bool,
}

impl DisabledState {
    /// State at the top level of a tree
    pub fn root() -> Self {
        Self::default()
    }

    /// State for the children of `group`
    pub fn enter<T>(self, group: &OptionGroup<T>) -> Self {
        Self {
            ancestor_disabled: self.ancestor_disabled || group.is_disabled(),
        }
    }

    /// Whether some enclosing group is disabled
    pub fn ancestor_disabled(&self) -> bool {
        self.ancestor_disabled
    }

    /// Effective disabled state of a leaf at this position
    pub fn resolve<T: Disableable + ?Sized>(self, leaf: &T) -> bool {
        self.ancestor_disabled || leaf.is_disabled()
    }
}

/// Resolve a leaf's disabled state from its chain of ancestor groups.
pub fn resolve_disabled<T: Disableable>(leaf: &T, ancestors: &[&OptionGroup<T>]) -> bool {
    ancestors
        .iter()
        .fold(DisabledState::root(), |state, group| state.enter(group))
        .resolve(leaf)
}
