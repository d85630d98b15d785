//! Variable groups keyed by a closed enumeration.

use vargrid_expr::VariableId;

use crate::error::IndexError;
use crate::group::VariableGroup;

/// A closed set of table keys numbered `0..COUNT`.
///
/// Implement it with [`table_key!`](crate::table_key) rather than by hand.
pub trait TableKey: Copy + 'static {
    const COUNT: usize;
    const ALL: &'static [Self];

    /// Slot position, always below `COUNT`.
    fn index(self) -> usize;

    fn name(self) -> &'static str;
}

/// Declare an enum usable as a [`TableKey`].
///
/// ```
/// vargrid_core::table_key! {
///     pub enum Var { Open, Assign, Flow }
/// }
/// use vargrid_core::TableKey;
/// assert_eq!(Var::COUNT, 3);
/// assert_eq!(Var::Flow.name(), "Flow");
/// ```
#[macro_export]
macro_rules! table_key {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::TableKey for $name {
            const COUNT: usize = Self::ALL.len();
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

/// One [`VariableGroup`] slot per key of `K`.
///
/// Slots start unset. Reading an unset slot fails with `UnsetSlot`.
/// Replacing a populated slot with [`set`](Self::set) drops the table's
/// reference to the old group but does not deregister its variables: they
/// stay in the solver and are no longer reachable from the table.
#[derive(Debug, Clone)]
pub struct VariableTable<K: TableKey> {
    slots: Box<[Option<VariableGroup>]>,
    _key: std::marker::PhantomData<K>,
}

impl<K: TableKey> VariableTable<K> {
    pub fn new() -> Self {
        Self {
            slots: (0..K::COUNT).map(|_| None).collect(),
            _key: std::marker::PhantomData,
        }
    }

    /// Store `group` under `key`, returning whatever the slot held before.
    pub fn set(&mut self, key: K, group: VariableGroup) -> Option<VariableGroup> {
        let previous = self.slots[key.index()].replace(group);
        if let Some(old) = &previous {
            tracing::warn!(
                component = "table",
                operation = "set",
                status = "overwrite",
                key = key.name(),
                orphaned = old.len(),
                "Replaced populated slot; previous variables stay registered"
            );
        }
        previous
    }

    /// Store a single handle as a scalar group.
    pub fn set_scalar(&mut self, key: K, id: VariableId) -> Option<VariableGroup> {
        self.set(key, VariableGroup::scalar_of(id))
    }

    pub fn is_set(&self, key: K) -> bool {
        self.slots[key.index()].is_some()
    }

    pub fn get(&self, key: K) -> Result<&VariableGroup, IndexError> {
        self.slots[key.index()]
            .as_ref()
            .ok_or(IndexError::UnsetSlot { key: key.name() })
    }

    pub fn get_mut(&mut self, key: K) -> Result<&mut VariableGroup, IndexError> {
        self.slots[key.index()]
            .as_mut()
            .ok_or(IndexError::UnsetSlot { key: key.name() })
    }

    /// Handle under `key` at `index`; an empty `index` reads a scalar slot.
    pub fn var(&self, key: K, index: &[usize]) -> Result<VariableId, IndexError> {
        let group = self.get(key)?;
        if index.is_empty() {
            group.scalar()
        } else {
            group.at(index)
        }
    }

    /// Keys whose slots are populated, in key order.
    pub fn populated(&self) -> impl Iterator<Item = K> + '_ {
        K::ALL.iter().copied().filter(|key| self.is_set(*key))
    }
}

impl<K: TableKey> Default for VariableTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
