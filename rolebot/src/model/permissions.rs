use serde::{Deserialize, Serialize};

use std::ops::{BitOr, BitOrAssign};

/// A set of guild permissions, bit-compatible with the platform's permission integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    pub bits: u64,
}

impl Permissions {
    pub const ADMINISTRATOR: Self = Self::from_bits(1 << 3);
    pub const MANAGE_ROLES: Self = Self::from_bits(1 << 28);

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Returns `true` if all bits of `other` are set.
    pub const fn contains(&self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    pub const fn administrator(&self) -> bool {
        self.contains(Self::ADMINISTRATOR)
    }

    /// Returns `true` if the holder may assign and remove roles. Administrators
    /// implicitly hold every permission.
    pub const fn manage_roles(&self) -> bool {
        self.administrator() || self.contains(Self::MANAGE_ROLES)
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitOrAssign for Permissions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl From<u64> for Permissions {
    fn from(bits: u64) -> Self {
        Self::from_bits(bits)
    }
}
