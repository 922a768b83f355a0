use crate::utils::{deposit, zextract};

/// Bit field inside [`Flags`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    start: u8,
    size: u8,
}

impl Field {
    pub const fn new(start: u8, size: u8) -> Self {
        debug_assert!(size != 0 && start < 32 && (start + size) <= 32);
        Self { start, size }
    }

    pub const fn start(&self) -> u32 {
        self.start as u32
    }

    pub const fn size(&self) -> u32 {
        self.size as u32
    }

    /// Mask of the field bits in place.
    pub const fn mask(&self) -> u32 {
        (u32::MAX >> (32 - self.size as u32)) << self.start
    }
}

/// Packed boolean flags and small fields.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Flags {
    raw: u32,
}

impl Flags {
    pub const fn empty() -> Self {
        Self { raw: 0 }
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    pub const fn raw(&self) -> u32 {
        self.raw
    }

    pub const fn is_empty(&self) -> bool {
        self.raw == 0
    }

    pub fn clear(&mut self, flags: u32) -> &mut Self {
        self.raw &= !flags;
        self
    }

    pub fn set(&mut self, flags: u32) -> &mut Self {
        self.raw |= flags;
        self
    }

    pub fn set_if(&mut self, flags: u32, cond: bool) -> &mut Self {
        if cond {
            self.raw |= flags;
        } else {
            self.raw &= !flags;
        }
        self
    }

    pub const fn any(&self, flags: u32) -> bool {
        self.raw & flags != 0
    }

    pub const fn all(&self, flags: u32) -> bool {
        self.raw & flags == flags
    }

    pub fn field(&self, field: Field) -> u32 {
        zextract(self.raw, field.start(), field.size())
    }

    pub fn field_set(&mut self, field: Field, value: u32) -> &mut Self {
        self.raw = deposit(self.raw, field.start(), field.size(), value);
        self
    }

    pub fn field_set_if(&mut self, field: Field, value: u32, cond: bool) -> &mut Self {
        if cond {
            self.field_set(field, value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u32 = 1 << 0;
    const B: u32 = 1 << 1;
    const FIELD: Field = Field::new(4, 3);

    #[test]
    fn bits() {
        let mut flags = Flags::empty();
        flags.set(A).set_if(B, true);
        assert!(flags.all(A | B));
        flags.set_if(A, false);
        assert!(!flags.any(A));
        assert!(flags.any(A | B));
        flags.clear(B);
        assert!(flags.is_empty());
    }

    #[test]
    fn fields() {
        let mut flags = Flags::from_raw(A);
        flags.field_set(FIELD, 5);
        assert_eq!(flags.field(FIELD), 5);
        assert_eq!(flags.raw(), A | (5 << 4));
        flags.field_set(FIELD, 0xff);
        assert_eq!(flags.field(FIELD), 7);
        flags.field_set_if(FIELD, 1, false);
        assert_eq!(flags.field(FIELD), 7);
        assert_eq!(FIELD.mask(), 0x70);
    }
}
