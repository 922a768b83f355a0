use core::mem;

pub trait ZExtract<U>: Sized {
    fn zextract(&self, pos: u32, len: u32) -> U;
}

pub trait SExtract<S>: Sized {
    fn sextract(&self, pos: u32, len: u32) -> S;
}

pub trait Deposit: Sized {
    fn deposit<F: Into<Self>>(&self, pos: u32, len: u32, field: F) -> Self;
}

macro_rules! impl_bits {
    ($($uint:ty = $sint:ty),+ $(,)?) => (
        $(
            impl ZExtract<$uint> for $uint {
                #[inline]
                fn zextract(&self, pos: u32, len: u32) -> $uint {
                    let w = mem::size_of::<$uint>() as u32 * 8;
                    (*self << (w - pos - len)) >> (w - len)
                }
            }

            impl SExtract<$sint> for $uint {
                #[inline]
                fn sextract(&self, pos: u32, len: u32) -> $sint {
                    let w = mem::size_of::<$uint>() as u32 * 8;
                    (*self << (w - pos - len)) as $sint >> (w - len)
                }
            }

            impl Deposit for $uint {
                #[inline]
                fn deposit<F: Into<Self>>(&self, pos: u32, len: u32, field: F) -> Self {
                    let mask = (1 as $uint).checked_shl(len).unwrap_or(0).wrapping_sub(1) << pos;
                    (*self & !mask) | ((field.into() << pos) & mask)
                }
            }
        )+
    );
}

impl_bits! {
    u8 = i8,
    u16 = i16,
    u32 = i32,
    u64 = i64,
}

#[inline]
pub fn zextract<U, T: ZExtract<U>>(value: T, pos: u32, len: u32) -> U {
    value.zextract(pos, len)
}

#[inline]
pub fn sextract<S, T: SExtract<S>>(value: T, pos: u32, len: u32) -> S {
    value.sextract(pos, len)
}

#[inline]
pub fn deposit<T: Deposit, F: Into<T>>(value: T, pos: u32, len: u32, field: F) -> T {
    value.deposit(pos, len, field)
}

/// Truncates `value` to `bits` and sign-extends the result to 64 bits.
#[inline]
pub fn sign_extend(value: u64, bits: u32) -> u64 {
    debug_assert!(bits > 0 && bits <= 64);
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}

/// Truncates `value` to `bits`.
#[inline]
pub fn truncate(value: u64, bits: u32) -> u64 {
    if bits >= 64 {
        value
    } else {
        value & ((1 << bits) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract() {
        assert_eq!(zextract::<u8, _>(0b1101_0110u8, 6, 2), 0b11);
        assert_eq!(zextract::<u8, _>(0b1101_0110u8, 3, 3), 0b010);
        assert_eq!(sextract::<i8, _>(0b1101_0110u8, 6, 2), -1);
        assert_eq!(sextract::<i32, _>(0x0000_8000u32, 0, 16), -0x8000);
    }

    #[test]
    fn deposit_bits() {
        assert_eq!(deposit(0xffu8, 3, 3, 0u8), 0b1100_0111);
        assert_eq!(deposit(0u32, 28, 4, 0xfu32), 0xf000_0000);
        assert_eq!(deposit(0u32, 0, 32, 0x1234u32), 0x1234);
    }

    #[test]
    fn extend() {
        assert_eq!(sign_extend(0x80, 8), 0xffff_ffff_ffff_ff80);
        assert_eq!(sign_extend(0x7f, 8), 0x7f);
        assert_eq!(sign_extend(0x1_8000_0000, 32), 0xffff_ffff_8000_0000);
        assert_eq!(truncate(0x1_2345, 16), 0x2345);
        assert_eq!(truncate(u64::MAX, 64), u64::MAX);
    }
}
