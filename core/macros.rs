// !!!! CAUTION !!!!
// !---------------!
// !  DANGER ZONE  !
// !---------------!
// ! HIGH RISK  OF !
// ! BRAIN DAMAGE  !
// !---------------!
// !   KEEP OUT    !
// !!!!!!!!!!!!!!!!!

/// Generates getters for bit fields of `self.raw()`.
///
/// `vis name = pos, len, type;` or `vis name = pos, len, type: cast, map;`
#[macro_export]
macro_rules! impl_field {
    ($($vis:vis $name:ident =
        $pos:expr,
        $len:expr,
        $ret:tt $(: $cast:ty)?
        $(,$map:expr)?
    ;)*) => ($(
        $crate::impl_field!(impl $vis $name, $ret $(: $cast)?, $pos, $len $(,$map)?);
    )*);
    (impl $vis:vis $name:ident, bool, $pos:expr, $len:expr $(,$map:expr)?) => (
        #[inline(always)]
        $vis fn $name(&self) -> bool {
            let ret: u32 = $crate::utils::zextract(self.raw(), $pos, $len);
            $(let ret = $map(ret);)?
            ret != 0
        }
    );
    (impl $vis:vis $name:ident, $ret:ty, $pos:expr, $len:expr $(,$map:expr)?) => (
        #[inline(always)]
        $vis fn $name(&self) -> $ret {
            let ret: u32 = $crate::utils::zextract(self.raw(), $pos, $len);
            $(let ret = $map(ret);)?
            ret as $ret
        }
    );
    (impl $vis:vis $name:ident, $ret:ty: $cast:ty, $pos:expr, $len:expr $(,$map:expr)?) => (
        #[inline(always)]
        $vis fn $name(&self) -> $ret {
            let ret: u32 = $crate::utils::zextract(self.raw(), $pos, $len);
            $(let ret = $map(ret);)?
            ret as $cast as $ret
        }
    );
}
pub use impl_field;

/// Defines an instruction code enum.
///
/// Every code is followed by its mnemonic. Generates `Code::ALL`, `Code::name` and, with the
/// `mnemonic` feature of the calling crate, `Code::mnemonic`.
#[macro_export]
macro_rules! define_codes {
    ($(#[$attr:meta])* $vis:vis enum $name:ident {
        $($code:ident = $mnemonic:literal),+ $(,)?
    }) => (
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $(#[$attr])*
        $vis enum $name {
            $($code),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$code),+];

            /// Returns the name of the code.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$code => stringify!($code),)+
                }
            }

            #[cfg(feature = "mnemonic")]
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$code => $mnemonic,)+
                }
            }
        }
    );
}
pub use define_codes;
