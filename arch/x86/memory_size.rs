use core::fmt;

macro_rules! define_memory_sizes {
    ($($name:ident = $size:expr, $element:expr, $broadcast:expr;)+) => (
        /// Size and layout of a memory operand.
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub enum MemorySize {
            #[default]
            $($name),+
        }

        impl MemorySize {
            /// Size in bytes, the element size for broadcasts.
            pub const fn size(self) -> usize {
                match self {
                    $(Self::$name => $size,)+
                }
            }

            /// Size of one element in bytes, same as [`MemorySize::size`] for scalars.
            pub const fn element_size(self) -> usize {
                match self {
                    $(Self::$name => $element,)+
                }
            }

            pub const fn is_broadcast(self) -> bool {
                match self {
                    $(Self::$name => $broadcast,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }
        }
    );
}

define_memory_sizes! {
    Unknown = 0, 0, false;
    UInt8 = 1, 1, false;
    UInt16 = 2, 2, false;
    UInt32 = 4, 4, false;
    UInt64 = 8, 8, false;
    UInt128 = 16, 16, false;
    UInt256 = 32, 32, false;
    UInt512 = 64, 64, false;
    Int8 = 1, 1, false;
    Int16 = 2, 2, false;
    Int32 = 4, 4, false;
    Int64 = 8, 8, false;
    Int128 = 16, 16, false;
    Float16 = 2, 2, false;
    Float32 = 4, 4, false;
    Float64 = 8, 8, false;
    Float80 = 10, 10, false;
    Float128 = 16, 16, false;
    Bcd = 10, 10, false;
    SegPtr16 = 4, 4, false;
    SegPtr32 = 6, 6, false;
    SegPtr64 = 10, 10, false;
    Fword5 = 6, 6, false;
    Fword6 = 6, 6, false;
    Fword10 = 10, 10, false;
    WordOffset = 2, 2, false;
    DwordOffset = 4, 4, false;
    QwordOffset = 8, 8, false;
    Bound16_WordWord = 4, 4, false;
    Bound32_DwordDword = 8, 8, false;
    Bnd32 = 8, 8, false;
    Bnd64 = 16, 16, false;
    FpuEnv14 = 14, 14, false;
    FpuEnv28 = 28, 28, false;
    FpuState94 = 94, 94, false;
    FpuState108 = 108, 108, false;
    Fxsave_512Byte = 512, 512, false;
    Fxsave64_512Byte = 512, 512, false;
    Xsave = 0, 0, false;
    Xsave64 = 0, 0, false;
    Packed16_UInt8 = 2, 1, false;
    Packed16_Int8 = 2, 1, false;
    Packed32_UInt8 = 4, 1, false;
    Packed32_Int8 = 4, 1, false;
    Packed32_UInt16 = 4, 2, false;
    Packed32_Int16 = 4, 2, false;
    Packed64_UInt8 = 8, 1, false;
    Packed64_Int8 = 8, 1, false;
    Packed64_UInt16 = 8, 2, false;
    Packed64_Int16 = 8, 2, false;
    Packed64_UInt32 = 8, 4, false;
    Packed64_Int32 = 8, 4, false;
    Packed64_Float16 = 8, 2, false;
    Packed64_Float32 = 8, 4, false;
    Packed128_UInt8 = 16, 1, false;
    Packed128_Int8 = 16, 1, false;
    Packed128_UInt16 = 16, 2, false;
    Packed128_Int16 = 16, 2, false;
    Packed128_UInt32 = 16, 4, false;
    Packed128_Int32 = 16, 4, false;
    Packed128_UInt64 = 16, 8, false;
    Packed128_Int64 = 16, 8, false;
    Packed128_UInt52 = 16, 8, false;
    Packed128_Float16 = 16, 2, false;
    Packed128_Float32 = 16, 4, false;
    Packed128_Float64 = 16, 8, false;
    Packed256_UInt8 = 32, 1, false;
    Packed256_Int8 = 32, 1, false;
    Packed256_UInt16 = 32, 2, false;
    Packed256_Int16 = 32, 2, false;
    Packed256_UInt32 = 32, 4, false;
    Packed256_Int32 = 32, 4, false;
    Packed256_UInt64 = 32, 8, false;
    Packed256_Int64 = 32, 8, false;
    Packed256_UInt52 = 32, 8, false;
    Packed256_UInt128 = 32, 16, false;
    Packed256_Int128 = 32, 16, false;
    Packed256_Float16 = 32, 2, false;
    Packed256_Float32 = 32, 4, false;
    Packed256_Float64 = 32, 8, false;
    Packed256_Float128 = 32, 16, false;
    Packed512_UInt8 = 64, 1, false;
    Packed512_Int8 = 64, 1, false;
    Packed512_UInt16 = 64, 2, false;
    Packed512_Int16 = 64, 2, false;
    Packed512_UInt32 = 64, 4, false;
    Packed512_Int32 = 64, 4, false;
    Packed512_UInt64 = 64, 8, false;
    Packed512_Int64 = 64, 8, false;
    Packed512_UInt52 = 64, 8, false;
    Packed512_UInt128 = 64, 16, false;
    Packed512_Float32 = 64, 4, false;
    Packed512_Float64 = 64, 8, false;
    Broadcast64_UInt32 = 4, 4, true;
    Broadcast64_Int32 = 4, 4, true;
    Broadcast64_Float32 = 4, 4, true;
    Broadcast128_UInt32 = 4, 4, true;
    Broadcast128_Int32 = 4, 4, true;
    Broadcast128_Float32 = 4, 4, true;
    Broadcast128_UInt64 = 8, 8, true;
    Broadcast128_Int64 = 8, 8, true;
    Broadcast128_UInt52 = 8, 8, true;
    Broadcast128_2xUInt32 = 8, 8, true;
    Broadcast128_2xInt32 = 8, 8, true;
    Broadcast128_Float64 = 8, 8, true;
    Broadcast256_UInt32 = 4, 4, true;
    Broadcast256_Int32 = 4, 4, true;
    Broadcast256_Float32 = 4, 4, true;
    Broadcast256_UInt64 = 8, 8, true;
    Broadcast256_Int64 = 8, 8, true;
    Broadcast256_UInt52 = 8, 8, true;
    Broadcast256_2xUInt32 = 8, 8, true;
    Broadcast256_2xInt32 = 8, 8, true;
    Broadcast256_Float64 = 8, 8, true;
    Broadcast512_UInt32 = 4, 4, true;
    Broadcast512_Int32 = 4, 4, true;
    Broadcast512_Float32 = 4, 4, true;
    Broadcast512_UInt64 = 8, 8, true;
    Broadcast512_Int64 = 8, 8, true;
    Broadcast512_UInt52 = 8, 8, true;
    Broadcast512_2xUInt32 = 8, 8, true;
    Broadcast512_2xInt32 = 8, 8, true;
    Broadcast512_Float64 = 8, 8, true;
}

impl MemorySize {
    /// Number of elements accessed, one for scalars and broadcasts.
    pub const fn element_count(self) -> usize {
        match self.element_size() {
            0 => 0,
            _ if self.is_broadcast() => 1,
            n => self.size() / n,
        }
    }

    /// Number of elements a broadcast fills, zero for other sizes.
    pub const fn broadcast_count(self) -> usize {
        use MemorySize as M;

        let bytes = match self {
            M::Broadcast64_UInt32 | M::Broadcast64_Int32 | M::Broadcast64_Float32 => 8,
            M::Broadcast128_UInt32
            | M::Broadcast128_Int32
            | M::Broadcast128_Float32
            | M::Broadcast128_UInt64
            | M::Broadcast128_Int64
            | M::Broadcast128_UInt52
            | M::Broadcast128_2xUInt32
            | M::Broadcast128_2xInt32
            | M::Broadcast128_Float64 => 16,
            M::Broadcast256_UInt32
            | M::Broadcast256_Int32
            | M::Broadcast256_Float32
            | M::Broadcast256_UInt64
            | M::Broadcast256_Int64
            | M::Broadcast256_UInt52
            | M::Broadcast256_2xUInt32
            | M::Broadcast256_2xInt32
            | M::Broadcast256_Float64 => 32,
            M::Broadcast512_UInt32
            | M::Broadcast512_Int32
            | M::Broadcast512_Float32
            | M::Broadcast512_UInt64
            | M::Broadcast512_Int64
            | M::Broadcast512_UInt52
            | M::Broadcast512_2xUInt32
            | M::Broadcast512_2xInt32
            | M::Broadcast512_Float64 => 64,
            _ => return 0,
        };
        bytes / self.element_size()
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(MemorySize::Unknown.size(), 0);
        assert_eq!(MemorySize::UInt32.size(), 4);
        assert_eq!(MemorySize::Packed128_UInt8.size(), 16);
        assert_eq!(MemorySize::Packed128_UInt8.element_size(), 1);
        assert_eq!(MemorySize::Packed128_UInt8.element_count(), 16);
        assert_eq!(MemorySize::Packed512_Float64.element_count(), 8);
        assert_eq!(MemorySize::Float80.element_count(), 1);
    }

    #[test]
    fn broadcast() {
        assert!(MemorySize::Broadcast512_Float32.is_broadcast());
        assert!(!MemorySize::Packed512_Float32.is_broadcast());
        assert_eq!(MemorySize::Broadcast512_Float32.size(), 4);
        assert_eq!(MemorySize::Broadcast128_UInt64.element_size(), 8);
        assert_eq!(MemorySize::Broadcast256_Int32.element_count(), 1);
        assert_eq!(MemorySize::Broadcast512_Float32.broadcast_count(), 16);
        assert_eq!(MemorySize::Broadcast128_Float64.broadcast_count(), 2);
        assert_eq!(MemorySize::Broadcast64_Float32.broadcast_count(), 2);
        assert_eq!(MemorySize::Packed128_UInt8.broadcast_count(), 0);
        assert_eq!(MemorySize::Broadcast256_2xInt32.size(), 8);
        assert_eq!(MemorySize::Broadcast256_2xInt32.broadcast_count(), 4);
    }
}
