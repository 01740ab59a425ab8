mod to_big_endian;

pub use to_big_endian::*;

/// Any type implementing this trait can be decomposed into bytes. The trie branches on these bytes
/// and compares them for exact matches, so equal values must produce equal bytes.
pub trait BytesRepr {
    /// Views the bytes representation of this value.
    fn repr(&self) -> &[u8];
}

macro_rules! impl_bytes_repr_for_integer {
    ($T:ty) => {
        impl BytesRepr for $T {
            fn repr(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }
        }

        impl BytesRepr for [$T] {
            fn repr(&self) -> &[u8] {
                bytemuck::cast_slice(self)
            }
        }

        impl BytesRepr for Vec<$T> {
            fn repr(&self) -> &[u8] {
                bytemuck::cast_slice(self)
            }
        }

        impl BytesRepr for Box<[$T]> {
            fn repr(&self) -> &[u8] {
                bytemuck::cast_slice(self)
            }
        }

        impl<const N: usize> BytesRepr for [$T; N] {
            fn repr(&self) -> &[u8] {
                bytemuck::cast_slice(self)
            }
        }
    };
}

impl_bytes_repr_for_integer!(i8);
impl_bytes_repr_for_integer!(i16);
impl_bytes_repr_for_integer!(i32);
impl_bytes_repr_for_integer!(i64);
impl_bytes_repr_for_integer!(i128);

impl_bytes_repr_for_integer!(u8);
impl_bytes_repr_for_integer!(u16);
impl_bytes_repr_for_integer!(u32);
impl_bytes_repr_for_integer!(u64);
impl_bytes_repr_for_integer!(u128);

impl BytesRepr for str {
    fn repr(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl BytesRepr for String {
    fn repr(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl BytesRepr for Box<str> {
    fn repr(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T> BytesRepr for &T
where
    T: BytesRepr + ?Sized,
{
    fn repr(&self) -> &[u8] {
        T::repr(*self)
    }
}
