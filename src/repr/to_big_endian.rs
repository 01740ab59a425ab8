/// Integers that can be converted to and from a big-endian byte key whose lexicographic order
/// matches the numeric order. Signed values have their sign bit flipped so negatives sort first.
pub trait ToBigEndian: Sized {
    /// The fixed-size byte key.
    type Key: super::BytesRepr;

    /// Converts a value into its order-preserving bytes.
    fn to_big_endian(self) -> Self::Key;

    /// Converts order-preserving bytes back into the value.
    fn from_big_endian(bytes: Self::Key) -> Self;
}

macro_rules! impl_to_big_endian_for_integer {
    ($signed:ty, $unsigned:ty) => {
        impl ToBigEndian for $signed {
            type Key = [u8; std::mem::size_of::<$signed>()];

            fn to_big_endian(self) -> Self::Key {
                let unsigned = bytemuck::cast::<_, $unsigned>(self);
                (unsigned ^ (1 << (<$signed>::BITS - 1))).to_be_bytes()
            }

            fn from_big_endian(bytes: Self::Key) -> Self {
                let unsigned = <$unsigned>::from_be_bytes(bytes);
                bytemuck::cast::<_, $signed>(unsigned ^ (1 << (<$signed>::BITS - 1)))
            }
        }

        impl ToBigEndian for $unsigned {
            type Key = [u8; std::mem::size_of::<$unsigned>()];

            fn to_big_endian(self) -> Self::Key {
                self.to_be_bytes()
            }

            fn from_big_endian(bytes: Self::Key) -> Self {
                <$unsigned>::from_be_bytes(bytes)
            }
        }
    };
}

impl_to_big_endian_for_integer!(i8, u8);
impl_to_big_endian_for_integer!(i16, u16);
impl_to_big_endian_for_integer!(i32, u32);
impl_to_big_endian_for_integer!(i64, u64);
impl_to_big_endian_for_integer!(i128, u128);
