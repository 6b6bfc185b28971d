//! Cache key normalisation.
//!
//! Every argument of a memoised call is converted into one [`CacheArg`]
//! shape, and [`to_cache_key`] maps each shape to a [`KeyPart`] with a
//! single exhaustive match:
//!
//! | Shape | Key part |
//! |-------|----------|
//! | `Points` (array-like numeric buffer) | raw little-endian bytes |
//! | `Sequence` (ordered list) | tuple of normalised elements, same order |
//! | `Int` / `Uint` / `Bool` / `Text` | the value itself |
//! | `Float` | bit pattern; NaN is rejected |
//!
//! Shapes are enum variants, so an argument is exactly one of them: a point
//! buffer always takes the raw-bytes path and is never treated as a list.
//!
//! Keys compare by their full normalised content, not by a digest, so two
//! distinct arguments can never share an entry.

use crate::types::{CacheKeyError, Path, Point};

/// An argument of a memoised call, tagged with its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheArg<'a> {
    /// Contiguous point buffer, keyed by its raw bytes.
    Points(&'a [Point]),
    /// Ordered sequence, keyed element by element.
    Sequence(Vec<CacheArg<'a>>),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating-point scalar.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Text.
    Text(&'a str),
}

/// Normalised, hashable form of one argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    /// Raw byte content of a buffer
    Bytes(Vec<u8>),
    /// Fixed-order tuple
    Tuple(Vec<KeyPart>),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    Uint(u64),
    /// IEEE bit pattern of a non-NaN float
    FloatBits(u64),
    /// Boolean
    Bool(bool),
    /// Owned text
    Text(String),
}

/// Compound key of a memoised call: the normalised arguments in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    parts: Vec<KeyPart>,
}

impl CacheKey {
    /// Build the key for a typed argument tuple.
    ///
    /// # Examples
    /// ```
    /// use waypoint_core::memo::CacheKey;
    /// use waypoint_core::types::Path;
    ///
    /// let a = Path::from_pairs(&[[0.0, 0.0], [1.0, 2.0]]);
    /// let b = a.clone();
    /// assert_eq!(
    ///     CacheKey::from_args(&(&a[..], 3usize)).unwrap(),
    ///     CacheKey::from_args(&(&b[..], 3usize)).unwrap(),
    /// );
    /// ```
    pub fn from_args<A>(args: &A) -> Result<Self, CacheKeyError>
    where
        A: CacheArgs + ?Sized,
    {
        to_cache_key(&args.cache_args())
    }

    /// The normalised parts, one per argument.
    pub fn parts(&self) -> &[KeyPart] {
        &self.parts
    }
}

/// Normalise `args` into a compound key.
///
/// # Errors
///
/// `CacheKeyError::Unhashable` naming the first argument that has no key.
///
/// # Examples
/// ```
/// use waypoint_core::memo::{to_cache_key, CacheArg};
///
/// assert!(to_cache_key(&[CacheArg::Float(1.5), CacheArg::Uint(2)]).is_ok());
/// assert!(to_cache_key(&[CacheArg::Uint(2), CacheArg::Float(f64::NAN)]).is_err());
/// ```
pub fn to_cache_key(args: &[CacheArg<'_>]) -> Result<CacheKey, CacheKeyError> {
    let parts = args
        .iter()
        .enumerate()
        .map(|(position, arg)| {
            normalise(arg).map_err(|reason| CacheKeyError::Unhashable { position, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CacheKey { parts })
}

fn normalise(arg: &CacheArg<'_>) -> Result<KeyPart, String> {
    match arg {
        CacheArg::Points(points) => {
            let mut bytes = Vec::with_capacity(points.len() * Point::BYTES);
            for point in points.iter() {
                bytes.extend_from_slice(&point.to_le_bytes());
            }
            Ok(KeyPart::Bytes(bytes))
        }
        CacheArg::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                normalise(item).map_err(|reason| format!("element {}: {}", index, reason))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(KeyPart::Tuple),
        CacheArg::Int(value) => Ok(KeyPart::Int(*value)),
        CacheArg::Uint(value) => Ok(KeyPart::Uint(*value)),
        CacheArg::Float(value) if value.is_nan() => {
            Err("NaN has no stable value identity".to_string())
        }
        CacheArg::Float(value) => Ok(KeyPart::FloatBits(value.to_bits())),
        CacheArg::Bool(value) => Ok(KeyPart::Bool(*value)),
        CacheArg::Text(value) => Ok(KeyPart::Text((*value).to_string())),
    }
}

/// Conversion of a single argument into its [`CacheArg`] shape.
pub trait AsCacheArg {
    /// Shape-tagged view of `self`.
    fn as_cache_arg(&self) -> CacheArg<'_>;
}

impl<T: AsCacheArg + ?Sized> AsCacheArg for &T {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        (**self).as_cache_arg()
    }
}

impl AsCacheArg for [Point] {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Points(self)
    }
}

impl AsCacheArg for Vec<Point> {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Points(self)
    }
}

impl AsCacheArg for Path {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Points(self.points())
    }
}

impl AsCacheArg for Point {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Points(std::slice::from_ref(self))
    }
}

macro_rules! impl_unsigned_arg {
    ($($ty:ty),+) => {
        $(
            impl AsCacheArg for $ty {
                fn as_cache_arg(&self) -> CacheArg<'_> {
                    CacheArg::Uint(*self as u64)
                }
            }
        )+
    };
}

macro_rules! impl_signed_arg {
    ($($ty:ty),+) => {
        $(
            impl AsCacheArg for $ty {
                fn as_cache_arg(&self) -> CacheArg<'_> {
                    CacheArg::Int(*self as i64)
                }
            }
        )+
    };
}

impl_unsigned_arg!(u8, u16, u32, u64, usize);
impl_signed_arg!(i8, i16, i32, i64, isize);

impl AsCacheArg for f64 {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Float(*self)
    }
}

impl AsCacheArg for f32 {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Float(f64::from(*self))
    }
}

impl AsCacheArg for bool {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Bool(*self)
    }
}

impl AsCacheArg for str {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Text(self)
    }
}

impl AsCacheArg for String {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Text(self)
    }
}

impl AsCacheArg for [usize] {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Sequence(self.iter().map(|&v| CacheArg::Uint(v as u64)).collect())
    }
}

impl AsCacheArg for Vec<usize> {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        self.as_slice().as_cache_arg()
    }
}

impl AsCacheArg for [f64] {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        CacheArg::Sequence(self.iter().map(|&v| CacheArg::Float(v)).collect())
    }
}

impl AsCacheArg for Vec<f64> {
    fn as_cache_arg(&self) -> CacheArg<'_> {
        self.as_slice().as_cache_arg()
    }
}

/// A positional argument list that can be keyed.
///
/// Implemented for tuples of up to four [`AsCacheArg`] values.
pub trait CacheArgs {
    /// The arguments in positional order.
    fn cache_args(&self) -> Vec<CacheArg<'_>>;
}

impl CacheArgs for [CacheArg<'_>] {
    fn cache_args(&self) -> Vec<CacheArg<'_>> {
        self.to_vec()
    }
}

macro_rules! impl_tuple_args {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: AsCacheArg),+> CacheArgs for ($($name,)+) {
            fn cache_args(&self) -> Vec<CacheArg<'_>> {
                vec![$(self.$idx.as_cache_arg()),+]
            }
        }
    };
}

impl_tuple_args!(A.0);
impl_tuple_args!(A.0, B.1);
impl_tuple_args!(A.0, B.1, C.2);
impl_tuple_args!(A.0, B.1, C.2, D.3);

#[cfg(test)]
mod tests {
    use super::*;

    fn key<A: CacheArgs>(args: A) -> CacheKey {
        CacheKey::from_args(&args).unwrap()
    }

    #[test]
    fn test_equal_content_gives_equal_key() {
        let a = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let b = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert_eq!(key((&a[..],)), key((&b[..],)));
        assert_eq!(key((a.clone(),)), key((&b[..],)));
    }

    #[test]
    fn test_slices_from_different_ranges_share_key() {
        let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(key((&path[0..2],)), key((&path[2..4],)));
        assert_ne!(key((&path[0..2],)), key((&path[1..3],)));
    }

    #[test]
    fn test_points_key_is_raw_bytes() {
        let points = [Point::new(1.0, -2.0)];
        let parts = key((&points[..],)).parts().to_vec();
        let mut expected = 1.0_f64.to_le_bytes().to_vec();
        expected.extend_from_slice(&(-2.0_f64).to_le_bytes());
        assert_eq!(parts, vec![KeyPart::Bytes(expected)]);
    }

    #[test]
    fn test_key_is_representation_sensitive() {
        let positive = [Point::new(0.0, 0.0)];
        let negative = [Point::new(-0.0, 0.0)];
        assert_eq!(positive, negative);
        assert_ne!(key((&positive[..],)), key((&negative[..],)));
    }

    #[test]
    fn test_argument_order_matters() {
        assert_ne!(key((1usize, 2usize)), key((2usize, 1usize)));
    }

    #[test]
    fn test_budget_distinguishes_keys() {
        let path = Path::from_pairs(&[[0.0, 0.0]]);
        assert_ne!(key((&path, 1usize)), key((&path, 2usize)));
    }

    #[test]
    fn test_sequence_is_fixed_order_tuple() {
        let parts = key((vec![3usize, 1, 2],)).parts().to_vec();
        assert_eq!(
            parts,
            vec![KeyPart::Tuple(vec![
                KeyPart::Uint(3),
                KeyPart::Uint(1),
                KeyPart::Uint(2)
            ])]
        );
    }

    #[test]
    fn test_nan_scalar_is_unhashable() {
        let err = CacheKey::from_args(&(1usize, f64::NAN)).unwrap_err();
        match err {
            CacheKeyError::Unhashable { position, reason } => {
                assert_eq!(position, 1);
                assert!(reason.contains("NaN"));
            }
        }
    }

    #[test]
    fn test_nan_inside_sequence_is_unhashable() {
        let err = CacheKey::from_args(&(vec![0.5, f64::NAN],)).unwrap_err();
        let CacheKeyError::Unhashable { position, reason } = err;
        assert_eq!(position, 0);
        assert!(reason.starts_with("element 1"));
    }

    #[test]
    fn test_nan_coordinates_are_hashable_as_bytes() {
        let points = [Point::new(f64::NAN, 0.0)];
        assert!(CacheKey::from_args(&(&points[..],)).is_ok());
    }

    #[test]
    fn test_explicit_arg_list() {
        let args = [CacheArg::Text("cost"), CacheArg::Int(-4)];
        let built = CacheKey::from_args(&args[..]).unwrap();
        assert_eq!(
            built.parts(),
            &[KeyPart::Text("cost".to_string()), KeyPart::Int(-4)]
        );
    }
}
