//! The closed set of complication types and their integer wire mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::WireError;
use crate::format::{
    TYPE_EMPTY, TYPE_ICON, TYPE_LARGE_IMAGE, TYPE_LONG_TEXT, TYPE_NO_DATA, TYPE_NO_PERMISSION,
    TYPE_NOT_CONFIGURED, TYPE_RANGED_VALUE, TYPE_SHORT_TEXT, TYPE_SMALL_IMAGE,
};

/// The possible complication data types.
///
/// Each variant carries its wire code as the discriminant, so the compiler
/// rejects two variants sharing a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ComplicationType {
    NoData = TYPE_NO_DATA,
    Empty = TYPE_EMPTY,
    NotConfigured = TYPE_NOT_CONFIGURED,
    ShortText = TYPE_SHORT_TEXT,
    LongText = TYPE_LONG_TEXT,
    RangedValue = TYPE_RANGED_VALUE,
    MonochromaticImage = TYPE_ICON,
    SmallImage = TYPE_SMALL_IMAGE,
    BackgroundImage = TYPE_LARGE_IMAGE,
    NoPermission = TYPE_NO_PERMISSION,
}

impl ComplicationType {
    /// Every type, in declaration order.
    pub const ALL: [ComplicationType; 10] = [
        ComplicationType::NoData,
        ComplicationType::Empty,
        ComplicationType::NotConfigured,
        ComplicationType::ShortText,
        ComplicationType::LongText,
        ComplicationType::RangedValue,
        ComplicationType::MonochromaticImage,
        ComplicationType::SmallImage,
        ComplicationType::BackgroundImage,
        ComplicationType::NoPermission,
    ];

    /// Type substituted for any wire code this build does not know.
    pub const FALLBACK: ComplicationType = ComplicationType::Empty;

    /// Integer value used for serialization.
    #[inline]
    pub const fn wire_type(self) -> i32 {
        self as i32
    }

    /// Converts a serialized integer back into a type.
    ///
    /// Never fails: codes from newer (or broken) peers map to [`Self::FALLBACK`].
    #[inline]
    pub const fn from_wire_type(wire_type: i32) -> Self {
        match Self::known(wire_type) {
            Some(t) => t,
            None => Self::FALLBACK,
        }
    }

    /// Whether `wire_type` names one of the known types.
    pub const fn is_known_wire_type(wire_type: i32) -> bool {
        Self::known(wire_type).is_some()
    }

    const fn known(wire_type: i32) -> Option<Self> {
        match wire_type {
            TYPE_NO_DATA => Some(ComplicationType::NoData),
            TYPE_EMPTY => Some(ComplicationType::Empty),
            TYPE_NOT_CONFIGURED => Some(ComplicationType::NotConfigured),
            TYPE_SHORT_TEXT => Some(ComplicationType::ShortText),
            TYPE_LONG_TEXT => Some(ComplicationType::LongText),
            TYPE_RANGED_VALUE => Some(ComplicationType::RangedValue),
            TYPE_ICON => Some(ComplicationType::MonochromaticImage),
            TYPE_SMALL_IMAGE => Some(ComplicationType::SmallImage),
            TYPE_LARGE_IMAGE => Some(ComplicationType::BackgroundImage),
            TYPE_NO_PERMISSION => Some(ComplicationType::NoPermission),
            _ => None,
        }
    }

    /// Stable lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ComplicationType::NoData => "no_data",
            ComplicationType::Empty => "empty",
            ComplicationType::NotConfigured => "not_configured",
            ComplicationType::ShortText => "short_text",
            ComplicationType::LongText => "long_text",
            ComplicationType::RangedValue => "ranged_value",
            ComplicationType::MonochromaticImage => "monochromatic_image",
            ComplicationType::SmallImage => "small_image",
            ComplicationType::BackgroundImage => "background_image",
            ComplicationType::NoPermission => "no_permission",
        }
    }
}

impl From<ComplicationType> for i32 {
    fn from(t: ComplicationType) -> i32 {
        t.wire_type()
    }
}

impl From<i32> for ComplicationType {
    fn from(v: i32) -> Self {
        ComplicationType::from_wire_type(v)
    }
}

/// Strict counterpart to [`ComplicationType::from_wire_type`], for callers that
/// want to tell an unknown code apart from a genuine `Empty`.
pub fn try_from_wire_type(wire_type: i32) -> Result<ComplicationType, WireError> {
    ComplicationType::known(wire_type).ok_or(WireError::UnknownWireType(wire_type))
}

impl fmt::Display for ComplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComplicationType {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplicationType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WireError::UnknownName(s.to_owned()))
    }
}

/// Converts a collection of types to their wire codes, preserving order.
pub fn to_wire_types<I>(types: I) -> Vec<i32>
where
    I: IntoIterator<Item = ComplicationType>,
{
    types.into_iter().map(ComplicationType::wire_type).collect()
}

/// Converts wire codes into a fixed-size array of types, preserving order.
pub fn from_wire_types(wire_types: &[i32]) -> Box<[ComplicationType]> {
    wire_types
        .iter()
        .map(|&w| ComplicationType::from_wire_type(w))
        .collect()
}

/// Converts wire codes into a list of types, preserving order.
pub fn from_wire_type_list(wire_types: &[i32]) -> Vec<ComplicationType> {
    wire_types
        .iter()
        .map(|&w| ComplicationType::from_wire_type(w))
        .collect()
}

/// `.as_wire_types()` on anything that iterates over types.
pub trait AsWireTypes {
    fn as_wire_types(self) -> Vec<i32>;
}

impl<I> AsWireTypes for I
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<ComplicationType>,
{
    fn as_wire_types(self) -> Vec<i32> {
        use std::borrow::Borrow;
        self.into_iter().map(|t| t.borrow().wire_type()).collect()
    }
}

/// `.as_complication_types()` on a slice of wire codes.
pub trait AsComplicationTypes {
    fn as_complication_types(&self) -> Box<[ComplicationType]>;
}

impl AsComplicationTypes for [i32] {
    fn as_complication_types(&self) -> Box<[ComplicationType]> {
        from_wire_types(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComplicationType {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i32(self.wire_type())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ComplicationType {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = <i32 as serde::Deserialize>::deserialize(d)?;
        Ok(ComplicationType::from_wire_type(v))
    }
}
