pub mod codec;
mod complication_type;
mod config;
mod error;
pub mod format;
mod tests;

pub use crate::complication_type::{
    AsComplicationTypes, AsWireTypes, ComplicationType, from_wire_type_list, from_wire_types,
    to_wire_types, try_from_wire_type,
};
pub use crate::config::{WireConfig, WireConfigBuilder};
pub use crate::error::WireError;
pub use crate::format::TypeList;

pub use crate::codec::{Codec, WireTypeCodec};

#[cfg(feature = "serde-bincode")]
pub use crate::codec::serde_bincode::SerdeBincode;
