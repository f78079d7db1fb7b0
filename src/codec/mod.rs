//! Pluggable record (de)serialization for payloads that carry complication types.

use std::error::Error;
use std::io::{Read, Write};

use crate::complication_type::ComplicationType;
use crate::config::WireConfig;
use crate::error::WireError;
use crate::format::{self, TypeList};

/// A simple codec interface for turning a record into bytes and back.
/// Implement this yourself, or enable the serde codec.
pub trait Codec: Send + Sync + 'static + Clone {
    type Value: Send + Sync + 'static;
    type Error: Error + Send + Sync + 'static;

    /// Encode `value` **into the provided writer**.
    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), Self::Error>;

    /// Decode a single value **from the provided reader** (exactly one record's payload).
    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, Self::Error>;
}

/// Encodes a list of types as a [`TypeList`] frame.
#[derive(Clone, Debug, Default)]
pub struct WireTypeCodec {
    cfg: WireConfig,
}

impl WireTypeCodec {
    pub fn new(cfg: WireConfig) -> Self {
        Self { cfg }
    }
}

impl Codec for WireTypeCodec {
    type Value = Vec<ComplicationType>;
    type Error = WireError;

    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), Self::Error> {
        format::list::encode_types(value, w, &self.cfg)
    }

    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, Self::Error> {
        Ok(TypeList::decode_from(r, &self.cfg)?.types)
    }
}

#[cfg(feature = "serde-bincode")]
pub mod serde_bincode;

#[cfg(feature = "serde-bincode")]
pub use serde_bincode::SerdeBincode;
