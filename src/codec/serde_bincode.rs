//! Bincode codec for payload structs that embed `ComplicationType` fields.
//!
//! Types serialize as their wire code, so a payload written by a newer peer still
//! decodes here: its unknown codes come back as `Empty`.

use super::Codec;
use crate::error::WireError;
use std::io::{Read, Write};
use std::marker::PhantomData;

#[derive(Copy, Debug, Default)]
pub struct SerdeBincode<T>(PhantomData<T>);

impl<T> SerdeBincode<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for SerdeBincode<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Codec for SerdeBincode<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync + 'static,
{
    type Value = T;
    type Error = WireError;

    fn encode_into(&self, value: &Self::Value, w: &mut impl Write) -> Result<(), WireError> {
        bincode::serde::encode_into_std_write(value, w, bincode::config::standard())
            .map_err(|e| WireError::Codec(Box::new(e)))?;
        Ok(())
    }

    fn decode_from(&self, r: &mut impl Read) -> Result<Self::Value, WireError> {
        bincode::serde::decode_from_std_read(r, bincode::config::standard())
            .map_err(|e| WireError::Codec(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComplicationType;
    use serde::{Deserialize, Serialize};
    use std::io::Cursor;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Slot {
        id: u32,
        active: ComplicationType,
        supported: Vec<ComplicationType>,
    }

    #[derive(Serialize, Deserialize)]
    struct RawSlot {
        id: u32,
        active: i32,
        supported: Vec<i32>,
    }

    #[test]
    fn payload_with_types_roundtrips() {
        let codec = SerdeBincode::<Slot>::new();
        let slot = Slot {
            id: 7,
            active: ComplicationType::ShortText,
            supported: vec![ComplicationType::ShortText, ComplicationType::SmallImage],
        };
        let mut buf = Vec::new();
        codec.encode_into(&slot, &mut buf).unwrap();
        let got = codec.decode_from(&mut Cursor::new(buf)).unwrap();
        assert_eq!(got, slot);
    }

    #[test]
    fn payload_from_newer_peer_degrades_to_empty() {
        let raw = RawSlot {
            id: 1,
            active: 77,
            supported: vec![3, 77],
        };
        let mut buf = Vec::new();
        SerdeBincode::<RawSlot>::new()
            .encode_into(&raw, &mut buf)
            .unwrap();
        let got = SerdeBincode::<Slot>::new()
            .decode_from(&mut Cursor::new(buf))
            .unwrap();
        assert_eq!(got.active, ComplicationType::Empty);
        assert_eq!(
            got.supported,
            vec![ComplicationType::ShortText, ComplicationType::Empty]
        );
    }

    #[test]
    fn truncated_payload_surfaces_as_codec_error() {
        let codec = SerdeBincode::<Slot>::new();
        let err = codec.decode_from(&mut Cursor::new(vec![7u8])).unwrap_err();
        assert!(matches!(err, WireError::Codec(_)));
        assert!(err.to_string().starts_with("codec: "));
    }
}
