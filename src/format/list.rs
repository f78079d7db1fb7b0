use crate::complication_type::{ComplicationType, to_wire_types};
use crate::config::WireConfig;
use crate::error::WireError;
use std::io::{self, Read, Write};

const PREALLOC_ENTRIES: u32 = 1024;

/// All integers are little-endian.
/// Layout: `count: u32`, then `count` wire codes as `i32`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeList {
    pub types: Vec<ComplicationType>,
}

impl TypeList {
    pub const HEADER_SIZE: usize = 4;
    pub const ENTRY_SIZE: usize = 4;

    pub fn new(types: impl IntoIterator<Item = ComplicationType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        Self::HEADER_SIZE + self.types.len() * Self::ENTRY_SIZE
    }

    /// Writes one frame. Lists the matching `decode_from` would refuse are rejected
    /// before any byte is written.
    pub fn encode_to<W: Write>(&self, w: W, cfg: &WireConfig) -> Result<(), WireError> {
        encode_types(&self.types, w, cfg)
    }

    /// Reads one frame. Unknown codes become `Empty` rather than failing the frame.
    pub fn decode_from<R: Read>(mut r: R, cfg: &WireConfig) -> Result<Self, WireError> {
        let count = read_u32_le(&mut r)?;
        if count as usize > cfg.max_entries {
            return Err(WireError::TooManyEntries {
                count,
                max: cfg.max_entries,
            });
        }

        // The prefix is untrusted; grow past this as entries actually arrive.
        let mut types = Vec::with_capacity(count.min(PREALLOC_ENTRIES) as usize);
        let mut unknown = 0usize;
        for _ in 0..count {
            let code = read_i32_le(&mut r)?;
            if !ComplicationType::is_known_wire_type(code) {
                unknown += 1;
            }
            types.push(ComplicationType::from_wire_type(code));
        }

        tracing::trace!(count, "decoded type list");
        if unknown > 0 {
            tracing::debug!(unknown, count, "unknown wire types replaced with empty");
        }
        Ok(Self { types })
    }
}

impl From<Vec<ComplicationType>> for TypeList {
    fn from(types: Vec<ComplicationType>) -> Self {
        Self { types }
    }
}

pub(crate) fn encode_types<W: Write>(
    types: &[ComplicationType],
    mut w: W,
    cfg: &WireConfig,
) -> Result<(), WireError> {
    let count = u32::try_from(types.len()).unwrap_or(u32::MAX);
    if types.len() > cfg.max_entries || types.len() > u32::MAX as usize {
        return Err(WireError::TooManyEntries {
            count,
            max: cfg.max_entries,
        });
    }
    w.write_all(&count.to_le_bytes())?;
    for code in to_wire_types(types.iter().copied()) {
        w.write_all(&code.to_le_bytes())?;
    }
    Ok(())
}

#[inline]
fn read_u32_le<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut b = [0u8; 4];
    r.read_exact(&mut b)?;
    Ok(u32::from_le_bytes(b))
}

#[inline]
fn read_i32_le<R: Read>(r: &mut R) -> io::Result<i32> {
    let mut b = [0u8; 4];
    r.read_exact(&mut b)?;
    Ok(i32::from_le_bytes(b))
}
