//! Wire format constants and shared framing types.

pub(crate) mod list;

pub use list::TypeList;

// Complication type codes as carried by the underlying protocol. These are a
// contract with deployed peers and must never be renumbered.
pub const TYPE_NOT_CONFIGURED: i32 = 1;
pub const TYPE_EMPTY: i32 = 2;
pub const TYPE_SHORT_TEXT: i32 = 3;
pub const TYPE_LONG_TEXT: i32 = 4;
pub const TYPE_RANGED_VALUE: i32 = 5;
pub const TYPE_ICON: i32 = 6;
pub const TYPE_SMALL_IMAGE: i32 = 7;
pub const TYPE_LARGE_IMAGE: i32 = 8;
pub const TYPE_NO_PERMISSION: i32 = 9;
pub const TYPE_NO_DATA: i32 = 10;
