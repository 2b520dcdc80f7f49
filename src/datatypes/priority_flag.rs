// ABOUTME: Defines SMPP v3.4 priority_flag field values for submit_sm and deliver_sm
// ABOUTME: Levels 4-255 are reserved and therefore not representable

use num_enum::TryFromPrimitive;

/// SMPP v3.4 priority_flag (Section 5.2.14)
///
/// Level 0 is the default, non-priority message. How levels 1-3 map onto the
/// air interface (GSM, ANSI-136, IS-95) is decided by the SMSC.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PriorityFlag {
    /// Level 0 - Lowest priority (default)
    #[default]
    Level0 = 0,
    /// Level 1
    Level1 = 1,
    /// Level 2
    Level2 = 2,
    /// Level 3 - Highest priority
    Level3 = 3,
}
