// ABOUTME: Typed values for mandatory PDU fields and their wire encoding
// ABOUTME: Integers are big-endian, strings are C-octet strings or zero padded, raw bytes are verbatim

use crate::datatypes::{InterfaceVersion, NumericPlanIndicator, PriorityFlag, TypeOfNumber};
use bytes::{BufMut, Bytes, BytesMut};

/// The three shapes a mandatory field can take on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    String,
    Raw,
}

/// How many octets a field occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Width {
    /// Exactly this many octets. Strings and raw values are zero padded and
    /// strings get no terminator.
    Fixed(usize),
    /// Up to this many octets. For strings the limit includes the terminator.
    Variable { max: usize },
}

/// An unsigned integer that knows its own wire width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Integer {
    U8(u8),
    U16(u16),
    U32(u32),
}

impl Integer {
    /// Zero of the given width in octets. Widths other than 2 and 4 fall back
    /// to a single octet.
    pub fn zero(width: usize) -> Self {
        match width {
            2 => Integer::U16(0),
            4 => Integer::U32(0),
            _ => Integer::U8(0),
        }
    }

    /// Build an integer of `width` octets from a length, saturating at the
    /// largest value that width can hold.
    pub fn saturating(width: usize, value: usize) -> Self {
        match width {
            2 => Integer::U16(u16::try_from(value).unwrap_or(u16::MAX)),
            4 => Integer::U32(u32::try_from(value).unwrap_or(u32::MAX)),
            _ => Integer::U8(u8::try_from(value).unwrap_or(u8::MAX)),
        }
    }

    pub fn width(self) -> usize {
        match self {
            Integer::U8(_) => 1,
            Integer::U16(_) => 2,
            Integer::U32(_) => 4,
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Integer::U8(v) => v.into(),
            Integer::U16(v) => v.into(),
            Integer::U32(v) => v,
        }
    }

    fn encode(self, buf: &mut BytesMut) {
        match self {
            Integer::U8(v) => buf.put_u8(v),
            Integer::U16(v) => buf.put_u16(v),
            Integer::U32(v) => buf.put_u32(v),
        }
    }
}

/// A value for one mandatory field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Integer(Integer),
    /// String content without its terminator.
    String(Bytes),
    Raw(Bytes),
}

impl FieldValue {
    /// Raw octets, written verbatim.
    pub fn raw(value: impl AsRef<[u8]>) -> Self {
        FieldValue::Raw(Bytes::copy_from_slice(value.as_ref()))
    }

    /// The zero value a field of this kind is written with when unset.
    pub fn zero(kind: ValueKind, width: Width) -> Self {
        match kind {
            ValueKind::Integer => match width {
                Width::Fixed(n) => FieldValue::Integer(Integer::zero(n)),
                Width::Variable { .. } => FieldValue::Integer(Integer::U8(0)),
            },
            ValueKind::String => FieldValue::String(Bytes::new()),
            ValueKind::Raw => FieldValue::Raw(Bytes::new()),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::String(_) => ValueKind::String,
            FieldValue::Raw(_) => ValueKind::Raw,
        }
    }

    /// Short description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(Integer::U8(_)) => "u8",
            FieldValue::Integer(Integer::U16(_)) => "u16",
            FieldValue::Integer(Integer::U32(_)) => "u32",
            FieldValue::String(_) => "c-octet string",
            FieldValue::Raw(_) => "octet string",
        }
    }

    /// Content length in octets, excluding any terminator or padding.
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Integer(i) => i.width(),
            FieldValue::String(b) | FieldValue::Raw(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Octets this value occupies when written with `width`.
    pub fn encoded_len(&self, width: Width) -> usize {
        match (self, width) {
            (FieldValue::Integer(i), _) => i.width(),
            (FieldValue::String(_) | FieldValue::Raw(_), Width::Fixed(n)) => n.max(self.len()),
            (FieldValue::String(s), Width::Variable { .. }) => s.len() + 1,
            (FieldValue::Raw(r), Width::Variable { .. }) => r.len(),
        }
    }

    /// Write the value. Never fails: length and kind are checked when the
    /// value is stored, not here.
    pub fn encode(&self, width: Width, buf: &mut BytesMut) {
        match (self, width) {
            (FieldValue::Integer(i), _) => i.encode(buf),
            (FieldValue::String(b) | FieldValue::Raw(b), Width::Fixed(n)) => {
                buf.put_slice(b);
                buf.put_bytes(0, n.saturating_sub(b.len()));
            }
            (FieldValue::String(s), Width::Variable { .. }) => {
                buf.put_slice(s);
                buf.put_u8(b'\0');
            }
            (FieldValue::Raw(r), Width::Variable { .. }) => buf.put_slice(r),
        }
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Integer(Integer::U8(value))
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Integer(Integer::U16(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(Integer::U32(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(Bytes::from(value))
    }
}

impl From<InterfaceVersion> for FieldValue {
    fn from(value: InterfaceVersion) -> Self {
        FieldValue::from(value as u8)
    }
}

impl From<TypeOfNumber> for FieldValue {
    fn from(value: TypeOfNumber) -> Self {
        FieldValue::from(value as u8)
    }
}

impl From<NumericPlanIndicator> for FieldValue {
    fn from(value: NumericPlanIndicator) -> Self {
        FieldValue::from(value as u8)
    }
}

impl From<PriorityFlag> for FieldValue {
    fn from(value: PriorityFlag) -> Self {
        FieldValue::from(value as u8)
    }
}
