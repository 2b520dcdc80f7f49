// SMPP v3.4 PDU header (16 bytes, common to all PDUs)
//
// Four big-endian u32 values: command_length, command_id, command_status,
// sequence_number. The length is owned by the writer; callers only ever set
// the other three.

use crate::datatypes::{CommandId, CommandStatus, RESPONSE_MARKER};
use crate::error::PduError;
use bytes::{Buf, BufMut, BytesMut};
use std::io::Cursor;

/// Size of the fixed header in octets.
pub const HEADER_SIZE: usize = 16;

/// Maximum PDU size this crate expects peers to accept.
pub const MAX_PDU_SIZE: u32 = 65536; // 64KB

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    command_length: u32,
    pub command_id: u32,
    pub command_status: u32,
    pub sequence_number: u32,
}

impl Header {
    pub const SIZE: usize = HEADER_SIZE;

    pub fn new(command_id: u32, command_status: u32, sequence_number: u32) -> Self {
        Self {
            command_length: 0,
            command_id,
            command_status,
            sequence_number,
        }
    }

    /// Header for a request: status is always zero.
    pub fn request(command_id: CommandId, sequence_number: u32) -> Self {
        Self::new(command_id.into(), CommandStatus::Ok.into(), sequence_number)
    }

    /// Header for a response carrying `status`.
    pub fn response(command_id: CommandId, status: CommandStatus, sequence_number: u32) -> Self {
        Self::new(command_id.into(), status.into(), sequence_number)
    }

    /// The command_length read off the wire. Zero for headers built by hand;
    /// the writer computes the real value when it produces a frame.
    pub fn command_length(&self) -> u32 {
        self.command_length
    }

    pub fn is_response(&self) -> bool {
        self.command_id & RESPONSE_MARKER != 0
    }

    /// The command_id as a known command, if it is one.
    pub fn command(&self) -> Option<CommandId> {
        CommandId::try_from(self.command_id).ok()
    }

    /// The command_status as a known status, if it is one.
    pub fn status(&self) -> Option<CommandStatus> {
        CommandStatus::try_from(self.command_status).ok()
    }

    pub(crate) fn with_command_id(self, command_id: u32) -> Self {
        Self { command_id, ..self }
    }

    /// Decode a header, advancing the cursor past it.
    ///
    /// Only the size is checked; the cursor is left where it was when fewer
    /// than 16 bytes remain.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, PduError> {
        if buf.remaining() < HEADER_SIZE {
            return Err(PduError::MalformedHeader {
                available: buf.remaining(),
            });
        }

        Ok(Header {
            command_length: buf.get_u32(),
            command_id: buf.get_u32(),
            command_status: buf.get_u32(),
            sequence_number: buf.get_u32(),
        })
    }

    /// Encode the header with the supplied command_length.
    pub fn encode(&self, command_length: u32, buf: &mut BytesMut) {
        buf.put_u32(command_length);
        buf.put_u32(self.command_id);
        buf.put_u32(self.command_status);
        buf.put_u32(self.sequence_number);
    }
}
