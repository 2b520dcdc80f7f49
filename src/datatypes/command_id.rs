use num_enum::TryFromPrimitive;

/// Bit carried by the command_id of every response PDU.
pub const RESPONSE_MARKER: u32 = 0x8000_0000;

/// The command_id values of the PDUs this crate can build.
#[derive(TryFromPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    GenericNack = 0x8000_0000,
    BindReceiver = 0x0000_0001,
    BindReceiverResp = 0x8000_0001,
    BindTransmitter = 0x0000_0002,
    BindTransmitterResp = 0x8000_0002,
    QuerySm = 0x0000_0003,
    QuerySmResp = 0x8000_0003,
    SubmitSm = 0x0000_0004,
    SubmitSmResp = 0x8000_0004,
    DeliverSm = 0x0000_0005,
    DeliverSmResp = 0x8000_0005,
    Unbind = 0x0000_0006,
    UnbindResp = 0x8000_0006,
    BindTransceiver = 0x0000_0009,
    BindTransceiverResp = 0x8000_0009,
    EnquireLink = 0x0000_0015,
    EnquireLinkResp = 0x8000_0015,
}

impl CommandId {
    /// Check if this command_id represents a response PDU
    pub fn is_response(self) -> bool {
        (self as u32) & RESPONSE_MARKER != 0
    }

    /// True for the three bind requests and their responses.
    pub fn is_bind(self) -> bool {
        matches!(
            self,
            CommandId::BindReceiver
                | CommandId::BindReceiverResp
                | CommandId::BindTransmitter
                | CommandId::BindTransmitterResp
                | CommandId::BindTransceiver
                | CommandId::BindTransceiverResp
        )
    }

    /// The response paired with this request. `None` for responses and for
    /// generic_nack, which answers nothing in particular.
    pub fn response(self) -> Option<CommandId> {
        if self.is_response() {
            return None;
        }
        CommandId::try_from(self as u32 | RESPONSE_MARKER).ok()
    }
}

impl From<CommandId> for u32 {
    fn from(id: CommandId) -> u32 {
        id as u32
    }
}
