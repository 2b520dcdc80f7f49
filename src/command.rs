// ABOUTME: The commands a PduBuilder can assemble and the command_id each one writes
// ABOUTME: Bind commands keep the caller's bind variant, every other command stamps its own id

use crate::datatypes::{CommandId, RESPONSE_MARKER};
use crate::error::PduError;
use crate::schema::FieldSchema;
use std::fmt;

/// A PDU type this crate knows how to build.
///
/// `Bind` and `BindResp` cover all three bind variants (receiver, transmitter,
/// transceiver); they share one body layout and the variant is taken from
/// the header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Bind,
    BindResp,
    Unbind,
    UnbindResp,
    EnquireLink,
    EnquireLinkResp,
    GenericNack,
    SubmitSm,
    SubmitSmResp,
    DeliverSm,
    DeliverSmResp,
    QuerySm,
    QuerySmResp,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::Bind,
        Command::BindResp,
        Command::Unbind,
        Command::UnbindResp,
        Command::EnquireLink,
        Command::EnquireLinkResp,
        Command::GenericNack,
        Command::SubmitSm,
        Command::SubmitSmResp,
        Command::DeliverSm,
        Command::DeliverSmResp,
        Command::QuerySm,
        Command::QuerySmResp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Bind => "bind",
            Command::BindResp => "bind_resp",
            Command::Unbind => "unbind",
            Command::UnbindResp => "unbind_resp",
            Command::EnquireLink => "enquire_link",
            Command::EnquireLinkResp => "enquire_link_resp",
            Command::GenericNack => "generic_nack",
            Command::SubmitSm => "submit_sm",
            Command::SubmitSmResp => "submit_sm_resp",
            Command::DeliverSm => "deliver_sm",
            Command::DeliverSmResp => "deliver_sm_resp",
            Command::QuerySm => "query_sm",
            Command::QuerySmResp => "query_sm_resp",
        }
    }

    /// The command_id written for this command, or `None` for the bind
    /// commands whose id depends on the bind variant.
    pub fn command_id(self) -> Option<CommandId> {
        match self {
            Command::Bind | Command::BindResp => None,
            Command::Unbind => Some(CommandId::Unbind),
            Command::UnbindResp => Some(CommandId::UnbindResp),
            Command::EnquireLink => Some(CommandId::EnquireLink),
            Command::EnquireLinkResp => Some(CommandId::EnquireLinkResp),
            Command::GenericNack => Some(CommandId::GenericNack),
            Command::SubmitSm => Some(CommandId::SubmitSm),
            Command::SubmitSmResp => Some(CommandId::SubmitSmResp),
            Command::DeliverSm => Some(CommandId::DeliverSm),
            Command::DeliverSmResp => Some(CommandId::DeliverSmResp),
            Command::QuerySm => Some(CommandId::QuerySm),
            Command::QuerySmResp => Some(CommandId::QuerySmResp),
        }
    }

    pub fn is_response(self) -> bool {
        match self.command_id() {
            Some(id) => id.is_response(),
            None => self == Command::BindResp,
        }
    }

    /// The mandatory field layout of this command.
    pub fn schema(self) -> &'static FieldSchema {
        FieldSchema::for_command(self)
    }

    /// Work out the command_id to write for a caller supplied header id.
    ///
    /// Commands with a single id stamp it, replacing any request id the
    /// caller left in the header. A header id that already carries the
    /// response marker has to be exactly this command's id. Bind commands
    /// keep the caller's id as long as it names a bind variant; the response
    /// marker is not required on `BindResp`.
    pub(crate) fn resolve_command_id(self, header_id: u32) -> Result<u32, PduError> {
        let invalid = PduError::InvalidHeader {
            command: self,
            command_id: header_id,
        };
        let marked = header_id & RESPONSE_MARKER != 0;

        match self.command_id() {
            Some(id) => {
                let id = u32::from(id);
                if marked && header_id != id {
                    return Err(invalid);
                }
                Ok(id)
            }
            None => {
                if marked && !self.is_response() {
                    return Err(invalid);
                }
                match CommandId::try_from(header_id & !RESPONSE_MARKER) {
                    Ok(base) if base.is_bind() => Ok(header_id),
                    _ => Err(invalid),
                }
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_commands_stamp_their_id() {
        assert_eq!(Command::Unbind.resolve_command_id(1), Ok(0x0000_0006));
        assert_eq!(Command::GenericNack.resolve_command_id(1), Ok(0x8000_0000));
        assert_eq!(Command::SubmitSmResp.resolve_command_id(4), Ok(0x8000_0004));
        assert_eq!(Command::QuerySm.resolve_command_id(0), Ok(0x0000_0003));
        assert_eq!(
            Command::SubmitSmResp.resolve_command_id(0x8000_0004),
            Ok(0x8000_0004)
        );
    }

    #[test]
    fn foreign_response_id_is_rejected() {
        assert_eq!(
            Command::SubmitSmResp.resolve_command_id(0x8000_0005),
            Err(PduError::InvalidHeader {
                command: Command::SubmitSmResp,
                command_id: 0x8000_0005,
            })
        );
        assert!(Command::SubmitSm.resolve_command_id(0x8000_0004).is_err());
        assert!(Command::GenericNack.resolve_command_id(0x8000_0015).is_err());
    }

    #[test]
    fn bind_keeps_its_variant() {
        assert_eq!(Command::Bind.resolve_command_id(1), Ok(1));
        assert_eq!(Command::Bind.resolve_command_id(2), Ok(2));
        assert_eq!(Command::Bind.resolve_command_id(9), Ok(9));
        assert_eq!(Command::BindResp.resolve_command_id(1), Ok(1));
        assert_eq!(Command::BindResp.resolve_command_id(0x8000_0009), Ok(0x8000_0009));
    }

    #[test]
    fn bind_rejects_other_ids() {
        assert!(Command::Bind.resolve_command_id(4).is_err());
        assert!(Command::Bind.resolve_command_id(0).is_err());
        assert!(Command::Bind.resolve_command_id(0x8000_0002).is_err());
        assert!(Command::BindResp.resolve_command_id(0x8000_0004).is_err());
    }

    #[test]
    fn response_commands() {
        let responses: Vec<_> = Command::ALL
            .into_iter()
            .filter(|command| command.is_response())
            .collect();
        assert_eq!(
            responses,
            vec![
                Command::BindResp,
                Command::UnbindResp,
                Command::EnquireLinkResp,
                Command::GenericNack,
                Command::SubmitSmResp,
                Command::DeliverSmResp,
                Command::QuerySmResp,
            ]
        );
    }
}
