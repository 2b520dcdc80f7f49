// ABOUTME: Error type for PDU construction and header decoding
// ABOUTME: Every variant is raised eagerly by a constructor or setter, never by the writer

use crate::command::Command;
use crate::datatypes::{CommandStatus, FieldId};
use crate::header::HEADER_SIZE;
use thiserror::Error;

/// Errors raised while building a PDU or decoding a header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PduError {
    #[error("Malformed header: need {} bytes, got {available}", HEADER_SIZE)]
    MalformedHeader { available: usize },

    #[error("Field '{field}' of {command} expects {expected}, got {actual}")]
    TypeMismatch {
        command: Command,
        field: FieldId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Field '{field}' is not part of {command}")]
    UnknownField { command: Command, field: FieldId },

    #[error("command_id {command_id:#010x} is not valid for {command}")]
    InvalidHeader { command: Command, command_id: u32 },

    #[error("{command} builder {reason}")]
    InvalidBuilderMode {
        command: Command,
        reason: &'static str,
    },

    #[error("Field '{field}' of {command} is {actual} octets, at most {max} allowed")]
    FieldTooLong {
        command: Command,
        field: FieldId,
        max: usize,
        actual: usize,
    },

    #[error("TLV {tag:#06x} value is {actual} octets, at most 65535 allowed")]
    TlvTooLong { tag: u16, actual: usize },

    #[error("{command} frame would be {actual} octets, more than command_length can hold")]
    FrameTooLong { command: Command, actual: usize },

    #[error("{command} carries no optional parameters")]
    OptionalParametersNotAllowed { command: Command },
}

/// A specialized `Result` type for PDU construction.
pub type Result<T> = std::result::Result<T, PduError>;

/// Convert construction errors to the command_status a peer would answer with
impl PduError {
    pub fn to_command_status(&self) -> CommandStatus {
        match self {
            PduError::MalformedHeader { .. } | PduError::FrameTooLong { .. } => {
                CommandStatus::InvalidCommandLength
            }
            PduError::InvalidHeader { .. } => CommandStatus::InvalidCommandId,
            PduError::FieldTooLong { field, .. } => match field {
                FieldId::SystemId => CommandStatus::InvalidSystemId,
                FieldId::Password => CommandStatus::InvalidPassword,
                FieldId::SystemType => CommandStatus::InvalidSystemTypeField,
                FieldId::ServiceType => CommandStatus::InvalidServiceType,
                FieldId::SourceAddr => CommandStatus::InvalidSourceAddress,
                FieldId::DestinationAddr => CommandStatus::InvalidDestinationAddress,
                FieldId::ShortMessage => CommandStatus::InvalidMsgLength,
                FieldId::MessageId => CommandStatus::InvalidMessageId,
                FieldId::ScheduleDeliveryTime => CommandStatus::InvalidScheduledDeliveryTime,
                FieldId::ValidityPeriod => CommandStatus::InvalidExpiryTime,
                _ => CommandStatus::SystemError,
            },
            PduError::TlvTooLong { .. } => CommandStatus::InvalidParameterLength,
            PduError::OptionalParametersNotAllowed { .. } => {
                CommandStatus::OptionalParameterNotAllowed
            }
            PduError::TypeMismatch { .. }
            | PduError::UnknownField { .. }
            | PduError::InvalidBuilderMode { .. } => CommandStatus::SystemError,
        }
    }
}
