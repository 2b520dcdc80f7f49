// ABOUTME: Static per-command tables of mandatory fields in wire order
// ABOUTME: Builders validate values against these tables and the writer walks them to lay out bodies

use crate::command::Command;
use crate::datatypes::{FieldId, FieldValue, ValueKind, Width};
use crate::error::PduError;

/// One mandatory field: what it is, what it holds and how wide it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: ValueKind,
    pub width: Width,
    /// When set, an unset value of this field is the length of the named
    /// field (sm_length follows short_message).
    pub length_of: Option<FieldId>,
}

impl FieldSpec {
    /// C-octet string of at most `max` octets including the terminator.
    const fn c_octet_string(id: FieldId, max: usize) -> Self {
        Self {
            id,
            kind: ValueKind::String,
            width: Width::Variable { max },
            length_of: None,
        }
    }

    const fn integer(id: FieldId) -> Self {
        Self {
            id,
            kind: ValueKind::Integer,
            width: Width::Fixed(1),
            length_of: None,
        }
    }

    const fn length_of(id: FieldId, target: FieldId) -> Self {
        Self {
            length_of: Some(target),
            ..Self::integer(id)
        }
    }

    const fn octet_string(id: FieldId, max: usize) -> Self {
        Self {
            id,
            kind: ValueKind::Raw,
            width: Width::Variable { max },
            length_of: None,
        }
    }

    /// Short description used in error messages.
    pub fn type_name(&self) -> &'static str {
        match (self.kind, self.width) {
            (ValueKind::Integer, Width::Fixed(2)) => "u16",
            (ValueKind::Integer, Width::Fixed(4)) => "u32",
            (ValueKind::Integer, _) => "u8",
            (ValueKind::String, Width::Fixed(_)) => "fixed-width string",
            (ValueKind::String, Width::Variable { .. }) => "c-octet string",
            (ValueKind::Raw, _) => "octet string",
        }
    }

    /// Largest content, in octets, a value of this field may have.
    pub fn max_len(&self) -> usize {
        match (self.kind, self.width) {
            (ValueKind::String, Width::Variable { max }) => max.saturating_sub(1),
            (_, Width::Variable { max }) => max,
            (_, Width::Fixed(n)) => n,
        }
    }

    /// Value written when the caller never set this field.
    pub fn zero_value(&self) -> FieldValue {
        FieldValue::zero(self.kind, self.width)
    }

    /// Convert an accepted value to the form this field is written in.
    pub fn normalize(&self, value: FieldValue) -> FieldValue {
        match value {
            FieldValue::String(text) if self.kind == ValueKind::Raw => FieldValue::Raw(text),
            value => value,
        }
    }

    /// Check that `value` can be stored in this field.
    pub fn check(&self, command: Command, value: &FieldValue) -> Result<(), PduError> {
        let mismatch = |actual| PduError::TypeMismatch {
            command,
            field: self.id,
            expected: self.type_name(),
            actual,
        };

        match value {
            FieldValue::Integer(i) => {
                if self.kind != ValueKind::Integer || self.width != Width::Fixed(i.width()) {
                    return Err(mismatch(value.type_name()));
                }
            }
            // text is accepted for octet string fields and written without a terminator
            FieldValue::String(_) if self.kind == ValueKind::Raw => {}
            FieldValue::String(s) => {
                if self.kind != ValueKind::String {
                    return Err(mismatch(value.type_name()));
                }
                // an embedded NUL would end the string early on the wire
                if s.contains(&0) {
                    return Err(mismatch("octet string"));
                }
            }
            FieldValue::Raw(_) => {
                if self.kind != ValueKind::Raw {
                    return Err(mismatch(value.type_name()));
                }
            }
        }

        if value.len() > self.max_len() {
            return Err(PduError::FieldTooLong {
                command,
                field: self.id,
                max: self.max_len(),
                actual: value.len(),
            });
        }

        Ok(())
    }
}

/// The ordered mandatory fields of one command.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSchema {
    command: Command,
    fields: &'static [FieldSpec],
    optional_parameters: bool,
}

const BIND_FIELDS: &[FieldSpec] = &[
    FieldSpec::c_octet_string(FieldId::SystemId, 16),
    FieldSpec::c_octet_string(FieldId::Password, 9),
    FieldSpec::c_octet_string(FieldId::SystemType, 13),
    FieldSpec::integer(FieldId::InterfaceVersion),
    FieldSpec::integer(FieldId::AddrTon),
    FieldSpec::integer(FieldId::AddrNpi),
    FieldSpec::c_octet_string(FieldId::AddressRange, 41),
];

const BIND_RESP_FIELDS: &[FieldSpec] = &[FieldSpec::c_octet_string(FieldId::SystemId, 16)];

// submit_sm and deliver_sm share one layout
const SHORT_MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::c_octet_string(FieldId::ServiceType, 6),
    FieldSpec::integer(FieldId::SourceAddrTon),
    FieldSpec::integer(FieldId::SourceAddrNpi),
    FieldSpec::c_octet_string(FieldId::SourceAddr, 21),
    FieldSpec::integer(FieldId::DestAddrTon),
    FieldSpec::integer(FieldId::DestAddrNpi),
    FieldSpec::c_octet_string(FieldId::DestinationAddr, 21),
    FieldSpec::integer(FieldId::EsmClass),
    FieldSpec::integer(FieldId::ProtocolId),
    FieldSpec::integer(FieldId::PriorityFlag),
    FieldSpec::c_octet_string(FieldId::ScheduleDeliveryTime, 17),
    FieldSpec::c_octet_string(FieldId::ValidityPeriod, 17),
    FieldSpec::integer(FieldId::RegisteredDelivery),
    FieldSpec::integer(FieldId::ReplaceIfPresentFlag),
    FieldSpec::integer(FieldId::DataCoding),
    FieldSpec::integer(FieldId::SmDefaultMsgId),
    FieldSpec::length_of(FieldId::SmLength, FieldId::ShortMessage),
    FieldSpec::octet_string(FieldId::ShortMessage, 254),
];

const MESSAGE_ID_FIELDS: &[FieldSpec] = &[FieldSpec::c_octet_string(FieldId::MessageId, 65)];

const QUERY_SM_FIELDS: &[FieldSpec] = &[
    FieldSpec::c_octet_string(FieldId::MessageId, 65),
    FieldSpec::integer(FieldId::SourceAddrTon),
    FieldSpec::integer(FieldId::SourceAddrNpi),
    FieldSpec::c_octet_string(FieldId::SourceAddr, 21),
];

const QUERY_SM_RESP_FIELDS: &[FieldSpec] = &[
    FieldSpec::c_octet_string(FieldId::MessageId, 65),
    FieldSpec::c_octet_string(FieldId::FinalDate, 17),
    FieldSpec::integer(FieldId::MessageState),
    FieldSpec::integer(FieldId::ErrorCode),
];

const fn schema(command: Command, fields: &'static [FieldSpec]) -> FieldSchema {
    FieldSchema {
        command,
        fields,
        optional_parameters: true,
    }
}

// header-only PDUs must stay 16 bytes long, so they take no TLVs either
const fn header_only(command: Command) -> FieldSchema {
    FieldSchema {
        command,
        fields: &[],
        optional_parameters: false,
    }
}

static BIND: FieldSchema = schema(Command::Bind, BIND_FIELDS);
static BIND_RESP: FieldSchema = schema(Command::BindResp, BIND_RESP_FIELDS);
static UNBIND: FieldSchema = header_only(Command::Unbind);
static UNBIND_RESP: FieldSchema = header_only(Command::UnbindResp);
static ENQUIRE_LINK: FieldSchema = header_only(Command::EnquireLink);
static ENQUIRE_LINK_RESP: FieldSchema = header_only(Command::EnquireLinkResp);
static GENERIC_NACK: FieldSchema = header_only(Command::GenericNack);
static SUBMIT_SM: FieldSchema = schema(Command::SubmitSm, SHORT_MESSAGE_FIELDS);
static SUBMIT_SM_RESP: FieldSchema = schema(Command::SubmitSmResp, MESSAGE_ID_FIELDS);
static DELIVER_SM: FieldSchema = schema(Command::DeliverSm, SHORT_MESSAGE_FIELDS);
static DELIVER_SM_RESP: FieldSchema = schema(Command::DeliverSmResp, MESSAGE_ID_FIELDS);
static QUERY_SM: FieldSchema = schema(Command::QuerySm, QUERY_SM_FIELDS);
static QUERY_SM_RESP: FieldSchema = schema(Command::QuerySmResp, QUERY_SM_RESP_FIELDS);

impl FieldSchema {
    /// The table for `command`. Tables are `'static` and never change, so
    /// any number of builders on any number of threads can share them.
    pub fn for_command(command: Command) -> &'static FieldSchema {
        match command {
            Command::Bind => &BIND,
            Command::BindResp => &BIND_RESP,
            Command::Unbind => &UNBIND,
            Command::UnbindResp => &UNBIND_RESP,
            Command::EnquireLink => &ENQUIRE_LINK,
            Command::EnquireLinkResp => &ENQUIRE_LINK_RESP,
            Command::GenericNack => &GENERIC_NACK,
            Command::SubmitSm => &SUBMIT_SM,
            Command::SubmitSmResp => &SUBMIT_SM_RESP,
            Command::DeliverSm => &DELIVER_SM,
            Command::DeliverSmResp => &DELIVER_SM_RESP,
            Command::QuerySm => &QUERY_SM,
            Command::QuerySmResp => &QUERY_SM_RESP,
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Mandatory fields in wire order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True for header-only commands.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn accepts_optional_parameters(&self) -> bool {
        self.optional_parameters
    }

    pub fn get(&self, field: FieldId) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.id == field)
    }

    /// Wire position of `field` among the mandatory fields.
    pub fn position(&self, field: FieldId) -> Option<usize> {
        self.fields.iter().position(|spec| spec.id == field)
    }

    /// Look up `field` and check `value` against it.
    pub fn validate(&self, field: FieldId, value: &FieldValue) -> Result<&'static FieldSpec, PduError> {
        let spec = self.get(field).ok_or(PduError::UnknownField {
            command: self.command,
            field,
        })?;
        spec.check(self.command, value)?;
        Ok(spec)
    }
}
