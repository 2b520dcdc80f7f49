// ABOUTME: PduBuilder assembles one PDU from a header, schema-checked fields and optional TLVs
// ABOUTME: A builder either follows its command's schema or carries an opaque raw body, never both

use crate::command::Command;
use crate::datatypes::{FieldId, FieldValue, Integer, Tlv, TlvList, Width};
use crate::error::{PduError, Result};
use crate::header::{HEADER_SIZE, Header};
use crate::macros::{impl_body_constructors, impl_header_only_constructors};
use crate::schema::{FieldSchema, FieldSpec};
use crate::writer::Encodable;
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Body {
    Fields {
        values: HashMap<FieldId, FieldValue>,
        tlvs: TlvList,
    },
    Raw(Bytes),
}

/// Builder for a single SMPP PDU.
///
/// Every value is validated as it is set, so a builder that exists can always
/// be written. Fields are written in schema order whatever order they were
/// set in; fields never set are written as the zero value of their kind.
///
/// Writing (see [`Encodable`](crate::writer::Encodable)) only borrows the
/// builder. Changing it afterwards and writing again yields a new, independent
/// frame; frames already produced are unaffected.
///
/// ```
/// use smpp_pdu::{Encodable, FieldId, Header, PduBuilder};
///
/// let mut pdu = PduBuilder::submit_sm(Header::new(4, 0, 1), None)?;
/// pdu.set_field(FieldId::SourceAddr, "source-address")?
///     .set_field(FieldId::DestinationAddr, "destination-address")?
///     .set_field(FieldId::ShortMessage, "ceci est un sms")?;
///
/// let frame = pdu.to_bytes();
/// assert_eq!(frame.len(), 0x51);
/// # Ok::<(), smpp_pdu::PduError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PduBuilder {
    command: Command,
    header: Header,
    body: Body,
}

impl PduBuilder {
    /// Create a builder for `command`.
    ///
    /// With `raw_body` set the builder writes those octets verbatim after the
    /// header and refuses fields and TLVs. Header-only commands accept no raw
    /// body. The header's command_id is resolved as described on
    /// [`Command`]: fixed commands stamp their own id, bind commands keep the
    /// caller's bind variant.
    pub fn new(command: Command, header: Header, raw_body: Option<Bytes>) -> Result<Self> {
        let command_id = command.resolve_command_id(header.command_id).inspect_err(|_| {
            debug!(
                "Rejecting {} header with command_id {:#010x}",
                command, header.command_id
            );
        })?;

        let body = match raw_body {
            Some(_) if command.schema().is_empty() => {
                return Err(PduError::InvalidBuilderMode {
                    command,
                    reason: "has no body and cannot take a raw one",
                });
            }
            Some(raw) => {
                check_frame_len(command, HEADER_SIZE, raw.len())?;
                Body::Raw(raw)
            }
            None => Body::Fields {
                values: HashMap::new(),
                tlvs: TlvList::new(),
            },
        };

        Ok(Self {
            command,
            header: header.with_command_id(command_id),
            body,
        })
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// The header as it will be written, with the resolved command_id.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn schema(&self) -> &'static FieldSchema {
        self.command.schema()
    }

    /// True when the builder carries an opaque raw body.
    pub fn is_raw(&self) -> bool {
        matches!(self.body, Body::Raw(_))
    }

    pub fn raw_body(&self) -> Option<&Bytes> {
        match &self.body {
            Body::Raw(raw) => Some(raw),
            Body::Fields { .. } => None,
        }
    }

    /// The value explicitly set for `field`, if any.
    pub fn field(&self, field: FieldId) -> Option<&FieldValue> {
        match &self.body {
            Body::Fields { values, .. } => values.get(&field),
            Body::Raw(_) => None,
        }
    }

    /// Optional parameters in the order they were added.
    pub fn tlvs(&self) -> &[Tlv] {
        match &self.body {
            Body::Fields { tlvs, .. } => tlvs.as_slice(),
            Body::Raw(_) => &[],
        }
    }

    /// Set a mandatory field. Setting the same field twice keeps the last
    /// value.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<FieldValue>) -> Result<&mut Self> {
        let value = value.into();
        let command = self.command;

        let Body::Fields { values, .. } = &mut self.body else {
            debug!("Rejecting {} on {} raw-body builder", field, command);
            return Err(PduError::InvalidBuilderMode {
                command,
                reason: "carries a raw body and cannot take fields",
            });
        };

        let value = command
            .schema()
            .validate(field, &value)
            .inspect_err(|err| debug!("Rejecting {} for {}: {}", field, command, err))?
            .normalize(value);

        trace!("{}: {} = {:?}", command, field, value);
        values.insert(field, value);
        Ok(self)
    }

    /// Append an optional parameter whose length is taken from `value`.
    pub fn set_tlv_field(&mut self, tag: u16, value: impl Into<Bytes>) -> Result<&mut Self> {
        let tlv = Tlv::new(tag, value)?;
        self.set_tlv(tlv)
    }

    /// Append an optional parameter with a caller supplied length, even one
    /// that disagrees with the value.
    pub fn set_raw_tlv_field(
        &mut self,
        tag: u16,
        length: u16,
        value: impl Into<Bytes>,
    ) -> Result<&mut Self> {
        self.set_tlv(Tlv::raw(tag, length, value))
    }

    /// Append a pre-built optional parameter. Entries are never replaced:
    /// repeating a tag writes it twice.
    pub fn set_tlv(&mut self, tlv: Tlv) -> Result<&mut Self> {
        let command = self.command;
        let current = self.encoded_size();

        let Body::Fields { tlvs, .. } = &mut self.body else {
            return Err(PduError::InvalidBuilderMode {
                command,
                reason: "carries a raw body and cannot take optional parameters",
            });
        };

        if !command.schema().accepts_optional_parameters() {
            debug!("Rejecting TLV {:#06x} on {}", tlv.tag, command);
            return Err(PduError::OptionalParametersNotAllowed { command });
        }

        check_frame_len(command, current, tlv.encoded_size())?;

        if !tlv.is_consistent() {
            debug!(
                "{}: TLV {:#06x} declares {} octets but carries {}",
                command,
                tlv.tag,
                tlv.length,
                tlv.value.len()
            );
        }

        trace!("{}: TLV {:#06x} ({} octets)", command, tlv.tag, tlv.value.len());
        tlvs.push(tlv);
        Ok(self)
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    /// The value the writer emits for `spec`: the one set by the caller, the
    /// derived length for length fields, or the zero value.
    pub(crate) fn resolve<'a>(
        spec: &FieldSpec,
        values: &'a HashMap<FieldId, FieldValue>,
    ) -> Cow<'a, FieldValue> {
        if let Some(value) = values.get(&spec.id) {
            return Cow::Borrowed(value);
        }

        match (spec.length_of, spec.width) {
            (Some(target), Width::Fixed(width)) => {
                let len = values.get(&target).map_or(0, FieldValue::len);
                Cow::Owned(FieldValue::Integer(Integer::saturating(width, len)))
            }
            _ => Cow::Owned(spec.zero_value()),
        }
    }
}

/// Refuse growth that would push the frame past what command_length can express.
fn check_frame_len(command: Command, current: usize, extra: usize) -> Result<()> {
    match current.checked_add(extra) {
        Some(total) if u32::try_from(total).is_ok() => Ok(()),
        total => {
            let actual = total.unwrap_or(usize::MAX);
            debug!("Rejecting {} frame of {} octets", command, actual);
            Err(PduError::FrameTooLong { command, actual })
        }
    }
}

impl_body_constructors! {
    /// bind_receiver, bind_transmitter or bind_transceiver, picked by the header's command_id.
    bind => Command::Bind,
    /// Response to any of the three binds; the header's command_id is written as given.
    bind_resp => Command::BindResp,
    submit_sm => Command::SubmitSm,
    submit_sm_resp => Command::SubmitSmResp,
    deliver_sm => Command::DeliverSm,
    deliver_sm_resp => Command::DeliverSmResp,
    query_sm => Command::QuerySm,
    query_sm_resp => Command::QuerySmResp,
}

impl_header_only_constructors! {
    unbind => Command::Unbind,
    unbind_resp => Command::UnbindResp,
    enquire_link => Command::EnquireLink,
    enquire_link_resp => Command::EnquireLinkResp,
    /// generic_nack always goes out as 0x80000000 with the caller's status and sequence.
    generic_nack => Command::GenericNack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{InterfaceVersion, TypeOfNumber, tags};

    fn submit_sm() -> PduBuilder {
        PduBuilder::submit_sm(Header::new(4, 0, 1), None).unwrap()
    }

    #[test]
    fn constructor_resolves_command_id() {
        let pdu = PduBuilder::submit_sm_resp(Header::new(4, 0, 1), None).unwrap();
        assert_eq!(pdu.header().command_id, 0x8000_0004);
        assert_eq!(pdu.command(), Command::SubmitSmResp);

        let pdu = PduBuilder::bind(Header::new(2, 0, 1), None).unwrap();
        assert_eq!(pdu.header().command_id, 2);
    }

    #[test]
    fn constructor_rejects_mismatched_response_id() {
        let result = PduBuilder::deliver_sm_resp(Header::new(0x8000_0004, 0, 1), None);
        assert_eq!(
            result,
            Err(PduError::InvalidHeader {
                command: Command::DeliverSmResp,
                command_id: 0x8000_0004,
            })
        );
    }

    #[test]
    fn set_field_records_value() {
        let mut pdu = submit_sm();
        pdu.set_field(FieldId::SourceAddrTon, TypeOfNumber::International)
            .unwrap();

        assert_eq!(
            pdu.field(FieldId::SourceAddrTon),
            Some(&FieldValue::from(1u8))
        );
        assert_eq!(pdu.field(FieldId::DestAddrTon), None);
    }

    #[test]
    fn set_field_last_value_wins() {
        let mut pdu = submit_sm();
        pdu.set_field(FieldId::SourceAddr, "first").unwrap();
        pdu.set_field(FieldId::SourceAddr, "second").unwrap();
        assert_eq!(pdu.field(FieldId::SourceAddr), Some(&FieldValue::from("second")));
    }

    #[test]
    fn set_field_validates_eagerly() {
        let mut pdu = PduBuilder::bind(Header::new(1, 0, 1), None).unwrap();

        assert!(matches!(
            pdu.set_field(FieldId::ShortMessage, FieldValue::raw("x")),
            Err(PduError::UnknownField { .. })
        ));
        assert!(matches!(
            pdu.set_field(FieldId::InterfaceVersion, "34"),
            Err(PduError::TypeMismatch { .. })
        ));
        assert!(matches!(
            pdu.set_field(FieldId::SystemId, "a".repeat(16)),
            Err(PduError::FieldTooLong { .. })
        ));

        // rejected values leave no trace
        assert_eq!(pdu.field(FieldId::SystemId), None);
        pdu.set_field(FieldId::InterfaceVersion, InterfaceVersion::SmppV34)
            .unwrap();
    }

    #[test]
    fn raw_body_mode_refuses_fields_and_tlvs() {
        let mut pdu =
            PduBuilder::submit_sm(Header::new(4, 0, 1), Some(Bytes::from_static(b"\x00"))).unwrap();
        assert!(pdu.is_raw());
        assert_eq!(pdu.raw_body(), Some(&Bytes::from_static(b"\x00")));

        assert!(matches!(
            pdu.set_field(FieldId::SourceAddr, "x"),
            Err(PduError::InvalidBuilderMode { command: Command::SubmitSm, .. })
        ));
        assert!(matches!(
            pdu.set_tlv_field(tags::USER_MESSAGE_REFERENCE, Bytes::from_static(&[0, 1])),
            Err(PduError::InvalidBuilderMode { .. })
        ));
        assert!(pdu.tlvs().is_empty());
    }

    #[test]
    fn header_only_commands_take_nothing() {
        assert!(matches!(
            PduBuilder::new(Command::Unbind, Header::new(6, 0, 1), Some(Bytes::new())),
            Err(PduError::InvalidBuilderMode { .. })
        ));

        let mut pdu = PduBuilder::enquire_link(Header::new(0x15, 0, 1)).unwrap();
        assert!(matches!(
            pdu.set_field(FieldId::MessageId, "1"),
            Err(PduError::UnknownField { .. })
        ));
        assert_eq!(
            pdu.set_tlv_field(0x1400, Bytes::from_static(b"x")).err(),
            Some(PduError::OptionalParametersNotAllowed {
                command: Command::EnquireLink
            })
        );
    }

    #[test]
    fn frame_length_must_fit_command_length() {
        let max = u32::MAX as usize;
        assert_eq!(check_frame_len(Command::DeliverSm, HEADER_SIZE, max - HEADER_SIZE), Ok(()));
        assert_eq!(
            check_frame_len(Command::DeliverSm, HEADER_SIZE, max),
            Err(PduError::FrameTooLong {
                command: Command::DeliverSm,
                actual: max + HEADER_SIZE,
            })
        );
        assert!(matches!(
            check_frame_len(Command::SubmitSm, usize::MAX, 1),
            Err(PduError::FrameTooLong { actual: usize::MAX, .. })
        ));
    }

    #[test]
    fn short_message_accepts_text() {
        let mut pdu = submit_sm();
        pdu.set_field(FieldId::ShortMessage, "ceci est un sms").unwrap();
        assert_eq!(
            pdu.field(FieldId::ShortMessage),
            Some(&FieldValue::raw("ceci est un sms"))
        );
    }

    #[test]
    fn tlvs_append_in_order() {
        let mut pdu = submit_sm();
        pdu.set_tlv_field(tags::SOURCE_PORT, Bytes::from_static(&[0x1F, 0x90]))
            .unwrap()
            .set_raw_tlv_field(tags::SOURCE_PORT, 9, Bytes::from_static(&[0x00]))
            .unwrap();

        let tlvs = pdu.tlvs();
        assert_eq!(tlvs.len(), 2);
        assert_eq!(tlvs[0].length, 2);
        assert_eq!(tlvs[1].length, 9);
        assert!(!tlvs[1].is_consistent());
    }

    #[test]
    fn sm_length_follows_short_message_until_set() {
        let spec = *FieldSchema::for_command(Command::SubmitSm)
            .get(FieldId::SmLength)
            .unwrap();

        let mut pdu = submit_sm();
        pdu.set_field(FieldId::ShortMessage, FieldValue::raw("hello"))
            .unwrap();
        let Body::Fields { values, .. } = pdu.body() else {
            panic!("expected schema body");
        };
        assert_eq!(*PduBuilder::resolve(&spec, values), FieldValue::from(5u8));

        pdu.set_field(FieldId::SmLength, 2u8).unwrap();
        let Body::Fields { values, .. } = pdu.body() else {
            panic!("expected schema body");
        };
        assert_eq!(*PduBuilder::resolve(&spec, values), FieldValue::from(2u8));
    }
}
