use crate::error::PduError;
use bytes::{BufMut, Bytes, BytesMut};
use std::slice;

/// Size of the tag and length fields that precede every TLV value.
pub const TLV_HEADER_SIZE: usize = 4;

/// An optional parameter appended after the mandatory fields of a PDU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tlv {
    /// The Tag field is used to uniquely identify the particular optional parameter in question.
    pub tag: u16,

    /// The Length field indicates the length of the Value field in octets.
    /// Note that this length does not include the length of the Tag and Length fields.
    pub length: u16,

    /// The Value field contains the actual data for the optional parameter in question.
    pub value: Bytes,
}

impl Tlv {
    /// Build a TLV whose length is taken from the value.
    pub fn new(tag: u16, value: impl Into<Bytes>) -> Result<Self, PduError> {
        let value = value.into();
        let length = u16::try_from(value.len()).map_err(|_| PduError::TlvTooLong {
            tag,
            actual: value.len(),
        })?;

        Ok(Self { tag, length, value })
    }

    /// Build a TLV with a caller supplied length, even one that disagrees with
    /// the value. Only useful for probing how a peer copes with bad input.
    pub fn raw(tag: u16, length: u16, value: impl Into<Bytes>) -> Self {
        Self {
            tag,
            length,
            value: value.into(),
        }
    }

    /// True when the declared length matches the value.
    pub fn is_consistent(&self) -> bool {
        usize::from(self.length) == self.value.len()
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16(self.tag);
        buf.put_u16(self.length);
        buf.put_slice(&self.value);
    }

    pub fn encoded_size(&self) -> usize {
        TLV_HEADER_SIZE + self.value.len()
    }
}

/// Optional parameters in insertion order. Duplicate tags are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlvList {
    entries: Vec<Tlv>,
}

impl TlvList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tlv: Tlv) {
        self.entries.push(tlv);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Tlv> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Tlv] {
        &self.entries
    }

    /// Every entry carrying `tag`, in insertion order.
    pub fn find(&self, tag: u16) -> impl Iterator<Item = &Tlv> {
        self.entries.iter().filter(move |tlv| tlv.tag == tag)
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        for tlv in &self.entries {
            tlv.encode(buf);
        }
    }

    pub fn encoded_size(&self) -> usize {
        self.entries.iter().map(Tlv::encoded_size).sum()
    }
}

impl<'a> IntoIterator for &'a TlvList {
    type Item = &'a Tlv;
    type IntoIter = slice::Iter<'a, Tlv>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// SMPP v3.4 optional parameter tags (Section 5.3.2).
pub mod tags {
    pub const DEST_ADDR_SUBUNIT: u16 = 0x0005;
    pub const DEST_NETWORK_TYPE: u16 = 0x0006;
    pub const DEST_BEARER_TYPE: u16 = 0x0007;
    pub const DEST_TELEMATICS_ID: u16 = 0x0008;
    pub const SOURCE_ADDR_SUBUNIT: u16 = 0x000D;
    pub const SOURCE_NETWORK_TYPE: u16 = 0x000E;
    pub const SOURCE_BEARER_TYPE: u16 = 0x000F;
    pub const SOURCE_TELEMATICS_ID: u16 = 0x0010;
    pub const QOS_TIME_TO_LIVE: u16 = 0x0017;
    pub const PAYLOAD_TYPE: u16 = 0x0019;
    pub const ADDITIONAL_STATUS_INFO_TEXT: u16 = 0x001D;
    pub const RECEIPTED_MESSAGE_ID: u16 = 0x001E;
    pub const MS_MSG_WAIT_FACILITIES: u16 = 0x0030;
    pub const PRIVACY_INDICATOR: u16 = 0x0201;
    pub const SOURCE_SUBADDRESS: u16 = 0x0202;
    pub const DEST_SUBADDRESS: u16 = 0x0203;
    pub const USER_MESSAGE_REFERENCE: u16 = 0x0204;
    pub const USER_RESPONSE_CODE: u16 = 0x0205;
    pub const SOURCE_PORT: u16 = 0x020A;
    pub const DESTINATION_PORT: u16 = 0x020B;
    pub const SAR_MSG_REF_NUM: u16 = 0x020C;
    pub const LANGUAGE_INDICATOR: u16 = 0x020D;
    pub const SAR_TOTAL_SEGMENTS: u16 = 0x020E;
    pub const SAR_SEGMENT_SEQNUM: u16 = 0x020F;
    pub const SC_INTERFACE_VERSION: u16 = 0x0210;
    pub const CALLBACK_NUM_PRES_IND: u16 = 0x0302;
    pub const CALLBACK_NUM_ATAG: u16 = 0x0303;
    pub const NUMBER_OF_MESSAGES: u16 = 0x0304;
    pub const CALLBACK_NUM: u16 = 0x0381;
    pub const DPF_RESULT: u16 = 0x0420;
    pub const SET_DPF: u16 = 0x0421;
    pub const MS_AVAILABILITY_STATUS: u16 = 0x0422;
    pub const NETWORK_ERROR_CODE: u16 = 0x0423;
    pub const MESSAGE_PAYLOAD: u16 = 0x0424;
    pub const DELIVERY_FAILURE_REASON: u16 = 0x0425;
    pub const MORE_MESSAGES_TO_SEND: u16 = 0x0426;
    pub const MESSAGE_STATE: u16 = 0x0427;
    pub const USSD_SERVICE_OP: u16 = 0x0501;
    pub const DISPLAY_TIME: u16 = 0x1201;
    pub const SMS_SIGNAL: u16 = 0x1203;
    pub const MS_VALIDITY: u16 = 0x1204;
    pub const ALERT_ON_MESSAGE_DELIVERY: u16 = 0x130C;
    pub const ITS_REPLY_TYPE: u16 = 0x1380;
    pub const ITS_SESSION_INFO: u16 = 0x1383;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validating_tlv_derives_length() {
        let tlv = Tlv::new(tags::SC_INTERFACE_VERSION, Bytes::from_static(&[0x34])).unwrap();
        assert_eq!(tlv.length, 1);
        assert!(tlv.is_consistent());

        let mut buf = BytesMut::new();
        tlv.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x02, 0x10, 0x00, 0x01, 0x34]);
        assert_eq!(tlv.encoded_size(), 5);
    }

    #[test]
    fn raw_tlv_keeps_declared_length() {
        let tlv = Tlv::raw(tags::USER_MESSAGE_REFERENCE, 7, Bytes::from_static(&[0x00, 0x01]));
        assert!(!tlv.is_consistent());

        let mut buf = BytesMut::new();
        tlv.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x02, 0x04, 0x00, 0x07, 0x00, 0x01]);
    }

    #[test]
    fn oversized_value_is_rejected() {
        let value = vec![0u8; usize::from(u16::MAX) + 1];
        let result = Tlv::new(tags::MESSAGE_PAYLOAD, value);
        assert!(matches!(
            result,
            Err(PduError::TlvTooLong { tag: tags::MESSAGE_PAYLOAD, actual: 65536 })
        ));
    }

    #[test]
    fn list_keeps_duplicates_in_order() {
        let mut list = TlvList::new();
        list.push(Tlv::new(0x1400, Bytes::from_static(b"a")).unwrap());
        list.push(Tlv::new(0x1401, Bytes::from_static(b"b")).unwrap());
        list.push(Tlv::new(0x1400, Bytes::from_static(b"c")).unwrap());

        assert_eq!(list.len(), 3);
        let values: Vec<_> = list.find(0x1400).map(|tlv| tlv.value.clone()).collect();
        assert_eq!(values, vec![Bytes::from_static(b"a"), Bytes::from_static(b"c")]);

        let mut buf = BytesMut::new();
        list.encode(&mut buf);
        assert_eq!(buf.len(), list.encoded_size());
        assert_eq!(
            buf.as_ref(),
            &[
                0x14, 0x00, 0x00, 0x01, b'a', //
                0x14, 0x01, 0x00, 0x01, b'b', //
                0x14, 0x00, 0x00, 0x01, b'c',
            ]
        );
    }
}
