// ABOUTME: Serializes a PduBuilder into its final wire frame
// ABOUTME: Header, mandatory fields in schema order, then TLVs; command_length is patched in last

use crate::builder::{Body, PduBuilder};
use crate::header::{HEADER_SIZE, MAX_PDU_SIZE};
use bytes::{Bytes, BytesMut};
use tracing::{trace, warn};

/// Trait for types that can be encoded to bytes
pub trait Encodable {
    /// Append the encoded frame to the buffer
    fn encode(&self, buf: &mut BytesMut);

    /// Calculate the encoded size without actually encoding
    fn encoded_size(&self) -> usize;

    /// Convert to an immutable frame (convenience method)
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_size());
        self.encode(&mut buf);
        buf.freeze()
    }
}

impl Encodable for PduBuilder {
    fn encode(&self, buf: &mut BytesMut) {
        let start = buf.len();

        // Write junk data that we'll replace later with the actual length
        self.header().encode(0, buf);

        match self.body() {
            Body::Fields { values, tlvs } => {
                for spec in self.schema().fields() {
                    PduBuilder::resolve(spec, values).encode(spec.width, buf);
                }
                tlvs.encode(buf);
            }
            Body::Raw(raw) => buf.extend_from_slice(raw),
        }

        // builders refuse bodies that would not fit, so this never truncates
        let length = (buf.len() - start) as u32;
        buf[start..start + 4].copy_from_slice(&length.to_be_bytes());

        if length > MAX_PDU_SIZE {
            warn!(
                "{} frame is {} bytes, above the {} byte limit most peers enforce",
                self.command(),
                length,
                MAX_PDU_SIZE
            );
        }
        trace!(
            "Wrote {} frame: {} bytes, sequence {}",
            self.command(),
            length,
            self.header().sequence_number
        );
    }

    fn encoded_size(&self) -> usize {
        let body = match self.body() {
            Body::Fields { values, tlvs } => {
                self.schema()
                    .fields()
                    .iter()
                    .map(|spec| PduBuilder::resolve(spec, values).encoded_len(spec.width))
                    .sum::<usize>()
                    + tlvs.encoded_size()
            }
            Body::Raw(raw) => raw.len(),
        };

        HEADER_SIZE + body
    }
}
