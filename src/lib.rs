//! Schema-driven encoder for SMPP v3.4 PDUs.
//!
//! A [`PduBuilder`] is created per command with a [`Header`], filled with
//! mandatory fields (checked against the command's [`FieldSchema`]) and
//! optional parameters, and then written to an immutable frame through
//! [`Encodable`]. Session handling, transport and body decoding live
//! elsewhere; this crate only produces bytes.
//!
//! # Examples
//!
//! ## Binding as a transmitter
//!
//! ```rust
//! use smpp_pdu::datatypes::{CommandId, InterfaceVersion};
//! use smpp_pdu::{Encodable, FieldId, Header, PduBuilder};
//!
//! let mut bind = PduBuilder::bind(Header::request(CommandId::BindTransmitter, 1), None)?;
//! bind.set_field(FieldId::SystemId, "system_id")?
//!     .set_field(FieldId::Password, "password")?
//!     .set_field(FieldId::InterfaceVersion, InterfaceVersion::SmppV34)?;
//!
//! let frame = bind.to_bytes();
//! assert_eq!(&frame[0..4], &(frame.len() as u32).to_be_bytes());
//! # Ok::<(), smpp_pdu::PduError>(())
//! ```
//!
//! ## Answering a submit_sm with optional parameters
//!
//! ```rust
//! use smpp_pdu::datatypes::{CommandId, CommandStatus, tags};
//! use smpp_pdu::{Encodable, FieldId, Header, PduBuilder};
//!
//! let header = Header::response(CommandId::SubmitSmResp, CommandStatus::Ok, 7);
//! let mut resp = PduBuilder::submit_sm_resp(header, None)?;
//! resp.set_field(FieldId::MessageId, "4f2a")?;
//!
//! let mut deliver = PduBuilder::deliver_sm(Header::request(CommandId::DeliverSm, 8), None)?;
//! deliver.set_tlv_field(tags::RECEIPTED_MESSAGE_ID, &b"4f2a\0"[..])?;
//!
//! assert_eq!(resp.to_bytes().len(), 16 + 5);
//! # Ok::<(), smpp_pdu::PduError>(())
//! ```

pub mod builder;
pub mod command;
pub mod datatypes;
pub mod error;
pub mod header;
mod macros;
pub mod schema;
pub mod writer;


pub use builder::PduBuilder;
pub use command::Command;
pub use datatypes::{FieldId, FieldValue, Tlv};
pub use error::{PduError, Result};
pub use header::Header;
pub use schema::{FieldSchema, FieldSpec};
pub use writer::Encodable;
