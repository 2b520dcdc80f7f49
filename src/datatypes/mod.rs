mod command_id;
mod command_status;
mod field_id;
mod field_value;
mod interface_version;
mod numeric_plan_indicator;
mod priority_flag;
mod tlv;
mod type_of_number;

pub use command_id::{CommandId, RESPONSE_MARKER};
pub use command_status::CommandStatus;
pub use field_id::FieldId;
pub use field_value::{FieldValue, Integer, ValueKind, Width};
pub use interface_version::InterfaceVersion;
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use priority_flag::PriorityFlag;
pub use tlv::{TLV_HEADER_SIZE, Tlv, TlvList, tags};
pub use type_of_number::TypeOfNumber;
