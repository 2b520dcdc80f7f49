use std::fmt;

/// Identifies a mandatory parameter of an SMPP v3.4 PDU body.
///
/// The same identifier is shared by every command that carries the field;
/// which commands accept it, and where it sits in the body, is decided by
/// [`FieldSchema`](crate::schema::FieldSchema).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    SystemId,
    Password,
    SystemType,
    InterfaceVersion,
    AddrTon,
    AddrNpi,
    AddressRange,
    ServiceType,
    SourceAddrTon,
    SourceAddrNpi,
    SourceAddr,
    DestAddrTon,
    DestAddrNpi,
    DestinationAddr,
    EsmClass,
    ProtocolId,
    PriorityFlag,
    ScheduleDeliveryTime,
    ValidityPeriod,
    RegisteredDelivery,
    ReplaceIfPresentFlag,
    DataCoding,
    SmDefaultMsgId,
    SmLength,
    ShortMessage,
    MessageId,
    FinalDate,
    MessageState,
    ErrorCode,
}

impl FieldId {
    /// The parameter name as written in the SMPP v3.4 specification.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::SystemId => "system_id",
            FieldId::Password => "password",
            FieldId::SystemType => "system_type",
            FieldId::InterfaceVersion => "interface_version",
            FieldId::AddrTon => "addr_ton",
            FieldId::AddrNpi => "addr_npi",
            FieldId::AddressRange => "address_range",
            FieldId::ServiceType => "service_type",
            FieldId::SourceAddrTon => "source_addr_ton",
            FieldId::SourceAddrNpi => "source_addr_npi",
            FieldId::SourceAddr => "source_addr",
            FieldId::DestAddrTon => "dest_addr_ton",
            FieldId::DestAddrNpi => "dest_addr_npi",
            FieldId::DestinationAddr => "destination_addr",
            FieldId::EsmClass => "esm_class",
            FieldId::ProtocolId => "protocol_id",
            FieldId::PriorityFlag => "priority_flag",
            FieldId::ScheduleDeliveryTime => "schedule_delivery_time",
            FieldId::ValidityPeriod => "validity_period",
            FieldId::RegisteredDelivery => "registered_delivery",
            FieldId::ReplaceIfPresentFlag => "replace_if_present_flag",
            FieldId::DataCoding => "data_coding",
            FieldId::SmDefaultMsgId => "sm_default_msg_id",
            FieldId::SmLength => "sm_length",
            FieldId::ShortMessage => "short_message",
            FieldId::MessageId => "message_id",
            FieldId::FinalDate => "final_date",
            FieldId::MessageState => "message_state",
            FieldId::ErrorCode => "error_code",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
