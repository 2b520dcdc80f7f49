use num_enum::TryFromPrimitive;

/// The command_status field of an SMPP response indicates the success or
/// failure of the matching request. Requests carry zero. The encoder never
/// interprets the value; these variants exist so callers can fill response
/// headers without magic numbers.
#[derive(TryFromPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    /// No Error
    Ok = 0x00000000,
    /// Message Length is invalid
    InvalidMsgLength = 0x00000001,
    /// Command Length is invalid
    InvalidCommandLength = 0x00000002,
    /// Invalid Command ID
    InvalidCommandId = 0x00000003,
    /// Incorrect BIND Status for given command
    IncorrectBindStatus = 0x00000004,
    /// ESME Already in Bound State
    AlreadyBoundState = 0x00000005,
    /// Invalid Priority Flag
    InvalidPriorityFlag = 0x00000006,
    /// Invalid Registered Delivery Flag
    InvalidRegisteredDeliveryFlag = 0x00000007,
    /// System Error
    SystemError = 0x00000008,
    /// Invalid Source Address
    InvalidSourceAddress = 0x0000000A,
    /// Invalid Dest Addr
    InvalidDestinationAddress = 0x0000000B,
    /// Message ID is invalid
    InvalidMessageId = 0x0000000C,
    /// Bind Failed
    BindFailed = 0x0000000D,
    /// Invalid Password
    InvalidPassword = 0x0000000E,
    /// Invalid System ID
    InvalidSystemId = 0x0000000F,
    /// Message Queue Full
    MessageQueueFull = 0x00000014,
    /// Invalid Service Type
    InvalidServiceType = 0x00000015,
    /// Invalid esm_class field data
    InvalidEsmClassFieldData = 0x00000043,
    /// submit_sm or submit_multi failed
    SubmitFailed = 0x00000045,
    /// Invalid Source address TON
    InvalidSourceAddressTon = 0x00000048,
    /// Invalid Source address NPI
    InvalidSourceAddressNpi = 0x00000049,
    /// Invalid Destination address TON
    InvalidDestinationAddressTon = 0x00000050,
    /// Invalid Destination address NPI
    InvalidDestinationAddressNpi = 0x00000051,
    /// Invalid system_type field
    InvalidSystemTypeField = 0x00000053,
    /// Throttling error (ESME has exceeded allowed message limits)
    ThrottlingError = 0x00000058,
    /// Invalid Scheduled Delivery Time
    InvalidScheduledDeliveryTime = 0x00000061,
    /// Invalid message validity period (Expiry time)
    InvalidExpiryTime = 0x00000062,
    /// query_sm request failed
    QuerySmRequestFailed = 0x00000067,
    /// Error in the optional part of the PDU Body.
    ErrorInOptionalPartOfPduBody = 0x000000C0,
    /// Optional Parameter not allowed
    OptionalParameterNotAllowed = 0x000000C1,
    /// Invalid Parameter Length.
    InvalidParameterLength = 0x000000C2,
    /// Expected Optional Parameter missing
    ExpectedOptionalParameterMissing = 0x000000C3,
    /// Invalid Optional Parameter Value
    InvalidOptionalParameterValue = 0x000000C4,
    /// Delivery Failure (used for data_sm_resp)
    DeliveryFailed = 0x000000FE,
    /// Unknown Error
    UnknownError = 0x000000FF,
}

impl CommandStatus {
    pub fn is_ok(self) -> bool {
        self == CommandStatus::Ok
    }
}

impl From<CommandStatus> for u32 {
    fn from(status: CommandStatus) -> u32 {
        status as u32
    }
}
