// ABOUTME: Macros that generate the per-command PduBuilder constructors
// ABOUTME: Commands with a body take an optional raw body, header-only commands take just a header

/// Macro for generating constructors of commands that carry a body
///
/// Each generated constructor takes the header and an optional pre-built
/// raw body, and forwards to `PduBuilder::new` with the given command.
///
/// # Arguments
/// * `$name` - The constructor name (e.g., submit_sm)
/// * `$command` - The Command variant (e.g., Command::SubmitSm)
macro_rules! impl_body_constructors {
    ($($(#[$doc:meta])* $name:ident => $command:expr),* $(,)?) => {
        impl $crate::builder::PduBuilder {
            $(
                $(#[$doc])*
                pub fn $name(
                    header: $crate::header::Header,
                    raw_body: Option<bytes::Bytes>,
                ) -> $crate::error::Result<Self> {
                    Self::new($command, header, raw_body)
                }
            )*
        }
    };
}

/// Macro for generating constructors of header-only commands
///
/// Header-only PDUs have neither mandatory fields nor a raw body, so the
/// generated constructor takes the header alone.
///
/// # Arguments
/// * `$name` - The constructor name (e.g., enquire_link)
/// * `$command` - The Command variant (e.g., Command::EnquireLink)
macro_rules! impl_header_only_constructors {
    ($($(#[$doc:meta])* $name:ident => $command:expr),* $(,)?) => {
        impl $crate::builder::PduBuilder {
            $(
                $(#[$doc])*
                pub fn $name(header: $crate::header::Header) -> $crate::error::Result<Self> {
                    Self::new($command, header, None)
                }
            )*
        }
    };
}

// Make macros available to the rest of the crate
pub(crate) use {impl_body_constructors, impl_header_only_constructors};
