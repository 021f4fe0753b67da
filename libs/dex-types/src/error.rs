use soroban_sdk::contracterror;

/// Errors surfaced by the factory, the pools and the context guard.
///
/// Codes are grouped by [`ErrorKind`]: 1xx precondition, 2xx authorization,
/// 3xx execution context.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    IdenticalTokens = 100,
    NullToken = 101,
    FeeNotEnabled = 102,
    PoolExists = 103,
    FeeTooHigh = 104,
    InvalidTickSpacing = 105,
    FeeAlreadyEnabled = 106,
    TokenOrder = 107,
    TickNotOnSpacing = 108,
    InvalidTickRange = 109,
    TickOutOfBounds = 110,
    LiquidityOverflow = 111,
    InsufficientLiquidity = 112,
    ZeroAmount = 113,
    InvalidSearchWindow = 114,

    NotOwner = 200,

    /// Guarded entry point reached under an identity it was not deployed as
    DelegatedCall = 300,
    /// Home identity was already captured for this instance
    AlreadyCaptured = 301,
}

/// Failure category of an [`Error`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed or conflicting arguments
    Precondition,
    /// Caller lacks the authority the operation requires
    Authorization,
    /// Invocation under a borrowed identity
    Context,
}

impl Error {
    pub const fn kind(self) -> ErrorKind {
        match self as u32 {
            200..=299 => ErrorKind::Authorization,
            300..=399 => ErrorKind::Context,
            _ => ErrorKind::Precondition,
        }
    }
}

impl ErrorKind {
    /// Short name, usable as a log or event symbol
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Precondition => "precondition",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Context => "context",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::IdenticalTokens.kind(), ErrorKind::Precondition);
        assert_eq!(Error::PoolExists.kind(), ErrorKind::Precondition);
        assert_eq!(Error::InvalidSearchWindow.kind(), ErrorKind::Precondition);
        assert_eq!(Error::NotOwner.kind(), ErrorKind::Authorization);
        assert_eq!(Error::DelegatedCall.kind(), ErrorKind::Context);
        assert_eq!(Error::AlreadyCaptured.kind(), ErrorKind::Context);
    }

    #[test]
    fn test_error_kind_names() {
        assert_eq!(Error::ZeroAmount.kind().name(), "precondition");
        assert_eq!(Error::NotOwner.kind().name(), "authorization");
        assert_eq!(Error::DelegatedCall.kind().name(), "context");
    }
}
