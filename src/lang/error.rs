use crate::mach::Address;

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    token: Option<String>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr, $tok:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .in_token($tok)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident, $addr:expr, $tok:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .in_token($tok)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            token: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_token(self, token: &str) -> Error {
        debug_assert!(self.token.is_none());
        Error {
            token: Some(token.to_string()),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }

    /// Fill in the location of an error raised below the dispatch loop.
    /// Errors that already know where they happened are left alone.
    pub fn located(self, address: Address, token: &str) -> Error {
        Error {
            address: self.address.or(Some(address)),
            token: self.token.or_else(|| Some(token.to_string())),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateLabel = 1,
    UndefinedLabel = 2,
    DirectionRequired = 3,
    StackUnderflow = 4,
    Overflow = 6,
    OutOfMemory = 7,
    NegativeShift = 8,
    InvalidAddress = 9,
    Interrupted = 20,
    FileNotFound = 53,
    IoError = 57,
}

impl ErrorCode {
    fn text(self) -> &'static str {
        use ErrorCode::*;
        match self {
            DuplicateLabel => "DUPLICATE LABEL",
            UndefinedLabel => "UNDEFINED LABEL",
            DirectionRequired => "DIRECTION REQUIRED",
            StackUnderflow => "STACK UNDERFLOW",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            NegativeShift => "NEGATIVE SHIFT COUNT",
            InvalidAddress => "INVALID ADDRESS",
            Interrupted => "BREAK",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        }
        if let Some(token) = &self.token {
            suffix.push_str(&format!(" (`{}`)", token));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.text(), suffix)
    }
}
