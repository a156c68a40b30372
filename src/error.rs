/// Error category, used both for programmatic matching and for the process
/// exit code of the `roll` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or physically impossible input (non-positive diameters,
    /// empty measurement set, outer <= core, unreadable files).
    InvalidInput,
    /// The regression cannot be computed (zero-variance predictor).
    DegenerateFit,
    /// A computed intermediate violates physical constraints
    /// (non-positive slope/caliper).
    InvalidPhysicalResult,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidInput => 2,
            ErrorKind::DegenerateFit => 3,
            ErrorKind::InvalidPhysicalResult => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn degenerate_fit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DegenerateFit, message)
    }

    pub fn invalid_physical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPhysicalResult, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
