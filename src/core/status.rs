//! Delivery status vocabulary of outbound documents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// State of an outbound document on Peppol or email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SendStatus {
    /// Received by Scrada, waiting to be uploaded or mailed.
    Created,
    /// Delivered.
    Processed,
    /// Delivery failed; Scrada retries up to 10 times.
    Retry,
    /// Canceled from the Scrada GUI.
    Canceled,
    Error,
    /// The other access point had already processed the document.
    ErrorAlreadySent,
    /// The receiver ID is not registered on Peppol.
    ErrorNotOnPeppol,
    BlockedSendByEmail,
    NotOnPeppolSendByEmail,
    ErrorSendByEmail,
    /// Blocked on Peppol and no email address to fall back to.
    Blocked,
    /// No delivery configured.
    None,
}

impl SendStatus {
    pub const ALL: [SendStatus; 12] = [
        Self::Created,
        Self::Processed,
        Self::Retry,
        Self::Canceled,
        Self::Error,
        Self::ErrorAlreadySent,
        Self::ErrorNotOnPeppol,
        Self::BlockedSendByEmail,
        Self::NotOnPeppolSendByEmail,
        Self::ErrorSendByEmail,
        Self::Blocked,
        Self::None,
    ];

    /// Wire value, which doubles as the display label.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Processed => "Processed",
            Self::Retry => "Retry",
            Self::Canceled => "Canceled",
            Self::Error => "Error",
            Self::ErrorAlreadySent => "Error already sent",
            Self::ErrorNotOnPeppol => "Error not on Peppol",
            Self::BlockedSendByEmail => "Blocked - send by email",
            Self::NotOnPeppolSendByEmail => "Not on Peppol - send by email",
            Self::ErrorSendByEmail => "Error - send by email",
            Self::Blocked => "Blocked",
            Self::None => "None",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        self.code()
    }

    pub fn is_success(&self) -> bool {
        *self == Self::Processed
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Error | Self::ErrorAlreadySent | Self::ErrorNotOnPeppol | Self::ErrorSendByEmail
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Created | Self::Retry)
    }
}

/// Channel used to deliver a sales invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SendMethod {
    Peppol,
    Email,
    PeppolAndEmail,
    None,
}

impl SendMethod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Peppol => "Peppol",
            Self::Email => "Email",
            Self::PeppolAndEmail => "Peppol and email",
            Self::None => "None",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Peppol" => Some(Self::Peppol),
            "Email" => Some(Self::Email),
            "Peppol and email" => Some(Self::PeppolAndEmail),
            "None" => Some(Self::None),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.code()
    }

    pub fn uses_peppol(&self) -> bool {
        matches!(self, Self::Peppol | Self::PeppolAndEmail)
    }

    pub fn uses_email(&self) -> bool {
        matches!(self, Self::Email | Self::PeppolAndEmail)
    }
}

macro_rules! str_code_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Self::from_code(&code).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown {} '{code}'", stringify!($ty)))
                })
            }
        }
    };
}

str_code_serde!(SendStatus);
str_code_serde!(SendMethod);
