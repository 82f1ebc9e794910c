//! The identity a request acts as.

/// Who is making a request.
///
/// Requests without credentials are [`Principal::Anonymous`]; requests with a
/// valid bearer token act as that token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Principal {
    #[default]
    Anonymous,
    Token {
        token_id: i64,
        name: String,
        is_superuser: bool,
    },
}

impl Principal {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::Token { .. })
    }

    pub fn is_superuser(&self) -> bool {
        matches!(
            self,
            Principal::Token {
                is_superuser: true,
                ..
            }
        )
    }

    /// Short label for logs.
    pub fn label(&self) -> &str {
        match self {
            Principal::Anonymous => "anonymous",
            Principal::Token { name, .. } => name,
        }
    }
}
