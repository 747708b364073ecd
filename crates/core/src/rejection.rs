// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request rejections produced by validators

use std::borrow::Cow;
use std::fmt;

/// Why a request was turned away before reaching a record operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Missing or malformed session token
    Auth,
    /// A field failed its check
    Validation,
}

impl RejectionKind {
    pub fn status(self) -> u16 {
        match self {
            RejectionKind::Auth => 401,
            RejectionKind::Validation => 400,
        }
    }
}

/// A failed check: the status to answer with and the message to surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub message: Cow<'static, str>,
}

impl Rejection {
    pub fn auth(message: &'static str) -> Self {
        Self {
            kind: RejectionKind::Auth,
            message: Cow::Borrowed(message),
        }
    }

    pub fn validation(message: &'static str) -> Self {
        Self {
            kind: RejectionKind::Validation,
            message: Cow::Borrowed(message),
        }
    }

    pub fn status(&self) -> u16 {
        self.kind.status()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status())
    }
}

impl std::error::Error for Rejection {}

/// Wire messages, one per check
pub mod messages {
    pub const TOKEN_MISSING: &str = "Token não encontrado";
    pub const TOKEN_INVALID: &str = "Token inválido";

    pub const NAME_REQUIRED: &str = "O campo \"name\" é obrigatório";
    pub const NAME_LENGTH: &str = "O \"name\" deve ter pelo menos 3 caracteres";
    pub const AGE_REQUIRED: &str = "O campo \"age\" é obrigatório";
    pub const AGE_RANGE: &str = "A pessoa palestrante deve ser maior de idade";
    pub const TALK_REQUIRED: &str = "O campo \"talk\" é obrigatório";
    pub const WATCHED_AT_REQUIRED: &str = "O campo \"watchedAt\" é obrigatório";
    pub const WATCHED_AT_FORMAT: &str = "O campo \"watchedAt\" deve ter o formato \"dd/mm/aaaa\"";
    pub const RATE_REQUIRED: &str = "O campo \"rate\" é obrigatório";
    pub const RATE_RANGE: &str = "O campo \"rate\" deve ser um inteiro de 1 à 5";

    pub const EMAIL_REQUIRED: &str = "O campo \"email\" é obrigatório";
    pub const EMAIL_FORMAT: &str = "O \"email\" deve ter o formato \"email@email.com\"";
    pub const PASSWORD_REQUIRED: &str = "O campo \"password\" é obrigatório";
    pub const PASSWORD_LENGTH: &str = "O \"password\" deve ter pelo menos 6 caracteres";

    pub const MALFORMED_BODY: &str = "Corpo da requisição inválido";
    pub const NOT_FOUND: &str = "Pessoa palestrante não encontrada";
    pub const STORAGE_FAILURE: &str = "Erro interno ao acessar os dados";
}
