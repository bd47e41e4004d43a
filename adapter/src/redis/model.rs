use std::str::FromStr;

use kernel::model::{
    auth::AccessToken,
    id::{ProposalId, UserId},
    proposal::Proposal,
};
use shared::error::{AppError, AppResult};

use super::{RedisKey, RedisValue};

// ---- session tokens ----

pub struct AuthorizationKey(String);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.clone())
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::from_str(&value).map(Self)
    }
}

// ---- staged proposals ----

pub struct ProposalKey(ProposalId);

impl RedisKey for ProposalKey {
    type Value = ProposalEntry;

    fn inner(&self) -> String {
        format!("proposal:{}", self.0)
    }
}

impl From<ProposalId> for ProposalKey {
    fn from(value: ProposalId) -> Self {
        Self(value)
    }
}

const REDEEMED_MARKER: &str = "redeemed";

/// A staged proposal serialized as JSON, or the tombstone left behind
/// once it has been consumed.
pub enum ProposalEntry {
    Staged { payload: String },
    Redeemed,
}

impl ProposalEntry {
    pub fn stage(proposal: &Proposal) -> AppResult<Self> {
        serde_json::to_string(proposal)
            .map(|payload| Self::Staged { payload })
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

impl RedisValue for ProposalEntry {
    fn inner(&self) -> String {
        match self {
            ProposalEntry::Staged { payload } => payload.clone(),
            ProposalEntry::Redeemed => REDEEMED_MARKER.to_string(),
        }
    }
}

impl TryFrom<String> for ProposalEntry {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == REDEEMED_MARKER {
            Ok(Self::Redeemed)
        } else {
            Ok(Self::Staged { payload: value })
        }
    }
}
