//! Wire DTOs for the user list payload.
//!
//! The body is decoded in two steps: the envelope first (so a missing
//! `results` array fails the whole load), then each entry on its own so one
//! malformed user does not poison the rest.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::UserRecord;
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
pub(super) struct UsersResponseDto {
    pub(super) results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) name: NameDto,
    pub(super) email: String,
    pub(super) picture: PictureDto,
    pub(super) login: LoginDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct NameDto {
    pub(super) first: String,
    pub(super) last: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct PictureDto {
    pub(super) thumbnail: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginDto {
    pub(super) username: String,
}

impl UsersResponseDto {
    /// Convert every well-formed entry, keeping payload order.
    ///
    /// Entries that fail to decode, or whose username repeats an earlier one,
    /// are dropped and logged.
    pub(super) fn into_records(self) -> Vec<UserRecord> {
        let mut seen = HashSet::with_capacity(self.results.len());
        let mut records = Vec::with_capacity(self.results.len());
        for (index, raw) in self.results.into_iter().enumerate() {
            let user = match serde_json::from_value::<UserDto>(raw) {
                Ok(user) => user,
                Err(error) => {
                    warn!(index, %error, "dropping malformed user entry");
                    continue;
                }
            };
            if !seen.insert(user.login.username.clone()) {
                warn!(index, id = %user.login.username, "dropping user entry with duplicate id");
                continue;
            }
            records.push(user.into_record());
        }
        records
    }
}

impl UserDto {
    fn into_record(self) -> UserRecord {
        UserRecord {
            id: self.login.username,
            first_name: self.name.first,
            last_name: self.name.last,
            email: self.email,
            thumbnail_url: self.picture.thumbnail,
        }
    }
}

/// Decode a response body into user records.
pub fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, LoadError> {
    let envelope: UsersResponseDto = serde_json::from_slice(body)?;
    Ok(envelope.into_records())
}
