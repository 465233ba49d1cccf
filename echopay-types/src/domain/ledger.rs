//! Per-user ledger model for two-party transfers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::Amount;
use super::record::{Record, RecordId};
use crate::error::DomainError;

/// One of the two participants the ledger recognizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum UserId {
    #[serde(rename = "user-a")]
    UserA,
    #[serde(rename = "user-b")]
    UserB,
}

impl UserId {
    pub const ALL: [UserId; 2] = [UserId::UserA, UserId::UserB];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserId::UserA => "user-a",
            UserId::UserB => "user-b",
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user-a" => Ok(UserId::UserA),
            "user-b" => Ok(UserId::UserB),
            other => Err(DomainError::UnknownUser(other.to_string())),
        }
    }
}

/// Direction of a ledger entry relative to the ledger owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

/// Label for the unordered pair of transfer participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Channel {
    #[serde(rename = "user-a<->user-b")]
    UserAUserB,
    #[serde(rename = "unsupported")]
    Unsupported,
}

impl Channel {
    /// Names the channel between two participants. Order does not matter.
    pub fn between(a: UserId, b: UserId) -> Self {
        match (a, b) {
            (UserId::UserA, UserId::UserB) | (UserId::UserB, UserId::UserA) => Channel::UserAUserB,
            _ => Channel::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::UserAUserB => "user-a<->user-b",
            Channel::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a transfer, as seen from `user`'s ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: RecordId,
    pub channel: Channel,
    /// Owner of the ledger this entry lives in
    pub user: UserId,
    pub counterparty: UserId,
    pub direction: Direction,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Builds the two entries of a transfer: `sent` for `from`, `received` for `to`.
    ///
    /// Both entries share the amount, timestamp and channel; `to`'s entry takes
    /// the id right after `from`'s.
    pub fn transfer_pair(
        first_id: RecordId,
        from: UserId,
        to: UserId,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> (LedgerEntry, LedgerEntry) {
        let channel = Channel::between(from, to);
        let sent = LedgerEntry {
            id: first_id,
            channel,
            user: from,
            counterparty: to,
            direction: Direction::Sent,
            amount,
            created_at: at,
        };
        let received = LedgerEntry {
            id: first_id.next(),
            channel,
            user: to,
            counterparty: from,
            direction: Direction::Received,
            amount,
            created_at: at,
        };
        (sent, received)
    }
}

impl Record for LedgerEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!("user-a".parse::<UserId>().unwrap(), UserId::UserA);
        assert_eq!("user-b".parse::<UserId>().unwrap(), UserId::UserB);

        let result = "user-c".parse::<UserId>();
        assert!(
            matches!(result, Err(DomainError::UnknownUser(u)) if u == "user-c")
        );
    }

    #[test]
    fn test_user_id_wire_format() {
        assert_eq!(serde_json::to_string(&UserId::UserA).unwrap(), r#""user-a""#);
        assert!(serde_json::from_str::<UserId>(r#""USER-A""#).is_err());
    }

    #[test]
    fn test_channel_is_order_independent() {
        assert_eq!(
            Channel::between(UserId::UserA, UserId::UserB),
            Channel::UserAUserB
        );
        assert_eq!(
            Channel::between(UserId::UserB, UserId::UserA),
            Channel::UserAUserB
        );
        assert_eq!(Channel::UserAUserB.to_string(), "user-a<->user-b");
    }

    #[test]
    fn test_channel_for_same_user_is_unsupported() {
        assert_eq!(
            Channel::between(UserId::UserA, UserId::UserA),
            Channel::Unsupported
        );
        assert_eq!(
            serde_json::to_string(&Channel::Unsupported).unwrap(),
            r#""unsupported""#
        );
    }

    #[test]
    fn test_transfer_pair() {
        let amount = Amount::new(99.5).unwrap();
        let now = Utc::now();
        let (sent, received) =
            LedgerEntry::transfer_pair(RecordId::new(3), UserId::UserA, UserId::UserB, amount, now);

        assert_eq!(sent.id, RecordId::new(3));
        assert_eq!(received.id, RecordId::new(4));
        assert_eq!(sent.direction, Direction::Sent);
        assert_eq!(received.direction, Direction::Received);
        assert_eq!(sent.user, UserId::UserA);
        assert_eq!(sent.counterparty, UserId::UserB);
        assert_eq!(received.user, UserId::UserB);
        assert_eq!(received.counterparty, UserId::UserA);
        assert_eq!(sent.created_at, received.created_at);
        assert_eq!(sent.channel, received.channel);
    }

    #[test]
    fn test_ledger_entry_wire_format() {
        let (sent, _) = LedgerEntry::transfer_pair(
            RecordId::new(1),
            UserId::UserA,
            UserId::UserB,
            Amount::new(120.0).unwrap(),
            Utc::now(),
        );

        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["channel"], "user-a<->user-b");
        assert_eq!(json["user"], "user-a");
        assert_eq!(json["counterparty"], "user-b");
        assert_eq!(json["direction"], "sent");
        assert_eq!(json["amount"], 120.0);
    }
}
