// Copyright 2025 The paysig Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The transaction payload model and its canonical signing string.

use serde::{Deserialize, Serialize};

/// The attributes of a payment transaction that are covered by its
/// signature.
///
/// A direct-debit style transaction carries no recipient fields, while
/// credit and peer-to-peer transactions carry both. The wire format uses
/// camelCase member names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub partner_id: String,
    pub sender_id: String,
    #[serde(rename = "senderIBAN")]
    pub sender_iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, rename = "recipientIBAN", skip_serializing_if = "Option::is_none")]
    pub recipient_iban: Option<String>,
    pub currency: String,
    pub amount: String,
}

impl TransactionPayload {
    /// Build a direct-debit style payload, which involves no recipient.
    pub fn direct_debit(
        partner_id: impl Into<String>,
        sender_id: impl Into<String>,
        sender_iban: impl Into<String>,
        currency: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            sender_id: sender_id.into(),
            sender_iban: sender_iban.into(),
            recipient_id: None,
            recipient_iban: None,
            currency: currency.into(),
            amount: amount.into(),
        }
    }

    /// Build a peer-to-peer style payload, moving funds between two
    /// distinct parties.
    pub fn peer_to_peer(
        partner_id: impl Into<String>,
        sender_id: impl Into<String>,
        sender_iban: impl Into<String>,
        recipient_id: impl Into<String>,
        recipient_iban: impl Into<String>,
        currency: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            sender_id: sender_id.into(),
            sender_iban: sender_iban.into(),
            recipient_id: Some(recipient_id.into()),
            recipient_iban: Some(recipient_iban.into()),
            currency: currency.into(),
            amount: amount.into(),
        }
    }

    /// Return the string that is actually signed: the present fields
    /// concatenated in a fixed order with no delimiters.
    ///
    /// Field boundaries are implicit and order-dependent. Signing and
    /// verification must build this string identically, or the signature
    /// will not validate. The delimiter-free concatenation is kept
    /// bit-compatible with payloads signed by existing deployments.
    pub fn signing_string(&self) -> String {
        let mut data = String::new();
        data.push_str(&self.partner_id);
        data.push_str(&self.sender_id);
        data.push_str(&self.sender_iban);
        if let Some(recipient_id) = &self.recipient_id {
            data.push_str(recipient_id);
        }
        if let Some(recipient_iban) = &self.recipient_iban {
            data.push_str(recipient_iban);
        }
        data.push_str(&self.currency);
        data.push_str(&self.amount);
        data
    }
}
