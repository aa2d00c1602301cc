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

//! Structures and constants required to perform cryptographic operations.
//!
//! Transaction signatures use a single scheme: RSA with PKCS#1 v1.5
//! padding over a SHA-256 digest, known elsewhere as `SHA256withRSA`.
//! Signatures travel Base64-encoded (RFC 4648, standard alphabet).

pub use signing_key::TransactionSigner;
pub use verification_key::TransactionVerificationKey;

/// Name of the signing scheme, used in diagnostics.
pub const SIGNING_ALGORITHM: &str = "RSA_PKCS1_SHA256";

/// A signature to be checked against a payload.
pub enum Signature<'a> {
    /// Raw signature bytes, no decoding needed.
    Raw(&'a [u8]),
    /// A Base64-encoded signature, as carried on the wire.
    Base64Encoded(&'a [u8]),
}

pub mod signing_key;
pub mod verification_key;
