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

//! The errors that can be raised by paysig.
//!
//! Every failure is terminal for the single operation that raised it:
//! there is no retry or recovery path inside the crate. A signature that
//! decodes cleanly but does not match the payload is *not* an error, it
//! is reported as `Ok(false)` by
//! [`verify`](crate::crypto::TransactionVerificationKey::verify).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaySigError>;

#[derive(Error, Debug)]
pub enum PaySigError {
    /// The supplied bytes are not a valid PKCS#8 private key or X.509
    /// SubjectPublicKeyInfo public key.
    #[error("invalid key format: {error}")]
    InvalidKeyFormat { error: String },

    /// The private key could not produce a signature for the payload.
    #[error("signing failed: {0}")]
    SigningError(String),

    /// The signature bytes are structurally invalid for the verification
    /// key, before any matching against the payload takes place.
    #[error("malformed signature: {0}")]
    InvalidSignatureFormat(String),

    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),

    #[error(transparent)]
    FromPEMError(#[from] pem::PemError),
}
