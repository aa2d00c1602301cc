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

//! # Transaction Verification Key
//!
//! A [`TransactionVerificationKey`] wraps an RSA public key and checks
//! `SHA256withRSA` signatures against payload strings. The key is
//! imported from X.509 SubjectPublicKeyInfo material, either DER:
//!
//! ```text
//! $ openssl rsa -in private_key.pem -pubout -outform DER -out public_key.der
//! ```
//!
//! or the equivalent PEM.

use base64::{engine::general_purpose::STANDARD as BASE64_STD_ENGINE, Engine as _};
use pkcs8::DecodePublicKey;
use rsa::{pkcs1v15, signature::Verifier, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use super::{Signature, SIGNING_ALGORITHM};
use crate::errors::*;

/// Verifies transaction signatures with RSA PKCS#1 v1.5 over SHA-256.
#[derive(Debug, Clone)]
pub struct TransactionVerificationKey {
    verifying_key: pkcs1v15::VerifyingKey<Sha256>,
}

impl TransactionVerificationKey {
    /// Builds a `TransactionVerificationKey` from DER-encoded
    /// SubjectPublicKeyInfo data.
    pub fn from_der(der_data: &[u8]) -> Result<Self> {
        let public_key =
            RsaPublicKey::from_public_key_der(der_data).map_err(|e| PaySigError::InvalidKeyFormat {
                error: format!("read rsa public key from der failed: {e}"),
            })?;
        Ok(Self::from(pkcs1v15::VerifyingKey::new(public_key)))
    }

    /// Builds a `TransactionVerificationKey` from PEM-encoded data. The
    /// method takes care of decoding the PEM wrapper and then parsing the
    /// DER-encoded bytes inside.
    pub fn from_pem(pem_data: &[u8]) -> Result<Self> {
        let key_pem = pem::parse(pem_data)?;
        Self::from_der(key_pem.contents())
    }

    /// Check that the signature was produced over the UTF-8 bytes of
    /// `payload` by the private key matching this one.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not
    /// match the payload. An error is raised only when the signature
    /// cannot be decoded at all.
    pub fn verify(&self, payload: &str, signature: Signature) -> Result<bool> {
        let sig = match signature {
            Signature::Raw(data) => data.to_owned(),
            Signature::Base64Encoded(data) => BASE64_STD_ENGINE.decode(data)?,
        };
        let sig = pkcs1v15::Signature::try_from(sig.as_slice())
            .map_err(|e| PaySigError::InvalidSignatureFormat(e.to_string()))?;

        match self.verifying_key.verify(payload.as_bytes(), &sig) {
            Ok(()) => Ok(true),
            Err(_) => {
                debug!(
                    algorithm = SIGNING_ALGORITHM,
                    "transaction signature did not verify"
                );
                Ok(false)
            }
        }
    }
}

impl From<pkcs1v15::VerifyingKey<Sha256>> for TransactionVerificationKey {
    fn from(verifying_key: pkcs1v15::VerifyingKey<Sha256>) -> Self {
        Self { verifying_key }
    }
}
