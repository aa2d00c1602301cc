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

//! # Transaction Signer
//!
//! A [`TransactionSigner`] wraps an RSA private key and produces
//! Base64-encoded `SHA256withRSA` signatures over payload strings.
//! The key is imported from PKCS#8 material, either DER:
//!
//! ```text
//! $ openssl pkcs8 -topk8 -inform PEM -outform DER -in private_key.pem -out private_key.der -nocrypt
//! ```
//!
//! or the PEM it was converted from.
//!
//! # Transaction Signer Operation
//!
//! ```rust
//! use paysig::crypto::{Signature, TransactionSigner};
//!
//! let mut rng = rand::thread_rng();
//! let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
//! let signer = TransactionSigner::from(private_key);
//!
//! // sign a payload string
//! let signature = signer.sign("some payload").unwrap();
//!
//! // derive the verification key and check the signature
//! let verification_key = signer.to_verification_key();
//! assert!(verification_key
//!     .verify("some payload", Signature::Base64Encoded(signature.as_bytes()))
//!     .unwrap());
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64_STD_ENGINE, Engine as _};
use pkcs8::DecodePrivateKey;
use rsa::{
    pkcs1v15::SigningKey,
    signature::{Keypair, SignatureEncoding, Signer},
    RsaPrivateKey,
};
use sha2::Sha256;

use super::verification_key::TransactionVerificationKey;
use crate::errors::*;

/// The label for pem of private keys.
pub const PRIVATE_KEY_PEM_LABEL: &str = "PRIVATE KEY";

/// Signs transaction payloads with RSA PKCS#1 v1.5 over SHA-256.
#[derive(Debug)]
pub struct TransactionSigner {
    signing_key: SigningKey<Sha256>,
}

impl TransactionSigner {
    /// Builds a `TransactionSigner` from a pkcs8 asn.1 private key.
    pub fn from_pkcs8_der(der_bytes: &[u8]) -> Result<Self> {
        let private_key =
            RsaPrivateKey::from_pkcs8_der(der_bytes).map_err(|e| PaySigError::InvalidKeyFormat {
                error: format!("convert from pkcs8 der to rsa private key failed: {e}"),
            })?;
        Ok(Self::from(private_key))
    }

    /// Builds a `TransactionSigner` from a pkcs8 PEM-encoded private key.
    /// The label of the PEM should be [`PRIVATE_KEY_PEM_LABEL`].
    pub fn from_pkcs8_pem(pem_bytes: &[u8]) -> Result<Self> {
        let pem = pem::parse(pem_bytes)?;
        match pem.tag() {
            PRIVATE_KEY_PEM_LABEL => Self::from_pkcs8_der(pem.contents()),
            tag => Err(PaySigError::InvalidKeyFormat {
                error: format!("unsupported pem tag {tag}"),
            }),
        }
    }

    /// `sign` will sign the UTF-8 bytes of the given payload string and
    /// return the signature, Base64-encoded.
    ///
    /// PKCS#1 v1.5 signing is deterministic: repeated calls over the same
    /// payload yield byte-identical signatures.
    pub fn sign(&self, payload: &str) -> Result<String> {
        let signature = self
            .signing_key
            .try_sign(payload.as_bytes())
            .map_err(|e| PaySigError::SigningError(e.to_string()))?;
        Ok(BASE64_STD_ENGINE.encode(signature.to_vec()))
    }

    /// Derive the [`TransactionVerificationKey`] that validates the
    /// signatures produced by this signer.
    pub fn to_verification_key(&self) -> TransactionVerificationKey {
        TransactionVerificationKey::from(self.signing_key.verifying_key())
    }
}

impl From<RsaPrivateKey> for TransactionSigner {
    fn from(private_key: RsaPrivateKey) -> Self {
        Self {
            signing_key: SigningKey::new(private_key),
        }
    }
}
