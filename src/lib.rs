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

//! RSA-SHA256 signatures for payment transaction payloads.
//!
//! A transaction is identified by a handful of string attributes (partner
//! ID, sender ID, IBANs, currency, amount) concatenated into a single
//! signing string. This crate signs that string with an RSA private key
//! (`SHA256withRSA`, i.e. PKCS#1 v1.5 padding over a SHA-256 digest) and
//! verifies the resulting Base64-encoded signature with the matching
//! public key.
//!
//! Key material is supplied as byte buffers: PKCS#8 (DER or PEM) for
//! private keys, X.509 SubjectPublicKeyInfo (DER or PEM) for public keys.
//! Reading those buffers from disk, a vault or anywhere else is the
//! caller's business.
//!
//! # Example
//!
//! ```rust
//! use paysig::{Signature, TransactionPayload, TransactionSigner};
//!
//! let mut rng = rand::thread_rng();
//! let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
//! let signer = TransactionSigner::from(private_key);
//!
//! let payload = TransactionPayload::direct_debit(
//!     "58961529445edf0001fbb2b3",
//!     "589618f198fff10001106fc7",
//!     "NL91ABNA0417164300",
//!     "EUR",
//!     "10",
//! );
//!
//! let signature = signer.sign(&payload.signing_string()).unwrap();
//!
//! let verification_key = signer.to_verification_key();
//! assert!(verification_key
//!     .verify(
//!         &payload.signing_string(),
//!         Signature::Base64Encoded(signature.as_bytes()),
//!     )
//!     .unwrap());
//! ```
//!
//! All operations are synchronous, single-shot computations over their
//! arguments; there is no shared state and no retry logic. A signature
//! that decodes but does not match the payload yields `Ok(false)` from
//! `verify`, distinct from every error in
//! [`PaySigError`](crate::errors::PaySigError).

pub mod crypto;
pub mod errors;
pub mod payload;

pub use crate::crypto::{Signature, TransactionSigner, TransactionVerificationKey};
pub use crate::errors::{PaySigError, Result};
pub use crate::payload::TransactionPayload;
