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

//! Signature round-trips for the supported transaction shapes, driven by
//! the DER/PEM key fixtures under `tests/data/keys/`.

use std::fs;

use paysig::{Signature, TransactionPayload, TransactionSigner, TransactionVerificationKey};

fn signer_from_der_fixture() -> TransactionSigner {
    let content = fs::read("tests/data/keys/private_key.der")
        .expect("read tests/data/keys/private_key.der failed.");
    TransactionSigner::from_pkcs8_der(&content).expect("cannot create TransactionSigner")
}

fn verification_key_from_der_fixture() -> TransactionVerificationKey {
    let content = fs::read("tests/data/keys/public_key.der")
        .expect("read tests/data/keys/public_key.der failed.");
    TransactionVerificationKey::from_der(&content)
        .expect("cannot create TransactionVerificationKey")
}

fn sign_and_verify(payload: &TransactionPayload) {
    let signer = signer_from_der_fixture();
    let signature = signer
        .sign(&payload.signing_string())
        .expect("sign failed.");

    let verification_key = verification_key_from_der_fixture();
    assert!(
        verification_key
            .verify(
                &payload.signing_string(),
                Signature::Base64Encoded(signature.as_bytes()),
            )
            .expect("verify failed."),
        "signature did not validate"
    );
}

#[test]
fn single_debit_direct_transaction_signature() {
    let payload = TransactionPayload::direct_debit(
        "58961529445edf0001fbb2b3",
        "589618f198fff10001106fc7",
        "NL91ABNA0417164300",
        "EUR",
        "10",
    );
    sign_and_verify(&payload);
}

#[test]
fn single_credit_transaction_signature() {
    // the partner collects into its own account, so partner and sender match
    let payload = TransactionPayload {
        partner_id: "58961529445edf0001fbb2b3".into(),
        sender_id: "58961529445edf0001fbb2b3".into(),
        sender_iban: "NL55INGB0000000000".into(),
        recipient_id: Some("5896190598fff10001106fc8".into()),
        recipient_iban: Some("NL02ABNA0457180536".into()),
        currency: "EUR".into(),
        amount: "10".into(),
    };
    sign_and_verify(&payload);
}

#[test]
fn peer_to_peer_transaction_signature() {
    let payload = TransactionPayload::peer_to_peer(
        "58961529445edf0001fbb2b3",
        "589618f198fff10001106fc7",
        "NL91ABNA0417164300",
        "5896190598fff10001106fc8",
        "NL02ABNA0457180536",
        "EUR",
        "10",
    );
    sign_and_verify(&payload);
}

/// The DER fixtures are openssl conversions of the PEM ones, so keys
/// loaded from either encoding must validate each other's signatures.
#[test]
fn pem_and_der_encoded_keys_agree() -> anyhow::Result<()> {
    let payload = TransactionPayload::direct_debit(
        "58961529445edf0001fbb2b3",
        "589618f198fff10001106fc7",
        "NL91ABNA0417164300",
        "EUR",
        "10",
    );

    let pem_content = fs::read("tests/data/keys/rsa_private.pem")?;
    let pem_signer = TransactionSigner::from_pkcs8_pem(&pem_content)?;
    let signature = pem_signer.sign(&payload.signing_string())?;

    let der_key = verification_key_from_der_fixture();
    assert!(der_key.verify(
        &payload.signing_string(),
        Signature::Base64Encoded(signature.as_bytes()),
    )?);

    let pem_content = fs::read("tests/data/keys/rsa_public.pem")?;
    let pem_key = TransactionVerificationKey::from_pem(&pem_content)?;
    let der_content = fs::read("tests/data/keys/private_key.der")?;
    let der_signer = TransactionSigner::from_pkcs8_der(&der_content)?;
    let signature = der_signer.sign(&payload.signing_string())?;
    assert!(pem_key.verify(
        &payload.signing_string(),
        Signature::Base64Encoded(signature.as_bytes()),
    )?);

    Ok(())
}

/// Changing a single attribute after signing must invalidate the
/// signature, since the signing string covers every field.
#[test]
fn tampered_payload_does_not_verify() {
    let signer = signer_from_der_fixture();
    let payload = TransactionPayload::peer_to_peer(
        "58961529445edf0001fbb2b3",
        "589618f198fff10001106fc7",
        "NL91ABNA0417164300",
        "5896190598fff10001106fc8",
        "NL02ABNA0457180536",
        "EUR",
        "10",
    );
    let signature = signer
        .sign(&payload.signing_string())
        .expect("sign failed.");

    let mut tampered = payload.clone();
    tampered.recipient_iban = Some("NL91ABNA0417164300".into());

    let verification_key = verification_key_from_der_fixture();
    assert!(!verification_key
        .verify(
            &tampered.signing_string(),
            Signature::Base64Encoded(signature.as_bytes()),
        )
        .expect("verify failed."));
}

/// A payload arriving as JSON feeds the same signing path as one built
/// in code.
#[test]
fn json_payload_round_trip() -> anyhow::Result<()> {
    let payload: TransactionPayload = serde_json::from_str(
        r#"{
            "partnerId": "58961529445edf0001fbb2b3",
            "senderId": "589618f198fff10001106fc7",
            "senderIBAN": "NL91ABNA0417164300",
            "recipientId": "5896190598fff10001106fc8",
            "recipientIBAN": "NL02ABNA0457180536",
            "currency": "EUR",
            "amount": "10"
        }"#,
    )?;

    let signer = signer_from_der_fixture();
    let signature = signer.sign(&payload.signing_string())?;

    let verification_key = verification_key_from_der_fixture();
    assert!(verification_key.verify(
        &payload.signing_string(),
        Signature::Base64Encoded(signature.as_bytes()),
    )?);
    Ok(())
}
