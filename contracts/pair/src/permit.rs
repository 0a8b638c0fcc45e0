// Signed-approval envelope.
//
// EIP-712-shaped: a domain separator binds the share token name, version
// "1", the ambient network id, and the pair's own address; the message
// digest commits to (owner, spender, value, nonce, deadline). Addresses
// enter the digest as keccak256 of their XDR encoding; integers as 32-byte
// big-endian words. The signer is recovered with the host's secp256k1
// recovery and compared, as a 20-byte keccak-derived handle, against the
// key the owner has bound.

use soroban_sdk::{crypto::Hash, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::share::TOKEN_NAME;

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
const PERMIT_TYPE: &[u8] =
    b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";
const VERSION: &[u8] = b"1";

fn keccak(env: &Env, bytes: &Bytes) -> Hash<32> {
    env.crypto().keccak256(bytes)
}

fn append_word(env: &Env, enc: &mut Bytes, word: &BytesN<32>) {
    enc.append(&Bytes::from_slice(env, &word.to_array()));
}

fn u128_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// 32-byte digest word for an address: keccak256 of its XDR bytes.
pub fn address_word(env: &Env, address: &Address) -> BytesN<32> {
    keccak(env, &address.clone().to_xdr(env)).to_bytes()
}

/// Domain separator for this pair, computed once at initialization.
pub fn domain_separator(env: &Env, pair: &Address) -> BytesN<32> {
    let type_hash = keccak(env, &Bytes::from_slice(env, DOMAIN_TYPE)).to_bytes();
    let name_hash = keccak(env, &Bytes::from_slice(env, TOKEN_NAME.as_bytes())).to_bytes();
    let version_hash = keccak(env, &Bytes::from_slice(env, VERSION)).to_bytes();
    let network_id = env.ledger().network_id();
    let pair_word = address_word(env, pair);

    let mut enc = Bytes::new(env);
    append_word(env, &mut enc, &type_hash);
    append_word(env, &mut enc, &name_hash);
    append_word(env, &mut enc, &version_hash);
    append_word(env, &mut enc, &network_id);
    append_word(env, &mut enc, &pair_word);

    keccak(env, &enc).to_bytes()
}

/// Full message digest: keccak256("\x19\x01" || separator || struct_hash).
pub fn permit_digest(
    env: &Env,
    separator: &BytesN<32>,
    owner: &Address,
    spender: &Address,
    value: u128,
    nonce: u128,
    deadline: u64,
) -> Hash<32> {
    let type_hash = keccak(env, &Bytes::from_slice(env, PERMIT_TYPE)).to_bytes();

    let mut enc = Bytes::new(env);
    append_word(env, &mut enc, &type_hash);
    append_word(env, &mut enc, &address_word(env, owner));
    append_word(env, &mut enc, &address_word(env, spender));
    append_word(env, &mut enc, &BytesN::from_array(env, &u128_word(value)));
    append_word(env, &mut enc, &BytesN::from_array(env, &u128_word(nonce)));
    append_word(env, &mut enc, &BytesN::from_array(env, &u64_word(deadline)));
    let struct_hash = keccak(env, &enc).to_bytes();

    let mut message = Bytes::from_slice(env, &[0x19, 0x01]);
    append_word(env, &mut message, separator);
    append_word(env, &mut message, &struct_hash);

    keccak(env, &message)
}

/// 20-byte handle of an uncompressed secp256k1 public key:
/// keccak256(key[1..65])[12..32].
pub fn signer_handle(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
    let key_bytes = public_key.to_array();
    let key_hash = keccak(env, &Bytes::from_slice(env, &key_bytes[1..])).to_bytes().to_array();

    let mut handle = [0u8; 20];
    handle.copy_from_slice(&key_hash[12..]);
    BytesN::from_array(env, &handle)
}

/// Recover the signer handle from a (v, r, s) signature over `digest`.
/// Accepts both raw recovery ids and the 27/28 convention.
pub fn recover_signer(
    env: &Env,
    digest: &Hash<32>,
    v: u32,
    r: &BytesN<32>,
    s: &BytesN<32>,
) -> BytesN<20> {
    let recovery_id = if v >= 27 { v - 27 } else { v };

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&r.to_array());
    sig[32..].copy_from_slice(&s.to_array());
    let signature = BytesN::from_array(env, &sig);

    let public_key = env.crypto().secp256k1_recover(digest, &signature, recovery_id);
    signer_handle(env, &public_key)
}

pub fn is_zero_handle(handle: &BytesN<20>) -> bool {
    handle.to_array() == [0u8; 20]
}
