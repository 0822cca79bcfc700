use crate::EncodingError;
use alloy::primitives::{Address, Bytes, U256};

/// Selector of `mint(address,uint256,uint32,bytes32[],address)`.
pub const MINT_SELECTOR: [u8; 4] = [0xfa, 0x2b, 0x06, 0x8f];

/// Selector of `mintBatch(address,uint256,uint16,uint32[],bytes32[][],address)`.
pub const MINT_BATCH_SELECTOR: [u8; 4] = [0x26, 0xc8, 0x58, 0xa4];

const WORD: usize = 32;

/// Head words of `mint`: creator contract, instance id, mint index, proof
/// offset, recipient.
const MINT_HEAD_WORDS: usize = 5;

/// Head words of `mintBatch`: creator contract, instance id, mint count,
/// indices offset, proofs offset, recipient.
const MINT_BATCH_HEAD_WORDS: usize = 6;

/// Length in bytes of `mint` calldata: selector, five head words and the
/// length word of the empty proof array.
pub const SINGLE_MINT_LEN: usize = 4 + (MINT_HEAD_WORDS + 1) * WORD;

/// Length in bytes of `mintBatch` calldata for `quantity` tokens.
///
/// Six head words, then the indices array (length + `quantity` words), then
/// the proofs array (length + `quantity` offsets + `quantity` empty
/// sub-arrays of one length word each).
pub const fn batch_mint_len(quantity: usize) -> usize {
    4 + (MINT_BATCH_HEAD_WORDS + 1 + quantity + 1 + 2 * quantity) * WORD
}

fn push_word(buf: &mut Vec<u8>, word: U256) {
    buf.extend_from_slice(&word.to_be_bytes::<32>());
}

fn push_usize(buf: &mut Vec<u8>, value: usize) {
    push_word(buf, U256::from(value));
}

fn push_address(buf: &mut Vec<u8>, address: Address) {
    buf.extend_from_slice(address.into_word().as_slice());
}

/// Encode a call to `mint` for a single token.
///
/// The mint index is always 0 and the merkle proof is always empty.
pub fn encode_single_mint(contract: Address, instance_id: U256, recipient: Address) -> Bytes {
    let mut buf = Vec::with_capacity(SINGLE_MINT_LEN);
    buf.extend_from_slice(&MINT_SELECTOR);

    push_address(&mut buf, contract);
    push_word(&mut buf, instance_id);
    push_word(&mut buf, U256::ZERO);
    // The proof array's length word sits right after the five head words.
    push_usize(&mut buf, MINT_HEAD_WORDS * WORD);
    push_address(&mut buf, recipient);

    // merkleProof: empty
    push_word(&mut buf, U256::ZERO);

    debug_assert_eq!(buf.len(), SINGLE_MINT_LEN);
    buf.into()
}

/// Encode a call to `mintBatch` for `quantity` tokens.
///
/// Every mint index is 0 and every per-token proof list is empty. Fails
/// with [`EncodingError::InvalidQuantity`] if `quantity` is zero or does not
/// fit the contract's `uint16` mint count.
pub fn encode_batch_mint(
    contract: Address,
    instance_id: U256,
    quantity: u32,
    recipient: Address,
) -> Result<Bytes, EncodingError> {
    let count = u16::try_from(quantity)
        .ok()
        .filter(|count| *count > 0)
        .ok_or(EncodingError::InvalidQuantity(quantity))?;
    let q = usize::from(count);

    // Offsets in the head are measured from the start of the argument block.
    let indices_offset = MINT_BATCH_HEAD_WORDS * WORD;
    let proofs_offset = indices_offset + WORD + q * WORD;

    let mut buf = Vec::with_capacity(batch_mint_len(q));
    buf.extend_from_slice(&MINT_BATCH_SELECTOR);

    push_address(&mut buf, contract);
    push_word(&mut buf, instance_id);
    push_usize(&mut buf, q);
    push_usize(&mut buf, indices_offset);
    push_usize(&mut buf, proofs_offset);
    push_address(&mut buf, recipient);

    // mintIndices: q zeros
    push_usize(&mut buf, q);
    for _ in 0..q {
        push_word(&mut buf, U256::ZERO);
    }

    // merkleProofs: offsets of the inner arrays are measured from the word
    // after the outer length. Inner array i starts after the q-word offset
    // table and the i empty arrays before it, each one length word long.
    push_usize(&mut buf, q);
    for i in 0..q {
        push_usize(&mut buf, q * WORD + i * WORD);
    }
    for _ in 0..q {
        push_word(&mut buf, U256::ZERO);
    }

    debug_assert_eq!(buf.len(), batch_mint_len(q));
    Ok(buf.into())
}

/// Encode a mint of `quantity` tokens, choosing `mint` for a single token
/// and `mintBatch` otherwise.
pub fn encode_mint(
    contract: Address,
    instance_id: U256,
    quantity: u32,
    recipient: Address,
) -> Result<Bytes, EncodingError> {
    match quantity {
        1 => Ok(encode_single_mint(contract, instance_id, recipient)),
        _ => encode_batch_mint(contract, instance_id, quantity, recipient),
    }
}
