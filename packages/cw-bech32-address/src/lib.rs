#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]


use thiserror::Error;

/// Separator between the human-readable prefix and the data payload.
const SEPARATOR: char = '1';

/// The 32-character data alphabet shared by both checksum variants.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator coefficients of the checksum polynomial.
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// The conventional total-length ceiling applied by the bounded decoder.
pub const MAX_LENGTH: usize = 90;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("missing separator '1' between prefix and payload")]
    MissingSeparator,

    #[error("checksum does not validate under either variant")]
    InvalidChecksum,

    #[error("invalid length")]
    InvalidLength,

    #[error("invalid character ({0})")]
    InvalidChar(char),

    #[error("invalid data value ({0}), must be less than 32")]
    InvalidData(u8),

    #[error("invalid padding on the final bit group")]
    InvalidPadding,

    #[error("string contains both upper and lower case characters")]
    MixedCase,
}

/// The two checksum flavors. Newer address formats (Taproot, Namada) use the
/// "m" variant; most Cosmos chains use the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Bech32,
    Bech32m,
}

impl Variant {
    const fn checksum_constant(self) -> u32 {
        match self {
            Variant::Bech32 => 0x01,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    fn from_remainder(remainder: u32) -> Option<Self> {
        match remainder {
            0x01 => Some(Variant::Bech32),
            0x2bc8_30a3 => Some(Variant::Bech32m),
            _ => None,
        }
    }
}

fn polymod(values: impl Iterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expands the prefix into the 5-bit groups that feed the checksum.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
    expanded.extend(bytes.iter().map(|b| b >> 5));
    expanded.push(0);
    expanded.extend(bytes.iter().map(|b| b & 0x1f));
    expanded
}

fn checksum_remainder(hrp: &str, data: &[u8]) -> u32 {
    polymod(hrp_expand(hrp).into_iter().chain(data.iter().copied()))
}

fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; 6] {
    let remainder = polymod(
        hrp_expand(hrp)
            .into_iter()
            .chain(data.iter().copied())
            .chain([0u8; 6]),
    ) ^ variant.checksum_constant();
    let mut checksum = [0u8; 6];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((remainder >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Checks that `hrp` is usable as a human-readable prefix: non-empty and
/// within the printable US-ASCII range the encoding allows.
pub fn validate_hrp(hrp: &str) -> Result<(), AddressError> {
    if hrp.is_empty() {
        return Err(AddressError::InvalidLength);
    }
    for c in hrp.chars() {
        if !('\x21'..='\x7e').contains(&c) {
            return Err(AddressError::InvalidChar(c));
        }
    }
    Ok(())
}

/// Decodes a checksummed string into its prefix, 5-bit payload and detected
/// variant, enforcing the conventional [`MAX_LENGTH`] ceiling.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>, Variant), AddressError> {
    decode_with_limit(encoded, Some(MAX_LENGTH))
}

/// [`decode`] with the total-length ceiling disabled. Addresses from some
/// counterpart chains are much longer than [`MAX_LENGTH`] and are otherwise
/// perfectly well formed.
pub fn decode_no_limit(encoded: &str) -> Result<(String, Vec<u8>, Variant), AddressError> {
    decode_with_limit(encoded, None)
}

fn decode_with_limit(
    encoded: &str,
    limit: Option<usize>,
) -> Result<(String, Vec<u8>, Variant), AddressError> {
    if let Some(limit) = limit {
        if encoded.len() > limit {
            return Err(AddressError::InvalidLength);
        }
    }

    // Either case is fine on its own, mixing them is not.
    let mut has_lower = false;
    let mut has_upper = false;
    for c in encoded.chars() {
        if !('\x21'..='\x7e').contains(&c) {
            return Err(AddressError::InvalidChar(c));
        }
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }
    if has_lower && has_upper {
        return Err(AddressError::MixedCase);
    }
    let encoded = encoded.to_ascii_lowercase();

    let pos = encoded.rfind(SEPARATOR).ok_or(AddressError::MissingSeparator)?;
    if pos == 0 || pos + 7 > encoded.len() {
        // Empty prefix, or not enough room for the 6-symbol checksum.
        return Err(AddressError::InvalidLength);
    }

    let hrp = &encoded[..pos];
    let mut data = Vec::with_capacity(encoded.len() - pos - 1);
    for c in encoded[pos + 1..].chars() {
        let value = CHARSET
            .iter()
            .position(|&b| b as char == c)
            .ok_or(AddressError::InvalidChar(c))?;
        data.push(value as u8);
    }

    let variant = Variant::from_remainder(checksum_remainder(hrp, &data))
        .ok_or(AddressError::InvalidChecksum)?;

    data.truncate(data.len() - 6);
    Ok((hrp.to_string(), data, variant))
}

/// Decodes under either variant with no length ceiling and regroups the
/// payload into raw 8-bit address bytes, the canonical form under which
/// equivalent encodings with different prefixes compare equal.
pub fn decode_no_limit_to_base256(encoded: &str) -> Result<(String, Vec<u8>), AddressError> {
    let (hrp, data, _variant) = decode_no_limit(encoded)?;
    let bytes = convert_bits(&data, 5, 8, false)?;
    Ok((hrp, bytes))
}

/// Encodes a 5-bit payload under `hrp` with the checksum of the chosen
/// variant. The output is always lowercase.
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String, AddressError> {
    validate_hrp(hrp)?;
    if let Some(&value) = data.iter().find(|&&value| value > 31) {
        return Err(AddressError::InvalidData(value));
    }
    let hrp = hrp.to_ascii_lowercase();

    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    for &value in data {
        encoded.push(CHARSET[value as usize] as char);
    }
    for value in create_checksum(&hrp, data, variant) {
        encoded.push(CHARSET[value as usize] as char);
    }
    Ok(encoded)
}

/// Regroups raw 8-bit address bytes into the 5-bit payload and encodes it
/// under `hrp` with the chosen variant.
pub fn encode_from_base256(hrp: &str, bytes: &[u8], variant: Variant) -> Result<String, AddressError> {
    let data = convert_bits(bytes, 8, 5, true)?;
    encode(hrp, &data, variant)
}

/// Regroups `data` from `from`-bit groups into `to`-bit groups. With `pad`,
/// a trailing partial group is zero-filled and emitted; without it, the
/// remainder must be shorter than `from` bits and zero-valued.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, AddressError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let mut converted =
        Vec::with_capacity((data.len() * from as usize + to as usize - 1) / to as usize);
    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(AddressError::InvalidData(value));
        }
        acc = (acc << from) | u32::from(value);
        bits += from;
        while bits >= to {
            bits -= to;
            converted.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            converted.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(AddressError::InvalidPadding);
    }
    Ok(converted)
}
