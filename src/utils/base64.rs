use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

/// URL-safe engine that accepts non-zero trailing bits.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Converts a standard Base64 string to the URL-safe alphabet.
///
/// Padding is left untouched.
pub fn url_safe_base64_apply(input: &str) -> String {
    input.replace('+', "-").replace('/', "_")
}

/// Pads a Base64 string with `=` up to the next multiple of four.
///
/// Any padding already present is dropped first, so at most three `=` are
/// ever appended.
pub fn base64_pad(input: &str) -> String {
    let trimmed = input.trim_end_matches('=');
    let missing = (4 - trimmed.len() % 4) % 4;
    let mut padded = String::with_capacity(trimmed.len() + missing);
    padded.push_str(trimmed);
    padded.extend(std::iter::repeat('=').take(missing));
    padded
}

/// Decodes a URL-safe Base64 string to UTF-8 text.
///
/// Standard-alphabet input is accepted as well. Missing padding is restored
/// before decoding.
///
/// # Returns
/// `None` if the input is not valid Base64 or does not decode to UTF-8.
pub fn url_safe_base64_decode(input: &str) -> Option<String> {
    let padded = base64_pad(&url_safe_base64_apply(input));
    let decoded = LENIENT_URL_SAFE.decode(padded).ok()?;
    String::from_utf8(decoded).ok()
}

/// Encodes a string to URL-safe Base64 without padding.
pub fn url_safe_base64_encode(input: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_pad() {
        assert_eq!(base64_pad("YQ"), "YQ==");
        assert_eq!(base64_pad("YWI"), "YWI=");
        assert_eq!(base64_pad("YWJj"), "YWJj");
        assert_eq!(base64_pad("YQ=="), "YQ==");
        assert_eq!(base64_pad("YQ="), "YQ==");
    }

    #[test]
    fn test_url_safe_base64_decode_unpadded() {
        assert_eq!(
            url_safe_base64_decode("YWVzLTI1Ni1nY206c2VjcmV0QDEuMi4zLjQ6ODM4OA"),
            Some("aes-256-gcm:secret@1.2.3.4:8388".to_string())
        );
    }

    #[test]
    fn test_url_safe_base64_decode_accepts_both_alphabets() {
        let expected = Some("aes-256-gcm:??>>@h.example:8388".to_string());
        assert_eq!(
            url_safe_base64_decode("YWVzLTI1Ni1nY206Pz8-PkBoLmV4YW1wbGU6ODM4OA"),
            expected
        );
        assert_eq!(
            url_safe_base64_decode("YWVzLTI1Ni1nY206Pz8+PkBoLmV4YW1wbGU6ODM4OA=="),
            expected
        );
    }

    #[test]
    fn test_url_safe_base64_decode_rejects_garbage() {
        assert_eq!(url_safe_base64_decode("not base64!"), None);
        assert_eq!(url_safe_base64_decode("Y"), None);
        // valid Base64, but not UTF-8
        assert_eq!(url_safe_base64_decode("__79"), None);
    }

    #[test]
    fn test_url_safe_base64_encode() {
        assert_eq!(
            url_safe_base64_encode("aes-256-gcm:~~~@h.example:8388"),
            "YWVzLTI1Ni1nY206fn5-QGguZXhhbXBsZTo4Mzg4"
        );
    }
}
