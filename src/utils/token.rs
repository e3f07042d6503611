use rand::Rng;

/// Generates an opaque processor charge id, e.g. `mock_ch_9f8a6c2e4b1d7e3a`.
/// 8 random bytes rendered as hex, prefixed with the processor tag.
pub fn generate_processor_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..8)
        .map(|_| format!("{:02x}", rng.gen_range(0..=255u8)))
        .collect();
    format!("{prefix}_{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_id_shape() {
        let id = generate_processor_id("mock_ch");
        assert!(id.starts_with("mock_ch_"));

        let token = id.strip_prefix("mock_ch_").unwrap();
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_processor_ids_differ() {
        // Collision over 8 random bytes is astronomically unlikely.
        let a = generate_processor_id("mock_ch");
        let b = generate_processor_id("mock_ch");
        assert_ne!(a, b);
    }
}
