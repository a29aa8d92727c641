//! Suggested deployment prefix for first runs

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "brisk", "calm", "clever", "eager", "gentle", "golden", "humble", "keen", "lively", "mellow",
    "nimble", "plucky", "quick", "snappy", "sunny", "trusty", "vivid", "witty",
];

const NOUNS: &[&str] = &[
    "agent", "beacon", "canary", "falcon", "harbor", "kite", "lantern", "meadow", "otter",
    "parrot", "quill", "raven", "sparrow", "willow",
];

/// Generate a prefix suggestion like "nimble-parrot-2847"
pub fn suggest() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let number: u16 = rng.gen_range(1000..10000);
    format!("{}-{}-{}", adjective, noun, number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatstack_config::validation::validate_prefix;

    #[test]
    fn test_suggested_prefix_format() {
        let name = suggest();
        let parts: Vec<&str> = name.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
        let number: u16 = parts[2].parse().unwrap();
        assert!((1000..10000).contains(&number));
    }

    #[test]
    fn test_suggested_prefix_passes_prefix_validation() {
        for _ in 0..20 {
            assert!(validate_prefix(&suggest()).is_ok());
        }
    }
}
