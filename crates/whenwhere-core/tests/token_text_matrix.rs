use rand::Rng;
use whenwhere_core::{decode_text, Token};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=64);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn url_safe_tokens_round_trip() {
    for _ in 0..200 {
        let blob = generate_blob();
        let token = Token::from_bytes(&blob);
        assert!(!token.as_str().contains(['+', '/', '=']));
        assert_eq!(token.to_bytes().unwrap(), blob);
    }
}

#[test]
fn standard_alphabet_and_padding_are_accepted() {
    for _ in 0..200 {
        let blob = generate_blob();
        let token = Token::from_bytes(&blob);
        let mut standard = token.as_str().replace('-', "+").replace('_', "/");
        while standard.len() % 4 != 0 {
            standard.push('=');
        }
        assert_eq!(decode_text(&standard).unwrap(), blob);
    }
}
