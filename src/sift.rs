pub fn sift(source: &str) -> Vec<u8> {
    source
        .bytes()
        .filter(|b| matches!(b, b'+' | b'-' | b'<' | b'>' | b'.' | b',' | b'[' | b']'))
        .collect()
}
