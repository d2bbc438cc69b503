use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snapblock::{compress, decompress, max_compressed_len};

fn compress_to_vec(input: &[u8], level: usize) -> Vec<u8> {
    let mut output = vec![0u8; max_compressed_len(input.len())];
    let n = compress(input, &mut output, level).unwrap();
    output.truncate(n);
    output
}

#[test]
fn test_every_strict_prefix_fails() {
    let input = b"truncation must never go unnoticed; ".repeat(20);
    let compressed = compress_to_vec(&input, 9);

    let mut output = vec![0u8; input.len()];
    for cut in 0..compressed.len() {
        assert!(
            decompress(&compressed[..cut], &mut output).is_err(),
            "prefix of {} of {} bytes decoded successfully",
            cut,
            compressed.len()
        );
    }
}

#[test]
fn test_prefixes_of_incompressible_stream_fail() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let mut input = vec![0u8; 600];
    rng.fill(&mut input[..]);
    let compressed = compress_to_vec(&input, 5);

    let mut output = vec![0u8; input.len()];
    for cut in 0..compressed.len() {
        assert!(decompress(&compressed[..cut], &mut output).is_err());
    }
}

#[test]
fn test_full_stream_still_decodes() {
    let input = b"sanity check for the prefix loop above".repeat(10);
    let compressed = compress_to_vec(&input, 9);
    let mut output = vec![0u8; input.len()];
    assert_eq!(decompress(&compressed, &mut output), Ok(input.len()));
    assert_eq!(output, input);
}

#[test]
fn test_corrupted_tag_detected() {
    let input = b"flipping bytes in the element stream".repeat(30);
    let compressed = compress_to_vec(&input, 9);
    let mut output = vec![0u8; input.len()];

    // Corrupt a byte in the middle of the element stream; the decoder must
    // not produce the original data (it may fail, or produce different
    // bytes that fail the length check).
    let mut corrupted = compressed.clone();
    let mid = corrupted.len() / 2;
    corrupted[mid] ^= 0x40;
    match decompress(&corrupted, &mut output) {
        Ok(n) => assert_ne!(&output[..n], &input[..]),
        Err(_) => {}
    }
}
