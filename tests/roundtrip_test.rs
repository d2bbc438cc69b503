use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snapblock::{compress, decompress, decompressed_len, max_compressed_len};

fn roundtrip(input: &[u8], level: usize) {
    let mut compressed = vec![0u8; max_compressed_len(input.len())];
    let n = compress(input, &mut compressed, level).unwrap();
    compressed.truncate(n);

    assert_eq!(decompressed_len(&compressed).unwrap(), input.len());

    let mut output = vec![0u8; input.len()];
    let produced = decompress(&compressed, &mut output).unwrap();
    assert_eq!(produced, input.len());
    assert_eq!(output, input);
}

#[test]
fn test_roundtrip_all_levels() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut random = vec![0u8; 4096];
    rng.fill(&mut random[..]);

    let text = b"round and round and round the data goes ".repeat(100);
    let zeros = vec![0u8; 10_000];

    for level in 0..=9 {
        roundtrip(&random, level);
        roundtrip(&text, level);
        roundtrip(&zeros, level);
        roundtrip(b"x", level);
        roundtrip(&[1, 2, 3, 4, 5, 6, 7], level);
    }
}

#[test]
fn test_roundtrip_varint_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(42);
    for &len in &[1usize, 14, 15, 16, 127, 128, 16383, 16384, 65537] {
        let mut input = vec![0u8; len];
        rng.fill(&mut input[..]);
        roundtrip(&input, 9);
        roundtrip(&input, 1);
    }
}

#[test]
fn test_roundtrip_structured_data() {
    // Repeating records with small variations, the codec's sweet spot.
    let mut input = Vec::new();
    for i in 0u32..2000 {
        input.extend_from_slice(b"record-");
        input.extend_from_slice(&(i / 7).to_le_bytes());
        input.extend_from_slice(b":payload;");
    }
    for level in [0, 3, 6, 9] {
        roundtrip(&input, level);
    }
}

#[test]
fn test_roundtrip_long_matches() {
    // Matches longer than one copy element can express, forcing chunking.
    let mut input = vec![7u8; 200_000];
    input.extend_from_slice(b"tail");
    roundtrip(&input, 9);
    roundtrip(&input, 0);
}

#[test]
fn test_roundtrip_far_offsets() {
    // A block repeated beyond the 16-bit offset range exercises copy-3.
    let mut rng = StdRng::seed_from_u64(7);
    let mut block = vec![0u8; 70_000];
    rng.fill(&mut block[..]);
    let mut input = block.clone();
    input.extend_from_slice(&block);
    roundtrip(&input, 9);
}

#[test]
fn test_repeated_ascii_compresses_small() {
    // 32 identical bytes must shrink well below the input plus prefix.
    let input = [b'a'; 32];
    let mut compressed = vec![0u8; max_compressed_len(input.len())];
    let n = compress(&input, &mut compressed, 9).unwrap();
    assert!(n < 37);
    compressed.truncate(n);

    let mut output = [0u8; 32];
    assert_eq!(decompress(&compressed, &mut output), Ok(32));
    assert_eq!(output, input);
}

#[test]
fn test_oversized_output_buffer_ok() {
    // Output capacity beyond the declared length is scratch space.
    let input = b"capacity may exceed the declared length".repeat(8);
    let mut compressed = vec![0u8; max_compressed_len(input.len())];
    let n = compress(&input, &mut compressed, 6).unwrap();
    compressed.truncate(n);

    let mut output = vec![0xaa; input.len() + 100];
    assert_eq!(decompress(&compressed, &mut output), Ok(input.len()));
    assert_eq!(&output[..input.len()], &input[..]);
}
