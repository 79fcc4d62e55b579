use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;
use tunnel_digest::prelude::*;

fn hex_digest(alg: CryptoAlg, chunks: &[&[u8]]) -> String {
    let algorithm = DigestAlgorithm::new(alg).unwrap().with_check(StateCheck::Strict);
    let mut context = DigestContext::from_algorithm(&algorithm).unwrap();
    for chunk in chunks {
        context.update(chunk).unwrap();
    }
    let mut output = [0u8; MAX_DIGEST_SIZE];
    let n = context.finish(&mut output).unwrap();
    assert_eq!(n, algorithm.size().unwrap());
    hex::encode(&output[..n])
}

fn million_a() -> Vec<u8> {
    vec![b'a'; 1_000_000]
}

const ABC_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

#[test_log::test]
fn test_md5_vectors() {
    assert_eq!(hex_digest(CryptoAlg::Md5, &[]), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex_digest(CryptoAlg::Md5, &[b"abc"]), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(hex_digest(CryptoAlg::Md5, &[b"message digest"]), "f96b697d7cb7938d525a2f31aaf161d0");
    assert_eq!(hex_digest(CryptoAlg::Md5, &[&million_a()]), "7707d6ae4e027c70eea2a935c2296f21");
}

#[test_log::test]
fn test_md4_vectors() {
    assert_eq!(hex_digest(CryptoAlg::Md4, &[]), "31d6cfe0d16ae931b73c59d7e0c089c0");
    assert_eq!(hex_digest(CryptoAlg::Md4, &[b"abc"]), "a448017aaf21d8525fc10ae87aa6729d");
}

#[test_log::test]
fn test_sha1_vectors() {
    assert_eq!(hex_digest(CryptoAlg::Sha1, &[]), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(hex_digest(CryptoAlg::Sha1, &[b"abc"]), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(hex_digest(CryptoAlg::Sha1, &[ABC_448]), "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
    assert_eq!(hex_digest(CryptoAlg::Sha1, &[&million_a()]), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

#[test_log::test]
fn test_sha224_vectors() {
    assert_eq!(hex_digest(CryptoAlg::Sha224, &[]), "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f");
    assert_eq!(hex_digest(CryptoAlg::Sha224, &[b"abc"]), "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7");
}

#[test_log::test]
fn test_sha256_vectors() {
    assert_eq!(
        hex_digest(CryptoAlg::Sha256, &[]),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha256, &[b"abc"]),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha256, &[ABC_448]),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha256, &[&million_a()]),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test_log::test]
fn test_sha384_vectors() {
    assert_eq!(
        hex_digest(CryptoAlg::Sha384, &[]),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha384, &[b"abc"]),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test_log::test]
fn test_sha512_vectors() {
    assert_eq!(
        hex_digest(CryptoAlg::Sha512, &[]),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha512, &[b"abc"]),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(
        hex_digest(CryptoAlg::Sha512, &[&million_a()]),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
}

#[test_log::test]
fn test_chunked_vectors() {
    assert_eq!(hex_digest(CryptoAlg::Sha1, &[b"a", b"", b"b", b"c"]), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
        hex_digest(CryptoAlg::Sha256, &[&ABC_448[..1], &ABC_448[1..55], &ABC_448[55..]]),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_resolution() {
    let none = DigestAlgorithm::new(CryptoAlg::None).unwrap();
    assert!(!none.defined());

    for alg in CryptoAlg::iter() {
        match DigestAlgorithm::new(alg) {
            Ok(algorithm) => {
                assert!(alg == CryptoAlg::None || alg.is_digest());
                assert_eq!(algorithm.name(), alg.name());
                if algorithm.defined() {
                    assert_eq!(DigestAlgorithm::from_name(alg.name()).unwrap(), algorithm);
                    assert!(algorithm.size().unwrap() <= MAX_DIGEST_SIZE);
                }
            },
            Err(err) => {
                assert!(alg.is_cipher());
                assert_eq!(err.kind(), DigestErrorKind::UnsupportedAlgorithm);
            },
        }
    }

    let err = DigestAlgorithm::from_name("RIPEMD160").unwrap_err();
    assert_eq!(err.kind(), DigestErrorKind::AlgorithmNotFound);
    assert_eq!(err.to_string(), "digest algorithm not found: RIPEMD160");
}

#[test]
fn test_one_shot() {
    let algorithm = DigestAlgorithm::from_name("sha224").unwrap();
    let digest = tunnel_digest::digest(&algorithm, b"abc").unwrap();
    assert_eq!(hex::encode(digest), "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7");
}

#[test]
fn test_shared_algorithm() {
    let algorithm = DigestAlgorithm::new(CryptoAlg::Sha256).unwrap();
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut context = DigestContext::from_algorithm(&algorithm).unwrap();
                context.update(&[i; 100]).unwrap();
                let mut output = Vec::new();
                context.finish_into(&mut output).unwrap();
                output
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let output = handle.join().unwrap();
        assert_eq!(output, tunnel_digest::digest(&algorithm, &[i as u8; 100]).unwrap());
    }
}

fn digest_alg() -> impl Strategy<Value = CryptoAlg> {
    prop::sample::select(CryptoAlg::iter().filter(|alg| alg.is_digest()).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn test_chunk_invariance(
        alg in digest_alg(),
        data in prop::collection::vec(any::<u8>(), 0..1024),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut offsets: Vec<usize> = cuts.iter().map(|cut| cut.index(data.len() + 1)).collect();
        offsets.sort_unstable();

        let mut chunks: Vec<&[u8]> = Vec::with_capacity(offsets.len() + 1);
        let mut start = 0;
        for offset in offsets {
            chunks.push(&data[start..offset]);
            start = offset;
        }
        chunks.push(&data[start..]);

        prop_assert_eq!(hex_digest(alg, &chunks), hex_digest(alg, &[&data]));
    }
}
