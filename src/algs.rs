use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// CryptoAlg names cipher and digest algorithms independent of crypto backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[non_exhaustive]
pub enum CryptoAlg {
    #[default]
    #[strum(serialize = "NONE")]
    None,

    #[strum(serialize = "AES-128-CBC")]
    Aes128Cbc,
    #[strum(serialize = "AES-192-CBC")]
    Aes192Cbc,
    #[strum(serialize = "AES-256-CBC")]
    Aes256Cbc,
    #[strum(serialize = "DES-CBC")]
    DesCbc,
    #[strum(serialize = "DES-EDE3-CBC")]
    DesEde3Cbc,
    #[strum(serialize = "BF-CBC")]
    BfCbc,
    #[strum(serialize = "AES-256-CTR")]
    Aes256Ctr,

    #[strum(serialize = "MD4")]
    Md4,
    #[strum(serialize = "MD5")]
    Md5,
    #[strum(serialize = "SHA1")]
    Sha1,
    #[strum(serialize = "SHA224")]
    Sha224,
    #[strum(serialize = "SHA256")]
    Sha256,
    #[strum(serialize = "SHA384")]
    Sha384,
    #[strum(serialize = "SHA512")]
    Sha512,
}

impl CryptoAlg {
    /// Returns canonical display name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks up algorithm by its canonical name.
    pub fn lookup(name: &str) -> Option<CryptoAlg> {
        CryptoAlg::from_str(name).ok()
    }

    pub fn is_digest(self) -> bool {
        use CryptoAlg::*;
        matches!(self, Md4 | Md5 | Sha1 | Sha224 | Sha256 | Sha384 | Sha512)
    }

    pub fn is_cipher(self) -> bool {
        self != CryptoAlg::None && !self.is_digest()
    }
}
