use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use digest::DynDigest;
use lazy_static::lazy_static;

use super::{Backend, BackendError, MdType};

type State = Box<dyn DynDigest + Send>;

fn new_state<D>() -> State
where
    D: DynDigest + Default + Send + 'static,
{
    Box::new(D::default())
}

/// Static metadata of digests implemented by RustCrypto crates.
pub struct MdInfo {
    md_type: MdType,
    name: &'static str,
    size: usize,
    block_size: usize,
    new_state: fn() -> State,
}

impl MdInfo {
    pub fn md_type(&self) -> MdType {
        self.md_type
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns internal block size, which HMAC constructions pad keys to.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Debug for MdInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdInfo").field("name", &self.name).field("size", &self.size).finish()
    }
}

static MD4_INFO: MdInfo =
    MdInfo { md_type: MdType::Md4, name: "MD4", size: 16, block_size: 64, new_state: new_state::<md4::Md4> };
static MD5_INFO: MdInfo =
    MdInfo { md_type: MdType::Md5, name: "MD5", size: 16, block_size: 64, new_state: new_state::<md5::Md5> };
static SHA1_INFO: MdInfo =
    MdInfo { md_type: MdType::Sha1, name: "SHA1", size: 20, block_size: 64, new_state: new_state::<sha1::Sha1> };
static SHA224_INFO: MdInfo =
    MdInfo { md_type: MdType::Sha224, name: "SHA224", size: 28, block_size: 64, new_state: new_state::<sha2::Sha224> };
static SHA256_INFO: MdInfo =
    MdInfo { md_type: MdType::Sha256, name: "SHA256", size: 32, block_size: 64, new_state: new_state::<sha2::Sha256> };
static SHA384_INFO: MdInfo =
    MdInfo { md_type: MdType::Sha384, name: "SHA384", size: 48, block_size: 128, new_state: new_state::<sha2::Sha384> };
static SHA512_INFO: MdInfo =
    MdInfo { md_type: MdType::Sha512, name: "SHA512", size: 64, block_size: 128, new_state: new_state::<sha2::Sha512> };

static MD_LIST: [&MdInfo; 7] =
    [&MD4_INFO, &MD5_INFO, &SHA1_INFO, &SHA224_INFO, &SHA256_INFO, &SHA384_INFO, &SHA512_INFO];

lazy_static! {
    static ref MD_REGISTRY: HashMap<&'static str, &'static MdInfo> =
        MD_LIST.iter().map(|info| (info.name, *info)).collect();
}

/// Backend built on RustCrypto hash crates.
#[derive(Clone, Copy, Debug, Default)]
pub struct RustCrypto;

/// Running hash state of [RustCrypto] backend.
pub struct RustCryptoContext {
    info: &'static MdInfo,
    state: State,
}

impl Debug for RustCryptoContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RustCryptoContext").field("info", self.info).finish_non_exhaustive()
    }
}

impl Backend for RustCrypto {
    type Info = MdInfo;
    type Context = RustCryptoContext;

    const MAX_DIGEST_SIZE: usize = 64;

    fn info_from_type(md_type: MdType) -> Option<&'static MdInfo> {
        let info = match md_type {
            MdType::Md4 => &MD4_INFO,
            MdType::Md5 => &MD5_INFO,
            MdType::Sha1 => &SHA1_INFO,
            MdType::Sha224 => &SHA224_INFO,
            MdType::Sha256 => &SHA256_INFO,
            MdType::Sha384 => &SHA384_INFO,
            MdType::Sha512 => &SHA512_INFO,
        };
        Some(info)
    }

    fn info_from_string(name: &str) -> Option<&'static MdInfo> {
        MD_REGISTRY.get(name.to_ascii_uppercase().as_str()).copied()
    }

    fn md_type(info: &MdInfo) -> MdType {
        info.md_type
    }

    fn size(info: &MdInfo) -> usize {
        info.size
    }

    fn init_ctx(info: &'static MdInfo) -> Result<RustCryptoContext, BackendError> {
        Ok(RustCryptoContext { info, state: (info.new_state)() })
    }

    fn starts(ctx: &mut RustCryptoContext) -> Result<(), BackendError> {
        ctx.state.reset();
        Ok(())
    }

    fn update(ctx: &mut RustCryptoContext, input: &[u8]) -> Result<(), BackendError> {
        ctx.state.update(input);
        Ok(())
    }

    fn finish(ctx: &mut RustCryptoContext, output: &mut [u8]) -> Result<(), BackendError> {
        if output.len() != ctx.info.size {
            let reason = format!("{} expects {} output bytes, got {}", ctx.info.name, ctx.info.size, output.len());
            return Err(BackendError::new("md_finish", reason));
        }
        ctx.state.finalize_into_reset(output).map_err(|_| BackendError::new("md_finish", "invalid buffer size"))
    }
}
