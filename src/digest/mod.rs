use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use log::debug;
use static_assertions::assert_impl_all;

mod context;
mod errors;

pub use self::context::Digester;
pub use self::errors::{DigestError, ErrorKind, Result};
use crate::algs::CryptoAlg;
use crate::backend::{Backend, MdType, RustCrypto};

/// StateCheck controls whether digest state requirements are verified.
///
/// Violations of algorithm and context states are programming errors. [StateCheck::Strict]
/// reports them as [ErrorKind::UndefinedAlgorithm] and [ErrorKind::UninitializedState].
/// [StateCheck::Relaxed] skips these checks and leaves callers responsible for respecting the
/// state machine, though missing backend state is still reported as backend failure. Backend
/// failures are always reported.
///
/// Defaults to [StateCheck::Strict] in debug builds and [StateCheck::Relaxed] otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateCheck {
    Strict,
    Relaxed,
}

impl StateCheck {
    pub fn is_strict(self) -> bool {
        self == StateCheck::Strict
    }
}

impl Default for StateCheck {
    fn default() -> StateCheck {
        if cfg!(debug_assertions) {
            StateCheck::Strict
        } else {
            StateCheck::Relaxed
        }
    }
}

fn md_type_of(alg: CryptoAlg) -> Option<MdType> {
    let md_type = match alg {
        CryptoAlg::Md4 => MdType::Md4,
        CryptoAlg::Md5 => MdType::Md5,
        CryptoAlg::Sha1 => MdType::Sha1,
        CryptoAlg::Sha224 => MdType::Sha224,
        CryptoAlg::Sha256 => MdType::Sha256,
        CryptoAlg::Sha384 => MdType::Sha384,
        CryptoAlg::Sha512 => MdType::Sha512,
        _ => return None,
    };
    Some(md_type)
}

fn crypto_alg_of(md_type: MdType) -> CryptoAlg {
    match md_type {
        MdType::Md4 => CryptoAlg::Md4,
        MdType::Md5 => CryptoAlg::Md5,
        MdType::Sha1 => CryptoAlg::Sha1,
        MdType::Sha224 => CryptoAlg::Sha224,
        MdType::Sha256 => CryptoAlg::Sha256,
        MdType::Sha384 => CryptoAlg::Sha384,
        MdType::Sha512 => CryptoAlg::Sha512,
    }
}

/// Algorithm identifies one digest algorithm of backend `B`.
///
/// It is a lightweight handle to backend static metadata, either undefined or resolved from
/// [CryptoAlg] or backend name.
pub struct Algorithm<B: Backend = RustCrypto> {
    alg: CryptoAlg,
    info: Option<&'static B::Info>,
    check: StateCheck,
    _backend: PhantomData<fn() -> B>,
}

assert_impl_all!(Algorithm: Send, Sync, Copy);

impl<B: Backend> Algorithm<B> {
    /// Constructs undefined algorithm.
    pub fn undefined() -> Algorithm<B> {
        Algorithm { alg: CryptoAlg::None, info: None, check: StateCheck::default(), _backend: PhantomData }
    }

    /// Resolves digest for given algorithm.
    ///
    /// [CryptoAlg::None] resolves to undefined algorithm. Algorithms that are not digests or not
    /// compiled into backend fail with [ErrorKind::UnsupportedAlgorithm].
    pub fn new(alg: CryptoAlg) -> Result<Algorithm<B>> {
        if alg == CryptoAlg::None {
            return Ok(Algorithm::undefined());
        }
        let Some(info) = md_type_of(alg).and_then(B::info_from_type) else {
            let msg = format!("{}: not usable", alg.name());
            return Err(DigestError::with_message(ErrorKind::UnsupportedAlgorithm, msg));
        };
        debug_assert_eq!(crypto_alg_of(B::md_type(info)), alg);
        Ok(Algorithm { alg, info: Some(info), check: StateCheck::default(), _backend: PhantomData })
    }

    /// Resolves digest by backend defined name.
    pub fn from_name(name: &str) -> Result<Algorithm<B>> {
        match B::info_from_string(name) {
            Some(info) => Ok(Algorithm::from_info(info)),
            None => {
                debug!("digest {:?} not found in backend registry", name);
                Err(DigestError::with_message(ErrorKind::AlgorithmNotFound, name))
            },
        }
    }

    pub(crate) fn from_info(info: &'static B::Info) -> Algorithm<B> {
        let alg = crypto_alg_of(B::md_type(info));
        Algorithm { alg, info: Some(info), check: StateCheck::default(), _backend: PhantomData }
    }

    /// Specifies state check mode for this algorithm and digesters constructed from it.
    pub fn with_check(self, check: StateCheck) -> Self {
        Algorithm { check, ..self }
    }

    pub fn check(&self) -> StateCheck {
        self.check
    }

    /// Returns canonical name of this algorithm, "NONE" for undefined algorithm.
    pub fn name(&self) -> &'static str {
        self.alg.name()
    }

    pub fn crypto_alg(&self) -> CryptoAlg {
        self.alg
    }

    /// Returns digest size in bytes.
    ///
    /// Fails with [ErrorKind::UndefinedAlgorithm] on undefined algorithm in strict mode, returns
    /// zero in relaxed mode.
    pub fn size(&self) -> Result<usize> {
        self.check_defined()?;
        Ok(self.info.map_or(0, |info| B::size(info)))
    }

    pub fn defined(&self) -> bool {
        self.info.is_some()
    }

    pub(crate) fn info(&self) -> Option<&'static B::Info> {
        self.info
    }

    fn check_defined(&self) -> Result<()> {
        if self.check.is_strict() && self.info.is_none() {
            return Err(DigestError::new(ErrorKind::UndefinedAlgorithm));
        }
        Ok(())
    }
}

impl<B: Backend> Clone for Algorithm<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Backend> Copy for Algorithm<B> {}

impl<B: Backend> Default for Algorithm<B> {
    fn default() -> Self {
        Algorithm::undefined()
    }
}

impl<B: Backend> PartialEq for Algorithm<B> {
    fn eq(&self, other: &Self) -> bool {
        self.alg == other.alg && self.defined() == other.defined()
    }
}

impl<B: Backend> Eq for Algorithm<B> {}

impl<B: Backend> Debug for Algorithm<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm").field("name", &self.name()).field("defined", &self.defined()).finish()
    }
}

/// Computes digest of `data` in one shot.
pub fn digest<B: Backend>(algorithm: &Algorithm<B>, data: &[u8]) -> Result<Vec<u8>> {
    let mut digester = Digester::from_algorithm(algorithm)?;
    digester.update(data)?;
    let mut output = Vec::with_capacity(digester.size()?);
    digester.finish_into(&mut output)?;
    Ok(output)
}
