use std::fmt::{self, Debug, Formatter};

use bytes::BufMut;
use log::trace;
use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::errors::{DigestError, ErrorKind, Result};
use super::{Algorithm, StateCheck};
use crate::backend::{Backend, BackendError, RustCrypto};

fn backend_error(kind: ErrorKind, err: BackendError) -> DigestError {
    DigestError::with_message(kind, err.to_string()).cause_by(err)
}

/// Digester computes digest incrementally.
///
/// A digester is empty after construction. [Digester::init] binds it to an algorithm and acquires
/// backend context, after which input is fed through [Digester::update] and digest is written by
/// [Digester::finish]. Digest could be computed once per init, further updates or finishes fail
/// with [ErrorKind::UninitializedState] until next init.
///
/// Backend context is released on next init or drop.
pub struct Digester<B: Backend = RustCrypto> {
    ctx: Option<B::Context>,
    info: Option<&'static B::Info>,
    initialized: bool,
    finished: bool,
    check: StateCheck,
}

assert_impl_all!(Digester: Send);
assert_not_impl_any!(Digester: Sync, Clone);

impl<B: Backend> Digester<B> {
    /// Constructs empty digester with default state check.
    pub fn new() -> Digester<B> {
        Digester::with_check(StateCheck::default())
    }

    pub fn with_check(check: StateCheck) -> Digester<B> {
        Digester { ctx: None, info: None, initialized: false, finished: false, check }
    }

    /// Constructs digester initialized with given algorithm, sharing its state check mode.
    pub fn from_algorithm(algorithm: &Algorithm<B>) -> Result<Digester<B>> {
        let mut digester = Digester::with_check(algorithm.check());
        digester.init(algorithm)?;
        Ok(digester)
    }

    /// Starts a new digest computation, releasing context of previous one if any.
    ///
    /// Undefined algorithm fails with [ErrorKind::UndefinedAlgorithm] regardless of state check
    /// mode. Digester stays empty on failure.
    pub fn init(&mut self, algorithm: &Algorithm<B>) -> Result<()> {
        self.erase();
        let Some(info) = algorithm.info() else {
            let description = "digest init on undefined algorithm";
            return Err(DigestError::with_description(ErrorKind::UndefinedAlgorithm, description));
        };
        let mut ctx = B::init_ctx(info).map_err(|err| backend_error(ErrorKind::DigestInitError, err))?;
        B::starts(&mut ctx).map_err(|err| backend_error(ErrorKind::DigestInitError, err))?;
        trace!("digest context for {} acquired", algorithm.name());
        self.ctx = Some(ctx);
        self.info = Some(info);
        self.initialized = true;
        Ok(())
    }

    /// Feeds input to running digest.
    pub fn update(&mut self, input: &[u8]) -> Result<()> {
        let ctx = self.running_context(ErrorKind::DigestUpdateError, "md_update")?;
        B::update(ctx, input).map_err(|err| backend_error(ErrorKind::DigestUpdateError, err))
    }

    /// Writes digest to head of `output` and returns digest size.
    ///
    /// `output` must be at least [Digester::size] bytes, otherwise it fails with
    /// [ErrorKind::FinalOverflow].
    pub fn finish(&mut self, output: &mut [u8]) -> Result<usize> {
        let size = self.size_();
        let ctx = self.running_context(ErrorKind::DigestFinalError, "md_finish")?;
        if output.len() < size {
            let msg = format!("expect {} bytes, got {}", size, output.len());
            return Err(DigestError::with_message(ErrorKind::FinalOverflow, msg));
        }
        B::finish(ctx, &mut output[..size]).map_err(|err| backend_error(ErrorKind::DigestFinalError, err))?;
        self.finished = true;
        Ok(size)
    }

    /// Appends digest to `buf` and returns digest size.
    pub fn finish_into(&mut self, buf: &mut impl BufMut) -> Result<usize> {
        let size = self.size()?;
        if buf.remaining_mut() < size {
            let msg = format!("expect {} bytes, got {}", size, buf.remaining_mut());
            return Err(DigestError::with_message(ErrorKind::FinalOverflow, msg));
        }
        let mut output = vec![0u8; size];
        let n = self.finish(&mut output)?;
        buf.put_slice(&output[..n]);
        Ok(n)
    }

    /// Returns digest size of bound algorithm.
    pub fn size(&self) -> Result<usize> {
        self.check_initialized()?;
        Ok(self.size_())
    }

    /// Returns algorithm this digester is bound to, undefined if empty.
    pub fn algorithm(&self) -> Algorithm<B> {
        match self.info {
            None => Algorithm::undefined().with_check(self.check),
            Some(info) => Algorithm::from_info(info).with_check(self.check),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn check(&self) -> StateCheck {
        self.check
    }

    fn size_(&self) -> usize {
        self.info.map_or(0, |info| B::size(info))
    }

    fn check_initialized(&self) -> Result<()> {
        if self.check.is_strict() && !self.initialized {
            return Err(DigestError::new(ErrorKind::UninitializedState));
        }
        Ok(())
    }

    fn running_context(&mut self, kind: ErrorKind, operation: &'static str) -> Result<&mut B::Context> {
        self.check_initialized()?;
        if self.finished {
            return Err(DigestError::with_description(ErrorKind::UninitializedState, "digest already finished"));
        }
        match self.ctx.as_mut() {
            Some(ctx) => Ok(ctx),
            None => Err(backend_error(kind, BackendError::new(operation, "no digest context"))),
        }
    }

    fn erase(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            drop(ctx);
            trace!("digest context released");
        }
        self.info = None;
        self.initialized = false;
        self.finished = false;
    }
}

impl<B: Backend> Default for Digester<B> {
    fn default() -> Self {
        Digester::new()
    }
}

impl<B: Backend> Drop for Digester<B> {
    fn drop(&mut self) {
        self.erase();
    }
}

impl<B: Backend> Debug for Digester<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digester")
            .field("algorithm", &self.algorithm().name())
            .field("initialized", &self.initialized)
            .field("finished", &self.finished)
            .field("check", &self.check)
            .finish()
    }
}
