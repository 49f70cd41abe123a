//! Runs the configured multiplication methods on a pair of operands.
//!
//! Timing wraps each multiplication call and nothing else; it never
//! changes which methods run or in what order.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use polymul_poly::{BlockMultiplier, PolyError, Polynomial};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::strategy::Method;

/// The product computed by one method.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Method that produced it.
    pub method: Method,
    /// The product polynomial.
    pub polynomial: Polynomial,
    /// Wall-clock time of the multiplication call.
    pub elapsed: Duration,
}

/// Outcome of one method: a product or the reason it could not run.
pub type MethodResult = Result<Product, PolyError>;

/// Multiplies operand pairs according to a [`RunConfig`].
#[derive(Clone, Debug)]
pub struct Runner {
    config: RunConfig,
    multiplier: BlockMultiplier,
}

impl Runner {
    /// Creates a runner for the given configuration.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let multiplier = BlockMultiplier::with_threshold(config.threshold);
        Self { config, multiplier }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every configured method, in order.
    ///
    /// A failing method does not stop the ones after it.
    #[must_use]
    pub fn run(&self, a: &Polynomial, b: &Polynomial) -> Vec<MethodResult> {
        self.config
            .strategy
            .methods()
            .iter()
            .map(|&method| self.run_method(method, a, b))
            .collect()
    }

    /// Runs a single method.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] for the block-recursive method
    /// on unequal degrees unless `pad_unequal` is set.
    pub fn run_method(&self, method: Method, a: &Polynomial, b: &Polynomial) -> MethodResult {
        let (polynomial, elapsed) = match method {
            Method::Direct => timed(|| Ok(a.mul_direct(b)))?,
            Method::BlockRecursive => self.run_block(a, b)?,
        };

        info!(
            %method,
            degree = polynomial.degree(),
            elapsed = ?elapsed,
            "multiplication finished"
        );

        Ok(Product {
            method,
            polynomial,
            elapsed,
        })
    }

    fn run_block(
        &self,
        a: &Polynomial,
        b: &Polynomial,
    ) -> Result<(Polynomial, Duration), PolyError> {
        let true_degree = a.degree() + b.degree();

        let padded = a.degree() != b.degree() && self.config.pad_unequal;
        let (a, b): (Cow<Polynomial>, Cow<Polynomial>) = if padded {
            let degree = a.degree().max(b.degree());
            debug!(
                left = a.degree(),
                right = b.degree(),
                degree,
                "padding operands to equal degree"
            );
            (Cow::Owned(a.extended(degree)?), Cow::Owned(b.extended(degree)?))
        } else {
            (Cow::Borrowed(a), Cow::Borrowed(b))
        };

        let (product, elapsed) = timed(|| a.mul_block_recursive_with(&b, &self.multiplier))?;

        let product = if self.config.trim {
            product.truncated(true_degree)?
        } else {
            product
        };
        Ok((product, elapsed))
    }
}

fn timed<T>(f: impl FnOnce() -> Result<T, PolyError>) -> Result<(T, Duration), PolyError> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}
