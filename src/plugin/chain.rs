//! Decorator Chains
//!
//! An ordered list of factories that wrap one contract instance in another.
//! The first factory added produces the outermost decorator; each factory
//! receives the result of executing the remainder of the chain.

use std::fmt;
use std::sync::Arc;
use log::trace;

use crate::plugin::registry::PluginContract;

/// Factory that decorates an instance of contract `C`
pub type ProxyFactory<C> = Arc<dyn Fn(Arc<C>) -> Arc<C> + Send + Sync>;

/// Ordered decorator chain for one contract
pub struct ChainedProxyBuilder<C: ?Sized> {
    factories: Vec<ProxyFactory<C>>,
}

impl<C: ?Sized> ChainedProxyBuilder<C> {
    /// Create an empty chain
    pub fn new() -> Self {
        Self { factories: Vec::new() }
    }

    /// Append a factory; it wraps everything added after it
    pub fn add<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(Arc<C>) -> Arc<C> + Send + Sync + 'static,
    {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Append an already shared factory
    pub fn add_shared(&mut self, factory: ProxyFactory<C>) -> &mut Self {
        self.factories.push(factory);
        self
    }

    /// Append every factory of `other`, keeping their order
    pub fn add_range(&mut self, other: &ChainedProxyBuilder<C>) -> &mut Self {
        self.factories.extend(other.factories.iter().cloned());
        self
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<C: ?Sized + PluginContract> ChainedProxyBuilder<C> {
    /// Run the chain against `original`.
    ///
    /// Factories are applied right to left so the first one added ends up
    /// outermost. An empty chain yields the contract's pass-through decorator.
    pub fn execute(&self, original: Arc<C>) -> Arc<C> {
        if self.factories.is_empty() {
            return C::passthrough(original);
        }

        trace!("Executing {} chain with {} factories", C::NAME, self.factories.len());
        self.factories
            .iter()
            .rev()
            .fold(original, |inner, factory| factory(inner))
    }
}

impl<C: ?Sized> Clone for ChainedProxyBuilder<C> {
    fn clone(&self) -> Self {
        Self { factories: self.factories.clone() }
    }
}

impl<C: ?Sized> Default for ChainedProxyBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ChainedProxyBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedProxyBuilder")
            .field("factories", &self.factories.len())
            .finish()
    }
}
