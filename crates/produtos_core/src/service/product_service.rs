//! Product use-case service.
//!
//! # Responsibility
//! - Provide registration/list/lookup/update/delete entry points.
//! - Enforce the price business rule before any storage access.
//! - Guard update/delete behind an existence check.
//!
//! # Invariants
//! - `price >= 0` is validated at registration only; update paths do not
//!   re-validate.
//! - Service APIs never bypass the repository contract.
//! - Under `LookupPolicy::AlwaysAbsent` no existence guard can pass, so
//!   update and delete always fail.

use crate::model::product::{Product, ProductId, ProductValidationError};
use crate::repo::product_repo::{ProductRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// How existence checks and by-id lookups are answered.
///
/// The legacy deployment shipped with the by-id lookup disabled: every
/// check reported absent without touching storage, which made update and
/// delete unreachable. `AlwaysAbsent` reproduces that contract for callers
/// that depend on it; `Query` performs the real primary-key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// Look the record up by primary key.
    #[default]
    Query,
    /// Report absent unconditionally, without querying storage.
    AlwaysAbsent,
}

/// Service error for product use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A business rule rejected the input before storage was touched.
    Validation(ProductValidationError),
    /// The targeted product does not exist (or the lookup is stubbed).
    MissingProduct(ProductId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MissingProduct(id) => write!(f, "product not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::MissingProduct(_) => None,
        }
    }
}

impl From<ProductValidationError> for ServiceError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::MissingProduct(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for product CRUD operations.
pub struct ProductService<R: ProductRepository> {
    repo: R,
    lookup_policy: LookupPolicy,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service with real by-id lookups.
    pub fn new(repo: R) -> Self {
        Self::with_lookup_policy(repo, LookupPolicy::Query)
    }

    /// Creates a service with an explicit lookup policy.
    pub fn with_lookup_policy(repo: R, lookup_policy: LookupPolicy) -> Self {
        Self {
            repo,
            lookup_policy,
        }
    }

    /// Registers a new product.
    ///
    /// # Contract
    /// - Fails with `ServiceError::Validation` when `price < 0`, before any
    ///   storage access.
    /// - Returns the saved record carrying its storage-assigned id.
    pub fn register_product(&self, product: Product) -> ServiceResult<Product> {
        product.validate()?;
        Ok(self.repo.save(product)?)
    }

    /// Lists every stored product.
    ///
    /// Row order is whatever storage returns; callers must not rely on it.
    pub fn list_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.repo.find_all()?)
    }

    /// Finds one product by id, routed through the lookup policy.
    ///
    /// Absence is a value, not an error.
    pub fn find_product_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        self.lookup(id)
    }

    /// Replaces the product stored under `id` with the given values.
    ///
    /// # Contract
    /// - Fails with `ServiceError::MissingProduct` when the existence guard
    ///   reports absent.
    /// - Returns the updated record carrying `id`.
    /// - Does not re-validate price; registration is the only gate.
    pub fn update_product(&self, mut product: Product, id: ProductId) -> ServiceResult<Product> {
        if self.lookup(id)?.is_none() {
            return Err(ServiceError::MissingProduct(id));
        }

        product.id = Some(id);
        self.repo.update(&product)?;
        Ok(product)
    }

    /// Deletes the product stored under `id`.
    ///
    /// # Contract
    /// - Returns `true` when the record existed and was removed.
    /// - With `LookupPolicy::Query`, a missing id yields `Ok(false)`.
    /// - With `LookupPolicy::AlwaysAbsent`, the guard failure keeps the
    ///   legacy erroring contract (`ServiceError::MissingProduct`).
    pub fn delete_product(&self, id: ProductId) -> ServiceResult<bool> {
        if self.lookup(id)?.is_none() {
            return match self.lookup_policy {
                LookupPolicy::Query => Ok(false),
                LookupPolicy::AlwaysAbsent => Err(ServiceError::MissingProduct(id)),
            };
        }

        Ok(self.repo.delete_by_id(id)?)
    }

    fn lookup(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        match self.lookup_policy {
            LookupPolicy::Query => Ok(self.repo.find_by_id(id)?),
            LookupPolicy::AlwaysAbsent => Ok(None),
        }
    }
}
