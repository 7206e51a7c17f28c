//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `produto` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` assigns the database-generated key back onto the value.
//! - `update` distinguishes not-found from storage failure instead of
//!   collapsing both into one result.
//! - Read paths surface storage errors; they never mask them as absence.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::product::{Product, ProductId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PRODUCT_SELECT_SQL: &str = "SELECT
    id,
    nome,
    preco,
    quantidade,
    categoria
FROM produto";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for product persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Statement execution or transport failure at the storage layer.
    Db(DbError),
    /// The targeted row does not exist.
    NotFound(ProductId),
    /// A mutation was attempted with a record that has no assigned id.
    MissingId,
    /// The connection has not run migrations up to this binary's version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// The connection is migrated but a required table is absent.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "product not found: {id}"),
            Self::MissingId => write!(f, "product has no storage-assigned id"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository contract for product CRUD operations.
pub trait ProductRepository {
    /// Inserts the record and returns it carrying its assigned id.
    fn save(&self, product: Product) -> RepoResult<Product>;
    /// Returns every stored product in storage row order.
    fn find_all(&self) -> RepoResult<Vec<Product>>;
    /// Looks one product up by primary key.
    fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Rewrites the row addressed by the product's own id.
    fn update(&self, product: &Product) -> RepoResult<()>;
    /// Deletes by primary key; returns whether a row matched.
    fn delete_by_id(&self, id: ProductId) -> RepoResult<bool>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is behind.
    /// - `MissingRequiredTable` when `produto` is absent despite the version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected = latest_version();
        let actual = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual < expected {
            return Err(RepoError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table_present: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'produto'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_present == 0 {
            return Err(RepoError::MissingRequiredTable("produto"));
        }

        Ok(Self { conn })
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn save(&self, mut product: Product) -> RepoResult<Product> {
        self.conn.execute(
            "INSERT INTO produto (nome, preco, quantidade, categoria)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                product.name.as_str(),
                product.price,
                product.quantity,
                product.category.as_str(),
            ],
        )?;

        product.id = Some(self.conn.last_insert_rowid());
        Ok(product)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        // No ORDER BY: callers get storage row order and must not rely on it.
        let mut stmt = self.conn.prepare(&format!("{PRODUCT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut products = Vec::new();

        while let Some(row) = rows.next()? {
            products.push(parse_product_row(row)?);
        }

        Ok(products)
    }

    fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, product: &Product) -> RepoResult<()> {
        let id = product.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE produto
             SET
                nome = ?1,
                preco = ?2,
                quantidade = ?3,
                categoria = ?4
             WHERE id = ?5;",
            params![
                product.name.as_str(),
                product.price,
                product.quantity,
                product.category.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: ProductId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM produto WHERE id = ?1;", params![id])?;

        Ok(changed > 0)
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    Ok(Product {
        id: Some(row.get("id")?),
        name: row.get("nome")?,
        price: row.get("preco")?,
        quantity: row.get("quantidade")?,
        category: row.get("categoria")?,
    })
}
