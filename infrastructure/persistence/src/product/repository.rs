use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error, instrument, warn};

use business::domain::errors::{DataValidationError, RepositoryError};
use business::domain::product::category::Category;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_PRODUCTS: &str =
    "SELECT id, name, description, price, available, category FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where<T>(&self, predicate: &str, value: T) -> Result<Vec<Product>, RepositoryError>
    where
        T: 'static + Send + for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres>,
    {
        let sql = format!("{SELECT_PRODUCTS} WHERE {predicate} ORDER BY id");
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

/// Commits on success; otherwise rolls back and hands the original error back.
async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    result: Result<T, RepositoryError>,
) -> Result<T, RepositoryError> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(map_sqlx_error)?;
            Ok(value)
        }
        Err(e) => {
            warn!(error = %e, "rolling back product transaction");
            if let Err(rollback) = tx.rollback().await {
                warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}

/// Data exceptions (class 22) and integrity violations (class 23) surface as
/// validation failures; anything else is a storage fault.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    let violation = err
        .as_database_error()
        .filter(|db_err| {
            db_err
                .code()
                .is_some_and(|code| code.starts_with("22") || code.starts_with("23"))
        })
        .map(|db_err| db_err.message().to_string());

    match violation {
        Some(message) => RepositoryError::Validation(DataValidationError::with_source(
            format!("Invalid product data: {message}"),
            err,
        )),
        None => {
            error!(error = %err, "database failure");
            RepositoryError::database_error(err)
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    #[instrument(skip_all, fields(name = %product.name))]
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.name())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error);

        let id = finish(tx, result).await?;
        product.id = Some(id);
        debug!(id, "product created");
        Ok(())
    }

    #[instrument(skip_all, fields(id = ?product.id))]
    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or_else(|| {
            DataValidationError::new("Update called with empty ID field")
        })?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            r#"UPDATE products
            SET name = $2, description = $3, price = $4, available = $5, category = $6
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.name())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)
        .and_then(|done| match done.rows_affected() {
            0 => Err(RepositoryError::not_found()),
            _ => Ok(()),
        });

        finish(tx, result).await
    }

    #[instrument(skip_all, fields(id = ?product.id))]
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or_else(|| {
            DataValidationError::new("Delete called with empty ID field")
        })?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|done| {
                debug!(rows = done.rows_affected(), "product delete executed");
            })
            .map_err(map_sqlx_error);

        finish(tx, result).await
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("{SELECT_PRODUCTS} ORDER BY id");
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{SELECT_PRODUCTS} WHERE id = $1");
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("name = $1", name.to_string()).await
    }

    #[instrument(skip(self))]
    async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("available = $1", available).await
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("category = $1", category.name()).await
    }

    #[instrument(skip(self))]
    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("price = $1", price.clone()).await
    }
}
