//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::{AuthorFilter, AuthorRepository};
use crate::error::AppError;

const AUTHOR_COLUMNS: &str = "id, name, email, created_at, updated_at";

/// PostgreSQL repository for authors.
///
/// Listings are assembled with [`QueryBuilder`] because ordering columns vary
/// per request; every user-supplied value is bound, never interpolated.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Wraps a value in `%..%` for `LIKE`, matching wildcards in it literally.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &AuthorFilter) {
    builder.push(" WHERE TRUE");

    if let Some(name) = &filter.name {
        builder.push(" AND name = ").push_bind(name.clone());
    }

    if let Some(email) = &filter.email {
        builder.push(" AND email = ").push_bind(email.clone());
    }

    for term in &filter.search_terms {
        builder
            .push(" AND email ILIKE ")
            .push_bind(contains_pattern(term))
            .push(" ESCAPE '\\'");
    }
}

fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, filter: &AuthorFilter) {
    builder.push(" ORDER BY ");
    for ordering in &filter.ordering {
        builder
            .push(ordering.field.column())
            .push(if ordering.descending { " DESC, " } else { " ASC, " });
    }
    builder.push("id ASC");
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            "INSERT INTO authors (name, email) VALUES ($1, $2) RETURNING {AUTHOR_COLUMNS}"
        ))
        .bind(new_author.name)
        .bind(new_author.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(author)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, AppError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(author)
    }

    async fn list(&self, filter: AuthorFilter) -> Result<Vec<Author>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors"
        ));
        push_conditions(&mut builder, &filter);
        push_ordering(&mut builder, &filter);

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }
        if filter.offset > 0 {
            builder.push(" OFFSET ").push_bind(filter.offset);
        }

        let authors = builder
            .build_query_as::<Author>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(authors)
    }

    async fn count(&self, filter: AuthorFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM authors");
        push_conditions(&mut builder, &filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Option<Author>, AppError> {
        let author = sqlx::query_as::<_, Author>(&format!(
            r#"
            UPDATE authors SET
                name       = COALESCE($2, name),
                email      = COALESCE($3, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {AUTHOR_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(author)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
