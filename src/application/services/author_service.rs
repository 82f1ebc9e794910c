//! Author management service.

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::{AuthorFilter, AuthorRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Message returned whenever an author lookup misses.
pub const AUTHOR_NOT_FOUND: &str = "Author not found";

/// Service for author CRUD.
///
/// Enforces e-mail uniqueness before writes so the common case reports a
/// field error instead of relying on the database constraint.
pub struct AuthorService<R: AuthorRepository> {
    repository: Arc<R>,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a new author service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists authors matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_authors(&self, filter: AuthorFilter) -> Result<Vec<Author>, AppError> {
        self.repository.list(filter).await
    }

    /// Counts authors matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_authors(&self, filter: AuthorFilter) -> Result<i64, AppError> {
        self.repository.count(filter).await
    }

    /// Retrieves an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the e-mail is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        if self
            .repository
            .find_by_email(&new_author.email)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_email());
        }

        let author = self.repository.create(new_author).await?;
        tracing::info!(author_id = author.id, "Author created");

        Ok(author)
    }

    /// Replaces every writable field of `current`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the e-mail belongs to another author.
    /// Returns [`AppError::NotFound`] if the author vanished meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_author(
        &self,
        current: &Author,
        replacement: NewAuthor,
    ) -> Result<Author, AppError> {
        self.patch_author(current, replacement.into()).await
    }

    /// Applies a partial update to `current`. An empty patch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the e-mail belongs to another author.
    /// Returns [`AppError::NotFound`] if the author vanished meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn patch_author(
        &self,
        current: &Author,
        patch: AuthorPatch,
    ) -> Result<Author, AppError> {
        if patch.is_empty() {
            return Ok(current.clone());
        }

        if let Some(email) = &patch.email
            && email != &current.email
            && let Some(owner) = self.repository.find_by_email(email).await?
            && owner.id != current.id
        {
            return Err(AppError::duplicate_email());
        }

        let author = self
            .repository
            .update(current.id, patch)
            .await?
            .ok_or_else(|| not_found(current.id))?;
        tracing::info!(author_id = author.id, "Author updated");

        Ok(author)
    }

    /// Deletes an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_author(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(author_id = id, "Author deleted");

        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(AUTHOR_NOT_FOUND, json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAuthorRepository;
    use chrono::Utc;

    fn create_test_author(id: i64, name: &str, email: &str) -> Author {
        Author::new(
            id,
            name.to_string(),
            email.to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn new_author(name: &str, email: &str) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_author_success() {
        let mut mock_repo = MockAuthorRepository::new();

        let author = create_test_author(1, "Leo", "leo@example.com");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(move |_| Ok(Some(author.clone())));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service.get_author(1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Leo");
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let mut mock_repo = MockAuthorRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service.get_author(42).await;

        match result {
            Err(AppError::NotFound { message, details }) => {
                assert_eq!(message, AUTHOR_NOT_FOUND);
                assert_eq!(details["id"], 42);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_author_success() {
        let mut mock_repo = MockAuthorRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "anna@example.com")
            .times(1)
            .returning(|_| Ok(None));

        let created = create_test_author(7, "Anna", "anna@example.com");
        mock_repo
            .expect_create()
            .withf(|new| new.name == "Anna")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service
            .create_author(new_author("Anna", "anna@example.com"))
            .await;

        assert_eq!(result.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_create_author_duplicate_email() {
        let mut mock_repo = MockAuthorRepository::new();

        let existing = create_test_author(1, "Leo", "leo@example.com");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().never();

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service
            .create_author(new_author("Other", "leo@example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_patch_author_keeps_own_email_without_lookup() {
        let mut mock_repo = MockAuthorRepository::new();

        mock_repo.expect_find_by_email().never();
        let updated = create_test_author(1, "Lev", "leo@example.com");
        mock_repo
            .expect_update()
            .withf(|id, patch| *id == 1 && patch.name.as_deref() == Some("Lev"))
            .times(1)
            .returning(move |_, _| Ok(Some(updated.clone())));

        let service = AuthorService::new(Arc::new(mock_repo));
        let current = create_test_author(1, "Leo", "leo@example.com");

        let result = service
            .patch_author(
                &current,
                AuthorPatch {
                    name: Some("Lev".to_string()),
                    email: Some("leo@example.com".to_string()),
                },
            )
            .await;

        assert_eq!(result.unwrap().name, "Lev");
    }

    #[tokio::test]
    async fn test_patch_author_email_taken_by_other() {
        let mut mock_repo = MockAuthorRepository::new();

        let other = create_test_author(2, "Anna", "anna@example.com");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(other.clone())));
        mock_repo.expect_update().never();

        let service = AuthorService::new(Arc::new(mock_repo));
        let current = create_test_author(1, "Leo", "leo@example.com");

        let result = service
            .patch_author(
                &current,
                AuthorPatch {
                    email: Some("anna@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_patch_author_empty_is_noop() {
        let mut mock_repo = MockAuthorRepository::new();
        mock_repo.expect_update().never();

        let service = AuthorService::new(Arc::new(mock_repo));
        let current = create_test_author(1, "Leo", "leo@example.com");

        let result = service
            .patch_author(&current, AuthorPatch::default())
            .await
            .unwrap();

        assert_eq!(result, current);
    }

    #[tokio::test]
    async fn test_replace_author_vanished() {
        let mut mock_repo = MockAuthorRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AuthorService::new(Arc::new(mock_repo));
        let current = create_test_author(1, "Leo", "leo@example.com");

        let result = service
            .replace_author(&current, new_author("Lev", "lev@example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_author_not_found() {
        let mut mock_repo = MockAuthorRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service.delete_author(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_authors_passes_filter_through() {
        let mut mock_repo = MockAuthorRepository::new();

        let authors = vec![
            create_test_author(1, "Leo", "leo@example.com"),
            create_test_author(2, "Anna", "anna@example.com"),
        ];
        mock_repo
            .expect_list()
            .withf(|filter| filter.limit == Some(5) && filter.offset == 5)
            .times(1)
            .returning(move |_| Ok(authors.clone()));

        let service = AuthorService::new(Arc::new(mock_repo));

        let result = service
            .list_authors(AuthorFilter::new().paginate(5, 5))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }
}
