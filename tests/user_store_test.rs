//! Integration test of a small user store written against the public seams
//!
//! The store only knows `CollectionAdapter` and `PasswordHasher`; the test runs it
//! over an in-memory collection and the real bcrypt hasher, the way a downstream
//! service would test its own code without a MongoDB server.

use async_trait::async_trait;
use common_service::adapters::database::{
    CollectionAdapter, Cursor, CursorExt, DeleteOutcome, InsertOutcome, MemoryCursor,
    MemorySingleResult, SingleResult, SingleResultExt, UpdateOutcome,
};
use common_service::crypto::{BcryptHasher, PasswordHasher};
use common_service::domain::{DatabaseError, Result, ServiceError};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{
    DeleteOptions, FindOneOptions, FindOptions, InsertOneOptions, UpdateModifications,
    UpdateOptions,
};
use serde::Deserialize;
use std::sync::Mutex;

/// Collection double supporting equality filters and `$set` updates
#[derive(Default)]
struct InMemoryCollection {
    documents: Mutex<Vec<Document>>,
}

fn filter_matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl CollectionAdapter for InMemoryCollection {
    async fn insert_one(
        &self,
        mut document: Document,
        _options: Option<InsertOneOptions>,
    ) -> std::result::Result<InsertOutcome, DatabaseError> {
        let id = Bson::ObjectId(ObjectId::new());
        document.insert("_id", id.clone());
        self.documents.lock().unwrap().push(document);
        Ok(InsertOutcome { inserted_id: id })
    }

    async fn update_one(
        &self,
        filter: Document,
        update: UpdateModifications,
        _options: Option<UpdateOptions>,
    ) -> std::result::Result<UpdateOutcome, DatabaseError> {
        let UpdateModifications::Document(update) = update else {
            return Err(DatabaseError::UpdateFailed("pipelines unsupported".to_string()));
        };
        let set = update
            .get_document("$set")
            .map_err(|e| DatabaseError::UpdateFailed(e.to_string()))?;

        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|d| filter_matches(d, &filter)) {
            Some(document) => {
                for (key, value) in set {
                    document.insert(key.clone(), value.clone());
                }
                Ok(UpdateOutcome {
                    matched_count: 1,
                    modified_count: 1,
                    upserted_id: None,
                })
            }
            None => Ok(UpdateOutcome::default()),
        }
    }

    async fn delete_one(
        &self,
        filter: Document,
        _options: Option<DeleteOptions>,
    ) -> std::result::Result<DeleteOutcome, DatabaseError> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter().position(|d| filter_matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(DeleteOutcome { deleted_count: 1 })
            }
            None => Ok(DeleteOutcome::default()),
        }
    }

    async fn find_one(
        &self,
        filter: Document,
        _options: Option<FindOneOptions>,
    ) -> Box<dyn SingleResult> {
        let documents = self.documents.lock().unwrap();
        match documents.iter().find(|d| filter_matches(d, &filter)) {
            Some(document) => Box::new(MemorySingleResult::found(document.clone())),
            None => Box::new(MemorySingleResult::missing()),
        }
    }

    async fn find(
        &self,
        filter: Document,
        _options: Option<FindOptions>,
    ) -> std::result::Result<Box<dyn Cursor>, DatabaseError> {
        let documents = self.documents.lock().unwrap();
        let matching = documents
            .iter()
            .filter(|d| filter_matches(d, &filter))
            .cloned()
            .collect();
        Ok(Box::new(MemoryCursor::new(matching)))
    }
}

#[derive(Debug, Deserialize)]
struct User {
    email: String,
    password_hash: String,
    role: String,
}

/// The code under test: depends only on the traits
struct UserStore<'a> {
    users: &'a dyn CollectionAdapter,
    hasher: &'a dyn PasswordHasher,
}

impl UserStore<'_> {
    async fn register(&self, email: &str, password: &str, role: &str) -> Result<()> {
        let digest = self.hasher.hash(password)?;
        self.users
            .insert_one(
                doc! { "email": email, "password_hash": digest, "role": role },
                None,
            )
            .await?;
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user: User = self
            .users
            .find_one(doc! { "email": email }, None)
            .await
            .decode()?;
        self.hasher.verify(password, &user.password_hash)?;
        Ok(user)
    }

    async fn change_password(&self, email: &str, password: &str) -> Result<bool> {
        let digest = self.hasher.hash(password)?;
        let outcome = self
            .users
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "password_hash": digest } }.into(),
                None,
            )
            .await?;
        Ok(outcome.modified_count == 1)
    }

    async fn emails_with_role(&self, role: &str) -> Result<Vec<String>> {
        let mut cursor = self.users.find(doc! { "role": role }, None).await?;
        let users: Vec<User> = cursor.drain_all_as().await?;
        Ok(users.into_iter().map(|u| u.email).collect())
    }
}

fn hasher() -> BcryptHasher {
    BcryptHasher::with_cost(4).unwrap()
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let users = InMemoryCollection::default();
    let hasher = hasher();
    let store = UserStore {
        users: &users,
        hasher: &hasher,
    };

    store.register("ada@example.com", "engine", "admin").await.unwrap();

    let user = store.authenticate("ada@example.com", "engine").await.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, "admin");
    assert!(user.password_hash.starts_with("$2b$04$"));
}

#[tokio::test]
async fn test_wrong_password_is_mismatch() {
    let users = InMemoryCollection::default();
    let hasher = hasher();
    let store = UserStore {
        users: &users,
        hasher: &hasher,
    };

    store.register("ada@example.com", "engine", "admin").await.unwrap();

    let err = store
        .authenticate("ada@example.com", "difference")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Credential(ref e) if e.is_mismatch()));
}

#[tokio::test]
async fn test_unknown_user_is_no_document() {
    let users = InMemoryCollection::default();
    let hasher = hasher();
    let store = UserStore {
        users: &users,
        hasher: &hasher,
    };

    let err = store.authenticate("nobody@example.com", "x").await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Database(DatabaseError::NoDocument)
    ));
}

#[tokio::test]
async fn test_change_password() {
    let users = InMemoryCollection::default();
    let hasher = hasher();
    let store = UserStore {
        users: &users,
        hasher: &hasher,
    };

    store.register("ada@example.com", "engine", "admin").await.unwrap();
    assert!(store.change_password("ada@example.com", "analytical").await.unwrap());
    assert!(!store.change_password("nobody@example.com", "x").await.unwrap());

    assert!(store.authenticate("ada@example.com", "engine").await.is_err());
    assert!(store
        .authenticate("ada@example.com", "analytical")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_query_by_role_and_delete() {
    let users = InMemoryCollection::default();
    let hasher = hasher();
    let store = UserStore {
        users: &users,
        hasher: &hasher,
    };

    store.register("ada@example.com", "a", "admin").await.unwrap();
    store.register("alan@example.com", "b", "member").await.unwrap();
    store.register("grace@example.com", "c", "admin").await.unwrap();

    let admins = store.emails_with_role("admin").await.unwrap();
    assert_eq!(admins, vec!["ada@example.com", "grace@example.com"]);

    let deleted = users
        .delete_one(doc! { "email": "ada@example.com" }, None)
        .await
        .unwrap();
    assert_eq!(deleted.deleted_count, 1);
    assert_eq!(
        store.emails_with_role("admin").await.unwrap(),
        vec!["grace@example.com"]
    );
}
