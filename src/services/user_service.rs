// ==================== USERS PERSISTENCE ====================
// Uma operação no MongoDB por chamada; sem regra de negócio

use crate::{
    database::MongoDB,
    models::{parse_user_id, DeleteAck, NewUser, UpdateAck, User, UserChanges},
    utils::AppError,
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

pub const USERS_COLLECTION: &str = "users";

/// Acesso aos usuários. Ids chegam como texto e são validados aqui.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// `Ok(None)` when no user has this id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Sets only the provided fields
    async fn update(&self, id: &str, changes: UserChanges) -> Result<UpdateAck, AppError>;

    async fn delete(&self, id: &str) -> Result<DeleteAck, AppError>;
}

pub struct MongoUserRepository {
    db: MongoDB,
}

impl MongoUserRepository {
    pub fn new(db: &MongoDB) -> Self {
        Self { db: db.clone() }
    }

    async fn collection(&self) -> Result<Collection<User>, AppError> {
        self.db.collection::<User>(USERS_COLLECTION).await
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut user = User {
            id: None,
            name: user.name,
            age: user.age,
            email: user.email,
        };

        let result = self.collection().await?.insert_one(&user).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("inserted _id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection().await?.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_user_id(id)?;
        let user = self.collection().await?.find_one(doc! { "_id": object_id }).await?;
        Ok(user)
    }

    async fn update(&self, id: &str, changes: UserChanges) -> Result<UpdateAck, AppError> {
        let object_id = parse_user_id(id)?;
        let result = self
            .collection()
            .await?
            .update_one(doc! { "_id": object_id }, doc! { "$set": set_document(&changes) })
            .await?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, AppError> {
        let object_id = parse_user_id(id)?;
        let result = self.collection().await?.delete_one(doc! { "_id": object_id }).await?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}

/// Constrói o documento `$set` apenas com os campos informados
fn set_document(changes: &UserChanges) -> Document {
    let mut update_doc = Document::new();

    if let Some(name) = &changes.name {
        update_doc.insert("name", name);
    }
    if let Some(age) = changes.age {
        update_doc.insert("age", age);
    }
    if let Some(email) = &changes.email {
        update_doc.insert("email", email);
    }

    update_doc
}
