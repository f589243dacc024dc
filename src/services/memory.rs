//! In-memory `UserRepository` for handler tests.

use super::user_service::UserRepository;
use crate::{
    models::{parse_user_id, DeleteAck, NewUser, UpdateAck, User, UserChanges},
    utils::AppError,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: Some(ObjectId::new()),
            name: user.name,
            age: user.age,
            email: user.email,
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_user_id(id)?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn update(&self, id: &str, changes: UserChanges) -> Result<UpdateAck, AppError> {
        let object_id = parse_user_id(id)?;
        let mut users = self.users.write().await;

        let Some(user) = users.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let before = (user.name.clone(), user.age, user.email.clone());
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(age) = changes.age {
            user.age = age;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        let modified = before != (user.name.clone(), user.age, user.email.clone());

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, AppError> {
        let object_id = parse_user_id(id)?;
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != Some(object_id));

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - users.len()) as u64,
        })
    }
}
