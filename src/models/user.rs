use crate::utils::AppError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Usuário (armazenado no MongoDB, coleção `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Request para criar usuário
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "name": "Juan Perez", "age": 35, "email": "jperes@gmail.com" }))]
pub struct CreateUserRequest {
    /// Nome do usuário
    pub name: String,
    /// Idade do usuário
    pub age: i32,
    /// E-mail do usuário
    pub email: String,
}

/// Request para atualizar usuário; campos ausentes não são alterados
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "age": 36 }))]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

/// Usuário validado, pronto para inserir
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Alterações validadas de um update parcial
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            name: required_text("name", request.name)?,
            age: request.age,
            email: required_text("email", request.email)?,
        })
    }
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = AppError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        if request.name.is_none() && request.age.is_none() && request.email.is_none() {
            return Err(AppError::InvalidRequest(
                "at least one of name, age or email must be provided".to_string(),
            ));
        }

        Ok(UserChanges {
            name: request.name.map(|name| required_text("name", name)).transpose()?,
            age: request.age,
            email: request.email.map(|email| required_text("email", email)).transpose()?,
        })
    }
}

/// Rejeita texto em branco; o valor é guardado como enviado
fn required_text(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Response de usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "6553f1c2a7b3e4d5f6a7b8c9",
    "name": "Juan Perez",
    "age": 35,
    "email": "jperes@gmail.com"
}))]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            age: user.age,
            email: user.email,
        }
    }
}

/// Resultado de um update: contagens, não o documento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Resultado de uma remoção
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Converte o id do path em ObjectId antes de qualquer consulta
pub fn parse_user_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(name: &str, age: i32, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        let user = NewUser::try_from(create_request("Juan Perez", 35, "jperes@gmail.com")).unwrap();
        assert_eq!(user.name, "Juan Perez");
        assert_eq!(user.age, 35);
        assert_eq!(user.email, "jperes@gmail.com");
    }

    #[test]
    fn test_create_keeps_submitted_text_and_any_integer_age() {
        let user = NewUser::try_from(create_request(" Juan Perez ", -1, "jperes@gmail.com ")).unwrap();
        assert_eq!(user.name, " Juan Perez ");
        assert_eq!(user.age, -1);
        assert_eq!(user.email, "jperes@gmail.com ");
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        assert!(matches!(
            NewUser::try_from(create_request("   ", 35, "a@b.c")),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            NewUser::try_from(create_request("Ana", 35, "")),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let missing_email = serde_json::json!({ "name": "Ana", "age": 20 });
        assert!(serde_json::from_value::<CreateUserRequest>(missing_email).is_err());

        let age_as_text = serde_json::json!({ "name": "Ana", "age": "twenty", "email": "a@b.c" });
        assert!(serde_json::from_value::<CreateUserRequest>(age_as_text).is_err());
    }

    #[test]
    fn test_partial_update() {
        let changes = UserChanges::try_from(UpdateUserRequest {
            age: Some(40),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            changes,
            UserChanges {
                name: None,
                age: Some(40),
                email: None
            }
        );
    }

    #[test]
    fn test_empty_update_rejected() {
        assert!(matches!(
            UserChanges::try_from(UpdateUserRequest::default()),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_parse_user_id() {
        let id = ObjectId::new();
        assert_eq!(parse_user_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_user_id("123"), Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_user_response_and_acks_wire_format() {
        let id = ObjectId::new();
        let response = UserResponse::from(User {
            id: Some(id),
            name: "Juan Perez".to_string(),
            age: 35,
            email: "jperes@gmail.com".to_string(),
        });
        assert_eq!(response.id, id.to_hex());

        let ack = serde_json::to_value(UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        })
        .unwrap();
        assert_eq!(
            ack,
            serde_json::json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 0 })
        );

        let ack = serde_json::to_value(DeleteAck {
            acknowledged: true,
            deleted_count: 1,
        })
        .unwrap();
        assert_eq!(ack, serde_json::json!({ "acknowledged": true, "deletedCount": 1 }));
    }
}
